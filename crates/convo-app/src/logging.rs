use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "convo=info";

/// Filter directive for `level`. Targets match by prefix, so `convo` also
/// covers `convo_ai` and `convo_config`.
pub fn directive(level: &str) -> String {
    format!("convo={}", level.to_ascii_lowercase())
}

/// Install the global subscriber. Logs go to stderr so they stay out of the
/// chat scrollback on stdout.
pub fn init(level: &str) {
    let mut filter = EnvFilter::from_default_env();
    match directive(level).parse() {
        Ok(d) => filter = filter.add_directive(d),
        Err(_) => {
            if let Ok(d) = DEFAULT_DIRECTIVE.parse() {
                filter = filter.add_directive(d);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
