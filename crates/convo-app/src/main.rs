mod cli;
mod dotenv;
mod logging;
mod surface;

use std::sync::Arc;
use std::time::Duration;

use convo_ai::{
    ConversationController, FailurePolicy, OpenAiClient, OpenAiConfig, WhisperClient, WhisperConfig,
};
use convo_common::{ConfigError, ConvoError};
use convo_config::{CompletionErrorPolicy, ConvoConfig};

use surface::{ChatSurface, SurfaceOptions};

fn apply_overrides(config: &mut ConvoConfig, args: &cli::Args) {
    if let Some(ref model) = args.model {
        config.completion.model = model.clone();
    }
    if let Some(temperature) = args.temperature {
        config.completion.temperature = temperature;
    }
    if args.no_stream {
        config.completion.stream = false;
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
}

/// Load the config file, apply command-line overrides, then validate the
/// result once.
fn resolve_config(args: &cli::Args) -> Result<ConvoConfig, ConfigError> {
    let mut config = convo_config::load_config(args.config.as_deref())?;
    apply_overrides(&mut config, args);
    convo_config::validation::validate(&config)?;
    Ok(config)
}

fn failure_policy(policy: CompletionErrorPolicy) -> FailurePolicy {
    match policy {
        CompletionErrorPolicy::Keep => FailurePolicy::KeepUserTurn,
        CompletionErrorPolicy::Rollback => FailurePolicy::RollBack,
    }
}

fn build_controller(
    config: &ConvoConfig,
    api_key: &str,
) -> Result<ConversationController, ConvoError> {
    let c = &config.completion;
    let completion = OpenAiClient::new(
        OpenAiConfig::new(api_key)
            .with_model(&c.model)
            .with_temperature(c.temperature)
            .with_max_tokens(c.max_tokens)
            .with_system_prompt(c.system_prompt.clone())
            .with_api_base(&c.api_base)
            .with_timeout(Duration::from_secs(c.timeout_secs)),
    )?;

    let t = &config.transcription;
    let transcription = WhisperClient::new(
        WhisperConfig::new(api_key)
            .with_model(&t.model)
            .with_language(t.language.clone())
            .with_api_base(t.api_base.as_deref().unwrap_or(&c.api_base))
            .with_timeout(Duration::from_secs(t.timeout_secs)),
    )?;

    Ok(
        ConversationController::new(Arc::new(completion), Arc::new(transcription))
            .with_failure_policy(failure_policy(config.chat.on_completion_error))
            .with_provider(&c.model),
    )
}

async fn run(config: ConvoConfig) -> Result<(), ConvoError> {
    // Missing credential is fatal before any request is made.
    let api_key = convo_config::resolve_api_key(&config.auth.api_key_env)?;
    let controller = build_controller(&config, &api_key)?;

    let mut surface = ChatSurface::new(
        controller,
        std::io::stdout(),
        SurfaceOptions {
            title: config.completion.model.clone(),
            stream: config.completion.stream,
            download_path: config.chat.download_path.clone().into(),
        },
    );

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    surface.run(stdin).await
}

#[tokio::main]
async fn main() {
    // Load .env before reading any configuration
    let env_file = dotenv::load();

    let args = cli::parse();

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("convo: {e}");
            std::process::exit(2);
        }
    };

    logging::init(&config.logging.level);
    tracing::info!("convo v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(path) = env_file {
        tracing::debug!("loaded environment from {}", path.display());
    }

    if let Err(e) = run(config).await {
        tracing::error!("{e}");
        eprintln!("convo: {e}");
        std::process::exit(1);
    }
    tracing::info!("shutdown complete");
}
