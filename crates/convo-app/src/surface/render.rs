//! Text rendering of turns and transcripts.

use chrono::{DateTime, Utc};
use convo_ai::{Conversation, Role, Turn};

pub fn speaker(role: Role) -> &'static str {
    match role {
        Role::User => "you",
        Role::Assistant => "assistant",
    }
}

/// One scrollback entry, e.g. `assistant> 4`.
pub fn turn_line(turn: &Turn) -> String {
    format!("{}> {}", speaker(turn.role()), turn.content())
}

pub fn scrollback(conversation: &Conversation) -> String {
    conversation
        .turns()
        .iter()
        .map(turn_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Markdown transcript written by `/download`.
pub fn markdown(conversation: &Conversation, exported_at: DateTime<Utc>) -> String {
    let mut out = format!(
        "# Conversation {}\n\n_Exported {}_\n",
        conversation.id().short(),
        exported_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    for turn in conversation.turns() {
        let label = match turn.role() {
            Role::User => "User",
            Role::Assistant => "Assistant",
        };
        out.push_str(&format!("\n**{label}:** {}\n", turn.content()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Conversation {
        let mut c = Conversation::new();
        c.push(Turn::user("Hello"));
        c.push(Turn::assistant("Hi there"));
        c
    }

    #[test]
    fn turn_lines() {
        assert_eq!(turn_line(&Turn::user("Hello")), "you> Hello");
        assert_eq!(turn_line(&Turn::assistant("4")), "assistant> 4");
    }

    #[test]
    fn scrollback_in_order() {
        assert_eq!(scrollback(&sample()), "you> Hello\nassistant> Hi there");
        assert_eq!(scrollback(&Conversation::new()), "");
    }

    #[test]
    fn markdown_transcript() {
        let convo = sample();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let md = markdown(&convo, at);
        assert!(md.starts_with(&format!("# Conversation {}", convo.id().short())));
        assert!(md.contains("_Exported 2024-05-01 12:30:00 UTC_"));
        let user = md.find("**User:** Hello").unwrap();
        let assistant = md.find("**Assistant:** Hi there").unwrap();
        assert!(user < assistant);
    }
}
