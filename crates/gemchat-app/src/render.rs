//! Plain-text rendering of turns, configuration and event outcomes.

use std::io::{self, Write};

use gemchat_ai::{EventOutcome, ModelConfiguration, Speaker, Turn};
use gemchat_common::ModelId;

pub fn banner(out: &mut impl Write, config: &ModelConfiguration) -> io::Result<()> {
    writeln!(out, "Gemini Chat Bot")?;
    configuration(out, config)?;
    writeln!(out, "Type /help for commands.")?;
    writeln!(out)
}

fn label(role: Speaker) -> &'static str {
    match role {
        Speaker::User => "you",
        Speaker::Assistant => "gemini",
    }
}

pub fn turn(out: &mut impl Write, turn: &Turn) -> io::Result<()> {
    writeln!(out, "{}> {}", label(turn.role), turn.content)
}

pub fn history<'a>(
    out: &mut impl Write,
    turns: impl IntoIterator<Item = &'a Turn>,
) -> io::Result<()> {
    let mut empty = true;
    for t in turns {
        turn(out, t)?;
        empty = false;
    }
    if empty {
        writeln!(out, "(no messages yet)")?;
    }
    Ok(())
}

pub fn configuration(out: &mut impl Write, config: &ModelConfiguration) -> io::Result<()> {
    writeln!(out, "model: {}", config.model)?;
    match config.system_instruction {
        Some(ref text) => writeln!(out, "system instruction: {text}"),
        None => writeln!(out, "system instruction: (none)"),
    }
}

pub fn models(out: &mut impl Write, active: ModelId) -> io::Result<()> {
    for id in ModelId::ALL {
        let marker = if id == active { '*' } else { ' ' };
        writeln!(out, "{marker} {id}")?;
    }
    Ok(())
}

pub fn thinking(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Thinking...")?;
    out.flush()
}

pub fn outcome(out: &mut impl Write, outcome: &EventOutcome) -> io::Result<()> {
    match outcome {
        EventOutcome::Ignored => Ok(()),
        EventOutcome::Replied(text) => turn(out, &Turn::assistant(text.as_str())),
        EventOutcome::ReplyFailed(message) => writeln!(out, "error> {message}"),
        EventOutcome::ConfigurationChanged { rebuilt: true } => {
            writeln!(out, "Configuration updated.")
        }
        EventOutcome::ConfigurationChanged { rebuilt: false } => {
            writeln!(out, "Configuration unchanged.")
        }
        EventOutcome::ConfigurationRejected(message) => writeln!(out, "error> {message}"),
        EventOutcome::Reset => writeln!(out, "Conversation cleared."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn history_renders_in_order() {
        let turns = [Turn::user("Hello"), Turn::assistant("Hi")];
        let text = render(|out| history(out, turns.iter()));
        assert_eq!(text, "you> Hello\ngemini> Hi\n");
    }

    #[test]
    fn empty_history_says_so() {
        let text = render(|out| history(out, std::iter::empty()));
        assert_eq!(text, "(no messages yet)\n");
    }

    #[test]
    fn configuration_shows_missing_instruction() {
        let text = render(|out| configuration(out, &ModelConfiguration::default()));
        assert!(text.contains("model: gemini-flash-latest"));
        assert!(text.contains("system instruction: (none)"));
    }

    #[test]
    fn models_marks_active() {
        let text = render(|out| models(out, ModelId::Gemini25Pro));
        assert!(text.contains("* gemini-2.5-pro\n"));
        assert!(text.contains("  gemini-flash-latest\n"));
    }

    #[test]
    fn failures_render_in_place_of_reply() {
        let text = render(|out| {
            outcome(
                out,
                &EventOutcome::ReplyFailed("Could not reach the Gemini API".into()),
            )
        });
        assert_eq!(text, "error> Could not reach the Gemini API\n");
    }

    #[test]
    fn ignored_renders_nothing() {
        assert!(render(|out| outcome(out, &EventOutcome::Ignored)).is_empty());
    }
}
