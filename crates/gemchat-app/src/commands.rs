//! Maps REPL input lines to commands.

use gemchat_common::InboundEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(InboundEvent),
    ListModels,
    History,
    ShowConfig,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one line. Anything not starting with `/` is a chat message.
pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Event(InboundEvent::SubmitMessage(line.trim_end().to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "model" if arg.is_empty() => Command::ListModels,
        "model" => Command::Event(InboundEvent::SelectModel(arg.to_string())),
        "models" => Command::ListModels,
        "system" => Command::Event(InboundEvent::SetSystemInstruction(arg.to_string())),
        "reset" | "clear" => Command::Event(InboundEvent::ResetConversation),
        "history" => Command::History,
        "config" => Command::ShowConfig,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

pub const HELP: &str = "\
Commands:
  /model <id>      switch model (history is kept)
  /models          list selectable models
  /system <text>   set the system instruction (empty clears it)
  /reset           clear the conversation
  /history         show the conversation so far
  /config          show the active model configuration
  /help            show this help
  /quit            exit
Anything else is sent to the model.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_message() {
        assert_eq!(
            parse("Hello there\n"),
            Command::Event(InboundEvent::SubmitMessage("Hello there".into()))
        );
    }

    #[test]
    fn blank_line_is_an_empty_message() {
        assert_eq!(
            parse("   "),
            Command::Event(InboundEvent::SubmitMessage(String::new()))
        );
    }

    #[test]
    fn model_commands() {
        assert_eq!(
            parse("/model gemini-2.5-pro"),
            Command::Event(InboundEvent::SelectModel("gemini-2.5-pro".into()))
        );
        assert_eq!(parse("/model"), Command::ListModels);
        assert_eq!(parse("/models"), Command::ListModels);
    }

    #[test]
    fn system_keeps_inner_whitespace() {
        assert_eq!(
            parse("/system  Be terse.  Always. "),
            Command::Event(InboundEvent::SetSystemInstruction("Be terse.  Always.".into()))
        );
        assert_eq!(
            parse("/system"),
            Command::Event(InboundEvent::SetSystemInstruction(String::new()))
        );
    }

    #[test]
    fn misc_commands() {
        assert_eq!(parse("/reset"), Command::Event(InboundEvent::ResetConversation));
        assert_eq!(parse("/clear"), Command::Event(InboundEvent::ResetConversation));
        assert_eq!(parse("/history"), Command::History);
        assert_eq!(parse("/config"), Command::ShowConfig);
        assert_eq!(parse("/help"), Command::Help);
        assert_eq!(parse("/quit"), Command::Quit);
        assert_eq!(parse("/frobnicate"), Command::Unknown("frobnicate".into()));
    }
}
