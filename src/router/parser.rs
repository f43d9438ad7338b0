//! Command parsing
//!
//! A message is a command when its text starts with the prefix character.
//! The first whitespace-delimited token is the command name, case-sensitive
//! and including the prefix; the remaining tokens are the arguments.

/// Marks the first token of a command message.
pub const COMMAND_PREFIX: char = '!';

/// A parsed command: prefix-marked name plus ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Parses normalized text into a command, or `None` when the text is not
/// prefix-marked. The prefix must be the very first character; leading
/// whitespace disqualifies the text.
pub fn parse_command(text: &str) -> Option<ParsedCommand> {
    if !text.starts_with(COMMAND_PREFIX) {
        return None;
    }

    let mut tokens = text.split_whitespace();
    let name = tokens.next()?.to_string();
    let args = tokens.map(str::to_string).collect();

    Some(ParsedCommand { name, args })
}
