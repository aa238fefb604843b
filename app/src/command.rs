//! Line commands understood by the terminal front end.

use std::str::FromStr;

use thiserror::Error;

pub const HELP: &str = "\
commands:
  average            fetch the average ad cost
  threshold <text>   type into the cost threshold field (empty clears it)
  focus | blur       move focus into or out of the threshold field
  above [text]       list ads above the threshold (optionally typing it first)
  popular            list the most popular ads
  show               redraw the window
  help               this text
  quit               exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Average,
    Threshold(String),
    Focus,
    Blur,
    Above(Option<String>),
    Popular,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command {0:?}, type `help` for the list")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let command = match word.to_ascii_lowercase().as_str() {
            "" | "show" => Command::Show,
            "average" | "avg" => Command::Average,
            "threshold" | "t" => Command::Threshold(rest.to_string()),
            "focus" => Command::Focus,
            "blur" => Command::Blur,
            "above" => Command::Above((!rest.is_empty()).then(|| rest.to_string())),
            "popular" => Command::Popular,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(UnknownCommand(word.to_string())),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_commands() {
        assert_eq!("average".parse::<Command>(), Ok(Command::Average));
        assert_eq!("  POPULAR ".parse::<Command>(), Ok(Command::Popular));
        assert_eq!("".parse::<Command>(), Ok(Command::Show));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn threshold_keeps_inner_text() {
        assert_eq!(
            "threshold 1 234,5".parse::<Command>(),
            Ok(Command::Threshold("1 234,5".to_string()))
        );
        assert_eq!("threshold".parse::<Command>(), Ok(Command::Threshold(String::new())));
    }

    #[test]
    fn above_with_and_without_text() {
        assert_eq!("above".parse::<Command>(), Ok(Command::Above(None)));
        assert_eq!("above 99.5".parse::<Command>(), Ok(Command::Above(Some("99.5".to_string()))));
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            "delete all".parse::<Command>(),
            Err(UnknownCommand("delete".to_string()))
        );
    }
}
