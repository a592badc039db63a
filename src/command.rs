//! Command parsing for the line-oriented demo driver.
//!
//! One command per line:
//! - `put <key> <value>` - store a value (the value may contain spaces)
//! - `get <key>` - print the value or `None`
//! - `stats` - print statistics as JSON
//! - `print` - list the current entries
//! - `quit` - stop reading input

use crate::error::{CacheError, Result};

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Put { key: String, value: String },
    Get { key: String },
    Stats,
    Print,
    Quit,
}

impl Command {
    /// Parses a single input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "put" => {
                let (key, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(key, value)| (key, value.trim()))
                    .filter(|(_, value)| !value.is_empty())
                    .ok_or_else(|| {
                        CacheError::InvalidCommand(format!(
                            "usage: put <key> <value>, got '{line}'"
                        ))
                    })?;
                Command::Put {
                    key: key.to_string(),
                    value: value.to_string(),
                }
            }
            "get" if !rest.is_empty() && !rest.contains(char::is_whitespace) => Command::Get {
                key: rest.to_string(),
            },
            "get" => {
                return Err(CacheError::InvalidCommand(format!(
                    "usage: get <key>, got '{line}'"
                )))
            }
            "stats" if rest.is_empty() => Command::Stats,
            "print" if rest.is_empty() => Command::Print,
            "quit" | "exit" if rest.is_empty() => Command::Quit,
            _ => return Err(CacheError::InvalidCommand(line.to_string())),
        };

        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_put() {
        assert_eq!(
            Command::parse("put A Hello").unwrap(),
            Some(Command::Put {
                key: "A".to_string(),
                value: "Hello".to_string()
            })
        );
    }

    #[test]
    fn test_parse_put_value_with_spaces() {
        assert_eq!(
            Command::parse("  PUT  page1   hello world ").unwrap(),
            Some(Command::Put {
                key: "page1".to_string(),
                value: "hello world".to_string()
            })
        );
    }

    #[test]
    fn test_parse_put_missing_value() {
        assert!(matches!(
            Command::parse("put onlykey"),
            Err(CacheError::InvalidCommand(_))
        ));
        assert!(matches!(Command::parse("put"), Err(CacheError::InvalidCommand(_))));
    }

    #[test]
    fn test_parse_get() {
        assert_eq!(
            Command::parse("get A").unwrap(),
            Some(Command::Get {
                key: "A".to_string()
            })
        );
        assert!(Command::parse("get").is_err());
        assert!(Command::parse("get a b").is_err());
    }

    #[test]
    fn test_parse_simple_verbs() {
        assert_eq!(Command::parse("stats").unwrap(), Some(Command::Stats));
        assert_eq!(Command::parse("print").unwrap(), Some(Command::Print));
        assert_eq!(Command::parse("quit").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_blank_and_unknown() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(
            Command::parse("delete A"),
            Err(CacheError::InvalidCommand("delete A".to_string()))
        );
    }
}
