use std::error::Error;
use std::fmt;
use std::io;

use tourbook::render::{render_average, render_tree};
use tourbook::{ByPassportCode, BySurname, OrderedTree, Prompter};

const DEFAULT_COUNT: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConfigError {
    MissingValue(String),
    InvalidCount(String),
    UnknownArgument(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue(flag) => write!(f, "{} expects a value", flag),
            ConfigError::InvalidCount(value) => {
                write!(f, "invalid tourist count '{}'", value)
            }
            ConfigError::UnknownArgument(arg) => write!(f, "unknown argument '{}'", arg),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug)]
struct SessionConfig {
    count: usize, // tourists to read
}

impl SessionConfig {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, ConfigError> {
        let mut config = SessionConfig {
            count: DEFAULT_COUNT,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-n" | "--count" => {
                    let value = args.next().ok_or(ConfigError::MissingValue(arg))?;
                    config.count = value
                        .parse()
                        .map_err(|_| ConfigError::InvalidCount(value))?;
                }
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = SessionConfig::from_args(std::env::args().skip(1))?;

    println!("Enter the details of {} tourists:", config.count);
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let tourists = prompter.read_tourists(config.count)?;
    if tourists.len() < config.count {
        println!("\nInput ended after {} tourists.", tourists.len());
    }

    let mut by_surname = OrderedTree::new(BySurname);
    by_surname.extend(tourists);

    println!("\nTree ordered by surname:");
    println!("{}\n", render_tree(&by_surname));
    println!("{}", render_average(&by_surname));

    println!("\nMoving tourists into a tree ordered by passport code...");
    let mut by_passport = OrderedTree::new(ByPassportCode);
    by_passport.extend(by_surname.drain_and_clear());

    println!(
        "Check: the surname tree is {}",
        if by_surname.is_empty() { "empty" } else { "not empty" }
    );

    println!("\nTree ordered by passport code:");
    println!("{}", render_tree(&by_passport));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<SessionConfig, ConfigError> {
        SessionConfig::from_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn session_config_count() {
        assert_eq!(parse(&[]).unwrap().count, DEFAULT_COUNT);
        assert_eq!(parse(&["--count", "3"]).unwrap().count, 3);
        assert_eq!(parse(&["-n", "0"]).unwrap().count, 0);
    }

    #[test]
    fn session_config_errors() {
        assert_eq!(
            parse(&["--count"]).unwrap_err(),
            ConfigError::MissingValue("--count".to_string())
        );
        assert_eq!(
            parse(&["-n", "-2"]).unwrap_err(),
            ConfigError::InvalidCount("-2".to_string())
        );
        assert_eq!(
            parse(&["--verbose"]).unwrap_err(),
            ConfigError::UnknownArgument("--verbose".to_string())
        );
        assert_eq!(
            ConfigError::InvalidCount("x".to_string()).to_string(),
            "invalid tourist count 'x'"
        );
    }
}
