use thiserror::Error;

use crate::errors::FormError;
use crate::models::{ExperienceField, ScalarField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: ScalarField, value: String },
    Experience { index: usize, field: ExperienceField, value: String },
    Add,
    Show,
    Submit,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a valid entry index")]
    BadIndex(String),

    #[error(transparent)]
    Field(#[from] FormError),
}

const SET_USAGE: &str = "set <name|contact|skills> <value>";
const EXP_USAGE: &str =
    "exp <index> <position|company|start_year|end_year|description> <value>";

pub const HELP: &str = "\
commands:
  set <name|contact|skills> <value>      edit a field
  exp <index> <field> <value>            edit an experience entry
                                         (position, company, start_year, end_year, description)
  add                                    append a blank experience entry
  show                                   print the form
  submit                                 generate the PDF
  help                                   this text
  quit                                   leave";

/// Parses one input line. Values keep their inner spacing; an empty value is
/// allowed and clears the field.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (verb, rest) = split_token(line);

    match verb {
        "" => Err(CommandError::Empty),
        "set" => {
            let (field, value) = split_token(rest);
            if field.is_empty() {
                return Err(CommandError::Usage(SET_USAGE));
            }
            Ok(Command::Set {
                field: field.parse()?,
                value: value.to_string(),
            })
        }
        "exp" => {
            let (index, rest) = split_token(rest);
            let (field, value) = split_token(rest);
            if index.is_empty() || field.is_empty() {
                return Err(CommandError::Usage(EXP_USAGE));
            }
            let index = index
                .parse::<usize>()
                .map_err(|_| CommandError::BadIndex(index.to_string()))?;
            Ok(Command::Experience {
                index,
                field: field.parse()?,
                value: value.to_string(),
            })
        }
        "add" => Ok(Command::Add),
        "show" => Ok(Command::Show),
        "submit" => Ok(Command::Submit),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn split_token(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim_start()),
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_inner_spaces() {
        assert_eq!(
            parse_command("set skills Python, SQL"),
            Ok(Command::Set {
                field: ScalarField::Skills,
                value: "Python, SQL".to_string()
            })
        );
    }

    #[test]
    fn test_set_without_value_clears() {
        assert_eq!(
            parse_command("set name"),
            Ok(Command::Set {
                field: ScalarField::Name,
                value: String::new()
            })
        );
    }

    #[test]
    fn test_exp_parses_index_and_field() {
        assert_eq!(
            parse_command("  exp 2 description  Built   things "),
            Ok(Command::Experience {
                index: 2,
                field: ExperienceField::Description,
                value: "Built   things".to_string()
            })
        );
    }

    #[test]
    fn test_exp_errors() {
        assert_eq!(parse_command("exp"), Err(CommandError::Usage(EXP_USAGE)));
        assert_eq!(parse_command("exp 0"), Err(CommandError::Usage(EXP_USAGE)));
        assert_eq!(
            parse_command("exp -1 company Acme"),
            Err(CommandError::BadIndex("-1".to_string()))
        );
        assert_eq!(
            parse_command("exp 0 salary 10"),
            Err(CommandError::Field(FormError::UnknownField("salary".to_string())))
        );
    }

    #[test]
    fn test_simple_verbs() {
        assert_eq!(parse_command("add"), Ok(Command::Add));
        assert_eq!(parse_command("show"), Ok(Command::Show));
        assert_eq!(parse_command("submit"), Ok(Command::Submit));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(
            parse_command("delete 0"),
            Err(CommandError::Unknown("delete".to_string()))
        );
        assert_eq!(parse_command("set"), Err(CommandError::Usage(SET_USAGE)));
    }
}
