use std::str::FromStr;

use product_core::FormField;

pub const HELP: &str = "\
commands:
  list | refresh          reload products from the server
  add                     start a new product (leaves edit mode)
  edit N                  edit product number N
  delete N                delete product number N (asks first)
  set FIELD VALUE         set name, price or description in the form
  submit                  create or update from the form
  cancel                  leave edit mode without saving
  help                    show this text
  quit                    exit
";

/// One line of user input. Card numbers are 1-based as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Add,
    Edit(usize),
    Delete(usize),
    Set(FormField, String),
    Submit,
    Cancel,
    Help,
    Quit,
}

fn card_number(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a product number, got {arg:?}")),
    }
}

fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (word, rest) = split_word(line.trim());
        match word.to_ascii_lowercase().as_str() {
            "list" | "refresh" => Ok(Command::Refresh),
            "add" | "new" => Ok(Command::Add),
            "edit" => card_number(rest).map(Command::Edit),
            "delete" | "rm" => card_number(rest).map(Command::Delete),
            "set" => {
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err("usage: set FIELD VALUE".to_string());
                }
                Ok(Command::Set(field.parse()?, value.to_string()))
            }
            "submit" | "save" => Ok(Command::Submit),
            "cancel" => Ok(Command::Cancel),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("unknown command: {other} (try `help`)")),
        }
    }
}
