use crate::error::{Error, Result};

/// What a single command line token turned out to be
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    /// First non-flag token; flag parsing stops here
    Operand,
    /// `--` on its own; flag parsing stops and the token is dropped
    Terminator,
    /// `-name`, `--name`, `-name=value` or `--name=value`
    Flag { name: String, value: Option<String> },
}

/// Convert a command line token into a Token. One or two leading dashes
/// mean the same thing; the name ends at the first '='.
pub fn classify(text: &str) -> Result<Token> {
    if text.len() < 2 || !text.starts_with('-') {
        return Ok(Token::Operand);
    }
    if text == "--" {
        return Ok(Token::Terminator);
    }

    let body = text
        .strip_prefix("--")
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);

    if body.is_empty() || body.starts_with('-') || body.starts_with('=') {
        return Err(Error::BadSyntax(text.to_owned()));
    }

    let token = match body.split_once('=') {
        Some((name, value)) => Token::Flag {
            name: name.to_owned(),
            value: Some(value.to_owned()),
        },
        None => Token::Flag {
            name: body.to_owned(),
            value: None,
        },
    };

    Ok(token)
}

/// Boolean literals accepted by `-flag=value` on a presence-only flag
pub fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
