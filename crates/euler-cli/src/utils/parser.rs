use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid problem id '{0}'. Expected a positive integer.")]
    InvalidId(String),

    #[error("Invalid range '{0}'. Expected 'FIRST-LAST' with FIRST <= LAST.")]
    InvalidRange(String),

    #[error("Invalid setting '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),

    #[error("Invalid problem key '{0}'. Expected 'pNNN' (e.g., 'p010').")]
    InvalidProblemKey(String),

    #[error("Invalid integer value for '{key}': '{value}'")]
    InvalidInteger { key: String, value: String },
}

/// Expands id arguments such as `3`, `10-12` or `1-5,67` into a sorted, de-duplicated
/// list.
pub fn parse_id_list<S: AsRef<str>>(specs: &[S]) -> Result<Vec<u32>, ParseError> {
    let mut ids = BTreeSet::new();
    for spec in specs {
        for part in spec.as_ref().split(',').map(str::trim) {
            if part.is_empty() {
                continue;
            }
            match part.split_once('-') {
                Some((first, last)) => {
                    let invalid = || ParseError::InvalidRange(part.to_string());
                    let first = parse_id(first).map_err(|_| invalid())?;
                    let last = parse_id(last).map_err(|_| invalid())?;
                    if first > last {
                        return Err(invalid());
                    }
                    ids.extend(first..=last);
                }
                None => {
                    ids.insert(parse_id(part)?);
                }
            }
        }
    }
    Ok(ids.into_iter().collect())
}

fn parse_id(s: &str) -> Result<u32, ParseError> {
    match s.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ParseError::InvalidId(s.to_string())),
    }
}

/// Splits `KEY=VALUE` at the first `=`.
pub fn parse_key_value(s: &str) -> Result<(&str, &str), ParseError> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ParseError::InvalidKeyValue(s.to_string())),
    }
}

/// Accepts `p10`, `p010` or `P010`.
pub fn parse_problem_key(s: &str) -> Result<u32, ParseError> {
    s.strip_prefix(['p', 'P'])
        .and_then(|digits| parse_id(digits).ok())
        .ok_or_else(|| ParseError::InvalidProblemKey(s.to_string()))
}

/// Parses a parameter value; `_` separators are allowed, as in TOML.
pub fn parse_integer(key: &str, value: &str) -> Result<i64, ParseError> {
    value
        .replace('_', "")
        .parse()
        .map_err(|_| ParseError::InvalidInteger {
            key: key.to_string(),
            value: value.to_string(),
        })
}
