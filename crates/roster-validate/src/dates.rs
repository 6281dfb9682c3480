//! Hire-date format engine.
//!
//! A [`DateFormat`] is compiled once from a pattern string using the tokens
//! `YYYY`, `MM`, and `DD` plus literal separator characters (the default is
//! `YYYY-MM-DD`). Parsing distinguishes two failure causes so diagnostics
//! can name them separately: the value not matching the pattern shape, and
//! the value matching the shape but naming a day that does not exist on the
//! calendar (e.g. `2024-02-30`).

use chrono::NaiveDate;
use thiserror::Error;

/// Error compiling a date pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A letter that is not part of a `YYYY`/`MM`/`DD` token.
    #[error("unsupported token '{token}' in date pattern '{pattern}'")]
    UnsupportedToken { token: char, pattern: String },

    /// The pattern must mention each of year, month, and day exactly once.
    #[error("date pattern '{pattern}' must use YYYY, MM, and DD exactly once")]
    BadComponents { pattern: String },
}

/// Why a value failed to parse as a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    /// The value does not match the pattern shape.
    Shape,
    /// The shape matched but the components are not a real calendar date.
    Calendar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Year,
    Month,
    Day,
    Literal(char),
}

/// A compiled date pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct DateFormat {
    pattern: String,
    tokens: Vec<Token>,
}

impl DateFormat {
    /// Compile a pattern such as `YYYY-MM-DD` or `DD/MM/YYYY`.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let mut tokens = Vec::new();
        let mut rest = pattern;
        let (mut years, mut months, mut days) = (0u8, 0u8, 0u8);
        while !rest.is_empty() {
            if let Some(tail) = rest.strip_prefix("YYYY") {
                tokens.push(Token::Year);
                years += 1;
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("MM") {
                tokens.push(Token::Month);
                months += 1;
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("DD") {
                tokens.push(Token::Day);
                days += 1;
                rest = tail;
            } else {
                let ch = rest.chars().next().unwrap_or_default();
                if ch.is_ascii_alphanumeric() {
                    return Err(PatternError::UnsupportedToken {
                        token: ch,
                        pattern: pattern.to_string(),
                    });
                }
                tokens.push(Token::Literal(ch));
                rest = &rest[ch.len_utf8()..];
            }
        }
        if years != 1 || months != 1 || days != 1 {
            return Err(PatternError::BadComponents {
                pattern: pattern.to_string(),
            });
        }
        Ok(Self {
            pattern: pattern.to_string(),
            tokens,
        })
    }

    /// The source pattern string, for diagnostics.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parse a value against the pattern.
    pub fn parse(&self, value: &str) -> Result<NaiveDate, DateError> {
        let mut chars = value.chars().peekable();
        let (mut year, mut month, mut day) = (0i32, 0u32, 0u32);
        for token in &self.tokens {
            match token {
                Token::Year => year = read_digits(&mut chars, 4)? as i32,
                Token::Month => month = read_digits(&mut chars, 2)?,
                Token::Day => day = read_digits(&mut chars, 2)?,
                Token::Literal(expected) => {
                    if chars.next() != Some(*expected) {
                        return Err(DateError::Shape);
                    }
                }
            }
        }
        if chars.next().is_some() {
            return Err(DateError::Shape);
        }
        NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::Calendar)
    }
}

impl Default for DateFormat {
    /// The default pattern, `YYYY-MM-DD`.
    fn default() -> Self {
        Self {
            pattern: "YYYY-MM-DD".to_string(),
            tokens: vec![
                Token::Year,
                Token::Literal('-'),
                Token::Month,
                Token::Literal('-'),
                Token::Day,
            ],
        }
    }
}

fn read_digits(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    width: usize,
) -> Result<u32, DateError> {
    let mut value = 0u32;
    for _ in 0..width {
        match chars.next() {
            Some(ch) if ch.is_ascii_digit() => {
                value = value * 10 + u32::from(ch) - u32::from('0');
            }
            _ => return Err(DateError::Shape),
        }
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_compiled_pattern() {
        let compiled = DateFormat::compile("YYYY-MM-DD").unwrap();
        assert_eq!(compiled, DateFormat::default());
    }
}
