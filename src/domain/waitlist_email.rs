//! src/domain/waitlist_email.rs
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Empty email")]
    Empty,
    #[error("{0}")]
    Invalid(String),
}

/// An email address accepted onto the waitlist, held in its normalized form:
/// trimmed and lower-cased. The caller-supplied casing and surrounding
/// whitespace never leave `parse`.
#[derive(Debug, Clone, Serialize)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    /// Checks the candidate against the signup form's shape rule: one or more
    /// characters that are neither whitespace nor `@`, a literal `@`, one or
    /// more characters that are neither whitespace nor `@`, a literal `.`,
    /// then at least two non-whitespace characters. Purely syntactic; no
    /// DNS or mailbox verification. Single-character suffixes after the
    /// final dot (`user@domain.c`) are rejected.
    pub fn parse(s: String) -> Result<Self, Error> {
        let candidate = s.trim();
        if candidate.is_empty() {
            return Err(Error::Empty);
        }

        if has_valid_shape(candidate) {
            Ok(Self(candidate.to_lowercase()))
        } else {
            Err(Error::Invalid(format!("Invalid email: {}", s)))
        }
    }
}

fn has_valid_shape(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, rest)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }

    // The part between `@` and the separating dot may not contain a second
    // `@`; the suffix after the dot only has to be non-whitespace. The
    // earliest eligible dot leaves the longest suffix, so checking it alone
    // is enough.
    let domain_end = rest.find('@').unwrap_or(rest.len());
    let separating_dot = rest[..domain_end]
        .char_indices()
        .find(|&(i, c)| i > 0 && c == '.')
        .map(|(i, _)| i);

    match separating_dot {
        Some(dot) => rest[dot + 1..].chars().count() >= 2,
        None => false,
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WaitlistEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
