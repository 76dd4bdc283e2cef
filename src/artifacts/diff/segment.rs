use crate::artifacts::diff::token::Token;
use std::fmt::Display;

pub const INS_OPEN: &str = "<ins>";
pub const INS_CLOSE: &str = "</ins>";
pub const DEL_OPEN: &str = "<del>";
pub const DEL_CLOSE: &str = "</del>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffSegment {
    Equal(Token),
    Inserted(Token),
    Deleted(Token),
}

impl DiffSegment {
    pub fn token(&self) -> &str {
        match self {
            DiffSegment::Equal(token)
            | DiffSegment::Inserted(token)
            | DiffSegment::Deleted(token) => token,
        }
    }

    /// Markup for this segment followed by its join space.
    pub fn as_markup(&self) -> String {
        match self {
            DiffSegment::Equal(token) => format!("{token} "),
            DiffSegment::Inserted(token) => format!("{INS_OPEN}{token}{INS_CLOSE} "),
            DiffSegment::Deleted(token) => format!("{DEL_OPEN}{token}{DEL_CLOSE} "),
        }
    }
}

impl Display for DiffSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_markup())
    }
}
