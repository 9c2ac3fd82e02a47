use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParserError;

/// Binding context a documented member is declared under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Attached to the constructor/namespace itself.
    Static,
    /// Instance member, reached through the prototype.
    Proto,
    Class,
    Page,
}

impl Scope {
    pub const ALL: [Self; 4] = [Self::Static, Self::Proto, Self::Class, Self::Page];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Proto => "proto",
            Self::Class => "class",
            Self::Page => "page",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "proto" | "prototype" => Ok(Self::Proto),
            "class" => Ok(Self::Class),
            "page" => Ok(Self::Page),
            _ => Err(ParserError::UnknownScope(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("static", Scope::Static)]
    #[case("Static", Scope::Static)]
    #[case("proto", Scope::Proto)]
    #[case("prototype", Scope::Proto)]
    #[case(" class ", Scope::Class)]
    #[case("PAGE", Scope::Page)]
    fn parses_scope_keywords(#[case] input: &str, #[case] expected: Scope) {
        assert_eq!(input.parse::<Scope>().expect("known scope"), expected);
    }

    #[test]
    fn unknown_keyword_is_an_error() {
        let err = "global".parse::<Scope>().expect_err("not a scope");
        assert!(matches!(err, ParserError::UnknownScope(ref s) if s == "global"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for scope in Scope::ALL {
            assert_eq!(scope.to_string().parse::<Scope>().ok(), Some(scope));
        }
    }
}
