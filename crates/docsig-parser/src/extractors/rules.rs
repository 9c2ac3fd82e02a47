//! Match rules for method-like declarations.
//!
//! Each rule is a compiled pattern plus the capture-group layout needed to
//! pull out a name and the raw parameter list. Rules are total: a rule either
//! matches somewhere in the input or reports no match.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `name : function(params` or `name = function(params`, where `name` is a
/// dotted identifier or a quoted string.
const ASSIGNMENT_PATTERN: &str =
    r#"(?:([A-Za-z0-9_.$]+)|(["'][^"']+["']))\s*[:=]\s*function\s?\(([^)]*)"#;

/// `function name(params` with an optional `~` before the parenthesis.
const DECLARATION_PATTERN: &str = r"\s*function\s*([A-Za-z0-9_.$]+)\s*(~)?\(([^)]*)";

static ASSIGNMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ASSIGNMENT_PATTERN).expect("ASSIGNMENT_PATTERN regex is invalid")
});
static DECLARATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DECLARATION_PATTERN).expect("DECLARATION_PATTERN regex is invalid")
});

/// `name: function(...)` / `name = function(...)`.
pub static ASSIGNMENT_RULE: MatchRule = MatchRule {
    name: "assignment",
    regex: &ASSIGNMENT_RE,
    bare_group: 1,
    quoted_group: Some(2),
    params_group: 3,
};

/// `function name(...)`. Group 2 holds the tolerated `~` and is never read.
pub static DECLARATION_RULE: MatchRule = MatchRule {
    name: "declaration",
    regex: &DECLARATION_RE,
    bare_group: 1,
    quoted_group: None,
    params_group: 3,
};

/// Rules tried for the `method` doc type, highest priority first.
pub static METHOD_RULES: [&MatchRule; 2] = [&ASSIGNMENT_RULE, &DECLARATION_RULE];

/// A compiled pattern and which capture groups carry what.
#[derive(Debug)]
pub struct MatchRule {
    name: &'static str,
    regex: &'static LazyLock<Regex>,
    bare_group: usize,
    quoted_group: Option<usize>,
    params_group: usize,
}

/// The declared name as captured, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawName<'s> {
    /// Dotted identifier, e.g. `this.show` or `$.fn.plugin`.
    Bare(&'s str),
    /// String literal including its quotes, e.g. `"a.b"`.
    Quoted(&'s str),
}

/// What a rule captured from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch<'s> {
    pub rule: &'static str,
    pub name: RawName<'s>,
    /// Text between the opening parenthesis and the first `)`.
    pub params_text: &'s str,
}

impl MatchRule {
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Find the leftmost declaration this rule recognizes in `source`.
    pub fn apply<'s>(&self, source: &'s str) -> Option<RawMatch<'s>> {
        let caps = self.regex.captures(source)?;
        let name = self.raw_name(&caps)?;
        let params_text = caps.get(self.params_group).map_or("", |m| m.as_str());
        Some(RawMatch {
            rule: self.name,
            name,
            params_text,
        })
    }

    fn raw_name<'s>(&self, caps: &Captures<'s>) -> Option<RawName<'s>> {
        if let Some(bare) = caps.get(self.bare_group) {
            return Some(RawName::Bare(bare.as_str()));
        }
        self.quoted_group
            .and_then(|group| caps.get(group))
            .map(|quoted| RawName::Quoted(quoted.as_str()))
    }
}
