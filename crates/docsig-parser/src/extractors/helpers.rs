//! Name normalization and parameter tokenizing shared by the match rules.

use regex::Regex;
use std::sync::LazyLock;

use super::rules::RawName;
use crate::types::SignatureRecord;

static PARAM_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("PARAM_TOKEN_RE regex is invalid"));

/// Receiver prefix dropped from member assignments.
const THIS_PREFIX: &str = "this.";

/// Shorthand namespace prefix and the canonical library name it stands for.
///
/// A single literal rewrite for jQuery-style code, not an alias table.
const DOLLAR_PREFIX: &str = "$.";
const DOLLAR_CANONICAL: &str = "jQuery.";

/// Turn a captured name into the name recorded for the method.
pub fn normalize_name(raw: RawName<'_>) -> String {
    match raw {
        RawName::Bare(name) => normalize_bare(name),
        RawName::Quoted(literal) => normalize_quoted(literal),
    }
}

fn normalize_bare(name: &str) -> String {
    let name = name.strip_prefix(THIS_PREFIX).unwrap_or(name);
    match name.strip_prefix(DOLLAR_PREFIX) {
        Some(rest) => format!("{DOLLAR_CANONICAL}{rest}"),
        None => name.to_string(),
    }
}

/// Strip the surrounding quotes and escape characters that would otherwise
/// read as namespace separators or markup when rendered.
fn normalize_quoted(literal: &str) -> String {
    let mut chars = literal.chars();
    chars.next();
    chars.next_back();
    escape_quoted_name(chars.as_str())
}

fn escape_quoted_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            '.' => out.push_str("&#46;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Add one positional parameter per word token in `params_text`.
///
/// Anything that is not a word token (commas, default values' operators,
/// comments' slashes) is skipped; an empty or malformed list adds nothing.
pub fn push_params(record: &mut SignatureRecord, params_text: &str) {
    for token in PARAM_TOKEN_RE.find_iter(params_text) {
        record.push_param(token.as_str());
    }
}
