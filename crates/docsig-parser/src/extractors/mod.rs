//! Extraction orchestrator: ordered match rules, first success wins.
//!
//! Extraction never errors. Input with no recognizable declaration yields
//! `None`; a declaration with an empty or unparsable parameter list yields a
//! record with no parameters.

pub(crate) mod helpers;
pub mod rules;

pub use rules::{MatchRule, METHOD_RULES, RawMatch, RawName};

use crate::types::SignatureRecord;

/// Infer the method signature from the source text following a doc comment.
///
/// Tries the assignment form (`name: function(...)`, `name = function(...)`)
/// before the plain `function name(...)` declaration form.
pub fn extract_signature(source: &str) -> Option<SignatureRecord> {
    extract_with_rules(source, &METHOD_RULES)
}

/// Run `rules` in order against `source` and build a record from the first
/// one that matches.
pub fn extract_with_rules(source: &str, rules: &[&MatchRule]) -> Option<SignatureRecord> {
    let Some(raw) = rules.iter().find_map(|rule| rule.apply(source)) else {
        tracing::trace!(len = source.len(), "no declaration recognized");
        return None;
    };
    let record = build_record(&raw);
    tracing::debug!(
        rule = raw.rule,
        name = %record.name,
        params = record.params.len(),
        "signature extracted"
    );
    Some(record)
}

fn build_record(raw: &RawMatch<'_>) -> SignatureRecord {
    let mut record = SignatureRecord::new(helpers::normalize_name(raw.name));
    helpers::push_params(&mut record, raw.params_text);
    record
}

#[cfg(test)]
mod tests;
