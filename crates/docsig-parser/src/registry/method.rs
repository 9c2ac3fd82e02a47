//! The `method` doc type: functions assigned to a name or declared by name.

use super::DocType;
use crate::extractors::{self, METHOD_RULES, MatchRule};
use crate::types::{Scope, SignatureRecord};

/// Scopes a method may be documented under.
const METHOD_SCOPES: &[Scope] = &[Scope::Static, Scope::Proto, Scope::Class, Scope::Page];

/// Infers a method's name and parameters from the code after its comment.
///
/// ```
/// use docsig_parser::registry::{DocType, MethodType};
///
/// let record = MethodType.extract("show = function(el, speed){").unwrap();
/// assert_eq!(record.name, "show");
/// assert_eq!(record.params.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodType;

impl MethodType {
    pub const ID: &'static str = "method";

    /// The rules this type tries, highest priority first.
    pub fn rules(self) -> &'static [&'static MatchRule] {
        &METHOD_RULES
    }
}

impl DocType for MethodType {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn extract(&self, source: &str) -> Option<SignatureRecord> {
        extractors::extract_with_rules(source, self.rules())
    }

    fn allowed_scopes(&self) -> &'static [Scope] {
        METHOD_SCOPES
    }

    fn uses_explicit_name_tag(&self) -> bool {
        false
    }
}
