//! Overlay of explicit doc directives onto an inferred signature.
//!
//! Tag parsing happens upstream; this module only defines what a parsed
//! `@method` / `@param` / `@return` set looks like and how it merges.
//! Explicit values always win over inferred ones.

use crate::types::{ParamDescriptor, ReturnDescriptor, SignatureRecord};

const OPTIONAL_MARKER: &str = "optional:";

/// Directive data collected from one doc comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodDirectives {
    /// Name given by an explicit `@method` directive.
    pub name: Option<String>,
    pub params: Vec<ParamDirective>,
    pub returns: Option<ReturnDescriptor>,
}

/// One `@param {type} name description` directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamDirective {
    pub name: String,
    pub type_name: Option<String>,
    pub optional: Option<bool>,
    pub description: String,
}

impl ParamDirective {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Apply a brace type spec such as `{String}` or `{optional:Boolean}`.
    #[must_use]
    pub fn with_type_spec(mut self, spec: &str) -> Self {
        let (type_name, optional) = Self::parse_type_spec(spec);
        self.type_name = type_name;
        self.optional = Some(optional);
        self
    }

    /// Split a brace type spec into its type and whether it is optional.
    ///
    /// Braces are optional; an empty type yields `None`.
    pub fn parse_type_spec(spec: &str) -> (Option<String>, bool) {
        let inner = spec.trim();
        let inner = inner.strip_prefix('{').unwrap_or(inner);
        let inner = inner.strip_suffix('}').unwrap_or(inner).trim();
        let (inner, optional) = match inner.strip_prefix(OPTIONAL_MARKER) {
            Some(rest) => (rest.trim(), true),
            None => (inner, false),
        };
        let type_name = (!inner.is_empty()).then(|| inner.to_string());
        (type_name, optional)
    }
}

impl SignatureRecord {
    /// Merge explicit directives into this record.
    ///
    /// A directive for a known parameter keeps its position; one for an
    /// unknown parameter is appended after the inferred ones.
    pub fn apply_directives(&mut self, directives: &MethodDirectives) {
        if let Some(name) = &directives.name {
            self.name.clone_from(name);
        }

        for directive in &directives.params {
            let order = self.next_order();
            let param = self
                .params
                .entry(directive.name.clone())
                .or_insert_with(|| ParamDescriptor::inferred(&directive.name, order));
            param.description.clone_from(&directive.description);
            if let Some(type_name) = &directive.type_name {
                param.type_name.clone_from(type_name);
            }
            if let Some(optional) = directive.optional {
                param.optional = optional;
            }
        }

        if let Some(returns) = &directives.returns {
            self.returns = returns.clone();
        }
    }

    /// Build a record purely from directives, for a forced `@method` block
    /// whose source was not recognized. Needs an explicit name.
    pub fn from_directives(directives: &MethodDirectives) -> Option<Self> {
        let name = directives.name.as_deref()?;
        let mut record = Self::new(name);
        record.apply_directives(directives);
        Some(record)
    }
}
