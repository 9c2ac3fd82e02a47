//! Parser error types for docsig-parser.
//!
//! Signature extraction itself never fails; these cover the registry and
//! scope glue around it.

/// Errors raised by doc-type registration and scope resolution.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Doc type not registered: {0}")]
    UnknownType(String),

    #[error("Doc type already registered: {0}")]
    DuplicateType(String),

    #[error("Unknown scope keyword: {0}")]
    UnknownScope(String),

    #[error("Scope '{scope}' is not allowed for doc type '{type_id}'")]
    ScopeNotAllowed { type_id: String, scope: String },
}
