//! Registry of documentation types keyed by their type identifier.
//!
//! Populated explicitly at startup (`TypeRegistry::with_builtin_types`) and
//! read-only afterwards, so a shared `&TypeRegistry` can serve extraction
//! from many threads.

mod method;

pub use method::MethodType;

use docsig_config::ScopeConfig;
use indexmap::IndexMap;

use crate::error::ParserError;
use crate::types::{Scope, SignatureRecord};

/// A documentation type that can recognize its declarations in source.
pub trait DocType: Send + Sync {
    /// Stable identifier the directive router dispatches on (e.g. `"method"`).
    fn id(&self) -> &'static str;

    /// Infer a signature from the source text after a doc comment.
    /// `None` means nothing recognizable was found.
    fn extract(&self, source: &str) -> Option<SignatureRecord>;

    /// Scopes this type may be declared under.
    fn allowed_scopes(&self) -> &'static [Scope];

    /// Whether a doc block of this type must name itself explicitly.
    fn uses_explicit_name_tag(&self) -> bool;

    fn accepts_scope(&self, scope: Scope) -> bool {
        self.allowed_scopes().contains(&scope)
    }
}

#[derive(Default)]
pub struct TypeRegistry {
    types: IndexMap<&'static str, Box<dyn DocType>>,
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.types.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every type this crate ships.
    pub fn with_builtin_types() -> Self {
        let mut registry = Self::new();
        registry.types.insert(MethodType::ID, Box::new(MethodType));
        registry
    }

    /// Add a doc type. Identifiers are unique.
    ///
    /// # Errors
    /// Returns [`ParserError::DuplicateType`] if the id is already taken.
    pub fn register(&mut self, doc_type: Box<dyn DocType>) -> Result<(), ParserError> {
        let id = doc_type.id();
        if self.types.contains_key(id) {
            return Err(ParserError::DuplicateType(id.to_string()));
        }
        tracing::debug!(type_id = id, "registered doc type");
        self.types.insert(id, doc_type);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&dyn DocType> {
        self.types.get(id).map(|doc_type| doc_type.as_ref())
    }

    /// Registered identifiers in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.keys().copied()
    }

    /// Extract with a specific type, as when a directive forces the type.
    ///
    /// # Errors
    /// Returns [`ParserError::UnknownType`] for an unregistered id. A
    /// registered type that recognizes nothing yields `Ok(None)`.
    pub fn extract_as(
        &self,
        id: &str,
        source: &str,
    ) -> Result<Option<SignatureRecord>, ParserError> {
        self.get(id)
            .map(|doc_type| doc_type.extract(source))
            .ok_or_else(|| ParserError::UnknownType(id.to_string()))
    }

    /// Classify a doc block by trying each type in registration order.
    pub fn infer(&self, source: &str) -> Option<(&'static str, SignatureRecord)> {
        self.types
            .iter()
            .find_map(|(id, doc_type)| doc_type.extract(source).map(|record| (*id, record)))
    }

    /// Resolve the scope a block of type `id` is documented under.
    ///
    /// A missing hint takes `config.default_scope`. A hint that is unknown or
    /// not allowed for the type is an error in strict mode; otherwise it is
    /// logged and replaced by the default.
    ///
    /// # Errors
    /// Returns [`ParserError::UnknownType`], [`ParserError::UnknownScope`] or
    /// [`ParserError::ScopeNotAllowed`].
    pub fn resolve_scope(
        &self,
        id: &str,
        hint: Option<&str>,
        config: &ScopeConfig,
    ) -> Result<Option<Scope>, ParserError> {
        let doc_type = self
            .get(id)
            .ok_or_else(|| ParserError::UnknownType(id.to_string()))?;

        let Some(hint) = hint.map(str::trim).filter(|h| !h.is_empty()) else {
            return Self::default_scope(doc_type, config);
        };

        let checked = hint.parse::<Scope>().and_then(|scope| {
            if doc_type.accepts_scope(scope) {
                Ok(scope)
            } else {
                Err(ParserError::ScopeNotAllowed {
                    type_id: id.to_string(),
                    scope: scope.to_string(),
                })
            }
        });

        match checked {
            Ok(scope) => Ok(Some(scope)),
            Err(error) if config.strict => Err(error),
            Err(error) => {
                tracing::warn!(type_id = id, hint, %error, "ignoring scope hint, using default");
                Self::default_scope(doc_type, config)
            }
        }
    }

    fn default_scope(
        doc_type: &dyn DocType,
        config: &ScopeConfig,
    ) -> Result<Option<Scope>, ParserError> {
        let Some(keyword) = config.default_keyword() else {
            return Ok(None);
        };
        let scope = keyword.parse::<Scope>()?;
        if doc_type.accepts_scope(scope) {
            Ok(Some(scope))
        } else {
            Err(ParserError::ScopeNotAllowed {
                type_id: doc_type.id().to_string(),
                scope: scope.to_string(),
            })
        }
    }
}
