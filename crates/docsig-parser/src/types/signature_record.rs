use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{ParamDescriptor, ReturnDescriptor};

/// Parameters keyed by name, in source order.
pub type ParamMap = IndexMap<String, ParamDescriptor>;

/// Signature metadata for one documented method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRecord {
    pub name: String,
    pub params: ParamMap,
    pub returns: ReturnDescriptor,
}

impl SignatureRecord {
    /// A record with no parameters and the default return descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: ParamMap::new(),
            returns: ReturnDescriptor::default(),
        }
    }

    /// Append a positional parameter and return its order.
    ///
    /// A name already present keeps its first position and the call is a
    /// no-op, so `order` stays a contiguous `0..n` range.
    pub fn push_param(&mut self, name: &str) -> u32 {
        if let Some(existing) = self.params.get(name) {
            return existing.order;
        }
        let order = self.next_order();
        self.params
            .insert(name.to_string(), ParamDescriptor::inferred(name, order));
        order
    }

    pub fn param(&self, name: &str) -> Option<&ParamDescriptor> {
        self.params.get(name)
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    pub(crate) fn next_order(&self) -> u32 {
        u32::try_from(self.params.len()).unwrap_or(u32::MAX)
    }
}
