use serde::{Deserialize, Serialize};

/// Placeholder type for parameters known only by position.
pub const INFERRED_PARAM_TYPE: &str = "method";

/// One parameter of a documented method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub optional: bool,
    /// Zero-based position in the source parameter list.
    pub order: u32,
    pub description: String,
}

impl ParamDescriptor {
    /// A descriptor inferred from source position alone.
    pub fn inferred(name: impl Into<String>, order: u32) -> Self {
        Self {
            name: name.into(),
            type_name: INFERRED_PARAM_TYPE.to_string(),
            optional: false,
            order,
            description: String::new(),
        }
    }

    /// Whether the type is still the positional placeholder.
    pub fn has_inferred_type(&self) -> bool {
        self.type_name == INFERRED_PARAM_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inferred_descriptor_defaults() {
        let param = ParamDescriptor::inferred("callback", 2);
        assert_eq!(param.name, "callback");
        assert_eq!(param.type_name, "method");
        assert!(!param.optional);
        assert_eq!(param.order, 2);
        assert!(param.description.is_empty());
        assert!(param.has_inferred_type());
    }

    #[test]
    fn type_field_serializes_as_type() {
        let value = serde_json::to_value(ParamDescriptor::inferred("x", 0)).expect("serialize");
        assert_eq!(value["type"], "method");
        assert!(value.get("type_name").is_none());
    }
}
