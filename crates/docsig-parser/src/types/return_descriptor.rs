use serde::{Deserialize, Serialize};

/// Return type recorded when nothing better is known.
pub const DEFAULT_RETURN_TYPE: &str = "undefined";

/// The documented return value of a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnDescriptor {
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
}

impl Default for ReturnDescriptor {
    fn default() -> Self {
        Self {
            type_name: DEFAULT_RETURN_TYPE.to_string(),
            description: String::new(),
        }
    }
}

impl ReturnDescriptor {
    pub fn new(type_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            description: description.into(),
        }
    }
}
