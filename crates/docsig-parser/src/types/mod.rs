//! Core data types for signatures inferred from documented source.

mod param_descriptor;
mod return_descriptor;
mod scope;
mod signature_record;

pub use param_descriptor::{INFERRED_PARAM_TYPE, ParamDescriptor};
pub use return_descriptor::{DEFAULT_RETURN_TYPE, ReturnDescriptor};
pub use scope::Scope;
pub use signature_record::{ParamMap, SignatureRecord};
