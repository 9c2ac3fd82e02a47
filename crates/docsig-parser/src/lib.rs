//! # docsig-parser
//!
//! Signature extraction for documentation comments.
//!
//! Given the source text that follows a doc comment, recognizes the method
//! it documents and infers its name, ordered parameters and a default return
//! descriptor. No grammar is involved: a short, ordered list of regex match
//! rules is tried and the first match wins. Input that no rule recognizes
//! yields `None` rather than an error.
//!
//! ```
//! use docsig_parser::extract_signature;
//!
//! let record = extract_signature("this.toggle = function(el, speed) {").unwrap();
//! assert_eq!(record.name, "toggle");
//! assert_eq!(record.param_names().collect::<Vec<_>>(), ["el", "speed"]);
//! assert_eq!(record.returns.type_name, "undefined");
//! ```
//!
//! Doc types are looked up through a [`registry::TypeRegistry`], and explicit
//! `@method`/`@param`/`@return` data is merged with
//! [`SignatureRecord::apply_directives`].

pub mod directives;
pub mod error;
pub mod extractors;
pub mod registry;
pub mod types;

pub use directives::{MethodDirectives, ParamDirective};
pub use error::ParserError;
pub use extractors::{extract_signature, extract_with_rules};
pub use registry::{DocType, MethodType, TypeRegistry};
pub use types::{ParamDescriptor, ReturnDescriptor, Scope, SignatureRecord};
