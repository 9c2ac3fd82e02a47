use super::*;
pub(super) use crate::types::{ParamDescriptor, ReturnDescriptor};


const FIXTURE: &str = include_str!("../../../tests/fixtures/controller.js");

fn extract(source: &str) -> SignatureRecord {
    extract_signature(source).unwrap_or_else(|| panic!("should extract from {source:?}"))
}

/// The trailing source after the doc comment that ends just before `marker`.
fn snippet_after(marker: &str) -> &'static str {
    let start = FIXTURE
        .find(marker)
        .unwrap_or_else(|| panic!("fixture should contain {marker:?}"));
    &FIXTURE[start..]
}

fn names(record: &SignatureRecord) -> Vec<&str> {
    record.param_names().collect()
}
