//! End-to-end use of the crate the way a doc generator drives it: classify
//! the code after each comment, resolve its scope, then overlay the
//! explicit directives from the comment.

use docsig_config::ScopeConfig;
use docsig_parser::{
    MethodDirectives, ParamDirective, ReturnDescriptor, Scope, SignatureRecord, TypeRegistry,
};
use pretty_assertions::assert_eq;

const SOURCE: &str = include_str!("fixtures/controller.js");

/// Source text following each `*/` in the fixture.
fn trailing_snippets(source: &str) -> Vec<&str> {
    source
        .match_indices("*/")
        .map(|(idx, _)| &source[idx + 2..])
        .collect()
}

#[test]
fn every_documented_block_is_recognized() {
    let registry = TypeRegistry::with_builtin_types();
    let names: Vec<String> = trailing_snippets(SOURCE)
        .into_iter()
        .filter_map(|snippet| registry.infer(snippet))
        .map(|(id, record)| {
            assert_eq!(id, "method");
            record.name
        })
        .collect();

    assert_eq!(
        names,
        vec![
            "honorific",
            "init",
            "li &gt; a click",
            "destroy",
            "jQuery.tabsVersion",
            "helper",
        ]
    );
}

#[test]
fn directives_overlay_inferred_signature() {
    let registry = TypeRegistry::with_builtin_types();
    let snippet = trailing_snippets(SOURCE)[0];

    let mut record = registry
        .extract_as("method", snippet)
        .expect("method is registered")
        .expect("honorific is recognized");

    record.apply_directives(&MethodDirectives {
        name: None,
        params: vec![
            ParamDirective::new("name", "the persons name").with_type_spec("{String}"),
            ParamDirective::new("gender", "true if a man, false if female.")
                .with_type_spec("{optional:Boolean}"),
        ],
        returns: Some(ReturnDescriptor::new(
            "String",
            "returns the appropriate honorific.",
        )),
    });

    let json = serde_json::to_value(&record).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "name": "honorific",
            "params": {
                "name": {
                    "name": "name",
                    "type": "String",
                    "optional": false,
                    "order": 0,
                    "description": "the persons name"
                },
                "gender": {
                    "name": "gender",
                    "type": "Boolean",
                    "optional": true,
                    "order": 1,
                    "description": "true if a man, false if female."
                }
            },
            "returns": {
                "type": "String",
                "description": "returns the appropriate honorific."
            }
        })
    );
}

#[test]
fn forced_method_without_recognizable_code() {
    let registry = TypeRegistry::with_builtin_types();
    let snippet = "\n  var x = 1;\n";
    assert_eq!(registry.extract_as("method", snippet).expect("registered"), None);

    let directives = MethodDirectives {
        name: Some("Tabs.reset".to_string()),
        ..MethodDirectives::default()
    };
    let record = SignatureRecord::from_directives(&directives).expect("explicit name");
    assert_eq!(record.name, "Tabs.reset");
    assert!(record.params.is_empty());
}

#[test]
fn scope_resolution_uses_config() {
    let registry = TypeRegistry::with_builtin_types();
    let config = ScopeConfig {
        default_scope: Some("proto".to_string()),
        strict: true,
    };

    assert_eq!(
        registry
            .resolve_scope("method", Some("static"), &config)
            .expect("allowed"),
        Some(Scope::Static)
    );
    assert_eq!(
        registry
            .resolve_scope("method", None, &config)
            .expect("default"),
        Some(Scope::Proto)
    );
    assert!(registry
        .resolve_scope("method", Some("module"), &config)
        .is_err());
}
