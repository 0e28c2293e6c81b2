//! Golden Tests for Model Compilation
//!
//! Compiles the JSON fixtures end to end and checks the synthesized models.

use std::sync::Arc;

use familiar_models::{
    CompileError, CompilerConfig, ModelCompiler, ModelOptions, NameSequence, Nullability,
    OutputType, SchemaNode, TypeCatalog,
};
use serde_json::json;

fn load(fixture: &str) -> SchemaNode {
    serde_json::from_str(fixture).unwrap()
}

fn compiler() -> ModelCompiler<TypeCatalog> {
    ModelCompiler::with_sequence(
        TypeCatalog::new(),
        CompilerConfig::default(),
        Arc::new(NameSequence::new()),
    )
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn test_widget_fields_in_declared_order() {
    let schema = load(include_str!("fixtures/widget.json"));
    let mut c = compiler();
    let model = c.model_from_schema(&schema, &ModelOptions::default()).unwrap();

    assert_eq!(model.name, "Widget");
    assert_eq!(model.description.as_deref(), Some("a small thing"));
    assert_eq!(model.keys().collect::<Vec<_>>(), vec!["id", "name", "tags", "status"]);
}

#[test]
fn test_widget_field_descriptors() {
    let schema = load(include_str!("fixtures/widget.json"));
    let mut c = compiler();
    let model = c.model_from_schema(&schema, &ModelOptions::default()).unwrap();

    let id = model.field("id").unwrap();
    assert_eq!(id.field_type, OutputType::Float);
    assert_eq!(id.nullable, Nullability::No);

    let name = model.field("name").unwrap();
    assert_eq!(name.field_type, OutputType::String);
    assert_eq!(name.default_value, Some(json!("unnamed")));
    assert_eq!(name.description, "Display name");

    let tags = model.field("tags").unwrap();
    assert_eq!(tags.field_type, OutputType::list(OutputType::String));
    assert_eq!(tags.nullable, Nullability::Items);
    assert_eq!(tags.default_value, None);

    let status = model.field("status").unwrap();
    assert_eq!(status.field_type.to_string(), "StatusEnum");
    assert_eq!(status.nullable, Nullability::No);
}

#[test]
fn test_status_enum_shared_across_compilations() {
    let schema = load(include_str!("fixtures/widget.json"));
    let mut c = compiler();

    let first = c.model_from_schema(&schema, &ModelOptions::default()).unwrap();
    let second = c.model_from_schema(&schema, &ModelOptions::default()).unwrap();

    assert_eq!(
        first.field("status").unwrap().field_type,
        second.field("status").unwrap().field_type
    );
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(c.host().enums().count(), 1);
    assert_eq!(c.host().models().count(), 1);
}

#[test]
fn test_changed_schema_under_taken_name_is_rejected() {
    let mut c = compiler();
    let widget = load(include_str!("fixtures/widget.json"));
    c.model_from_schema(&widget, &ModelOptions::default()).unwrap();

    let changed = SchemaNode::object([("id", SchemaNode::string())]);
    let err = c.model_from_schema(&changed, &ModelOptions::named("Widget")).unwrap_err();
    assert!(matches!(err, CompileError::DuplicateModel { name } if name == "Widget"));
}

#[test]
fn test_field_options_for_host() {
    let schema = load(include_str!("fixtures/widget.json"));
    let mut c = compiler();
    let model = c.model_from_schema(&schema, &ModelOptions::default()).unwrap();

    let options: Vec<_> = model
        .fields
        .iter()
        .map(|f| serde_json::to_value(f.field_options()).unwrap())
        .collect();

    assert_eq!(
        options[1],
        json!({ "name": "name", "nullable": false, "defaultValue": "unnamed", "description": "Display name" })
    );
    assert_eq!(options[2], json!({ "name": "tags", "nullable": "items", "description": "" }));
}

// =============================================================================
// Nested models
// =============================================================================

#[test]
fn test_order_nested_models() {
    let schema = load(include_str!("fixtures/order.json"));
    let mut c = compiler();
    let model = c.model_from_schema(&schema, &ModelOptions::default()).unwrap();

    assert_eq!(model.name, "Order");

    let shipping = model.field("shipping").unwrap();
    assert_eq!(shipping.nullable, Nullability::Yes);
    match &shipping.field_type {
        OutputType::Model(address) => {
            assert_eq!(address.name, "Address");
            assert_eq!(address.field("unit").unwrap().nullable, Nullability::Yes);
        }
        other => panic!("Expected Model, got {:?}", other),
    }

    let lines = model.field("lines").unwrap();
    assert_eq!(lines.nullable, Nullability::No);
    match &lines.field_type {
        OutputType::List(item) => match item.as_ref() {
            OutputType::Model(line) => {
                assert_eq!(line.name, "ClassFromZod_0");
                assert_eq!(line.field("quantity").unwrap().default_value, Some(json!(1)));
            }
            other => panic!("Expected Model item, got {:?}", other),
        },
        other => panic!("Expected List, got {:?}", other),
    }

    let names: Vec<&str> = c.host().models().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Address", "ClassFromZod_0", "Order"]);
}

#[test]
fn test_order_nullability_composition() {
    let schema = load(include_str!("fixtures/order.json"));
    let mut c = compiler();
    let model = c.model_from_schema(&schema, &ModelOptions::default()).unwrap();

    assert_eq!(model.field("notes").unwrap().nullable, Nullability::ItemsAndList);
    assert_eq!(model.field("gift").unwrap().nullable, Nullability::Yes);
    assert_eq!(model.field("reference").unwrap().nullable, Nullability::No);
}

#[test]
fn test_conflicting_enum_across_models() {
    let mut c = compiler();
    let widget = load(include_str!("fixtures/widget.json"));
    c.model_from_schema(&widget, &ModelOptions::default()).unwrap();

    let other = SchemaNode::object([("status", SchemaNode::enumeration(["OPEN", "CLOSED"]))]);
    let err = c.model_from_schema(&other, &ModelOptions::named("Ticket")).unwrap_err();
    assert!(matches!(err, CompileError::DuplicateEnumRegistration { name } if name == "StatusEnum"));

    let renamed = ModelOptions::named("Ticket").with_enum_name("status", "TicketStatus");
    let ticket = c.model_from_schema(&other, &renamed).unwrap();
    assert_eq!(ticket.field("status").unwrap().field_type.to_string(), "TicketStatus");
}

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn test_unsupported_field_rejects_schema() {
    let schema = load(include_str!("fixtures/unsupported.json"));
    let mut c = compiler();
    let err = c.model_from_schema(&schema, &ModelOptions::named("Event")).unwrap_err();

    match err {
        CompileError::UnsupportedNodeKind { key, kind } => {
            assert_eq!(key, "created");
            assert_eq!(kind, "date");
        }
        other => panic!("Expected UnsupportedNodeKind, got {:?}", other),
    }
    assert_eq!(c.host().models().count(), 0);
}

#[test]
fn test_rejected_schema_leaves_host_untouched() {
    let address = || SchemaNode::object([("street", SchemaNode::string())]).describe("Address: where");
    let mut c = compiler();

    let broken = SchemaNode::object([
        ("address", address()),
        ("status", SchemaNode::enumeration(["A", "B"])),
        ("created", load(r#"{ "kind": "date" }"#)),
    ])
    .describe("Order: a purchase");
    let err = c.model_from_schema(&broken, &ModelOptions::default()).unwrap_err();
    assert_eq!(err.key(), Some("created"));
    assert_eq!(c.host().models().count(), 0);
    assert_eq!(c.host().enums().count(), 0);

    let fixed = SchemaNode::object([("address", address())]).describe("Order: a purchase");
    let order = c.model_from_schema(&fixed, &ModelOptions::default()).unwrap();

    let names: Vec<&str> = c.host().models().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Address", "Order"]);
    assert_eq!(order.field("address").unwrap().field_type.to_string(), "Address");
}

// =============================================================================
// Naming
// =============================================================================

#[test]
fn test_global_sequence_is_strictly_increasing() {
    let mut c = ModelCompiler::new(TypeCatalog::new());
    let schema = SchemaNode::object([("a", SchemaNode::string())]).describe("just text");

    let suffix = |name: &str| -> u64 {
        name.strip_prefix("ClassFromZod_").unwrap().parse().unwrap()
    };

    let first = c.model_from_schema(&schema, &ModelOptions::default()).unwrap();
    let second = c.model_from_schema(&schema, &ModelOptions::default()).unwrap();

    assert_eq!(first.description.as_deref(), Some("just text"));
    assert!(suffix(&second.name) > suffix(&first.name));
}
