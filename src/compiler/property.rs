//! Property Descriptor Factory
//!
//! Gives every synthesized model field a real, uninitialized storage slot,
//! independent of the typing metadata attached through field registration.

use serde::Serialize;
use serde_json::Value;

use crate::model::ModelOptions;
use crate::schema::SchemaNode;

/// Backing storage slot for one model field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySlot {
    pub key: String,
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
    /// Always `None` until the host populates an instance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl PropertySlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            writable: true,
            enumerable: true,
            configurable: true,
            value: None,
        }
    }
}

/// Build the storage slot for `key`. Purely structural: the schema node and
/// options do not influence the slot.
pub fn make_descriptor(key: &str, _node: &SchemaNode, _options: &ModelOptions) -> PropertySlot {
    PropertySlot::new(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_is_uninitialized() {
        let node = SchemaNode::number().with_default(serde_json::json!(7));
        let slot = make_descriptor("count", &node, &ModelOptions::default());
        assert_eq!(slot.key, "count");
        assert!(slot.writable && slot.enumerable && slot.configurable);
        assert_eq!(slot.value, None);
    }
}
