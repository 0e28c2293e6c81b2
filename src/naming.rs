//! Name and description extraction
//!
//! Every synthesized model needs a stable type name. The name comes from, in
//! order of preference:
//! - the explicit `name` in [`ModelOptions`]
//! - a `Name: rest of text` prefix on the schema's description
//! - a synthesized `<prefix>_<n>` from a monotonic [`NameSequence`]
//!
//! Also hosts the PascalCase conversion used for generated enum type names.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::ModelOptions;
use crate::schema::SchemaNode;

// =============================================================================
// Name Sequence
// =============================================================================

/// Monotonic counter for synthesized names.
///
/// Reads and increments atomically, so concurrent compilers sharing one
/// sequence never observe the same value.
#[derive(Debug, Default)]
pub struct NameSequence {
    next: AtomicU64,
}

static GLOBAL_SEQUENCE: OnceLock<Arc<NameSequence>> = OnceLock::new();

impl NameSequence {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(value: u64) -> Self {
        Self {
            next: AtomicU64::new(value),
        }
    }

    /// The process-wide sequence shared by compilers built with defaults
    pub fn global() -> Arc<NameSequence> {
        GLOBAL_SEQUENCE
            .get_or_init(|| Arc::new(NameSequence::new()))
            .clone()
    }

    /// Return the current value and advance the counter
    pub fn next_value(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// The value the next call to [`next_value`](Self::next_value) returns
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

// =============================================================================
// Naming Conventions
// =============================================================================

/// Splits a description into a type name and the remaining description
pub trait NamingConvention: Send + Sync {
    fn split(&self, description: &str) -> Option<(String, String)>;
}

/// `Identifier: remainder` convention.
///
/// The first run of ASCII word characters followed by a colon becomes the
/// name; whatever follows the colon (after optional whitespace, up to the end
/// of the line) becomes the description.
pub struct ColonPrefixConvention {
    pattern: Regex,
}

impl Default for ColonPrefixConvention {
    fn default() -> Self {
        Self::new()
    }
}

impl ColonPrefixConvention {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"((?-u:\w)+):\s*(.*)").expect("static naming pattern"),
        }
    }
}

impl NamingConvention for ColonPrefixConvention {
    fn split(&self, description: &str) -> Option<(String, String)> {
        let captures = self.pattern.captures(description)?;
        let name = captures.get(1)?.as_str().to_string();
        let rest = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
        Some((name, rest.to_string()))
    }
}

// =============================================================================
// Extractor
// =============================================================================

/// Normalized name and description for a synthesized model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAndDescription {
    pub name: String,
    pub description: Option<String>,
}

/// Derives [`NameAndDescription`] pairs for schema nodes
pub struct NameExtractor {
    convention: Box<dyn NamingConvention>,
    sequence: Arc<NameSequence>,
    prefix: String,
}

impl NameExtractor {
    pub fn new(sequence: Arc<NameSequence>, prefix: impl Into<String>) -> Self {
        Self {
            convention: Box::new(ColonPrefixConvention::new()),
            sequence,
            prefix: prefix.into(),
        }
    }

    /// Replace the description convention
    pub fn with_convention(mut self, convention: impl NamingConvention + 'static) -> Self {
        self.convention = Box::new(convention);
        self
    }

    pub fn sequence(&self) -> &Arc<NameSequence> {
        &self.sequence
    }

    pub fn extract(&self, node: &SchemaNode, options: &ModelOptions) -> NameAndDescription {
        let description = node.description().map(str::to_string);

        if let Some(name) = &options.name {
            return NameAndDescription {
                name: name.clone(),
                description,
            };
        }

        if let Some((name, rest)) = description
            .as_deref()
            .and_then(|text| self.convention.split(text))
        {
            return NameAndDescription {
                name,
                description: Some(rest),
            };
        }

        let name = format!("{}_{}", self.prefix, self.sequence.next_value());
        tracing::trace!(%name, "synthesized model name");
        NameAndDescription { name, description }
    }
}

// =============================================================================
// Casing
// =============================================================================

/// Convert a field key to PascalCase, keeping known acronyms upper-case.
///
/// `camelCase` boundaries and `_`, `-`, space separators all start a new word.
pub fn to_pascal_case(s: &str, acronyms: &BTreeSet<String>) -> String {
    let mut result = String::with_capacity(s.len());
    let mut current_word = String::new();
    let mut prev_lower = false;

    for c in s.chars() {
        if c == '_' || c == '-' || c == ' ' {
            push_word(&mut result, &current_word, acronyms);
            current_word.clear();
            prev_lower = false;
            continue;
        }
        if c.is_ascii_uppercase() && prev_lower {
            push_word(&mut result, &current_word, acronyms);
            current_word.clear();
        }
        prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        current_word.push(c);
    }
    push_word(&mut result, &current_word, acronyms);

    result
}

fn push_word(result: &mut String, word: &str, acronyms: &BTreeSet<String>) {
    if word.is_empty() {
        return;
    }
    let upper = word.to_uppercase();
    if acronyms.contains(&upper) {
        result.push_str(&upper);
        return;
    }
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        result.extend(first.to_uppercase());
        result.push_str(chars.as_str());
    }
}
