//! Registry of field lookup specifications.

use std::collections::HashMap;

use super::types::{Field, FieldSpec};

/// Registry mapping each field to its lookup specification.
pub struct FieldRegistry {
    specs: HashMap<Field, FieldSpec>,
}

impl FieldRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            specs: HashMap::new(),
        }
    }

    /// Register a field specification, replacing any earlier one.
    pub fn register(&mut self, spec: FieldSpec) {
        self.specs.insert(spec.field, spec);
    }

    /// Get the specification for a field.
    #[must_use]
    pub fn get_spec(&self, field: Field) -> Option<&FieldSpec> {
        self.specs.get(&field)
    }

    /// Check if a field has a specification.
    #[must_use]
    pub fn has_field(&self, field: Field) -> bool {
        self.specs.contains_key(&field)
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}
