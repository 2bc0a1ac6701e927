//! The ingestion seam between an ontology parser and the resolver.
//!
//! The resolver never reads files; it asks a [`SchemaSource`] for the
//! pre-parsed descriptors. [`SchemaDocument`] is the in-memory implementation
//! used by the CLI and the tests.

use crate::model::{
    ClassDescriptor, PropertyDescriptor, RawIndividual, SchemaDocument, ShapeDescriptor,
};

/// Read-only access to a pre-parsed schema.
pub trait SchemaSource {
    /// All classes, in a stable order.
    fn list_classes(&self) -> Vec<&ClassDescriptor>;

    /// All declared datatype and object properties, in a stable order.
    fn list_properties(&self) -> Vec<&PropertyDescriptor>;

    /// All named individuals, in a stable order.
    fn list_individuals(&self) -> Vec<&RawIndividual>;

    /// The node shape targeting `class_id`, if any.
    fn shape_for(&self, class_id: &str) -> Option<&ShapeDescriptor>;

    /// Direct superclasses of `class_id`, nearest first. Unknown classes have none.
    fn superclasses_of(&self, class_id: &str) -> &[String];
}

impl SchemaSource for SchemaDocument {
    fn list_classes(&self) -> Vec<&ClassDescriptor> {
        self.namespaces.iter().flat_map(|m| m.classes.iter()).collect()
    }

    fn list_properties(&self) -> Vec<&PropertyDescriptor> {
        self.namespaces
            .iter()
            .flat_map(|m| m.properties.iter())
            .collect()
    }

    fn list_individuals(&self) -> Vec<&RawIndividual> {
        self.namespaces
            .iter()
            .flat_map(|m| m.individuals.iter())
            .collect()
    }

    fn shape_for(&self, class_id: &str) -> Option<&ShapeDescriptor> {
        self.find_shape(class_id)
    }

    fn superclasses_of(&self, class_id: &str) -> &[String] {
        match self.find_class(class_id) {
            Some(class) => &class.superclasses,
            None => &[],
        }
    }
}
