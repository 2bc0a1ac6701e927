//! SPDX 3.0.0 sample namespace modules.
//!
//! Each sub-module encodes one SPDX profile as Rust data: classes, declared
//! properties, node shapes, and named individuals. Modules are listed in
//! dependency order; see [`crate::SchemaDocument::sample`] for the assembly
//! sequence.

pub mod core;
pub mod expanded_licensing;
pub mod simple_licensing;
pub mod software;

use crate::model::{
    ClassDescriptor, ConstraintFragment, PropertyDescriptor, PropertyKind,
    PropertyShapeDescriptor, RawIndividual, ShapeDescriptor, TypeRef,
};

/// `sh:class <iri>`.
pub(crate) fn class_of(iri: impl Into<String>) -> ConstraintFragment {
    ConstraintFragment::Class(TypeRef::Named(iri.into()))
}

/// `sh:datatype <iri>`.
pub(crate) fn datatype_of(iri: impl Into<String>) -> ConstraintFragment {
    ConstraintFragment::Datatype(TypeRef::Named(iri.into()))
}

/// `sh:nodeKind`, which the resolver ignores.
pub(crate) fn node_kind(kind: &str) -> ConstraintFragment {
    ConstraintFragment::Other(format!("sh:nodeKind {kind}"))
}

pub(crate) fn datatype_property(id: String, comment: &str) -> PropertyDescriptor {
    PropertyDescriptor {
        id,
        kind: PropertyKind::Datatype,
        comment: comment.to_owned(),
    }
}

pub(crate) fn object_property(id: String, comment: &str) -> PropertyDescriptor {
    PropertyDescriptor {
        id,
        kind: PropertyKind::Object,
        comment: comment.to_owned(),
    }
}

/// Builds the node shape for `target` from `(path, fragments)` pairs.
pub(crate) fn shape(
    target: &str,
    props: Vec<(String, Vec<ConstraintFragment>)>,
) -> ShapeDescriptor {
    ShapeDescriptor {
        target_class: target.to_owned(),
        properties: props
            .into_iter()
            .map(|(path, fragments)| PropertyShapeDescriptor {
                path,
                owner: target.to_owned(),
                fragments,
            })
            .collect(),
    }
}

/// A labelled individual of `class`: an enumeration member.
pub(crate) fn member(id: String, class: &str, comment: &str) -> RawIndividual {
    let label = id.rsplit('/').next().map(str::to_owned);
    RawIndividual {
        id,
        types: vec![class.to_owned()],
        label,
        range: None,
        comment: comment.to_owned(),
    }
}

/// An unlabelled individual standing in for a value of `range`.
pub(crate) fn singleton(id: String, range: &str, comment: &str) -> RawIndividual {
    RawIndividual {
        id,
        types: Vec::new(),
        label: None,
        range: Some(range.to_owned()),
        comment: comment.to_owned(),
    }
}

/// Copies every shape's property paths onto the class it targets.
pub(crate) fn link_declared_properties(
    classes: &mut [ClassDescriptor],
    shapes: &[ShapeDescriptor],
) {
    for class in classes.iter_mut() {
        if let Some(shape) = shapes.iter().find(|s| s.target_class == class.id) {
            class.properties = shape.properties.iter().map(|p| p.path.clone()).collect();
        }
    }
}
