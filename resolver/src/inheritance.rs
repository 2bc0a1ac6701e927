//! Superclass linearization, inherited shape merging, and requiredness
//! consistency across a hierarchy.

use std::collections::BTreeSet;

use shacl_model_spec::{PropertyShapeDescriptor, SchemaSource};

use crate::constraints::EffectivePropertyConstraint;
use crate::error::ResolveError;
use crate::model::SuperclassRequired;

/// Every transitive superclass of `class_id`, nearest first.
///
/// The walk is depth-first over declared superclasses in declaration order.
/// A class reachable along several paths appears once per path. IRIs the
/// source does not know (such as `owl:Thing`) are leaves.
///
/// # Errors
///
/// Returns [`ResolveError::CyclicSuperclass`] if the walk revisits a class on
/// its own path.
pub fn superclass_chain<S: SchemaSource + ?Sized>(
    source: &S,
    class_id: &str,
) -> Result<Vec<String>, ResolveError> {
    let mut chain = Vec::new();
    let mut path = vec![class_id.to_owned()];
    walk(source, class_id, &mut path, &mut chain)?;
    Ok(chain)
}

fn walk<S: SchemaSource + ?Sized>(
    source: &S,
    class_id: &str,
    path: &mut Vec<String>,
    chain: &mut Vec<String>,
) -> Result<(), ResolveError> {
    for sup in source.superclasses_of(class_id) {
        if path.iter().any(|p| p == sup) {
            let mut cycle = path.clone();
            cycle.push(sup.clone());
            return Err(ResolveError::CyclicSuperclass { chain: cycle });
        }
        chain.push(sup.clone());
        path.push(sup.clone());
        walk(source, sup, path, chain)?;
        path.pop();
    }
    Ok(())
}

/// The effective property shapes of a class: its own shapes in declaration
/// order, then each ancestor's shapes whose path is not yet present.
pub fn merged_shapes<'s, S: SchemaSource + ?Sized>(
    source: &'s S,
    class_id: &str,
    chain: &[String],
) -> Vec<&'s PropertyShapeDescriptor> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut merged = Vec::new();
    let owners = std::iter::once(class_id).chain(chain.iter().map(String::as_str));
    for owner in owners {
        let Some(shape) = source.shape_for(owner) else {
            continue;
        };
        for ps in &shape.properties {
            if seen.insert(ps.path.as_str()) {
                merged.push(ps);
            }
        }
    }
    merged
}

/// Returns `true` if any ancestor's own shape constrains `path`.
pub fn declared_in_ancestor<S: SchemaSource + ?Sized>(
    source: &S,
    chain: &[String],
    path: &str,
) -> bool {
    chain
        .iter()
        .filter_map(|a| source.shape_for(a))
        .any(|shape| shape.property(path).is_some())
}

/// Folds the requiredness of `path` across every ancestor's own shape.
///
/// Starts at [`SuperclassRequired::None`]; each ancestor shape constraining
/// `path` moves it to `Yes` or `No`, and a disagreement settles on `Both`.
pub fn superclass_required<S: SchemaSource + ?Sized>(
    source: &S,
    chain: &[String],
    path: &str,
) -> SuperclassRequired {
    let mut state = SuperclassRequired::None;
    for shape in chain.iter().filter_map(|a| source.shape_for(a)) {
        for ps in shape.properties.iter().filter(|ps| ps.path == path) {
            let required = EffectivePropertyConstraint::collect(&ps.fragments).is_required();
            state = match (state, required) {
                (SuperclassRequired::None | SuperclassRequired::Yes, true) => {
                    SuperclassRequired::Yes
                }
                (SuperclassRequired::None | SuperclassRequired::No, false) => {
                    SuperclassRequired::No
                }
                _ => SuperclassRequired::Both,
            };
        }
    }
    state
}

/// Whether a required property may be exposed as non-optional on its class.
///
/// Only a property declared in the class's own namespace qualifies, and only
/// when no ancestor leaves it optional.
#[must_use]
pub fn non_optional(
    required: bool,
    property_namespace: &str,
    class_namespace: &str,
    ancestors: SuperclassRequired,
) -> bool {
    required
        && property_namespace == class_namespace
        && matches!(ancestors, SuperclassRequired::Yes | SuperclassRequired::None)
}
