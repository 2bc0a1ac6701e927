//! Constraint collection: many fragments in, one effective record out.

use serde::Serialize;
use shacl_model_spec::{ConstraintFragment, TypeRef};

/// The merged constraints of one property shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EffectivePropertyConstraint {
    /// Smallest `sh:minCount` observed.
    pub min_cardinality: Option<u32>,
    /// Smallest `sh:maxCount` observed.
    pub max_cardinality: Option<u32>,
    /// Smallest `sh:minLength` observed.
    pub min_length: Option<u32>,
    /// Largest `sh:maxLength` observed.
    pub max_length: Option<u32>,
    /// Last `sh:pattern` observed.
    pub pattern: Option<String>,
    /// Last `sh:class` observed.
    pub class_restriction: Option<TypeRef>,
    /// Last `sh:datatype` observed.
    pub datatype_restriction: Option<TypeRef>,
}

fn keep_min(slot: &mut Option<u32>, value: u32) {
    *slot = Some(slot.map_or(value, |cur| cur.min(value)));
}

fn keep_max(slot: &mut Option<u32>, value: u32) {
    *slot = Some(slot.map_or(value, |cur| cur.max(value)));
}

impl EffectivePropertyConstraint {
    /// Merges `fragments` in order.
    ///
    /// Both cardinalities and `min_length` keep the minimum observed value,
    /// `max_length` keeps the maximum, and the last pattern or type
    /// restriction wins. Fragment kinds outside these seven are dropped.
    pub fn collect<'a>(fragments: impl IntoIterator<Item = &'a ConstraintFragment>) -> Self {
        let mut merged = Self::default();
        for fragment in fragments {
            match fragment {
                ConstraintFragment::MinCount(n) => keep_min(&mut merged.min_cardinality, *n),
                ConstraintFragment::MaxCount(n) => keep_min(&mut merged.max_cardinality, *n),
                ConstraintFragment::MinLength(n) => keep_min(&mut merged.min_length, *n),
                ConstraintFragment::MaxLength(n) => keep_max(&mut merged.max_length, *n),
                ConstraintFragment::Pattern(p) => merged.pattern = Some(p.clone()),
                ConstraintFragment::Datatype(t) => merged.datatype_restriction = Some(t.clone()),
                ConstraintFragment::Class(t) => merged.class_restriction = Some(t.clone()),
                ConstraintFragment::Other(_) => {}
            }
        }
        merged
    }

    /// Minimum cardinality above zero.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.min_cardinality.is_some_and(|n| n > 0)
    }

    /// Maximum cardinality of exactly one.
    #[must_use]
    pub fn is_single_valued(&self) -> bool {
        self.max_cardinality == Some(1)
    }

    /// Number of type restrictions present (0, 1, or 2).
    #[must_use]
    pub fn type_source_count(&self) -> usize {
        usize::from(self.class_restriction.is_some())
            + usize::from(self.datatype_restriction.is_some())
    }
}
