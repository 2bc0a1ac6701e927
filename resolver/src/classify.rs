//! Class classification.
//!
//! Enumeration membership is settled once, from both the declared
//! enumerated flag and the labelled-individual heuristic, before any class
//! is classified. Every other category is an identifier match against the
//! class itself or any class in its superclass chain.

use std::collections::{BTreeMap, BTreeSet};

use shacl_model_spec::{ClassDescriptor, RawIndividual};

use crate::config::ResolverConfig;
use crate::model::ClassCategory;

/// Which semantic roots a class descends from (itself included).
///
/// Several can hold at once; [`ClassCategory`] keeps only the highest
/// precedence one, while property typing consults all of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lineage {
    /// Descends from the element root.
    pub element: bool,
    /// Descends from the license-expression root.
    pub any_license_info: bool,
    /// Descends from the license-addition root.
    pub license_addition: bool,
    /// Descends from the extendable-license root.
    pub extendable_license: bool,
    /// Descends from the string primitive.
    pub string: bool,
}

impl Lineage {
    /// Computes the lineage of `class_id` given its superclass chain.
    #[must_use]
    pub fn of(class_id: &str, chain: &[String], config: &ResolverConfig) -> Self {
        let matches = |root: &str| class_id == root || chain.iter().any(|a| a == root);
        Self {
            element: matches(&config.semantic.element),
            any_license_info: matches(&config.semantic.any_license_info),
            license_addition: matches(&config.semantic.license_addition),
            extendable_license: matches(&config.semantic.extendable_license),
            string: matches(&config.primitives.string),
        }
    }

    /// Returns `true` for classes that may be referenced from outside a document.
    #[must_use]
    pub fn is_externalizable(&self) -> bool {
        self.element || self.any_license_info || self.license_addition || self.extendable_license
    }
}

/// Category and lineage of one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// The single category.
    pub category: ClassCategory,
    /// All semantic roots reached.
    pub lineage: Lineage,
}

/// Picks the category by precedence:
/// Enumeration > AnyLicenseInfo > LicenseAddition > ExtendableLicense >
/// Element > StringSubtype > PlainObject.
#[must_use]
pub fn category_of(is_enum: bool, lineage: &Lineage) -> ClassCategory {
    if is_enum {
        ClassCategory::Enumeration
    } else if lineage.any_license_info {
        ClassCategory::AnyLicenseInfo
    } else if lineage.license_addition {
        ClassCategory::LicenseAddition
    } else if lineage.extendable_license {
        ClassCategory::ExtendableLicense
    } else if lineage.element {
        ClassCategory::Element
    } else if lineage.string {
        ClassCategory::StringSubtype
    } else {
        ClassCategory::PlainObject
    }
}

/// The set of enumeration class IRIs.
///
/// A class is an enumeration when it is declared enumerated, or when some
/// labelled individual lists it as a type.
pub fn enumeration_classes<'a>(
    classes: impl IntoIterator<Item = &'a ClassDescriptor>,
    individuals: impl IntoIterator<Item = &'a RawIndividual>,
) -> BTreeSet<String> {
    let declared = classes
        .into_iter()
        .filter(|c| c.enumerated)
        .map(|c| c.id.clone());
    let observed = individuals
        .into_iter()
        .filter(|ind| ind.label.is_some())
        .flat_map(|ind| ind.types.iter().cloned());
    declared.chain(observed).collect()
}

/// Classification of every class, keyed by IRI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    entries: BTreeMap<String, Classification>,
    enums: BTreeSet<String>,
}

impl CategoryMap {
    /// Classifies each `(class, chain)` pair.
    pub fn build<'a>(
        classes: impl IntoIterator<Item = (&'a str, &'a [String])>,
        enums: BTreeSet<String>,
        config: &ResolverConfig,
    ) -> Self {
        let entries = classes
            .into_iter()
            .map(|(id, chain)| {
                let lineage = Lineage::of(id, chain, config);
                let category = category_of(enums.contains(id), &lineage);
                (id.to_owned(), Classification { category, lineage })
            })
            .collect();
        Self { entries, enums }
    }

    /// Classification of a known class.
    #[must_use]
    pub fn get(&self, class_id: &str) -> Option<&Classification> {
        self.entries.get(class_id)
    }

    /// Category of a known class.
    #[must_use]
    pub fn category(&self, class_id: &str) -> Option<ClassCategory> {
        self.entries.get(class_id).map(|c| c.category)
    }

    /// Returns `true` if `iri` is an enumeration, whether or not it is a known class.
    #[must_use]
    pub fn is_enumeration(&self, iri: &str) -> bool {
        self.enums.contains(iri)
    }

    /// Number of classified classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no class was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
