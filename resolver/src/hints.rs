//! Per-class emission hints.
//!
//! A handful of license-composition classes need hand-written comparison and
//! stringification in the emitted code. The resolver does not reason about
//! them: it looks the class IRI up in a static table keyed by IRI suffix and
//! passes the hints through to the emitter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Boolean operator joining the members of a license set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LicenseOperator {
    /// Conjunctive set.
    And,
    /// Disjunctive set.
    Or,
}

/// Emitter directive attached to a resolved class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmissionHint {
    /// Order-insensitive member-set equality, hashed with `prime`.
    LicenseSetEquals {
        /// Hash seed distinguishing conjunctive from disjunctive sets.
        prime: u32,
        /// Set operator.
        operator: LicenseOperator,
    },
    /// Equality by subject license.
    OrLaterEquals,
    /// Equality by subject license and addition.
    WithAdditionEquals,
    /// `<license> WITH <addition>`.
    WithAdditionToString,
    /// `<license>+`.
    OrLaterToString,
    /// Members joined by the set operator.
    LicenseSetToString {
        /// Set operator.
        operator: LicenseOperator,
    },
    /// The license-list identifier taken from the object URI.
    ListedLicenseToString,
    /// The `LicenseRef-` suffix of the object URI, or the whole URI.
    CustomLicenseToString,
    /// The element name.
    ElementToString,
    /// Delegates to the element superclass.
    InheritedElementToString,
}

impl EmissionHint {
    /// Whether the hint controls stringification rather than equality.
    #[must_use]
    pub const fn is_to_string(&self) -> bool {
        !matches!(
            self,
            EmissionHint::LicenseSetEquals { .. }
                | EmissionHint::OrLaterEquals
                | EmissionHint::WithAdditionEquals
        )
    }
}

/// The SPDX 3.0 hint table, keyed by `<Profile>/<LocalName>` suffix.
#[must_use]
pub fn default_hint_table() -> BTreeMap<String, Vec<EmissionHint>> {
    use EmissionHint::*;
    use LicenseOperator::{And, Or};

    let mut m = BTreeMap::new();
    m.insert(
        "ExpandedLicensing/ConjunctiveLicenseSet".to_owned(),
        vec![
            LicenseSetEquals {
                prime: 1381,
                operator: And,
            },
            LicenseSetToString { operator: And },
        ],
    );
    m.insert(
        "ExpandedLicensing/DisjunctiveLicenseSet".to_owned(),
        vec![
            LicenseSetEquals {
                prime: 41,
                operator: Or,
            },
            LicenseSetToString { operator: Or },
        ],
    );
    m.insert(
        "ExpandedLicensing/OrLaterOperator".to_owned(),
        vec![OrLaterEquals, OrLaterToString],
    );
    m.insert(
        "ExpandedLicensing/WithAdditionOperator".to_owned(),
        vec![WithAdditionEquals, WithAdditionToString],
    );
    m.insert(
        "ExpandedLicensing/ListedLicense".to_owned(),
        vec![ListedLicenseToString],
    );
    m.insert(
        "ExpandedLicensing/ListedLicenseException".to_owned(),
        vec![ListedLicenseToString],
    );
    m.insert(
        "ExpandedLicensing/CustomLicense".to_owned(),
        vec![CustomLicenseToString],
    );
    m.insert(
        "ExpandedLicensing/CustomLicenseAddition".to_owned(),
        vec![CustomLicenseToString],
    );
    m.insert("Core/Element".to_owned(), vec![ElementToString]);
    m
}

/// True when `iri` ends with `suffix` on a path-segment boundary.
fn ends_with_segment(iri: &str, suffix: &str) -> bool {
    iri.strip_suffix(suffix)
        .is_some_and(|head| head.is_empty() || head.ends_with('/'))
}

/// Looks up the hints for `class_iri`.
///
/// Table hints come first. A class with no stringification hint of its own
/// whose ancestor chain contains `element_iri` gets
/// [`EmissionHint::InheritedElementToString`].
#[must_use]
pub fn hints_for(
    class_iri: &str,
    chain: &[String],
    element_iri: &str,
    table: &BTreeMap<String, Vec<EmissionHint>>,
) -> Vec<EmissionHint> {
    let mut hints: Vec<EmissionHint> = table
        .iter()
        .filter(|(suffix, _)| ends_with_segment(class_iri, suffix))
        .flat_map(|(_, hints)| hints.iter().cloned())
        .collect();
    let has_to_string = hints.iter().any(EmissionHint::is_to_string);
    if !has_to_string && chain.iter().any(|a| a == element_iri) {
        hints.push(EmissionHint::InheritedElementToString);
    }
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use shacl_model_spec::model::iris::*;

    fn el(local: &str) -> String {
        format!("{NS_EXPANDED_LICENSING}/{local}")
    }

    #[test]
    fn conjunctive_set_uses_and_prime() {
        let table = default_hint_table();
        let hints = hints_for(&el("ConjunctiveLicenseSet"), &[], ELEMENT, &table);
        assert_eq!(
            hints[0],
            EmissionHint::LicenseSetEquals {
                prime: 1381,
                operator: LicenseOperator::And
            }
        );
    }

    #[test]
    fn suffix_match_respects_segments() {
        let table = default_hint_table();
        // `MyListedLicense` must not pick up the `ListedLicense` entry.
        let hints = hints_for(&el("MyListedLicense"), &[], ELEMENT, &table);
        assert!(hints.is_empty());
    }

    #[test]
    fn element_subclass_inherits_to_string() {
        let table = default_hint_table();
        let chain = vec![ELEMENT.to_owned()];
        let hints = hints_for(&format!("{NS_CORE}/Agent"), &chain, ELEMENT, &table);
        assert_eq!(hints, vec![EmissionHint::InheritedElementToString]);
    }

    #[test]
    fn table_to_string_wins_over_inherited() {
        let table = default_hint_table();
        let chain = vec![el("License"), ELEMENT.to_owned()];
        let hints = hints_for(&el("ListedLicense"), &chain, ELEMENT, &table);
        assert_eq!(hints, vec![EmissionHint::ListedLicenseToString]);
    }

    #[test]
    fn element_itself_gets_element_to_string() {
        let table = default_hint_table();
        let hints = hints_for(ELEMENT, &[], ELEMENT, &table);
        assert_eq!(hints, vec![EmissionHint::ElementToString]);
    }
}
