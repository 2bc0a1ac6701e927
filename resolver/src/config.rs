//! Resolver configuration.
//!
//! Every lookup table the engine consults lives here and is injected into
//! [`crate::resolve`], so tests and alternate schemas can substitute their
//! own. [`ResolverConfig::default`] carries the SPDX 3.0.0 values.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use shacl_model_spec::model::iris::*;
use shacl_model_spec::ClassDescriptor;

use crate::hints::{default_hint_table, EmissionHint};

/// IRIs of the four semantic base classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticUris {
    /// Root of the element hierarchy.
    pub element: String,
    /// Root of the license-expression hierarchy.
    pub any_license_info: String,
    /// Root of the license-addition hierarchy.
    pub license_addition: String,
    /// Root of the extendable-license hierarchy.
    pub extendable_license: String,
}

impl Default for SemanticUris {
    fn default() -> Self {
        Self {
            element: ELEMENT.to_owned(),
            any_license_info: ANY_LICENSE_INFO.to_owned(),
            license_addition: LICENSE_ADDITION.to_owned(),
            extendable_license: EXTENDABLE_LICENSE.to_owned(),
        }
    }
}

/// IRIs of the primitive datatypes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimitiveUris {
    /// String primitive; also the root of string-subtype classes.
    pub string: String,
    /// Boolean primitive.
    pub boolean: String,
    /// Date-time primitive, resolved as a string.
    pub date_time: String,
    /// URI primitive, resolved as a string.
    pub any_uri: String,
    /// Every datatype resolved as an integer.
    pub integer_types: BTreeSet<String>,
    /// Integer type with an implicit lower bound of 0.
    pub non_negative_integer: String,
    /// Integer type with an implicit lower bound of 1.
    pub positive_integer: String,
}

impl Default for PrimitiveUris {
    fn default() -> Self {
        let integer_types = [
            "positiveInteger",
            "nonNegativeInteger",
            "integer",
            "byte",
            "int",
            "long",
            "negativeInteger",
            "nonPositiveInteger",
            "short",
            "unsignedLong",
            "unsignedInt",
            "unsignedShort",
            "unsignedByte",
            "decimal",
        ]
        .into_iter()
        .map(|t| format!("{XSD}{t}"))
        .collect();
        Self {
            string: XSD_STRING.to_owned(),
            boolean: XSD_BOOLEAN.to_owned(),
            date_time: XSD_DATE_TIME_STAMP.to_owned(),
            any_uri: XSD_ANY_URI.to_owned(),
            integer_types,
            non_negative_integer: XSD_NON_NEGATIVE_INTEGER.to_owned(),
            positive_integer: XSD_POSITIVE_INTEGER.to_owned(),
        }
    }
}

/// Tables and switches consulted during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Profile whose entities always keep the bare local name on collision.
    pub base_profile: String,
    /// Datatypes under this prefix are opaque string bases.
    pub schema_uri_prefix: String,
    /// Classes under these prefixes are skipped entirely.
    pub ignored_class_prefixes: Vec<String>,
    /// Semantic base class IRIs.
    pub semantic: SemanticUris,
    /// Primitive datatype IRIs.
    pub primitives: PrimitiveUris,
    /// Superclass that maps to "no superclass".
    pub owl_thing: String,
    /// Marker type carried by abstract classes. A class listing it among its
    /// direct superclasses is abstract.
    pub abstract_marker: String,
    /// Local names that clash with target-language keywords, and their replacements.
    pub reserved_words: BTreeMap<String, String>,
    /// Properties whose values are unordered sets rather than collections.
    pub set_property_uris: BTreeSet<String>,
    /// Enables the strict-only checks.
    pub strict: bool,
    /// Emission hints keyed by `<Profile>/<LocalName>` suffix.
    pub hints: BTreeMap<String, Vec<EmissionHint>>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        let reserved_words = [
            ("Package", "SpdxPackage"),
            ("package", "spdxPackage"),
            ("File", "SpdxFile"),
            ("file", "spdxFile"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();
        Self {
            base_profile: "Core".to_owned(),
            schema_uri_prefix: SPDX_URI_PREFIX.to_owned(),
            ignored_class_prefixes: vec![SPDX_INVALID_PREFIX.to_owned()],
            semantic: SemanticUris::default(),
            primitives: PrimitiveUris::default(),
            owl_thing: OWL_THING.to_owned(),
            abstract_marker: ABSTRACT_CLASS.to_owned(),
            reserved_words,
            set_property_uris: [format!("{NS_EXPANDED_LICENSING}/member")]
                .into_iter()
                .collect(),
            strict: false,
            hints: default_hint_table(),
        }
    }
}

impl ResolverConfig {
    /// Parses a TOML override. Keys left out keep their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` is not valid TOML or a key has the wrong shape.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Returns `true` if `class_iri` must not be resolved.
    #[must_use]
    pub fn is_ignored_class(&self, class_iri: &str) -> bool {
        self.ignored_class_prefixes
            .iter()
            .any(|p| class_iri.starts_with(p.as_str()))
    }

    /// Returns `true` if `datatype_iri` lives inside the schema's own namespace.
    #[must_use]
    pub fn is_schema_datatype(&self, datatype_iri: &str) -> bool {
        datatype_iri.starts_with(&self.schema_uri_prefix)
    }

    /// Returns `true` for the string-like primitives: string, date-time, URI.
    #[must_use]
    pub fn is_string_primitive(&self, iri: &str) -> bool {
        iri == self.primitives.string
            || iri == self.primitives.date_time
            || iri == self.primitives.any_uri
    }

    /// Returns `true` if `iri` resolves as an integer.
    #[must_use]
    pub fn is_integer_type(&self, iri: &str) -> bool {
        self.primitives.integer_types.contains(iri)
    }

    /// Returns `true` if `class` is flagged abstract or lists the abstract marker
    /// as a direct superclass.
    #[must_use]
    pub fn is_abstract_class(&self, class: &ClassDescriptor) -> bool {
        class.is_abstract || class.superclasses.iter().any(|s| *s == self.abstract_marker)
    }

    /// Applies the reserved-word substitution to a local name.
    #[must_use]
    pub fn substitute_reserved<'a>(&'a self, name: &'a str) -> &'a str {
        self.reserved_words.get(name).map_or(name, String::as_str)
    }

    /// Returns `true` if `profile` is the privileged base profile (case-insensitive).
    #[must_use]
    pub fn is_base_profile(&self, profile: &str) -> bool {
        profile.eq_ignore_ascii_case(&self.base_profile)
    }
}
