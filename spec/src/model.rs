//! Core schema descriptor types.
//!
//! These types are the read-only snapshot an ontology ingestor hands to the
//! resolver: classes with their declared superclasses, SHACL property shapes
//! reduced to constraint fragments, declared properties, and raw named
//! individuals. The top-level container is [`SchemaDocument`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A schema namespace (one SPDX profile, e.g. `Core/`, `Software/`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Namespace {
    /// Profile segment used when qualifying colliding names (e.g. `"Core"`).
    pub prefix: String,
    /// Full IRI of the namespace, without the trailing `/`.
    pub iri: String,
    /// Description of the namespace.
    #[cfg_attr(feature = "serde", serde(default))]
    pub comment: String,
}

/// A schema class (`owl:Class` / `sh:NodeShape` target).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassDescriptor {
    /// Full IRI (e.g. `"https://spdx.org/rdf/3.0.0/terms/Core/Element"`).
    pub id: String,
    /// Documentation text (`rdfs:comment`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub comment: String,
    /// Full IRIs of the direct superclasses (`rdfs:subClassOf`), nearest first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub superclasses: Vec<String>,
    /// Property paths this class references through its node shape.
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: Vec<String>,
    /// Whether the class carries the abstract-class marker type.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_abstract: bool,
    /// Whether the class is declared as an enumerated class (`owl:oneOf`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub enumerated: bool,
}

impl ClassDescriptor {
    /// Creates a concrete, non-enumerated class with no superclasses.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            comment: String::new(),
            superclasses: Vec::new(),
            properties: Vec::new(),
            is_abstract: false,
            enumerated: false,
        }
    }

    /// Sets the documentation text.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Appends a direct superclass.
    #[must_use]
    pub fn with_superclass(mut self, iri: impl Into<String>) -> Self {
        self.superclasses.push(iri.into());
        self
    }

    /// Appends a declared property reference.
    #[must_use]
    pub fn with_property(mut self, path: impl Into<String>) -> Self {
        self.properties.push(path.into());
        self
    }

    /// Marks the class abstract.
    #[must_use]
    pub fn abstract_class(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Marks the class as an enumerated type.
    #[must_use]
    pub fn enumerated(mut self) -> Self {
        self.enumerated = true;
        self
    }
}

/// Whether a declared property relates a resource to a literal or to another resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PropertyKind {
    /// `owl:DatatypeProperty`.
    Datatype,
    /// `owl:ObjectProperty`.
    Object,
}

/// A declared property.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyDescriptor {
    /// Full IRI.
    pub id: String,
    /// Datatype or object property.
    pub kind: PropertyKind,
    /// Description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub comment: String,
}

/// The target of a `sh:class` or `sh:datatype` constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TypeRef {
    /// A named IRI.
    Named(String),
    /// A blank node or other construct with no IRI.
    Anonymous,
}

impl TypeRef {
    /// Returns the IRI when the reference is named.
    #[must_use]
    pub fn iri(&self) -> Option<&str> {
        match self {
            TypeRef::Named(iri) => Some(iri),
            TypeRef::Anonymous => None,
        }
    }
}

/// One constraint node attached to a property shape.
///
/// Only the first seven kinds influence resolution; everything else the
/// ingestor saw is carried as [`ConstraintFragment::Other`] and dropped by the
/// collector.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConstraintFragment {
    /// `sh:minCount`.
    MinCount(u32),
    /// `sh:maxCount`.
    MaxCount(u32),
    /// `sh:minLength`.
    MinLength(u32),
    /// `sh:maxLength`.
    MaxLength(u32),
    /// `sh:pattern`.
    Pattern(String),
    /// `sh:datatype`.
    Datatype(TypeRef),
    /// `sh:class`.
    Class(TypeRef),
    /// Any other constraint component (`sh:in`, `sh:or`, `sh:sparql`, ...), by name.
    Other(String),
}

/// Constraints governing one property path within one class shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyShapeDescriptor {
    /// Full IRI of the property path.
    pub path: String,
    /// Full IRI of the class whose node shape owns this property shape.
    pub owner: String,
    /// Constraint fragments in the order the ingestor encountered them.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fragments: Vec<ConstraintFragment>,
}

/// The node shape targeting one class.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeDescriptor {
    /// Full IRI of the target class.
    pub target_class: String,
    /// Property shapes in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: Vec<PropertyShapeDescriptor>,
}

impl ShapeDescriptor {
    /// Looks up the property shape for `path`.
    #[must_use]
    pub fn property(&self, path: &str) -> Option<&PropertyShapeDescriptor> {
        self.properties.iter().find(|p| p.path == path)
    }
}

/// A named individual as the ingestor saw it: its types, label, and range.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawIndividual {
    /// Full IRI.
    pub id: String,
    /// `rdf:type` objects other than `owl:NamedIndividual`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub types: Vec<String>,
    /// `rdfs:label`, when present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
    /// `rdfs:range`, when present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: Option<String>,
    /// Description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub comment: String,
}

/// One namespace worth of schema content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamespaceModule {
    /// Namespace metadata.
    pub namespace: Namespace,
    /// Classes declared in this namespace.
    #[cfg_attr(feature = "serde", serde(default))]
    pub classes: Vec<ClassDescriptor>,
    /// Properties declared in this namespace.
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: Vec<PropertyDescriptor>,
    /// Node shapes for classes of this namespace.
    #[cfg_attr(feature = "serde", serde(default))]
    pub shapes: Vec<ShapeDescriptor>,
    /// Named individuals declared in this namespace.
    #[cfg_attr(feature = "serde", serde(default))]
    pub individuals: Vec<RawIndividual>,
}

/// A complete pre-parsed schema.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SchemaDocument {
    /// Schema version (e.g. `"3.0.0"`).
    pub version: String,
    /// Base IRI shared by all namespaces (e.g. `"https://spdx.org/rdf/3.0.0/terms/"`).
    pub base_iri: String,
    /// Namespace modules in dependency order.
    pub namespaces: Vec<NamespaceModule>,
}

impl SchemaDocument {
    /// Looks up a class by its full IRI.
    #[must_use]
    pub fn find_class(&self, iri: &str) -> Option<&ClassDescriptor> {
        self.namespaces
            .iter()
            .flat_map(|m| m.classes.iter())
            .find(|c| c.id == iri)
    }

    /// Looks up a declared property by its full IRI.
    #[must_use]
    pub fn find_property(&self, iri: &str) -> Option<&PropertyDescriptor> {
        self.namespaces
            .iter()
            .flat_map(|m| m.properties.iter())
            .find(|p| p.id == iri)
    }

    /// Looks up the node shape targeting `class_iri`.
    #[must_use]
    pub fn find_shape(&self, class_iri: &str) -> Option<&ShapeDescriptor> {
        self.namespaces
            .iter()
            .flat_map(|m| m.shapes.iter())
            .find(|s| s.target_class == class_iri)
    }

    /// Looks up a namespace module by profile prefix.
    #[must_use]
    pub fn find_namespace(&self, prefix: &str) -> Option<&NamespaceModule> {
        self.namespaces.iter().find(|m| m.namespace.prefix == prefix)
    }

    /// Returns the total number of classes across all namespaces.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.namespaces.iter().map(|m| m.classes.len()).sum()
    }

    /// Returns the total number of declared properties across all namespaces.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.namespaces.iter().map(|m| m.properties.len()).sum()
    }

    /// Returns the total number of property shapes across all node shapes.
    #[must_use]
    pub fn property_shape_count(&self) -> usize {
        self.namespaces
            .iter()
            .flat_map(|m| m.shapes.iter())
            .map(|s| s.properties.len())
            .sum()
    }

    /// Returns the total number of named individuals across all namespaces.
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.namespaces.iter().map(|m| m.individuals.len()).sum()
    }
}

/// Standard IRI constants.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// SHACL namespace.
    pub const SH: &str = "http://www.w3.org/ns/shacl#";

    /// Prefix shared by every SPDX model IRI.
    pub const SPDX_URI_PREFIX: &str = "https://spdx.org/rdf/";
    /// SPDX 3.0.0 terms base IRI.
    pub const SPDX_TERMS: &str = "https://spdx.org/rdf/3.0.0/terms/";

    // Namespace IRIs
    /// Core profile.
    pub const NS_CORE: &str = "https://spdx.org/rdf/3.0.0/terms/Core";
    /// Software profile.
    pub const NS_SOFTWARE: &str = "https://spdx.org/rdf/3.0.0/terms/Software";
    /// Simple licensing profile.
    pub const NS_SIMPLE_LICENSING: &str = "https://spdx.org/rdf/3.0.0/terms/SimpleLicensing";
    /// Expanded licensing profile.
    pub const NS_EXPANDED_LICENSING: &str = "https://spdx.org/rdf/3.0.0/terms/ExpandedLicensing";

    // Semantic base classes
    /// `Core/Element`.
    pub const ELEMENT: &str = "https://spdx.org/rdf/3.0.0/terms/Core/Element";
    /// `SimpleLicensing/AnyLicenseInfo`.
    pub const ANY_LICENSE_INFO: &str =
        "https://spdx.org/rdf/3.0.0/terms/SimpleLicensing/AnyLicenseInfo";
    /// `ExpandedLicensing/ExtendableLicense`.
    pub const EXTENDABLE_LICENSE: &str =
        "https://spdx.org/rdf/3.0.0/terms/ExpandedLicensing/ExtendableLicense";
    /// `ExpandedLicensing/LicenseAddition`.
    pub const LICENSE_ADDITION: &str =
        "https://spdx.org/rdf/3.0.0/terms/ExpandedLicensing/LicenseAddition";

    /// Marker type carried by abstract classes.
    pub const ABSTRACT_CLASS: &str = "http://spdx.invalid./AbstractClass";
    /// Prefix of internal marker classes that are never resolved.
    pub const SPDX_INVALID_PREFIX: &str = "http://spdx.invalid.";

    // XSD datatypes
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:positiveInteger`.
    pub const XSD_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#positiveInteger";
    /// `xsd:nonNegativeInteger`.
    pub const XSD_NON_NEGATIVE_INTEGER: &str =
        "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    /// `xsd:decimal`.
    pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    /// `xsd:dateTimeStamp`.
    pub const XSD_DATE_TIME_STAMP: &str = "http://www.w3.org/2001/XMLSchema#dateTimeStamp";
    /// `xsd:anyURI`.
    pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
    /// `owl:Thing`.
    pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
}
