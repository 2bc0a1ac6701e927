//! The resolved model handed to the emitter.
//!
//! Everything here is built once by [`crate::assemble`] and never mutated
//! afterwards. The shape of these types is the persisted contract; bump
//! [`ResolvedModel::SCHEMA_VERSION`] when it changes.

use serde::Serialize;

use crate::error::ResolutionWarning;
use crate::hints::EmissionHint;

/// Semantic category of a schema class. Exactly one applies per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ClassCategory {
    /// Closed set of literal members.
    Enumeration,
    /// Descends from the element root.
    Element,
    /// Descends from the license-expression root.
    AnyLicenseInfo,
    /// Descends from the license-addition root.
    LicenseAddition,
    /// Descends from the extendable-license root.
    ExtendableLicense,
    /// Descends from the string primitive.
    StringSubtype,
    /// None of the above.
    PlainObject,
}

impl ClassCategory {
    /// Returns `true` if classes of this category become a [`ResolvedClass`].
    #[must_use]
    pub const fn is_emitted_as_class(self) -> bool {
        !matches!(self, ClassCategory::Enumeration | ClassCategory::StringSubtype)
    }
}

/// The final shape of a property's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PropertyTypeVariant {
    /// Single boolean.
    Boolean,
    /// Single integer.
    Integer,
    /// Single string.
    String,
    /// Ordered strings.
    StringCollection,
    /// Single enumeration member.
    Enum,
    /// Ordered enumeration members.
    EnumCollection,
    /// Single element reference.
    Element,
    /// Single license expression.
    AnyLicenseInfo,
    /// Single license addition.
    LicenseAddition,
    /// Single extendable license.
    ExtendableLicense,
    /// Single object of any other class.
    Object,
    /// Ordered objects.
    ObjectCollection,
    /// Unordered objects.
    ObjectSet,
}

impl PropertyTypeVariant {
    /// Returns `true` for the multi-valued variants.
    #[must_use]
    pub const fn is_multi_valued(self) -> bool {
        matches!(
            self,
            PropertyTypeVariant::StringCollection
                | PropertyTypeVariant::EnumCollection
                | PropertyTypeVariant::ObjectCollection
                | PropertyTypeVariant::ObjectSet
        )
    }
}

/// Whether the ancestors of a class independently require a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SuperclassRequired {
    /// At least one ancestor constrains the property and all of them require it.
    Yes,
    /// At least one ancestor constrains the property and none require it.
    No,
    /// Ancestors disagree.
    Both,
    /// No ancestor constrains the property.
    None,
}

/// Value constraints the emitter should enforce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConstraintSummary {
    /// Regular expression the value must match.
    pub pattern: Option<String>,
    /// Minimum string length or implicit integer lower bound.
    pub min: Option<u32>,
    /// Maximum string length.
    pub max: Option<u32>,
}

impl ConstraintSummary {
    /// Returns `true` if no entry is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_none() && self.min.is_none() && self.max.is_none()
    }
}

/// One fully-typed property of a class or individual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProperty {
    /// Property path IRI.
    pub uri: String,
    /// Globally unique property name.
    pub name: String,
    /// `get<Name>`.
    pub getter: String,
    /// `set<Name>`.
    pub setter: String,
    /// `add<Name>`.
    pub adder: String,
    /// `addAll<Name>`.
    pub add_all: String,
    /// `PROP_<NAME>`.
    pub constant_name: String,
    /// Resolved value shape.
    pub variant: PropertyTypeVariant,
    /// IRI the variant was decided from.
    pub type_uri: String,
    /// `Boolean`, `String`, `Integer`, or the resolved class name.
    pub type_name: String,
    /// Minimum cardinality above zero.
    pub required: bool,
    /// Required and safe to expose without an optional wrapper.
    pub non_optional: bool,
    /// Profile of the namespace the property is declared in.
    pub profile: String,
    /// `ProfileIdentifierType.<PROFILE>` of the owning class.
    pub profile_identifier: String,
    /// Some ancestor's shape also constrains this path.
    pub inherited: bool,
    /// Requiredness of the path across ancestors.
    pub superclass_required: SuperclassRequired,
    /// Value constraints.
    pub constraint: ConstraintSummary,
    /// Required, or any constraint entry is set.
    pub has_constraint: bool,
    /// The property is the creation-metadata reference.
    pub is_creation_info: bool,
    /// The property carries the model version.
    pub is_spec_version: bool,
}

/// A class ready for emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedClass {
    /// Class IRI.
    pub uri: String,
    /// Globally unique class name.
    pub name: String,
    /// Profile segment of the class namespace.
    pub profile: String,
    /// Documentation text.
    pub comment: String,
    /// Name of the nearest superclass, `None` at the root.
    pub super_class_name: Option<String>,
    /// Carries the abstract marker.
    pub is_abstract: bool,
    /// Semantic category.
    pub category: ClassCategory,
    /// Own properties first, then inherited ones nearest-ancestor first.
    pub properties: Vec<ResolvedProperty>,
    /// Has an object-typed creation-metadata property.
    pub has_creation_info: bool,
    /// `External<Name>` for classes that may be referenced from outside a document.
    pub external_name: Option<String>,
    /// `<PROFILE>_<CLASS>`.
    pub constant_name: String,
    /// Emitter directives.
    pub hints: Vec<EmissionHint>,
}

/// One literal member of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    /// Individual IRI.
    pub uri: String,
    /// CONST_CASE identifier.
    pub constant: String,
    /// Local name, the serialized value.
    pub value: String,
    /// Documentation text.
    pub comment: String,
}

/// An enumeration class and its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDescriptor {
    /// Class IRI.
    pub uri: String,
    /// Globally unique name.
    pub name: String,
    /// Profile segment of the class namespace.
    pub profile: String,
    /// Documentation text.
    pub comment: String,
    /// `<PROFILE>_<ENUM>`.
    pub constant_name: String,
    /// Members in declaration order.
    pub members: Vec<EnumMember>,
}

/// A singleton individual standing in for a value of its range class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualDescriptor {
    /// Individual IRI.
    pub uri: String,
    /// Globally unique name.
    pub name: String,
    /// Profile segment of the individual's namespace.
    pub profile: String,
    /// Documentation text.
    pub comment: String,
    /// IRI of the class the individual instantiates.
    pub range_class: String,
    /// Resolved name of the range class.
    pub range_class_name: String,
    /// Name of the range class's nearest superclass.
    pub super_class_name: Option<String>,
    /// `<PROFILE>_<INDIVIDUAL>`.
    pub constant_name: String,
    /// `NOASSERTION`, `NONE`, or the individual's own name.
    pub to_string_name: String,
    /// Properties of the range class, resolved in its context.
    pub properties: Vec<ResolvedProperty>,
}

/// One generated property-name constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyConstant {
    /// Property IRI.
    pub uri: String,
    /// `PROP_<NAME>`.
    pub constant_name: String,
    /// The property name.
    pub value: String,
}

/// Property constants of one namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceConstants {
    /// Namespace IRI, without the trailing `/`.
    pub namespace_uri: String,
    /// Profile name.
    pub name: String,
    /// `<PROFILE>_NAMESPACE`.
    pub constant_name: String,
    /// Constants sorted by property IRI.
    pub properties: Vec<PropertyConstant>,
}

/// The complete resolution output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedModel {
    /// Version of this model's serialized shape.
    pub schema_version: &'static str,
    /// Classes in input order.
    pub classes: Vec<ResolvedClass>,
    /// Enumerations in input order.
    pub enums: Vec<EnumDescriptor>,
    /// Singleton individuals, grouped by range class in class order.
    pub individuals: Vec<IndividualDescriptor>,
    /// Property constants sorted by namespace IRI.
    pub property_constants: Vec<NamespaceConstants>,
}

impl ResolvedModel {
    /// Version of the serialized model shape.
    pub const SCHEMA_VERSION: &'static str = "1.0.0";

    /// Looks up a class by resolved name.
    #[must_use]
    pub fn class(&self, name: &str) -> Option<&ResolvedClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Looks up a class by IRI.
    #[must_use]
    pub fn class_by_uri(&self, uri: &str) -> Option<&ResolvedClass> {
        self.classes.iter().find(|c| c.uri == uri)
    }

    /// Looks up an enumeration by resolved name.
    #[must_use]
    pub fn enumeration(&self, name: &str) -> Option<&EnumDescriptor> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Looks up a singleton individual by resolved name.
    #[must_use]
    pub fn individual(&self, name: &str) -> Option<&IndividualDescriptor> {
        self.individuals.iter().find(|i| i.name == name)
    }

    /// Total number of resolved properties across classes.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.classes.iter().map(|c| c.properties.len()).sum()
    }
}

impl ResolvedClass {
    /// Looks up a property by resolved name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&ResolvedProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// A resolved model plus the advisory warnings collected on the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Everything that resolved.
    pub model: ResolvedModel,
    /// Classes and individuals that did not.
    pub warnings: Vec<ResolutionWarning>,
}

impl Resolution {
    /// Returns `true` when no warning was collected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
