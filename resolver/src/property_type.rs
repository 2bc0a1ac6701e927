//! Property typing: effective constraint + class categories → value shape.

use shacl_model_spec::TypeRef;

use crate::classify::{CategoryMap, Lineage};
use crate::config::ResolverConfig;
use crate::constraints::EffectivePropertyConstraint;
use crate::error::SchemaResolutionError;
use crate::model::{ClassCategory, ConstraintSummary, PropertyTypeVariant};
use crate::naming::NameTable;

/// The resolved type of one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyType {
    /// Value shape.
    pub variant: PropertyTypeVariant,
    /// IRI the shape was decided from.
    pub type_uri: String,
    /// Emitter-facing type name.
    pub type_name: String,
}

/// Determines the IRI a property's type is decided from.
///
/// A named class restriction wins. Otherwise the named datatype restriction
/// is used, with datatypes under the schema's own prefix read as the string
/// primitive.
///
/// # Errors
///
/// - [`SchemaResolutionError::AmbiguousOrMissingType`] when no restriction is
///   present, or in strict mode when both are.
/// - [`SchemaResolutionError::UnresolvableTypeUri`] when the restrictions
///   present are all anonymous.
pub fn type_uri(
    property: &str,
    constraint: &EffectivePropertyConstraint,
    config: &ResolverConfig,
) -> Result<String, SchemaResolutionError> {
    let sources = constraint.type_source_count();
    if sources == 0 || (sources > 1 && config.strict) {
        return Err(SchemaResolutionError::AmbiguousOrMissingType {
            property: property.to_owned(),
            sources,
        });
    }
    if let Some(TypeRef::Named(class)) = &constraint.class_restriction {
        return Ok(class.clone());
    }
    match &constraint.datatype_restriction {
        Some(TypeRef::Named(dt)) if config.is_schema_datatype(dt) => {
            Ok(config.primitives.string.clone())
        }
        Some(TypeRef::Named(dt)) => Ok(dt.clone()),
        _ => Err(SchemaResolutionError::UnresolvableTypeUri {
            property: property.to_owned(),
        }),
    }
}

/// Picks the variant for a property whose type IRI is known. First match wins.
///
/// The final object step reads the type's full [`Lineage`] rather than its
/// single [`ClassCategory`], checking
/// license addition, extendable license, any-license-info and element in that
/// order. An extendable license also descends from any-license-info, so the
/// category alone would never yield [`PropertyTypeVariant::ExtendableLicense`].
#[must_use]
pub fn variant_for(
    property: &str,
    type_uri: &str,
    constraint: &EffectivePropertyConstraint,
    categories: &CategoryMap,
    config: &ResolverConfig,
) -> PropertyTypeVariant {
    let single = constraint.is_single_valued();
    if categories.is_enumeration(type_uri) {
        return if single {
            PropertyTypeVariant::Enum
        } else {
            PropertyTypeVariant::EnumCollection
        };
    }
    if type_uri == config.primitives.boolean {
        return PropertyTypeVariant::Boolean;
    }
    if config.is_integer_type(type_uri) {
        return PropertyTypeVariant::Integer;
    }
    let string_subtype = categories.category(type_uri) == Some(ClassCategory::StringSubtype);
    if config.is_string_primitive(type_uri) || string_subtype {
        return if single {
            PropertyTypeVariant::String
        } else {
            PropertyTypeVariant::StringCollection
        };
    }
    if config.set_property_uris.contains(property) {
        return PropertyTypeVariant::ObjectSet;
    }
    if constraint.max_cardinality.map_or(true, |max| max > 1) {
        return PropertyTypeVariant::ObjectCollection;
    }
    let lineage = categories
        .get(type_uri)
        .map_or_else(|| Lineage::of(type_uri, &[], config), |c| c.lineage);
    if lineage.license_addition {
        PropertyTypeVariant::LicenseAddition
    } else if lineage.extendable_license {
        PropertyTypeVariant::ExtendableLicense
    } else if lineage.any_license_info {
        PropertyTypeVariant::AnyLicenseInfo
    } else if lineage.element {
        PropertyTypeVariant::Element
    } else {
        PropertyTypeVariant::Object
    }
}

/// `Boolean`, `Integer`, `String`, or the resolved name of the type class.
#[must_use]
pub fn type_name(
    variant: PropertyTypeVariant,
    type_uri: &str,
    class_names: &NameTable,
    config: &ResolverConfig,
) -> String {
    match variant {
        PropertyTypeVariant::Boolean => "Boolean".to_owned(),
        PropertyTypeVariant::Integer => "Integer".to_owned(),
        PropertyTypeVariant::String | PropertyTypeVariant::StringCollection => "String".to_owned(),
        _ => class_names.name_or_local(type_uri, config),
    }
}

/// Resolves the full type of one property.
///
/// # Errors
///
/// Propagates the errors of [`type_uri`].
pub fn resolve_property_type(
    property: &str,
    constraint: &EffectivePropertyConstraint,
    categories: &CategoryMap,
    class_names: &NameTable,
    config: &ResolverConfig,
) -> Result<PropertyType, SchemaResolutionError> {
    let type_uri = type_uri(property, constraint, config)?;
    let variant = variant_for(property, &type_uri, constraint, categories, config);
    let type_name = type_name(variant, &type_uri, class_names, config);
    Ok(PropertyType {
        variant,
        type_uri,
        type_name,
    })
}

/// The value constraints an emitter enforces.
///
/// `min` is the string-length minimum when present, otherwise the implicit
/// lower bound of the non-negative and positive integer types.
#[must_use]
pub fn constraint_summary(
    constraint: &EffectivePropertyConstraint,
    type_uri: &str,
    config: &ResolverConfig,
) -> ConstraintSummary {
    let min = constraint.min_length.or_else(|| {
        if type_uri == config.primitives.non_negative_integer {
            Some(0)
        } else if type_uri == config.primitives.positive_integer {
            Some(1)
        } else {
            None
        }
    });
    ConstraintSummary {
        pattern: constraint.pattern.clone(),
        min,
        max: constraint.max_length,
    }
}
