//! Schema assembly: runs every stage and builds the [`ResolvedModel`].
//!
//! Two global pre-passes come first (enumeration membership and both name
//! tables); per-class work only starts once they are complete. A class
//! whose resolution fails is dropped with a warning and never affects the
//! others.

use std::collections::{BTreeMap, BTreeSet};

use shacl_model_spec::{ClassDescriptor, PropertyShapeDescriptor, RawIndividual, SchemaSource};

use crate::classify::{enumeration_classes, CategoryMap, Classification};
use crate::config::ResolverConfig;
use crate::constraints::EffectivePropertyConstraint;
use crate::error::{ResolutionWarning, ResolveError, SchemaResolutionError};
use crate::hints::hints_for;
use crate::inheritance::{
    declared_in_ancestor, merged_shapes, non_optional, superclass_chain, superclass_required,
};
use crate::model::{
    ClassCategory, EnumDescriptor, EnumMember, IndividualDescriptor, NamespaceConstants,
    PropertyConstant, PropertyTypeVariant, Resolution, ResolvedClass, ResolvedModel,
    ResolvedProperty,
};
use crate::naming::{
    capitalize, local_name, namespace_of, profile_identifier, profile_of, to_const_case,
    NameTable,
};
use crate::property_type::{constraint_summary, resolve_property_type};

const CREATION_INFO: &str = "creationInfo";
const SPEC_VERSION: &str = "specVersion";

/// Resolves a whole schema.
///
/// Classes under an ignored prefix are skipped. Enumerations become
/// [`EnumDescriptor`]s, string subtypes are classified but not emitted, and
/// every other class becomes a [`ResolvedClass`]. Unlabelled individuals
/// with a range become [`IndividualDescriptor`]s of that range class.
///
/// # Errors
///
/// Returns [`ResolveError::CyclicSuperclass`] if any class's superclass graph
/// is cyclic. Every other failure is collected as a warning.
pub fn resolve<S: SchemaSource + ?Sized>(
    source: &S,
    config: &ResolverConfig,
) -> Result<Resolution, ResolveError> {
    let classes: Vec<&ClassDescriptor> = source
        .list_classes()
        .into_iter()
        .filter(|c| !config.is_ignored_class(&c.id))
        .collect();
    let chains = classes
        .iter()
        .map(|c| superclass_chain(source, &c.id))
        .collect::<Result<Vec<_>, _>>()?;
    let individuals = source.list_individuals();

    let enums = enumeration_classes(classes.iter().copied(), individuals.iter().copied());
    let categories = CategoryMap::build(
        classes
            .iter()
            .zip(&chains)
            .map(|(c, chain)| (c.id.as_str(), chain.as_slice())),
        enums,
        config,
    );

    let mut warnings = Vec::new();
    let mut singletons: BTreeMap<&str, Vec<&RawIndividual>> = BTreeMap::new();
    for ind in individuals.iter().copied() {
        let (None, Some(range)) = (&ind.label, &ind.range) else {
            continue;
        };
        if categories
            .category(range)
            .is_some_and(ClassCategory::is_emitted_as_class)
        {
            singletons.entry(range.as_str()).or_default().push(ind);
        } else {
            warnings.push(unemitted_singleton(ind, range));
        }
    }

    let class_names = NameTable::build(
        classes
            .iter()
            .map(|c| c.id.as_str())
            .chain(singletons.values().flatten().map(|ind| ind.id.as_str())),
        config,
    );
    let shape_paths = classes
        .iter()
        .filter_map(|c| source.shape_for(&c.id))
        .flat_map(|s| s.properties.iter().map(|ps| ps.path.as_str()));
    let declared = source.list_properties();
    let property_names = NameTable::build(
        declared.iter().map(|p| p.id.as_str()).chain(shape_paths),
        config,
    );
    tracing::debug!(
        classes = classes.len(),
        individuals = individuals.len(),
        class_names = class_names.len(),
        property_names = property_names.len(),
        "pre-passes complete"
    );

    let ctx = Context {
        source,
        config,
        categories,
        class_names,
        property_names,
    };

    let mut model = ResolvedModel {
        schema_version: ResolvedModel::SCHEMA_VERSION,
        classes: Vec::new(),
        enums: Vec::new(),
        individuals: Vec::new(),
        property_constants: Vec::new(),
    };
    let mut constant_uris: BTreeSet<String> = BTreeSet::new();

    for (class, chain) in classes.iter().zip(&chains) {
        let Some(classification) = ctx.categories.get(&class.id) else {
            continue;
        };
        match classification.category {
            ClassCategory::Enumeration => {
                model.enums.push(ctx.enum_descriptor(class, &individuals));
            }
            ClassCategory::StringSubtype => {
                tracing::debug!(class = %class.id, "string subtype, not emitted");
            }
            _ => match ctx.resolve_class(class, chain, classification) {
                Ok(resolved) => {
                    constant_uris.extend(resolved.properties.iter().map(|p| p.uri.clone()));
                    for ind in singletons.get(class.id.as_str()).into_iter().flatten() {
                        model.individuals.push(ctx.individual(ind, &resolved));
                    }
                    model.classes.push(resolved);
                }
                Err(err) => {
                    tracing::warn!(class = %class.id, error = %err, "class dropped");
                    warnings.push(ResolutionWarning::new(class.id.clone(), &err));
                    for ind in singletons.get(class.id.as_str()).into_iter().flatten() {
                        warnings.push(unemitted_singleton(ind, &class.id));
                    }
                }
            },
        }
    }
    model.property_constants = ctx.property_constants(&constant_uris);

    tracing::info!(
        classes = model.classes.len(),
        enums = model.enums.len(),
        individuals = model.individuals.len(),
        properties = model.property_count(),
        warnings = warnings.len(),
        "schema resolved"
    );
    Ok(Resolution { model, warnings })
}

/// Snapshot of the pre-pass results shared by every per-class step.
struct Context<'a, S: ?Sized> {
    source: &'a S,
    config: &'a ResolverConfig,
    categories: CategoryMap,
    class_names: NameTable,
    property_names: NameTable,
}

impl<S: SchemaSource + ?Sized> Context<'_, S> {
    fn class_name(&self, iri: &str) -> String {
        self.class_names.name_or_local(iri, self.config)
    }

    fn resolve_class(
        &self,
        class: &ClassDescriptor,
        chain: &[String],
        classification: &Classification,
    ) -> Result<ResolvedClass, SchemaResolutionError> {
        let shapes = merged_shapes(self.source, &class.id, chain);
        if self.config.strict {
            if let Some(missing) = class
                .properties
                .iter()
                .find(|p| !shapes.iter().any(|ps| &ps.path == *p))
            {
                return Err(SchemaResolutionError::MissingShapeForProperty {
                    class: class.id.clone(),
                    property: missing.clone(),
                });
            }
        }
        let properties = shapes
            .iter()
            .map(|ps| self.resolve_property(&class.id, chain, ps))
            .collect::<Result<Vec<_>, _>>()?;

        let name = self.class_name(&class.id);
        let profile = profile_of(&class.id).to_owned();
        let super_class_name = chain
            .iter()
            .find(|sup| **sup != self.config.abstract_marker)
            .filter(|sup| **sup != self.config.owl_thing)
            .map(|sup| self.class_name(sup));
        let has_creation_info = properties
            .iter()
            .any(|p| p.is_creation_info && p.variant == PropertyTypeVariant::Object);
        let external_name = classification
            .lineage
            .is_externalizable()
            .then(|| format!("External{name}"));
        tracing::debug!(
            class = %class.id,
            name = %name,
            category = ?classification.category,
            properties = properties.len(),
            "class resolved"
        );
        Ok(ResolvedClass {
            uri: class.id.clone(),
            constant_name: format!("{}_{}", to_const_case(&profile), to_const_case(&name)),
            hints: hints_for(
                &class.id,
                chain,
                &self.config.semantic.element,
                &self.config.hints,
            ),
            comment: class.comment.clone(),
            is_abstract: self.config.is_abstract_class(class),
            category: classification.category,
            name,
            profile,
            super_class_name,
            properties,
            has_creation_info,
            external_name,
        })
    }

    fn resolve_property(
        &self,
        class_id: &str,
        chain: &[String],
        shape: &PropertyShapeDescriptor,
    ) -> Result<ResolvedProperty, SchemaResolutionError> {
        let path = shape.path.as_str();
        let constraint = EffectivePropertyConstraint::collect(&shape.fragments);
        let ty = resolve_property_type(
            path,
            &constraint,
            &self.categories,
            &self.class_names,
            self.config,
        )?;
        let name = self.property_names.name_or_local(path, self.config);
        let cap = capitalize(&name);
        let required = constraint.is_required();
        let ancestors = superclass_required(self.source, chain, path);
        let summary = constraint_summary(&constraint, &ty.type_uri, self.config);
        tracing::trace!(
            class = %class_id,
            property = %name,
            variant = ?ty.variant,
            required,
            "property resolved"
        );
        Ok(ResolvedProperty {
            uri: path.to_owned(),
            getter: format!("get{cap}"),
            setter: format!("set{cap}"),
            adder: format!("add{cap}"),
            add_all: format!("addAll{cap}"),
            constant_name: format!("PROP_{}", to_const_case(&name)),
            variant: ty.variant,
            type_uri: ty.type_uri,
            type_name: ty.type_name,
            required,
            non_optional: non_optional(
                required,
                namespace_of(path),
                namespace_of(class_id),
                ancestors,
            ),
            profile: profile_of(path).to_owned(),
            profile_identifier: profile_identifier(class_id),
            inherited: declared_in_ancestor(self.source, chain, path),
            superclass_required: ancestors,
            has_constraint: required || !summary.is_empty(),
            constraint: summary,
            is_creation_info: name == CREATION_INFO,
            is_spec_version: name == SPEC_VERSION,
            name,
        })
    }

    fn enum_descriptor(
        &self,
        class: &ClassDescriptor,
        individuals: &[&RawIndividual],
    ) -> EnumDescriptor {
        let members: Vec<EnumMember> = individuals
            .iter()
            .filter(|ind| ind.types.iter().any(|t| *t == class.id))
            .map(|ind| {
                let value = local_name(&ind.id).to_owned();
                EnumMember {
                    uri: ind.id.clone(),
                    constant: to_const_case(&value),
                    value,
                    comment: ind.comment.clone(),
                }
            })
            .collect();
        let name = self.class_name(&class.id);
        let profile = profile_of(&class.id).to_owned();
        tracing::debug!(class = %class.id, members = members.len(), "enumeration resolved");
        EnumDescriptor {
            uri: class.id.clone(),
            constant_name: format!("{}_{}", to_const_case(&profile), to_const_case(&name)),
            comment: class.comment.clone(),
            name,
            profile,
            members,
        }
    }

    fn individual(&self, ind: &RawIndividual, range: &ResolvedClass) -> IndividualDescriptor {
        let name = self.class_name(&ind.id);
        let profile = profile_of(&ind.id).to_owned();
        IndividualDescriptor {
            uri: ind.id.clone(),
            constant_name: format!("{}_{}", to_const_case(&profile), to_const_case(&name)),
            to_string_name: to_string_name(local_name(&ind.id), &name),
            comment: ind.comment.clone(),
            range_class: range.uri.clone(),
            range_class_name: range.name.clone(),
            super_class_name: range.super_class_name.clone(),
            properties: range.properties.clone(),
            name,
            profile,
        }
    }

    fn property_constants(&self, uris: &BTreeSet<String>) -> Vec<NamespaceConstants> {
        let mut groups: BTreeMap<&str, Vec<PropertyConstant>> = BTreeMap::new();
        for uri in uris {
            let value = self.property_names.name_or_local(uri, self.config);
            groups
                .entry(namespace_of(uri))
                .or_default()
                .push(PropertyConstant {
                    uri: uri.clone(),
                    constant_name: format!("PROP_{}", to_const_case(&value)),
                    value,
                });
        }
        groups
            .into_iter()
            .map(|(ns, properties)| {
                let name = local_name(ns).to_owned();
                NamespaceConstants {
                    namespace_uri: ns.to_owned(),
                    constant_name: format!("{}_NAMESPACE", to_const_case(&name)),
                    name,
                    properties,
                }
            })
            .collect()
    }
}

fn unemitted_singleton(ind: &RawIndividual, range: &str) -> ResolutionWarning {
    let err = SchemaResolutionError::UnemittedSingletonRange {
        individual: ind.id.clone(),
        range: range.to_owned(),
    };
    tracing::warn!(individual = %ind.id, error = %err, "individual dropped");
    ResolutionWarning::new(ind.id.clone(), &err)
}

/// The literal a singleton stringifies to.
fn to_string_name(local: &str, name: &str) -> String {
    if local.starts_with("NoAssertion") {
        "NOASSERTION".to_owned()
    } else if local.starts_with("None") {
        "NONE".to_owned()
    } else {
        name.to_owned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use shacl_model_spec::model::iris::*;
    use shacl_model_spec::{
        ConstraintFragment, Namespace, NamespaceModule, SchemaDocument, ShapeDescriptor, TypeRef,
    };

    fn ns(
        prefix: &str,
        classes: Vec<ClassDescriptor>,
        shapes: Vec<ShapeDescriptor>,
    ) -> NamespaceModule {
        NamespaceModule {
            namespace: Namespace {
                prefix: prefix.to_owned(),
                iri: format!("urn:t/{prefix}"),
                comment: String::new(),
            },
            classes,
            properties: Vec::new(),
            shapes,
            individuals: Vec::new(),
        }
    }

    fn shape(target: &str, props: Vec<(&str, Vec<ConstraintFragment>)>) -> ShapeDescriptor {
        ShapeDescriptor {
            target_class: target.to_owned(),
            properties: props
                .into_iter()
                .map(|(path, fragments)| PropertyShapeDescriptor {
                    path: path.to_owned(),
                    owner: target.to_owned(),
                    fragments,
                })
                .collect(),
        }
    }

    fn doc(modules: Vec<NamespaceModule>) -> SchemaDocument {
        SchemaDocument {
            version: "0".into(),
            base_iri: "urn:t/".into(),
            namespaces: modules,
        }
    }

    fn string_one() -> Vec<ConstraintFragment> {
        vec![
            ConstraintFragment::Datatype(TypeRef::Named(XSD_STRING.into())),
            ConstraintFragment::MaxCount(1),
        ]
    }

    #[test]
    fn to_string_names() {
        assert_eq!(to_string_name("NoAssertionLicense", "NoAssertionLicense"), "NOASSERTION");
        assert_eq!(to_string_name("NoneElement", "NoneElement"), "NONE");
        assert_eq!(to_string_name("Other", "CoreOther"), "CoreOther");
    }

    #[test]
    fn failing_class_is_dropped_with_warning() {
        let d = doc(vec![ns(
            "Core",
            vec![
                ClassDescriptor::new("urn:t/Core/Good"),
                ClassDescriptor::new("urn:t/Core/Bad"),
            ],
            vec![
                shape("urn:t/Core/Good", vec![("urn:t/Core/name", string_one())]),
                shape(
                    "urn:t/Core/Bad",
                    vec![("urn:t/Core/untyped", vec![ConstraintFragment::MinCount(1)])],
                ),
            ],
        )]);
        let resolution = resolve(&d, &ResolverConfig::default()).unwrap();
        assert!(!resolution.is_clean());
        assert_eq!(resolution.warnings.len(), 1);
        assert_eq!(resolution.warnings[0].subject, "urn:t/Core/Bad");
        assert_eq!(resolution.model.classes.len(), 1);
        assert_eq!(resolution.model.classes[0].name, "Good");
    }

    #[test]
    fn strict_mode_requires_shapes_for_declared_properties() {
        let d = doc(vec![ns(
            "Core",
            vec![ClassDescriptor::new("urn:t/Core/A").with_property("urn:t/Core/orphan")],
            Vec::new(),
        )]);
        let lax = resolve(&d, &ResolverConfig::default()).unwrap();
        assert!(lax.is_clean());
        let strict = ResolverConfig {
            strict: true,
            ..ResolverConfig::default()
        };
        let resolution = resolve(&d, &strict).unwrap();
        assert!(resolution.warnings[0].message.contains("urn:t/Core/orphan"));
        assert!(resolution.model.classes.is_empty());
    }

    #[test]
    fn cycle_aborts_the_run() {
        let d = doc(vec![ns(
            "Core",
            vec![
                ClassDescriptor::new("urn:t/Core/A").with_superclass("urn:t/Core/B"),
                ClassDescriptor::new("urn:t/Core/B").with_superclass("urn:t/Core/A"),
            ],
            Vec::new(),
        )]);
        assert!(matches!(
            resolve(&d, &ResolverConfig::default()),
            Err(ResolveError::CyclicSuperclass { .. })
        ));
    }

    #[test]
    fn ignored_classes_are_skipped() {
        let d = doc(vec![ns(
            "Core",
            vec![
                ClassDescriptor::new(ABSTRACT_CLASS),
                ClassDescriptor::new("urn:t/Core/Kept"),
            ],
            Vec::new(),
        )]);
        let resolution = resolve(&d, &ResolverConfig::default()).unwrap();
        assert_eq!(resolution.model.classes.len(), 1);
        assert!(resolution.model.class_by_uri(ABSTRACT_CLASS).is_none());
    }

    #[test]
    fn enum_members_follow_individual_order() {
        let mut module = ns(
            "Core",
            vec![ClassDescriptor::new("urn:t/Core/Kind")],
            Vec::new(),
        );
        for local in ["zeta", "alpha", "buildTool"] {
            module.individuals.push(RawIndividual {
                id: format!("urn:t/Core/Kind/{local}"),
                types: vec!["urn:t/Core/Kind".into()],
                label: Some(local.into()),
                range: None,
                comment: String::new(),
            });
        }
        let resolution = resolve(&doc(vec![module]), &ResolverConfig::default()).unwrap();
        let kind = resolution.model.enumeration("Kind").unwrap();
        let constants: Vec<&str> = kind.members.iter().map(|m| m.constant.as_str()).collect();
        assert_eq!(constants, vec!["ZETA", "ALPHA", "BUILD_TOOL"]);
        assert_eq!(kind.members[2].value, "buildTool");
        assert_eq!(kind.constant_name, "CORE_KIND");
        assert!(resolution.model.classes.is_empty());
    }

    #[test]
    fn singleton_inherits_range_properties() {
        let mut module = ns(
            "Core",
            vec![ClassDescriptor::new("urn:t/Core/Thing")],
            vec![shape("urn:t/Core/Thing", vec![("urn:t/Core/name", string_one())])],
        );
        module.individuals.push(RawIndividual {
            id: "urn:t/Core/NoAssertionThing".into(),
            types: Vec::new(),
            label: None,
            range: Some("urn:t/Core/Thing".into()),
            comment: "unknown".into(),
        });
        let resolution = resolve(&doc(vec![module]), &ResolverConfig::default()).unwrap();
        let ind = resolution.model.individual("NoAssertionThing").unwrap();
        assert_eq!(ind.range_class_name, "Thing");
        assert_eq!(ind.to_string_name, "NOASSERTION");
        assert_eq!(ind.constant_name, "CORE_NO_ASSERTION_THING");
        assert_eq!(ind.properties.len(), 1);
        assert_eq!(ind.properties[0].name, "name");
    }

    #[test]
    fn property_constants_grouped_by_namespace() {
        let d = doc(vec![
            ns(
                "Core",
                vec![ClassDescriptor::new("urn:t/Core/A")],
                vec![shape(
                    "urn:t/Core/A",
                    vec![
                        ("urn:t/Core/zed", string_one()),
                        ("urn:t/Extra/creationTool", string_one()),
                        ("urn:t/Core/alpha", string_one()),
                    ],
                )],
            ),
            ns("Extra", Vec::new(), Vec::new()),
        ]);
        let resolution = resolve(&d, &ResolverConfig::default()).unwrap();
        let groups = &resolution.model.property_constants;
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Core");
        assert_eq!(groups[0].constant_name, "CORE_NAMESPACE");
        let values: Vec<&str> = groups[0].properties.iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, vec!["alpha", "zed"]);
        assert_eq!(groups[1].properties[0].constant_name, "PROP_CREATION_TOOL");
    }
}
