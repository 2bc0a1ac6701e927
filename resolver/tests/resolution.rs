//! End-to-end resolution tests.
//!
//! Runs the full pipeline against the bundled SPDX 3.0.0 sample and against
//! small hand-built schemas.

#![allow(clippy::unwrap_used)]

use shacl_model_resolver::hints::{EmissionHint, LicenseOperator};
use shacl_model_resolver::{
    resolve, ClassCategory, PropertyTypeVariant, ResolvedClass, ResolvedModel, ResolverConfig,
    SuperclassRequired,
};
use shacl_model_spec::model::iris::*;
use shacl_model_spec::{
    ClassDescriptor, ConstraintFragment, Namespace, NamespaceModule, PropertyShapeDescriptor,
    RawIndividual, SchemaDocument, ShapeDescriptor, TypeRef,
};

fn sample() -> ResolvedModel {
    let resolution = resolve(SchemaDocument::sample(), &ResolverConfig::default()).unwrap();
    assert!(resolution.is_clean(), "warnings: {:?}", resolution.warnings);
    resolution.model
}

fn class<'m>(model: &'m ResolvedModel, name: &str) -> &'m ResolvedClass {
    model
        .class(name)
        .unwrap_or_else(|| panic!("class {name} not resolved"))
}

fn named(iri: &str) -> TypeRef {
    TypeRef::Named(iri.to_owned())
}

// =============================================================================
// Sample schema
// =============================================================================

#[test]
fn sample_resolves_every_emittable_class() {
    let model = sample();
    assert_eq!(model.schema_version, ResolvedModel::SCHEMA_VERSION);
    // MediaType is a string subtype and never emitted.
    assert!(model.class("MediaType").is_none());
    // Enumerations live in their own list.
    for name in [
        "HashAlgorithm",
        "RelationshipType",
        "RelationshipCompleteness",
        "ProfileIdentifierType",
        "SoftwarePurpose",
    ] {
        assert!(model.enumeration(name).is_some(), "{name} is not an enum");
        assert!(model.class(name).is_none(), "{name} resolved as a class");
    }
    let emitted = SchemaDocument::sample().class_count() - 1 - 5;
    assert_eq!(model.classes.len(), emitted);
}

#[test]
fn reserved_words_rename_package_and_file() {
    let model = sample();
    let pkg = class(&model, "SpdxPackage");
    assert_eq!(pkg.uri, format!("{NS_SOFTWARE}/Package"));
    assert_eq!(pkg.constant_name, "SOFTWARE_SPDX_PACKAGE");
    assert_eq!(pkg.external_name.as_deref(), Some("ExternalSpdxPackage"));
    assert!(class(&model, "SpdxFile").property("contentType").is_some());
}

#[test]
fn package_properties_own_first_then_nearest_ancestor() {
    let model = sample();
    let pkg = class(&model, "SpdxPackage");
    let names: Vec<&str> = pkg.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "packageVersion",
            "downloadLocation",
            "packageUrl",
            "homePage",
            "primaryPurpose",
            "additionalPurpose",
            "copyrightText",
            "builtTime",
            "originatedBy",
            "suppliedBy",
            "name",
            "description",
            "comment",
            "creationInfo",
            "verifiedUsing",
        ]
    );
    assert!(!pkg.property("packageVersion").unwrap().inherited);
    assert!(pkg.property("name").unwrap().inherited);
}

#[test]
fn package_property_variants() {
    let model = sample();
    let pkg = class(&model, "SpdxPackage");
    let variant = |name: &str| pkg.property(name).unwrap().variant;
    assert_eq!(variant("downloadLocation"), PropertyTypeVariant::String);
    assert_eq!(variant("primaryPurpose"), PropertyTypeVariant::Enum);
    assert_eq!(variant("additionalPurpose"), PropertyTypeVariant::EnumCollection);
    assert_eq!(variant("builtTime"), PropertyTypeVariant::String);
    assert_eq!(variant("originatedBy"), PropertyTypeVariant::ObjectCollection);
    assert_eq!(variant("suppliedBy"), PropertyTypeVariant::Element);
    assert_eq!(variant("creationInfo"), PropertyTypeVariant::Object);
    assert_eq!(variant("verifiedUsing"), PropertyTypeVariant::ObjectCollection);

    let purpose = pkg.property("primaryPurpose").unwrap();
    assert_eq!(purpose.type_name, "SoftwarePurpose");
    let built = pkg.property("builtTime").unwrap();
    assert_eq!(built.type_uri, XSD_STRING);
    assert!(built.constraint.pattern.is_some());
    assert!(built.has_constraint);
}

#[test]
fn creation_info_is_non_optional_only_in_its_own_namespace() {
    let model = sample();
    let element = class(&model, "Element");
    let ci = element.property("creationInfo").unwrap();
    assert!(ci.required);
    assert!(ci.is_creation_info);
    assert!(ci.non_optional);
    assert_eq!(ci.superclass_required, SuperclassRequired::None);
    assert!(element.has_creation_info);
    assert_eq!(element.super_class_name, None);

    let pkg = class(&model, "SpdxPackage");
    let ci = pkg.property("creationInfo").unwrap();
    assert!(ci.required);
    assert!(!ci.non_optional);
    assert_eq!(ci.superclass_required, SuperclassRequired::Yes);
    assert_eq!(ci.profile, "Core");
    assert_eq!(ci.profile_identifier, "ProfileIdentifierType.SOFTWARE");
    assert!(pkg.has_creation_info);
}

#[test]
fn spec_version_is_flagged() {
    let model = sample();
    let ci = class(&model, "CreationInfo");
    assert_eq!(ci.category, ClassCategory::PlainObject);
    assert!(ci.external_name.is_none());
    let sv = ci.property("specVersion").unwrap();
    assert!(sv.is_spec_version);
    assert_eq!(sv.variant, PropertyTypeVariant::String);
    assert_eq!(sv.constant_name, "PROP_SPEC_VERSION");
    assert_eq!(sv.getter, "getSpecVersion");
    assert_eq!(sv.add_all, "addAllSpecVersion");
}

#[test]
fn license_categories_and_variants() {
    let model = sample();
    assert_eq!(
        class(&model, "AnyLicenseInfo").category,
        ClassCategory::AnyLicenseInfo
    );
    // License descends from both ExtendableLicense and AnyLicenseInfo.
    assert_eq!(class(&model, "License").category, ClassCategory::AnyLicenseInfo);
    assert_eq!(
        class(&model, "CustomLicenseAddition").category,
        ClassCategory::LicenseAddition
    );

    let with = class(&model, "WithAdditionOperator");
    assert_eq!(
        with.property("subjectExtendableLicense").unwrap().variant,
        PropertyTypeVariant::ExtendableLicense
    );
    assert_eq!(
        with.property("subjectAddition").unwrap().variant,
        PropertyTypeVariant::LicenseAddition
    );
    let or_later = class(&model, "OrLaterOperator");
    assert_eq!(
        or_later.property("subjectLicense").unwrap().variant,
        PropertyTypeVariant::ExtendableLicense
    );
    let set = class(&model, "ConjunctiveLicenseSet");
    assert_eq!(
        set.property("member").unwrap().variant,
        PropertyTypeVariant::ObjectSet
    );
}

#[test]
fn borrowed_property_is_never_non_optional() {
    let model = sample();
    let license = class(&model, "License");
    let text = license.property("licenseText").unwrap();
    assert!(text.required);
    assert!(!text.non_optional);
    assert_eq!(text.profile, "SimpleLicensing");
    assert_eq!(
        license.property("isOsiApproved").unwrap().variant,
        PropertyTypeVariant::Boolean
    );
}

#[test]
fn license_composition_hints() {
    let model = sample();
    assert_eq!(
        class(&model, "DisjunctiveLicenseSet").hints,
        vec![
            EmissionHint::LicenseSetEquals {
                prime: 41,
                operator: LicenseOperator::Or
            },
            EmissionHint::LicenseSetToString {
                operator: LicenseOperator::Or
            },
        ]
    );
    assert_eq!(
        class(&model, "Person").hints,
        vec![EmissionHint::InheritedElementToString]
    );
    assert!(class(&model, "Hash").hints.is_empty());
}

#[test]
fn singletons_follow_their_range_class() {
    let model = sample();
    let names: Vec<&str> = model.individuals.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["NoAssertionElement", "NoneElement", "NoAssertionLicense", "NoneLicense"]
    );
    let none = model.individual("NoneLicense").unwrap();
    assert_eq!(none.to_string_name, "NONE");
    assert_eq!(none.range_class_name, "AnyLicenseInfo");
    assert_eq!(none.super_class_name.as_deref(), Some("Element"));
    assert_eq!(none.constant_name, "EXPANDED_LICENSING_NONE_LICENSE");
    let element = class(&model, "Element");
    assert_eq!(
        model.individual("NoAssertionElement").unwrap().properties,
        element.properties
    );
}

#[test]
fn enum_members_carry_constants() {
    let model = sample();
    let completeness = model.enumeration("RelationshipCompleteness").unwrap();
    let members: Vec<(&str, &str)> = completeness
        .members
        .iter()
        .map(|m| (m.constant.as_str(), m.value.as_str()))
        .collect();
    assert_eq!(
        members,
        vec![
            ("COMPLETE", "complete"),
            ("INCOMPLETE", "incomplete"),
            ("NO_ASSERTION", "noAssertion"),
        ]
    );
}

#[test]
fn property_constants_are_grouped_and_sorted() {
    let model = sample();
    let groups: Vec<&str> = model
        .property_constants
        .iter()
        .map(|g| g.name.as_str())
        .collect();
    assert_eq!(
        groups,
        vec!["Core", "ExpandedLicensing", "SimpleLicensing", "Software"]
    );
    for group in &model.property_constants {
        let uris: Vec<&str> = group.properties.iter().map(|p| p.uri.as_str()).collect();
        let mut sorted = uris.clone();
        sorted.sort_unstable();
        assert_eq!(uris, sorted);
    }
    let core = &model.property_constants[0];
    assert_eq!(core.constant_name, "CORE_NAMESPACE");
    assert!(core
        .properties
        .iter()
        .any(|p| p.constant_name == "PROP_CREATION_INFO" && p.value == "creationInfo"));
}

#[test]
fn resolution_is_deterministic() {
    let a = resolve(SchemaDocument::sample(), &ResolverConfig::default()).unwrap();
    let b = resolve(SchemaDocument::sample(), &ResolverConfig::default()).unwrap();
    assert_eq!(a, b);
    let ja = serde_json::to_string(&a).unwrap();
    let jb = serde_json::to_string(&b).unwrap();
    assert_eq!(ja, jb);
}

// =============================================================================
// Hand-built schemas
// =============================================================================

fn module(
    prefix: &str,
    classes: Vec<ClassDescriptor>,
    shapes: Vec<ShapeDescriptor>,
) -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: prefix.to_owned(),
            iri: format!("{SPDX_TERMS}{prefix}"),
            comment: String::new(),
        },
        classes,
        properties: Vec::new(),
        shapes,
        individuals: Vec::new(),
    }
}

fn shape(target: &str, props: Vec<(String, Vec<ConstraintFragment>)>) -> ShapeDescriptor {
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

fn document(namespaces: Vec<NamespaceModule>) -> SchemaDocument {
    SchemaDocument {
        version: "test".into(),
        base_iri: SPDX_TERMS.into(),
        namespaces,
    }
}

#[test]
fn core_package_name_and_checksums() {
    let pkg = format!("{NS_CORE}/Package");
    let doc = document(vec![module(
        "Core",
        vec![ClassDescriptor::new(&pkg)],
        vec![shape(
            &pkg,
            vec![
                (
                    format!("{NS_CORE}/name"),
                    vec![
                        ConstraintFragment::Datatype(named(XSD_STRING)),
                        ConstraintFragment::MinCount(1),
                        ConstraintFragment::MaxCount(1),
                    ],
                ),
                (
                    format!("{NS_CORE}/checksums"),
                    vec![ConstraintFragment::Datatype(named(XSD_STRING))],
                ),
            ],
        )],
    )]);
    let resolution = resolve(&doc, &ResolverConfig::default()).unwrap();
    assert!(resolution.is_clean());
    let class = resolution.model.class_by_uri(&pkg).unwrap();
    let name = class.property("name").unwrap();
    assert_eq!(name.variant, PropertyTypeVariant::String);
    assert!(name.required);
    assert!(name.non_optional);
    let checksums = class.property("checksums").unwrap();
    assert_eq!(checksums.variant, PropertyTypeVariant::StringCollection);
    assert!(!checksums.required);
}

#[test]
fn base_namespace_class_keeps_short_name_regardless_of_order() {
    let core_hash = format!("{NS_CORE}/Hash");
    let sw_hash = format!("{NS_SOFTWARE}/Hash");
    let core = module("Core", vec![ClassDescriptor::new(&core_hash)], Vec::new());
    let software = module("Software", vec![ClassDescriptor::new(&sw_hash)], Vec::new());
    for namespaces in [
        vec![core.clone(), software.clone()],
        vec![software.clone(), core.clone()],
    ] {
        let model = resolve(&document(namespaces), &ResolverConfig::default())
            .unwrap()
            .model;
        assert_eq!(model.class_by_uri(&core_hash).unwrap().name, "Hash");
        assert_eq!(model.class_by_uri(&sw_hash).unwrap().name, "SoftwareHash");
    }
}

#[test]
fn superclass_requiredness_across_a_chain() {
    // A -> B -> C, with C and A requiring p and B silent.
    let ns = |local: &str| format!("{NS_CORE}/{local}");
    let p = ns("p");
    let required = || {
        vec![
            ConstraintFragment::Datatype(named(XSD_STRING)),
            ConstraintFragment::MinCount(1),
        ]
    };
    let doc = document(vec![module(
        "Core",
        vec![
            ClassDescriptor::new(ns("A")).with_superclass(ns("B")),
            ClassDescriptor::new(ns("B")).with_superclass(ns("C")),
            ClassDescriptor::new(ns("C")),
        ],
        vec![
            shape(&ns("A"), vec![(p.clone(), required())]),
            shape(&ns("C"), vec![(p.clone(), required())]),
        ],
    )]);
    let model = resolve(&doc, &ResolverConfig::default()).unwrap().model;
    let a = model.class("A").unwrap().property("p").unwrap();
    assert_eq!(a.superclass_required, SuperclassRequired::Yes);
    assert!(a.non_optional);
    let b = model.class("B").unwrap().property("p").unwrap();
    assert!(b.inherited);
    assert_eq!(model.class("A").unwrap().super_class_name.as_deref(), Some("B"));
}

#[test]
fn enumeration_has_no_properties() {
    let kind = format!("{NS_CORE}/Kind");
    let doc = document(vec![module(
        "Core",
        vec![ClassDescriptor::new(&kind).enumerated()],
        vec![shape(
            &kind,
            vec![(format!("{NS_CORE}/untyped"), vec![ConstraintFragment::MinCount(1)])],
        )],
    )]);
    let resolution = resolve(&doc, &ResolverConfig::default()).unwrap();
    // The untyped shape would fail as a class; as an enum it is never resolved.
    assert!(resolution.is_clean());
    assert!(resolution.model.classes.is_empty());
    assert!(resolution.model.enumeration("Kind").unwrap().members.is_empty());
}

#[test]
fn config_override_changes_base_profile() {
    let config = ResolverConfig::from_toml_str("base_profile = \"Software\"").unwrap();
    let core_hash = format!("{NS_CORE}/Hash");
    let sw_hash = format!("{NS_SOFTWARE}/Hash");
    let doc = document(vec![
        module("Core", vec![ClassDescriptor::new(&core_hash)], Vec::new()),
        module("Software", vec![ClassDescriptor::new(&sw_hash)], Vec::new()),
    ]);
    let model = resolve(&doc, &config).unwrap().model;
    assert_eq!(model.class_by_uri(&sw_hash).unwrap().name, "Hash");
    assert_eq!(model.class_by_uri(&core_hash).unwrap().name, "CoreHash");
}

fn singleton(iri: &str, range: &str) -> RawIndividual {
    RawIndividual {
        id: iri.to_owned(),
        types: Vec::new(),
        label: None,
        range: Some(range.to_owned()),
        comment: String::new(),
    }
}

#[test]
fn singleton_with_unknown_range_is_reported_and_frees_its_name() {
    let sw_thing = format!("{NS_SOFTWARE}/Thing");
    let missing = format!("{NS_CORE}/NotAClass");
    let mut core = module("Core", Vec::new(), Vec::new());
    core.individuals.push(singleton(&format!("{NS_CORE}/Thing"), &missing));
    let software = module("Software", vec![ClassDescriptor::new(&sw_thing)], Vec::new());
    let doc = document(vec![core, software]);
    let resolution = resolve(&doc, &ResolverConfig::default()).unwrap();

    assert!(!resolution.is_clean());
    assert_eq!(resolution.warnings.len(), 1);
    assert_eq!(resolution.warnings[0].subject, format!("{NS_CORE}/Thing"));
    assert!(resolution.model.individuals.is_empty());
    assert_eq!(resolution.model.class_by_uri(&sw_thing).unwrap().name, "Thing");
}

#[test]
fn singleton_of_enumeration_or_dropped_class_is_reported() {
    let kind = format!("{NS_CORE}/Kind");
    let broken = format!("{NS_CORE}/Broken");
    let mut core = module(
        "Core",
        vec![
            ClassDescriptor::new(&kind).enumerated(),
            ClassDescriptor::new(&broken),
        ],
        vec![shape(
            &broken,
            vec![(format!("{NS_CORE}/untyped"), vec![ConstraintFragment::MinCount(1)])],
        )],
    );
    core.individuals.push(singleton(&format!("{NS_CORE}/NoneKind"), &kind));
    core.individuals.push(singleton(&format!("{NS_CORE}/NoneBroken"), &broken));
    let resolution = resolve(&document(vec![core]), &ResolverConfig::default()).unwrap();

    let subjects: Vec<&str> = resolution
        .warnings
        .iter()
        .map(|w| w.subject.as_str())
        .collect();
    assert_eq!(subjects.len(), 3);
    assert!(subjects.contains(&format!("{NS_CORE}/NoneKind").as_str()));
    assert!(subjects.contains(&format!("{NS_CORE}/NoneBroken").as_str()));
    assert!(subjects.contains(&broken.as_str()));
    assert!(resolution.model.individuals.is_empty());
}

#[test]
fn abstract_marker_superclass_marks_class_abstract() {
    let base = format!("{NS_CORE}/Base");
    let leaf = format!("{NS_CORE}/Leaf");
    let doc = document(vec![module(
        "Core",
        vec![
            ClassDescriptor::new(&base).with_superclass(ABSTRACT_CLASS),
            ClassDescriptor::new(&leaf).with_superclass(&base),
        ],
        Vec::new(),
    )]);
    let model = resolve(&doc, &ResolverConfig::default()).unwrap().model;
    let base_class = model.class_by_uri(&base).unwrap();
    assert!(base_class.is_abstract);
    assert_eq!(base_class.super_class_name, None);
    let leaf_class = model.class_by_uri(&leaf).unwrap();
    assert!(!leaf_class.is_abstract);
    assert_eq!(leaf_class.super_class_name.as_deref(), Some("Base"));

    let toml = format!("abstract_marker = \"{base}\"");
    let config = ResolverConfig::from_toml_str(&toml).unwrap();
    let model = resolve(&doc, &config).unwrap().model;
    assert!(model.class_by_uri(&leaf).unwrap().is_abstract);
    assert!(!model.class_by_uri(&base).unwrap().is_abstract);
}
