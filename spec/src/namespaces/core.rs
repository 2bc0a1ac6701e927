//! `Core/` profile: elements, agents, creation metadata, and relationships.
//!
//! Every other profile builds on `Core/Element`. This is the privileged base
//! namespace: its classes keep their short names when local names collide.

use super::{
    class_of, datatype_of, datatype_property, link_declared_properties, member, node_kind,
    object_property, shape, singleton,
};
use crate::model::iris::*;
use crate::model::{
    ClassDescriptor, ConstraintFragment, Namespace, NamespaceModule, PropertyDescriptor,
    RawIndividual, ShapeDescriptor,
};

fn core(local: &str) -> String {
    format!("{NS_CORE}/{local}")
}

/// Returns the `Core/` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    let shapes = shapes();
    let mut classes = classes();
    link_declared_properties(&mut classes, &shapes);
    NamespaceModule {
        namespace: Namespace {
            prefix: "Core".to_owned(),
            iri: NS_CORE.to_owned(),
            comment: "The foundation for all SPDX profiles: elements, agents, \
                      tools, creation information, and relationships."
                .to_owned(),
        },
        classes,
        properties: properties(),
        shapes,
        individuals: individuals(),
    }
}

fn classes() -> Vec<ClassDescriptor> {
    vec![
        ClassDescriptor::new(ELEMENT)
            .with_comment(
                "Base domain class from which all other SPDX-3.0 domain classes derive.",
            )
            .with_superclass(OWL_THING)
            .abstract_class(),
        ClassDescriptor::new(core("Artifact"))
            .with_comment(
                "A distinct article or unit within the digital domain, such as an \
                 electronic file, a software package, a device or an element of data.",
            )
            .with_superclass(ELEMENT)
            .abstract_class(),
        ClassDescriptor::new(core("Agent"))
            .with_comment("Agent represents anything with the potential to act on a system.")
            .with_superclass(ELEMENT),
        ClassDescriptor::new(core("Person"))
            .with_comment("An individual human being.")
            .with_superclass(core("Agent")),
        ClassDescriptor::new(core("Organization"))
            .with_comment("A group of people who work together in an organized way for a shared purpose.")
            .with_superclass(core("Agent")),
        ClassDescriptor::new(core("Tool"))
            .with_comment("An element of hardware and/or software utilized to carry out a particular function.")
            .with_superclass(ELEMENT),
        ClassDescriptor::new(core("CreationInfo"))
            .with_comment("Provides information about the creation of the Element."),
        ClassDescriptor::new(core("IntegrityMethod"))
            .with_comment("Provides an independently reproducible mechanism that permits verification of a specific Element.")
            .abstract_class(),
        ClassDescriptor::new(core("Hash"))
            .with_comment("A mathematically calculated representation of a grouping of data.")
            .with_superclass(core("IntegrityMethod")),
        ClassDescriptor::new(core("HashAlgorithm"))
            .with_comment("A mathematical algorithm that maps data of arbitrary size to a bit string."),
        ClassDescriptor::new(core("Relationship"))
            .with_comment("Describes a relationship between one or more elements.")
            .with_superclass(ELEMENT),
        ClassDescriptor::new(core("RelationshipType"))
            .with_comment("Information about the relationship between two Elements."),
        ClassDescriptor::new(core("RelationshipCompleteness"))
            .with_comment("Indicates whether a relationship is known to be complete, incomplete, or if no assertion is made with respect to relationship completeness.")
            .enumerated(),
        ClassDescriptor::new(core("ProfileIdentifierType"))
            .with_comment("Enumeration of the valid profiles.")
            .enumerated(),
        ClassDescriptor::new(core("MediaType"))
            .with_comment("Standardized way of indicating the type of content of an Element.")
            .with_superclass(XSD_STRING),
    ]
}

fn properties() -> Vec<PropertyDescriptor> {
    vec![
        datatype_property(core("name"), "Identifies the name of an Element as designated by the creator."),
        datatype_property(core("description"), "Provides a detailed description of the Element."),
        datatype_property(core("comment"), "Provide consumers with comments by the creator of the Element about the Element."),
        object_property(core("creationInfo"), "Provides information about the creation of the Element."),
        object_property(core("verifiedUsing"), "Provides an IntegrityMethod with which the integrity of an Element can be asserted."),
        datatype_property(core("builtTime"), "Specifies the time an artifact was built."),
        object_property(core("originatedBy"), "Identifies from where or whom the Element originally came."),
        object_property(core("suppliedBy"), "Identifies who or what supplied the artifact or VulnAssessmentRelationship referenced by the Element."),
        datatype_property(core("specVersion"), "Provides a reference number that can be used to understand how to parse and interpret an Element."),
        datatype_property(core("created"), "Identifies when the Element was originally created."),
        object_property(core("createdBy"), "Identifies who or what created the Element."),
        object_property(core("createdUsing"), "Identifies the tooling that was used during the creation of the Element."),
        object_property(core("algorithm"), "Specifies the algorithm used for calculating the hash value."),
        datatype_property(core("hashValue"), "The result of applying a hash algorithm to an Element."),
        object_property(core("from"), "References the Element on the left-hand side of a relationship."),
        object_property(core("to"), "References an Element on the right-hand side of a relationship."),
        object_property(core("relationshipType"), "Information about the relationship between two Elements."),
        object_property(core("completeness"), "Provides information about the completeness of relationships."),
    ]
}

fn shapes() -> Vec<ShapeDescriptor> {
    vec![
        shape(
            ELEMENT,
            vec![
                (core("name"), vec![datatype_of(XSD_STRING), ConstraintFragment::MaxCount(1), node_kind("sh:Literal")]),
                (core("description"), vec![datatype_of(XSD_STRING), ConstraintFragment::MaxCount(1)]),
                (core("comment"), vec![datatype_of(XSD_STRING), ConstraintFragment::MaxCount(1)]),
                (
                    core("creationInfo"),
                    vec![
                        class_of(core("CreationInfo")),
                        ConstraintFragment::MinCount(1),
                        ConstraintFragment::MaxCount(1),
                        node_kind("sh:BlankNodeOrIRI"),
                    ],
                ),
                (core("verifiedUsing"), vec![class_of(core("IntegrityMethod"))]),
            ],
        ),
        shape(
            &core("Artifact"),
            vec![
                (
                    core("builtTime"),
                    vec![
                        datatype_of(core("DateTime")),
                        ConstraintFragment::Pattern(r"^\d\d\d\d-\d\d-\d\dT\d\d:\d\d:\d\dZ$".to_owned()),
                        ConstraintFragment::MaxCount(1),
                    ],
                ),
                (core("originatedBy"), vec![class_of(core("Agent"))]),
                (core("suppliedBy"), vec![class_of(core("Agent")), ConstraintFragment::MaxCount(1)]),
            ],
        ),
        shape(
            &core("CreationInfo"),
            vec![
                (
                    core("specVersion"),
                    vec![
                        datatype_of(core("SemVer")),
                        ConstraintFragment::Pattern(r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)$".to_owned()),
                        ConstraintFragment::MinCount(1),
                        ConstraintFragment::MaxCount(1),
                    ],
                ),
                (
                    core("created"),
                    vec![
                        datatype_of(XSD_DATE_TIME_STAMP),
                        ConstraintFragment::MinCount(1),
                        ConstraintFragment::MaxCount(1),
                    ],
                ),
                (core("createdBy"), vec![class_of(core("Agent")), ConstraintFragment::MinCount(1)]),
                (core("createdUsing"), vec![class_of(core("Tool"))]),
                (core("comment"), vec![datatype_of(XSD_STRING), ConstraintFragment::MaxCount(1)]),
            ],
        ),
        shape(
            &core("Hash"),
            vec![
                (
                    core("algorithm"),
                    vec![
                        class_of(core("HashAlgorithm")),
                        ConstraintFragment::MinCount(1),
                        ConstraintFragment::MaxCount(1),
                        ConstraintFragment::Other("sh:in".to_owned()),
                    ],
                ),
                (
                    core("hashValue"),
                    vec![
                        datatype_of(XSD_STRING),
                        ConstraintFragment::MinCount(1),
                        ConstraintFragment::MaxCount(1),
                    ],
                ),
            ],
        ),
        shape(
            &core("Relationship"),
            vec![
                (
                    core("from"),
                    vec![class_of(ELEMENT), ConstraintFragment::MinCount(1), ConstraintFragment::MaxCount(1)],
                ),
                (core("to"), vec![class_of(ELEMENT), ConstraintFragment::MinCount(1)]),
                (
                    core("relationshipType"),
                    vec![
                        class_of(core("RelationshipType")),
                        ConstraintFragment::MinCount(1),
                        ConstraintFragment::MaxCount(1),
                    ],
                ),
                (
                    core("completeness"),
                    vec![class_of(core("RelationshipCompleteness")), ConstraintFragment::MaxCount(1)],
                ),
            ],
        ),
    ]
}

fn individuals() -> Vec<RawIndividual> {
    let hash = core("HashAlgorithm");
    let rel = core("RelationshipType");
    let completeness = core("RelationshipCompleteness");
    let profile = core("ProfileIdentifierType");
    vec![
        member(format!("{hash}/md5"), &hash, "MD5 message-digest algorithm."),
        member(format!("{hash}/sha1"), &hash, "SHA-1, a secure hashing algorithm."),
        member(format!("{hash}/sha256"), &hash, "SHA-2 with a digest length of 256 bits."),
        member(format!("{rel}/contains"), &rel, "The from Element contains each to Element."),
        member(format!("{rel}/dependsOn"), &rel, "The from Element depends on each to Element."),
        member(format!("{rel}/describes"), &rel, "The from Element describes each to Element."),
        member(format!("{completeness}/complete"), &completeness, "The relationship is known to be exhaustive."),
        member(format!("{completeness}/incomplete"), &completeness, "The relationship is known not to be exhaustive."),
        member(format!("{completeness}/noAssertion"), &completeness, "No assertion can be made about the completeness of the relationship."),
        member(format!("{profile}/core"), &profile, "The foundation for all SPDX profiles."),
        member(format!("{profile}/software"), &profile, "The software profile."),
        member(format!("{profile}/simpleLicensing"), &profile, "The simple licensing profile."),
        member(format!("{profile}/expandedLicensing"), &profile, "The expanded licensing profile."),
        singleton(core("NoAssertionElement"), ELEMENT, "An Individual Value for Element representing a set of Elements of unknown identify or cardinality (number)."),
        singleton(core("NoneElement"), ELEMENT, "An Individual Value for Element representing a set of Elements with cardinality (number/count) of zero."),
    ]
}
