//! `Software/` profile: packages, files, and their purposes.
//!
//! `Software/Package` and `Software/File` exercise the reserved-word renaming:
//! their local names clash with common target-language identifiers.

use super::{
    class_of, datatype_of, datatype_property, link_declared_properties, member,
    object_property, shape,
};
use crate::model::iris::*;
use crate::model::{
    ClassDescriptor, ConstraintFragment, Namespace, NamespaceModule, PropertyDescriptor,
    RawIndividual, ShapeDescriptor,
};

fn sw(local: &str) -> String {
    format!("{NS_SOFTWARE}/{local}")
}

/// Returns the `Software/` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    let shapes = shapes();
    let mut classes = classes();
    link_declared_properties(&mut classes, &shapes);
    NamespaceModule {
        namespace: Namespace {
            prefix: "Software".to_owned(),
            iri: NS_SOFTWARE.to_owned(),
            comment: "Information about software packages, files, and snippets.".to_owned(),
        },
        classes,
        properties: properties(),
        shapes,
        individuals: individuals(),
    }
}

fn classes() -> Vec<ClassDescriptor> {
    vec![
        ClassDescriptor::new(sw("SoftwareArtifact"))
            .with_comment("A distinct article or unit related to Software.")
            .with_superclass(format!("{NS_CORE}/Artifact"))
            .abstract_class(),
        ClassDescriptor::new(sw("Package"))
            .with_comment(
                "Refers to any unit of content that can be associated with a distribution \
                 of software.",
            )
            .with_superclass(sw("SoftwareArtifact")),
        ClassDescriptor::new(sw("File"))
            .with_comment("Refers to any object that stores content on a computer.")
            .with_superclass(sw("SoftwareArtifact")),
        ClassDescriptor::new(sw("SoftwarePurpose"))
            .with_comment("Provides information about the primary purpose of an Element."),
    ]
}

fn properties() -> Vec<PropertyDescriptor> {
    vec![
        object_property(sw("primaryPurpose"), "Provides information about the primary purpose of the software artifact."),
        object_property(sw("additionalPurpose"), "Provides additional purpose information of the software artifact."),
        datatype_property(sw("copyrightText"), "Identifies the text of one or more copyright notices for a software artifact."),
        datatype_property(sw("packageVersion"), "Identify the version of a package."),
        datatype_property(sw("downloadLocation"), "Identifies the download Uniform Resource Identifier for the package at the time that the document was created."),
        datatype_property(sw("packageUrl"), "Provides a place for the SPDX data creator to record the package URL string."),
        datatype_property(sw("homePage"), "A place for the SPDX document creator to record a website that serves as the package's home page."),
        datatype_property(sw("contentType"), "Provides information about the content type of an Element."),
    ]
}

fn shapes() -> Vec<ShapeDescriptor> {
    vec![
        shape(
            &sw("SoftwareArtifact"),
            vec![
                (
                    sw("primaryPurpose"),
                    vec![class_of(sw("SoftwarePurpose")), ConstraintFragment::MaxCount(1)],
                ),
                (sw("additionalPurpose"), vec![class_of(sw("SoftwarePurpose"))]),
                (
                    sw("copyrightText"),
                    vec![datatype_of(XSD_STRING), ConstraintFragment::MaxCount(1)],
                ),
            ],
        ),
        shape(
            &sw("Package"),
            vec![
                (
                    sw("packageVersion"),
                    vec![datatype_of(XSD_STRING), ConstraintFragment::MaxCount(1)],
                ),
                (
                    sw("downloadLocation"),
                    vec![datatype_of(XSD_ANY_URI), ConstraintFragment::MaxCount(1)],
                ),
                (
                    sw("packageUrl"),
                    vec![datatype_of(XSD_ANY_URI), ConstraintFragment::MaxCount(1)],
                ),
                (
                    sw("homePage"),
                    vec![datatype_of(XSD_ANY_URI), ConstraintFragment::MaxCount(1)],
                ),
            ],
        ),
        shape(
            &sw("File"),
            vec![(
                sw("contentType"),
                vec![
                    datatype_of(format!("{NS_CORE}/MediaType")),
                    ConstraintFragment::Pattern(r"^[^\/]+\/[^\/]+$".to_owned()),
                    ConstraintFragment::MaxCount(1),
                ],
            )],
        ),
    ]
}

fn individuals() -> Vec<RawIndividual> {
    let purpose = sw("SoftwarePurpose");
    vec![
        member(format!("{purpose}/application"), &purpose, "The Element is a software application."),
        member(format!("{purpose}/library"), &purpose, "The Element is a software library."),
        member(format!("{purpose}/source"), &purpose, "The Element is a single or a collection of source files."),
        member(format!("{purpose}/other"), &purpose, "The Element doesn't fit into any of the other categories."),
    ]
}
