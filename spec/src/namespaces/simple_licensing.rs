//! `SimpleLicensing/` profile: license expressions and free-form license text.

use super::{datatype_of, datatype_property, link_declared_properties, shape};
use crate::model::iris::*;
use crate::model::{
    ClassDescriptor, ConstraintFragment, Namespace, NamespaceModule, PropertyDescriptor,
    ShapeDescriptor,
};

fn sl(local: &str) -> String {
    format!("{NS_SIMPLE_LICENSING}/{local}")
}

/// Returns the `SimpleLicensing/` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    let shapes = shapes();
    let mut classes = classes();
    link_declared_properties(&mut classes, &shapes);
    NamespaceModule {
        namespace: Namespace {
            prefix: "SimpleLicensing".to_owned(),
            iri: NS_SIMPLE_LICENSING.to_owned(),
            comment: "Licensing information expressed as SPDX license expressions.".to_owned(),
        },
        classes,
        properties: properties(),
        shapes,
        individuals: Vec::new(),
    }
}

fn classes() -> Vec<ClassDescriptor> {
    vec![
        ClassDescriptor::new(ANY_LICENSE_INFO)
            .with_comment("Abstract class representing a license combination consisting of one or more licenses.")
            .with_superclass(ELEMENT)
            .abstract_class(),
        ClassDescriptor::new(sl("LicenseExpression"))
            .with_comment("An SPDX Element containing an SPDX license expression string.")
            .with_superclass(ANY_LICENSE_INFO),
        ClassDescriptor::new(sl("SimpleLicensingText"))
            .with_comment("A license or addition that is not listed on the SPDX License List.")
            .with_superclass(ELEMENT),
    ]
}

fn properties() -> Vec<PropertyDescriptor> {
    vec![
        datatype_property(sl("licenseExpression"), "A string in the license expression format."),
        datatype_property(sl("licenseListVersion"), "The version of the SPDX License List used in the license expression."),
        datatype_property(sl("licenseText"), "Identifies the full text of a License or Addition."),
    ]
}

fn shapes() -> Vec<ShapeDescriptor> {
    vec![
        shape(
            &sl("LicenseExpression"),
            vec![
                (
                    sl("licenseExpression"),
                    vec![
                        datatype_of(XSD_STRING),
                        ConstraintFragment::MinCount(1),
                        ConstraintFragment::MaxCount(1),
                    ],
                ),
                (
                    sl("licenseListVersion"),
                    vec![
                        datatype_of(format!("{NS_CORE}/SemVer")),
                        ConstraintFragment::Pattern(
                            r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)$".to_owned(),
                        ),
                        ConstraintFragment::MaxCount(1),
                    ],
                ),
            ],
        ),
        shape(
            &sl("SimpleLicensingText"),
            vec![(
                sl("licenseText"),
                vec![
                    datatype_of(XSD_STRING),
                    ConstraintFragment::MinCount(1),
                    ConstraintFragment::MaxCount(1),
                ],
            )],
        ),
    ]
}
