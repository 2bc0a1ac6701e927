//! `ExpandedLicensing/` profile: licenses, additions, and license-set operators.
//!
//! `License` borrows `licenseText` from `SimpleLicensing/`, so that property
//! is never non-optional on its accessors even though it is required.

use super::{
    class_of, datatype_of, datatype_property, link_declared_properties, object_property, shape,
    singleton,
};
use crate::model::iris::*;
use crate::model::{
    ClassDescriptor, ConstraintFragment, Namespace, NamespaceModule, PropertyDescriptor,
    RawIndividual, ShapeDescriptor,
};

fn el(local: &str) -> String {
    format!("{NS_EXPANDED_LICENSING}/{local}")
}

/// Returns the `ExpandedLicensing/` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    let shapes = shapes();
    let mut classes = classes();
    link_declared_properties(&mut classes, &shapes);
    NamespaceModule {
        namespace: Namespace {
            prefix: "ExpandedLicensing".to_owned(),
            iri: NS_EXPANDED_LICENSING.to_owned(),
            comment: "Detailed licensing information: listed and custom licenses, \
                      additions, and license-set operators."
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
        ClassDescriptor::new(EXTENDABLE_LICENSE)
            .with_comment("Abstract class representing a License or an OrLaterOperator.")
            .with_superclass(ANY_LICENSE_INFO)
            .abstract_class(),
        ClassDescriptor::new(el("License"))
            .with_comment("Abstract class for the portion of an AnyLicenseInfo representing a license.")
            .with_superclass(EXTENDABLE_LICENSE)
            .abstract_class(),
        ClassDescriptor::new(el("ListedLicense"))
            .with_comment("A license that is listed on the SPDX License List.")
            .with_superclass(el("License")),
        ClassDescriptor::new(el("CustomLicense"))
            .with_comment("A license that is not listed on the SPDX License List.")
            .with_superclass(el("License")),
        ClassDescriptor::new(el("OrLaterOperator"))
            .with_comment("Portion of an AnyLicenseInfo representing this version, or any later version, of the indicated License.")
            .with_superclass(EXTENDABLE_LICENSE),
        ClassDescriptor::new(LICENSE_ADDITION)
            .with_comment("Abstract class for additional text intended to be added to a License.")
            .with_superclass(ELEMENT)
            .abstract_class(),
        ClassDescriptor::new(el("ListedLicenseException"))
            .with_comment("A license exception that is listed on the SPDX Exceptions list.")
            .with_superclass(LICENSE_ADDITION),
        ClassDescriptor::new(el("CustomLicenseAddition"))
            .with_comment("A license addition that is not listed on the SPDX Exceptions List.")
            .with_superclass(LICENSE_ADDITION),
        ClassDescriptor::new(el("ConjunctiveLicenseSet"))
            .with_comment("Portion of an AnyLicenseInfo representing a set of licensing information where all elements apply.")
            .with_superclass(ANY_LICENSE_INFO),
        ClassDescriptor::new(el("DisjunctiveLicenseSet"))
            .with_comment("Portion of an AnyLicenseInfo representing a set of licensing information where only one of the elements applies.")
            .with_superclass(ANY_LICENSE_INFO),
        ClassDescriptor::new(el("WithAdditionOperator"))
            .with_comment("Portion of an AnyLicenseInfo representing a License which has additional text applied to it.")
            .with_superclass(ANY_LICENSE_INFO),
    ]
}

fn properties() -> Vec<PropertyDescriptor> {
    vec![
        datatype_property(el("isOsiApproved"), "Specifies whether the License is listed as approved by the Open Source Initiative (OSI)."),
        datatype_property(el("isFsfLibre"), "Specifies whether the License is listed as free by the Free Software Foundation (FSF)."),
        datatype_property(el("standardLicenseHeader"), "Provides a License author's preferred text to indicate that a file is covered by the License."),
        datatype_property(el("obsoletedBy"), "Specifies the licenseId that is preferred to be used in place of a deprecated License or LicenseAddition."),
        datatype_property(el("listVersionAdded"), "Specifies the SPDX License List version in which this ListedLicense or ListedLicenseException identifier was first added."),
        datatype_property(el("deprecatedVersion"), "Specifies the SPDX License List version in which this license or exception identifier was deprecated."),
        datatype_property(el("additionText"), "Identifies the full text of a LicenseAddition."),
        datatype_property(el("standardAdditionTemplate"), "Identifies the full text of a LicenseAddition, in SPDX templating format."),
        datatype_property(el("isDeprecatedAdditionId"), "Specifies whether an additional text identifier has been marked as deprecated."),
        object_property(el("member"), "A license expression participating in a license set."),
        object_property(el("subjectLicense"), "A License participating in a 'with addition' or 'or later' model."),
        object_property(el("subjectExtendableLicense"), "A License participating in a 'with addition' model."),
        object_property(el("subjectAddition"), "A LicenseAddition participating in a 'with addition' model."),
    ]
}

fn listed_version() -> Vec<ConstraintFragment> {
    vec![
        datatype_of(XSD_STRING),
        ConstraintFragment::MaxCount(1),
    ]
}

fn required_one(class: &str) -> Vec<ConstraintFragment> {
    vec![
        class_of(class),
        ConstraintFragment::MinCount(1),
        ConstraintFragment::MaxCount(1),
    ]
}

fn shapes() -> Vec<ShapeDescriptor> {
    let set_members = vec![
        class_of(ANY_LICENSE_INFO),
        ConstraintFragment::MinCount(2),
        ConstraintFragment::Other("sh:nodeKind sh:BlankNodeOrIRI".to_owned()),
    ];
    vec![
        shape(
            &el("License"),
            vec![
                (
                    format!("{NS_SIMPLE_LICENSING}/licenseText"),
                    vec![
                        datatype_of(XSD_STRING),
                        ConstraintFragment::MinCount(1),
                        ConstraintFragment::MaxCount(1),
                    ],
                ),
                (
                    el("isOsiApproved"),
                    vec![datatype_of(XSD_BOOLEAN), ConstraintFragment::MaxCount(1)],
                ),
                (
                    el("isFsfLibre"),
                    vec![datatype_of(XSD_BOOLEAN), ConstraintFragment::MaxCount(1)],
                ),
                (
                    el("standardLicenseHeader"),
                    vec![datatype_of(XSD_STRING), ConstraintFragment::MaxCount(1)],
                ),
                (
                    el("obsoletedBy"),
                    vec![datatype_of(XSD_STRING), ConstraintFragment::MaxCount(1)],
                ),
            ],
        ),
        shape(
            &el("ListedLicense"),
            vec![
                (el("listVersionAdded"), listed_version()),
                (el("deprecatedVersion"), listed_version()),
            ],
        ),
        shape(
            LICENSE_ADDITION,
            vec![
                (
                    el("additionText"),
                    vec![
                        datatype_of(XSD_STRING),
                        ConstraintFragment::MinCount(1),
                        ConstraintFragment::MaxCount(1),
                    ],
                ),
                (
                    el("standardAdditionTemplate"),
                    vec![datatype_of(XSD_STRING), ConstraintFragment::MaxCount(1)],
                ),
                (
                    el("isDeprecatedAdditionId"),
                    vec![datatype_of(XSD_BOOLEAN), ConstraintFragment::MaxCount(1)],
                ),
                (
                    el("obsoletedBy"),
                    vec![datatype_of(XSD_STRING), ConstraintFragment::MaxCount(1)],
                ),
            ],
        ),
        shape(
            &el("ListedLicenseException"),
            vec![
                (el("listVersionAdded"), listed_version()),
                (el("deprecatedVersion"), listed_version()),
            ],
        ),
        shape(
            &el("ConjunctiveLicenseSet"),
            vec![(el("member"), set_members.clone())],
        ),
        shape(
            &el("DisjunctiveLicenseSet"),
            vec![(el("member"), set_members)],
        ),
        shape(
            &el("OrLaterOperator"),
            vec![(el("subjectLicense"), required_one(&el("License")))],
        ),
        shape(
            &el("WithAdditionOperator"),
            vec![
                (el("subjectExtendableLicense"), required_one(EXTENDABLE_LICENSE)),
                (el("subjectAddition"), required_one(LICENSE_ADDITION)),
            ],
        ),
    ]
}

fn individuals() -> Vec<RawIndividual> {
    vec![
        singleton(el("NoAssertionLicense"), ANY_LICENSE_INFO, "An Individual Value for License when no assertion can be made about its actual value."),
        singleton(el("NoneLicense"), ANY_LICENSE_INFO, "An Individual Value for License where the SPDX data creator determines that no license is present."),
    ]
}
