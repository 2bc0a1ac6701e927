//! Resolution errors and warnings.

use std::fmt;

use serde::Serialize;

/// A failure scoped to one property or class.
///
/// These never abort a run: the assembler turns them into
/// [`ResolutionWarning`]s and drops the affected class or individual.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaResolutionError {
    /// The property has no type restriction, or (strict mode) more than one.
    #[error(
        "property {property} has {sources} type sources; \
         exactly one class or datatype restriction is required"
    )]
    AmbiguousOrMissingType {
        /// Property path IRI.
        property: String,
        /// Number of type restrictions observed (0 or 2).
        sources: usize,
    },
    /// Strict mode: the class references a property that none of its shapes constrain.
    #[error("class {class} references property {property}, which has no matching shape")]
    MissingShapeForProperty {
        /// Class IRI.
        class: String,
        /// Property path IRI.
        property: String,
    },
    /// An unlabelled individual whose range is not a resolved class: unknown,
    /// ignored, an enumeration, a string subtype, or dropped with a warning.
    #[error("individual {individual} has range {range}, which is not an emitted class")]
    UnemittedSingletonRange {
        /// Individual IRI.
        individual: String,
        /// Range class IRI.
        range: String,
    },
    /// Type restrictions exist but none of them names an IRI.
    #[error("unable to determine type URI for property {property}")]
    UnresolvableTypeUri {
        /// Property path IRI.
        property: String,
    },
}

/// A failure fatal to the whole run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The declared superclass graph contains a cycle.
    #[error("cyclic superclass chain: {}", .chain.join(" -> "))]
    CyclicSuperclass {
        /// The walk from the starting class back to the repeated class.
        chain: Vec<String>,
    },
}

/// An advisory message collected during assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionWarning {
    /// IRI of the class or individual that failed to resolve.
    pub subject: String,
    /// Human-readable description.
    pub message: String,
}

impl ResolutionWarning {
    /// Wraps a scoped error for `subject`.
    #[must_use]
    pub fn new(subject: impl Into<String>, error: &SchemaResolutionError) -> Self {
        Self {
            subject: subject.into(),
            message: error.to_string(),
        }
    }
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.message)
    }
}
