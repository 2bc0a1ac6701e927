//! Pre-parsed SHACL/OWL schema descriptors.
//!
//! The `shacl-model-spec` crate defines the in-memory snapshot an ontology
//! ingestor produces (classes, property shapes reduced to constraint
//! fragments, declared properties, raw named individuals), the
//! [`SchemaSource`] trait the resolver reads it through, and a sample of the
//! SPDX 3.0.0 model encoded as Rust data.
//!
//! # Entry Point
//!
//! ```
//! use shacl_model_spec::SchemaDocument;
//!
//! let schema = SchemaDocument::sample();
//! assert_eq!(schema.namespaces.len(), 4);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
pub mod namespaces;
pub mod source;

pub use model::{
    ClassDescriptor, ConstraintFragment, Namespace, NamespaceModule, PropertyDescriptor,
    PropertyKind, PropertyShapeDescriptor, RawIndividual, SchemaDocument, ShapeDescriptor,
    TypeRef,
};
pub use source::SchemaSource;

impl SchemaDocument {
    /// Returns the bundled SPDX 3.0.0 sample schema.
    ///
    /// Assembly order follows the profile dependency graph:
    /// `Core → Software → SimpleLicensing → ExpandedLicensing`.
    #[must_use]
    pub fn sample() -> &'static SchemaDocument {
        static SAMPLE: std::sync::OnceLock<SchemaDocument> = std::sync::OnceLock::new();
        SAMPLE.get_or_init(|| SchemaDocument {
            version: "3.0.0".to_owned(),
            base_iri: model::iris::SPDX_TERMS.to_owned(),
            namespaces: vec![
                namespaces::core::module(),
                namespaces::software::module(),
                namespaces::simple_licensing::module(),
                namespaces::expanded_licensing::module(),
            ],
        })
    }

    /// Parses a schema document from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid serialized [`SchemaDocument`].
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<SchemaDocument, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes this schema document to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[cfg(feature = "json")]
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
