//! SHACL/OWL schema resolution engine.
//!
//! Reads a pre-parsed schema through [`shacl_model_spec::SchemaSource`] and
//! resolves it into a fully-typed [`ResolvedModel`]: every class classified,
//! every property shape merged into one typed signature, inheritance
//! linearized, and every class, individual and property given a unique name.
//! Rendering the model into source text is left to an external emitter.
//!
//! # Entry Point
//!
//! ```
//! use shacl_model_resolver::{resolve, ResolverConfig};
//! use shacl_model_spec::SchemaDocument;
//!
//! let resolution = resolve(SchemaDocument::sample(), &ResolverConfig::default()).unwrap();
//! assert!(resolution.is_clean());
//! assert!(resolution.model.class("SpdxPackage").is_some());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod assemble;
pub mod classify;
pub mod config;
pub mod constraints;
pub mod error;
pub mod hints;
pub mod inheritance;
pub mod model;
pub mod naming;
pub mod property_type;

pub use assemble::resolve;
pub use config::ResolverConfig;
pub use error::{ResolutionWarning, ResolveError, SchemaResolutionError};
pub use model::{
    ClassCategory, EnumDescriptor, IndividualDescriptor, PropertyTypeVariant, Resolution,
    ResolvedClass, ResolvedModel, ResolvedProperty, SuperclassRequired,
};
