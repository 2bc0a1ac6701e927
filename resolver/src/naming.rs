//! IRI → identifier mapping and collision-free name assignment.
//!
//! Names are the local name of an IRI after reserved-word substitution. When
//! two entities share a local name, the one in the base profile keeps it and
//! the other is qualified as `<Profile><LocalName>`. [`NameTable::build`]
//! assigns base-profile IRIs in a first pass and sorts each pass, so the
//! outcome never depends on enumeration order.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::ResolverConfig;

/// Extracts the local name from a full IRI (after the last `#`, else after the last `/`).
#[must_use]
pub fn local_name(iri: &str) -> &str {
    match iri.rfind('#') {
        Some(i) => &iri[i + 1..],
        None => iri.rsplit('/').next().unwrap_or(iri),
    }
}

/// The namespace part of an IRI: everything before the last `/`.
#[must_use]
pub fn namespace_of(iri: &str) -> &str {
    iri.rfind('/').map_or(iri, |i| &iri[..i])
}

/// The profile segment of an IRI: the last segment of its namespace.
#[must_use]
pub fn profile_of(iri: &str) -> &str {
    local_name(namespace_of(iri))
}

/// Upper-cases the first character.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts a camelCase name into CONST_CASE.
///
/// An underscore precedes every non-lowercase letter after the first
/// character, and `-` becomes `_`. Digits are copied as-is.
#[must_use]
pub fn to_const_case(camel: &str) -> String {
    let mut result = String::with_capacity(camel.len() + 4);
    for (i, ch) in camel.chars().enumerate() {
        if i == 0 {
            result.extend(ch.to_uppercase());
            continue;
        }
        if ch.is_alphabetic() && !ch.is_lowercase() {
            result.push('_');
        }
        if ch == '-' {
            result.push('_');
        } else {
            result.extend(ch.to_uppercase());
        }
    }
    result
}

/// Converts a profile name into its identifier-type constant:
/// an underscore between each lowercase-uppercase pair, then upper case.
#[must_use]
pub fn to_profile_constant(profile: &str) -> String {
    let mut result = String::with_capacity(profile.len() + 4);
    let mut prev_lower = false;
    for ch in profile.chars() {
        if prev_lower && ch.is_ascii_uppercase() {
            result.push('_');
        }
        result.extend(ch.to_uppercase());
        prev_lower = ch.is_ascii_lowercase();
    }
    result
}

/// `ProfileIdentifierType.<PROFILE>` for the namespace of `iri`.
#[must_use]
pub fn profile_identifier(iri: &str) -> String {
    format!("ProfileIdentifierType.{}", to_profile_constant(profile_of(iri)))
}

/// A bidirectional IRI ↔ name index with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    by_uri: BTreeMap<String, String>,
    by_name: BTreeMap<String, String>,
}

impl NameTable {
    /// Assigns names to every IRI in `uris`: base-profile IRIs first, each pass sorted.
    pub fn build<'a>(uris: impl IntoIterator<Item = &'a str>, config: &ResolverConfig) -> Self {
        let unique: BTreeSet<&str> = uris.into_iter().collect();
        let (base, rest): (Vec<&str>, Vec<&str>) = unique
            .into_iter()
            .partition(|uri| config.is_base_profile(profile_of(uri)));
        let mut table = Self::default();
        for uri in base.into_iter().chain(rest) {
            table.assign(uri, config);
        }
        table
    }

    /// Adds one IRI, resolving a collision by profile precedence.
    pub fn assign(&mut self, uri: &str, config: &ResolverConfig) {
        let name = config.substitute_reserved(local_name(uri)).to_owned();
        let Some(holder) = self.by_name.get(&name).cloned() else {
            self.insert(uri, name);
            return;
        };
        if holder == uri {
            return;
        }
        let incoming_is_base = config.is_base_profile(profile_of(uri));
        if incoming_is_base && !config.is_base_profile(profile_of(&holder)) {
            let displaced = self.qualified(&holder, &name);
            tracing::trace!(uri = %holder, name = %displaced, "displaced by base profile");
            self.insert(&holder, displaced);
            self.insert(uri, name);
        } else {
            let qualified = self.qualified(uri, &name);
            self.insert(uri, qualified);
        }
    }

    fn insert(&mut self, uri: &str, name: String) {
        self.by_name.insert(name.clone(), uri.to_owned());
        self.by_uri.insert(uri.to_owned(), name);
    }

    /// `<Profile><Name>`, suffixed with 2, 3, ... if that is taken too.
    fn qualified(&self, uri: &str, name: &str) -> String {
        let base = format!("{}{}", profile_of(uri), capitalize(name));
        let mut candidate = base.clone();
        let mut n = 2u32;
        while self.by_name.get(&candidate).is_some_and(|holder| holder != uri) {
            candidate = format!("{base}{n}");
            n += 1;
        }
        candidate
    }

    /// The assigned name of `uri`.
    #[must_use]
    pub fn get(&self, uri: &str) -> Option<&str> {
        self.by_uri.get(uri).map(String::as_str)
    }

    /// The IRI holding `name`.
    #[must_use]
    pub fn uri_of(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    /// The assigned name, or the reserved-substituted local name for unknown IRIs.
    #[must_use]
    pub fn name_or_local(&self, uri: &str, config: &ResolverConfig) -> String {
        match self.get(uri) {
            Some(name) => name.to_owned(),
            None => config.substitute_reserved(local_name(uri)).to_owned(),
        }
    }

    /// Number of named IRIs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_uri.len()
    }

    /// Returns `true` if nothing has been named.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_uri.is_empty()
    }

    /// `(uri, name)` pairs in IRI order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_uri.iter().map(|(u, n)| (u.as_str(), n.as_str()))
    }
}
