// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Type URL registry for polymorphic decoding.
//!
//! Maps a protobuf type URL (and the matching Amino type tag) to the decode
//! functions for each wire format. Decoding a polymorphic value looks up the
//! tag carried by the input and routes to the registered entry, so adding a
//! variant means registering one more entry.
//!
//! # Example
//!
//! ```
//! use txcodec::encoding::{AnyCodec, TypeEntry, TypeUrlRegistry};
//! use txcodec::feegrant::{Allowance, BasicAllowance};
//!
//! let registry = TypeUrlRegistry::<Allowance>::new();
//! registry.register(TypeEntry::<Allowance>::basic_allowance()).unwrap();
//! assert!(registry.contains(BasicAllowance::TYPE_URL).unwrap());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use prost_types::Any;
use serde_json::Value;

use crate::core::{CodecError, Result};

/// Decode function for protobuf bytes.
pub type ProtoDecodeFn<T> = fn(&[u8]) -> Result<T>;

/// Decode function for an untyped JSON value.
pub type JsonDecodeFn<T> = fn(Value) -> Result<T>;

/// Decode functions registered for one concrete type.
pub struct TypeEntry<T> {
    /// Protobuf type URL
    pub type_url: &'static str,
    /// Amino type tag
    pub amino_type: &'static str,
    /// Decode from protobuf bytes
    pub from_proto_bytes: ProtoDecodeFn<T>,
    /// Decode from the Amino JSON form
    pub from_amino_json: JsonDecodeFn<T>,
    /// Decode from the Data JSON form
    pub from_data_json: JsonDecodeFn<T>,
}

impl<T> Clone for TypeEntry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypeEntry<T> {}

impl<T> fmt::Debug for TypeEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeEntry")
            .field("type_url", &self.type_url)
            .field("amino_type", &self.amino_type)
            .finish_non_exhaustive()
    }
}

/// Thread-safe registry of [`TypeEntry`] values keyed by type URL.
///
/// Uses RwLock for concurrent read access with exclusive write access.
pub struct TypeUrlRegistry<T> {
    inner: RwLock<RegistryInner<T>>,
}

struct RegistryInner<T> {
    by_url: HashMap<String, TypeEntry<T>>,
    amino_to_url: HashMap<String, String>,
}

impl<T> RegistryInner<T> {
    fn insert(&mut self, entry: TypeEntry<T>) {
        if let Some(previous) = self.by_url.insert(entry.type_url.to_string(), entry) {
            if previous.amino_type != entry.amino_type {
                self.release_amino_type(previous.amino_type, previous.type_url);
            }
        }
        self.amino_to_url
            .insert(entry.amino_type.to_string(), entry.type_url.to_string());
    }

    fn remove(&mut self, type_url: &str) -> bool {
        match self.by_url.remove(type_url) {
            Some(entry) => {
                self.release_amino_type(entry.amino_type, type_url);
                true
            }
            None => false,
        }
    }

    // Drop the tag only if it still points at `type_url`, falling back to
    // the lowest remaining URL registered under the same tag.
    fn release_amino_type(&mut self, amino_type: &str, type_url: &str) {
        if self.amino_to_url.get(amino_type).map(String::as_str) != Some(type_url) {
            return;
        }
        let successor = self
            .by_url
            .values()
            .filter(|e| e.amino_type == amino_type)
            .map(|e| e.type_url)
            .min();
        match successor {
            Some(url) => {
                self.amino_to_url
                    .insert(amino_type.to_string(), url.to_string());
            }
            None => {
                self.amino_to_url.remove(amino_type);
            }
        }
    }
}

fn poisoned<E: fmt::Display>(e: E) -> CodecError {
    CodecError::Other(format!("Registry lock poisoned: {e}"))
}

impl<T> TypeUrlRegistry<T> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RegistryInner {
                by_url: HashMap::new(),
                amino_to_url: HashMap::new(),
            }),
        }
    }

    /// Create a registry pre-populated with entries.
    pub fn with_entries(entries: impl IntoIterator<Item = TypeEntry<T>>) -> Self {
        let mut inner = RegistryInner {
            by_url: HashMap::new(),
            amino_to_url: HashMap::new(),
        };
        for entry in entries {
            inner.insert(entry);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Register an entry, replacing any entry with the same type URL.
    pub fn register(&self, entry: TypeEntry<T>) -> Result<()> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        tracing::debug!(
            type_url = entry.type_url,
            amino_type = entry.amino_type,
            "registering type"
        );
        inner.insert(entry);
        Ok(())
    }

    /// Remove an entry by type URL.
    ///
    /// If another entry shares the removed entry's Amino tag, the tag is
    /// handed over to it.
    pub fn unregister(&self, type_url: &str) -> Result<bool> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        Ok(inner.remove(type_url))
    }

    /// Check if a type URL is registered.
    pub fn contains(&self, type_url: &str) -> Result<bool> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.by_url.contains_key(type_url))
    }

    /// Get the entry for a type URL.
    pub fn get(&self, type_url: &str) -> Result<TypeEntry<T>> {
        let inner = self.inner.read().map_err(poisoned)?;
        inner
            .by_url
            .get(type_url)
            .copied()
            .ok_or_else(|| CodecError::type_not_found(type_url))
    }

    /// Get the entry for an Amino type tag.
    pub fn get_by_amino_type(&self, amino_type: &str) -> Result<TypeEntry<T>> {
        let inner = self.inner.read().map_err(poisoned)?;
        inner
            .amino_to_url
            .get(amino_type)
            .and_then(|url| inner.by_url.get(url))
            .copied()
            .ok_or_else(|| CodecError::type_not_found(amino_type))
    }

    /// Get all registered type URLs.
    pub fn type_urls(&self) -> Result<Vec<String>> {
        let inner = self.inner.read().map_err(poisoned)?;
        let mut urls: Vec<String> = inner.by_url.keys().cloned().collect();
        urls.sort();
        Ok(urls)
    }

    /// Get the number of registered types.
    pub fn len(&self) -> Result<usize> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.by_url.len())
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Decode an `Any` by its type URL.
    pub fn decode_any(&self, any: &Any) -> Result<T> {
        let entry = self.get(&any.type_url)?;
        tracing::debug!(type_url = entry.type_url, "decoding any");
        (entry.from_proto_bytes)(&any.value)
    }

    /// Decode an Amino JSON value by its `type` tag.
    pub fn decode_amino(&self, value: Value) -> Result<T> {
        let tag = json_tag(&value, "type")?;
        let entry = self.get_by_amino_type(&tag)?;
        (entry.from_amino_json)(value)
    }

    /// Decode a Data JSON value by its `@type` URL.
    pub fn decode_data(&self, value: Value) -> Result<T> {
        let tag = json_tag(&value, "@type")?;
        let entry = self.get(&tag)?;
        (entry.from_data_json)(value)
    }
}

impl<T> Default for TypeUrlRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn json_tag(value: &Value, key: &str) -> Result<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| CodecError::parse("json", format!("missing string field '{key}'")))
}
