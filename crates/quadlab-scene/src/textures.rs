// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Content-addressed texture cache.
//!
//! The cache maps texture names to [`TextureId`] handles and deduplicates by
//! content: two names whose bytes hash identically (BLAKE3, no domain prefix)
//! share one handle. Reading bytes is delegated to a [`TextureSource`]; GPU
//! upload is the renderer's business and never happens here.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::debug;

use crate::error::SceneError;

/// Opaque texture handle handed to the renderer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextureId(pub u32);

/// A 32-byte BLAKE3 hash of texture bytes.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TextureHash(pub [u8; 32]);

impl TextureHash {
    /// Hashes `bytes`.
    pub fn of(bytes: &[u8]) -> Self {
        Self(*blake3::hash(bytes).as_bytes())
    }
}

impl fmt::Display for TextureHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Where texture bytes come from (embedded resources, a directory, …).
pub trait TextureSource {
    /// Returns the raw bytes of the texture named `name`.
    fn read(&self, name: &str) -> Result<Vec<u8>, SceneError>;
}

/// In-memory [`TextureSource`], mostly for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryTextureSource {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryTextureSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a texture.
    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), bytes.into());
    }
}

impl TextureSource for MemoryTextureSource {
    fn read(&self, name: &str) -> Result<Vec<u8>, SceneError> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| SceneError::TextureNotFound {
                name: name.to_owned(),
            })
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    hash: TextureHash,
    byte_len: usize,
}

/// Name → handle mapping with content deduplication.
#[derive(Debug, Default)]
pub struct TextureCache {
    by_name: HashMap<String, TextureId>,
    by_hash: HashMap<TextureHash, TextureId>,
    entries: Vec<Entry>,
}

impl TextureCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a texture with this name has been loaded.
    pub fn is_defined(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Handle for an already loaded name.
    pub fn get(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    /// Handle for `name`, loading it from `source` if not yet defined.
    pub fn get_or_load(
        &mut self,
        source: &dyn TextureSource,
        name: &str,
    ) -> Result<TextureId, SceneError> {
        match self.get(name) {
            Some(id) => Ok(id),
            None => self.load(source, name),
        }
    }

    /// Reads `name` from `source` and binds it, replacing any earlier binding
    /// for the same name.
    ///
    /// Identical bytes under different names resolve to the same handle.
    pub fn load(
        &mut self,
        source: &dyn TextureSource,
        name: &str,
    ) -> Result<TextureId, SceneError> {
        let bytes = source.read(name)?;
        if bytes.is_empty() {
            return Err(SceneError::EmptyTexture {
                name: name.to_owned(),
            });
        }
        let hash = TextureHash::of(&bytes);
        let id = if let Some(id) = self.by_hash.get(&hash) {
            debug!(texture = name, %hash, "texture content already cached");
            *id
        } else {
            // Handles are dense indices into `entries`.
            let id = TextureId(u32::try_from(self.entries.len()).unwrap_or(u32::MAX));
            self.entries.push(Entry {
                hash,
                byte_len: bytes.len(),
            });
            self.by_hash.insert(hash, id);
            debug!(texture = name, %hash, bytes = bytes.len(), id = id.0, "texture loaded");
            id
        };
        self.by_name.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Content hash behind a handle.
    pub fn hash_of(&self, id: TextureId) -> Option<TextureHash> {
        self.entry(id).map(|e| e.hash)
    }

    /// Size in bytes behind a handle.
    pub fn byte_len(&self, id: TextureId) -> Option<usize> {
        self.entry(id).map(|e| e.byte_len)
    }

    /// Number of distinct texture contents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing has been loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total bytes across distinct contents.
    pub fn byte_count(&self) -> usize {
        self.entries.iter().map(|e| e.byte_len).sum()
    }

    fn entry(&self, id: TextureId) -> Option<&Entry> {
        usize::try_from(id.0).ok().and_then(|i| self.entries.get(i))
    }
}
