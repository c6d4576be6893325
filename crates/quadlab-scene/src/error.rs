// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for scene construction and texture loading.

use thiserror::Error;

/// Errors raised while building a scene or loading its textures.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The texture source has no entry with this name.
    #[error("texture not found: {name}")]
    TextureNotFound {
        /// Requested texture name.
        name: String,
    },
    /// Reading texture bytes failed.
    #[error("failed to read texture {name}: {source}")]
    TextureIo {
        /// Requested texture name.
        name: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The texture source returned zero bytes.
    #[error("texture {name} is empty")]
    EmptyTexture {
        /// Requested texture name.
        name: String,
    },
    /// Scene description was not valid JSON for the expected schema.
    #[error("scene description: {0}")]
    Parse(#[from] serde_json::Error),
}
