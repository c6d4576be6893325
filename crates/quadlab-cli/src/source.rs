// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Texture bytes read from a directory next to the scene file.

use quadlab_scene::{SceneError, TextureSource};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Resolves texture names relative to a base directory.
pub struct DirTextureSource {
    base: PathBuf,
}

impl DirTextureSource {
    /// Source rooted at `base`.
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }
}

impl TextureSource for DirTextureSource {
    fn read(&self, name: &str) -> Result<Vec<u8>, SceneError> {
        std::fs::read(self.base.join(name)).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                SceneError::TextureNotFound {
                    name: name.to_owned(),
                }
            } else {
                SceneError::TextureIo {
                    name: name.to_owned(),
                    source,
                }
            }
        })
    }
}
