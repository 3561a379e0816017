//! Shared edit buffer with source map export
//!
//! [`SourceEditor`] is what the facade hands out: a handle on the engine's
//! edit buffer that every holder mutates in place, plus [`generate_map`]
//! returning a [`MapExport`]. Each rendering re-reads the buffer, so a map
//! requested after more edits reflects them.
//!
//! [`generate_map`]: SourceEditor::generate_map

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::Result;
use crate::edit::EditBuffer;
use crate::sourcemap::{SourceMap, SourceMapOptions};

#[derive(Debug, Clone)]
pub struct SourceEditor {
    buffer: Arc<Mutex<EditBuffer>>,
}

impl SourceEditor {
    pub fn new(buffer: Arc<Mutex<EditBuffer>>) -> Self {
        Self { buffer }
    }

    /// Run `f` with exclusive access to the buffer
    pub fn edit<R>(&self, f: impl FnOnce(&mut EditBuffer) -> R) -> R {
        f(&mut self.lock())
    }

    /// Run `f` with read access to the buffer
    pub fn read<R>(&self, f: impl FnOnce(&EditBuffer) -> R) -> R {
        f(&self.lock())
    }

    /// Current rendered text
    pub fn text(&self) -> String {
        self.lock().to_string()
    }

    /// The underlying shared buffer
    pub fn buffer(&self) -> &Arc<Mutex<EditBuffer>> {
        &self.buffer
    }

    /// Prepare map renderings with `options`; nothing is computed until one
    /// of the `MapExport` methods is called
    pub fn generate_map(&self, options: SourceMapOptions) -> MapExport<'_> {
        MapExport {
            editor: self,
            options,
        }
    }

    fn lock(&self) -> MutexGuard<'_, EditBuffer> {
        // A panic mid-edit leaves the chunk list consistent: every mutation
        // validates before it splits or rewrites anything
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Three renderings of the same map, each recomputed on every call
#[derive(Debug, Clone)]
pub struct MapExport<'a> {
    editor: &'a SourceEditor,
    options: SourceMapOptions,
}

impl MapExport<'_> {
    /// JSON text of the map
    pub fn to_json(&self) -> Result<String> {
        self.editor
            .read(|buffer| buffer.to_sourcemap_string(&self.options))
    }

    /// `data:` URI embedding the map
    pub fn to_url(&self) -> Result<String> {
        self.editor.read(|buffer| buffer.to_sourcemap_url(&self.options))
    }

    /// The map as a structured value
    pub fn to_map(&self) -> SourceMap {
        self.editor
            .read(|buffer| buffer.to_sourcemap_object(&self.options))
    }

    pub fn options(&self) -> &SourceMapOptions {
        &self.options
    }
}
