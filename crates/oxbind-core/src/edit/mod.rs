//! Chunked text editing with source map output
//!
//! The buffer never rewrites the original text. It splits it into chunks at
//! edit boundaries and records, per chunk, replacement content plus text
//! inserted on either side. Offsets are byte offsets into the original and
//! must fall on character boundaries.
//!
//! Text inserted "left" of an offset sticks to the chunk ending there, text
//! inserted "right" sticks to the chunk starting there. The distinction
//! matters once a neighbouring range is overwritten or removed.

mod chunk;
mod line_index;

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use chunk::Chunk;
pub use line_index::LineIndex;

use crate::sourcemap::{MappingsBuilder, SourceMap, SourceMapOptions};
use crate::{OxbindError, Result};

#[derive(Debug, Clone)]
pub struct EditBuffer {
    original: Arc<str>,
    line_index: LineIndex,
    intro: String,
    outro: String,
    /// Sorted, contiguous, covering the whole original
    chunks: Vec<Chunk>,
}

impl EditBuffer {
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        let original: Arc<str> = source.into();
        let chunks = if original.is_empty() {
            Vec::new()
        } else {
            vec![Chunk::new(0, original.len(), &original)]
        };
        Self {
            line_index: LineIndex::new(&original),
            original,
            intro: String::new(),
            outro: String::new(),
            chunks,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Length in bytes of the rendered text
    pub fn len(&self) -> usize {
        self.intro.len()
            + self.chunks.iter().map(Chunk::rendered_len).sum::<usize>()
            + self.outro.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_changed(&self) -> bool {
        !self.intro.is_empty()
            || !self.outro.is_empty()
            || self
                .chunks
                .iter()
                .any(|chunk| chunk.edited || !chunk.intro.is_empty() || !chunk.outro.is_empty())
    }

    /// Insert at the very end of the output
    pub fn append(&mut self, content: &str) -> &mut Self {
        self.outro.push_str(content);
        self
    }

    /// Insert at the very start of the output
    pub fn prepend(&mut self, content: &str) -> &mut Self {
        self.intro.insert_str(0, content);
        self
    }

    /// Insert at `index`, after earlier left-inserts there
    pub fn append_left(&mut self, index: usize, content: &str) -> Result<&mut Self> {
        self.check_index(index)?;
        self.split(index)?;
        match self.chunk_ending_at(index) {
            Some(chunk) => chunk.outro.push_str(content),
            None => self.intro.push_str(content),
        }
        Ok(self)
    }

    /// Insert at `index`, before earlier left-inserts there
    pub fn prepend_left(&mut self, index: usize, content: &str) -> Result<&mut Self> {
        self.check_index(index)?;
        self.split(index)?;
        match self.chunk_ending_at(index) {
            Some(chunk) => chunk.outro.insert_str(0, content),
            None => self.intro.insert_str(0, content),
        }
        Ok(self)
    }

    /// Insert at `index`, after earlier right-inserts there
    pub fn append_right(&mut self, index: usize, content: &str) -> Result<&mut Self> {
        self.check_index(index)?;
        self.split(index)?;
        match self.chunk_starting_at(index) {
            Some(chunk) => chunk.intro.push_str(content),
            None => self.outro.push_str(content),
        }
        Ok(self)
    }

    /// Insert at `index`, before earlier right-inserts there
    pub fn prepend_right(&mut self, index: usize, content: &str) -> Result<&mut Self> {
        self.check_index(index)?;
        self.split(index)?;
        match self.chunk_starting_at(index) {
            Some(chunk) => chunk.intro.insert_str(0, content),
            None => self.outro.insert_str(0, content),
        }
        Ok(self)
    }

    /// Replace `start..end` with `content`, dropping text inserted inside or
    /// at the edges of the range
    pub fn overwrite(&mut self, start: usize, end: usize, content: &str) -> Result<&mut Self> {
        self.replace(start..end, content, false)
    }

    /// Replace `start..end` with `content`, keeping text inserted at the
    /// start of the range
    pub fn update(&mut self, start: usize, end: usize, content: &str) -> Result<&mut Self> {
        self.replace(start..end, content, true)
    }

    /// Remove `start..end` together with anything inserted inside it
    pub fn remove(&mut self, start: usize, end: usize) -> Result<&mut Self> {
        self.check_range(start, end)?;
        if start == end {
            return Ok(self);
        }
        self.split_range(start, end)?;
        let range = self.chunk_range(start, end);
        for chunk in &mut self.chunks[range] {
            chunk.edit("", false);
        }
        Ok(self)
    }

    fn replace(&mut self, range: Range<usize>, content: &str, keep_inserts: bool) -> Result<&mut Self> {
        let Range { start, end } = range;
        self.check_range(start, end)?;
        if start == end {
            return Err(OxbindError::edit_error(format!(
                "Cannot overwrite the zero-length range {start}..{end}; use append_left or prepend_right instead"
            )));
        }
        self.split_range(start, end)?;
        let range = self.chunk_range(start, end);
        let mut chunks = self.chunks[range].iter_mut();
        if let Some(first) = chunks.next() {
            first.edit(content, keep_inserts);
        }
        for chunk in chunks {
            chunk.edit("", false);
        }
        Ok(self)
    }

    /// Render the map as a structured value
    pub fn to_sourcemap_object(&self, options: &SourceMapOptions) -> SourceMap {
        let mut builder = MappingsBuilder::new();
        builder.advance(&self.intro);
        for chunk in &self.chunks {
            builder.advance(&chunk.intro);
            let original = self.line_index.position(chunk.start, &self.original);
            if chunk.edited {
                if !chunk.content.is_empty() {
                    builder.add_segment(original);
                    builder.advance(&chunk.content);
                }
            } else {
                builder.add_original(&chunk.content, original, options.hires);
            }
            builder.advance(&chunk.outro);
        }
        builder.advance(&self.outro);

        SourceMap {
            version: 3,
            file: options.file.clone(),
            sources: vec![options.source.clone().unwrap_or_default()],
            sources_content: options
                .include_content
                .then(|| vec![self.original.to_string()]),
            names: Vec::new(),
            mappings: builder.encode(),
        }
    }

    /// Render the map as JSON text
    pub fn to_sourcemap_string(&self, options: &SourceMapOptions) -> Result<String> {
        self.to_sourcemap_object(options).to_json_string()
    }

    /// Render the map as a base64 data URI
    pub fn to_sourcemap_url(&self, options: &SourceMapOptions) -> Result<String> {
        self.to_sourcemap_object(options).to_data_url()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index > self.original.len() {
            return Err(OxbindError::edit_error(format!(
                "Offset {index} is out of bounds (length {})",
                self.original.len()
            )));
        }
        if !self.original.is_char_boundary(index) {
            return Err(OxbindError::edit_error(format!(
                "Offset {index} is not on a character boundary"
            )));
        }
        Ok(())
    }

    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        if start > end {
            return Err(OxbindError::edit_error(format!(
                "Range start {start} is after its end {end}"
            )));
        }
        self.check_index(start)?;
        self.check_index(end)
    }

    /// Position of the chunk that must be cut to make `index` a boundary
    fn chunk_to_split(&self, index: usize) -> Result<Option<usize>> {
        let pos = self.chunks.partition_point(|chunk| chunk.end <= index);
        let Some(chunk) = self.chunks.get(pos).filter(|chunk| chunk.contains(index)) else {
            return Ok(None);
        };
        if chunk.edited && !chunk.content.is_empty() {
            return Err(OxbindError::edit_error(format!(
                "Cannot split {}..{} at {index}: the range was already overwritten",
                chunk.start, chunk.end
            )));
        }
        Ok(Some(pos))
    }

    /// Make `index` a chunk boundary
    fn split(&mut self, index: usize) -> Result<()> {
        if let Some(pos) = self.chunk_to_split(index)? {
            let right = self.chunks[pos].split(index, &self.original);
            self.chunks.insert(pos + 1, right);
        }
        Ok(())
    }

    /// Make both ends of a range boundaries, or neither
    fn split_range(&mut self, start: usize, end: usize) -> Result<()> {
        self.chunk_to_split(start)?;
        self.chunk_to_split(end)?;
        self.split(start)?;
        self.split(end)
    }

    fn chunk_starting_at(&mut self, index: usize) -> Option<&mut Chunk> {
        let pos = self.chunks.partition_point(|chunk| chunk.start < index);
        self.chunks.get_mut(pos).filter(|chunk| chunk.start == index)
    }

    fn chunk_ending_at(&mut self, index: usize) -> Option<&mut Chunk> {
        let pos = self.chunks.partition_point(|chunk| chunk.end < index);
        self.chunks.get_mut(pos).filter(|chunk| chunk.end == index)
    }

    /// Chunks lying inside `start..end`; both must already be boundaries
    fn chunk_range(&self, start: usize, end: usize) -> Range<usize> {
        let first = self.chunks.partition_point(|chunk| chunk.start < start);
        let last = self.chunks.partition_point(|chunk| chunk.end <= end);
        first..last
    }
}

impl fmt::Display for EditBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.len());
        out.push_str(&self.intro);
        for chunk in &self.chunks {
            chunk.render_into(&mut out);
        }
        out.push_str(&self.outro);
        f.write_str(&out)
    }
}
