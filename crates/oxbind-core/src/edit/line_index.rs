/// Precomputed line starts for offset to line/column conversion
///
/// Columns are counted in UTF-16 code units, the unit source map consumers
/// expect.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of each line start (line 0, line 1, ...)
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (idx, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(idx + 1);
            }
        }
        Self { line_starts }
    }

    /// Zero-based `(line, column)` of a byte offset
    pub fn position(&self, offset: usize, source: &str) -> (u32, u32) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let column: usize = source[line_start..offset.min(source.len())]
            .chars()
            .map(char::len_utf16)
            .sum();
        (line as u32, column as u32)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
