/// A contiguous range of the original text and what it renders as
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Chunk {
    pub start: usize,
    pub end: usize,
    /// Text rendered in place of `original[start..end]`
    pub content: String,
    /// Inserted before `content`, attached to `start`
    pub intro: String,
    /// Inserted after `content`, attached to `end`
    pub outro: String,
    pub edited: bool,
}

impl Chunk {
    pub fn new(start: usize, end: usize, content: &str) -> Self {
        Self {
            start,
            end,
            content: content.to_string(),
            intro: String::new(),
            outro: String::new(),
            edited: false,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start < index && index < self.end
    }

    /// Replace the rendered text; `keep_inserts` preserves intro and outro
    pub fn edit(&mut self, content: &str, keep_inserts: bool) {
        self.content = content.to_string();
        if !keep_inserts {
            self.intro.clear();
            self.outro.clear();
        }
        self.edited = true;
    }

    /// Split at `index`, returning the right half. The outro moves right.
    /// Callers must not split a chunk whose edited content is non-empty.
    pub fn split(&mut self, index: usize, original: &str) -> Chunk {
        let mut right = Chunk::new(index, self.end, &original[index..self.end]);
        right.outro = std::mem::take(&mut self.outro);
        self.end = index;
        if self.edited {
            right.edit("", false);
            self.content.clear();
        } else {
            self.content = original[self.start..index].to_string();
        }
        right
    }

    pub fn render_into(&self, out: &mut String) {
        out.push_str(&self.intro);
        out.push_str(&self.content);
        out.push_str(&self.outro);
    }

    pub fn rendered_len(&self) -> usize {
        self.intro.len() + self.content.len() + self.outro.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_unedited_chunk() {
        let original = "abcdef";
        let mut left = Chunk::new(0, 6, original);
        left.outro.push_str("!");
        let right = left.split(2, original);
        assert_eq!((left.start, left.end, left.content.as_str()), (0, 2, "ab"));
        assert_eq!((right.start, right.end, right.content.as_str()), (2, 6, "cdef"));
        assert!(left.outro.is_empty());
        assert_eq!(right.outro, "!");
    }

    #[test]
    fn split_removed_chunk_keeps_both_halves_empty() {
        let original = "abcdef";
        let mut left = Chunk::new(0, 6, original);
        left.edit("", false);
        let right = left.split(3, original);
        assert!(left.content.is_empty() && left.edited);
        assert!(right.content.is_empty() && right.edited);
    }
}
