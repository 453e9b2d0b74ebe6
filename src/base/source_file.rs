//! Module for handling source text and the spans of its elements.

use std::{cmp::Ordering, fmt::Debug, ops::Range, sync::Arc};

use getset::{CopyGetters, Getters};

/// Represents the source text of a single expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Getters)]
pub struct SourceFile {
    /// Get the identifier of the source, used when pointing at it in diagnostics.
    #[get = "pub"]
    identifier: String,
    /// Get the content of the source.
    #[get = "pub"]
    content: String,
    lines: Vec<Range<usize>>,
}

#[allow(clippy::missing_fields_in_debug)]
impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("identifier", &self.identifier)
            .field("lines", &self.lines)
            .finish()
    }
}

impl SourceFile {
    /// Creates a new shared source from its identifier and text.
    #[must_use]
    pub fn new(identifier: impl Into<String>, content: impl Into<String>) -> Arc<Self> {
        let content = content.into();
        let lines = get_line_byte_positions(&content);

        Arc::new(Self {
            identifier: identifier.into(),
            content,
            lines,
        })
    }

    /// Get the line of the source at the given line number.
    ///
    /// Numbering starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }

        let line = line - 1;
        self.lines
            .get(line)
            .map(|range| &self.content()[range.clone()])
    }

    /// Get the character starting at the given byte index, if any.
    #[must_use]
    pub fn char_at(&self, byte_index: usize) -> Option<char> {
        self.content.get(byte_index..)?.chars().next()
    }

    /// Get the [`Location`] of a given byte index
    #[must_use]
    pub fn get_location(&self, byte_index: usize) -> Option<Location> {
        if !self.content.is_char_boundary(byte_index) {
            return None;
        }

        // get the line number by binary searching the line ranges
        let line = self
            .lines
            .binary_search_by(|range| {
                if range.contains(&byte_index) {
                    Ordering::Equal
                } else if byte_index < range.start {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            })
            .ok()?;

        let line_starting_byte_index = self.lines[line].start;
        let line_str = self.get_line(line + 1)?;

        // columns count utf-8 characters and start at 1
        let column = line_str
            .char_indices()
            .take_while(|(i, _)| *i + line_starting_byte_index < byte_index)
            .count()
            + 1;

        Some(Location {
            line: line + 1,
            column,
        })
    }
}

/// Represents a range of characters in a source.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Get the start byte index of the span.
    #[get_copy = "pub"]
    start: usize,

    /// Get the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: usize,

    /// Get the source that the span is located in.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

#[allow(clippy::missing_fields_in_debug)]
impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.str())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source_file, &other.source_file)
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Span {}

impl std::hash::Hash for Span {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        Arc::as_ptr(&self.source_file).hash(state);
    }
}

impl Span {
    /// Create a span from the given start and end byte indices in the source.
    ///
    /// Returns [`None`] if the range is reversed, out of bounds, or does not fall on
    /// character boundaries.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: usize, end: usize) -> Option<Self> {
        let content = source_file.content();
        if start > end
            || end > content.len()
            || !content.is_char_boundary(start)
            || !content.is_char_boundary(end)
        {
            return None;
        }

        Some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Create a span covering the single character starting at `start`.
    pub(crate) fn character(source_file: &Arc<SourceFile>, start: usize, character: char) -> Self {
        Self::covering(source_file, start, start + character.len_utf8())
    }

    /// Create a span over a range already known to lie on character boundaries.
    pub(crate) fn covering(source_file: &Arc<SourceFile>, start: usize, end: usize) -> Self {
        debug_assert!(Self::new(source_file.clone(), start, end).is_some());

        Self {
            start,
            end,
            source_file: source_file.clone(),
        }
    }

    /// Get the string slice of the source code that the span represents.
    #[must_use]
    pub fn str(&self) -> &str {
        &self.source_file.content()[self.start..self.end]
    }

    /// Get the starting [`Location`] of the span.
    #[must_use]
    pub fn start_location(&self) -> Option<Location> {
        self.source_file.get_location(self.start)
    }
}

/// Pointing to a particular location in a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// Line number of the location (starts at 1).
    pub line: usize,

    /// Column number of the location (starts at 1).
    pub column: usize,
}

/// Get the byte positions of the lines in the given text.
fn get_line_byte_positions(text: &str) -> Vec<Range<usize>> {
    let mut current_position = 0;
    let mut results = Vec::new();

    let mut skip = false;

    for (byte, char) in text.char_indices() {
        if skip {
            skip = false;
            continue;
        }

        // lf
        if char == '\n' {
            #[allow(clippy::range_plus_one)]
            results.push(current_position..byte + 1);

            current_position = byte + 1;
        }

        // crlf
        if char == '\r' {
            if text.as_bytes().get(byte + 1) == Some(&b'\n') {
                results.push(current_position..byte + 2);

                current_position = byte + 2;

                skip = true;
            } else {
                #[allow(clippy::range_plus_one)]
                results.push(current_position..byte + 1);

                current_position = byte + 1;
            }
        }
    }

    // add the last line
    results.push(current_position..text.len());

    results
}
