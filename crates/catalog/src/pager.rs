//! One-example-at-a-time paging over an example list.

use crate::model::Example;

/// A cursor over a slice of examples.
///
/// The index is always valid when the slice is non-empty. Moving past either
/// end is a no-op that reports `false`.
#[derive(Clone, Copy, Debug)]
pub struct ExamplePager<'a> {
    examples: &'a [Example],
    index: usize,
}

impl<'a> ExamplePager<'a> {
    /// Start at `index`, clamped to the last example.
    pub fn new(examples: &'a [Example], index: usize) -> Self {
        Self {
            examples,
            index: index.min(examples.len().saturating_sub(1)),
        }
    }

    pub fn current(&self) -> Option<&'a Example> {
        self.examples.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.examples.len()
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn forward(&mut self) -> bool {
        if self.has_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn back(&mut self) -> bool {
        if self.has_prev() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `index`. Returns false (and stays put) when out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.examples.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// "3 / 7" style position label, 1-based.
    pub fn position_label(&self) -> String {
        if self.examples.is_empty() {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.index + 1, self.examples.len())
        }
    }
}
