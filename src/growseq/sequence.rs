//! Growable, order-preserving sequence
//!
//! [`GrowableSequence`] holds zero or more values of a single type in insertion order.
//! The only mutation is [`GrowableSequence::append`], which adds one element at the end
//! and never touches the elements already present. Length is always the number of
//! stored elements, so there is no separate counter that could drift.
//!
//! Appends mutate in place under single-writer ownership. Code that prefers the
//! rebind style (`seq = seq.appended(x)`) can move the sequence through
//! [`GrowableSequence::appended`] instead. Readers that must not observe later appends
//! take a [`GrowableSequence::snapshot`].

use serde::Serialize;
use std::fmt;

/// Default delimiter used by [`GrowableSequence::render`].
pub const DEFAULT_DELIMITER: &str = ", ";

/// An ordered, resizable container of same-typed elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GrowableSequence<T> {
    items: Vec<T>,
}

impl<T> GrowableSequence<T> {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a sequence holding exactly `initial`, in the order given
    pub fn from_elements<I>(initial: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: initial.into_iter().collect(),
        }
    }

    /// Add `value` after every existing element.
    pub fn append(&mut self, value: T) {
        self.items.push(value);
    }

    /// Move the sequence through an append and hand it back.
    pub fn appended(mut self, value: T) -> Self {
        self.append(value);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The most recently appended element, if any
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> GrowableSequence<T> {
    /// Copy the current contents. Later appends to `self` do not show up in the copy.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: fmt::Display> GrowableSequence<T> {
    /// Render every element in order, separated by `", "`.
    ///
    /// This is diagnostic text, not a serialization format: elements that contain the
    /// delimiter cannot be told apart from two separate elements.
    pub fn render(&self) -> String {
        self.render_with(DEFAULT_DELIMITER)
    }

    /// Render with a caller-chosen delimiter
    pub fn render_with(&self, delimiter: &str) -> String {
        self.items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

impl<T> Default for GrowableSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for GrowableSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<T> From<Vec<T>> for GrowableSequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for GrowableSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T> IntoIterator for GrowableSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowableSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> GrowableSequence<&'static str> {
        GrowableSequence::from_elements(["apple", "banana", "mango"])
    }

    #[test]
    fn test_create_keeps_given_order() {
        let seq = fruits();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.as_slice(), &["apple", "banana", "mango"]);
        assert_eq!(seq.render(), "apple, banana, mango");
    }

    #[test]
    fn test_append_adds_at_end() {
        let mut seq = fruits();
        seq.append("orange");

        assert_eq!(seq.len(), 4);
        assert_eq!(seq.last(), Some(&"orange"));
        assert_eq!(seq.render(), "apple, banana, mango, orange");
    }

    #[test]
    fn test_empty_sequence() {
        let mut seq: GrowableSequence<String> = GrowableSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.render(), "");

        seq.append("x".to_string());
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.render(), "x");
    }

    #[test]
    fn test_appended_matches_append() {
        let mut in_place = fruits();
        in_place.append("kiwi");

        let rebound = fruits().appended("kiwi");
        assert_eq!(in_place, rebound);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut seq = fruits();
        let before = seq.snapshot();
        seq.append("orange");

        assert_eq!(before, vec!["apple", "banana", "mango"]);
        assert_eq!(seq.len(), before.len() + 1);
    }

    #[test]
    fn test_render_with_custom_delimiter() {
        let seq: GrowableSequence<i32> = vec![1, 2, 3].into();
        assert_eq!(seq.render_with(" | "), "1 | 2 | 3");
        assert_eq!(seq.to_string(), "1, 2, 3");
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let seq = fruits();
        assert_eq!(seq.get(1), Some(&"banana"));
        assert_eq!(seq.get(3), None);
    }

    #[test]
    fn test_iteration_order() {
        let seq: GrowableSequence<u8> = (1..=4).collect();
        let borrowed: Vec<u8> = (&seq).into_iter().copied().collect();
        assert_eq!(borrowed, vec![1, 2, 3, 4]);
        assert_eq!(seq.into_vec(), vec![1, 2, 3, 4]);
    }
}
