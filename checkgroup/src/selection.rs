//! Selection collection and the toggle reducer.
//!
//! A [`SelectionCollection`] is the ordered, duplicate-free list of checked
//! values owned by a checkbox group. It is never mutated in place by the
//! group: every toggle produces a new collection through [`reduce`].
//!
//! Order is the order of selection events, not option order. Selecting the
//! third option and then the first yields `[third, first]`.

use serde::{Deserialize, Serialize};

use crate::value::OptionValue;

/// Ordered, duplicate-free sequence of selected values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<OptionValue>", into = "Vec<OptionValue>")]
pub struct SelectionCollection(Vec<OptionValue>);

impl SelectionCollection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if a value is selected.
    pub fn contains(&self, value: &OptionValue) -> bool {
        self.0.contains(value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionValue> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[OptionValue] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<OptionValue> {
        self.0
    }

    /// Produce the next selection for a `(value, next_checked)` toggle.
    ///
    /// See [`reduce`].
    pub fn reduce(&self, value: &OptionValue, next_checked: bool) -> Self {
        reduce(self, value, next_checked)
    }

    /// Flip membership of `value`.
    pub fn toggle(&self, value: &OptionValue) -> Self {
        reduce(self, value, !self.contains(value))
    }
}

/// The selection reducer.
///
/// - checking an absent value appends it at the tail
/// - checking a present value returns the collection unchanged
/// - unchecking removes the value, keeping the order of the rest
///
/// Never inspects options, disabled flags or validation state.
pub fn reduce(
    current: &SelectionCollection,
    value: &OptionValue,
    next_checked: bool,
) -> SelectionCollection {
    if next_checked {
        if current.contains(value) {
            return current.clone();
        }
        let mut next = current.0.clone();
        next.push(value.clone());
        SelectionCollection(next)
    } else {
        SelectionCollection(current.0.iter().filter(|v| *v != value).cloned().collect())
    }
}

impl From<Vec<OptionValue>> for SelectionCollection {
    /// Keeps the first occurrence of each value.
    fn from(values: Vec<OptionValue>) -> Self {
        let mut unique: Vec<OptionValue> = Vec::with_capacity(values.len());
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        Self(unique)
    }
}

impl From<SelectionCollection> for Vec<OptionValue> {
    fn from(selection: SelectionCollection) -> Self {
        selection.0
    }
}

impl<V: Into<OptionValue>> FromIterator<V> for SelectionCollection {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from(iter.into_iter().map(Into::into).collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a SelectionCollection {
    type Item = &'a OptionValue;
    type IntoIter = std::slice::Iter<'a, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for SelectionCollection {
    type Item = OptionValue;
    type IntoIter = std::vec::IntoIter<OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
