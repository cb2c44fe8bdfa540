//! Per-vertex component assignments.

use std::collections::HashSet;

/// Component label for every vertex of a graph, indexed by vertex id.
///
/// Labels are whatever the producing algorithm left behind. They are not
/// renumbered, so only equality between two labels carries meaning.
///
/// # Examples
/// ```
/// use concomp_core::ComponentLabels;
///
/// let labels = ComponentLabels::from(vec![2, 2, 3]);
/// assert!(labels.same_component(0, 1));
/// assert_eq!(labels.component_count(), 2);
/// assert!(!labels.is_connected());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentLabels {
    labels: Vec<usize>,
}

impl ComponentLabels {
    /// Returns the raw labels as a slice.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_slice(&self) -> &[usize] { &self.labels }

    /// Consumes the assignment and returns the raw labels.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_vec(self) -> Vec<usize> { self.labels }

    /// Returns the number of labelled vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.labels.len() }

    /// Returns `true` for the assignment of an empty graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Returns the label of `vertex`, or `None` when it is out of range.
    #[must_use]
    pub fn get(&self, vertex: usize) -> Option<usize> {
        self.labels.get(vertex).copied()
    }

    /// Returns `true` when both vertices exist and carry the same label.
    #[must_use]
    pub fn same_component(&self, left: usize, right: usize) -> bool {
        match (self.get(left), self.get(right)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Counts the distinct labels.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.labels.iter().collect::<HashSet<_>>().len()
    }

    /// Returns `true` when every vertex shares one label.
    ///
    /// Graphs with zero or one vertex are connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        match self.labels.split_first() {
            Some((first, rest)) => rest.iter().all(|label| label == first),
            None => true,
        }
    }
}

impl From<Vec<usize>> for ComponentLabels {
    fn from(labels: Vec<usize>) -> Self {
        Self { labels }
    }
}

impl From<ComponentLabels> for Vec<usize> {
    fn from(labels: ComponentLabels) -> Self {
        labels.labels
    }
}

impl AsRef<[usize]> for ComponentLabels {
    fn as_ref(&self) -> &[usize] {
        &self.labels
    }
}
