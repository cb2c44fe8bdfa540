//! Array-labelled disjoint set union.
//!
//! Every element stores its component label directly, so [`find`] is a plain
//! lookup and [`union`] must rewrite every member of the absorbed set. There
//! is no rank and no path compression: a merge always costs a full scan of
//! the label array.
//!
//! [`find`]: DisjointSetUnion::find
//! [`union`]: DisjointSetUnion::union

/// Disjoint set union backed by a flat label array.
///
/// # Examples
/// ```
/// use concomp_core::DisjointSetUnion;
///
/// let mut dsu = DisjointSetUnion::new(4);
/// dsu.union(dsu.find(0), dsu.find(1));
/// assert_eq!(dsu.components(), vec![0, 0, 2, 3]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisjointSetUnion {
    component_id: Vec<usize>,
}

impl DisjointSetUnion {
    /// Creates `size` singleton sets, each labelled with its own index.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            component_id: (0..size).collect(),
        }
    }

    /// Returns the number of elements tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.component_id.len() }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.component_id.is_empty() }

    /// Returns the current label of `element`.
    ///
    /// # Panics
    /// Panics when `element >= self.len()`.
    #[must_use]
    pub fn find(&self, element: usize) -> usize {
        self.component_id[element]
    }

    /// Relabels every element carrying `absorbed` with `label`.
    ///
    /// Passing equal labels leaves the structure untouched. The scan always
    /// covers the whole array, whatever the set sizes.
    pub fn union(&mut self, label: usize, absorbed: usize) {
        if label == absorbed {
            return;
        }
        for id in &mut self.component_id {
            if *id == absorbed {
                *id = label;
            }
        }
    }

    /// Returns a copy of the label array.
    #[must_use]
    pub fn components(&self) -> Vec<usize> {
        self.component_id.clone()
    }

    /// Consumes the structure and returns its label array.
    #[must_use]
    pub fn into_components(self) -> Vec<usize> {
        self.component_id
    }
}
