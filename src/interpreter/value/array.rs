use std::{ops::Deref, sync::Arc};

use crate::interpreter::value::core::Value;

/// What a [`NativeArray`] represents.
///
/// The engine itself treats both kinds identically; the tag travels with the
/// array so the converters can tell an encoded map from a plain sequence
/// without inspecting its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArrayKind {
    /// An ordinary ordered sequence of cells.
    #[default]
    Sequence,
    /// A key/value map flattened as `[sentinel, k0, v0, k1, v1, ...]`.
    EncodedMap,
}

/// A single-row array of engine values.
///
/// Cells are shared behind an `Arc`, so cloning an array (for example when a
/// constant is read during evaluation) does not copy its contents.
#[derive(Debug, Clone, Default)]
pub struct NativeArray {
    cells: Arc<Vec<Value>>,
    kind:  ArrayKind,
}

impl NativeArray {
    /// Creates an array of the given kind.
    #[must_use]
    pub fn new(cells: Vec<Value>, kind: ArrayKind) -> Self {
        Self { cells: Arc::new(cells),
               kind }
    }

    /// Creates a plain sequence.
    ///
    /// # Example
    /// ```
    /// use evalenv::interpreter::value::{array::{ArrayKind, NativeArray}, core::Value};
    ///
    /// let arr = NativeArray::sequence(vec![Value::Integer(1), Value::Integer(2)]);
    /// assert_eq!(arr.cols(), 2);
    /// assert_eq!(arr.kind(), ArrayKind::Sequence);
    /// ```
    #[must_use]
    pub fn sequence(cells: Vec<Value>) -> Self {
        Self::new(cells, ArrayKind::Sequence)
    }

    /// Number of rows. Always `1`.
    #[must_use]
    pub const fn rows(&self) -> usize {
        1
    }

    /// Number of columns (cells).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cells.len()
    }

    /// The cell at `(row, col)`, if it exists.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Option<&Value> {
        if row == 0 { self.cells.get(col) } else { None }
    }

    #[must_use]
    pub const fn kind(&self) -> ArrayKind {
        self.kind
    }
}

impl Deref for NativeArray {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

/// Arrays compare by contents; the kind tag is representation metadata.
impl PartialEq for NativeArray {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl From<Vec<Value>> for NativeArray {
    fn from(cells: Vec<Value>) -> Self {
        Self::sequence(cells)
    }
}

impl FromIterator<Value> for NativeArray {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self::sequence(iter.into_iter().collect())
    }
}
