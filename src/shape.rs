//! Shape type: the dimension vector of a sparse array

use smallvec::SmallVec;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Deref;

/// Stack allocation threshold for dimension vectors
/// Most arrays have 4 or fewer axes, so we stack-allocate up to 4
pub(crate) const STACK_DIMS: usize = 4;

/// Dimension vector of a sparse array; its length is the array's rank
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Shape(SmallVec<[usize; STACK_DIMS]>);

impl Shape {
    /// Create an empty shape.
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Push a dimension.
    pub fn push(&mut self, dim: usize) {
        self.0.push(dim);
    }

    /// View shape as a slice.
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }

    /// Number of dimensions in this shape.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of dimensions in this shape.
    #[inline]
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Whether this shape has zero dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for Shape {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Braced rendering, `{2, 2}`; embedded verbatim in the canonical
/// `SparseArray[<n>, dims]` display string
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, dim) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{dim}")?;
        }
        write!(f, "}}")
    }
}

impl AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] {
        self.0.as_slice()
    }
}

impl From<Vec<usize>> for Shape {
    fn from(value: Vec<usize>) -> Self {
        Self(value.into_iter().collect())
    }
}

impl From<&[usize]> for Shape {
    fn from(value: &[usize]) -> Self {
        Self(value.iter().copied().collect())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(value: [usize; N]) -> Self {
        Self(value.into_iter().collect())
    }
}

impl FromIterator<usize> for Shape {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_braced() {
        let shape = Shape::from([2, 2]);
        assert_eq!(shape.to_string(), "{2, 2}");

        let shape = Shape::from([3]);
        assert_eq!(shape.to_string(), "{3}");

        assert_eq!(Shape::new().to_string(), "{}");
    }

    #[test]
    fn test_from_and_deref() {
        let shape: Shape = vec![3, 2, 1].into();
        assert_eq!(shape.rank(), 3);
        assert_eq!(&shape[..], &[3, 2, 1]);
        assert_eq!(shape.as_slice(), [3, 2, 1]);

        let collected: Shape = [4usize, 5].iter().copied().collect();
        assert_eq!(collected.as_slice(), [4, 5]);
    }
}
