use std::fmt::Debug;

use num::Num;

/// ZeroSpVec is a sparse vector that treats zero elements as absent.
/// It holds `indices` and `values`:
/// indices keep the position of each stored element,
/// values keep the element itself.
///
/// Stored elements are guaranteed to be sorted by ascending index.
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Num + Copy,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    #[inline]
    pub fn new() -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len: 0,
        }
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
            len: 0,
        }
    }

    /// Append an element at position `len`.
    /// Zero values only extend the logical length.
    #[inline]
    pub fn push(&mut self, value: N) {
        if !value.is_zero() {
            self.inds.push(self.len);
            self.vals.push(value);
        }
        self.len += 1;
    }

    /// Set the element at `index`.
    /// Indices beyond the current length extend it; a zero value removes the element.
    ///
    /// # Arguments
    /// * `index` - element position
    /// * `value` - element value
    pub fn set(&mut self, index: usize, value: N) {
        match self.inds.binary_search(&index) {
            Ok(pos) => {
                if value.is_zero() {
                    self.inds.remove(pos);
                    self.vals.remove(pos);
                } else {
                    self.vals[pos] = value;
                }
            }
            Err(pos) => {
                if !value.is_zero() {
                    self.inds.insert(pos, index);
                    self.vals.insert(pos, value);
                }
            }
        }
        if index >= self.len {
            self.len = index + 1;
        }
    }

    /// Element at `index`, zero when absent or out of range.
    #[inline]
    pub fn get(&self, index: usize) -> N {
        match self.inds.binary_search(&index) {
            Ok(pos) => self.vals[pos],
            Err(_) => N::zero(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Logical length (dimension)
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of non-zero elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    /// Iterate non-zero elements as `(index, value)` in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter().copied())
    }
}

impl<N> Default for ZeroSpVec<N>
where
    N: Num + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> From<Vec<N>> for ZeroSpVec<N>
where
    N: Num + Copy,
{
    fn from(vec: Vec<N>) -> Self {
        let mut sp = ZeroSpVec::with_capacity(vec.len());
        for v in vec {
            sp.push(v);
        }
        sp
    }
}

impl<N> Debug for ZeroSpVec<N>
where
    N: Num + Copy + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f, "ZeroSpVec(len: {}, nnz: {}) [", self.len, self.nnz())?;
            for (idx, val) in self.raw_iter() {
                writeln!(f, "    {}: {:?}", idx, val)?;
            }
            write!(f, "]")
        } else {
            f.debug_struct("ZeroSpVec")
                .field("len", &self.len)
                .field("inds", &self.inds)
                .field("vals", &self.vals)
                .finish()
        }
    }
}
