pub mod math;

use std::fmt::{self, Debug};

use num::Num;

/// ZeroSpVec is a sparse vector that treats zero elements as absent.
/// It keeps two parallel arrays:
/// `inds` holds the index of each stored element,
/// `vals` holds its value.
///
/// Elements are guaranteed to be sorted by ascending index, and no stored
/// value is zero.
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Num + Copy,
{
    inds: Vec<u32>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// Empty vector of dimension 0
    #[inline]
    pub fn new() -> Self {
        Self {
            inds: Vec::new(),
            vals: Vec::new(),
            len: 0,
        }
    }

    /// All-zero vector of dimension `len`
    #[inline]
    pub fn zeros(len: usize) -> Self {
        Self {
            inds: Vec::new(),
            vals: Vec::new(),
            len,
        }
    }

    #[inline]
    pub fn with_capacity(len: usize, nnz_cap: usize) -> Self {
        Self {
            inds: Vec::with_capacity(nnz_cap),
            vals: Vec::with_capacity(nnz_cap),
            len,
        }
    }

    /// Build from `(index, value)` pairs in any order.
    /// Zero values are skipped; duplicated indices are summed.
    /// Indices at or beyond `len` are ignored.
    pub fn from_pairs<I>(len: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, N)>,
    {
        let mut pairs: Vec<(u32, N)> = pairs
            .into_iter()
            .filter(|(idx, _)| *idx < len)
            .map(|(idx, val)| (idx as u32, val))
            .collect();
        pairs.sort_unstable_by_key(|(idx, _)| *idx);

        let mut vec = Self::with_capacity(len, pairs.len());
        for (idx, val) in pairs {
            match vec.inds.last() {
                Some(&last) if last == idx => {
                    if let Some(v) = vec.vals.last_mut() {
                        *v = *v + val;
                    }
                }
                _ => {
                    vec.inds.push(idx);
                    vec.vals.push(val);
                }
            }
        }
        vec.drop_zeros();
        vec
    }

    /// Removes entries that became zero (e.g. after summing duplicates)
    fn drop_zeros(&mut self) {
        if self.vals.iter().all(|v| !v.is_zero()) {
            return;
        }
        let mut write = 0;
        for read in 0..self.vals.len() {
            if !self.vals[read].is_zero() {
                self.inds[write] = self.inds[read];
                self.vals[write] = self.vals[read];
                write += 1;
            }
        }
        self.inds.truncate(write);
        self.vals.truncate(write);
    }

    /// Dimension of the vector (including zeros)
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of stored non-zero elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    /// True when no element is non-zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.inds.is_empty()
    }

    /// Get the value at `index`.
    /// Returns `None` only when `index` is out of range;
    /// absent elements inside the range read as zero.
    pub fn get(&self, index: usize) -> Option<N> {
        if index >= self.len {
            return None;
        }
        match self.inds.binary_search(&(index as u32)) {
            Ok(pos) => Some(self.vals[pos]),
            Err(_) => Some(N::zero()),
        }
    }

    /// Iterate stored `(index, value)` pairs in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.inds
            .iter()
            .zip(self.vals.iter())
            .map(|(&idx, &val)| (idx as usize, val))
    }

    /// Expand into a dense `Vec`
    pub fn to_dense(&self) -> Vec<N> {
        let mut dense = vec![N::zero(); self.len];
        for (idx, val) in self.raw_iter() {
            dense[idx] = val;
        }
        dense
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
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
    /// Build from a dense vector
    fn from(dense: Vec<N>) -> Self {
        let len = dense.len();
        let mut vec = Self::with_capacity(len, 0);
        for (idx, val) in dense.into_iter().enumerate() {
            if !val.is_zero() {
                vec.inds.push(idx as u32);
                vec.vals.push(val);
            }
        }
        vec
    }
}

impl<N> Debug for ZeroSpVec<N>
where
    N: Num + Copy + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "ZeroSpVec(len: {}, nnz: {}) ", self.len, self.nnz())?;
            f.debug_map().entries(self.raw_iter()).finish()
        } else {
            f.debug_struct("ZeroSpVec")
                .field("len", &self.len)
                .field("nnz", &self.nnz())
                .finish()
        }
    }
}
