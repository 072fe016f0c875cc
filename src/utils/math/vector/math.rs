use std::cmp::Ordering;

use num::{Float, Num};

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// Dot product, accumulated in `R`
    ///
    /// # Arguments
    /// * `other` - the other vector
    ///
    /// # Returns
    /// * `R` - result of the dot product
    #[inline]
    pub fn dot<R>(&self, other: &Self) -> R
    where
        R: Num + Copy,
        N: Into<R>,
    {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut result = R::zero();
        if self.is_zero() || other.is_zero() {
            return result;
        }

        let mut a_it = self.raw_iter();
        let mut b_it = other.raw_iter();
        let mut a_next = a_it.next();
        let mut b_next = b_it.next();
        while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
            match ia.cmp(&ib) {
                Ordering::Equal => {
                    result = result + va.into() * vb.into();
                    a_next = a_it.next();
                    b_next = b_it.next();
                }
                Ordering::Less => a_next = a_it.next(),
                Ordering::Greater => b_next = b_it.next(),
            }
        }
        result
    }

    /// Squared Euclidean norm, accumulated in `R`
    #[inline]
    pub fn norm_sq<R>(&self) -> R
    where
        R: Num + Copy,
        N: Into<R>,
    {
        self.raw_iter().fold(R::zero(), |acc, (_, v)| {
            let v: R = v.into();
            acc + v * v
        })
    }
}

impl<N> ZeroSpVec<N>
where
    N: Float,
{
    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> N {
        self.raw_iter()
            .fold(N::zero(), |acc, (_, v)| acc + v * v)
            .sqrt()
    }

    /// Scale to unit Euclidean length in place.
    /// The all-zero vector stays all-zero.
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm.is_zero() || !norm.is_finite() {
            return;
        }
        for v in self.vals.iter_mut() {
            *v = *v / norm;
        }
    }

    /// Multiply every stored element by the dense weight at its index
    pub fn hadamard_dense(&mut self, weights: &[N]) {
        for (idx, v) in self.inds.iter().zip(self.vals.iter_mut()) {
            *v = *v * weights.get(*idx as usize).copied().unwrap_or_else(N::zero);
        }
        self.drop_zeros();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_only_counts_shared_indices() {
        let a: ZeroSpVec<f64> = ZeroSpVec::from_pairs(5, vec![(0, 1.0), (2, 2.0), (4, 3.0)]);
        let b: ZeroSpVec<f64> = ZeroSpVec::from_pairs(5, vec![(1, 5.0), (2, 4.0), (4, 1.0)]);
        let d: f64 = a.dot(&b);
        assert!((d - 11.0).abs() < 1e-12);
    }

    #[test]
    fn dot_with_zero_vector_is_zero() {
        let a: ZeroSpVec<f32> = ZeroSpVec::from(vec![1.0, 2.0]);
        let z: ZeroSpVec<f32> = ZeroSpVec::zeros(2);
        let d: f64 = a.dot(&z);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn l2_normalize_produces_unit_length() {
        let mut v: ZeroSpVec<f64> = ZeroSpVec::from(vec![3.0, 0.0, 4.0]);
        v.l2_normalize();
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert_eq!(v.to_dense(), vec![0.6, 0.0, 0.8]);
        let n: f64 = v.norm_sq();
        assert!((n - 1.0).abs() < 1e-12);
    }

    #[test]
    fn l2_normalize_keeps_zero_vector() {
        let mut v: ZeroSpVec<f64> = ZeroSpVec::zeros(4);
        v.l2_normalize();
        assert!(v.is_zero());
        assert_eq!(v.norm(), 0.0);
    }

    #[test]
    fn hadamard_dense_scales_and_drops_zeroed_entries() {
        let mut v: ZeroSpVec<f64> = ZeroSpVec::from(vec![1.0, 2.0, 3.0]);
        v.hadamard_dense(&[2.0, 0.0, 0.5]);
        assert_eq!(v.raw_iter().collect::<Vec<_>>(), vec![(0, 2.0), (2, 1.5)]);
    }
}
