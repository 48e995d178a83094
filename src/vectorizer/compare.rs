use std::cmp::Ordering;

use num::Num;

/// Similarity between two sparse vectors given as `(index, value)` iterators.
/// Both iterators must yield indices in ascending order.
pub trait Compare<N>
where
    N: Num + Copy,
{
    /// dot product
    /// d(a, b) = Σ(a_i * b_i)
    fn dot(vec: impl Iterator<Item = (usize, N)>, other: impl Iterator<Item = (usize, N)>) -> f64;
    /// cosine similarity
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// ||a|| = sqrt(Σ(a_i^2))
    ///
    /// Returns 0.0 when either vector has zero magnitude.
    /// The result is clamped to [0.0, 1.0].
    fn cosine_similarity(vec: impl Iterator<Item = (usize, N)>, other: impl Iterator<Item = (usize, N)>) -> f64;
}

#[derive(Debug)]
pub struct DefaultCompare;

#[inline]
fn bounded(score: f64) -> f64 {
    if score.is_finite() { score.clamp(0.0, 1.0) } else { 0.0 }
}

/// impl Compare for u32 (raw counts), f32, f64
impl Compare<u32> for DefaultCompare {
    #[inline]
    fn dot(vec: impl Iterator<Item = (usize, u32)>, other: impl Iterator<Item = (usize, u32)>) -> f64 {
        let mut a_it = vec.fuse();
        let mut b_it = other.fuse();
        let mut a_next = a_it.next();
        let mut b_next = b_it.next();
        let mut dot = 0_u64;
        while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
            match ia.cmp(&ib) {
                Ordering::Equal => { dot += va as u64 * vb as u64; a_next = a_it.next(); b_next = b_it.next(); }
                Ordering::Less => { a_next = a_it.next(); }
                Ordering::Greater => { b_next = b_it.next(); }
            }
        }
        dot as f64
    }

    #[inline]
    fn cosine_similarity(vec: impl Iterator<Item = (usize, u32)>, other: impl Iterator<Item = (usize, u32)>) -> f64 {
        // integer accumulation keeps identical vectors at exactly 1.0
        let mut a_it = vec.fuse();
        let mut b_it = other.fuse();
        let mut a_next = a_it.next();
        let mut b_next = b_it.next();
        let mut norm_a = 0_u64;
        let mut norm_b = 0_u64;
        let mut dot = 0_u64;
        while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
            let (va, vb) = (va as u64, vb as u64);
            match ia.cmp(&ib) {
                Ordering::Equal => { norm_a += va * va; norm_b += vb * vb; dot += va * vb; a_next = a_it.next(); b_next = b_it.next(); }
                Ordering::Less => { norm_a += va * va; a_next = a_it.next(); }
                Ordering::Greater => { norm_b += vb * vb; b_next = b_it.next(); }
            }
        }
        while let Some((_, va)) = a_next { norm_a += va as u64 * va as u64; a_next = a_it.next(); }
        while let Some((_, vb)) = b_next { norm_b += vb as u64 * vb as u64; b_next = b_it.next(); }
        if norm_a == 0 || norm_b == 0 {
            return 0.0;
        }
        let denom = ((norm_a as u128 * norm_b as u128) as f64).sqrt();
        bounded(dot as f64 / denom)
    }
}

impl Compare<f32> for DefaultCompare {
    #[inline]
    fn dot(vec: impl Iterator<Item = (usize, f32)>, other: impl Iterator<Item = (usize, f32)>) -> f64 {
        let as_f64_a = vec.map(|(i, v)| (i, v as f64));
        let as_f64_b = other.map(|(i, v)| (i, v as f64));
        <DefaultCompare as Compare<f64>>::dot(as_f64_a, as_f64_b)
    }

    #[inline]
    fn cosine_similarity(vec: impl Iterator<Item = (usize, f32)>, other: impl Iterator<Item = (usize, f32)>) -> f64 {
        // accumulate in f64
        let as_f64_a = vec.map(|(i, v)| (i, v as f64));
        let as_f64_b = other.map(|(i, v)| (i, v as f64));
        <DefaultCompare as Compare<f64>>::cosine_similarity(as_f64_a, as_f64_b)
    }
}

impl Compare<f64> for DefaultCompare {
    #[inline]
    fn dot(vec: impl Iterator<Item = (usize, f64)>, other: impl Iterator<Item = (usize, f64)>) -> f64 {
        let mut a_it = vec.fuse();
        let mut b_it = other.fuse();
        let mut a_next = a_it.next();
        let mut b_next = b_it.next();
        let mut dot = 0_f64;
        while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
            match ia.cmp(&ib) {
                Ordering::Equal => { dot += va * vb; a_next = a_it.next(); b_next = b_it.next(); }
                Ordering::Less => { a_next = a_it.next(); }
                Ordering::Greater => { b_next = b_it.next(); }
            }
        }
        dot
    }

    #[inline]
    fn cosine_similarity(vec: impl Iterator<Item = (usize, f64)>, other: impl Iterator<Item = (usize, f64)>) -> f64 {
        let mut a_it = vec.fuse();
        let mut b_it = other.fuse();
        let mut a_next = a_it.next();
        let mut b_next = b_it.next();
        let mut norm_a = 0_f64;
        let mut norm_b = 0_f64;
        let mut dot = 0_f64;
        while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
            match ia.cmp(&ib) {
                Ordering::Equal => { norm_a += va * va; norm_b += vb * vb; dot += va * vb; a_next = a_it.next(); b_next = b_it.next(); }
                Ordering::Less => { norm_a += va * va; a_next = a_it.next(); }
                Ordering::Greater => { norm_b += vb * vb; b_next = b_it.next(); }
            }
        }
        while let Some((_, va)) = a_next { norm_a += va * va; a_next = a_it.next(); }
        while let Some((_, vb)) = b_next { norm_b += vb * vb; b_next = b_it.next(); }
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        bounded(dot / (norm_a * norm_b).sqrt())
    }
}
