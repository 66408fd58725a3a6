//! Deterministic hashed-projection embedder.
//!
//! Derives every component from an fxhash of the input text mixed with the
//! component index, mapped through a sinusoid and L2-normalized. The same
//! text always yields the same unit vector, which keeps similarity math and
//! the test suite reproducible without model assets.

use fxhash::hash64;

use super::{CapabilityError, Embedder};

/// Default output dimensionality.
pub const DEFAULT_DIM: usize = 384;

/// Odd multiplier for index mixing (splitmix64 increment).
const INDEX_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone)]
pub struct HashedEmbedder {
    dim: usize,
}

impl Default for HashedEmbedder {
    fn default() -> Self {
        Self { dim: DEFAULT_DIM }
    }
}

impl HashedEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }
}

pub(crate) fn l2_normalize_in_place(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

impl Embedder for HashedEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, CapabilityError> {
        if self.dim == 0 {
            return Err(CapabilityError::Inference(
                "embedding dimensionality is zero".to_string(),
            ));
        }
        let h = hash64(text.as_bytes());
        let mut v = vec![0f32; self.dim];
        for (idx, value) in v.iter_mut().enumerate() {
            let mixed = h ^ (idx as u64).wrapping_mul(INDEX_MIX);
            *value = ((mixed >> 32) as f32 * 1e-4).sin();
        }
        l2_normalize_in_place(&mut v);
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedding_has_fixed_dimensionality() {
        let v = HashedEmbedder::default().embed("hello world").unwrap();
        assert_eq!(v.len(), DEFAULT_DIM);
    }

    #[test]
    fn embedding_is_deterministic() {
        let e = HashedEmbedder::default();
        assert_eq!(e.embed("same text").unwrap(), e.embed("same text").unwrap());
    }

    #[test]
    fn different_texts_produce_different_vectors() {
        let e = HashedEmbedder::default();
        assert_ne!(e.embed("hello").unwrap(), e.embed("world").unwrap());
    }

    #[test]
    fn embedding_is_unit_length() {
        let v = HashedEmbedder::default().embed("normalize me").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-4, "norm was {norm}");
    }

    #[test]
    fn empty_text_still_embeds() {
        let v = HashedEmbedder::default().embed("").unwrap();
        assert_eq!(v.len(), DEFAULT_DIM);
        assert!(v.iter().any(|&x| x != 0.0));
    }

    #[test]
    fn unicode_text_embeds() {
        let v = HashedEmbedder::default().embed("Hello 世界 🌍").unwrap();
        assert_eq!(v.len(), DEFAULT_DIM);
    }

    #[test]
    fn custom_dimensionality_is_respected() {
        let v = HashedEmbedder::new(128).embed("custom").unwrap();
        assert_eq!(v.len(), 128);
    }

    #[test]
    fn zero_dimensionality_is_an_error() {
        assert!(HashedEmbedder::new(0).embed("text").is_err());
    }
}
