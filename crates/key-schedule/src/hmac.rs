//! HMAC keyed once, signed many times.
//!
//! HMAC(K, m) = H((K' xor opad) || H((K' xor ipad) || m))
//!
//! Keying absorbs both padded key blocks, so P_hash and HKDF-Expand clone the
//! keyed state for every block instead of re-deriving it.

use digest::Output;
use hmac::{Mac, SimpleHmac};

use crate::{hash::HashAlgorithm, Defect};

/// HMAC instantiated with a key.
#[derive(Clone)]
pub(crate) struct HmacKey<H: HashAlgorithm> {
    keyed: SimpleHmac<H>,
}

impl<H: HashAlgorithm> HmacKey<H> {
    pub(crate) fn new(key: &[u8]) -> Self {
        let keyed = <SimpleHmac<H> as Mac>::new_from_slice(key)
            .unwrap_or_else(|_| Defect::HmacKey(key.len()).raise());

        Self { keyed }
    }

    /// Computes the tag over the concatenation of `parts`.
    pub(crate) fn sign(&self, parts: &[&[u8]]) -> Output<H> {
        let mut mac = self.keyed.clone();
        for part in parts {
            mac.update(part);
        }
        mac.finalize().into_bytes()
    }
}
