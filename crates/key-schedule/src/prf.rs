//! The TLS 1.2 PRF as defined in https://datatracker.ietf.org/doc/html/rfc5246#section-5

#[cfg(feature = "logging")]
use tracing::trace;

use crate::{hash::HashAlgorithm, hmac::HmacKey, Secret};

/// Fills `out` with `P_hash(secret, seed)`.
///
/// ```text
/// P_hash(secret, seed) = HMAC_hash(secret, A(1) + seed) +
///                        HMAC_hash(secret, A(2) + seed) + ...
/// A(0) = seed
/// A(i) = HMAC_hash(secret, A(i-1))
/// ```
///
/// The last block is truncated to the remaining length of `out`, so a shorter
/// output is always a prefix of a longer one.
pub fn p_hash<H: HashAlgorithm>(out: &mut [u8], secret: &[u8], seed: &[u8]) {
    let hmac = HmacKey::<H>::new(secret);

    let mut a = hmac.sign(&[seed]);
    for chunk in out.chunks_mut(H::digest_size()) {
        let block = hmac.sign(&[a.as_slice(), seed]);
        chunk.copy_from_slice(&block[..chunk.len()]);

        a = hmac.sign(&[a.as_slice()]);
    }
}

/// Computes `PRF(secret, label, seed)` truncated to `len` bytes.
///
/// The label is prepended to the seed as is, without a length prefix.
pub fn prf<H: HashAlgorithm>(secret: &[u8], label: &[u8], seed: &[u8], len: usize) -> Secret {
    trace!(label = %label.escape_ascii(), len, "computing prf");

    let mut label_seed = Vec::with_capacity(label.len() + seed.len());
    label_seed.extend_from_slice(label);
    label_seed.extend_from_slice(seed);

    let mut out = vec![0u8; len];
    p_hash::<H>(&mut out, secret, &label_seed);
    Secret::new(out)
}
