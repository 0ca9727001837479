//! `HKDF-Expand-Label` function as defined in TLS 1.3.

use core::slice;

#[cfg(feature = "logging")]
use tracing::trace;

use crate::{
    hash::{HashAlgorithm, Transcript},
    hmac::HmacKey,
    Defect, Secret,
};

pub(crate) mod label;

use label::hkdf_label;

/// Computes `HKDF-Expand` as defined in https://datatracker.ietf.org/doc/html/rfc5869
///
/// # Panics
///
/// Aborts with a [`Defect`] if `len` exceeds `255 * HashLen`.
pub fn expand<H: HashAlgorithm>(prk: &[u8], info: &[u8], len: usize) -> Secret {
    let limit = 255 * H::digest_size();
    if len > limit {
        Defect::ExpandTooLong {
            requested: len,
            limit,
        }
        .raise();
    }

    let hmac = HmacKey::<H>::new(prk);

    // T(0) = empty string
    // T(i) = HMAC(PRK, T(i-1) || info || i)
    let mut okm = Vec::with_capacity(len);
    let mut prev: Vec<u8> = Vec::new();
    let mut counter = 1u8;
    while okm.len() < len {
        let block = hmac.sign(&[prev.as_slice(), info, slice::from_ref(&counter)]);
        let n = block.len().min(len - okm.len());
        okm.extend_from_slice(&block[..n]);

        prev.clear();
        prev.extend_from_slice(&block);
        counter = counter.wrapping_add(1);
    }

    Secret::new(okm)
}

/// Computes `HKDF-Expand-Label(secret, label, context, len)`.
///
/// # Panics
///
/// Aborts with a [`Defect`] if the label or context is too long to encode.
pub fn expand_label<H: HashAlgorithm>(
    secret: &[u8],
    label: &[u8],
    context: &[u8],
    len: usize,
) -> Secret {
    let info = hkdf_label(label, context, len);
    trace!(label = %label.escape_ascii(), len, "expanding label");

    expand::<H>(secret, &info, len)
}

/// Computes `Derive-Secret(secret, label, messages)`.
///
/// The context is a snapshot of `transcript`, or the hash of the empty string
/// if there is no transcript. The output is one digest long.
pub fn derive_secret<H: HashAlgorithm>(
    secret: &[u8],
    label: &[u8],
    transcript: Option<&dyn Transcript<H>>,
) -> Secret {
    let context = match transcript {
        Some(transcript) => transcript.snapshot(),
        None => H::empty_hash(),
    };

    expand_label::<H>(secret, label, &context, H::digest_size())
}
