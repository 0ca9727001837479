//! `HKDF-Extract` function as defined in https://datatracker.ietf.org/doc/html/rfc5869

use crate::{hash::HashAlgorithm, hmac::HmacKey, Secret};

/// Computes `HKDF-Extract(salt = current_secret, IKM = new_secret)`.
///
/// A missing input is replaced by `HashLen` zero bytes, which is how the key
/// schedule extracts at stages that introduce no new keying material and
/// starts from no previous secret.
pub fn extract<H: HashAlgorithm>(new_secret: Option<&[u8]>, current_secret: Option<&[u8]>) -> Secret {
    let zeros = vec![0u8; H::digest_size()];
    let ikm = new_secret.unwrap_or(zeros.as_slice());
    let salt = current_secret.unwrap_or(zeros.as_slice());

    Secret::new(HmacKey::<H>::new(salt).sign(&[ikm]).to_vec())
}
