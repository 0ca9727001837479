//! Independent reference implementations used to cross-check derivations.
//!
//! Built on `ring` so that a bug shared between the HMAC/HKDF code of this
//! crate and its own tests cannot go unnoticed.

use ring::{digest, hkdf, hmac};

pub(crate) fn from_hex_str(s: &str) -> Vec<u8> {
    hex::decode(s.split_whitespace().collect::<String>()).unwrap()
}

struct Len(usize);

impl hkdf::KeyType for Len {
    fn len(&self) -> usize {
        self.0
    }
}

pub(crate) fn ring_extract(alg: hkdf::Algorithm, salt: &[u8], ikm: &[u8]) -> Vec<u8> {
    let key = hmac::Key::new(alg.hmac_algorithm(), salt);
    hmac::sign(&key, ikm).as_ref().to_vec()
}

pub(crate) fn ring_expand_label(
    alg: hkdf::Algorithm,
    secret: &[u8],
    label: &[u8],
    ctx: &[u8],
    len: usize,
) -> Vec<u8> {
    let len_bytes = (len as u16).to_be_bytes();
    let label_len = [6 + label.len() as u8];
    let ctx_len = [ctx.len() as u8];
    let info: [&[u8]; 6] = [&len_bytes, &label_len, b"tls13 ", label, &ctx_len, ctx];

    let prk = hkdf::Prk::new_less_safe(alg, secret);
    let mut out = vec![0u8; len];
    prk.expand(&info, Len(len)).unwrap().fill(&mut out).unwrap();
    out
}

pub(crate) fn ring_derive_secret(
    alg: hkdf::Algorithm,
    secret: &[u8],
    label: &[u8],
    messages: &[u8],
) -> Vec<u8> {
    let digest_alg = alg.hmac_algorithm().digest_algorithm();
    let hash = digest::digest(digest_alg, messages);
    ring_expand_label(alg, secret, label, hash.as_ref(), digest_alg.output_len())
}

// Borrowed from Rustls for testing
// https://github.com/rustls/rustls/blob/main/rustls/src/tls12/prf.rs
#[cfg(feature = "tls12")]
pub(crate) mod ring_prf {
    use ring::hmac;

    fn concat_sign(key: &hmac::Key, a: &[u8], b: &[u8]) -> hmac::Tag {
        let mut ctx = hmac::Context::with_key(key);
        ctx.update(a);
        ctx.update(b);
        ctx.sign()
    }

    fn p(alg: hmac::Algorithm, out: &mut [u8], secret: &[u8], seed: &[u8]) {
        let hmac_key = hmac::Key::new(alg, secret);

        // A(1)
        let mut current_a = hmac::sign(&hmac_key, seed);
        let chunk_size = alg.digest_algorithm().output_len();
        for chunk in out.chunks_mut(chunk_size) {
            // P_hash[i] = HMAC_hash(secret, A(i) + seed)
            let p_term = concat_sign(&hmac_key, current_a.as_ref(), seed);
            chunk.copy_from_slice(&p_term.as_ref()[..chunk.len()]);

            // A(i+1) = HMAC_hash(secret, A(i))
            current_a = hmac::sign(&hmac_key, current_a.as_ref());
        }
    }

    fn concat(a: &[u8], b: &[u8]) -> Vec<u8> {
        let mut ret = Vec::new();
        ret.extend_from_slice(a);
        ret.extend_from_slice(b);
        ret
    }

    pub(crate) fn prf(
        alg: hmac::Algorithm,
        out: &mut [u8],
        secret: &[u8],
        label: &[u8],
        seed: &[u8],
    ) {
        let joined_seed = concat(label, seed);
        p(alg, out, secret, &joined_seed);
    }
}

pub(crate) fn transcript_hash<H: crate::HashAlgorithm>(s: &str) -> crate::TranscriptHash<H> {
    crate::TranscriptHash::from_slice(&from_hex_str(s)).unwrap()
}

pub(crate) fn secret(s: &str) -> crate::Secret {
    crate::Secret::new(from_hex_str(s))
}
