//! Derivations from a traffic or resumption secret which do not advance the
//! key schedule.

use crate::{
    hash::{HashAlgorithm, Transcript},
    hmac::HmacKey,
    kdf::expand_label,
    tls13::{FINISHED, RESUMPTION, TRAFFIC_UPDATE},
    Secret,
};

/// Returns the `finished_key` of a handshake traffic secret ([RFC 8446, Section 4.4.4]).
///
/// [RFC 8446, Section 4.4.4]: https://datatracker.ietf.org/doc/html/rfc8446#section-4.4.4
pub fn finished_key<H: HashAlgorithm>(base_key: &Secret) -> Secret {
    expand_label::<H>(base_key.as_bytes(), FINISHED, &[], H::digest_size())
}

/// Computes the `verify_data` of a Finished message.
///
/// `base_key` is the handshake traffic secret of the sender and `transcript`
/// covers the handshake up to, but not including, the Finished message.
pub fn finished_verify_data<H: HashAlgorithm>(
    base_key: &Secret,
    transcript: &impl Transcript<H>,
) -> Secret {
    let key = finished_key::<H>(base_key);
    let hash = transcript.snapshot();

    Secret::new(HmacKey::<H>::new(key.as_bytes()).sign(&[hash.as_slice()]).to_vec())
}

/// Returns `application_traffic_secret_N+1` ([RFC 8446, Section 7.2]).
///
/// [RFC 8446, Section 7.2]: https://datatracker.ietf.org/doc/html/rfc8446#section-7.2
pub fn next_traffic_secret<H: HashAlgorithm>(secret: &Secret) -> Secret {
    expand_label::<H>(secret.as_bytes(), TRAFFIC_UPDATE, &[], H::digest_size())
}

/// Returns the PSK associated with a ticket ([RFC 8446, Section 4.6.1]).
///
/// # Panics
///
/// Aborts with a [`Defect`](crate::Defect) if `ticket_nonce` is longer than
/// 255 bytes.
///
/// [RFC 8446, Section 4.6.1]: https://datatracker.ietf.org/doc/html/rfc8446#section-4.6.1
pub fn resumption_psk<H: HashAlgorithm>(
    resumption_master_secret: &Secret,
    ticket_nonce: &[u8],
) -> Secret {
    expand_label::<H>(
        resumption_master_secret.as_bytes(),
        RESUMPTION,
        ticket_nonce,
        H::digest_size(),
    )
}
