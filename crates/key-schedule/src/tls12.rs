//! TLS 1.2 secrets derived with the PRF.

#[cfg(feature = "logging")]
use tracing::instrument;

use crate::{hash::HashAlgorithm, prf::prf, Secret};

/// Length of the master secret in bytes.
pub const MASTER_SECRET_LENGTH: usize = 48;
/// Length of Finished `verify_data` in bytes.
pub const VERIFY_DATA_LENGTH: usize = 12;

const MASTER_SECRET_LABEL: &[u8] = b"master secret";
const EXTENDED_MASTER_SECRET_LABEL: &[u8] = b"extended master secret";
const KEY_EXPANSION_LABEL: &[u8] = b"key expansion";
const CLIENT_FINISHED_LABEL: &[u8] = b"client finished";
const SERVER_FINISHED_LABEL: &[u8] = b"server finished";

/// The sender of a Finished message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The client.
    Client,
    /// The server.
    Server,
}

impl Side {
    fn finished_label(self) -> &'static [u8] {
        match self {
            Side::Client => CLIENT_FINISHED_LABEL,
            Side::Server => SERVER_FINISHED_LABEL,
        }
    }
}

/// Computes the extended master secret of [RFC 7627, Section 4].
///
/// `session_hash` is the hash of the handshake up to and including the
/// ClientKeyExchange. The output is always [`MASTER_SECRET_LENGTH`] bytes.
///
/// [RFC 7627, Section 4]: https://datatracker.ietf.org/doc/html/rfc7627#section-4
#[cfg_attr(feature = "logging", instrument(level = "trace", skip_all))]
pub fn extended_master_secret<H: HashAlgorithm>(
    pre_master_secret: &[u8],
    session_hash: &[u8],
) -> Secret {
    prf::<H>(
        pre_master_secret,
        EXTENDED_MASTER_SECRET_LABEL,
        session_hash,
        MASTER_SECRET_LENGTH,
    )
}

/// Computes the master secret from the hello randoms, for peers which did
/// not negotiate the extended master secret.
#[cfg_attr(feature = "logging", instrument(level = "trace", skip_all))]
pub fn master_secret<H: HashAlgorithm>(
    pre_master_secret: &[u8],
    client_random: &[u8; 32],
    server_random: &[u8; 32],
) -> Secret {
    let mut seed = [0u8; 64];
    seed[..32].copy_from_slice(client_random);
    seed[32..].copy_from_slice(server_random);

    prf::<H>(
        pre_master_secret,
        MASTER_SECRET_LABEL,
        &seed,
        MASTER_SECRET_LENGTH,
    )
}

/// Expands the master secret into a key block of `len` bytes.
///
/// Note the seed order: the server random comes first.
pub fn key_block<H: HashAlgorithm>(
    master_secret: &Secret,
    server_random: &[u8; 32],
    client_random: &[u8; 32],
    len: usize,
) -> Secret {
    let mut seed = [0u8; 64];
    seed[..32].copy_from_slice(server_random);
    seed[32..].copy_from_slice(client_random);

    prf::<H>(master_secret.as_bytes(), KEY_EXPANSION_LABEL, &seed, len)
}

/// Computes the `verify_data` of the Finished message sent by `side`.
pub fn finished_verify_data<H: HashAlgorithm>(
    master_secret: &Secret,
    side: Side,
    handshake_hash: &[u8],
) -> Secret {
    prf::<H>(
        master_secret.as_bytes(),
        side.finished_label(),
        handshake_hash,
        VERIFY_DATA_LENGTH,
    )
}
