//! Key derivation for TLS connections.
//!
//! This crate derives the secrets a TLS handshake feeds into record
//! protection:
//!
//! * the TLS 1.3 key schedule of [RFC 8446, Section 7.1], modelled as a chain
//!   of stages [`EarlySecret`] → [`HandshakeSecret`] → [`MasterSecret`], each
//!   exposing the secrets which are bound to the transcript at that point of
//!   the handshake, and [`ExporterMasterSecret`] for keying material exporters.
//! * the TLS 1.2 PRF of [RFC 5246, Section 5] and the extended master secret
//!   of [RFC 7627] (feature `tls12`).
//!
//! Every derivation is generic over a [`HashAlgorithm`], which is implemented
//! for all RustCrypto hashes, e.g. [`Sha256`] and [`Sha384`].
//!
//! ```
//! use sha2::{Digest, Sha256};
//! use tls_key_schedule::EarlySecret;
//!
//! let mut transcript = Sha256::new();
//! transcript.update(b"client hello");
//! transcript.update(b"server hello");
//!
//! let handshake = EarlySecret::<Sha256>::new(None).handshake_secret(&[0u8; 32]);
//! let client = handshake.client_handshake_traffic_secret(&transcript);
//! let server = handshake.server_handshake_traffic_secret(&transcript);
//!
//! assert_eq!(client.len(), 32);
//! assert_ne!(client, server);
//! ```
//!
//! Inputs which can only be wrong through a programming error (an over-long
//! label or context, an unrepresentable output length) are not reported as
//! errors: they abort with a [`Defect`].
//!
//! [RFC 8446, Section 7.1]: https://datatracker.ietf.org/doc/html/rfc8446#section-7.1
//! [RFC 5246, Section 5]: https://datatracker.ietf.org/doc/html/rfc5246#section-5
//! [RFC 7627]: https://datatracker.ietf.org/doc/html/rfc7627

#![deny(missing_docs, unreachable_pub, unused_must_use)]
#![deny(clippy::all)]
#![forbid(unsafe_code)]

// Logging is optional.
#[cfg(not(feature = "logging"))]
#[macro_use]
mod log {
    macro_rules! trace    ( ($($tt:tt)*) => {{}} );
    macro_rules! error    ( ($($tt:tt)*) => {{}} );
}

mod error;
pub mod hash;
mod hmac;
pub mod kdf;
#[cfg(feature = "tls12")]
pub mod prf;
mod secret;
#[cfg(feature = "tls12")]
pub mod tls12;
pub mod tls13;

#[cfg(test)]
mod test_utils;

pub use error::Defect;
pub use hash::{HashAlgorithm, Sha256, Sha384, Transcript, TranscriptHash};
pub use secret::Secret;
pub use tls13::{EarlySecret, ExporterMasterSecret, HandshakeSecret, MasterSecret};
