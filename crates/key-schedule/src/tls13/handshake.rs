use core::{fmt, marker::PhantomData};

use crate::{
    hash::{HashAlgorithm, Transcript},
    kdf::{derive_secret, extract},
    tls13::{MasterSecret, CLIENT_HANDSHAKE_TRAFFIC, DERIVED, SERVER_HANDSHAKE_TRAFFIC},
    Secret,
};

/// The Handshake Secret, protecting the handshake after the ServerHello.
pub struct HandshakeSecret<H: HashAlgorithm> {
    secret: Secret,
    _hash: PhantomData<fn() -> H>,
}

impl<H: HashAlgorithm> HandshakeSecret<H> {
    pub(crate) fn new(secret: Secret) -> Self {
        Self {
            secret,
            _hash: PhantomData,
        }
    }

    /// Returns `client_handshake_traffic_secret`.
    ///
    /// `transcript` must cover ClientHello...ServerHello.
    pub fn client_handshake_traffic_secret(&self, transcript: &impl Transcript<H>) -> Secret {
        derive_secret::<H>(
            self.secret.as_bytes(),
            CLIENT_HANDSHAKE_TRAFFIC,
            Some(transcript),
        )
    }

    /// Returns `server_handshake_traffic_secret`.
    ///
    /// `transcript` must cover ClientHello...ServerHello.
    pub fn server_handshake_traffic_secret(&self, transcript: &impl Transcript<H>) -> Secret {
        derive_secret::<H>(
            self.secret.as_bytes(),
            SERVER_HANDSHAKE_TRAFFIC,
            Some(transcript),
        )
    }

    /// Returns the salt of the Master Secret.
    pub(crate) fn derived_secret(&self) -> Secret {
        derive_secret::<H>(self.secret.as_bytes(), DERIVED, None)
    }

    /// Advances to the Master Secret.
    #[cfg_attr(
        feature = "logging",
        tracing::instrument(level = "trace", skip_all)
    )]
    pub fn master_secret(self) -> MasterSecret<H> {
        let derived = self.derived_secret();
        MasterSecret::new(extract::<H>(None, Some(derived.as_bytes())))
    }
}

impl<H: HashAlgorithm> fmt::Debug for HandshakeSecret<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandshakeSecret").finish_non_exhaustive()
    }
}
