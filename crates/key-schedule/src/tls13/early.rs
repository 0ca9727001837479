use core::{fmt, marker::PhantomData};

use crate::{
    hash::{HashAlgorithm, Transcript},
    kdf::{derive_secret, extract},
    tls13::{
        ExporterMasterSecret, HandshakeSecret, CLIENT_EARLY_TRAFFIC, DERIVED,
        EARLY_EXPORTER_MASTER, EXT_BINDER, RES_BINDER,
    },
    Secret,
};

/// The Early Secret, first stage of the key schedule.
pub struct EarlySecret<H: HashAlgorithm> {
    secret: Secret,
    _hash: PhantomData<fn() -> H>,
}

impl<H: HashAlgorithm> EarlySecret<H> {
    /// Extracts the Early Secret from a pre-shared key.
    ///
    /// Connections without a PSK pass `None`, which stands for a string of
    /// `HashLen` zero bytes.
    #[cfg_attr(
        feature = "logging",
        tracing::instrument(level = "trace", skip_all, fields(psk = psk.is_some()))
    )]
    pub fn new(psk: Option<&[u8]>) -> Self {
        Self {
            secret: extract::<H>(psk, None),
            _hash: PhantomData,
        }
    }

    /// Returns the binder key for resumption PSKs.
    pub fn resumption_binder_key(&self) -> Secret {
        derive_secret::<H>(self.secret.as_bytes(), RES_BINDER, None)
    }

    /// Returns the binder key for external PSKs.
    pub fn external_binder_key(&self) -> Secret {
        derive_secret::<H>(self.secret.as_bytes(), EXT_BINDER, None)
    }

    /// Returns `client_early_traffic_secret`.
    ///
    /// `transcript` must cover the ClientHello.
    pub fn client_early_traffic_secret(&self, transcript: &impl Transcript<H>) -> Secret {
        derive_secret::<H>(
            self.secret.as_bytes(),
            CLIENT_EARLY_TRAFFIC,
            Some(transcript),
        )
    }

    /// Returns `early_exporter_master_secret`.
    ///
    /// `transcript` must cover the ClientHello.
    pub fn early_exporter_master_secret(
        &self,
        transcript: &impl Transcript<H>,
    ) -> ExporterMasterSecret<H> {
        ExporterMasterSecret::new(derive_secret::<H>(
            self.secret.as_bytes(),
            EARLY_EXPORTER_MASTER,
            Some(transcript),
        ))
    }

    /// Returns the salt of the Handshake Secret.
    pub(crate) fn derived_secret(&self) -> Secret {
        derive_secret::<H>(self.secret.as_bytes(), DERIVED, None)
    }

    /// Advances to the Handshake Secret by mixing in the (EC)DHE shared
    /// secret.
    #[cfg_attr(
        feature = "logging",
        tracing::instrument(level = "trace", skip_all)
    )]
    pub fn handshake_secret(self, shared_secret: &[u8]) -> HandshakeSecret<H> {
        let derived = self.derived_secret();
        HandshakeSecret::new(extract::<H>(Some(shared_secret), Some(derived.as_bytes())))
    }
}

impl<H: HashAlgorithm> fmt::Debug for EarlySecret<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EarlySecret").finish_non_exhaustive()
    }
}
