use core::{fmt, marker::PhantomData};

use crate::{
    hash::{HashAlgorithm, Transcript},
    kdf::derive_secret,
    tls13::{
        ExporterMasterSecret, CLIENT_APPLICATION_TRAFFIC, EXPORTER_MASTER, RESUMPTION_MASTER,
        SERVER_APPLICATION_TRAFFIC,
    },
    Secret,
};

/// The Master Secret, last stage of the key schedule.
pub struct MasterSecret<H: HashAlgorithm> {
    secret: Secret,
    _hash: PhantomData<fn() -> H>,
}

impl<H: HashAlgorithm> MasterSecret<H> {
    pub(crate) fn new(secret: Secret) -> Self {
        Self {
            secret,
            _hash: PhantomData,
        }
    }

    /// Returns `client_application_traffic_secret_0`.
    ///
    /// `transcript` must cover ClientHello...server Finished.
    pub fn client_application_traffic_secret(&self, transcript: &impl Transcript<H>) -> Secret {
        derive_secret::<H>(
            self.secret.as_bytes(),
            CLIENT_APPLICATION_TRAFFIC,
            Some(transcript),
        )
    }

    /// Returns `server_application_traffic_secret_0`.
    ///
    /// `transcript` must cover ClientHello...server Finished.
    pub fn server_application_traffic_secret(&self, transcript: &impl Transcript<H>) -> Secret {
        derive_secret::<H>(
            self.secret.as_bytes(),
            SERVER_APPLICATION_TRAFFIC,
            Some(transcript),
        )
    }

    /// Returns `exporter_master_secret`.
    ///
    /// `transcript` must cover ClientHello...server Finished.
    pub fn exporter_master_secret(&self, transcript: &impl Transcript<H>) -> ExporterMasterSecret<H> {
        ExporterMasterSecret::new(derive_secret::<H>(
            self.secret.as_bytes(),
            EXPORTER_MASTER,
            Some(transcript),
        ))
    }

    /// Returns `resumption_master_secret`.
    ///
    /// `transcript` must cover ClientHello...client Finished.
    pub fn resumption_master_secret(&self, transcript: &impl Transcript<H>) -> Secret {
        derive_secret::<H>(self.secret.as_bytes(), RESUMPTION_MASTER, Some(transcript))
    }

    #[cfg(test)]
    pub(crate) fn secret(&self) -> &Secret {
        &self.secret
    }
}

impl<H: HashAlgorithm> fmt::Debug for MasterSecret<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MasterSecret").finish_non_exhaustive()
    }
}
