use core::{fmt, marker::PhantomData};

use crate::{
    hash::HashAlgorithm,
    kdf::{derive_secret, expand_label},
    tls13::EXPORTER,
    Secret,
};

/// An exporter master secret, either `exporter_master_secret` or
/// `early_exporter_master_secret`.
///
/// The secret itself is never handed out. Keying material is obtained per
/// label through [`ExporterMasterSecret::exporter`] ([RFC 8446, Section 7.5]).
///
/// [RFC 8446, Section 7.5]: https://datatracker.ietf.org/doc/html/rfc8446#section-7.5
pub struct ExporterMasterSecret<H: HashAlgorithm> {
    secret: Secret,
    _hash: PhantomData<fn() -> H>,
}

impl<H: HashAlgorithm> ExporterMasterSecret<H> {
    pub(crate) fn new(secret: Secret) -> Self {
        Self {
            secret,
            _hash: PhantomData,
        }
    }

    /// Computes `TLS-Exporter(label, context_value, key_length)`.
    ///
    /// An absent context and an empty context are the same input in TLS 1.3.
    ///
    /// # Panics
    ///
    /// Aborts with a [`Defect`](crate::Defect) if `label` is longer than 249
    /// bytes or `length` is more than `255 * HashLen`.
    pub fn exporter(&self, label: &[u8], context: &[u8], length: usize) -> Secret {
        let secret = derive_secret::<H>(self.secret.as_bytes(), label, None);
        let context_hash = H::digest(context);

        expand_label::<H>(secret.as_bytes(), EXPORTER, &context_hash, length)
    }

    #[cfg(test)]
    pub(crate) fn secret(&self) -> &Secret {
        &self.secret
    }
}

impl<H: HashAlgorithm> fmt::Debug for ExporterMasterSecret<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExporterMasterSecret").finish_non_exhaustive()
    }
}
