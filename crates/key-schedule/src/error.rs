#[cfg(feature = "logging")]
use tracing::error;

/// A violated key schedule invariant.
///
/// Labels are fixed strings and contexts are either digests or fields whose
/// length the handshake parser already bounds, so a `Defect` can only be
/// caused by a bug in the caller. It is never returned: the derivation aborts
/// with the defect as panic message instead of producing key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Defect {
    /// `"tls13 " || label` does not fit in a `u8` length prefix.
    #[error("tls13: label too long ({0} bytes with prefix, limit 255)")]
    LabelTooLong(usize),
    /// The context does not fit in a `u8` length prefix.
    #[error("tls13: context too long ({0} bytes, limit 255)")]
    ContextTooLong(usize),
    /// The requested output length does not fit in the `u16` label field.
    #[error("tls13: output length {0} does not fit in a u16")]
    OutputLengthOverflow(usize),
    /// HKDF-Expand was asked for more than `255 * HashLen` bytes.
    #[error("hkdf: requested {requested} bytes, limit is {limit}")]
    ExpandTooLong {
        /// Requested output length.
        requested: usize,
        /// Maximum output length for the hash.
        limit: usize,
    },
    /// The HMAC implementation refused the key.
    #[error("hmac: invalid key length {0}")]
    HmacKey(usize),
}

impl Defect {
    /// Aborts the current derivation.
    #[cold]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        error!(defect = %self, "key schedule invariant violated");
        panic!("{self}")
    }
}
