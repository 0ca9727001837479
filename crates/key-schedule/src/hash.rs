//! Hash algorithm binding and transcript access.

use core::fmt;

use digest::{core_api::BlockSizeUser, Digest, Output};

pub use sha2::{Sha256, Sha384};

/// A hash function a key schedule is bound to.
///
/// Implemented for every RustCrypto hash, so any backend implementing the
/// [`digest`] traits can be plugged in. Each call to
/// [`HashAlgorithm::new_state`] yields an independent state.
pub trait HashAlgorithm: Digest + BlockSizeUser + Clone + Send + Sync + 'static {
    /// Returns a fresh hash state.
    fn new_state() -> Self {
        <Self as Digest>::new()
    }

    /// Returns the digest size in bytes.
    fn digest_size() -> usize {
        <Self as Digest>::output_size()
    }

    /// Returns the digest of the empty string.
    fn empty_hash() -> Output<Self> {
        Self::new_state().finalize()
    }
}

impl<H> HashAlgorithm for H where H: Digest + BlockSizeUser + Clone + Send + Sync + 'static {}

/// Read access to a running handshake transcript hash.
///
/// Taking a snapshot must not disturb the transcript: the handshake keeps
/// feeding messages into it afterwards.
pub trait Transcript<H: HashAlgorithm> {
    /// Returns the digest of the messages seen so far.
    fn snapshot(&self) -> Output<H>;
}

impl<H: HashAlgorithm> Transcript<H> for H {
    fn snapshot(&self) -> Output<H> {
        Digest::finalize(self.clone())
    }
}

/// A transcript whose digest was computed elsewhere.
pub struct TranscriptHash<H: HashAlgorithm>(Output<H>);

impl<H: HashAlgorithm> TranscriptHash<H> {
    /// Creates a transcript from a digest.
    pub fn new(digest: Output<H>) -> Self {
        Self(digest)
    }

    /// Creates a transcript from a digest given as a slice, returning `None`
    /// if the slice is not exactly one digest long.
    pub fn from_slice(digest: &[u8]) -> Option<Self> {
        (digest.len() == H::digest_size()).then(|| Self(Output::<H>::clone_from_slice(digest)))
    }

    /// Returns the digest.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl<H: HashAlgorithm> Transcript<H> for TranscriptHash<H> {
    fn snapshot(&self) -> Output<H> {
        self.0.clone()
    }
}

impl<H: HashAlgorithm> Clone for TranscriptHash<H> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<H: HashAlgorithm> PartialEq for TranscriptHash<H> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<H: HashAlgorithm> Eq for TranscriptHash<H> {}

impl<H: HashAlgorithm> fmt::Debug for TranscriptHash<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TranscriptHash")
            .field(&format_args!("{:02x?}", self.0.as_slice()))
            .finish()
    }
}
