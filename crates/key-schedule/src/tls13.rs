//! The TLS 1.3 key schedule.
//!
//! ```text
//!              0
//!              |
//!              v
//!    PSK ->  HKDF-Extract = Early Secret
//!              |
//!              +-----> Derive-Secret(., "ext binder" | "res binder", "")
//!              +-----> Derive-Secret(., "c e traffic", ClientHello)
//!              +-----> Derive-Secret(., "e exp master", ClientHello)
//!              v
//!        Derive-Secret(., "derived", "")
//!              |
//!              v
//!    (EC)DHE -> HKDF-Extract = Handshake Secret
//!              |
//!              +-----> Derive-Secret(., "c hs traffic", ClientHello...ServerHello)
//!              +-----> Derive-Secret(., "s hs traffic", ClientHello...ServerHello)
//!              v
//!        Derive-Secret(., "derived", "")
//!              |
//!              v
//!    0 -> HKDF-Extract = Master Secret
//!              |
//!              +-----> Derive-Secret(., "c ap traffic", ClientHello...server Finished)
//!              +-----> Derive-Secret(., "s ap traffic", ClientHello...server Finished)
//!              +-----> Derive-Secret(., "exp master", ClientHello...server Finished)
//!              +-----> Derive-Secret(., "res master", ClientHello...client Finished)
//! ```
//!
//! Each extracted secret is a stage type. Advancing a stage consumes it, so
//! the secret of the previous stage is wiped as soon as the next one exists.

mod early;
mod exporter;
mod handshake;
mod master;
pub mod traffic;

pub use early::EarlySecret;
pub use exporter::ExporterMasterSecret;
pub use handshake::HandshakeSecret;
pub use master::MasterSecret;

pub(crate) const DERIVED: &[u8] = b"derived";
pub(crate) const EXT_BINDER: &[u8] = b"ext binder";
pub(crate) const RES_BINDER: &[u8] = b"res binder";
pub(crate) const CLIENT_EARLY_TRAFFIC: &[u8] = b"c e traffic";
pub(crate) const EARLY_EXPORTER_MASTER: &[u8] = b"e exp master";
pub(crate) const CLIENT_HANDSHAKE_TRAFFIC: &[u8] = b"c hs traffic";
pub(crate) const SERVER_HANDSHAKE_TRAFFIC: &[u8] = b"s hs traffic";
pub(crate) const CLIENT_APPLICATION_TRAFFIC: &[u8] = b"c ap traffic";
pub(crate) const SERVER_APPLICATION_TRAFFIC: &[u8] = b"s ap traffic";
pub(crate) const EXPORTER_MASTER: &[u8] = b"exp master";
pub(crate) const RESUMPTION_MASTER: &[u8] = b"res master";
pub(crate) const EXPORTER: &[u8] = b"exporter";
pub(crate) const FINISHED: &[u8] = b"finished";
pub(crate) const TRAFFIC_UPDATE: &[u8] = b"traffic upd";
pub(crate) const RESUMPTION: &[u8] = b"resumption";
