//! HKDF ([RFC 5869]) and its TLS 1.3 framing ([RFC 8446, Section 7.1]).
//!
//! [RFC 5869]: https://datatracker.ietf.org/doc/html/rfc5869
//! [RFC 8446, Section 7.1]: https://datatracker.ietf.org/doc/html/rfc8446#section-7.1

mod expand;
mod extract;

pub use expand::{derive_secret, expand, expand_label, label::hkdf_label};
pub use extract::extract;
