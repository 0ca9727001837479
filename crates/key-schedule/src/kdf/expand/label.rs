//! Computation of HkdfLabel as specified in TLS 1.3.
//!
//! ```text
//! struct {
//!     uint16 length = Length;
//!     opaque label<7..255> = "tls13 " + Label;
//!     opaque context<0..255> = Context;
//! } HkdfLabel;
//! ```

use crate::Defect;

const LABEL_PREFIX: &[u8] = b"tls13 ";

/// Returns the byte representation of an `HkdfLabel`.
///
/// # Panics
///
/// Aborts with a [`Defect`] if `"tls13 " || label` or `context` is longer
/// than 255 bytes, or if `out_len` does not fit in a `u16`.
pub fn hkdf_label(label: &[u8], context: &[u8], out_len: usize) -> Vec<u8> {
    let Ok(output_len) = u16::try_from(out_len) else {
        Defect::OutputLengthOverflow(out_len).raise()
    };
    let full_label_len = LABEL_PREFIX.len() + label.len();
    let Ok(label_len) = u8::try_from(full_label_len) else {
        Defect::LabelTooLong(full_label_len).raise()
    };
    let Ok(context_len) = u8::try_from(context.len()) else {
        Defect::ContextTooLong(context.len()).raise()
    };

    // 2 : output length as u16
    // 1 : label length as u8
    // 1 : context length as u8
    let mut hkdf_label = Vec::with_capacity(2 + 1 + full_label_len + 1 + context.len());
    hkdf_label.extend_from_slice(&output_len.to_be_bytes());
    hkdf_label.push(label_len);
    hkdf_label.extend_from_slice(LABEL_PREFIX);
    hkdf_label.extend_from_slice(label);
    hkdf_label.push(context_len);
    hkdf_label.extend_from_slice(context);
    hkdf_label
}
