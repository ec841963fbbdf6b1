//! Legacy codepage handling for puzzle bytes.
//!
//! Some sources author their `.puz` files in an 8-bit codepage whose dash
//! characters do not survive the PDF renderer unless normalized before the
//! binary parser consumes them.

use crate::ExportError;

/// Encoding marker meaning the bytes need no conversion.
pub const NO_CONVERSION: &str = "UTF-8";

/// The en dash as it appears when its UTF-8 bytes are read as Windows-1252.
const MISDECODED_EN_DASH: &str = "\u{e2}\u{20ac}\u{201c}";

/// Re-encode puzzle bytes authored in a legacy single-byte codepage.
///
/// With [`NO_CONVERSION`] the input is returned unchanged. Otherwise the
/// bytes are decoded with the named encoding, every mis-decoded en dash is
/// replaced with a plain hyphen, and each character is mapped back to one
/// byte by truncating its scalar value.
pub fn recode(bytes: Vec<u8>, encoding: &str) -> Result<Vec<u8>, ExportError> {
    if encoding == NO_CONVERSION {
        return Ok(bytes);
    }

    let codec = encoding_rs::Encoding::for_label(encoding.as_bytes())
        .ok_or_else(|| ExportError::UnknownEncoding(encoding.to_string()))?;
    let (text, _, _) = codec.decode(&bytes);
    let text = text.replace(MISDECODED_EN_DASH, "-");

    Ok(text.chars().map(|ch| ch as u32 as u8).collect())
}
