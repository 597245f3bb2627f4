//! Text decoding for fetched or saved pages.

use std::borrow::Cow;

use log::warn;

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. Uses the hint encoding (an HTTP `charset`) when it names a known label
/// 2. Otherwise tries UTF-8 (handles BOM automatically via encoding_rs)
/// 3. Falls back to Windows-1257, the legacy Baltic code page
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.trim().as_bytes())
    {
        let (result, _, malformed) = encoding.decode(bytes);
        if malformed {
            warn!("page is not valid {}", encoding.name());
        }
        return result;
    }

    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return result;
    }

    warn!("page is not valid UTF-8, decoding as windows-1257");
    let (result, _, _) = encoding_rs::WINDOWS_1257.decode(bytes);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_text("Ceļa zīmes".as_bytes(), None), "Ceļa zīmes");
        assert_eq!(decode_text(b"\xEF\xBB\xBFabc", None), "abc");
    }

    #[test]
    fn test_decode_with_hint() {
        // "ļ" is 0xEF in windows-1257
        assert_eq!(decode_text(b"Ce\xEFa", Some("windows-1257")), "Ceļa");
        assert_eq!(decode_text("zīmes".as_bytes(), Some("utf-8")), "zīmes");
    }

    #[test]
    fn test_decode_fallback() {
        assert_eq!(decode_text(b"Ce\xEFa", None), "Ceļa");
    }

    #[test]
    fn test_unknown_hint_ignored() {
        assert_eq!(decode_text(b"abc", Some("no-such-charset")), "abc");
    }
}
