//! Byte-level input helpers: charset sniffing and decoding.

use std::borrow::Cow;

use encoding_rs::Encoding;
use memchr::memmem;

/// How far into the document a charset declaration is searched for.
const SNIFF_LEN: usize = 1024;

/// Decode an HTML document from raw bytes.
///
/// A byte order mark wins. Otherwise the document is decoded by
/// [`decode_text`] with the charset declared in a `<meta>` tag or an XML
/// declaration as the hint.
pub fn decode_html(bytes: &[u8]) -> Cow<'_, str> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return text;
    }
    decode_text(bytes, extract_charset(bytes))
}

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8
/// 2. If malformed, tries the hint encoding (from `charset=` or `encoding=`)
/// 3. Falls back to Windows-1252 (superset of ISO-8859-1, common on old pages)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Extract a declared charset from the start of a document.
///
/// Recognizes `<meta charset="...">`, the `charset=` parameter of an
/// `http-equiv` content type, and `<?xml ... encoding="..."?>`.
pub fn extract_charset(bytes: &[u8]) -> Option<&str> {
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    let lowered = head.to_ascii_lowercase();

    let value_start = memmem::find(&lowered, b"charset=")
        .map(|pos| pos + b"charset=".len())
        .or_else(|| {
            let xml = memmem::find(&lowered, b"<?xml")?;
            let enc = memmem::find(&lowered[xml..], b"encoding=")?;
            Some(xml + enc + b"encoding=".len())
        })?;

    let rest = &head[value_start..];
    let (quote, rest) = match rest.first() {
        Some(&q @ (b'"' | b'\'')) => (Some(q), &rest[1..]),
        _ => (None, rest),
    };

    let end = rest
        .iter()
        .position(|&b| match quote {
            Some(q) => b == q,
            None => b.is_ascii_whitespace() || matches!(b, b'"' | b'\'' | b';' | b'>' | b'/'),
        })
        .unwrap_or(rest.len());

    let value = std::str::from_utf8(&rest[..end]).ok()?.trim();
    (!value.is_empty()).then_some(value)
}
