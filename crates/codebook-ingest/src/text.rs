//! Narrative text files (project overview, key terms).

use std::path::Path;

use encoding_rs::{UTF_8, WINDOWS_1252};

use crate::error::{Result, io_error};

/// Reads a text document, falling back to Windows-1252 when it is not UTF-8.
///
/// A UTF-8 byte order mark is dropped and line endings are normalized to `\n`.
pub fn read_text_document(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    let text = decode_text(&bytes);
    if text.had_errors {
        tracing::warn!(
            path = %path.display(),
            "text is not valid UTF-8; decoded as Windows-1252"
        );
    }
    Ok(text.content.replace("\r\n", "\n"))
}

struct Decoded {
    content: String,
    had_errors: bool,
}

fn decode_text(bytes: &[u8]) -> Decoded {
    let (content, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return Decoded {
            content: content.into_owned(),
            had_errors: false,
        };
    }
    let (content, _, _) = WINDOWS_1252.decode(bytes);
    Decoded {
        content: content.into_owned(),
        had_errors: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_with_bom() {
        let decoded = decode_text(b"\xEF\xBB\xBFcaf\xC3\xA9");
        assert_eq!(decoded.content, "caf\u{e9}");
        assert!(!decoded.had_errors);
    }

    #[test]
    fn test_decode_windows_1252_fallback() {
        let decoded = decode_text(b"caf\xE9 \x93quoted\x94");
        assert_eq!(decoded.content, "caf\u{e9} \u{201c}quoted\u{201d}");
        assert!(decoded.had_errors);
    }
}
