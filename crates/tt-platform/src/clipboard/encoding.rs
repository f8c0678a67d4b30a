//! Byte layouts of the native text formats.
//!
//! Clipboard payloads are sized by their allocation, not by their content, so
//! decoders stop at the first terminator or at the end of the buffer,
//! whichever comes first.

/// `CF_UNICODETEXT` payload: UTF-16LE code units followed by a NUL unit.
pub fn encode_wide(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity((text.len() + 1) * 2);
    for unit in text.encode_utf16().chain(std::iter::once(0)) {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

/// Decodes a `CF_UNICODETEXT` payload. A trailing odd byte is ignored.
pub fn decode_wide(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .take_while(|&unit| unit != 0)
        .collect();

    String::from_utf16_lossy(&units)
}

/// NUL-terminated UTF-16 string for Win32 `LPCWSTR` parameters.
pub fn to_wide_nul(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

/// `CF_TEXT` payload: the text bytes followed by a NUL byte.
///
/// The OS reads these bytes in the active code page; text outside ASCII is
/// only faithful when that code page is UTF-8.
pub fn encode_ansi(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len() + 1);
    bytes.extend_from_slice(text.as_bytes());
    bytes.push(0);
    bytes
}

/// Decodes a `CF_TEXT` payload up to its NUL terminator.
pub fn decode_ansi(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_round_trip_keeps_every_character() {
        let text = "御館様の想定通り、信濃勢は徹底抗戦の構えを見せた。😀";
        assert_eq!(decode_wide(&encode_wide(text)), text);
    }

    #[test]
    fn wide_payload_is_nul_terminated() {
        assert_eq!(encode_wide("A"), vec![0x41, 0x00, 0x00, 0x00]);
        assert_eq!(encode_wide(""), vec![0x00, 0x00]);
    }

    #[test]
    fn wide_decoder_stops_at_terminator() {
        let mut bytes = encode_wide("text");
        bytes.extend_from_slice(&[0x41, 0x00, 0x42, 0x00]);
        assert_eq!(decode_wide(&bytes), "text");
    }

    #[test]
    fn wide_decoder_does_not_need_terminator() {
        let bytes = [0x68, 0x00, 0x69, 0x00, 0x21];
        assert_eq!(decode_wide(&bytes), "hi");
    }

    #[test]
    fn ansi_round_trip() {
        assert_eq!(encode_ansi("abc"), b"abc\0".to_vec());
        assert_eq!(decode_ansi(&encode_ansi("plain text")), "plain text");
        assert_eq!(decode_ansi(b"no terminator"), "no terminator");
        assert_eq!(decode_ansi(b"cut\0tail"), "cut");
    }

    #[test]
    fn wide_nul_string() {
        assert_eq!(to_wide_nul("ST"), vec![0x53, 0x54, 0]);
    }
}
