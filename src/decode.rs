use encoding_rs::WINDOWS_1251;

/// Decodes the raw export at the I/O boundary; the report format is a
/// windows-1251 byte stream. Undecodable bytes become U+FFFD.
pub(crate) fn decode_report_bytes(bytes: &[u8]) -> String {
    let (text, _, had_errors) = WINDOWS_1251.decode(bytes);
    if had_errors {
        tracing::warn!("input contains bytes that do not decode as windows-1251");
    }
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::decode_report_bytes;

    #[test]
    fn decodes_cyrillic_bytes() {
        // "янв" in windows-1251
        let bytes = [0xFF, 0xED, 0xE2];
        assert_eq!(decode_report_bytes(&bytes), "янв");
    }

    #[test]
    fn passes_ascii_through() {
        assert_eq!(decode_report_bytes(b"01 -- 42"), "01 -- 42");
    }
}
