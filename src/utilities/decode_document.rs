/// Decodes the fetched bytes as UTF-8, replacing invalid sequences with
/// U+FFFD instead of failing.
pub fn decode_document(content: &[u8]) -> String {
    String::from_utf8_lossy(content).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_is_unchanged() {
        assert_eq!(decode_document("<title>Café</title>".as_bytes()), "<title>Café</title>");
    }

    #[test]
    fn invalid_bytes_are_replaced() {
        let decoded = decode_document(b"<title>a\xffb</title>");
        assert_eq!(decoded, "<title>a\u{FFFD}b</title>");
    }
}
