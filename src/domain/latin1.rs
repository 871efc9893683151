/// Decodes every byte as the code point of the same value (ISO-8859-1).
///
/// Total and lossless: any byte sequence has exactly one decoding, one `char`
/// per byte, in the same order.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
