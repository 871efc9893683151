/// One fuzz input. Never empty: a zero-length buffer has no `TestCase`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase<'a>(&'a [u8]);

impl<'a> TestCase<'a> {
    /// Returns `None` for an empty buffer, which the harness skips.
    pub fn parse(data: &'a [u8]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        Some(Self(data))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl AsRef<[u8]> for TestCase<'_> {
    fn as_ref(&self) -> &[u8] {
        self.0
    }
}
