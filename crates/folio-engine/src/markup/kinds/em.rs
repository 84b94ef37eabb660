/// Emphasis span delimiters: `<em>text</em>`.
pub struct Em;

impl Em {
    pub const OPEN: &'static [u8] = b"<em>";
    pub const CLOSE: &'static [u8] = b"</em>";
}
