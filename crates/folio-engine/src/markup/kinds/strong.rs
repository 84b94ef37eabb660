/// Bold span delimiters: `<strong>text</strong>`.
pub struct Strong;

impl Strong {
    pub const OPEN: &'static [u8] = b"<strong>";
    pub const CLOSE: &'static [u8] = b"</strong>";
}
