/// Code span delimiters: `<code>text</code>`.
///
/// Unlike markdown backticks these are not a raw zone: a `<code>` pair is
/// only resolved after the bold and emphasis passes have run.
pub struct Code;

impl Code {
    pub const OPEN: &'static [u8] = b"<code>";
    pub const CLOSE: &'static [u8] = b"</code>";
}
