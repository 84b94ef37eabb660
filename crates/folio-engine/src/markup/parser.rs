use super::{
    cursor::Cursor,
    types::{Fragment, StyleKind},
};

/// Parses inline pseudo-tag markup into a flat sequence of [`Fragment`]s.
///
/// Returns `None` for missing or empty input. Otherwise runs one pass per
/// [`StyleKind`] in [`StyleKind::PASS_ORDER`]; each pass only rescans
/// fragments that are still plain text, so `<strong>` always resolves before
/// `<em>`, and both before `<code>`.
///
/// Fragments with an empty value are dropped from the result, which means an
/// explicit empty pair such as `<strong></strong>` vanishes entirely.
///
/// ```
/// use folio_engine::markup::{parse_markup, Fragment, StyleKind};
///
/// let fragments = parse_markup("Hello <strong>world</strong>!").unwrap();
/// assert_eq!(
///     fragments,
///     vec![
///         Fragment::plain("Hello "),
///         Fragment::styled("world", StyleKind::Bold),
///         Fragment::plain("!"),
///     ]
/// );
/// assert_eq!(parse_markup(None), None);
/// ```
pub fn parse_markup<'a>(text: impl Into<Option<&'a str>>) -> Option<Vec<Fragment>> {
    let text = text.into().filter(|t| !t.is_empty())?;

    let mut fragments = vec![Fragment::plain(text)];
    for style in StyleKind::PASS_ORDER {
        fragments = apply_pass(fragments, style);
    }

    fragments.retain(|f| !f.value().is_empty());
    log::trace!("parsed {} bytes into {} fragments", text.len(), fragments.len());
    Some(fragments)
}

/// Splits every plain fragment on `style`'s tag pair; styled fragments pass
/// through untouched.
fn apply_pass(fragments: Vec<Fragment>, style: StyleKind) -> Vec<Fragment> {
    fragments
        .into_iter()
        .flat_map(|fragment| match fragment {
            Fragment::PlainText(text) => split_plain(&text, style),
            styled => vec![styled],
        })
        .collect()
}

/// A matched tag pair: byte ranges of the whole match and of its content.
struct TagMatch {
    start: usize,
    inner_start: usize,
    inner_end: usize,
    end: usize,
}

/// Outcome of trying to match a tag pair at the cursor.
enum TagScan {
    /// The cursor is not at an opener.
    NoOpener,
    /// An opener with no closer anywhere after it.
    Unclosed,
    Matched(TagMatch),
}

/// Splits plain text into alternating plain and styled fragments for one
/// tag kind, scanning left to right.
///
/// Runs in time linear in `s`: once an opener finds no closer, no later
/// opener can find one either, so the remainder is flushed as plain text.
fn split_plain(s: &str, style: StyleKind) -> Vec<Fragment> {
    let (open, close) = style.delimiters();
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a plain fragment
    fn flush_text(out: &mut Vec<Fragment>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(Fragment::plain(&s[start..end]));
        }
    }

    while !cur.eof() {
        match try_parse_tagged(&mut cur, open, close) {
            TagScan::Matched(m) => {
                flush_text(&mut out, s, text_start, m.start);
                out.push(Fragment::styled(&s[m.inner_start..m.inner_end], style));
                text_start = m.end;
            }
            TagScan::Unclosed => break,
            TagScan::NoOpener => {
                cur.bump();
            }
        }
    }

    flush_text(&mut out, s, text_start, s.len());
    out
}

/// Attempts to match `open ... close` at the current position, ending at the
/// first `close` found. Content may span lines.
///
/// On a match the cursor moves past `close`; otherwise it is restored.
fn try_parse_tagged(cur: &mut Cursor<'_>, open: &[u8], close: &[u8]) -> TagScan {
    if !cur.starts_with(open) {
        return TagScan::NoOpener;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(open.len());
    let inner_start = cur.pos();

    while !cur.eof() && !cur.starts_with(close) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.eof() {
        // No closer before end of input, restore cursor
        *cur = saved;
        return TagScan::Unclosed;
    }
    cur.bump_n(close.len());

    TagScan::Matched(TagMatch {
        start,
        inner_start,
        inner_end,
        end: cur.pos(),
    })
}
