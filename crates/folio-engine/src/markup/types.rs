use serde::{Deserialize, Serialize};

use super::kinds::{Code, Em, Strong};

/// The presentational class a tagged span was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    /// From `<strong>`.
    Bold,
    /// From `<em>`.
    Emphasis,
    /// From `<code>`.
    Code,
}

impl StyleKind {
    /// Order in which tag passes run. Earlier passes win over later ones
    /// regardless of where the tags sit in the source text.
    pub const PASS_ORDER: [StyleKind; 3] = [StyleKind::Bold, StyleKind::Emphasis, StyleKind::Code];

    /// Returns the `(open, close)` delimiter pair for this kind.
    pub fn delimiters(self) -> (&'static [u8], &'static [u8]) {
        match self {
            StyleKind::Bold => (Strong::OPEN, Strong::CLOSE),
            StyleKind::Emphasis => (Em::OPEN, Em::CLOSE),
            StyleKind::Code => (Code::OPEN, Code::CLOSE),
        }
    }

    /// Short lowercase name, used for render keys and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleKind::Bold => "bold",
            StyleKind::Emphasis => "emphasis",
            StyleKind::Code => "code",
        }
    }
}

/// One unit of parsed output, in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fragment {
    /// Untagged text, including tag-like text that was never closed.
    PlainText(String),
    /// Text that was wrapped in a recognised tag pair, delimiters stripped.
    StyledSpan { value: String, style: StyleKind },
}

impl Fragment {
    pub fn plain(value: impl Into<String>) -> Self {
        Fragment::PlainText(value.into())
    }

    pub fn styled(value: impl Into<String>, style: StyleKind) -> Self {
        Fragment::StyledSpan {
            value: value.into(),
            style,
        }
    }

    /// The fragment's text content.
    pub fn value(&self) -> &str {
        match self {
            Fragment::PlainText(value) => value,
            Fragment::StyledSpan { value, .. } => value,
        }
    }

    /// The style of a styled span, `None` for plain text.
    pub fn style(&self) -> Option<StyleKind> {
        match self {
            Fragment::PlainText(_) => None,
            Fragment::StyledSpan { style, .. } => Some(*style),
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Fragment::PlainText(_))
    }
}

/// Concatenates every fragment's value in order.
pub fn concat_values(fragments: &[Fragment]) -> String {
    fragments.iter().map(Fragment::value).collect()
}
