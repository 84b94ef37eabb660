//! HTML rendering of parsed markup fragments.

use serde::{Deserialize, Serialize};

use crate::markup::{Fragment, StyleKind};

/// CSS classes applied to each styled span kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleClasses {
    pub bold: String,
    pub emphasis: String,
    pub code: String,
}

impl Default for StyleClasses {
    fn default() -> Self {
        Self {
            bold: "font-semibold dark:text-red-500".to_string(),
            emphasis: "text-gray-700 italic dark:text-red-400".to_string(),
            code: "font-mono font-semibold dark:text-red-500".to_string(),
        }
    }
}

impl StyleClasses {
    pub fn class_for(&self, style: StyleKind) -> &str {
        match style {
            StyleKind::Bold => &self.bold,
            StyleKind::Emphasis => &self.emphasis,
            StyleKind::Code => &self.code,
        }
    }
}

/// Renders fragments to an HTML string.
///
/// Plain text is escaped and emitted as is. Styled spans become
/// `<span data-key="<style>-<index>" class="...">` where `index` is the
/// fragment's position, so keys are stable across renders.
pub fn render_html(fragments: &[Fragment], classes: &StyleClasses) -> String {
    let mut html = String::new();
    for (index, fragment) in fragments.iter().enumerate() {
        match fragment {
            Fragment::PlainText(text) => html.push_str(&html_escape::encode_text(text)),
            Fragment::StyledSpan { value, style } => {
                let class = html_escape::encode_double_quoted_attribute(classes.class_for(*style));
                let text = html_escape::encode_text(value);
                html.push_str(&format!(
                    r#"<span data-key="{}-{index}" class="{class}">{text}</span>"#,
                    style.as_str()
                ));
            }
        }
    }
    html
}
