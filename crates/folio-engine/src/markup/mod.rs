//! # Inline Markup
//!
//! Turns content strings containing `<strong>`, `<em>` and `<code>` pseudo-tags
//! into a flat, ordered list of [`Fragment`]s.
//!
//! ## Modules
//!
//! - **`types`**: `Fragment` (PlainText | StyledSpan) and `StyleKind`
//! - **`kinds`**: one type per tag, owning its delimiter pair
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse_markup()` entry point and the per-tag passes
//!
//! ## Pass Precedence
//!
//! Tags are resolved one kind at a time (bold, then emphasis, then code) and
//! later passes only see text that earlier passes left plain. So
//! `<em><strong>x</strong></em>` yields a bold `x` between two literal `<em>`
//! and `</em>` fragments. Tags do not nest and carry no attributes; an opener
//! without a closer is left as literal text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_markup;
pub use types::{Fragment, StyleKind, concat_values};
