//! # Markup Kinds
//!
//! Each recognised pseudo-tag owns its delimiter pair. The parser reads
//! delimiters through [`StyleKind::delimiters`](super::StyleKind::delimiters);
//! it never hardcodes `<strong>` or `</em>`.
//!
//! - **`Strong`**: `<strong>` / `</strong>`
//! - **`Em`**: `<em>` / `</em>`
//! - **`Code`**: `<code>` / `</code>`

pub mod code;
pub mod em;
pub mod strong;

pub use code::Code;
pub use em::Em;
pub use strong::Strong;
