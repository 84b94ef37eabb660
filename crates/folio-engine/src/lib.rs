pub mod io;
pub mod markup;
pub mod media;
pub mod posts;
pub mod render;
pub mod share;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::IoError;
pub use markup::{Fragment, StyleKind, concat_values, parse_markup};
pub use media::{Catalog, MediaItem, MediaKind, build_catalog, resolve_url};
pub use posts::{Blog, BlogPost, NotificationPayload, posts_to_notify};
pub use render::{StyleClasses, render_html};
pub use share::{SharePlatform, post_url, share_link};
