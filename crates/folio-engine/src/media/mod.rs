//! # Media
//!
//! Display URLs for Drive-hosted media and the catalog built from a Drive
//! folder listing. Nothing here touches the network: listing pages come in
//! as already-fetched JSON.

pub mod catalog;
pub mod drive;
pub mod url;

pub use catalog::{Catalog, MediaItem, build_catalog, title_from_name};
pub use drive::{DriveFile, DriveFileList, listing_url};
pub use url::{MediaKind, resolve_url};
