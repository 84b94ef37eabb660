use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{DriveFile, MediaKind, resolve_url};

/// Category assigned to every item built from a Drive folder.
pub const DEFAULT_CATEGORY: &str = "Photos";

/// One entry of the site's media catalog (`googleDriveMedia.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Kind string as stored in the catalog; only `"image"` and `"video"`
    /// resolve to a URL.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_drive_id: Option<String>,
    #[serde(default)]
    pub category: String,
}

impl MediaItem {
    pub fn media_kind(&self) -> Option<MediaKind> {
        MediaKind::parse(&self.kind)
    }

    /// Display URL, or `None` when the item should render a placeholder.
    pub fn display_url(&self) -> Option<String> {
        resolve_url(self.google_drive_id.as_deref(), self.kind.as_str())
    }
}

/// The result of filtering a Drive listing into catalog items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub items: Vec<MediaItem>,
    /// Count of skipped files per MIME type.
    pub skipped: BTreeMap<String, usize>,
}

impl Catalog {
    pub fn skipped_count(&self) -> usize {
        self.skipped.values().sum()
    }
}

/// Strips the last extension from a file name: `"a.b.jpg"` -> `"a.b"`.
///
/// A name that is only an extension (`".jpg"`) becomes empty, and a dot
/// followed by nothing is left alone.
pub fn title_from_name(name: &str) -> String {
    static EXTENSION_REGEX: OnceLock<Regex> = OnceLock::new();
    let extension_regex =
        EXTENSION_REGEX.get_or_init(|| Regex::new(r"\.[^/.]+$").expect("Invalid extension regex"));
    extension_regex.replace(name, "").into_owned()
}

/// Builds catalog items from listed Drive files, keeping listing order.
///
/// Only supported image and video MIME types are kept. Ids are sequential
/// from 1 over the kept files.
pub fn build_catalog(files: impl IntoIterator<Item = DriveFile>) -> Catalog {
    let mut catalog = Catalog::default();

    for file in files {
        let Some(kind) = file.media_kind() else {
            *catalog.skipped.entry(file.mime_type).or_default() += 1;
            continue;
        };

        let id = catalog.items.len() as u32 + 1;
        catalog.items.push(MediaItem {
            id,
            title: title_from_name(&file.name),
            description: file.description.unwrap_or_default(),
            kind: kind.as_str().to_string(),
            google_drive_id: Some(file.id),
            category: DEFAULT_CATEGORY.to_string(),
        });
    }

    for (mime, count) in &catalog.skipped {
        log::debug!("skipped {count} file(s) of type {mime}");
    }
    catalog
}
