use serde::{Deserialize, Serialize};

/// Prefix of the Drive thumbnail endpoint; the file id follows directly.
pub const THUMBNAIL_PREFIX: &str = "https://drive.google.com/thumbnail?id=";
/// Requested thumbnail width, appended after the file id.
pub const THUMBNAIL_SIZE_SUFFIX: &str = "&sz=w2000";
/// Prefix of the Drive embeddable preview page.
pub const PREVIEW_PREFIX: &str = "https://drive.google.com/file/d/";
pub const PREVIEW_SUFFIX: &str = "/preview";

/// Media kinds that have a display URL template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Parses the exact kind strings `"image"` and `"video"`.
    ///
    /// Matching is case-sensitive; anything else is unrecognised.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "image" => Some(MediaKind::Image),
            "video" => Some(MediaKind::Video),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    /// Builds the display URL for `identifier`.
    ///
    /// The identifier is substituted verbatim, without percent-encoding.
    pub fn display_url(self, identifier: &str) -> String {
        match self {
            MediaKind::Image => format!("{THUMBNAIL_PREFIX}{identifier}{THUMBNAIL_SIZE_SUFFIX}"),
            MediaKind::Video => format!("{PREVIEW_PREFIX}{identifier}{PREVIEW_SUFFIX}"),
        }
    }
}

/// Resolves a media identifier and kind string to a display URL.
///
/// Returns `None` (render a placeholder) when the identifier is missing or
/// empty, or when the kind is missing or not one of `"image"` / `"video"`.
///
/// ```
/// use folio_engine::media::resolve_url;
///
/// assert_eq!(
///     resolve_url("abc123", "video").as_deref(),
///     Some("https://drive.google.com/file/d/abc123/preview")
/// );
/// assert_eq!(resolve_url(None, "image"), None);
/// assert_eq!(resolve_url("abc123", "pdf"), None);
/// ```
pub fn resolve_url<'a, 'b>(
    identifier: impl Into<Option<&'a str>>,
    kind: impl Into<Option<&'b str>>,
) -> Option<String> {
    let identifier = identifier.into().filter(|id| !id.is_empty())?;
    let kind = kind.into().and_then(MediaKind::parse)?;
    Some(kind.display_url(identifier))
}
