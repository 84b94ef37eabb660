use serde::{Deserialize, Serialize};

use super::MediaKind;

/// Drive v3 files endpoint.
pub const FILES_ENDPOINT: &str = "https://www.googleapis.com/drive/v3/files";
/// Field mask requested for each listing page.
pub const LISTING_FIELDS: &str = "nextPageToken, files(id,name,mimeType,createdTime,description)";
pub const LISTING_ORDER: &str = "createdTime desc";
/// Largest page size the listing endpoint accepts.
pub const PAGE_SIZE: u32 = 100;

pub const IMAGE_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/bmp",
    "image/svg+xml",
    "image/heic",
    "image/heif",
];

pub const VIDEO_MIME_TYPES: &[&str] = &["video/mp4", "video/quicktime", "video/x-msvideo", "video/webm"];

/// One file entry of a Drive listing response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DriveFile {
    /// Classifies the file by MIME type. Video wins if a type were ever
    /// listed as both.
    pub fn media_kind(&self) -> Option<MediaKind> {
        let mime = self.mime_type.as_str();
        if VIDEO_MIME_TYPES.contains(&mime) {
            Some(MediaKind::Video)
        } else if IMAGE_MIME_TYPES.contains(&mime) {
            Some(MediaKind::Image)
        } else {
            None
        }
    }
}

/// One page of a Drive listing response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFileList {
    #[serde(default)]
    pub files: Vec<DriveFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Builds the request URL for one page of a folder listing.
///
/// Lists every non-trashed file in the folder, newest first; MIME filtering
/// happens afterwards in [`build_catalog`](super::build_catalog).
pub fn listing_url(folder_id: &str, api_key: &str, page_token: Option<&str>) -> String {
    let query = format!("'{folder_id}' in parents and trashed=false");
    let page_size = PAGE_SIZE.to_string();
    let mut params = vec![
        ("q", query.as_str()),
        ("key", api_key),
        ("fields", LISTING_FIELDS),
        ("orderBy", LISTING_ORDER),
        ("pageSize", page_size.as_str()),
    ];
    if let Some(token) = page_token {
        params.push(("pageToken", token));
    }

    let query_string = params
        .iter()
        .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{FILES_ENDPOINT}?{query_string}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn file(mime: &str) -> DriveFile {
        DriveFile {
            id: "id".to_string(),
            name: "name".to_string(),
            mime_type: mime.to_string(),
            created_time: None,
            description: None,
        }
    }

    #[test]
    fn classifies_by_mime_type() {
        assert_eq!(file("image/heic").media_kind(), Some(MediaKind::Image));
        assert_eq!(file("video/webm").media_kind(), Some(MediaKind::Video));
        assert_eq!(file("application/pdf").media_kind(), None);
        assert_eq!(file("IMAGE/PNG").media_kind(), None);
    }

    #[test]
    fn listing_url_first_page() {
        assert_eq!(
            listing_url("folder1", "key1", None),
            "https://www.googleapis.com/drive/v3/files\
             ?q=%27folder1%27%20in%20parents%20and%20trashed%3Dfalse\
             &key=key1\
             &fields=nextPageToken%2C%20files%28id%2Cname%2CmimeType%2CcreatedTime%2Cdescription%29\
             &orderBy=createdTime%20desc\
             &pageSize=100"
        );
    }

    #[test]
    fn listing_url_includes_page_token() {
        let url = listing_url("f", "k", Some("tok/en"));
        assert!(url.ends_with("&pageSize=100&pageToken=tok%2Fen"), "{url}");
    }

    #[test]
    fn deserializes_listing_page() {
        let json = r#"{
            "nextPageToken": "next",
            "files": [
                {"id": "1", "name": "a.jpg", "mimeType": "image/jpeg", "createdTime": "2024-01-01T00:00:00Z"}
            ]
        }"#;
        let page: DriveFileList = serde_json::from_str(json).unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("next"));
        assert_eq!(page.files.len(), 1);
        assert_eq!(page.files[0].mime_type, "image/jpeg");
        assert_eq!(page.files[0].description, None);
    }

    #[test]
    fn empty_page_defaults() {
        let page: DriveFileList = serde_json::from_str("{}").unwrap();
        assert!(page.files.is_empty());
        assert!(page.next_page_token.is_none());
    }
}
