//! Cloud-export shapes for the Google Drive REST surface.
//!
//! Only the record shapes live here. The REST calls themselves run in the
//! export collaborator.

use serde::{Deserialize, Serialize};

use super::auth::OAuth2Authorization;

/// Wire value of the `kind` discriminator on file resources.
pub const FILE_KIND: &str = "drive#file";
/// Wire value of the `kind` discriminator on file list responses.
pub const FILE_LIST_KIND: &str = "drive#fileList";
/// Media type used when an export does not name one.
pub const DEFAULT_EXPORT_MIME: &str = "application/json";

/// Export feature configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DriveExportInit {
    /// Media type used when a save request does not set one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    /// Description applied to created files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_description: Option<String>,
    /// File type label applied to created files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

impl DriveExportInit {
    /// Media type the export uses, falling back to the default.
    pub fn mime_or_default(&self) -> &str {
        self.mime.as_deref().unwrap_or(DEFAULT_EXPORT_MIME)
    }
}

/// One save or update request against the export feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SaveDriveFileOptions {
    /// Name of the parent folder to create the file under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// File id to update. Set when updating an existing file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// File resource values sent with the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<FileResource>,
    /// Authorization to use for the request. A present access token skips
    /// the authorization flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<OAuth2Authorization>,
}

impl SaveDriveFileOptions {
    /// Options for creating a new file from its resource values.
    pub fn create(meta: FileResource) -> Self {
        Self { meta: Some(meta), ..Default::default() }
    }

    /// Options for updating the file with the given id.
    pub fn update(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), ..Default::default() }
    }

    /// Whether this request updates an existing file.
    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }
}

/// Upload payload for file content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileMedia {
    pub mime_type: String,
    pub body: String,
}

/// File resource values sent when creating or updating a file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileResource {
    /// The name of the file
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ids of the parent folders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<String>>,
    /// File content type. Defaults to `application/json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl FileResource {
    /// Create a resource with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), description: None, parents: None, mime_type: None }
    }

    /// Content type of the file, falling back to the default.
    pub fn mime_type_or_default(&self) -> &str {
        self.mime_type.as_deref().unwrap_or(DEFAULT_EXPORT_MIME)
    }
}

/// One folder entry in an application folder listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FolderListItem {
    /// Always `drive#file`
    #[serde(default = "file_kind")]
    pub kind: String,
    pub id: String,
    pub name: String,
    pub mime_type: String,
}

impl FolderListItem {
    /// Whether the entry carries the expected `kind` discriminator.
    pub fn is_file_kind(&self) -> bool {
        self.kind == FILE_KIND
    }
}

/// Resource returned when a file is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileCreateItem {
    /// Always `drive#file`
    #[serde(default = "file_kind")]
    pub kind: String,
    pub id: String,
    pub name: String,
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<FolderListItem>>,
}

/// Listing of the application folders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppFolderListResponse {
    /// Always `drive#fileList`
    #[serde(default = "file_list_kind")]
    pub kind: String,
    /// Whether the listing may be missing results
    pub incomplete_search: bool,
    pub files: Vec<FolderListItem>,
}

impl AppFolderListResponse {
    /// Whether the response carries the expected `kind` discriminator.
    pub fn is_file_list_kind(&self) -> bool {
        self.kind == FILE_LIST_KIND
    }
}

fn file_kind() -> String {
    FILE_KIND.to_string()
}

fn file_list_kind() -> String {
    FILE_LIST_KIND.to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_defaults() {
        assert_eq!(DriveExportInit::default().mime_or_default(), "application/json");
        assert_eq!(FileResource::new("export.json").mime_type_or_default(), "application/json");

        let init =
            DriveExportInit { mime: Some("text/plain".to_string()), ..Default::default() };
        assert_eq!(init.mime_or_default(), "text/plain");
    }

    #[test]
    fn test_save_options_constructors() {
        let create = SaveDriveFileOptions::create(FileResource::new("export.json"));
        assert!(!create.is_update());
        assert_eq!(create.meta.unwrap().name, "export.json");

        let update = SaveDriveFileOptions::update("file-123");
        assert!(update.is_update());
        assert_eq!(update.id.as_deref(), Some("file-123"));
    }

    #[test]
    fn test_kind_defaults_when_absent() {
        let item: FolderListItem = serde_json::from_str(
            "{\"id\":\"f1\",\"name\":\"backups\",\"mimeType\":\"application/vnd.google-apps.folder\"}",
        )
        .unwrap();
        assert!(item.is_file_kind());

        let listing: AppFolderListResponse =
            serde_json::from_str("{\"incompleteSearch\":false,\"files\":[]}").unwrap();
        assert!(listing.is_file_list_kind());
        assert!(listing.files.is_empty());

        let created: FileCreateItem = serde_json::from_str(
            "{\"id\":\"file-1\",\"name\":\"export.json\",\"mimeType\":\"application/json\"}",
        )
        .unwrap();
        assert_eq!(created.kind, FILE_KIND);
        assert_eq!(created.parents, None);
    }

    #[test]
    fn test_list_response_wire_names() {
        let listing = AppFolderListResponse {
            kind: FILE_LIST_KIND.to_string(),
            incomplete_search: true,
            files: vec![FolderListItem {
                kind: FILE_KIND.to_string(),
                id: "f1".to_string(),
                name: "backups".to_string(),
                mime_type: "application/vnd.google-apps.folder".to_string(),
            }],
        };

        let json = serde_json::to_string(&listing).unwrap();
        assert!(json.contains("\"kind\":\"drive#fileList\""));
        assert!(json.contains("\"incompleteSearch\":true"));
        assert!(json.contains("\"kind\":\"drive#file\""));
        assert!(json.contains("\"mimeType\":\"application/vnd.google-apps.folder\""));
    }

    #[test]
    fn test_file_media_wire_names() {
        let media =
            FileMedia { mime_type: "application/json".to_string(), body: "{}".to_string() };
        assert_eq!(
            serde_json::to_string(&media).unwrap(),
            "{\"mimeType\":\"application/json\",\"body\":\"{}\"}"
        );
    }
}
