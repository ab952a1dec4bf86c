//! Photo file-naming rules.
//!
//! Uploaded photos keep their original name in the database, but the
//! bytes are stored on disk under the server-assigned id plus the
//! original extension. Only a small set of image extensions is accepted,
//! checked here before any side effect happens.

use crate::types::DbId;

/// File extensions accepted for photo uploads, lowercase.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Extract the extension from an uploaded file name, if it has one.
///
/// A trailing dot ("photo.") counts as no extension.
pub fn file_extension(file_name: &str) -> Option<&str> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

/// Validate an uploaded file name against [`ALLOWED_EXTENSIONS`].
///
/// Returns the lowercased extension on success, or a human-readable
/// rejection message. The comparison is case-insensitive ("IMG.PNG" is
/// accepted) but the stored extension is always lowercase.
pub fn validate_extension(file_name: &str) -> Result<String, String> {
    let extension = file_extension(file_name)
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| format!("File \"{file_name}\" has no extension"))?;

    if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(format!(
            "Invalid file extension \"{extension}\". Must be one of: {}",
            ALLOWED_EXTENSIONS.join(", ")
        ))
    }
}

/// The on-disk name for a stored photo: the generated id plus the
/// original (lowercased) extension.
pub fn stored_file_name(id: DbId, extension: &str) -> String {
    format!("{id}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_allowed_extensions_accepted() {
        assert_eq!(validate_extension("cat.png").unwrap(), "png");
        assert_eq!(validate_extension("cat.jpg").unwrap(), "jpg");
        assert_eq!(validate_extension("cat.jpeg").unwrap(), "jpeg");
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert_eq!(validate_extension("SHOUTING.PNG").unwrap(), "png");
    }

    #[test]
    fn test_disallowed_extension_rejected() {
        let err = validate_extension("script.svg").unwrap_err();
        assert!(err.contains("svg"));
        assert!(err.contains("png, jpg, jpeg"));
    }

    #[test]
    fn test_missing_extension_rejected() {
        assert!(validate_extension("noext").is_err());
        assert!(validate_extension("trailing.").is_err());
    }

    #[test]
    fn test_last_dot_wins_for_extension() {
        assert_eq!(file_extension("archive.tar.png"), Some("png"));
    }

    #[test]
    fn test_stored_file_name_is_id_plus_extension() {
        let id = Uuid::nil();
        assert_eq!(
            stored_file_name(id, "png"),
            "00000000-0000-0000-0000-000000000000.png"
        );
    }
}
