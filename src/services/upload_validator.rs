use crate::config::constants::ALLOWED_EXTENSIONS;
use crate::enums::upload_error_kind::UploadErrorKind;
use crate::helpers::file_helper::extension_of;

/// An upload that passed validation, decoded as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUpload {
    pub file_name: String,
    pub code: String,
}

pub struct UploadValidator {
    max_bytes: u64,
}

impl UploadValidator {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    pub fn is_allowed_extension(file_name: &str) -> bool {
        let extension = extension_of(file_name);
        ALLOWED_EXTENSIONS.contains(&extension.as_str())
    }

    /// Checks presence, extension, size and emptiness, in that order.
    pub fn validate(&self, file_name: Option<&str>, contents: Option<&[u8]>) -> Result<ValidatedUpload, UploadErrorKind> {
        let (file_name, contents) = match (file_name, contents) {
            (Some(name), Some(bytes)) if !name.trim().is_empty() => (name, bytes),
            _ => return Err(UploadErrorKind::NoFile),
        };

        if !Self::is_allowed_extension(file_name) {
            return Err(UploadErrorKind::UnsupportedExtension(extension_of(file_name)));
        }

        if contents.len() as u64 > self.max_bytes {
            return Err(UploadErrorKind::FileTooLarge { max_bytes: self.max_bytes });
        }

        if contents.is_empty() {
            return Err(UploadErrorKind::FileEmpty);
        }

        Ok(ValidatedUpload {
            file_name: file_name.to_string(),
            code: String::from_utf8_lossy(contents).into_owned(),
        })
    }
}
