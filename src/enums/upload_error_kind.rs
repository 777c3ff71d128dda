use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::enums::ui_language::UiLanguage;
use crate::helpers::file_helper::format_size;

/// Everything that can go wrong with an uploaded file before it reaches the
/// analyzer. Each kind carries its own Dutch and English user message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadErrorKind {
    #[error("no file uploaded")]
    NoFile,

    #[error("uploaded file is empty")]
    FileEmpty,

    #[error("uploaded file exceeds the size limit of {max_bytes} bytes")]
    FileTooLarge { max_bytes: u64 },

    #[error("file type {0} is not allowed")]
    UnsupportedExtension(String),

    #[error("unexpected upload failure")]
    Unexpected,
}

impl UploadErrorKind {
    pub fn user_message(&self, language: UiLanguage) -> String {
        let english = language.is_english();
        match self {
            UploadErrorKind::NoFile => {
                if english { "No file uploaded" } else { "Geen bestand geüpload" }.to_string()
            }
            UploadErrorKind::FileEmpty => {
                if english { "The file is empty" } else { "Het bestand is leeg" }.to_string()
            }
            UploadErrorKind::FileTooLarge { max_bytes } => {
                if english {
                    format!("File is too large (max {})", format_size(*max_bytes))
                } else {
                    format!("Bestand is te groot (max {})", format_size(*max_bytes))
                }
            }
            UploadErrorKind::UnsupportedExtension(ext) => {
                if english {
                    format!("File type {} is not allowed", ext)
                } else {
                    format!("Bestandstype {} is niet toegestaan", ext)
                }
            }
            UploadErrorKind::Unexpected => {
                if english {
                    "Something went wrong. Please try again."
                } else {
                    "Er ging iets mis. Probeer het opnieuw."
                }
                .to_string()
            }
        }
    }
}
