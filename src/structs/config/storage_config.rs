use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default = "ConfigHelper::default_uploads_dir")]
    pub uploads_dir: String,

    #[serde(default = "ConfigHelper::default_reports_dir")]
    pub reports_dir: String,

    #[serde(default = "ConfigHelper::default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            uploads_dir: ConfigHelper::default_uploads_dir(),
            reports_dir: ConfigHelper::default_reports_dir(),
            max_upload_bytes: ConfigHelper::default_max_upload_bytes(),
        }
    }
}
