use std::path::PathBuf;

use crate::vault::mirror::default_mirror_path;

pub struct AppConfig {
    pub cache_path: PathBuf,
    pub log_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let cache_path = default_mirror_path();
        let log_path = cache_path.with_file_name("keyvault.log");

        Self { cache_path, log_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_share_directory() {
        let config = AppConfig::default();
        assert_eq!(config.cache_path.file_name().unwrap(), "keyvault.json");
        assert_eq!(config.log_path.file_name().unwrap(), "keyvault.log");
        assert_eq!(config.cache_path.parent(), config.log_path.parent());
        assert!(config.cache_path.parent().unwrap().ends_with(".keyvault"));
    }
}
