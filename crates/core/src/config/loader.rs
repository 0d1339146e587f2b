//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, ErrorCode, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents (defaults when no file was found)
    pub schema: ConfigSchema,
    /// File the schema was read from
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or the standard locations
    ///
    /// An explicit path must exist; the standard locations are optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = match config_path {
            Some(ref p) => load_config_file(p).context(format!("In config file {}", p.display()))?,
            None => ConfigSchema::default(),
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from(".mealdb.toml"), PathBuf::from("mealdb.toml")];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("mealdb").join("config.toml"));
    }

    candidates.into_iter().find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::new(ErrorCode::IoError, format!("Failed to read config file {}", path.display()))
            .with_source(e)
    })?;

    let schema: ConfigSchema = toml::from_str(&content)?;
    schema.validate()?;
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.search.per_call_timeout_secs, 15);
    }

    #[test]
    fn test_config_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"http://localhost:9000/api/json/v1\"\ntimeout_secs = 5\n\n[search]\nconcurrent = true"
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.path.as_deref(), Some(file.path()));
        assert_eq!(
            config.schema.api.base_url.as_deref(),
            Some("http://localhost:9000/api/json/v1")
        );
        assert_eq!(config.schema.api.timeout_secs, Some(5));
        assert!(config.schema.search.concurrent);
    }

    #[test]
    fn test_config_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/mealdb.toml"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = ").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
        assert!(err.context.is_some());
    }

    #[test]
    fn test_config_load_rejects_zero_search_timeout() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]\nper_call_timeout_secs = 0").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
        assert_eq!(err.exit_code(), crate::error::exit_codes::CONFIG_ERROR);
        assert!(err.context.as_deref().is_some_and(|c| c.contains("In config file")));
    }
}
