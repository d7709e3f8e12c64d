use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Plain,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputFormat,
    /// Trim and uppercase codes typed on the command line before lookup.
    #[serde(default)]
    pub ignore_case: bool,
}

/// Command-line flags that take precedence over the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    pub output: Option<OutputFormat>,
    pub ignore_case: Option<bool>,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no file has been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "iso4217", "currencies")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(ignore_case) = overrides.ignore_case {
            self.ignore_case = ignore_case;
        }
        self
    }

    /// Applies the `ignore_case` policy to a code typed by the user.
    pub fn normalize_code(&self, code: &str) -> String {
        if self.ignore_case {
            code.trim().to_ascii_uppercase()
        } else {
            code.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
output: json
ignore_case: true
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.ignore_case);

        let config: AppConfig = serde_yaml::from_str("output: plain").unwrap();
        assert_eq!(config.output, OutputFormat::Plain);
        assert!(!config.ignore_case);

        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.output, OutputFormat::Table);
    }

    #[test]
    fn test_config_rejects_unknown_output() {
        let result: Result<AppConfig, _> = serde_yaml::from_str("output: xml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_path() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "output: json")?;

        let config = AppConfig::load_from_path(file.path())?;
        assert_eq!(config.output, OutputFormat::Json);
        Ok(())
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = AppConfig::load_from_path(dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default().with_overrides(ConfigOverrides {
            output: Some(OutputFormat::Json),
            ignore_case: Some(true),
        });
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.ignore_case);

        let config = AppConfig {
            output: OutputFormat::Plain,
            ignore_case: true,
        }
        .with_overrides(ConfigOverrides::default());
        assert_eq!(config.output, OutputFormat::Plain);
        assert!(config.ignore_case);
    }

    #[test]
    fn test_override_disables_ignore_case_from_file() {
        let config: AppConfig = serde_yaml::from_str("ignore_case: true").unwrap();
        let config = config.with_overrides(ConfigOverrides {
            output: None,
            ignore_case: Some(false),
        });
        assert!(!config.ignore_case);
        assert_eq!(config.normalize_code("usd"), "usd");
    }

    #[test]
    fn test_normalize_code() {
        let strict = AppConfig::default();
        assert_eq!(strict.normalize_code(" usd "), " usd ");

        let relaxed = AppConfig {
            ignore_case: true,
            ..AppConfig::default()
        };
        assert_eq!(relaxed.normalize_code(" usd "), "USD");
        assert_eq!(relaxed.normalize_code("Eur"), "EUR");
    }
}
