//! Lingo configuration file handling

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "lingo.toml";

/// Top-level Lingo configuration (lingo.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LingoConfig {
    #[serde(default)]
    pub translations: TranslationsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the translation table comes from
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TranslationsConfig {
    /// Explicit translation file
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Data folder holding `language/i18n.yml` or `language/i18n-default.yml`
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl TranslationsConfig {
    /// Resolve relative paths against `base`, the folder holding the config file.
    fn anchor(&mut self, base: &Path) {
        for path in [&mut self.file, &mut self.data_dir].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How resolved messages are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tags rendered as terminal colors
    #[default]
    Ansi,
    /// Tags stripped
    Plain,
    /// Tags left in place
    Markup,
}

impl LingoConfig {
    /// Load `explicit`, or `lingo.toml` from `dir` if it exists, or defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("Config file {} does not exist", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let candidate = dir.join(CONFIG_FILE);
                if !candidate.is_file() {
                    tracing::debug!(dir = %dir.display(), "no {CONFIG_FILE}; using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut config: LingoConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        if let Some(base) = path.parent() {
            config.translations.anchor(base);
        }

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Pick the translation file: command line first, then this config.
    ///
    /// An explicit file beats a data folder at each level.
    pub fn translation_file(
        &self,
        cli_file: Option<&Path>,
        cli_data_dir: Option<&Path>,
    ) -> Result<PathBuf> {
        if let Some(file) = cli_file {
            return Ok(file.to_path_buf());
        }
        if let Some(dir) = cli_data_dir {
            return Ok(lingo_i18n::source::locate(dir)?);
        }
        if let Some(file) = &self.translations.file {
            return Ok(file.clone());
        }
        if let Some(dir) = &self.translations.data_dir {
            return Ok(lingo_i18n::source::locate(dir)?);
        }
        anyhow::bail!(
            "No translation file configured. Pass --file or --data-dir, or set [translations] in {CONFIG_FILE}."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_full_config() {
        let config: LingoConfig = toml::from_str(
            r#"
[translations]
file = "lang/messages.yml"

[output]
format = "plain"
"#,
        )
        .unwrap();
        assert_eq!(
            config.translations.file,
            Some(PathBuf::from("lang/messages.yml"))
        );
        assert_eq!(config.output.format, OutputFormat::Plain);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: LingoConfig = toml::from_str("").unwrap();
        assert!(config.translations.file.is_none());
        assert_eq!(config.output.format, OutputFormat::Ansi);
    }

    #[test]
    fn missing_default_config_is_fine() {
        let tmp = tempfile::tempdir().unwrap();
        let config = LingoConfig::load(None, tmp.path()).unwrap();
        assert!(config.translations.data_dir.is_none());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = LingoConfig::load(Some(&tmp.path().join("nope.toml")), tmp.path()).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn config_in_dir_is_picked_up() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "[output]\nformat = \"markup\"\n",
        )
        .unwrap();
        let config = LingoConfig::load(None, tmp.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Markup);
    }

    #[test]
    fn relative_paths_follow_the_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let conf_dir = tmp.path().join("conf");
        fs::create_dir_all(&conf_dir).unwrap();
        let conf = conf_dir.join("custom.toml");
        fs::write(
            &conf,
            "[translations]\nfile = \"lang/messages.yml\"\ndata_dir = \"/srv/plugin\"\n",
        )
        .unwrap();

        let config = LingoConfig::load(Some(&conf), tmp.path()).unwrap();
        assert_eq!(
            config.translations.file,
            Some(conf_dir.join("lang/messages.yml"))
        );
        assert_eq!(config.translations.data_dir, Some(PathBuf::from("/srv/plugin")));
    }

    #[test]
    fn command_line_beats_config() {
        let config = LingoConfig {
            translations: TranslationsConfig {
                file: Some(PathBuf::from("from-config.yml")),
                data_dir: None,
            },
            output: OutputConfig::default(),
        };
        assert_eq!(
            config
                .translation_file(Some(Path::new("cli.yml")), None)
                .unwrap(),
            PathBuf::from("cli.yml")
        );
        assert_eq!(
            config.translation_file(None, None).unwrap(),
            PathBuf::from("from-config.yml")
        );
    }

    #[test]
    fn data_dir_is_located() {
        let tmp = tempfile::tempdir().unwrap();
        let lang = tmp.path().join(lingo_i18n::source::LANGUAGE_DIR);
        fs::create_dir_all(&lang).unwrap();
        fs::write(lang.join(lingo_i18n::source::DEFAULT_FILE), "").unwrap();

        let config = LingoConfig::default();
        assert_eq!(
            config.translation_file(None, Some(tmp.path())).unwrap(),
            lang.join(lingo_i18n::source::DEFAULT_FILE)
        );
    }

    #[test]
    fn nothing_configured_is_an_error() {
        let err = LingoConfig::default()
            .translation_file(None, None)
            .unwrap_err();
        assert!(err.to_string().contains("No translation file configured"));
    }
}
