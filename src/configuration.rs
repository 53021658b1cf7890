use crate::error::{LibraryError, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{env, fs};

/// Environment variable that relocates the whole application folder.
pub const HOME_ENV: &str = "MUSICAT_HOME";

const APP_DIR_NAME: &str = "musicat";
const CONFIG_FILE: &str = "config.yaml";
const LIBRARY_PATHS_FILE: &str = "libraryPaths.json";
const CATALOG_FILE: &str = "library.json";

/// Runtime settings.
///
/// Precedence (highest wins): `MUSICAT__` environment variables, the
/// optional `config.yaml` in the app folder, struct defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Only hand entries with one of `audio_extensions` to the tag parser.
    /// `false` passes every directory entry through.
    pub filter_audio_extensions: bool,
    /// Extensions (with leading dot, case-sensitive) treated as tracks.
    pub audio_extensions: Vec<String>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            filter_audio_extensions: true,
            audio_extensions: vec![".mp3".into(), ".wav".into(), ".flac".into()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Load settings for the given app folder.
pub fn get_configuration(folder: &AppFolder) -> Result<Settings> {
    load_settings(folder, environment())
}

/// `MUSICAT__SECTION__KEY` variables. List settings take comma-separated
/// values, e.g. `MUSICAT__LIBRARY__AUDIO_EXTENSIONS=.mp3,.ogg`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("MUSICAT")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("library.audio_extensions")
}

fn load_settings(folder: &AppFolder, environment: config::Environment) -> Result<Settings> {
    let settings = config::Config::builder()
        .add_source(
            config::File::from(folder.config_file.as_path())
                .format(config::FileFormat::Yaml)
                .required(false),
        )
        .add_source(environment)
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}

/// Locations of every file the application persists.
#[derive(Debug, Clone)]
pub struct AppFolder {
    pub data_dir: PathBuf,
    pub config_file: PathBuf,
    pub library_paths_file: PathBuf,
    pub catalog_file: PathBuf,
}

impl AppFolder {
    /// Resolve from `$MUSICAT_HOME`, else the OS data directory.
    pub fn new() -> Result<Self> {
        if let Some(home) = env::var_os(HOME_ENV) {
            return Ok(Self::at(home));
        }

        let base = BaseDirs::new().ok_or(LibraryError::NoAppDirectory)?;
        Ok(Self::at(base.data_dir().join(APP_DIR_NAME)))
    }

    pub fn at(dir: impl AsRef<Path>) -> Self {
        let data_dir = dir.as_ref().to_path_buf();

        Self {
            config_file: data_dir.join(CONFIG_FILE),
            library_paths_file: data_dir.join(LIBRARY_PATHS_FILE),
            catalog_file: data_dir.join(CATALOG_FILE),
            data_dir,
        }
    }
}

/// Write the template `config.yaml`. Returns `false` when a config file
/// already exists and `overwrite` is not set.
pub fn create_config(folder: &AppFolder, overwrite: bool) -> Result<bool> {
    if folder.config_file.exists() && !overwrite {
        return Ok(false);
    }

    fs::create_dir_all(&folder.data_dir).map_err(|e| LibraryError::io(&folder.data_dir, e))?;

    let config_content = include_str!("config_template.yaml");
    fs::write(&folder.config_file, config_content)
        .map_err(|e| LibraryError::io(&folder.config_file, e))?;

    Ok(true)
}
