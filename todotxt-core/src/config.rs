use std::{
    env,
    fs::{File, create_dir_all},
    io::Write,
    path::PathBuf,
};

use color_eyre::{Result, eyre::bail};
use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::{debug, info};

use crate::parser::task::token::{KindSet, TokenKind};

const CONFIG: &str = include_str!("../../.config/core.toml");
const CONFIG_FILE_NAME: &str = "core";

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TasksConfig {
    #[serde(default)]
    pub add_creation_date: bool,
    /// Kinds left out of displayed tasks. `None` falls back to the default set,
    /// an empty list shows every token.
    #[serde(default)]
    pub hidden_kinds: Option<Vec<TokenKind>>,
    #[serde(default)]
    pub show_hidden: bool,
    #[serde(default)]
    pub show_future: bool,
}

impl Default for TasksConfig {
    fn default() -> Self {
        toml::from_str(CONFIG).expect("embedded default configuration is valid")
    }
}

pub struct ProtoConfig {
    pub config_path: Option<PathBuf>,
}

impl TasksConfig {
    /// Loads the configuration from `params.config_path`, or from the config directory.
    ///
    /// # Errors
    ///
    /// Fails if a configuration file exists but can't be read or deserialized.
    pub fn new(params: &ProtoConfig) -> Result<Self> {
        let default_config = Self::default();
        let data_dir = get_data_dir();
        let config_path = params.config_path.clone().unwrap_or_else(get_config_dir);
        debug!(
            "Using data directory at {} and config directory at {}",
            data_dir.display(),
            config_path.display()
        );

        let builder = config::Config::builder()
            .set_default("add_creation_date", default_config.add_creation_date)?
            .set_default("show_hidden", default_config.show_hidden)?
            .set_default("show_future", default_config.show_future)?;

        // A config file was provided
        let builder = if config_path.is_file() {
            builder.add_source(config::File::from(config_path))
        } else {
            let config_files = [
                (
                    format!("{CONFIG_FILE_NAME}.json5"),
                    config::FileFormat::Json5,
                ),
                (format!("{CONFIG_FILE_NAME}.json"), config::FileFormat::Json),
                (format!("{CONFIG_FILE_NAME}.yaml"), config::FileFormat::Yaml),
                (format!("{CONFIG_FILE_NAME}.toml"), config::FileFormat::Toml),
                (format!("{CONFIG_FILE_NAME}.ini"), config::FileFormat::Ini),
            ];
            let mut builder = builder;
            let mut found_config = false;
            for (file, format) in &config_files {
                let source = config::File::from(config_path.join(file))
                    .format(*format)
                    .required(false);
                builder = builder.add_source(source);
                if config_path.join(file).exists() {
                    found_config = true;
                }
            }
            if !found_config && !cfg!(test) {
                info!(
                    "No configuration file found.\nCreate one at {config_path:?} or generate one using `todotxt generate-config`"
                );
            }
            builder
        };

        let cfg: Self = builder.build()?.try_deserialize()?;
        Ok(Self::merge_tasks_config(cfg, default_config))
    }

    fn merge_tasks_config(user_config: Self, default_config: Self) -> Self {
        Self {
            hidden_kinds: user_config.hidden_kinds.or(default_config.hidden_kinds),
            ..user_config
        }
    }

    /// Token kinds hidden when tasks are displayed.
    #[must_use]
    pub fn hidden_kind_set(&self) -> KindSet {
        self.hidden_kinds.iter().flatten().copied().collect()
    }

    /// Writes the default configuration file to `path`, or to the config directory.
    ///
    /// # Errors
    ///
    /// Fails if the directory or the file can't be written.
    pub fn generate_config(path: Option<PathBuf>) -> Result<PathBuf> {
        let config_dir = path.unwrap_or_else(get_config_dir);
        let dest = config_dir.join(format!("{CONFIG_FILE_NAME}.toml"));
        if create_dir_all(config_dir).is_err() {
            bail!("Failed to create config directory at {dest:?}");
        }
        if let Ok(mut file) = File::create(dest.clone()) {
            if file.write_all(CONFIG.as_bytes()).is_err() {
                bail!("Failed to write default config at {dest:?}");
            }
        } else {
            bail!("Failed to create default config at {dest:?}");
        }
        info!("Default configuration written to {}", dest.display());
        Ok(dest)
    }
}

pub fn get_data_dir() -> PathBuf {
    DATA_FOLDER.clone().unwrap_or_else(|| {
        project_directory().map_or_else(
            || PathBuf::from(".").join(".data"),
            |proj_dirs| proj_dirs.data_local_dir().to_path_buf(),
        )
    })
}

pub fn get_config_dir() -> PathBuf {
    CONFIG_FOLDER.clone().unwrap_or_else(|| {
        project_directory().map_or_else(
            || PathBuf::from(".").join(".config"),
            |proj_dirs| proj_dirs.config_local_dir().to_path_buf(),
        )
    })
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "todotxt", env!("CARGO_PKG_NAME"))
}
