use crate::error::{CliError, Result};
use directories::ProjectDirs;
use isofinder::core::io::reference;
use isofinder::core::models::reference::ReferenceDataset;
use std::fs::{self};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const REFERENCE_FILE_NAME: &str = "reference.csv";
const BUNDLED_REFERENCE: &str = include_str!("../data/reference.csv");

/// Where a loaded reference dataset came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSource {
    Bundled,
    DataDirectory(PathBuf),
    Explicit(PathBuf),
}

#[derive(Debug)]
pub struct DataManager {
    base_path: PathBuf,
}

impl DataManager {
    pub fn new() -> Result<Self> {
        let path = Self::determine_data_path()?;
        debug!("DataManager initialized with path: {:?}", &path);
        Ok(Self { base_path: path })
    }

    pub fn with_base_path(path: PathBuf) -> Self {
        Self { base_path: path }
    }

    pub fn get_data_path(&self) -> &Path {
        &self.base_path
    }

    pub fn reference_path(&self) -> PathBuf {
        self.base_path.join(REFERENCE_FILE_NAME)
    }

    /// Writes the bundled reference dataset into the data directory.
    pub fn init_data(&self, force: bool) -> Result<PathBuf> {
        let target = self.reference_path();
        if target.exists() && !force {
            return Err(CliError::Data(format!(
                "Reference dataset already exists at {:?}. Use --force to overwrite.",
                target
            )));
        }
        fs::create_dir_all(&self.base_path)?;
        fs::write(&target, BUNDLED_REFERENCE)?;
        info!("Bundled reference dataset written to {:?}", &target);
        Ok(target)
    }

    /// Loads `explicit` if given, else the user copy in the data directory, else the
    /// bundled dataset.
    pub fn load_reference(&self, explicit: Option<&Path>) -> Result<(ReferenceDataset, ReferenceSource)> {
        if let Some(path) = explicit {
            let dataset = reference::load(path)?;
            return Ok((dataset, ReferenceSource::Explicit(path.to_path_buf())));
        }

        let user_copy = self.reference_path();
        if user_copy.exists() {
            let dataset = reference::load(&user_copy)?;
            return Ok((dataset, ReferenceSource::DataDirectory(user_copy)));
        }

        debug!("No reference dataset in {:?}; using the bundled copy.", &self.base_path);
        Ok((Self::bundled_reference()?, ReferenceSource::Bundled))
    }

    pub fn bundled_reference() -> Result<ReferenceDataset> {
        Ok(reference::from_csv_reader(BUNDLED_REFERENCE.as_bytes())?)
    }

    pub fn set_custom_path(path: &Path) -> Result<()> {
        let config_path = Self::get_path_config_file()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(config_path, path.to_string_lossy().as_bytes()).map_err(CliError::from)
    }

    pub fn reset_path() -> Result<()> {
        if let Ok(config_path) = Self::get_path_config_file() {
            if config_path.exists() {
                fs::remove_file(config_path)?;
            }
        }
        Ok(())
    }

    fn determine_data_path() -> Result<PathBuf> {
        match Self::get_path_config_file() {
            Ok(config_path) if config_path.exists() => {
                let custom_path_str = fs::read_to_string(&config_path)?.trim().to_string();
                if custom_path_str.is_empty() {
                    warn!("Custom path config file is empty, falling back to default path.");
                    Self::get_default_data_path()
                } else {
                    Ok(PathBuf::from(custom_path_str))
                }
            }
            _ => Self::get_default_data_path(),
        }
    }

    fn get_path_config_file() -> Result<PathBuf> {
        ProjectDirs::from("org", "caltechmsc", "isofinder")
            .map(|dirs| dirs.config_dir().join("path.conf"))
            .ok_or_else(|| CliError::Data("Could not determine config directory path.".to_string()))
    }

    fn get_default_data_path() -> Result<PathBuf> {
        ProjectDirs::from("org", "caltechmsc", "isofinder")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                CliError::Data("Could not determine default data directory path.".to_string())
            })
    }
}
