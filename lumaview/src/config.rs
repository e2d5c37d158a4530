use anyhow::{Context, Result, bail};
use log::debug;
use once_cell::sync::Lazy;
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::Mutex};

const CARGO_TOML: &str = include_str!("../Cargo.toml");
static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(Config::default()));

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Config {
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(skip)]
    pub is_first_run: bool,

    #[serde(skip)]
    pub app_name: String,

    pub preference: Preference,

    #[serde(default)]
    pub viewer: Viewer,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
pub struct Preference {
    #[derivative(Default(value = "1000"))]
    pub win_width: u32,

    #[derivative(Default(value = "800"))]
    pub win_height: u32,

    #[derivative(Default(value = "16"))]
    pub font_size: u32,

    #[derivative(Default(value = "\"DejaVu Sans\".to_string()"))]
    pub font_family: String,

    pub is_dark: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
pub struct Viewer {
    // kernel edge length of the median blur, odd and >= 3
    #[derivative(Default(value = "5"))]
    pub median_aperture: u32,

    #[serde(default)]
    pub last_open_dir: String,

    #[serde(default)]
    pub last_save_dir: String,
}

impl Config {
    /// Initializes the configuration
    ///
    /// Loads package metadata, creates directories, and loads configuration file.
    pub fn init(&mut self) -> Result<()> {
        let metadata = toml::from_str::<toml::Table>(CARGO_TOML).expect("Parse Cargo.toml error");

        self.app_name = metadata
            .get("package")
            .unwrap()
            .get("name")
            .unwrap()
            .to_string()
            .trim_matches('"')
            .to_string();

        let app_dirs = AppDirs::new(Some(&self.app_name), true).unwrap();
        self.create_dirs(&app_dirs)?;
        self.load().with_context(|| "load config file failed")?;
        debug!("{:?}", self);
        Ok(())
    }

    fn create_dirs(&mut self, app_dirs: &AppDirs) -> Result<()> {
        self.config_path = app_dirs.config_dir.join(format!("{}.toml", self.app_name));

        fs::create_dir_all(&app_dirs.config_dir)?;

        Ok(())
    }

    /// Loads configuration from file or creates default if not exists
    fn load(&mut self) -> Result<()> {
        match fs::read_to_string(&self.config_path) {
            Ok(text) => match toml::from_str::<Config>(&text) {
                Ok(mut c) => {
                    c.config_path = self.config_path.clone();
                    c.is_first_run = self.is_first_run;
                    c.app_name = self.app_name.clone();
                    *self = c;

                    Ok(())
                }
                Err(_) => {
                    self.is_first_run = true;

                    if let Some(bak_file) = &self.config_path.as_os_str().to_str() {
                        _ = fs::copy(&self.config_path, format!("{}.bak", bak_file));
                    }

                    match toml::to_string_pretty(self) {
                        Ok(text) => Ok(fs::write(&self.config_path, text)?),
                        Err(e) => Err(e.into()),
                    }
                }
            },
            Err(_) => {
                self.is_first_run = true;

                match toml::to_string_pretty(self) {
                    Ok(text) => Ok(fs::write(&self.config_path, text)?),
                    Err(e) => Err(e.into()),
                }
            }
        }
    }

    /// Saves the current configuration to file
    pub fn save(&self) -> Result<()> {
        match toml::to_string_pretty(self) {
            Ok(text) => Ok(fs::write(&self.config_path, text)
                .with_context(|| "save config failed".to_string())?),
            Err(e) => bail!(format!("convert config from toml format failed. {e:?}")),
        }
    }
}

/// Initializes the global configuration
///
/// This should be called once at application startup.
pub fn init() {
    CONFIG.lock().unwrap().init().unwrap();
}

/// Returns a clone of the current configuration
pub fn all() -> Config {
    CONFIG.lock().unwrap().clone()
}

/// Saves a new configuration and updates the global instance
pub fn save(conf: Config) -> Result<()> {
    let mut config = CONFIG.lock().unwrap();
    *config = conf;
    config.save()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();

        assert_eq!(config.preference.win_width, 1000);
        assert_eq!(config.preference.win_height, 800);
        assert_eq!(config.preference.font_size, 16);
        assert!(!config.preference.is_dark);
        assert_eq!(config.viewer.median_aperture, 5);
        assert!(config.viewer.last_open_dir.is_empty());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let mut config = Config::default();
        config.preference.is_dark = true;
        config.viewer.median_aperture = 7;
        config.viewer.last_open_dir = "/tmp".to_string();

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = toml::from_str::<Config>(&text).unwrap();

        assert!(parsed.preference.is_dark);
        assert_eq!(parsed.viewer.median_aperture, 7);
        assert_eq!(parsed.viewer.last_open_dir, "/tmp");
    }

    #[test]
    fn test_config_load_recovers_from_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("lumaview.toml");
        fs::write(&config_path, "not valid toml [").unwrap();

        let mut config = Config {
            config_path: config_path.clone(),
            ..Config::default()
        };

        config.load().unwrap();

        assert!(config.is_first_run);
        assert!(config_path.with_extension("toml.bak").exists());
        assert!(toml::from_str::<Config>(&fs::read_to_string(&config_path).unwrap()).is_ok());
    }
}
