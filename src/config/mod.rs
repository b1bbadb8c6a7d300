use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Daily macro targets compared against the tracked totals by `totals`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroTargets {
    #[serde(default = "default_calories_target")]
    pub calories: f64,
    #[serde(default = "default_protein_target")]
    pub protein: f64,
    #[serde(default = "default_carbs_target")]
    pub carbs: f64,
    #[serde(default = "default_fat_target")]
    pub fat: f64,
}

fn default_calories_target() -> f64 {
    2000.0
}
fn default_protein_target() -> f64 {
    120.0
}
fn default_carbs_target() -> f64 {
    250.0
}
fn default_fat_target() -> f64 {
    70.0
}

impl Default for MacroTargets {
    fn default() -> Self {
        Self {
            calories: default_calories_target(),
            protein: default_protein_target(),
            carbs: default_carbs_target(),
            fat: default_fat_target(),
        }
    }
}

fn default_user() -> String {
    "default".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Active profile: meals are logged against this user id unless the
    /// command line overrides it with --user.
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default)]
    pub targets: MacroTargets,
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            user: default_user(),
            targets: MacroTargets::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("nutrilog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".nutrilog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("nutrilog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("nutrilog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Self::default()
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("Config serialization error: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
