use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};

/// Configuration for a clinic root directory.
///
/// Loaded from `clinic.toml` in the root. A missing or unreadable file falls
/// back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Name of the donor data file, relative to the clinic root.
    data_file: String,

    /// Blood-bag stock the inventory ledger is seeded with at startup.
    ///
    /// The ledger itself is in-memory only, so this is the only way stock
    /// survives a restart. Keys are blood-type strings and are not validated
    /// here.
    initial_stock: BTreeMap<String, u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            initial_stock: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or
    /// if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The donor data file name, relative to the clinic root.
    #[must_use]
    pub fn data_file(&self) -> &str {
        &self.data_file
    }

    /// The configured startup stock levels.
    #[must_use]
    pub const fn initial_stock(&self) -> &BTreeMap<String, u32> {
        &self.initial_stock
    }
}

fn default_data_file() -> String {
    "donors.json".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the
/// domain type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_data_file")]
        data_file: String,

        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        initial_stock: BTreeMap<String, u32>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                data_file,
                initial_stock,
            } => Self {
                data_file,
                initial_stock,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            data_file: config.data_file,
            initial_stock: config.initial_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\ndata_file = \"records.json\"\n\n[initial_stock]\n\"O+\" = 5\n\"AB-\" = 2\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.data_file(), "records.json");
        assert_eq!(config.initial_stock().get("O+"), Some(&5));
        assert_eq!(config.initial_stock().get("AB-"), Some(&2));
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ndata_file = 3\n").unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        // Tests that deserialising a version-only file returns the defaults.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn round_trips_through_save_and_load() {
        let mut config = Config::default();
        config.initial_stock.insert("O+".to_string(), 10);

        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("clinic.toml");
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
