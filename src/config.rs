use std::env;
use std::path::PathBuf;

use log::warn;
use serde::Deserialize;

/// Environment variable enabling experimental entry point resolution.
pub const EXPERIMENTAL_ENV: &str = "EGLEW_EXPERIMENTAL";
/// Environment variable overriding the EGL library search list.
pub const LIBRARY_ENV: &str = "EGLEW_LIBRARY";

#[cfg(not(windows))]
const DEFAULT_LIBRARIES: [&str; 2] = ["libEGL.so.1", "libEGL.so"];
#[cfg(all(windows, target_pointer_width = "64"))]
const DEFAULT_LIBRARIES: [&str; 2] = ["libEGL.dll", "atio6axx.dll"];
#[cfg(all(windows, not(target_pointer_width = "64")))]
const DEFAULT_LIBRARIES: [&str; 2] = ["libEGL.dll", "atioglxx.dll"];

/// Wrangler configuration.
///
/// Can be embedded in a host application's configuration file, all fields are optional.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Check the entry points of every known extension, even when the driver does not
    /// advertise it.
    pub experimental: bool,

    /// Libraries tried in order when loading EGL.
    pub library_paths: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            experimental: false,
            library_paths: DEFAULT_LIBRARIES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl Config {
    /// Default configuration with overrides from the environment applied.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env(env::var(EXPERIMENTAL_ENV).ok(), env::var_os(LIBRARY_ENV));
        config
    }

    fn apply_env(&mut self, experimental: Option<String>, library: Option<std::ffi::OsString>) {
        if let Some(value) = experimental {
            match parse_flag(&value) {
                Some(flag) => self.experimental = flag,
                None => warn!("Ignoring invalid {} value {:?}", EXPERIMENTAL_ENV, value),
            }
        }

        if let Some(paths) = library {
            let paths: Vec<PathBuf> =
                env::split_paths(&paths).filter(|path| !path.as_os_str().is_empty()).collect();
            if paths.is_empty() {
                warn!("Ignoring empty {}", LIBRARY_ENV);
            } else {
                self.library_paths = paths;
            }
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.experimental);
        assert!(!config.library_paths.is_empty());
    }

    #[test]
    fn yaml_overrides() {
        let config: Config = serde_yaml::from_str(
            "experimental: true\nlibrary_paths:\n  - /opt/mesa/lib/libEGL.so.1\n",
        )
        .unwrap();

        assert!(config.experimental);
        assert_eq!(config.library_paths, vec![PathBuf::from("/opt/mesa/lib/libEGL.so.1")]);
    }

    #[test]
    fn yaml_rejects_unknown_fields() {
        assert!(serde_yaml::from_str::<Config>("experimantal: true").is_err());
    }

    #[test]
    fn env_flag_parsing() {
        let mut config = Config::default();
        config.apply_env(Some("yes".into()), None);
        assert!(config.experimental);

        config.apply_env(Some("0".into()), None);
        assert!(!config.experimental);

        config.apply_env(Some("maybe".into()), None);
        assert!(!config.experimental);
    }

    #[test]
    fn env_library_override() {
        let mut config = Config::default();
        let joined = env::join_paths(["/a/libEGL.so", "/b/libEGL.so"]).unwrap();
        config.apply_env(None, Some(joined));

        assert_eq!(config.library_paths, vec![
            PathBuf::from("/a/libEGL.so"),
            PathBuf::from("/b/libEGL.so")
        ]);
    }

    #[test]
    fn empty_env_library_keeps_defaults() {
        let mut config = Config::default();
        config.apply_env(None, Some("".into()));
        assert_eq!(config, Config::default());
    }
}
