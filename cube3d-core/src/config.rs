/// Startup configuration
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable naming an optional TOML config file
pub const CONFIG_ENV_VAR: &str = "CUBE3D_CONFIG";

/// Accepted range for the initial `fov`
pub const FOV_LIMIT: i64 = 100_000;
/// Accepted range for the initial `view_dist`
pub const VIEW_DIST_LIMIT: i64 = 10_000;
/// Accepted range for the initial `speed`
pub const SPEED_LIMIT: i64 = 3_600;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logical surface size in pixels
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    /// Initial view parameters
    pub fov: i64,
    pub view_dist: i64,
    pub speed: i64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            width: 640,
            height: 480,
            target_fps: 50,
            fov: 256,
            view_dist: 4,
            speed: 1,
        }
    }

    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load from the file named by `CUBE3D_CONFIG`, or defaults when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading config from {:?}", path);
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "surface must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be at least 1".into()));
        }
        check_range("fov", self.fov, FOV_LIMIT)?;
        check_range("view_dist", self.view_dist, VIEW_DIST_LIMIT)?;
        check_range("speed", self.speed, SPEED_LIMIT)?;
        Ok(())
    }
}

fn check_range(name: &str, value: i64, limit: i64) -> Result<(), ConfigError> {
    if (-limit..=limit).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be within -{limit}..={limit}, got {value}"
        )))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.target_fps, 50);
        assert_eq!((config.fov, config.view_dist, config.speed), (256, 4, 1));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = Config::from_toml_str("fov = 300\nspeed = 3\n").unwrap();
        assert_eq!(config.fov, 300);
        assert_eq!(config.speed, 3);
        assert_eq!(config.view_dist, 4);
        assert_eq!(config.width, 640);
    }

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(matches!(
            Config::from_toml_str("zoom = 2"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_zero_fps() {
        assert!(matches!(
            Config::from_toml_str("target_fps = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_view_parameters() {
        for input in [
            "speed = 9223372036854775807",
            "speed = -3601",
            "fov = 9223372036854775807",
            "fov = -100001",
            "view_dist = 10001",
            "view_dist = -10001",
        ] {
            assert!(
                matches!(Config::from_toml_str(input), Err(ConfigError::Invalid(_))),
                "{input} was accepted"
            );
        }
    }

    #[test]
    fn test_accepts_range_bounds() {
        let config = Config::from_toml_str("speed = -3600\nfov = 100000\nview_dist = -10000").unwrap();
        assert_eq!((config.speed, config.fov, config.view_dist), (-3600, 100_000, -10_000));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file("/nonexistent/cube3d.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
