//! Playback settings from a config file and command-line flags.

use clap::Args;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use sortscope_core::{Algorithm, PlaybackConfig};
use std::fs;
use std::path::PathBuf;

/// Flags shared by commands that build a trace
#[derive(Debug, Clone, Default, Args)]
pub struct PlaybackArgs {
    /// Sorting algorithm
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,
    /// Problem size
    #[arg(short, long)]
    pub size: Option<usize>,
    /// Speed, 1 (slowest) to 1000 (fastest)
    #[arg(long)]
    pub speed: Option<u32>,
    /// Seed for reproducible inputs
    #[arg(long)]
    pub seed: Option<u64>,
    /// JSON config file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl PlaybackArgs {
    /// Merge the config file (if any) with flags and validate the result
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the final
    /// size is out of bounds
    pub fn resolve(&self) -> Result<PlaybackConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .wrap_err_with(|| format!("reading config {}", path.display()))?;
                PlaybackConfig::from_json(&json)
                    .wrap_err_with(|| format!("parsing config {}", path.display()))?
            }
            None => PlaybackConfig::new(self.algorithm.unwrap_or(Algorithm::Bubble)),
        };

        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(speed) = self.speed {
            config = config.with_speed(speed);
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let args = PlaybackArgs {
            algorithm: Some(Algorithm::Merge),
            ..PlaybackArgs::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config, PlaybackConfig::new(Algorithm::Merge));
    }

    #[test]
    fn test_flags_override_file() {
        let file = config_file(r#"{"algorithm":"quick","size":40,"speed":300,"seed":5}"#);
        let args = PlaybackArgs {
            speed: Some(2000),
            config: Some(file.path().to_path_buf()),
            ..PlaybackArgs::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.algorithm, Algorithm::Quick);
        assert_eq!(config.size, 40);
        assert_eq!(config.speed, 1000);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let args = PlaybackArgs {
            algorithm: Some(Algorithm::Insertion),
            size: Some(31),
            ..PlaybackArgs::default()
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let args = PlaybackArgs {
            config: Some(PathBuf::from("/nonexistent/sortscope.json")),
            ..PlaybackArgs::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(format!("{err}").contains("/nonexistent/sortscope.json"));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let file = config_file(r#"{"algorithm":"bogo"}"#);
        let args = PlaybackArgs {
            config: Some(file.path().to_path_buf()),
            ..PlaybackArgs::default()
        };
        assert!(args.resolve().is_err());
    }
}
