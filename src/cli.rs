use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use eglew::Config;

/// CLI options for the eglewinfo binary.
#[derive(Parser, Default, Debug)]
#[clap(author, about, version)]
pub struct Options {
    /// Check entry points of extensions the driver does not advertise.
    #[clap(long)]
    pub experimental: bool,

    /// EGL library to load, may be repeated [default: platform search list].
    #[clap(long = "library", value_name = "PATH")]
    pub library_paths: Vec<PathBuf>,

    /// Only report these extensions or core versions.
    #[clap(long = "extension", value_name = "NAME")]
    pub extensions: Vec<String>,

    /// Print the raw extension strings reported by the driver.
    #[clap(long)]
    pub print_extensions: bool,

    /// Reduces the level of verbosity (the min level is -qq).
    #[clap(short, conflicts_with("verbose"), action = ArgAction::Count)]
    quiet: u8,

    /// Increases the level of verbosity (the max level is -vvv).
    #[clap(short, conflicts_with("quiet"), action = ArgAction::Count)]
    verbose: u8,
}

impl Options {
    pub fn new() -> Self {
        Self::parse()
    }

    /// Override configuration with options from the CLI.
    pub fn override_config(&self, config: &mut Config) {
        config.experimental |= self.experimental;

        if !self.library_paths.is_empty() {
            config.library_paths = self.library_paths.clone();
        }
    }

    /// Logging filter level.
    pub fn log_level(&self) -> LevelFilter {
        match (self.quiet, self.verbose) {
            // Default.
            (0, 0) => LevelFilter::Warn,
            // Verbose.
            (_, 1) => LevelFilter::Info,
            (_, 2) => LevelFilter::Debug,
            (0, _) => LevelFilter::Trace,
            // Quiet.
            (1, _) => LevelFilter::Error,
            (..) => LevelFilter::Off,
        }
    }
}
