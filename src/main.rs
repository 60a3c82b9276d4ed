//! eglewinfo: report the EGL versions and extensions of the default display.

#![warn(rust_2018_idioms, future_incompatible)]
#![deny(clippy::all, clippy::if_not_else, clippy::enum_glob_use)]

use std::error::Error;
use std::io;
use std::process;

use log::error;

use eglew::{Config, Eglew, Library, NativeDisplay};

mod cli;
mod logging;
mod report;

use crate::cli::Options;

fn main() {
    let options = Options::new();

    // Logging is best effort, the report still goes to stdout.
    let _ = logging::initialize(options.log_level());

    if let Err(err) = run(&options) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), Box<dyn Error>> {
    let mut config = Config::from_env();
    options.override_config(&mut config);

    let library = Library::open(&config)?;
    let display = library.get_display(NativeDisplay::Other(None))?;
    let eglew = Eglew::init(&library, display, &config)?;

    let header = report::Header {
        library: library.path().display().to_string(),
        vendor: eglew.vendor(),
        version: eglew.version_string(),
        client_apis: eglew.client_apis(),
        client_extensions: library.client_extensions(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write(
        &mut out,
        &header,
        &eglew,
        &options.extensions,
        options.print_extensions,
        |name| eglew.proc_address(name).is_some(),
    )?;

    eglew.terminate()?;

    Ok(())
}
