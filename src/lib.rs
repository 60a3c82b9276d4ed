//! EGL types, constants and an extension wrangler.
//!
//! Load the system EGL library with [`Library`], obtain a display and call [`Eglew::init`] to
//! find out which core versions and extensions it supports:
//!
//! ```no_run
//! use eglew::{Config, Eglew, Extension, Library, NativeDisplay};
//!
//! let config = Config::from_env();
//! let library = Library::open(&config)?;
//! let display = library.get_display(NativeDisplay::Other(None))?;
//! let eglew = Eglew::init(&library, display, &config)?;
//!
//! if eglew.has(Extension::KhrFenceSync) && eglew.is_supported("EGL_VERSION_1_4") {
//!     let create_sync = eglew.proc_address("eglCreateSyncKHR");
//!     assert!(create_sync.is_some());
//! }
//! # Ok::<(), eglew::Error>(())
//! ```

#![warn(rust_2018_idioms, future_incompatible)]
#![deny(clippy::all, clippy::if_not_else, clippy::enum_glob_use)]

pub mod config;
pub mod display;
pub mod error;
pub mod extensions;
pub mod ffi;
pub mod library;
pub mod support;
pub mod wrangler;

pub use crate::config::Config;
pub use crate::display::NativeDisplay;
pub use crate::error::{EglError, Error, Result};
pub use crate::extensions::{search_extension, Extension};
pub use crate::library::Library;
pub use crate::support::Support;
pub use crate::wrangler::Eglew;
