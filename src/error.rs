use std::fmt::{self, Display, Formatter};

use crate::ffi::EGLint;

/// Result from wrangler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors occurring while loading EGL or initializing a display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// None of the configured library paths could be opened.
    LibraryNotFound(Vec<String>),

    /// A required entry point could not be resolved.
    MissingEntryPoint(&'static str),

    /// `eglInitialize` rejected the display.
    InitializeFailed(EglError),

    /// The driver returned `EGL_NO_DISPLAY`.
    NoDisplay,
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::LibraryNotFound(paths) => {
                write!(f, "Unable to load EGL library, tried: {}", paths.join(", "))
            },
            Error::MissingEntryPoint(name) => write!(f, "Missing EGL entry point {}", name),
            Error::InitializeFailed(err) => write!(f, "eglInitialize failed: {}", err),
            Error::NoDisplay => write!(f, "Could not create EGL display object"),
        }
    }
}

/// Error code reported by `eglGetError`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EglError(pub EGLint);

impl EglError {
    /// Registry name of the error code, if it is one of the core EGL errors.
    pub fn name(self) -> Option<&'static str> {
        let name = match self.0 {
            0x3000 => "EGL_SUCCESS",
            0x3001 => "EGL_NOT_INITIALIZED",
            0x3002 => "EGL_BAD_ACCESS",
            0x3003 => "EGL_BAD_ALLOC",
            0x3004 => "EGL_BAD_ATTRIBUTE",
            0x3005 => "EGL_BAD_CONFIG",
            0x3006 => "EGL_BAD_CONTEXT",
            0x3007 => "EGL_BAD_CURRENT_SURFACE",
            0x3008 => "EGL_BAD_DISPLAY",
            0x3009 => "EGL_BAD_MATCH",
            0x300A => "EGL_BAD_NATIVE_PIXMAP",
            0x300B => "EGL_BAD_NATIVE_WINDOW",
            0x300C => "EGL_BAD_PARAMETER",
            0x300D => "EGL_BAD_SURFACE",
            0x300E => "EGL_CONTEXT_LOST",
            0x322B => "EGL_BAD_DEVICE_EXT",
            0x321B => "EGL_BAD_STREAM_KHR",
            0x321C => "EGL_BAD_STATE_KHR",
            0x322D => "EGL_BAD_OUTPUT_LAYER_EXT",
            0x322E => "EGL_BAD_OUTPUT_PORT_EXT",
            _ => return None,
        };

        Some(name)
    }
}

impl Display for EglError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} (0x{:04X})", name, self.0),
            None => write!(f, "unknown error 0x{:04X}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_error_names() {
        assert_eq!(EglError(0x3000).name(), Some("EGL_SUCCESS"));
        assert_eq!(EglError(0x3008).name(), Some("EGL_BAD_DISPLAY"));
        assert_eq!(EglError(0x300E).name(), Some("EGL_CONTEXT_LOST"));
        assert_eq!(EglError(0x1234).name(), None);
    }

    #[test]
    fn display_includes_code() {
        let err = Error::InitializeFailed(EglError(0x3001));
        assert_eq!(err.to_string(), "eglInitialize failed: EGL_NOT_INITIALIZED (0x3001)");

        assert_eq!(EglError(0x42).to_string(), "unknown error 0x0042");
    }

    #[test]
    fn library_not_found_lists_paths() {
        let err = Error::LibraryNotFound(vec!["libEGL.so.1".into(), "libEGL.so".into()]);
        assert_eq!(err.to_string(), "Unable to load EGL library, tried: libEGL.so.1, libEGL.so");
    }
}
