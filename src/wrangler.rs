use std::ops::Deref;
use std::os::raw::c_void;

use log::{info, warn};

use crate::config::Config;
use crate::error::{EglError, Error, Result};
use crate::ffi::{self, egl, EGLDisplay, EGLint};
use crate::library::Library;
use crate::support::Support;

/// EGL state of one initialized display.
///
/// Dereferences to [`Support`] for availability queries.
pub struct Eglew<'a> {
    library: &'a Library,
    display: EGLDisplay,
    support: Support,
}

// Display handles may be used from any thread.
unsafe impl Send for Eglew<'_> {}
unsafe impl Sync for Eglew<'_> {}

impl<'a> Eglew<'a> {
    /// Initialize `display` and record which versions and extensions it supports.
    pub fn init(library: &'a Library, display: EGLDisplay, config: &Config) -> Result<Eglew<'a>> {
        let egl = library.egl();

        if !egl.Initialize.is_loaded() {
            return Err(Error::MissingEntryPoint("eglInitialize"));
        }
        if !egl.QueryString.is_loaded() {
            return Err(Error::MissingEntryPoint("eglQueryString"));
        }

        let mut major: EGLint = 0;
        let mut minor: EGLint = 0;
        if unsafe { egl.Initialize(display, &mut major, &mut minor) } != ffi::EGL_TRUE {
            return Err(Error::InitializeFailed(last_error(egl)));
        }

        let extensions = library.query_string(display, egl::EXTENSIONS).unwrap_or_default();

        let support = Support::new((major, minor), &extensions, config.experimental, |name| {
            !library.get_proc_address(name).is_null()
        });

        info!(
            "Initialized EGL {}.{}: {} tracked extensions available, {} advertised",
            major,
            minor,
            support.available().filter(|ext| ext.version().is_none()).count(),
            support.advertised().count()
        );

        Ok(Eglew { library, display, support })
    }

    /// Initialize the default display of the process-wide library.
    pub fn init_default() -> Result<Eglew<'static>> {
        let library = Library::global()?;
        let display = library.get_display(crate::NativeDisplay::Other(None))?;
        Eglew::init(library, display, &Config::from_env())
    }

    /// Display this state belongs to.
    pub fn display(&self) -> EGLDisplay {
        self.display
    }

    /// Library the entry points were loaded from.
    pub fn library(&self) -> &'a Library {
        self.library
    }

    /// Generated function table.
    pub fn egl(&self) -> &'a egl::Egl {
        self.library.egl()
    }

    /// Resolve an entry point by name.
    pub fn proc_address(&self, name: &str) -> Option<*const c_void> {
        let address = self.library.get_proc_address(name);
        if address.is_null() {
            None
        } else {
            Some(address)
        }
    }

    /// `EGL_VENDOR` of the display.
    pub fn vendor(&self) -> Option<String> {
        self.library.query_string(self.display, egl::VENDOR)
    }

    /// `EGL_VERSION` string of the display.
    pub fn version_string(&self) -> Option<String> {
        self.library.query_string(self.display, egl::VERSION)
    }

    /// `EGL_CLIENT_APIS` of the display, available since EGL 1.2.
    pub fn client_apis(&self) -> Option<String> {
        if self.version() < (1, 2) {
            return None;
        }

        self.library.query_string(self.display, egl::CLIENT_APIS)
    }

    /// Release the display's resources with `eglTerminate`.
    pub fn terminate(self) -> Result<()> {
        let egl = self.library.egl();
        if !egl.Terminate.is_loaded() {
            return Err(Error::MissingEntryPoint("eglTerminate"));
        }

        if unsafe { egl.Terminate(self.display) } != ffi::EGL_TRUE {
            warn!("eglTerminate failed: {}", last_error(egl));
        }

        Ok(())
    }
}

impl Deref for Eglew<'_> {
    type Target = Support;

    fn deref(&self) -> &Support {
        &self.support
    }
}

fn last_error(egl: &egl::Egl) -> EglError {
    if egl.GetError.is_loaded() {
        EglError(unsafe { egl.GetError() })
    } else {
        EglError(egl::NOT_INITIALIZED as EGLint)
    }
}
