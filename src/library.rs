//! Loading of the system EGL library.

use std::ffi::{CStr, CString};
use std::os::raw::c_void;
use std::path::{Path, PathBuf};
use std::ptr;

use lazy_static::lazy_static;
use log::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::ffi::{self, egl, EGLDisplay, EGLenum, EGLint, GetProcAddressFn};

lazy_static! {
    static ref GLOBAL: Result<Library> = Library::open(&Config::from_env());
}

/// An EGL implementation available on the system.
pub struct Library {
    egl: egl::Egl,
    get_proc_address: GetProcAddressFn,
    path: PathBuf,
    library: libloading::Library,
}

// Function pointers are never written after loading.
unsafe impl Send for Library {}
unsafe impl Sync for Library {}

impl Library {
    /// Open the first loadable library from the configured paths.
    pub fn open(config: &Config) -> Result<Library> {
        for path in &config.library_paths {
            let library = match unsafe { libloading::Library::new(path) } {
                Ok(library) => library,
                Err(err) => {
                    debug!("Unable to load {}: {}", path.display(), err);
                    continue;
                },
            };

            info!("Loaded EGL from {}", path.display());
            return Self::from_library(library, path.clone());
        }

        let tried = config.library_paths.iter().map(|path| path.display().to_string()).collect();
        Err(Error::LibraryNotFound(tried))
    }

    /// Library shared by the whole process, configured from the environment.
    pub fn global() -> Result<&'static Library> {
        GLOBAL.as_ref().map_err(Clone::clone)
    }

    fn from_library(library: libloading::Library, path: PathBuf) -> Result<Library> {
        let get_proc_address = match unsafe {
            library.get::<GetProcAddressFn>(b"eglGetProcAddress\0")
        } {
            Ok(symbol) => *symbol,
            Err(_) => return Err(Error::MissingEntryPoint("eglGetProcAddress")),
        };

        let egl = egl::Egl::load_with(|name| lookup(&library, get_proc_address, name));

        Ok(Library { egl, get_proc_address, path, library })
    }

    /// Path the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Generated function table.
    pub fn egl(&self) -> &egl::Egl {
        &self.egl
    }

    /// Resolve an entry point, null if it is not available.
    ///
    /// Uses `eglGetProcAddress` first and falls back to the library's exported symbols, since
    /// drivers before EGL 1.5 are not required to return core functions.
    pub fn get_proc_address(&self, name: &str) -> *const c_void {
        lookup(&self.library, self.get_proc_address, name)
    }

    /// Client extensions, queried without a display.
    ///
    /// Empty when the implementation does not support `EGL_EXT_client_extensions`.
    pub fn client_extensions(&self) -> Vec<String> {
        match self.query_string(ffi::EGL_NO_DISPLAY, egl::EXTENSIONS) {
            Some(list) => list.split_ascii_whitespace().map(ToOwned::to_owned).collect(),
            None => Vec::new(),
        }
    }

    /// `eglQueryString` as an owned string.
    pub fn query_string(&self, display: EGLDisplay, name: EGLenum) -> Option<String> {
        if !self.egl.QueryString.is_loaded() {
            return None;
        }

        let ptr = unsafe { self.egl.QueryString(display, name as EGLint) };
        if ptr.is_null() {
            return None;
        }

        Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
    }
}

fn lookup(
    library: &libloading::Library,
    get_proc_address: GetProcAddressFn,
    name: &str,
) -> *const c_void {
    let symbol = match CString::new(name) {
        Ok(symbol) => symbol,
        Err(_) => return ptr::null(),
    };

    let address = unsafe { get_proc_address(symbol.as_ptr()) };
    if !address.is_null() {
        return address;
    }

    match unsafe { library.get::<*const c_void>(symbol.as_bytes_with_nul()) } {
        Ok(address) => *address,
        Err(_) => ptr::null(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_libraries_are_reported() {
        let config = Config {
            experimental: false,
            library_paths: vec![PathBuf::from("/nonexistent/libEGL.so.1")],
        };

        match Library::open(&config) {
            Err(Error::LibraryNotFound(tried)) => {
                assert_eq!(tried, vec![String::from("/nonexistent/libEGL.so.1")])
            },
            Err(err) => panic!("unexpected error: {}", err),
            Ok(_) => panic!("loaded a nonexistent library"),
        }
    }

    #[test]
    fn empty_search_list() {
        let config = Config { experimental: false, library_paths: Vec::new() };
        assert_eq!(Library::open(&config).err(), Some(Error::LibraryNotFound(Vec::new())));
    }
}
