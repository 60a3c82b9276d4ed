//! Per-display availability of core versions and extensions.

use log::{debug, trace};

use crate::extensions::{search_extension, Extension};
use crate::ffi::EGLint;

/// Snapshot of what a display supports.
///
/// An entry is available when the display advertises it (or reports a high enough version)
/// and every one of its entry points resolves. In experimental mode the advertisement is not
/// required for entries that have entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Support {
    version: (EGLint, EGLint),
    extensions: String,
    flags: Vec<bool>,
}

impl Support {
    /// Build the availability table.
    ///
    /// `version` is the pair reported by `eglInitialize`, `extensions` the display's
    /// `EGL_EXTENSIONS` string and `resolve` reports whether an entry point can be loaded.
    pub fn new<F>(
        version: (EGLint, EGLint),
        extensions: &str,
        experimental: bool,
        mut resolve: F,
    ) -> Support
    where
        F: FnMut(&str) -> bool,
    {
        let mut flags = vec![false; Extension::COUNT];

        for &ext in Extension::ALL {
            let advertised = match ext.version() {
                Some(required) => version >= required,
                None => search_extension(ext.name(), extensions),
            };

            let entry_points = ext.entry_points();
            flags[ext.index()] = if !entry_points.is_empty() && (experimental || advertised) {
                match entry_points.iter().copied().find(|&entry| !resolve(entry)) {
                    Some(missing) => {
                        if advertised {
                            debug!("{} advertised but {} is missing", ext.name(), missing);
                        }
                        false
                    },
                    None => true,
                }
            } else {
                advertised
            };

            trace!("{}: {}", ext.name(), flags[ext.index()]);
        }

        Support { version, extensions: extensions.trim().to_owned(), flags }
    }

    /// Version reported by `eglInitialize`.
    pub fn version(&self) -> (EGLint, EGLint) {
        self.version
    }

    /// Availability of a single core version or extension.
    pub fn has(&self, ext: Extension) -> bool {
        self.flags[ext.index()]
    }

    /// Whether every name in a whitespace separated list is available.
    ///
    /// Names must be `EGL_` registry names of tracked entries, anything else is unsupported.
    /// An empty list is trivially supported.
    pub fn is_supported(&self, names: &str) -> bool {
        names.split_ascii_whitespace().all(|name| {
            name.starts_with("EGL_") && Extension::from_name(name).is_some_and(|ext| self.has(ext))
        })
    }

    /// Whether the display advertises `name`, tracked or not.
    pub fn get_extension(&self, name: &str) -> bool {
        search_extension(name, &self.extensions)
    }

    /// Extension names exactly as advertised by the display.
    pub fn advertised(&self) -> impl Iterator<Item = &str> {
        self.extensions.split_ascii_whitespace()
    }

    /// Tracked entries which are available.
    pub fn available(&self) -> impl Iterator<Item = Extension> + '_ {
        Extension::ALL.iter().copied().filter(move |ext| self.has(*ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESA: &str = "EGL_EXT_buffer_age EGL_KHR_image_base EGL_KHR_fence_sync EGL_MESA_foo";

    #[test]
    fn versions_are_cumulative() {
        let support = Support::new((1, 4), "", false, |_| true);

        assert!(support.has(Extension::Version1_0));
        assert!(support.has(Extension::Version1_3));
        assert!(support.has(Extension::Version1_4));
        assert!(!support.has(Extension::Version1_5));

        let support = Support::new((2, 0), "", false, |_| true);
        assert!(support.has(Extension::Version1_5));
    }

    #[test]
    fn missing_entry_point_clears_version() {
        let support = Support::new((1, 5), "", false, |name| name != "eglCreateSync");

        assert!(support.has(Extension::Version1_4));
        assert!(!support.has(Extension::Version1_5));
    }

    #[test]
    fn advertised_extensions() {
        let support = Support::new((1, 4), MESA, false, |_| true);

        assert!(support.has(Extension::ExtBufferAge));
        assert!(support.has(Extension::KhrImageBase));
        assert!(support.has(Extension::KhrFenceSync));
        assert!(!support.has(Extension::KhrImage));
        assert!(!support.has(Extension::KhrDebug));
    }

    #[test]
    fn advertised_without_entry_points_is_unavailable() {
        let support = Support::new((1, 4), MESA, false, |name| name != "eglCreateSyncKHR");

        assert!(!support.has(Extension::KhrFenceSync));
        assert!(support.has(Extension::KhrImageBase));
    }

    #[test]
    fn experimental_resolves_unadvertised() {
        let support = Support::new((1, 4), MESA, true, |_| true);

        assert!(support.has(Extension::KhrDebug));
        assert!(support.has(Extension::Version1_5));

        // Entries without entry points still need to be advertised.
        assert!(!support.has(Extension::KhrSurfacelessContext));
    }

    #[test]
    fn is_supported_requires_all_names() {
        let support = Support::new((1, 4), MESA, false, |_| true);

        assert!(support.is_supported("EGL_KHR_image_base"));
        assert!(support.is_supported("EGL_VERSION_1_2 EGL_EXT_buffer_age"));
        assert!(support.is_supported("  EGL_KHR_fence_sync\tEGL_VERSION_1_4 "));
        assert!(!support.is_supported("EGL_KHR_image_base EGL_KHR_debug"));
        assert!(!support.is_supported("EGL_VERSION_1_5"));
        assert!(support.is_supported(""));
    }

    #[test]
    fn is_supported_rejects_untracked_names() {
        let support = Support::new((1, 4), MESA, false, |_| true);

        assert!(!support.is_supported("EGL_MESA_foo"));
        assert!(!support.is_supported("GL_ARB_multitexture"));
        assert!(!support.is_supported("KHR_image_base"));
    }

    #[test]
    fn get_extension_searches_raw_string() {
        let support = Support::new((1, 4), MESA, false, |_| true);

        assert!(support.get_extension("EGL_MESA_foo"));
        assert!(!support.get_extension("EGL_MESA"));
        assert_eq!(support.advertised().count(), 4);
    }

    #[test]
    fn available_lists_flags() {
        let support = Support::new((1, 0), "EGL_KHR_image_base", false, |_| true);
        let available: Vec<_> = support.available().collect();

        assert_eq!(available, vec![Extension::Version1_0, Extension::KhrImageBase]);
    }
}
