use std::os::raw::c_void;
use std::ptr;

use log::debug;

use crate::error::{Error, Result};
use crate::ffi::{self, egl, EGLDisplay, EGLNativeDisplayType};
use crate::library::Library;

/// Specifies the type of display passed as `native_display`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NativeDisplay {
    /// `None` means `EGL_DEFAULT_DISPLAY`.
    X11(Option<EGLNativeDisplayType>),
    /// `None` means `EGL_DEFAULT_DISPLAY`.
    Gbm(Option<EGLNativeDisplayType>),
    /// `None` means `EGL_DEFAULT_DISPLAY`.
    Wayland(Option<EGLNativeDisplayType>),
    /// `EGL_DEFAULT_DISPLAY` is mandatory for Android.
    Android,
    /// An `EGLDeviceEXT` obtained through `eglQueryDevicesEXT`.
    Device(ffi::EGLDeviceEXT),
    /// Don't specify any display type. `None` means `EGL_DEFAULT_DISPLAY`.
    Other(Option<EGLNativeDisplayType>),
}

/// How a platform display can be requested from the driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PlatformEntry {
    /// `eglGetPlatformDisplay`, EGL 1.5 or a `KHR` platform extension.
    Core(ffi::EGLenum),
    /// `eglGetPlatformDisplayEXT` from `EGL_EXT_platform_base`.
    Ext(ffi::EGLenum),
}

impl NativeDisplay {
    fn native(self) -> EGLNativeDisplayType {
        match self {
            NativeDisplay::X11(display)
            | NativeDisplay::Gbm(display)
            | NativeDisplay::Wayland(display)
            | NativeDisplay::Other(display) => display.unwrap_or(ffi::EGL_DEFAULT_DISPLAY),
            NativeDisplay::Device(device) => device,
            NativeDisplay::Android => ffi::EGL_DEFAULT_DISPLAY,
        }
    }

    /// Pick the platform entry point from the advertised client extensions.
    fn platform(self, has_extension: impl Fn(&str) -> bool) -> Option<PlatformEntry> {
        let candidates: &[(&str, PlatformEntry)] = match self {
            NativeDisplay::X11(_) => &[
                ("EGL_KHR_platform_x11", PlatformEntry::Core(egl::PLATFORM_X11_KHR)),
                ("EGL_EXT_platform_x11", PlatformEntry::Ext(egl::PLATFORM_X11_EXT)),
            ],
            NativeDisplay::Gbm(_) => &[
                ("EGL_KHR_platform_gbm", PlatformEntry::Core(egl::PLATFORM_GBM_KHR)),
                ("EGL_MESA_platform_gbm", PlatformEntry::Ext(egl::PLATFORM_GBM_MESA)),
            ],
            NativeDisplay::Wayland(_) => &[
                ("EGL_KHR_platform_wayland", PlatformEntry::Core(egl::PLATFORM_WAYLAND_KHR)),
                ("EGL_EXT_platform_wayland", PlatformEntry::Ext(egl::PLATFORM_WAYLAND_EXT)),
            ],
            NativeDisplay::Android => {
                &[("EGL_KHR_platform_android", PlatformEntry::Core(egl::PLATFORM_ANDROID_KHR))]
            },
            NativeDisplay::Device(_) => {
                &[("EGL_EXT_platform_device", PlatformEntry::Ext(egl::PLATFORM_DEVICE_EXT))]
            },
            NativeDisplay::Other(_) => &[],
        };

        candidates.iter().find(|(name, _)| has_extension(*name)).map(|(_, entry)| *entry)
    }
}

impl Library {
    /// Obtain a display for a native display handle.
    ///
    /// Platform displays are used when the client extensions advertise them. Some
    /// implementations report `EGL_EXT_platform_base` without exporting the symbol, so the
    /// entry point is checked as well.
    pub fn get_display(&self, native_display: NativeDisplay) -> Result<EGLDisplay> {
        let client_extensions = self.client_extensions();
        let egl = self.egl();

        let entry = native_display.platform(|name| {
            let advertised = client_extensions.iter().any(|ext| ext == name);
            let loaded = if name.starts_with("EGL_KHR") {
                egl.GetPlatformDisplay.is_loaded()
            } else {
                egl.GetPlatformDisplayEXT.is_loaded()
            };
            advertised && loaded
        });

        let native = native_display.native() as *mut c_void;
        let display = unsafe {
            match entry {
                Some(PlatformEntry::Core(platform)) => {
                    debug!("Using eglGetPlatformDisplay for platform 0x{:04X}", platform);
                    egl.GetPlatformDisplay(platform, native, ptr::null())
                },
                Some(PlatformEntry::Ext(platform)) => {
                    debug!("Using eglGetPlatformDisplayEXT for platform 0x{:04X}", platform);
                    egl.GetPlatformDisplayEXT(platform, native, ptr::null())
                },
                None if egl.GetDisplay.is_loaded() => egl.GetDisplay(native_display.native()),
                None => return Err(Error::MissingEntryPoint("eglGetDisplay")),
            }
        };

        if display == ffi::EGL_NO_DISPLAY {
            return Err(Error::NoDisplay);
        }

        Ok(display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_display_handles() {
        assert_eq!(NativeDisplay::X11(None).native(), ffi::EGL_DEFAULT_DISPLAY);
        assert_eq!(NativeDisplay::Android.native(), ffi::EGL_DEFAULT_DISPLAY);

        let handle = 0x1000 as EGLNativeDisplayType;
        assert_eq!(NativeDisplay::Wayland(Some(handle)).native(), handle);
    }

    #[test]
    fn khr_platform_preferred() {
        let all = |_: &str| true;
        assert_eq!(
            NativeDisplay::X11(None).platform(all),
            Some(PlatformEntry::Core(egl::PLATFORM_X11_KHR))
        );
    }

    #[test]
    fn ext_platform_fallback() {
        let ext_only = |name: &str| name == "EGL_MESA_platform_gbm";
        assert_eq!(
            NativeDisplay::Gbm(None).platform(ext_only),
            Some(PlatformEntry::Ext(egl::PLATFORM_GBM_MESA))
        );
    }

    #[test]
    fn plain_get_display_without_extensions() {
        let none = |_: &str| false;
        assert_eq!(NativeDisplay::Wayland(None).platform(none), None);
        assert_eq!(NativeDisplay::Other(None).platform(|_| true), None);
    }
}
