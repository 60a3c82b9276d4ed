//! Raw EGL types, handles and sentinel values.
//!
//! The enums and the function table of EGL 1.5 live in [`egl`], which is generated from the
//! Khronos registry at build time. This module adds the platform types the generated code
//! expects from its parent and the handle types that the registry bindings leave out.

#![allow(non_camel_case_types, clippy::upper_case_acronyms)]

use std::os::raw::{c_char, c_long, c_uint, c_void};
use std::ptr;

pub mod egl {
    #![allow(
        non_camel_case_types,
        non_snake_case,
        non_upper_case_globals,
        unused_qualifications,
        clippy::all
    )]

    pub type khronos_utime_nanoseconds_t = super::khronos_utime_nanoseconds_t;
    pub type khronos_uint64_t = super::khronos_uint64_t;
    pub type khronos_ssize_t = super::khronos_ssize_t;
    pub type EGLNativeDisplayType = super::EGLNativeDisplayType;
    pub type EGLNativePixmapType = super::EGLNativePixmapType;
    pub type EGLNativeWindowType = super::EGLNativeWindowType;
    pub type EGLint = super::EGLint;
    pub type NativeDisplayType = super::EGLNativeDisplayType;
    pub type NativePixmapType = super::EGLNativePixmapType;
    pub type NativeWindowType = super::EGLNativeWindowType;

    include!(concat!(env!("OUT_DIR"), "/egl_bindings.rs"));
}

pub type khronos_utime_nanoseconds_t = khronos_uint64_t;
pub type khronos_uint64_t = u64;
pub type khronos_ssize_t = c_long;

pub type EGLint = i32;
pub type EGLNativeDisplayType = *const c_void;
pub type EGLNativePixmapType = *const c_void;

#[cfg(windows)]
pub type EGLNativeWindowType = windows_sys::Win32::Foundation::HWND;
#[cfg(not(windows))]
pub type EGLNativeWindowType = *const c_void;

pub type EGLBoolean = c_uint;
pub type EGLenum = c_uint;

pub use self::egl::types::{
    EGLAttrib, EGLAttribKHR, EGLClientBuffer, EGLClientPixmapHI, EGLConfig, EGLContext,
    EGLDeviceEXT, EGLDisplay, EGLGetBlobFuncANDROID, EGLImage, EGLImageKHR,
    EGLNativeFileDescriptorKHR, EGLOutputLayerEXT, EGLOutputPortEXT, EGLSetBlobFuncANDROID,
    EGLStreamKHR, EGLSurface, EGLSync, EGLSyncKHR, EGLSyncNV, EGLTime, EGLTimeKHR, EGLTimeNV,
    EGLsizeiANDROID, EGLuint64KHR, EGLuint64NV,
};

/// Opaque label attached to EGL objects through `EGL_KHR_debug`.
pub type EGLLabelKHR = *mut c_void;
/// Any EGL object that accepts a debug label.
pub type EGLObjectKHR = *mut c_void;

/// Debug message callback installed with `eglDebugMessageControlKHR`.
pub type EGLDEBUGPROCKHR = Option<
    unsafe extern "system" fn(
        error: EGLenum,
        command: *const c_char,
        message_type: EGLint,
        thread_label: EGLLabelKHR,
        object_label: EGLLabelKHR,
        message: *const c_char,
    ),
>;

/// Signature of `eglGetProcAddress`.
pub type GetProcAddressFn = unsafe extern "system" fn(procname: *const c_char) -> *const c_void;

pub const EGL_DONT_CARE: EGLint = -1;
pub const EGL_UNKNOWN: EGLint = -1;

pub const EGL_NO_CONTEXT: EGLContext = ptr::null();
pub const EGL_NO_DISPLAY: EGLDisplay = ptr::null();
pub const EGL_NO_IMAGE: EGLImage = ptr::null();
pub const EGL_NO_SURFACE: EGLSurface = ptr::null();
pub const EGL_NO_SYNC: EGLSync = ptr::null();

pub const EGL_NO_IMAGE_KHR: EGLImageKHR = ptr::null();
pub const EGL_NO_SYNC_KHR: EGLSyncKHR = ptr::null();
pub const EGL_NO_SYNC_NV: EGLSyncNV = ptr::null();
pub const EGL_NO_STREAM_KHR: EGLStreamKHR = ptr::null();
pub const EGL_NO_DEVICE_EXT: EGLDeviceEXT = ptr::null();
pub const EGL_NO_OUTPUT_LAYER_EXT: EGLOutputLayerEXT = ptr::null();
pub const EGL_NO_OUTPUT_PORT_EXT: EGLOutputPortEXT = ptr::null();

pub const EGL_DEFAULT_DISPLAY: EGLNativeDisplayType = ptr::null();

pub const EGL_FALSE: EGLBoolean = 0;
pub const EGL_TRUE: EGLBoolean = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_null_handles() {
        assert!(EGL_NO_CONTEXT.is_null());
        assert!(EGL_NO_DISPLAY.is_null());
        assert!(EGL_NO_IMAGE.is_null());
        assert!(EGL_NO_SURFACE.is_null());
        assert!(EGL_NO_SYNC.is_null());
        assert!(EGL_NO_IMAGE_KHR.is_null());
        assert!(EGL_NO_STREAM_KHR.is_null());
        assert!(EGL_DEFAULT_DISPLAY.is_null());
    }

    #[test]
    fn sentinels_match_generated_registry() {
        assert_eq!(EGL_DONT_CARE, egl::DONT_CARE);
        assert_eq!(EGL_UNKNOWN, egl::UNKNOWN);
        assert_eq!(EGL_TRUE, egl::TRUE);
        assert_eq!(EGL_FALSE, egl::FALSE);
        assert_eq!(EGL_NO_DISPLAY, egl::NO_DISPLAY);
        assert_eq!(EGL_NO_CONTEXT, egl::NO_CONTEXT);
    }

    #[test]
    fn handles_are_pointer_sized() {
        use std::mem::size_of;

        assert_eq!(size_of::<EGLDisplay>(), size_of::<usize>());
        assert_eq!(size_of::<EGLAttrib>(), size_of::<usize>());
        assert_eq!(size_of::<EGLint>(), 4);
        assert_eq!(size_of::<EGLTime>(), 8);
        assert_eq!(size_of::<EGLDEBUGPROCKHR>(), size_of::<usize>());
    }

    #[test]
    fn registry_enum_values() {
        assert_eq!(egl::SUCCESS, 0x3000);
        assert_eq!(egl::EXTENSIONS, 0x3055);
        assert_eq!(egl::VENDOR, 0x3053);
        assert_eq!(egl::VERSION, 0x3054);
        assert_eq!(egl::CLIENT_APIS, 0x308D);
    }
}
