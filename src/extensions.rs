//! Core versions and extensions tracked by the wrangler.

macro_rules! extensions {
    ($($variant:ident => $name:literal [$($entry:literal),* $(,)?]),* $(,)?) => {
        /// EGL core version or extension whose availability is tracked per display.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Extension {
            $($variant,)*
        }

        impl Extension {
            /// Every tracked entry, core versions first.
            pub const ALL: &'static [Extension] = &[$(Extension::$variant,)*];

            /// Registry name, for example `EGL_KHR_image_base`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Extension::$variant => $name,)*
                }
            }

            /// Functions which must resolve for this entry to be usable.
            pub fn entry_points(self) -> &'static [&'static str] {
                match self {
                    $(Extension::$variant => &[$($entry),*],)*
                }
            }
        }
    };
}

extensions! {
    Version1_0 => "EGL_VERSION_1_0" [
        "eglChooseConfig",
        "eglCopyBuffers",
        "eglCreateContext",
        "eglCreatePbufferSurface",
        "eglCreatePixmapSurface",
        "eglCreateWindowSurface",
        "eglDestroyContext",
        "eglDestroySurface",
        "eglGetConfigAttrib",
        "eglGetConfigs",
        "eglGetCurrentDisplay",
        "eglGetCurrentSurface",
        "eglGetDisplay",
        "eglGetError",
        "eglGetProcAddress",
        "eglInitialize",
        "eglMakeCurrent",
        "eglQueryContext",
        "eglQueryString",
        "eglQuerySurface",
        "eglSwapBuffers",
        "eglTerminate",
        "eglWaitGL",
        "eglWaitNative",
    ],
    Version1_1 => "EGL_VERSION_1_1" [
        "eglBindTexImage",
        "eglReleaseTexImage",
        "eglSurfaceAttrib",
        "eglSwapInterval",
    ],
    Version1_2 => "EGL_VERSION_1_2" [
        "eglBindAPI",
        "eglCreatePbufferFromClientBuffer",
        "eglQueryAPI",
        "eglReleaseThread",
        "eglWaitClient",
    ],
    Version1_3 => "EGL_VERSION_1_3" [],
    Version1_4 => "EGL_VERSION_1_4" ["eglGetCurrentContext"],
    Version1_5 => "EGL_VERSION_1_5" [
        "eglClientWaitSync",
        "eglCreateImage",
        "eglCreatePlatformPixmapSurface",
        "eglCreatePlatformWindowSurface",
        "eglCreateSync",
        "eglDestroyImage",
        "eglDestroySync",
        "eglGetPlatformDisplay",
        "eglGetSyncAttrib",
        "eglWaitSync",
    ],

    AndroidBlobCache => "EGL_ANDROID_blob_cache" ["eglSetBlobCacheFuncsANDROID"],
    AndroidCreateNativeClientBuffer => "EGL_ANDROID_create_native_client_buffer" [
        "eglCreateNativeClientBufferANDROID",
    ],
    AndroidFramebufferTarget => "EGL_ANDROID_framebuffer_target" [],
    AndroidFrontBufferAutoRefresh => "EGL_ANDROID_front_buffer_auto_refresh" [],
    AndroidGetFrameTimestamps => "EGL_ANDROID_get_frame_timestamps" [
        "eglGetCompositorTimingANDROID",
        "eglGetCompositorTimingSupportedANDROID",
        "eglGetFrameTimestampSupportedANDROID",
        "eglGetFrameTimestampsANDROID",
        "eglGetNextFrameIdANDROID",
    ],
    AndroidGetNativeClientBuffer => "EGL_ANDROID_get_native_client_buffer" [
        "eglGetNativeClientBufferANDROID",
    ],
    AndroidImageNativeBuffer => "EGL_ANDROID_image_native_buffer" [],
    AndroidNativeFenceSync => "EGL_ANDROID_native_fence_sync" ["eglDupNativeFenceFDANDROID"],
    AndroidPresentationTime => "EGL_ANDROID_presentation_time" ["eglPresentationTimeANDROID"],
    AndroidRecordable => "EGL_ANDROID_recordable" [],

    AngleD3dShareHandleClientBuffer => "EGL_ANGLE_d3d_share_handle_client_buffer" [],
    AngleDeviceD3d => "EGL_ANGLE_device_d3d" [],
    AngleQuerySurfacePointer => "EGL_ANGLE_query_surface_pointer" [
        "eglQuerySurfacePointerANGLE",
    ],
    AngleSurfaceD3dTexture2dShareHandle => "EGL_ANGLE_surface_d3d_texture_2d_share_handle" [],
    AngleWindowFixedSize => "EGL_ANGLE_window_fixed_size" [],

    ArmPixmapMultisampleDiscard => "EGL_ARM_pixmap_multisample_discard" [],

    ExtBindToFront => "EGL_EXT_bind_to_front" [],
    ExtBufferAge => "EGL_EXT_buffer_age" [],
    ExtClientExtensions => "EGL_EXT_client_extensions" [],
    ExtCompositor => "EGL_EXT_compositor" [
        "eglCompositorBindTexWindowEXT",
        "eglCompositorSetContextAttributesEXT",
        "eglCompositorSetContextListEXT",
        "eglCompositorSetSizeEXT",
        "eglCompositorSetWindowAttributesEXT",
        "eglCompositorSetWindowListEXT",
        "eglCompositorSwapPolicyEXT",
    ],
    ExtCreateContextRobustness => "EGL_EXT_create_context_robustness" [],
    ExtDeviceBase => "EGL_EXT_device_base" [
        "eglQueryDeviceAttribEXT",
        "eglQueryDeviceStringEXT",
        "eglQueryDevicesEXT",
        "eglQueryDisplayAttribEXT",
    ],
    ExtDeviceDrm => "EGL_EXT_device_drm" [],
    ExtDeviceEnumeration => "EGL_EXT_device_enumeration" ["eglQueryDevicesEXT"],
    ExtDeviceOpenwf => "EGL_EXT_device_openwf" [],
    ExtDeviceQuery => "EGL_EXT_device_query" [
        "eglQueryDeviceAttribEXT",
        "eglQueryDeviceStringEXT",
        "eglQueryDisplayAttribEXT",
    ],
    ExtGlColorspaceBt2020Linear => "EGL_EXT_gl_colorspace_bt2020_linear" [],
    ExtGlColorspaceBt2020Pq => "EGL_EXT_gl_colorspace_bt2020_pq" [],
    ExtGlColorspaceScrgbLinear => "EGL_EXT_gl_colorspace_scrgb_linear" [],
    ExtImageDmaBufImport => "EGL_EXT_image_dma_buf_import" [],
    ExtImageDmaBufImportModifiers => "EGL_EXT_image_dma_buf_import_modifiers" [
        "eglQueryDmaBufFormatsEXT",
        "eglQueryDmaBufModifiersEXT",
    ],
    ExtMultiviewWindow => "EGL_EXT_multiview_window" [],
    ExtOutputBase => "EGL_EXT_output_base" [
        "eglGetOutputLayersEXT",
        "eglGetOutputPortsEXT",
        "eglOutputLayerAttribEXT",
        "eglOutputPortAttribEXT",
        "eglQueryOutputLayerAttribEXT",
        "eglQueryOutputLayerStringEXT",
        "eglQueryOutputPortAttribEXT",
        "eglQueryOutputPortStringEXT",
    ],
    ExtOutputDrm => "EGL_EXT_output_drm" [],
    ExtOutputOpenwf => "EGL_EXT_output_openwf" [],
    ExtPixelFormatFloat => "EGL_EXT_pixel_format_float" [],
    ExtPlatformBase => "EGL_EXT_platform_base" [
        "eglCreatePlatformPixmapSurfaceEXT",
        "eglCreatePlatformWindowSurfaceEXT",
        "eglGetPlatformDisplayEXT",
    ],
    ExtPlatformDevice => "EGL_EXT_platform_device" [],
    ExtPlatformWayland => "EGL_EXT_platform_wayland" [],
    ExtPlatformX11 => "EGL_EXT_platform_x11" [],
    ExtProtectedContent => "EGL_EXT_protected_content" [],
    ExtProtectedSurface => "EGL_EXT_protected_surface" [],
    ExtStreamConsumerEgloutput => "EGL_EXT_stream_consumer_egloutput" [
        "eglStreamConsumerOutputEXT",
    ],
    ExtSurfaceSmpte2086Metadata => "EGL_EXT_surface_SMPTE2086_metadata" [],
    ExtSwapBuffersWithDamage => "EGL_EXT_swap_buffers_with_damage" [
        "eglSwapBuffersWithDamageEXT",
    ],
    ExtYuvSurface => "EGL_EXT_yuv_surface" [],

    HiClientpixmap => "EGL_HI_clientpixmap" ["eglCreatePixmapSurfaceHI"],
    HiColorformats => "EGL_HI_colorformats" [],

    ImgContextPriority => "EGL_IMG_context_priority" [],
    ImgImagePlaneAttribs => "EGL_IMG_image_plane_attribs" [],

    KhrClEvent => "EGL_KHR_cl_event" [],
    KhrClEvent2 => "EGL_KHR_cl_event2" ["eglCreateSync64KHR"],
    KhrClientGetAllProcAddresses => "EGL_KHR_client_get_all_proc_addresses" [],
    KhrConfigAttribs => "EGL_KHR_config_attribs" [],
    KhrContextFlushControl => "EGL_KHR_context_flush_control" [],
    KhrCreateContext => "EGL_KHR_create_context" [],
    KhrCreateContextNoError => "EGL_KHR_create_context_no_error" [],
    KhrDebug => "EGL_KHR_debug" [
        "eglDebugMessageControlKHR",
        "eglLabelObjectKHR",
        "eglQueryDebugKHR",
    ],
    KhrFenceSync => "EGL_KHR_fence_sync" [
        "eglClientWaitSyncKHR",
        "eglCreateSyncKHR",
        "eglDestroySyncKHR",
        "eglGetSyncAttribKHR",
    ],
    KhrGetAllProcAddresses => "EGL_KHR_get_all_proc_addresses" [],
    KhrGlColorspace => "EGL_KHR_gl_colorspace" [],
    KhrGlRenderbufferImage => "EGL_KHR_gl_renderbuffer_image" [],
    KhrGlTexture2dImage => "EGL_KHR_gl_texture_2D_image" [],
    KhrGlTexture3dImage => "EGL_KHR_gl_texture_3D_image" [],
    KhrGlTextureCubemapImage => "EGL_KHR_gl_texture_cubemap_image" [],
    KhrImage => "EGL_KHR_image" ["eglCreateImageKHR", "eglDestroyImageKHR"],
    KhrImageBase => "EGL_KHR_image_base" ["eglCreateImageKHR", "eglDestroyImageKHR"],
    KhrImagePixmap => "EGL_KHR_image_pixmap" [],
    KhrLockSurface => "EGL_KHR_lock_surface" ["eglLockSurfaceKHR", "eglUnlockSurfaceKHR"],
    KhrLockSurface2 => "EGL_KHR_lock_surface2" [],
    KhrLockSurface3 => "EGL_KHR_lock_surface3" [
        "eglLockSurfaceKHR",
        "eglQuerySurface64KHR",
        "eglUnlockSurfaceKHR",
    ],
    KhrMutableRenderBuffer => "EGL_KHR_mutable_render_buffer" [],
    KhrNoConfigContext => "EGL_KHR_no_config_context" [],
    KhrPartialUpdate => "EGL_KHR_partial_update" ["eglSetDamageRegionKHR"],
    KhrPlatformAndroid => "EGL_KHR_platform_android" [],
    KhrPlatformGbm => "EGL_KHR_platform_gbm" [],
    KhrPlatformWayland => "EGL_KHR_platform_wayland" [],
    KhrPlatformX11 => "EGL_KHR_platform_x11" [],
    KhrReusableSync => "EGL_KHR_reusable_sync" [
        "eglClientWaitSyncKHR",
        "eglCreateSyncKHR",
        "eglDestroySyncKHR",
        "eglGetSyncAttribKHR",
        "eglSignalSyncKHR",
    ],
    KhrStream => "EGL_KHR_stream" [
        "eglCreateStreamKHR",
        "eglDestroyStreamKHR",
        "eglQueryStreamKHR",
        "eglQueryStreamu64KHR",
        "eglStreamAttribKHR",
    ],
    KhrStreamAttrib => "EGL_KHR_stream_attrib" [
        "eglCreateStreamAttribKHR",
        "eglQueryStreamAttribKHR",
        "eglSetStreamAttribKHR",
        "eglStreamConsumerAcquireAttribKHR",
        "eglStreamConsumerReleaseAttribKHR",
    ],
    KhrStreamConsumerGltexture => "EGL_KHR_stream_consumer_gltexture" [
        "eglStreamConsumerAcquireKHR",
        "eglStreamConsumerGLTextureExternalKHR",
        "eglStreamConsumerReleaseKHR",
    ],
    KhrStreamCrossProcessFd => "EGL_KHR_stream_cross_process_fd" [
        "eglCreateStreamFromFileDescriptorKHR",
        "eglGetStreamFileDescriptorKHR",
    ],
    KhrStreamFifo => "EGL_KHR_stream_fifo" ["eglQueryStreamTimeKHR"],
    KhrStreamProducerAldatalocator => "EGL_KHR_stream_producer_aldatalocator" [],
    KhrStreamProducerEglsurface => "EGL_KHR_stream_producer_eglsurface" [
        "eglCreateStreamProducerSurfaceKHR",
    ],
    KhrSurfacelessContext => "EGL_KHR_surfaceless_context" [],
    KhrSwapBuffersWithDamage => "EGL_KHR_swap_buffers_with_damage" [
        "eglSwapBuffersWithDamageKHR",
    ],
    KhrVgParentImage => "EGL_KHR_vg_parent_image" [],
    KhrWaitSync => "EGL_KHR_wait_sync" ["eglWaitSyncKHR"],

    MesaDrmImage => "EGL_MESA_drm_image" ["eglCreateDRMImageMESA", "eglExportDRMImageMESA"],
    MesaImageDmaBufExport => "EGL_MESA_image_dma_buf_export" [
        "eglExportDMABUFImageMESA",
        "eglExportDMABUFImageQueryMESA",
    ],
    MesaPlatformGbm => "EGL_MESA_platform_gbm" [],
    MesaPlatformSurfaceless => "EGL_MESA_platform_surfaceless" [],

    NokSwapRegion => "EGL_NOK_swap_region" ["eglSwapBuffersRegionNOK"],
    NokSwapRegion2 => "EGL_NOK_swap_region2" ["eglSwapBuffersRegion2NOK"],
    NokTextureFromPixmap => "EGL_NOK_texture_from_pixmap" [],

    Nv3dvisionSurface => "EGL_NV_3dvision_surface" [],
    NvCoverageSample => "EGL_NV_coverage_sample" [],
    NvCoverageSampleResolve => "EGL_NV_coverage_sample_resolve" [],
    NvCudaEvent => "EGL_NV_cuda_event" [],
    NvDepthNonlinear => "EGL_NV_depth_nonlinear" [],
    NvDeviceCuda => "EGL_NV_device_cuda" [],
    NvNativeQuery => "EGL_NV_native_query" [
        "eglQueryNativeDisplayNV",
        "eglQueryNativePixmapNV",
        "eglQueryNativeWindowNV",
    ],
    NvPostConvertRounding => "EGL_NV_post_convert_rounding" [],
    NvPostSubBuffer => "EGL_NV_post_sub_buffer" ["eglPostSubBufferNV"],
    NvRobustnessVideoMemoryPurge => "EGL_NV_robustness_video_memory_purge" [],
    NvStreamConsumerGltextureYuv => "EGL_NV_stream_consumer_gltexture_yuv" [
        "eglStreamConsumerGLTextureExternalAttribsNV",
    ],
    NvStreamMetadata => "EGL_NV_stream_metadata" [
        "eglQueryDisplayAttribNV",
        "eglQueryStreamMetadataNV",
        "eglSetStreamMetadataNV",
    ],
    NvStreamReset => "EGL_NV_stream_reset" ["eglResetStreamNV"],
    NvStreamSync => "EGL_NV_stream_sync" ["eglCreateStreamSyncNV"],
    NvSync => "EGL_NV_sync" [
        "eglClientWaitSyncNV",
        "eglCreateFenceSyncNV",
        "eglDestroySyncNV",
        "eglFenceNV",
        "eglGetSyncAttribNV",
        "eglSignalSyncNV",
    ],
    NvSystemTime => "EGL_NV_system_time" [
        "eglGetSystemTimeFrequencyNV",
        "eglGetSystemTimeNV",
    ],

    TizenImageNativeBuffer => "EGL_TIZEN_image_native_buffer" [],
    TizenImageNativeSurface => "EGL_TIZEN_image_native_surface" [],
}

impl Extension {
    /// Number of tracked entries.
    pub const COUNT: usize = Self::ALL.len();

    /// Look up an entry by its registry name.
    pub fn from_name(name: &str) -> Option<Extension> {
        Self::ALL.iter().copied().find(|ext| ext.name() == name)
    }

    /// Core version `(major, minor)` for `EGL_VERSION_*` entries.
    pub fn version(self) -> Option<(i32, i32)> {
        match self {
            Extension::Version1_0 => Some((1, 0)),
            Extension::Version1_1 => Some((1, 1)),
            Extension::Version1_2 => Some((1, 2)),
            Extension::Version1_3 => Some((1, 3)),
            Extension::Version1_4 => Some((1, 4)),
            Extension::Version1_5 => Some((1, 5)),
            _ => None,
        }
    }

    /// Vendor prefix of the registry name, `VERSION` for core entries.
    pub fn vendor(self) -> &'static str {
        let name = &self.name()["EGL_".len()..];
        match name.find('_') {
            Some(index) => &name[..index],
            None => name,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Whole-token search of `name` in a space separated extension list.
pub fn search_extension(name: &str, list: &str) -> bool {
    !name.is_empty() && list.split_ascii_whitespace().any(|ext| ext == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for &ext in Extension::ALL {
            assert_eq!(Extension::from_name(ext.name()), Some(ext));
            assert_eq!(ext.index(), Extension::ALL.iter().position(|e| *e == ext).unwrap());
        }
    }

    #[test]
    fn names_are_registry_names() {
        for &ext in Extension::ALL {
            assert!(ext.name().starts_with("EGL_"), "{}", ext.name());
            assert!(ext.entry_points().iter().all(|entry| entry.starts_with("egl")));
        }
    }

    #[test]
    fn unknown_names() {
        assert_eq!(Extension::from_name("EGL_FOO_bar"), None);
        assert_eq!(Extension::from_name("egl_khr_image"), None);
        assert_eq!(Extension::from_name(""), None);
    }

    #[test]
    fn versions_come_first() {
        let versions: Vec<_> = Extension::ALL.iter().take_while(|e| e.version().is_some()).collect();
        assert_eq!(versions.len(), 6);
        assert_eq!(Extension::Version1_5.version(), Some((1, 5)));
        assert_eq!(Extension::KhrDebug.version(), None);
    }

    #[test]
    fn vendor_prefix() {
        assert_eq!(Extension::KhrImageBase.vendor(), "KHR");
        assert_eq!(Extension::AndroidBlobCache.vendor(), "ANDROID");
        assert_eq!(Extension::Version1_4.vendor(), "VERSION");
    }

    #[test]
    fn search_matches_whole_tokens() {
        let list = "EGL_KHR_image_base EGL_KHR_fence_sync  EGL_EXT_buffer_age";

        assert!(search_extension("EGL_KHR_image_base", list));
        assert!(search_extension("EGL_EXT_buffer_age", list));
        assert!(!search_extension("EGL_KHR_image", list));
        assert!(!search_extension("KHR_fence_sync", list));
        assert!(!search_extension("", list));
        assert!(!search_extension("EGL_KHR_image_base", ""));
    }
}
