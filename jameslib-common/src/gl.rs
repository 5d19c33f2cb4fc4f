use crate::{FilterMode, ImageFormat, WrapMode};

impl From<ImageFormat> for u32 {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Unknown => 0,
            ImageFormat::R8Unorm => glow::R8,
            ImageFormat::R8G8Unorm => glow::RG8,
            ImageFormat::R8G8B8Unorm => glow::RGB8,
            ImageFormat::R8G8B8A8Unorm => glow::RGBA8,
            ImageFormat::R8G8B8A8Srgb => glow::SRGB8_ALPHA8,
            ImageFormat::A2B10G10R10UnormPack32 => glow::RGB10_A2,
            ImageFormat::R16Sfloat => glow::R16F,
            ImageFormat::R16G16Sfloat => glow::RG16F,
            ImageFormat::R16G16B16Sfloat => glow::RGB16F,
            ImageFormat::R16G16B16A16Sfloat => glow::RGBA16F,
            ImageFormat::R32Sfloat => glow::R32F,
            ImageFormat::R32G32Sfloat => glow::RG32F,
            ImageFormat::R32G32B32Sfloat => glow::RGB32F,
            ImageFormat::R32G32B32A32Sfloat => glow::RGBA32F,
            ImageFormat::D16Unorm => glow::DEPTH_COMPONENT16,
            ImageFormat::D24Unorm => glow::DEPTH_COMPONENT24,
            ImageFormat::D32Sfloat => glow::DEPTH_COMPONENT32F,
        }
    }
}

impl ImageFormat {
    /// Map a GL internal format back to an `ImageFormat`.
    ///
    /// Formats without a counterpart map to [`ImageFormat::Unknown`].
    pub fn from_gl(format: u32) -> ImageFormat {
        match format {
            glow::R8 => ImageFormat::R8Unorm,
            glow::RG8 => ImageFormat::R8G8Unorm,
            glow::RGB8 => ImageFormat::R8G8B8Unorm,
            glow::RGBA8 => ImageFormat::R8G8B8A8Unorm,
            glow::SRGB8_ALPHA8 => ImageFormat::R8G8B8A8Srgb,
            glow::RGB10_A2 => ImageFormat::A2B10G10R10UnormPack32,
            glow::R16F => ImageFormat::R16Sfloat,
            glow::RG16F => ImageFormat::R16G16Sfloat,
            glow::RGB16F => ImageFormat::R16G16B16Sfloat,
            glow::RGBA16F => ImageFormat::R16G16B16A16Sfloat,
            glow::R32F => ImageFormat::R32Sfloat,
            glow::RG32F => ImageFormat::R32G32Sfloat,
            glow::RGB32F => ImageFormat::R32G32B32Sfloat,
            glow::RGBA32F => ImageFormat::R32G32B32A32Sfloat,
            glow::DEPTH_COMPONENT16 => ImageFormat::D16Unorm,
            glow::DEPTH_COMPONENT24 => ImageFormat::D24Unorm,
            glow::DEPTH_COMPONENT32F => ImageFormat::D32Sfloat,
            _ => ImageFormat::Unknown,
        }
    }
}

impl From<WrapMode> for i32 {
    fn from(value: WrapMode) -> Self {
        let value = match value {
            WrapMode::ClampToBorder => glow::CLAMP_TO_BORDER,
            WrapMode::ClampToEdge => glow::CLAMP_TO_EDGE,
            WrapMode::Repeat => glow::REPEAT,
            WrapMode::MirroredRepeat => glow::MIRRORED_REPEAT,
        };
        value as i32
    }
}

impl From<FilterMode> for i32 {
    fn from(value: FilterMode) -> Self {
        let value = match value {
            FilterMode::Linear => glow::LINEAR,
            FilterMode::Nearest => glow::NEAREST,
        };
        value as i32
    }
}
