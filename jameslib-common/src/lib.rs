//! Common types shared by jameslib render target runtimes.

/// OpenGL enum conversions.
#[cfg(feature = "opengl")]
pub mod gl;

/// Internal pixel formats usable as render target attachments.
#[repr(u32)]
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ImageFormat {
    #[default]
    Unknown = 0,

    /* 8-bit */
    R8Unorm,
    R8G8Unorm,
    R8G8B8Unorm,
    R8G8B8A8Unorm,
    R8G8B8A8Srgb,

    /* 10-bit */
    A2B10G10R10UnormPack32,

    /* 16-bit */
    R16Sfloat,
    R16G16Sfloat,
    R16G16B16Sfloat,
    R16G16B16A16Sfloat,

    /* 32-bit */
    R32Sfloat,
    R32G32Sfloat,
    R32G32B32Sfloat,
    R32G32B32A32Sfloat,

    /* depth */
    D16Unorm,
    D24Unorm,
    D32Sfloat,
}

impl ImageFormat {
    /// The number of bits stored per channel.
    ///
    /// Returns 0 for [`ImageFormat::Unknown`].
    pub const fn channel_bits(&self) -> u32 {
        match self {
            ImageFormat::Unknown => 0,
            ImageFormat::R8Unorm
            | ImageFormat::R8G8Unorm
            | ImageFormat::R8G8B8Unorm
            | ImageFormat::R8G8B8A8Unorm
            | ImageFormat::R8G8B8A8Srgb => 8,
            ImageFormat::A2B10G10R10UnormPack32 => 10,
            ImageFormat::R16Sfloat
            | ImageFormat::R16G16Sfloat
            | ImageFormat::R16G16B16Sfloat
            | ImageFormat::R16G16B16A16Sfloat
            | ImageFormat::D16Unorm => 16,
            ImageFormat::D24Unorm => 24,
            ImageFormat::R32Sfloat
            | ImageFormat::R32G32Sfloat
            | ImageFormat::R32G32B32Sfloat
            | ImageFormat::R32G32B32A32Sfloat
            | ImageFormat::D32Sfloat => 32,
        }
    }

    /// The number of channels in the format.
    pub const fn channel_count(&self) -> u32 {
        match self {
            ImageFormat::Unknown => 0,
            ImageFormat::R8Unorm
            | ImageFormat::R16Sfloat
            | ImageFormat::R32Sfloat
            | ImageFormat::D16Unorm
            | ImageFormat::D24Unorm
            | ImageFormat::D32Sfloat => 1,
            ImageFormat::R8G8Unorm | ImageFormat::R16G16Sfloat | ImageFormat::R32G32Sfloat => 2,
            ImageFormat::R8G8B8Unorm
            | ImageFormat::R16G16B16Sfloat
            | ImageFormat::R32G32B32Sfloat => 3,
            ImageFormat::R8G8B8A8Unorm
            | ImageFormat::R8G8B8A8Srgb
            | ImageFormat::A2B10G10R10UnormPack32
            | ImageFormat::R16G16B16A16Sfloat
            | ImageFormat::R32G32B32A32Sfloat => 4,
        }
    }

    /// Whether the format can only be attached as a depth attachment.
    pub const fn is_depth(&self) -> bool {
        matches!(
            self,
            ImageFormat::D16Unorm | ImageFormat::D24Unorm | ImageFormat::D32Sfloat
        )
    }
}

/// Texture filtering used when sampling an attachment.
#[repr(i32)]
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Hash)]
pub enum FilterMode {
    #[default]
    Linear = 0,
    Nearest,
}

/// Texture wrapping used when sampling outside of an attachment.
#[repr(i32)]
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Hash)]
pub enum WrapMode {
    #[default]
    ClampToBorder = 0,
    ClampToEdge,
    Repeat,
    MirroredRepeat,
}

/// A size with a width and height.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    /// Create a new `Size<T>` with the given width and height.
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl Size<u32> {
    /// Clamp a zero width or height up to 1.
    pub fn at_least_one(self) -> Self {
        Size {
            width: self.width.max(1),
            height: self.height.max(1),
        }
    }
}

impl<T> From<(T, T)> for Size<T> {
    fn from((width, height): (T, T)) -> Self {
        Size { width, height }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn gbuffer_precision_ordering() {
        assert!(
            ImageFormat::R32G32B32Sfloat.channel_bits()
                > ImageFormat::R16G16B16Sfloat.channel_bits()
        );
        assert_eq!(ImageFormat::R16G16B16Sfloat.channel_count(), 3);
    }

    #[test]
    fn zero_size_clamps() {
        assert_eq!(Size::new(0u32, 7).at_least_one(), Size::new(1, 7));
        assert_eq!(Size::new(1u32, 1).at_least_one(), Size::new(1, 1));
    }

    #[test]
    fn depth_formats() {
        assert!(ImageFormat::D16Unorm.is_depth());
        assert!(!ImageFormat::R16Sfloat.is_depth());
    }
}
