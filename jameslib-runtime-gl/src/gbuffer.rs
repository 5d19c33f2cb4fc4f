use jameslib_common::{FilterMode, ImageFormat, WrapMode};

/// The fixed attachments of a deferred shading geometry buffer, in slot order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GBufferAttachment {
    /// World-space position.
    Position = 0,
    /// World-space normal.
    Normal = 1,
    /// Surface color.
    Albedo = 2,
}

impl GBufferAttachment {
    /// All geometry buffer attachments in slot order.
    pub const ALL: [GBufferAttachment; 3] = [
        GBufferAttachment::Position,
        GBufferAttachment::Normal,
        GBufferAttachment::Albedo,
    ];

    /// The color attachment slot of this attachment.
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// The storage format of this attachment.
    ///
    /// Positions need the range of 32-bit floats. Normals and albedo fit in half floats.
    pub const fn format(&self) -> ImageFormat {
        match self {
            GBufferAttachment::Position => ImageFormat::R32G32B32Sfloat,
            GBufferAttachment::Normal | GBufferAttachment::Albedo => ImageFormat::R16G16B16Sfloat,
        }
    }
}

// Interpolating positions or normals across texels gives meaningless values.
pub(crate) const GBUFFER_FILTER: FilterMode = FilterMode::Nearest;
pub(crate) const GBUFFER_WRAP: WrapMode = WrapMode::ClampToBorder;
