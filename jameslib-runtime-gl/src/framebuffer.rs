use crate::error::{RenderTargetError, Result};
use crate::gbuffer::{GBufferAttachment, GBUFFER_FILTER, GBUFFER_WRAP};
use crate::gl::GLInterface;
use crate::options::RenderTargetOptions;
use crate::status::FramebufferStatus;
use jameslib_common::{FilterMode, ImageFormat, Size, WrapMode};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// The number of color attachment slots a render target has.
pub const MAX_COLOR_ATTACHMENTS: usize = 8;

/// Every render target gets a 16-bit depth attachment.
pub const DEPTH_FORMAT: ImageFormat = ImageFormat::D16Unorm;

/// A texture attached to a render target, with the internal format it was allocated with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Attachment<T> {
    pub texture: T,
    pub format: u32,
}

/// The set of attachments a render target was built with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RenderTargetLayout {
    /// A single color attachment in the given GL internal format.
    Simple { format: u32 },
    /// Position, normal and albedo attachments. See [`GBufferAttachment`].
    GeometryBuffer,
}

struct ColorAttachmentDesc {
    format: u32,
    sampling: Option<(FilterMode, WrapMode)>,
}

/// Objects allocated while building a target, deleted again unless the build finishes.
struct Allocation<'a, C: GLInterface> {
    ctx: &'a C,
    framebuffer: C::Framebuffer,
    textures: Vec<C::Texture>,
    armed: bool,
}

impl<'a, C: GLInterface> Allocation<'a, C> {
    fn new(ctx: &'a C) -> Result<Self> {
        let framebuffer = ctx.create_framebuffer()?;
        Ok(Allocation {
            ctx,
            framebuffer,
            textures: Vec::new(),
            armed: true,
        })
    }

    fn texture(&mut self, format: u32, size: Size<u32>) -> Result<C::Texture> {
        let texture = self.ctx.create_texture_storage(format, size)?;
        self.textures.push(texture);
        Ok(texture)
    }

    fn finish(mut self) {
        self.armed = false;
    }
}

impl<C: GLInterface> Drop for Allocation<'_, C> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        for texture in self.textures.drain(..) {
            self.ctx.delete_texture(texture);
        }
        self.ctx.delete_framebuffer(self.framebuffer);
    }
}

/// A framebuffer object that owns its color and depth attachments.
///
/// Dropping the render target deletes the framebuffer and every attachment.
/// The GL context must still be current on the dropping thread.
pub struct RenderTarget<C: GLInterface> {
    pub(crate) ctx: Arc<C>,
    pub(crate) handle: C::Framebuffer,
    color: [Option<Attachment<C::Texture>>; MAX_COLOR_ATTACHMENTS],
    depth: Attachment<C::Texture>,
    size: Size<u32>,
    status: FramebufferStatus,
    layout: RenderTargetLayout,
    options: RenderTargetOptions,
}

impl<C: GLInterface> RenderTarget<C> {
    /// Create a render target with a single color attachment in `format`
    /// and a 16-bit depth attachment.
    ///
    /// `format` may be an [`ImageFormat`] or any GL internal format.
    ///
    /// An incomplete framebuffer is logged and returned with its status,
    /// unless [`RenderTargetOptions::strict_completeness`] is set.
    pub fn new_simple(
        ctx: &Arc<C>,
        size: Size<u32>,
        format: impl Into<u32>,
        options: Option<&RenderTargetOptions>,
    ) -> Result<Self> {
        let format = format.into();
        Self::build(
            ctx,
            size,
            &[ColorAttachmentDesc {
                format,
                sampling: None,
            }],
            RenderTargetLayout::Simple { format },
            options,
        )
    }

    /// Create a geometry buffer for deferred shading.
    ///
    /// Color attachments 0, 1 and 2 hold position, normal and albedo in the
    /// formats given by [`GBufferAttachment::format`]. All three are draw buffers,
    /// sampled with nearest filtering and clamped to the border.
    /// The depth attachment is shared.
    pub fn new_geometry_buffer(
        ctx: &Arc<C>,
        size: Size<u32>,
        options: Option<&RenderTargetOptions>,
    ) -> Result<Self> {
        let colors = GBufferAttachment::ALL.map(|attachment| ColorAttachmentDesc {
            format: attachment.format().into(),
            sampling: Some((GBUFFER_FILTER, GBUFFER_WRAP)),
        });

        Self::build(
            ctx,
            size,
            &colors,
            RenderTargetLayout::GeometryBuffer,
            options,
        )
    }

    /// Create a new render target with the same layout and options at a different size.
    pub fn resized(&self, size: Size<u32>) -> Result<Self> {
        match self.layout {
            RenderTargetLayout::Simple { format } => {
                Self::new_simple(&self.ctx, size, format, Some(&self.options))
            }
            RenderTargetLayout::GeometryBuffer => {
                Self::new_geometry_buffer(&self.ctx, size, Some(&self.options))
            }
        }
    }

    fn build(
        ctx: &Arc<C>,
        size: Size<u32>,
        colors: &[ColorAttachmentDesc],
        layout: RenderTargetLayout,
        options: Option<&RenderTargetOptions>,
    ) -> Result<Self> {
        debug_assert!(colors.len() <= MAX_COLOR_ATTACHMENTS);

        let options = options.cloned().unwrap_or_default();
        let size = size.at_least_one();

        let mut allocation = Allocation::new(ctx.as_ref())?;
        let framebuffer = allocation.framebuffer;

        let mut color = Vec::with_capacity(colors.len());
        for (slot, desc) in colors.iter().enumerate() {
            let texture = allocation.texture(desc.format, size)?;
            if let Some((filter, wrap)) = desc.sampling {
                ctx.set_sampling(texture, filter, wrap);
            }
            ctx.attach_texture(framebuffer, glow::COLOR_ATTACHMENT0 + slot as u32, texture);
            color.push(Attachment {
                texture,
                format: desc.format,
            });
        }

        // a single output goes to COLOR_ATTACHMENT0 by default.
        if colors.len() > 1 {
            let draw_buffers: Vec<u32> = (0..colors.len() as u32)
                .map(|slot| glow::COLOR_ATTACHMENT0 + slot)
                .collect();
            ctx.draw_buffers(framebuffer, &draw_buffers);
        }

        let depth_format = u32::from(DEPTH_FORMAT);
        let depth = allocation.texture(depth_format, size)?;
        ctx.attach_texture(framebuffer, glow::DEPTH_ATTACHMENT, depth);

        let status = ctx.check_status(framebuffer);
        if !status.is_complete() {
            log::warn!("Framebuffer incomplete: {}", status.raw());
            if options.strict_completeness {
                return Err(RenderTargetError::FramebufferInit(status));
            }
        }

        allocation.finish();

        log::debug!(
            "created {:?} render target {}x{} on {}",
            layout,
            size.width,
            size.height,
            ctx.name()
        );

        Ok(RenderTarget {
            ctx: Arc::clone(ctx),
            handle: framebuffer,
            color: array_init::array_init(|slot| color.get(slot).copied()),
            depth: Attachment {
                texture: depth,
                format: depth_format,
            },
            size,
            status,
            layout,
            options,
        })
    }

    /// The framebuffer object.
    pub fn handle(&self) -> C::Framebuffer {
        self.handle
    }

    pub fn size(&self) -> Size<u32> {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// The color attachment in `slot`, if one was allocated.
    pub fn color_attachment(&self, slot: usize) -> Option<&Attachment<C::Texture>> {
        self.color.get(slot).and_then(Option::as_ref)
    }

    /// All color attachment slots. Only a prefix is populated.
    pub fn color_attachments(&self) -> &[Option<Attachment<C::Texture>>; MAX_COLOR_ATTACHMENTS] {
        &self.color
    }

    /// The number of populated color attachment slots.
    pub fn color_attachment_count(&self) -> usize {
        self.color.iter().flatten().count()
    }

    pub fn depth_attachment(&self) -> &Attachment<C::Texture> {
        &self.depth
    }

    /// The texture backing a geometry buffer attachment.
    ///
    /// Returns `None` if this target is not a geometry buffer.
    pub fn gbuffer_texture(&self, attachment: GBufferAttachment) -> Option<C::Texture> {
        if self.layout != RenderTargetLayout::GeometryBuffer {
            return None;
        }
        self.color_attachment(attachment.index())
            .map(|attachment| attachment.texture)
    }

    pub fn layout(&self) -> RenderTargetLayout {
        self.layout
    }

    /// The completeness status observed when the target was created.
    pub fn status(&self) -> FramebufferStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    /// Fail with [`RenderTargetError::FramebufferInit`] if the target was created incomplete.
    pub fn check_complete(&self) -> Result<()> {
        if self.status.is_complete() {
            Ok(())
        } else {
            Err(RenderTargetError::FramebufferInit(self.status))
        }
    }

    /// Get the context this render target was created with.
    pub fn get_context(&self) -> &Arc<C> {
        &self.ctx
    }
}

impl<C: GLInterface> Debug for RenderTarget<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderTarget")
            .field("handle", &self.handle)
            .field("color", &self.color)
            .field("depth", &self.depth)
            .field("size", &self.size)
            .field("status", &self.status)
            .field("layout", &self.layout)
            .finish()
    }
}

impl<C: GLInterface> Drop for RenderTarget<C> {
    fn drop(&mut self) {
        self.ctx.delete_framebuffer(self.handle);
        for attachment in self.color.iter().flatten() {
            self.ctx.delete_texture(attachment.texture);
        }
        self.ctx.delete_texture(self.depth.texture);
        log::trace!("released render target {:?}", self.handle);
    }
}
