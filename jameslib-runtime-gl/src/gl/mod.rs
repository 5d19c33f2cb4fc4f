pub(crate) mod gl3;
pub(crate) mod gl46;

#[cfg(test)]
pub(crate) mod mock;

use crate::error::{RenderTargetError, Result};
use crate::options::GlContextOptions;
use crate::status::FramebufferStatus;
use jameslib_common::{FilterMode, Size, WrapMode};
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

pub use gl3::CompatibilityGL;
pub use gl46::DirectStateAccessGL;

/// The GL primitives needed to allocate and bind render targets.
///
/// Every method must be called on the thread the GL context is current on.
/// Implementations that need to bind objects to edit them restore the
/// previous `GL_FRAMEBUFFER` and `GL_TEXTURE_2D` bindings before they return.
pub trait GLInterface {
    type Framebuffer: Copy + Eq + Hash + Debug;
    type Texture: Copy + Eq + Hash + Debug;

    /// A short name for the backend, used in diagnostics.
    fn name(&self) -> &'static str;

    fn create_framebuffer(&self) -> Result<Self::Framebuffer>;

    /// Create a 2D texture with immutable single-level storage.
    fn create_texture_storage(&self, format: u32, size: Size<u32>) -> Result<Self::Texture>;

    /// Set the min/mag filter and the S/T wrap mode of a texture.
    fn set_sampling(&self, texture: Self::Texture, filter: FilterMode, wrap: WrapMode);

    fn attach_texture(
        &self,
        framebuffer: Self::Framebuffer,
        attachment: u32,
        texture: Self::Texture,
    );

    /// Declare the color attachments that fragment outputs are written to.
    fn draw_buffers(&self, framebuffer: Self::Framebuffer, attachments: &[u32]);

    fn check_status(&self, framebuffer: Self::Framebuffer) -> FramebufferStatus;

    /// Bind a framebuffer as `GL_FRAMEBUFFER`, or the default framebuffer for `None`.
    fn bind_framebuffer(&self, framebuffer: Option<Self::Framebuffer>);

    /// The framebuffer currently bound for drawing, or `None` for the default framebuffer.
    fn current_framebuffer(&self) -> Option<Self::Framebuffer>;

    fn delete_texture(&self, texture: Self::Texture);

    fn delete_framebuffer(&self, framebuffer: Self::Framebuffer);
}

/// An OpenGL context with the backend chosen at runtime.
pub enum GlContext {
    /// OpenGL 3.3+, editing objects by binding them.
    Compatibility(CompatibilityGL),
    /// OpenGL 4.5+ with direct state access.
    DirectStateAccess(DirectStateAccessGL),
}

impl GlContext {
    /// Wrap a `glow` context, choosing the backend from the options.
    ///
    /// # Safety
    /// The context must be current on the calling thread, and must stay current
    /// for as long as any render target created from it is alive.
    pub unsafe fn new(ctx: Arc<glow::Context>, options: Option<&GlContextOptions>) -> Self {
        if options.is_some_and(|options| options.use_dsa) {
            GlContext::DirectStateAccess(unsafe { DirectStateAccessGL::new(ctx) })
        } else {
            GlContext::Compatibility(unsafe { CompatibilityGL::new(ctx) })
        }
    }

    /// Get the `glow` context.
    pub fn get_context(&self) -> &Arc<glow::Context> {
        match self {
            GlContext::Compatibility(gl) => gl.get_context(),
            GlContext::DirectStateAccess(gl) => gl.get_context(),
        }
    }
}

/// Texture storage dimensions as the signed sizes GL takes.
pub(crate) fn storage_size(size: Size<u32>) -> Result<(i32, i32)> {
    match (i32::try_from(size.width), i32::try_from(size.height)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(RenderTargetError::GlError(format!(
            "texture size {}x{} is out of range",
            size.width, size.height
        ))),
    }
}

macro_rules! dispatch {
    ($self:ident, $gl:ident => $expr:expr) => {
        match $self {
            GlContext::Compatibility($gl) => $expr,
            GlContext::DirectStateAccess($gl) => $expr,
        }
    };
}

impl GLInterface for GlContext {
    type Framebuffer = glow::Framebuffer;
    type Texture = glow::Texture;

    fn name(&self) -> &'static str {
        dispatch!(self, gl => gl.name())
    }

    fn create_framebuffer(&self) -> Result<glow::Framebuffer> {
        dispatch!(self, gl => gl.create_framebuffer())
    }

    fn create_texture_storage(&self, format: u32, size: Size<u32>) -> Result<glow::Texture> {
        dispatch!(self, gl => gl.create_texture_storage(format, size))
    }

    fn set_sampling(&self, texture: glow::Texture, filter: FilterMode, wrap: WrapMode) {
        dispatch!(self, gl => gl.set_sampling(texture, filter, wrap))
    }

    fn attach_texture(
        &self,
        framebuffer: glow::Framebuffer,
        attachment: u32,
        texture: glow::Texture,
    ) {
        dispatch!(self, gl => gl.attach_texture(framebuffer, attachment, texture))
    }

    fn draw_buffers(&self, framebuffer: glow::Framebuffer, attachments: &[u32]) {
        dispatch!(self, gl => gl.draw_buffers(framebuffer, attachments))
    }

    fn check_status(&self, framebuffer: glow::Framebuffer) -> FramebufferStatus {
        dispatch!(self, gl => gl.check_status(framebuffer))
    }

    fn bind_framebuffer(&self, framebuffer: Option<glow::Framebuffer>) {
        dispatch!(self, gl => gl.bind_framebuffer(framebuffer))
    }

    fn current_framebuffer(&self) -> Option<glow::Framebuffer> {
        dispatch!(self, gl => gl.current_framebuffer())
    }

    fn delete_texture(&self, texture: glow::Texture) {
        dispatch!(self, gl => gl.delete_texture(texture))
    }

    fn delete_framebuffer(&self, framebuffer: glow::Framebuffer) {
        dispatch!(self, gl => gl.delete_framebuffer(framebuffer))
    }
}
