use crate::error::{RenderTargetError, Result};
use crate::gl::{storage_size, GLInterface};
use crate::status::FramebufferStatus;
use glow::HasContext;
use jameslib_common::{FilterMode, Size, WrapMode};
use std::sync::Arc;

/// OpenGL 4.5+ backend using direct state access.
///
/// Only [`GLInterface::bind_framebuffer`] changes binding state.
pub struct DirectStateAccessGL {
    ctx: Arc<glow::Context>,
}

impl DirectStateAccessGL {
    /// # Safety
    /// The context must be current on the calling thread and support
    /// `ARB_direct_state_access`.
    pub unsafe fn new(ctx: Arc<glow::Context>) -> Self {
        DirectStateAccessGL { ctx }
    }

    pub fn get_context(&self) -> &Arc<glow::Context> {
        &self.ctx
    }
}

impl GLInterface for DirectStateAccessGL {
    type Framebuffer = glow::Framebuffer;
    type Texture = glow::Texture;

    fn name(&self) -> &'static str {
        "gl46"
    }

    fn create_framebuffer(&self) -> Result<glow::Framebuffer> {
        unsafe {
            self.ctx
                .create_named_framebuffer()
                .map_err(RenderTargetError::GlError)
        }
    }

    fn create_texture_storage(&self, format: u32, size: Size<u32>) -> Result<glow::Texture> {
        let (width, height) = storage_size(size)?;
        unsafe {
            let texture = self
                .ctx
                .create_named_texture(glow::TEXTURE_2D)
                .map_err(RenderTargetError::GlError)?;

            self.ctx
                .texture_storage_2d(texture, 1, format, width, height);
            Ok(texture)
        }
    }

    fn set_sampling(&self, texture: glow::Texture, filter: FilterMode, wrap: WrapMode) {
        unsafe {
            self.ctx
                .texture_parameter_i32(texture, glow::TEXTURE_MIN_FILTER, filter.into());
            self.ctx
                .texture_parameter_i32(texture, glow::TEXTURE_MAG_FILTER, filter.into());
            self.ctx
                .texture_parameter_i32(texture, glow::TEXTURE_WRAP_S, wrap.into());
            self.ctx
                .texture_parameter_i32(texture, glow::TEXTURE_WRAP_T, wrap.into());
        }
    }

    fn attach_texture(
        &self,
        framebuffer: glow::Framebuffer,
        attachment: u32,
        texture: glow::Texture,
    ) {
        unsafe {
            self.ctx
                .named_framebuffer_texture(Some(framebuffer), attachment, Some(texture), 0);
        }
    }

    fn draw_buffers(&self, framebuffer: glow::Framebuffer, attachments: &[u32]) {
        unsafe {
            self.ctx
                .named_framebuffer_draw_buffers(Some(framebuffer), attachments);
        }
    }

    fn check_status(&self, framebuffer: glow::Framebuffer) -> FramebufferStatus {
        let status = unsafe {
            self.ctx
                .check_named_framebuffer_status(Some(framebuffer), glow::FRAMEBUFFER)
        };
        FramebufferStatus::from_raw(status)
    }

    fn bind_framebuffer(&self, framebuffer: Option<glow::Framebuffer>) {
        unsafe { self.ctx.bind_framebuffer(glow::FRAMEBUFFER, framebuffer) }
    }

    fn current_framebuffer(&self) -> Option<glow::Framebuffer> {
        unsafe {
            self.ctx
                .get_parameter_framebuffer(glow::DRAW_FRAMEBUFFER_BINDING)
        }
    }

    fn delete_texture(&self, texture: glow::Texture) {
        unsafe { self.ctx.delete_texture(texture) }
    }

    fn delete_framebuffer(&self, framebuffer: glow::Framebuffer) {
        unsafe { self.ctx.delete_framebuffer(framebuffer) }
    }
}
