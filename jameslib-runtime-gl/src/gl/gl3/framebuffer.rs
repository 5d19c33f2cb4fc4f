use crate::error::{RenderTargetError, Result};
use crate::gl::{storage_size, GLInterface};
use crate::status::FramebufferStatus;
use glow::HasContext;
use jameslib_common::{FilterMode, Size, WrapMode};
use std::sync::Arc;

/// OpenGL 3.3+ backend that edits objects by binding them.
///
/// Every call puts the `GL_DRAW_FRAMEBUFFER`, `GL_READ_FRAMEBUFFER` and
/// `GL_TEXTURE_2D` bindings back the way it found them.
pub struct CompatibilityGL {
    ctx: Arc<glow::Context>,
}

impl CompatibilityGL {
    /// # Safety
    /// The context must be current on the calling thread.
    pub unsafe fn new(ctx: Arc<glow::Context>) -> Self {
        CompatibilityGL { ctx }
    }

    pub fn get_context(&self) -> &Arc<glow::Context> {
        &self.ctx
    }

    unsafe fn edit_framebuffer<R>(
        &self,
        framebuffer: glow::Framebuffer,
        f: impl FnOnce() -> R,
    ) -> R {
        unsafe {
            let draw = self.ctx.get_parameter_framebuffer(glow::DRAW_FRAMEBUFFER_BINDING);
            let read = self.ctx.get_parameter_framebuffer(glow::READ_FRAMEBUFFER_BINDING);

            self.ctx.bind_framebuffer(glow::FRAMEBUFFER, Some(framebuffer));
            let result = f();

            self.ctx.bind_framebuffer(glow::DRAW_FRAMEBUFFER, draw);
            self.ctx.bind_framebuffer(glow::READ_FRAMEBUFFER, read);
            result
        }
    }

    unsafe fn edit_texture<R>(&self, texture: glow::Texture, f: impl FnOnce() -> R) -> R {
        unsafe {
            let previous = self.ctx.get_parameter_texture(glow::TEXTURE_BINDING_2D);

            self.ctx.bind_texture(glow::TEXTURE_2D, Some(texture));
            let result = f();

            self.ctx.bind_texture(glow::TEXTURE_2D, previous);
            result
        }
    }
}

impl GLInterface for CompatibilityGL {
    type Framebuffer = glow::Framebuffer;
    type Texture = glow::Texture;

    fn name(&self) -> &'static str {
        "gl3"
    }

    fn create_framebuffer(&self) -> Result<glow::Framebuffer> {
        unsafe {
            let framebuffer = self
                .ctx
                .create_framebuffer()
                .map_err(RenderTargetError::GlError)?;

            // the name is only a framebuffer object once it has been bound.
            self.edit_framebuffer(framebuffer, || ());
            Ok(framebuffer)
        }
    }

    fn create_texture_storage(&self, format: u32, size: Size<u32>) -> Result<glow::Texture> {
        let (width, height) = storage_size(size)?;
        unsafe {
            let texture = self
                .ctx
                .create_texture()
                .map_err(RenderTargetError::GlError)?;

            self.edit_texture(texture, || {
                self.ctx
                    .tex_storage_2d(glow::TEXTURE_2D, 1, format, width, height);
            });
            Ok(texture)
        }
    }

    fn set_sampling(&self, texture: glow::Texture, filter: FilterMode, wrap: WrapMode) {
        unsafe {
            self.edit_texture(texture, || {
                self.ctx
                    .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, filter.into());
                self.ctx
                    .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, filter.into());
                self.ctx
                    .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, wrap.into());
                self.ctx
                    .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, wrap.into());
            })
        }
    }

    fn attach_texture(
        &self,
        framebuffer: glow::Framebuffer,
        attachment: u32,
        texture: glow::Texture,
    ) {
        unsafe {
            self.edit_framebuffer(framebuffer, || {
                self.ctx.framebuffer_texture_2d(
                    glow::FRAMEBUFFER,
                    attachment,
                    glow::TEXTURE_2D,
                    Some(texture),
                    0,
                );
            })
        }
    }

    fn draw_buffers(&self, framebuffer: glow::Framebuffer, attachments: &[u32]) {
        unsafe { self.edit_framebuffer(framebuffer, || self.ctx.draw_buffers(attachments)) }
    }

    fn check_status(&self, framebuffer: glow::Framebuffer) -> FramebufferStatus {
        let status = unsafe {
            self.edit_framebuffer(framebuffer, || {
                self.ctx.check_framebuffer_status(glow::FRAMEBUFFER)
            })
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
