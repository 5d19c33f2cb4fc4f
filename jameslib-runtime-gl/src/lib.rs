//! OpenGL runtime for jameslib render targets.
//!
//! Render targets are created over a [`GLInterface`]. [`GlContext`] wraps a
//! `glow` context and dispatches to the OpenGL 3.3 backend, which binds objects to
//! edit them, or to the OpenGL 4.5+ direct state access backend.
//!
//! ```no_run
//! use std::sync::Arc;
//! use jameslib_common::{ImageFormat, Size};
//! use jameslib_runtime_gl::{GlContext, RenderTarget};
//!
//! # fn draw(gl: Arc<glow::Context>) -> jameslib_runtime_gl::error::Result<()> {
//! let ctx = Arc::new(unsafe { GlContext::new(gl, None) });
//! let scene = RenderTarget::new_simple(&ctx, Size::new(1280, 720), ImageFormat::R16G16B16Sfloat, None)?;
//! let gbuffer = RenderTarget::new_geometry_buffer(&ctx, Size::new(1280, 720), None)?;
//! gbuffer.check_complete()?;
//!
//! {
//!     let _bound = scene.bind();
//!     // draw the scene
//! }
//! # Ok(())
//! # }
//! ```

mod binding;
mod framebuffer;
mod gbuffer;
mod status;

pub mod error;
pub mod gl;
pub mod options;

pub use binding::{with_bound_target, BoundTarget};
pub use framebuffer::{
    Attachment, RenderTarget, RenderTargetLayout, DEPTH_FORMAT, MAX_COLOR_ATTACHMENTS,
};
pub use gbuffer::GBufferAttachment;
pub use gl::{GLInterface, GlContext};
pub use status::FramebufferStatus;
