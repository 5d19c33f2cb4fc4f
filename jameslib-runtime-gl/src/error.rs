//! OpenGL render target error types.

use crate::status::FramebufferStatus;
use thiserror::Error;

/// Cumulative error type for OpenGL render targets.
#[derive(Error, Debug)]
pub enum RenderTargetError {
    /// The attachments failed the framebuffer completeness check.
    ///
    /// Only returned from construction when strict completeness was requested.
    /// Otherwise the status is kept on the target and reported by
    /// [`RenderTarget::check_complete`](crate::RenderTarget::check_complete).
    #[error("fbo initialization error: {0}")]
    FramebufferInit(FramebufferStatus),
    /// A GL object could not be allocated.
    #[error("opengl error: {0}")]
    GlError(String),
}

/// Result type for OpenGL render targets.
pub type Result<T> = std::result::Result<T, RenderTargetError>;
