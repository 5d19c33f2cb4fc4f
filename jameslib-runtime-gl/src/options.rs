//! OpenGL runtime options.

/// Options for wrapping an OpenGL context.
#[derive(Debug, Clone, Default)]
pub struct GlContextOptions {
    /// Use direct state access (OpenGL 4.5+) instead of binding objects to edit them.
    pub use_dsa: bool,
}

/// Options for creating OpenGL render targets.
#[derive(Debug, Clone, Default)]
pub struct RenderTargetOptions {
    /// Fail construction with [`FramebufferInit`](crate::error::RenderTargetError::FramebufferInit)
    /// when the completeness check fails, instead of returning the incomplete target.
    pub strict_completeness: bool,
}
