#![forbid(missing_docs)]
//! Render targets and geometry buffers for small OpenGL renderers.
//!
//! jameslib allocates framebuffer objects together with the textures attached to
//! them, checks that the result is complete, and releases everything together
//! when the render target is dropped.
//!
//! ## Render targets
//! | **Factory**                                   | **Color attachments**                    | **Depth**    |
//! |-----------------------------------------------|------------------------------------------|--------------|
//! | `RenderTarget::new_simple`                    | 1, in the requested format               | 16-bit       |
//! | `RenderTarget::new_geometry_buffer`           | position `RGB32F`, normal and albedo `RGB16F` | 16-bit  |
//!
//! ## Runtimes
//! | **API**      | **Status** | **`jameslib` feature** |
//! |--------------|------------|------------------------|
//! | OpenGL 3.3+  | ✔          | `gl`                   |
//! | OpenGL 4.5+  | ✔          | `gl`                   |

/// Render target runtimes for graphics APIs.
pub mod runtime {
    #[cfg(feature = "gl")]
    /// Render targets for OpenGL 3.3+, with optional direct state access on OpenGL 4.5+.
    ///
    /// The OpenGL runtime is driven through a [`glow`](https://docs.rs/glow) context
    /// that must be current on the calling thread.
    pub mod gl {
        pub use jameslib_runtime_gl::*;
    }
}

pub use jameslib_common::{FilterMode, ImageFormat, Size, WrapMode};
