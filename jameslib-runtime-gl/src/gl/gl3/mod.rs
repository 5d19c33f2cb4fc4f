mod framebuffer;

pub use framebuffer::CompatibilityGL;
