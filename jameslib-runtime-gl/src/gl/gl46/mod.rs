mod framebuffer;

pub use framebuffer::DirectStateAccessGL;
