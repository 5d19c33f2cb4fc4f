use crate::framebuffer::RenderTarget;
use crate::gl::GLInterface;

/// A render target bound as `GL_FRAMEBUFFER`.
///
/// The framebuffer that was bound before is bound again when the guard is dropped,
/// so guards nest.
#[must_use = "the render target is unbound as soon as the guard is dropped"]
pub struct BoundTarget<'a, C: GLInterface> {
    target: &'a RenderTarget<C>,
    previous: Option<C::Framebuffer>,
}

impl<'a, C: GLInterface> BoundTarget<'a, C> {
    /// The bound render target.
    pub fn target(&self) -> &'a RenderTarget<C> {
        self.target
    }
}

impl<C: GLInterface> Drop for BoundTarget<'_, C> {
    fn drop(&mut self) {
        self.target.ctx.bind_framebuffer(self.previous);
        log::trace!(
            "unbound render target {:?}, restored {:?}",
            self.target.handle,
            self.previous
        );
    }
}

impl<C: GLInterface> RenderTarget<C> {
    /// Bind this render target until the returned guard is dropped.
    pub fn bind(&self) -> BoundTarget<'_, C> {
        let previous = self.ctx.current_framebuffer();
        self.ctx.bind_framebuffer(Some(self.handle));
        log::trace!("bound render target {:?}", self.handle);
        BoundTarget {
            target: self,
            previous,
        }
    }
}

/// Run `f` with `target` bound, then bind the previous framebuffer again.
pub fn with_bound_target<C, R>(
    target: &RenderTarget<C>,
    f: impl FnOnce(&BoundTarget<'_, C>) -> R,
) -> R
where
    C: GLInterface,
{
    let bound = target.bind();
    f(&bound)
}
