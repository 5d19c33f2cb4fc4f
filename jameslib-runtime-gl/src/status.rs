use std::fmt::{Display, Formatter};

// Only defined by GLES 2, but some drivers still report it for mismatched sizes.
pub(crate) const FRAMEBUFFER_INCOMPLETE_DIMENSIONS: u32 = 0x8CD9;

/// The raw result of a framebuffer completeness check.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FramebufferStatus(u32);

impl FramebufferStatus {
    /// The status reported for a complete framebuffer.
    pub const COMPLETE: FramebufferStatus = FramebufferStatus(glow::FRAMEBUFFER_COMPLETE);

    /// Wrap a status code returned by `glCheckFramebufferStatus`.
    pub const fn from_raw(status: u32) -> Self {
        FramebufferStatus(status)
    }

    /// The raw status code.
    pub const fn raw(&self) -> u32 {
        self.0
    }

    pub fn is_complete(&self) -> bool {
        self.0 == glow::FRAMEBUFFER_COMPLETE
    }

    /// The GL name of the status, if it is a known completeness code.
    pub fn name(&self) -> Option<&'static str> {
        Some(match self.0 {
            glow::FRAMEBUFFER_COMPLETE => "FRAMEBUFFER_COMPLETE",
            glow::FRAMEBUFFER_UNDEFINED => "FRAMEBUFFER_UNDEFINED",
            glow::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => "FRAMEBUFFER_INCOMPLETE_ATTACHMENT",
            glow::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => {
                "FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT"
            }
            FRAMEBUFFER_INCOMPLETE_DIMENSIONS => "FRAMEBUFFER_INCOMPLETE_DIMENSIONS",
            glow::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => "FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER",
            glow::FRAMEBUFFER_INCOMPLETE_READ_BUFFER => "FRAMEBUFFER_INCOMPLETE_READ_BUFFER",
            glow::FRAMEBUFFER_UNSUPPORTED => "FRAMEBUFFER_UNSUPPORTED",
            glow::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE => "FRAMEBUFFER_INCOMPLETE_MULTISAMPLE",
            glow::FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS => "FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS",
            _ => return None,
        })
    }
}

impl Display for FramebufferStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({:#x})", self.0),
            None => write!(f, "unknown status ({:#x})", self.0),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_names_known_codes() {
        let status = FramebufferStatus::from_raw(glow::FRAMEBUFFER_INCOMPLETE_ATTACHMENT);
        assert_eq!(
            status.to_string(),
            "FRAMEBUFFER_INCOMPLETE_ATTACHMENT (0x8cd6)"
        );
        assert!(!status.is_complete());
        assert!(FramebufferStatus::COMPLETE.is_complete());
    }

    #[test]
    fn display_keeps_unknown_codes() {
        // 0 is what the driver reports when the check itself errored.
        let status = FramebufferStatus::from_raw(0);
        assert_eq!(status.name(), None);
        assert_eq!(status.to_string(), "unknown status (0x0)");
    }
}
