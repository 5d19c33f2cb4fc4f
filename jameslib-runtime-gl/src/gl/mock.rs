//! A recording [`GLInterface`] for tests that need no GPU.
//!
//! Completeness follows the core profile rules that matter for render targets:
//! at least one attachment, every attachment alive and of the right kind,
//! matching dimensions, and draw buffers that only name attached slots.

use crate::error::{RenderTargetError, Result};
use crate::gl::{storage_size, GLInterface};
use crate::status::{FramebufferStatus, FRAMEBUFFER_INCOMPLETE_DIMENSIONS};
use jameslib_common::{FilterMode, ImageFormat, Size, WrapMode};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    CreateFramebuffer(u32),
    CreateTexture(u32),
    SetSampling(u32),
    Attach {
        framebuffer: u32,
        attachment: u32,
        texture: u32,
    },
    DrawBuffers(u32, Vec<u32>),
    CheckStatus(u32),
    Bind(Option<u32>),
    DeleteTexture(u32),
    DeleteFramebuffer(u32),
}

#[derive(Debug, Clone)]
pub(crate) struct MockTexture {
    pub format: u32,
    pub size: Size<u32>,
    pub sampling: Option<(FilterMode, WrapMode)>,
}

#[derive(Debug, Default)]
struct MockFramebuffer {
    attachments: HashMap<u32, u32>,
    draw_buffers: Vec<u32>,
}

#[derive(Debug, Default)]
struct MockState {
    next_id: u32,
    textures: HashMap<u32, MockTexture>,
    framebuffers: HashMap<u32, MockFramebuffer>,
    bound: Option<u32>,
    calls: Vec<Call>,
    texture_budget: Option<usize>,
}

impl MockState {
    fn next_id(&mut self) -> u32 {
        // 0 is the default framebuffer and the null texture.
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Default)]
pub(crate) struct MockGL {
    state: Mutex<MockState>,
    depth_size: Option<Size<u32>>,
}

impl MockGL {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate depth textures at this size instead of the requested one.
    pub fn with_depth_size(mut self, size: Size<u32>) -> Self {
        self.depth_size = Some(size);
        self
    }

    /// Fail texture creation once this many textures have been created.
    pub fn with_texture_budget(self, budget: usize) -> Self {
        self.state.lock().unwrap().texture_budget = Some(budget);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn texture(&self, texture: u32) -> Option<MockTexture> {
        self.state.lock().unwrap().textures.get(&texture).cloned()
    }

    pub fn draw_buffers(&self, framebuffer: u32) -> Vec<u32> {
        self.state
            .lock()
            .unwrap()
            .framebuffers
            .get(&framebuffer)
            .map(|fb| fb.draw_buffers.clone())
            .unwrap_or_default()
    }

    pub fn live_textures(&self) -> usize {
        self.state.lock().unwrap().textures.len()
    }

    pub fn live_framebuffers(&self) -> usize {
        self.state.lock().unwrap().framebuffers.len()
    }

    pub fn bound(&self) -> Option<u32> {
        self.state.lock().unwrap().bound
    }
}

impl GLInterface for MockGL {
    type Framebuffer = u32;
    type Texture = u32;

    fn name(&self) -> &'static str {
        "mock"
    }

    fn create_framebuffer(&self) -> Result<u32> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.framebuffers.insert(id, MockFramebuffer::default());
        state.calls.push(Call::CreateFramebuffer(id));
        Ok(id)
    }

    fn create_texture_storage(&self, format: u32, size: Size<u32>) -> Result<u32> {
        storage_size(size)?;
        let mut state = self.state.lock().unwrap();
        if let Some(budget) = state.texture_budget {
            if budget == 0 {
                return Err(RenderTargetError::GlError(
                    "out of texture names".to_string(),
                ));
            }
            state.texture_budget = Some(budget - 1);
        }

        let size = match self.depth_size {
            Some(depth_size) if ImageFormat::from_gl(format).is_depth() => depth_size,
            _ => size,
        };

        let id = state.next_id();
        state.textures.insert(
            id,
            MockTexture {
                format,
                size,
                sampling: None,
            },
        );
        state.calls.push(Call::CreateTexture(id));
        Ok(id)
    }

    fn set_sampling(&self, texture: u32, filter: FilterMode, wrap: WrapMode) {
        let mut state = self.state.lock().unwrap();
        if let Some(texture) = state.textures.get_mut(&texture) {
            texture.sampling = Some((filter, wrap));
        }
        state.calls.push(Call::SetSampling(texture));
    }

    fn attach_texture(&self, framebuffer: u32, attachment: u32, texture: u32) {
        let mut state = self.state.lock().unwrap();
        if let Some(fb) = state.framebuffers.get_mut(&framebuffer) {
            fb.attachments.insert(attachment, texture);
        }
        state.calls.push(Call::Attach {
            framebuffer,
            attachment,
            texture,
        });
    }

    fn draw_buffers(&self, framebuffer: u32, attachments: &[u32]) {
        let mut state = self.state.lock().unwrap();
        if let Some(fb) = state.framebuffers.get_mut(&framebuffer) {
            fb.draw_buffers = attachments.to_vec();
        }
        state
            .calls
            .push(Call::DrawBuffers(framebuffer, attachments.to_vec()));
    }

    fn check_status(&self, framebuffer: u32) -> FramebufferStatus {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CheckStatus(framebuffer));

        let Some(fb) = state.framebuffers.get(&framebuffer) else {
            return FramebufferStatus::from_raw(glow::FRAMEBUFFER_UNDEFINED);
        };

        if fb.attachments.is_empty() {
            return FramebufferStatus::from_raw(glow::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT);
        }

        let mut sizes = Vec::with_capacity(fb.attachments.len());
        for (attachment, texture) in &fb.attachments {
            let Some(texture) = state.textures.get(texture) else {
                return FramebufferStatus::from_raw(glow::FRAMEBUFFER_INCOMPLETE_ATTACHMENT);
            };
            let is_depth = ImageFormat::from_gl(texture.format).is_depth();
            if is_depth != (*attachment == glow::DEPTH_ATTACHMENT) {
                return FramebufferStatus::from_raw(glow::FRAMEBUFFER_INCOMPLETE_ATTACHMENT);
            }
            sizes.push(texture.size);
        }

        if sizes.windows(2).any(|pair| pair[0] != pair[1]) {
            return FramebufferStatus::from_raw(FRAMEBUFFER_INCOMPLETE_DIMENSIONS);
        }

        if fb
            .draw_buffers
            .iter()
            .any(|buffer| !fb.attachments.contains_key(buffer))
        {
            return FramebufferStatus::from_raw(glow::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER);
        }

        FramebufferStatus::COMPLETE
    }

    fn bind_framebuffer(&self, framebuffer: Option<u32>) {
        let mut state = self.state.lock().unwrap();
        state.bound = framebuffer;
        state.calls.push(Call::Bind(framebuffer));
    }

    fn current_framebuffer(&self) -> Option<u32> {
        self.state.lock().unwrap().bound
    }

    fn delete_texture(&self, texture: u32) {
        let mut state = self.state.lock().unwrap();
        state.textures.remove(&texture);
        state.calls.push(Call::DeleteTexture(texture));
    }

    fn delete_framebuffer(&self, framebuffer: u32) {
        let mut state = self.state.lock().unwrap();
        state.framebuffers.remove(&framebuffer);
        if state.bound == Some(framebuffer) {
            state.bound = None;
        }
        state.calls.push(Call::DeleteFramebuffer(framebuffer));
    }
}
