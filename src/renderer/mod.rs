//! Rendering seam
//!
//! The core emits abstract draw requests (see [`commands`]); turning them into
//! pixels is the job of whatever implements [`RenderSink`].

pub mod commands;
pub mod compose;

pub use commands::{Color, DrawCommand, Sprite, TextAlign};
pub use compose::compose_frame;

/// Draw requests for one tick, in paint order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Receives one frame per tick
pub trait RenderSink {
    fn present(&mut self, frame: &Frame);
}

/// Keeps the most recent frame and a running count; useful headless
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub last: Frame,
    pub frames: u64,
}

impl RenderSink for FrameRecorder {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;
        self.last = frame.clone();
        log::trace!("Frame {}: {} draw commands", self.frames, frame.len());
    }
}
