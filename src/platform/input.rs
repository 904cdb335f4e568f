//! Input normalization
//!
//! Whatever the device, the game only understands one thing: "activate".
//! Hosts translate their native events into [`RawInput`] and let
//! [`normalize`] decide whether it counts.

use std::sync::mpsc::{Receiver, Sender, channel};

/// Key codes (DOM `KeyboardEvent.code` naming) that count as activation
pub const ACTIVATION_KEYS: [&str; 3] = ["Space", "ArrowUp", "KeyX"];

/// Host input before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Key press, by physical key code
    Key(String),
    /// Mouse button / pen down anywhere on the board
    PointerDown,
    /// First finger down
    TouchStart,
    /// Anything else the host forwards
    Other,
}

impl RawInput {
    pub fn key(code: impl Into<String>) -> Self {
        RawInput::Key(code.into())
    }
}

/// The single normalized input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activate;

/// `Some(Activate)` for designated keys, clicks and touches; `None` otherwise
pub fn normalize(raw: &RawInput) -> Option<Activate> {
    match raw {
        RawInput::Key(code) if ACTIVATION_KEYS.contains(&code.as_str()) => Some(Activate),
        RawInput::PointerDown | RawInput::TouchStart => Some(Activate),
        RawInput::Key(_) | RawInput::Other => None,
    }
}

/// Thread-safe handle for feeding input to a driver
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: Sender<Activate>,
}

impl InputSender {
    /// Normalize and enqueue. Returns false if the input was ignored or the
    /// driver is gone.
    pub fn send(&self, raw: &RawInput) -> bool {
        match normalize(raw) {
            Some(activate) => self.tx.send(activate).is_ok(),
            None => false,
        }
    }
}

/// Receiving end, drained by the driver between ticks
#[derive(Debug)]
pub struct InputQueue {
    rx: Receiver<Activate>,
}

impl InputQueue {
    /// Take everything queued so far without blocking
    pub fn drain(&self) -> impl Iterator<Item = Activate> + '_ {
        self.rx.try_iter()
    }
}

/// Create a connected sender/queue pair
pub fn input_channel() -> (InputSender, InputQueue) {
    let (tx, rx) = channel();
    (InputSender { tx }, InputQueue { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_designated_keys_activate() {
        for code in ACTIVATION_KEYS {
            assert_eq!(normalize(&RawInput::key(code)), Some(Activate));
        }
    }

    #[test]
    fn test_other_input_ignored() {
        assert_eq!(normalize(&RawInput::key("KeyA")), None);
        assert_eq!(normalize(&RawInput::key("Enter")), None);
        assert_eq!(normalize(&RawInput::Other), None);
    }

    #[test]
    fn test_pointer_and_touch_activate() {
        assert_eq!(normalize(&RawInput::PointerDown), Some(Activate));
        assert_eq!(normalize(&RawInput::TouchStart), Some(Activate));
    }

    #[test]
    fn test_channel_across_threads() {
        let (sender, queue) = input_channel();
        let worker = sender.clone();
        std::thread::spawn(move || {
            assert!(worker.send(&RawInput::TouchStart));
            assert!(!worker.send(&RawInput::key("KeyQ")));
        })
        .join()
        .unwrap();
        assert!(sender.send(&RawInput::key("Space")));

        assert_eq!(queue.drain().count(), 2);
        assert_eq!(queue.drain().count(), 0);
    }
}
