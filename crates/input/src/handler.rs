//! Held-key tracker that turns terminal key events into per-tick control
//! snapshots.
//!
//! Movement keys report pressed on the first sample after the press, then
//! repeat after a DAS delay at an ARR interval while held. Rotate is
//! edge-triggered: one press, one rotation. Terminals that never send key
//! release events are handled with an idle timeout; legacy terminals resend
//! the press while a key is held, which keeps it alive.

use crate::types::{
    Control, Controls, DEFAULT_ARR_MS, DEFAULT_DAS_MS, DEFAULT_KEY_RELEASE_TIMEOUT_MS,
};

/// Repeat state of one held movement key
#[derive(Debug, Clone, Copy, Default)]
struct HeldKey {
    held: bool,
    /// Pressed but not yet reported by `sample`
    fresh: bool,
    idle_ms: u32,
    das_timer: u32,
    arr_accumulator: u32,
}

impl HeldKey {
    fn press(&mut self) {
        if !self.held {
            *self = HeldKey {
                held: true,
                fresh: true,
                ..HeldKey::default()
            };
        }
        self.idle_ms = 0;
    }

    fn release(&mut self) {
        *self = HeldKey::default();
    }

    fn sample(&mut self, elapsed_ms: u32, das: u32, arr: u32, timeout_ms: u32) -> bool {
        if !self.held {
            return false;
        }

        if self.fresh {
            self.fresh = false;
            return true;
        }

        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms > timeout_ms {
            self.release();
            return false;
        }

        let prev_das = self.das_timer;
        self.das_timer = self.das_timer.saturating_add(elapsed_ms);
        if self.das_timer < das {
            return false;
        }

        let excess = if prev_das < das {
            self.das_timer - das
        } else {
            elapsed_ms
        };
        if arr == 0 {
            return true;
        }

        self.arr_accumulator = self.arr_accumulator.saturating_add(excess);
        if self.arr_accumulator >= arr {
            // The core applies one step per tick, so surplus repeats are dropped.
            self.arr_accumulator %= arr;
            return true;
        }
        false
    }
}

/// Tracks input state for DAS/ARR handling.
#[derive(Debug, Clone)]
pub struct ControlTracker {
    left: HeldKey,
    right: HeldKey,
    down: HeldKey,
    rotate_pending: bool,
    das_delay: u32,
    arr_rate: u32,
    key_release_timeout_ms: u32,
}

impl ControlTracker {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            left: HeldKey::default(),
            right: HeldKey::default(),
            down: HeldKey::default(),
            rotate_pending: false,
            das_delay,
            arr_rate,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn press(&mut self, control: Control) {
        match control {
            Control::MoveLeft => {
                self.right.release();
                self.left.press();
            }
            Control::MoveRight => {
                self.left.release();
                self.right.press();
            }
            Control::MoveDown => self.down.press(),
            Control::Rotate => self.rotate_pending = true,
        }
    }

    pub fn release(&mut self, control: Control) {
        match control {
            Control::MoveLeft => self.left.release(),
            Control::MoveRight => self.right.release(),
            Control::MoveDown => self.down.release(),
            Control::Rotate => {}
        }
    }

    /// Produce the control snapshot for one tick of `elapsed_ms`.
    pub fn sample(&mut self, elapsed_ms: u32) -> Controls {
        let (das, arr, timeout) = (self.das_delay, self.arr_rate, self.key_release_timeout_ms);
        let rotate = std::mem::take(&mut self.rotate_pending);

        Controls {
            move_down: self.down.sample(elapsed_ms, 0, arr, timeout),
            move_left: self.left.sample(elapsed_ms, das, arr, timeout),
            move_right: self.right.sample(elapsed_ms, das, arr, timeout),
            rotate,
        }
    }

    /// Drop every held key and any pending rotate.
    pub fn reset(&mut self) {
        self.left.release();
        self.right.release();
        self.down.release();
        self.rotate_pending = false;
    }
}

impl Default for ControlTracker {
    fn default() -> Self {
        Self::new()
    }
}
