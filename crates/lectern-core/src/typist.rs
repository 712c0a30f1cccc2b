//! Typing animation state machine.
//!
//! [`TypistState`] types a phrase one character per tick, holds the finished
//! phrase for the sustain duration, then jumps to a randomly chosen phrase.
//! A cursor blinks on its own cadence. Time and randomness are passed in by
//! the caller, so the same state drives the browser component and the native
//! Tokio runner.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{config::TypistConfig, error::Result};

/// What the view renders after a tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Currently displayed prefix of the target phrase.
    pub text: String,

    /// Whether the cursor is drawn.
    pub cursor_visible: bool,
}

/// Mutable state of one running typing animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypistState {
    phrases: Vec<String>,
    target: usize,
    /// Byte length of the displayed prefix, always on a char boundary.
    displayed_len: usize,
    switch_deadline: Option<u64>,
    cursor_visible: bool,
    cursor_deadline: u64,
    sustain_ms: u64,
    cursor_blink_ms: u64,
}

impl TypistState {
    /// Create a new animation starting at `now_ms`.
    ///
    /// Fails when the phrase list is empty or a duration is zero.
    pub fn new(config: &TypistConfig, now_ms: u64) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            phrases: config.phrases.clone(),
            target: 0,
            displayed_len: 0,
            switch_deadline: None,
            cursor_visible: false,
            cursor_deadline: now_ms,
            sustain_ms: config.sustain_ms,
            cursor_blink_ms: config.cursor_blink_ms,
        })
    }

    /// Phrase currently being typed or displayed.
    pub fn target_phrase(&self) -> &str {
        &self.phrases[self.target]
    }

    /// Displayed prefix of the target phrase.
    pub fn displayed(&self) -> &str {
        &self.phrases[self.target][..self.displayed_len]
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Deadline after which the fully typed phrase is replaced, if armed.
    pub fn switch_deadline(&self) -> Option<u64> {
        self.switch_deadline
    }

    pub fn is_fully_typed(&self) -> bool {
        self.displayed_len == self.target_phrase().len()
    }

    /// Current output without advancing.
    pub fn frame(&self) -> Frame {
        Frame {
            text: self.displayed().to_string(),
            cursor_visible: self.cursor_visible,
        }
    }

    /// Advance the animation to `now_ms`.
    pub fn tick<R: Rng + ?Sized>(&mut self, now_ms: u64, rng: &mut R) -> Frame {
        let switch_due =
            self.is_fully_typed() && self.switch_deadline.is_some_and(|deadline| now_ms >= deadline);

        if switch_due {
            self.target = rng.gen_range(0..self.phrases.len());
            self.displayed_len = 0;
            self.switch_deadline = None;
            tracing::trace!(phrase = %self.target_phrase(), "Switching phrase");
        } else {
            self.type_next_char();
        }

        if self.is_fully_typed() && self.switch_deadline.is_none() {
            self.switch_deadline = Some(now_ms.saturating_add(self.sustain_ms));
        }

        if now_ms > self.cursor_deadline {
            self.cursor_visible = !self.cursor_visible;
            self.cursor_deadline = now_ms.saturating_add(self.cursor_blink_ms);
        }

        self.frame()
    }

    fn type_next_char(&mut self) {
        let rest = &self.phrases[self.target][self.displayed_len..];
        if let Some(c) = rest.chars().next() {
            self.displayed_len += c.len_utf8();
        }
    }
}
