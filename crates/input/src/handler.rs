//! Held-key input handler for terminal environments.
//!
//! Turns logical key presses and releases into [`GameAction`]s:
//!
//! - `Left`, `Right`, `Down` act once on press, then repeat after a delay at a
//!   fixed cadence until released
//! - `Up` and `Enter` act once per press; repeated press events for a key
//!   that is still held do not retrigger them
//! - `QuickDrop` starts on press and ends on release
//!
//! Time is fed in by [`InputHandler::update`]. Terminals that never report key
//! releases are handled by a per-key timeout: a key with no fresh press event
//! of its own for `key_release_timeout_ms` counts as released. Presses of
//! other keys do not keep it alive.

use arrayvec::ArrayVec;

use crate::map::InputKey;
use crate::types::{GameAction, REPEAT_DELAY_MS, REPEAT_INTERVAL_MS};

/// Shorter than the repeat delay, so a lone tap never repeats.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Hold state of one key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct HeldKey {
    held: bool,
    /// Time since this key's last press event
    idle_ms: u32,
}

impl HeldKey {
    /// Returns true for a fresh press, false when the key was already held.
    fn press(&mut self) -> bool {
        self.idle_ms = 0;
        !std::mem::replace(&mut self.held, true)
    }

    /// Returns whether the key was held.
    fn release(&mut self) -> bool {
        self.idle_ms = 0;
        std::mem::take(&mut self.held)
    }

    /// Advance the idle clock; returns true if the key just timed out.
    fn age(&mut self, elapsed_ms: u32, timeout_ms: u32) -> bool {
        if !self.held {
            return false;
        }
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms > timeout_ms {
            self.held = false;
            return true;
        }
        false
    }
}

/// Repeat schedule for one held movement key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Repeat {
    held_ms: u32,
    next_at_ms: u32,
}

impl Repeat {
    fn start(delay_ms: u32) -> Self {
        Self {
            held_ms: 0,
            next_at_ms: delay_ms,
        }
    }

    /// Advance by `elapsed_ms`; returns how many repeats are due.
    fn advance(&mut self, elapsed_ms: u32, interval_ms: u32) -> u32 {
        self.held_ms = self.held_ms.saturating_add(elapsed_ms);
        let mut due = 0;
        while self.held_ms >= self.next_at_ms {
            due += 1;
            self.next_at_ms = self.next_at_ms.saturating_add(interval_ms);
        }
        due
    }
}

/// Tracks held keys and emits repeats.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Direction currently held; the latest of Left/Right wins
    horizontal: Option<InputKey>,
    horizontal_key: HeldKey,
    down: HeldKey,
    up: HeldKey,
    enter: HeldKey,
    quick_drop: HeldKey,
    horizontal_repeat: Repeat,
    down_repeat: Repeat,
    repeat_delay_ms: u32,
    repeat_interval_ms: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(REPEAT_DELAY_MS, REPEAT_INTERVAL_MS)
    }

    pub fn with_config(repeat_delay_ms: u32, repeat_interval_ms: u32) -> Self {
        Self {
            horizontal: None,
            horizontal_key: HeldKey::default(),
            down: HeldKey::default(),
            up: HeldKey::default(),
            enter: HeldKey::default(),
            quick_drop: HeldKey::default(),
            horizontal_repeat: Repeat::default(),
            down_repeat: Repeat::default(),
            repeat_delay_ms,
            repeat_interval_ms: repeat_interval_ms.max(1),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn is_quick_drop_held(&self) -> bool {
        self.quick_drop.held
    }

    pub fn handle_key_press(&mut self, key: InputKey) -> Option<GameAction> {
        match key {
            InputKey::Left | InputKey::Right => {
                if self.horizontal == Some(key) && !self.horizontal_key.press() {
                    return None;
                }
                self.horizontal = Some(key);
                self.horizontal_key = HeldKey::default();
                self.horizontal_key.press();
                self.horizontal_repeat = Repeat::start(self.repeat_delay_ms);
                Some(horizontal_action(key))
            }
            InputKey::Down => {
                if !self.down.press() {
                    return None;
                }
                self.down_repeat = Repeat::start(self.repeat_delay_ms);
                Some(GameAction::SoftDrop)
            }
            InputKey::Up => self.up.press().then_some(GameAction::Rotate),
            InputKey::Enter => self.enter.press().then_some(GameAction::TogglePauseOrStart),
            InputKey::QuickDrop => self.quick_drop.press().then_some(GameAction::HardDropStart),
        }
    }

    /// Returns `HardDropEnd` when the quick-drop key is released.
    pub fn handle_key_release(&mut self, key: InputKey) -> Option<GameAction> {
        match key {
            InputKey::Left | InputKey::Right => {
                if self.horizontal == Some(key) {
                    self.horizontal = None;
                    self.horizontal_key.release();
                }
                None
            }
            InputKey::Down => {
                self.down.release();
                None
            }
            InputKey::Up => {
                self.up.release();
                None
            }
            InputKey::Enter => {
                self.enter.release();
                None
            }
            InputKey::QuickDrop => self.quick_drop.release().then_some(GameAction::HardDropEnd),
        }
    }

    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 32> {
        let mut actions = ArrayVec::<GameAction, 32>::new();
        let timeout = self.key_release_timeout_ms;

        // Auto-release keys whose terminal never sent a release event.
        if self.horizontal_key.age(elapsed_ms, timeout) {
            self.horizontal = None;
        }
        self.down.age(elapsed_ms, timeout);
        self.up.age(elapsed_ms, timeout);
        self.enter.age(elapsed_ms, timeout);
        if self.quick_drop.age(elapsed_ms, timeout) {
            let _ = actions.try_push(GameAction::HardDropEnd);
        }

        let interval = self.repeat_interval_ms;
        if let Some(key) = self.horizontal {
            for _ in 0..self.horizontal_repeat.advance(elapsed_ms, interval) {
                let _ = actions.try_push(horizontal_action(key));
            }
        }
        if self.down.held {
            for _ in 0..self.down_repeat.advance(elapsed_ms, interval) {
                let _ = actions.try_push(GameAction::SoftDrop);
            }
        }

        actions
    }

    pub fn reset(&mut self) {
        *self = Self {
            key_release_timeout_ms: self.key_release_timeout_ms,
            ..Self::with_config(self.repeat_delay_ms, self.repeat_interval_ms)
        };
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn horizontal_action(key: InputKey) -> GameAction {
    match key {
        InputKey::Left => GameAction::MoveLeft,
        _ => GameAction::MoveRight,
    }
}
