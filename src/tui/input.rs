// Key debouncing for terminals that report press, repeat and release
//
// Terminals with the kitty keyboard protocol send repeat and release events;
// most others only send presses, so a key is never seen going up. Holding is
// inferred from timing instead: events closer together than the repeat
// interval belong to one hold, a longer gap starts a new press. One physical
// press of a button key changes a counter exactly once, while held increment
// keys may auto-repeat like a real button being hammered.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Presses closer together than this on a `Once` key are treated as a hold
const ONCE_DEBOUNCE: Duration = Duration::from_millis(150);

/// How a key reacts to being held down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Fire on the initial press only (focus, send, quit)
    Once,

    /// Fire on press, then again every `interval` once `delay` has passed
    Repeat { delay: Duration, interval: Duration },
}

impl KeyBehavior {
    /// Held increment keys: start repeating after 400ms, then ~12 per second
    pub fn counter_repeat() -> Self {
        Self::Repeat {
            delay: Duration::from_millis(400),
            interval: Duration::from_millis(80),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    last_fired: Instant,
    last_seen: Instant,
}

impl Held {
    fn new(now: Instant) -> Self {
        Self {
            since: now,
            last_fired: now,
            last_seen: now,
        }
    }
}

/// Decides whether a key event should turn into an action
#[derive(Debug, Default)]
pub struct InputHandler {
    behaviors: HashMap<KeyCode, KeyBehavior>,
    held: HashMap<KeyCode, Held>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure how `keys` behave when held
    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.behaviors.insert(*key, behavior);
        }
    }

    /// Key handler with the bindings used by the counter screen
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        // Increments may be hammered by holding the key
        handler.configure_keys(
            &[KeyCode::Char('+'), KeyCode::Char('p'), KeyCode::Char('c')],
            KeyBehavior::counter_repeat(),
        );

        // Everything else fires once per press (unknown keys default to this)
        handler.configure_keys(
            &[
                KeyCode::Enter,
                KeyCode::Char(' '),
                KeyCode::Char('s'),
                KeyCode::Tab,
                KeyCode::BackTab,
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Char('h'),
                KeyCode::Char('l'),
                KeyCode::Char('t'),
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
            ],
            KeyBehavior::Once,
        );

        handler
    }

    /// Record a press (or repeat) of `key`; returns true if it should act
    pub fn press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::Once);

        let Some(held) = self.held.get_mut(&key) else {
            self.held.insert(key, Held::new(now));
            return true;
        };

        let gap = now.duration_since(held.last_seen);
        held.last_seen = now;

        let fire = match behavior {
            // No release events on most terminals: a gap means a new press
            KeyBehavior::Once => now.duration_since(held.last_fired) >= ONCE_DEBOUNCE,
            KeyBehavior::Repeat { interval, .. } if gap > interval => {
                *held = Held::new(now);
                return true;
            }
            KeyBehavior::Repeat { delay, interval } => {
                now.duration_since(held.since) >= delay
                    && now.duration_since(held.last_fired) >= interval
            }
        };
        if fire {
            held.last_fired = now;
        }
        fire
    }

    /// Forget a key once the terminal reports it released
    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_key_fires_once_while_held() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Char('s'), t0));
        assert!(!handler.press_at(KeyCode::Char('s'), t0 + Duration::from_millis(30)));
        assert!(!handler.press_at(KeyCode::Char('s'), t0 + Duration::from_millis(60)));

        handler.release(KeyCode::Char('s'));
        assert!(handler.press_at(KeyCode::Char('s'), t0 + Duration::from_millis(90)));
    }

    #[test]
    fn once_key_fires_again_after_debounce_without_release() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Enter, t0));
        assert!(handler.press_at(KeyCode::Enter, t0 + ONCE_DEBOUNCE));
    }

    #[test]
    fn repeat_key_waits_for_delay_then_repeats() {
        let mut handler = InputHandler::with_default_config();
        let plus = KeyCode::Char('+');
        let t0 = Instant::now();
        let ms = Duration::from_millis;

        // Auto-repeat events every 40ms while held
        assert!(handler.press_at(plus, t0));
        for t in (40..400).step_by(40) {
            assert!(!handler.press_at(plus, t0 + ms(t)), "fired at {}ms", t);
        }
        assert!(handler.press_at(plus, t0 + ms(400)));
        assert!(!handler.press_at(plus, t0 + ms(440)));
        assert!(handler.press_at(plus, t0 + ms(480)));
    }

    #[test]
    fn separate_taps_on_repeat_key_each_fire() {
        let mut handler = InputHandler::with_default_config();
        let p = KeyCode::Char('p');
        let t0 = Instant::now();
        let ms = Duration::from_millis;

        assert!(handler.press_at(p, t0));
        assert!(handler.press_at(p, t0 + ms(250)));
        assert!(handler.press_at(p, t0 + ms(350)));
    }

    #[test]
    fn new_tap_restarts_repeat_delay() {
        let mut handler = InputHandler::with_default_config();
        let p = KeyCode::Char('p');
        let t0 = Instant::now();
        let ms = Duration::from_millis;

        assert!(handler.press_at(p, t0));
        assert!(handler.press_at(p, t0 + ms(500)));
        // Held from 500ms: the delay counts from the new press, not from t0
        assert!(!handler.press_at(p, t0 + ms(540)));
        assert!(!handler.press_at(p, t0 + ms(580)));
    }

    #[test]
    fn unconfigured_keys_behave_like_once() {
        let mut handler = InputHandler::new();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Char('z'), t0));
        assert!(!handler.press_at(KeyCode::Char('z'), t0 + Duration::from_millis(10)));
    }
}
