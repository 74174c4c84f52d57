//! Keypad polling contract and scripted test double

use std::collections::VecDeque;

use crate::engine::key::Key;

/// A source of keypad events.
///
/// [`Keypad::poll_key`] reports at most one decoded key per call and `None`
/// when nothing is pressed. [`Keypad::wait_key`] is the blocking form: it
/// retries the poll, skipping the no-key sentinel, until a key arrives. It
/// is the one point in the system that suspends; front ends that deliver
/// events by callback skip it and feed the engines' `handle_key` directly.
pub trait Keypad {
    fn poll_key(&mut self) -> Option<Key>;

    fn wait_key(&mut self) -> Key {
        loop {
            if let Some(key) = self.poll_key() {
                return key;
            }
        }
    }
}

/// Replays a fixed key sequence, then reports no key pressed forever after.
/// Used by the integration tests and headless drivers.
#[derive(Debug, Default)]
pub struct ScriptedKeypad {
    keys: VecDeque<Key>,
}

impl ScriptedKeypad {
    pub fn new<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Key>,
    {
        ScriptedKeypad {
            keys: keys.into_iter().collect(),
        }
    }

    /// Queue another key behind the scripted sequence.
    pub fn press(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    pub fn is_exhausted(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Keypad for ScriptedKeypad {
    fn poll_key(&mut self) -> Option<Key> {
        self.keys.pop_front()
    }
}
