//! Sound effect events and the port they are delivered through.

use std::collections::VecDeque;

/// Sound effects triggered by pet care actions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Pet is sleeping and recovering.
    Sleep,
    /// Pet is playing.
    Play,
    /// Pet is exercising.
    Gym,
    /// Pet was taken to the vet.
    Vet,
    /// Food was served.
    FoodServed {
        /// Name of the food served.
        name: String,
    },
    /// A gift was handed over.
    GiftGiven {
        /// Name of the gift.
        name: String,
    },
}

/// Sink for sound effects emitted by the simulation.
///
/// The engine emits effects as it goes; the frontend decides whether and
/// how to play them. [`NullAudio`] discards everything, [`SoundQueue`]
/// buffers for a frontend to drain each frame.
pub trait AudioPort: std::fmt::Debug {
    /// Delivers one sound effect.
    fn play_effect(&mut self, effect: SoundEffect);
}

/// Audio sink that discards every effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioPort for NullAudio {
    fn play_effect(&mut self, _effect: SoundEffect) {}
}

/// Bounded FIFO buffer of pending sound effects.
#[derive(Debug)]
pub struct SoundQueue {
    /// Pending effects, oldest first.
    queue: VecDeque<SoundEffect>,
    /// Maximum queue size.
    max_queue_size: usize,
}

impl SoundQueue {
    /// Creates a queue with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::with_capacity(64),
            max_queue_size: 64,
        }
    }

    /// Creates a queue with a custom capacity.
    #[must_use]
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(max_size),
            max_queue_size: max_size,
        }
    }

    /// Returns the number of pending effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Checks if no effects are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Removes and returns all pending effects, oldest first.
    pub fn drain(&mut self) -> Vec<SoundEffect> {
        self.queue.drain(..).collect()
    }
}

impl Default for SoundQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioPort for SoundQueue {
    fn play_effect(&mut self, effect: SoundEffect) {
        // Drop the oldest effect once full
        while self.queue.len() >= self.max_queue_size {
            self.queue.pop_front();
        }
        self.queue.push_back(effect);
    }
}
