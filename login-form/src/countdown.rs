//! Resend cooldown.
//!
//! Each [`Countdown::start`] opens a new epoch. The timer driving the
//! countdown passes its epoch back on every tick, so a tick from a timer that
//! should already be gone is dropped instead of decrementing the live run.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CountdownEpoch(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Seconds left after this tick; always > 0.
    Running(u32),
    Finished,
    /// Tick from a superseded run; nothing changed.
    Stale,
}

impl Tick {
    pub fn keep_running(self) -> bool {
        matches!(self, Tick::Running(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    epoch: CountdownEpoch,
}

impl Countdown {
    pub fn start(&mut self, seconds: u32) -> CountdownEpoch {
        self.epoch = CountdownEpoch(self.epoch.0.wrapping_add(1));
        self.remaining = seconds;
        self.epoch
    }

    pub fn tick(&mut self, epoch: CountdownEpoch) -> Tick {
        if epoch != self.epoch {
            return Tick::Stale;
        }
        if self.remaining == 0 {
            return Tick::Finished;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            Tick::Finished
        } else {
            Tick::Running(self.remaining)
        }
    }

    /// Stop the current run; its ticks become stale.
    pub fn cancel(&mut self) {
        self.epoch = CountdownEpoch(self.epoch.0.wrapping_add(1));
        self.remaining = 0;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }
}
