//! Infinitely-looping campaign strip.
//!
//! The original presentation tripled its slide list and silently snapped the
//! index back into the middle copy whenever it crossed a boundary. The same
//! illusion is kept here with modular arithmetic over a *virtual* tripled
//! strip: the logical index lives in `[0, 3 * len)` and only the snap frame
//! runs with animation disabled.

use core::time::Duration;
use tokio::{
    sync::{mpsc, watch},
    time::{self, Instant},
};

/// Fixed number of cards visible at once.
pub const CARDS_PER_VIEW: usize = 3;

/// Period of the automatic advance timer.
pub const AUTO_ADVANCE: Duration = Duration::from_secs(3);

/// How long the sliding animation runs; snapping earlier would be visible.
pub const TRANSITION: Duration = Duration::from_millis(500);

/// Grace period before animation is turned back on after a snap.
pub const REARM: Duration = Duration::from_millis(50);

/// Logical position over the virtual tripled strip.
#[derive(Debug)]
pub struct Carousel {
    len: usize,
    index: usize,
    animated: bool,
}

impl Carousel {
    /// Starts centered on the middle copy. `len` is the source list length.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "carousel needs at least one slide");
        Self { len, index: len, animated: true }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    /// True item index within the source list.
    pub const fn slide(&self) -> usize {
        self.index % self.len
    }

    pub const fn animated(&self) -> bool {
        self.animated
    }

    pub fn next(&mut self) {
        self.index += 1;
    }

    pub fn prev(&mut self) {
        // Saturates rather than wrapping; the snap restores the middle copy.
        self.index = self.index.saturating_sub(1);
    }

    /// Whether the index has left the middle copy and needs a silent snap.
    pub const fn needs_snap(&self) -> bool {
        self.index < self.len || self.index >= 2 * self.len
    }

    /// Snaps back into the middle copy with animation suppressed. Must only
    /// run once the out-of-range slide's transition has visually completed.
    pub fn settle(&mut self) {
        if self.needs_snap() {
            self.animated = false;
            self.index = self.len + self.index % self.len;
        }
    }

    /// Re-enables animation one frame after a snap.
    pub fn rearm(&mut self) {
        self.animated = true;
    }
}

/// Manual navigation forwarded by the rendering shell.
#[derive(Clone, Copy, Debug)]
pub enum Command {
    Next,
    Prev,
}

/// One rendered frame of the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Logical index over the virtual tripled strip.
    pub index: usize,
    /// True item index within the source list.
    pub slide: usize,
    /// Whether the strip may animate this frame.
    pub animated: bool,
}

impl Frame {
    fn of(carousel: &Carousel) -> Self {
        Self { index: carousel.index(), slide: carousel.slide(), animated: carousel.animated() }
    }
}

/// Handle to a running carousel worker. Dropping it closes the command
/// channel, which ends the worker; the auto-advance ticker dies with it and
/// is never re-armed.
pub struct Rotator {
    commands: mpsc::UnboundedSender<Command>,
    frames: watch::Receiver<Frame>,
}

impl Rotator {
    /// Spawns the worker task. Must be called within a Tokio runtime.
    pub fn spawn(len: usize) -> Self {
        let carousel = Carousel::new(len);
        let (commands, rx) = mpsc::unbounded_channel();
        let (tx, frames) = watch::channel(Frame::of(&carousel));
        tokio::spawn(run(carousel, rx, tx));
        Self { commands, frames }
    }

    pub fn next(&self) {
        let _ = self.commands.send(Command::Next);
    }

    pub fn prev(&self) {
        let _ = self.commands.send(Command::Prev);
    }

    /// A fresh subscription to frame snapshots.
    pub fn frames(&self) -> watch::Receiver<Frame> {
        self.frames.clone()
    }
}

/// Pending loop-correction work, at most one stage at a time.
enum Correction {
    Idle,
    /// Waiting for the out-of-range transition to finish before snapping.
    Snap(Instant),
    /// Snapped; waiting one frame before animating again.
    Rearm(Instant),
}

impl Correction {
    const fn deadline(&self, fallback: Instant) -> Instant {
        match *self {
            Self::Idle => fallback,
            Self::Snap(at) | Self::Rearm(at) => at,
        }
    }
}

async fn run(mut carousel: Carousel, mut commands: mpsc::UnboundedReceiver<Command>, frames: watch::Sender<Frame>) {
    let mut ticker = time::interval_at(Instant::now() + AUTO_ADVANCE, AUTO_ADVANCE);
    let mut correction = Correction::Idle;
    loop {
        let now = Instant::now();
        tokio::select! {
            biased;
            command = commands.recv() => match command {
                Some(Command::Next) => carousel.next(),
                Some(Command::Prev) => carousel.prev(),
                None => break,
            },
            _ = time::sleep_until(correction.deadline(now)), if !matches!(correction, Correction::Idle) => {
                match correction {
                    Correction::Snap(_) => {
                        carousel.settle();
                        correction = Correction::Rearm(Instant::now() + REARM);
                    }
                    Correction::Rearm(_) => {
                        carousel.rearm();
                        correction = Correction::Idle;
                    }
                    Correction::Idle => unreachable!(),
                }
            }
            _ = ticker.tick() => carousel.next(),
        }

        if matches!(correction, Correction::Idle) && carousel.needs_snap() {
            correction = Correction::Snap(Instant::now() + TRANSITION);
        }

        if frames.send(Frame::of(&carousel)).is_err() {
            break;
        }
    }
}
