//! Before/after image comparison slider.
//!
//! The clip boundary is a percentage of container width. Pointer handling
//! follows the page contract: movement samples are dropped unless a drag is
//! active, and releasing anywhere (or tearing the component down) ends the
//! drag unconditionally.

use core::time::Duration;
use tokio::{
    sync::{mpsc, watch},
    time::{self, MissedTickBehavior},
};

/// Period of the autoplay sweep.
pub const AUTOPLAY_TICK: Duration = Duration::from_millis(20);

/// Position gained per autoplay tick, in percent.
pub const AUTOPLAY_STEP: f64 = 0.5;

/// Clip boundary between the before and after imagery.
#[derive(Debug)]
pub struct Slider {
    position: f64,
    dragging: bool,
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl Slider {
    /// Starts with the divider in the middle.
    pub const fn new() -> Self {
        Self { position: 50.0, dragging: false }
    }

    /// Clip boundary in `[0, 100]`.
    pub const fn position(&self) -> f64 {
        self.position
    }

    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Sets the clip boundary, clamped into `[0, 100]`. Always succeeds.
    pub fn set_position(&mut self, percentage: f64) {
        self.position = percentage.clamp(0.0, 100.0);
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Ends the drag. Unconditional so that releases outside the container
    /// and component teardown cannot leave the flag stuck.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Applies one pointer sample, converting the horizontal offset within
    /// the container to a percentage of its width. Ignored unless a drag is
    /// active or when the container has no width. Returns whether the sample
    /// moved the boundary.
    pub fn drag_to(&mut self, client_x: f64, container_left: f64, container_width: f64) -> bool {
        if !self.dragging || container_width <= 0.0 {
            return false;
        }
        self.set_position((client_x - container_left) / container_width * 100.0);
        true
    }
}

/// Pointer and playback intents forwarded by the rendering shell.
#[derive(Clone, Copy, Debug)]
pub enum Command {
    PointerDown,
    PointerMove { client_x: f64, container_left: f64, container_width: f64 },
    PointerUp,
    /// Click on the handle: restarts from zero when the sweep has finished,
    /// and toggles play/pause either way.
    HandleClick,
}

/// One rendered frame of the comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub position: f64,
    pub playing: bool,
}

/// Handle to a running autoplay worker. Dropping it closes the command
/// channel, ending the worker and its ticker regardless of drag state.
pub struct Autoplay {
    commands: mpsc::UnboundedSender<Command>,
    frames: watch::Receiver<Frame>,
}

impl Autoplay {
    /// Spawns the worker task. Must be called within a Tokio runtime.
    pub fn spawn() -> Self {
        let slider = Slider::new();
        let (commands, rx) = mpsc::unbounded_channel();
        let (tx, frames) = watch::channel(Frame { position: slider.position(), playing: false });
        tokio::spawn(run(slider, rx, tx));
        Self { commands, frames }
    }

    pub fn send(&self, command: Command) {
        let _ = self.commands.send(command);
    }

    /// A fresh subscription to frame snapshots.
    pub fn frames(&self) -> watch::Receiver<Frame> {
        self.frames.clone()
    }
}

async fn run(mut slider: Slider, mut commands: mpsc::UnboundedReceiver<Command>, frames: watch::Sender<Frame>) {
    let mut ticker = time::interval(AUTOPLAY_TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut playing = false;
    loop {
        tokio::select! {
            biased;
            command = commands.recv() => match command {
                Some(Command::PointerDown) => {
                    slider.begin_drag();
                    playing = false;
                }
                Some(Command::PointerMove { client_x, container_left, container_width }) => {
                    slider.drag_to(client_x, container_left, container_width);
                }
                Some(Command::PointerUp) => slider.end_drag(),
                Some(Command::HandleClick) => {
                    if slider.position() >= 100.0 {
                        slider.set_position(0.0);
                    }
                    playing = !playing;
                }
                None => break,
            },
            _ = ticker.tick(), if playing => {
                let next = slider.position() + AUTOPLAY_STEP;
                if next >= 100.0 {
                    slider.set_position(100.0);
                    playing = false;
                    log::debug!("autoplay sweep reached the end");
                } else {
                    slider.set_position(next);
                }
            }
        }

        if frames.send(Frame { position: slider.position(), playing }).is_err() {
            break;
        }
    }
}
