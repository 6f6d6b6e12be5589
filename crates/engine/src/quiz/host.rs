use super::{Effect, Session, View};
use tokio::{
    sync::{mpsc, watch},
    time::{self, Instant},
};

/// Player intents forwarded by the rendering shell.
#[derive(Clone, Copy, Debug)]
pub enum Command {
    Select(usize),
    Advance,
    Restart,
}

/// Handle to a running quiz worker.
///
/// The worker owns the [`Session`] exclusively; dropping the handle closes
/// the command channel, which ends the worker and disarms any pending
/// summary timer.
pub struct Host {
    commands: mpsc::UnboundedSender<Command>,
    views: watch::Receiver<View>,
}

impl Host {
    /// Spawns the worker task. Must be called within a Tokio runtime.
    pub fn spawn(session: Session) -> Self {
        let (commands, rx) = mpsc::unbounded_channel();
        let (tx, views) = watch::channel(session.view());
        tokio::spawn(run(session, rx, tx));
        Self { commands, views }
    }

    pub fn select(&self, option: usize) {
        let _ = self.commands.send(Command::Select(option));
    }

    pub fn advance(&self) {
        let _ = self.commands.send(Command::Advance);
    }

    pub fn restart(&self) {
        let _ = self.commands.send(Command::Restart);
    }

    /// A fresh subscription to view snapshots.
    pub fn views(&self) -> watch::Receiver<View> {
        self.views.clone()
    }
}

async fn run(mut session: Session, mut commands: mpsc::UnboundedReceiver<Command>, views: watch::Sender<View>) {
    // Deadline for committing the summary after the last answer.
    let mut finale: Option<Instant> = None;
    loop {
        let command = if let Some(at) = finale {
            tokio::select! {
                biased;
                command = commands.recv() => match command {
                    Some(command) => command,
                    None => break,
                },
                _ = time::sleep_until(at) => {
                    finale = None;
                    session.finish();
                    log::info!("quiz completed with score {}/{}", session.score(), session.total());
                    if views.send(session.view()).is_err() {
                        break;
                    }
                    continue;
                }
            }
        } else {
            match commands.recv().await {
                Some(command) => command,
                None => break,
            }
        };

        let effect = match command {
            Command::Select(option) => match session.select_answer(option) {
                Ok(effect) => effect,
                Err(err) => {
                    log::debug!("selection rejected: {err}");
                    Effect::None
                }
            },
            Command::Advance => match session.advance() {
                Ok(()) => Effect::None,
                Err(err) => {
                    log::debug!("advance rejected: {err}");
                    Effect::None
                }
            },
            Command::Restart => session.restart(),
        };

        match effect {
            Effect::None => {}
            Effect::Finale(delay) => finale = Some(Instant::now() + delay),
            Effect::Disarm => finale = None,
        }

        if views.send(session.view()).is_err() {
            break;
        }
    }
}
