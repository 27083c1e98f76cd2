use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::reveal::Effect;
use crate::service::Outcome;

/// Everything the UI loop reacts to. Terminal input and ticks come from the
/// input thread; the reveal sequencer produces the service events, tagged
/// with the attempt generation they belong to.
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize,
    /// Classification resolved for the given attempt.
    Resolved { attempt: u64, outcome: Outcome },
    /// A timeline effect reached its deadline.
    Effect { attempt: u64, effect: Effect },
    /// Classification failed before resolution.
    ClassifyFailed { attempt: u64, message: String },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                            Ok(Event::Resize(_, _)) => event_tx.send(AppEvent::Resize),
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(error = %err, "terminal event read failed");
                                break;
                            }
                        };
                        if forwarded.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "terminal event poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Clone of the producer side, handed to the sequencer.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
