use std::io;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::reveal::Sequencer;
use crate::service::Classifier;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Tick cadence. Short enough that the shake reads as motion.
const TICK_RATE: Duration = Duration::from_millis(80);

pub fn run(provider: Classifier, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let demo = matches!(provider, Classifier::Mock(_));
    let events = EventHandler::new(TICK_RATE);
    let sequencer = Sequencer::new(provider, events.sender(), runtime);
    let mut app = App::new(sequencer, demo);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(service_event) => app.on_service_event(service_event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
