use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// Terminal events
#[derive(Clone, Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize event
    Resize(u16, u16),
    /// Tick event carrying the time since the previous tick
    Tick(Duration),
}

/// Event handler that listens for keyboard events and emits ticks
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    _handler: thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate);
        let (sender, receiver) = mpsc::channel();
        let handler = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                // The receiver going away or the terminal failing ends the loop.
                match event::poll(timeout) {
                    Ok(true) => {
                        let sent = match event::read() {
                            Ok(CrosstermEvent::Key(e)) if e.kind == event::KeyEventKind::Press => {
                                sender.send(Event::Key(e))
                            }
                            Ok(CrosstermEvent::Resize(w, h)) => sender.send(Event::Resize(w, h)),
                            Ok(_) => Ok(()),
                            Err(_) => break,
                        };
                        if sent.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(_) => break,
                }

                let elapsed = last_tick.elapsed();
                if elapsed >= tick_rate {
                    if sender.send(Event::Tick(elapsed)).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });
        Self {
            receiver,
            _handler: handler,
        }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}
