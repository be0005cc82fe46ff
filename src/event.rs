use std::io;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent};

pub enum Event {
    Key(KeyEvent),
}

/// Forwards terminal key events from a background thread.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            match event::poll(poll_interval) {
                Ok(true) => {
                    if let Ok(crossterm::event::Event::Key(key)) = event::read() {
                        if tx.send(Event::Key(key)).is_err() {
                            return;
                        }
                    }
                }
                Ok(false) => {}
                Err(err) => {
                    log::error!("terminal event poll failed: {err}");
                    return;
                }
            }
        });

        Self { rx }
    }

    /// Everything received since the last call, without blocking.
    pub fn pending(&self) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => return Ok(events),
                Err(e @ TryRecvError::Disconnected) => {
                    return Err(io::Error::new(io::ErrorKind::Other, e));
                }
            }
        }
    }
}

/// Paces frames to a target rate and measures the achieved rate.
pub struct FrameClock {
    frame_time: Duration,
    last_frame: Instant,
    fps: f32,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_time: Duration::from_secs(1) / target_fps.max(1),
            last_frame: Instant::now(),
            fps: target_fps as f32,
        }
    }

    /// Sleeps out the rest of the current frame and returns the seconds
    /// elapsed since the previous call.
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last_frame.elapsed();
        if elapsed < self.frame_time {
            thread::sleep(self.frame_time - elapsed);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.record(dt);
        dt
    }

    fn record(&mut self, dt: f32) {
        if dt > 0.0 {
            // Exponential smoothing keeps the readout steady
            self.fps = self.fps * 0.9 + (1.0 / dt) * 0.1;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }
}
