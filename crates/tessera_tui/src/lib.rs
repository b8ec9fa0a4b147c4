pub mod views;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

/// Default redraw cadence, roughly 60 frames per second.
pub const DEFAULT_FRAME: Duration = Duration::from_millis(16);

/// Terminal session for the simulators: alternate screen, raw mode and a
/// fixed redraw cadence that bounds input latency.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    frame: Duration,
    active: bool,
}

impl Tui {
    pub fn new(frame: Duration) -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            frame: frame.max(Duration::from_millis(1)),
            active: false,
        })
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    pub fn init(&mut self) -> Result<()> {
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        enable_raw_mode()?;
        self.active = true;
        self.terminal.clear()?;
        Ok(())
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Waits for a key press until the next simulation tick is due, but no
    /// longer than one frame. Releases and repeats are dropped.
    pub fn next_key(&self, until_tick: Duration) -> Result<Option<KeyEvent>> {
        if !event::poll(poll_timeout(until_tick, self.frame))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        }
    }
}

fn poll_timeout(until_tick: Duration, frame: Duration) -> Duration {
    until_tick.min(frame)
}
