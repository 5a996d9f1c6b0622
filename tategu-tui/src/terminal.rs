//! Raw-mode terminal session with diffed output.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use tategu_slide::Rgb;

use crate::surface::Surface;
use crate::text::char_width;

pub struct Terminal {
    stdout: io::Stdout,
    current: Surface,
    previous: Surface,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Surface::new(width, height),
            previous: Surface::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Wait for terminal events: blocking on `None`, otherwise up to
    /// `timeout`. Pending events are drained in one batch.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Draw one frame: hand the cleared back surface to `draw`, then write
    /// only the cells that changed since the previous frame.
    pub fn frame(&mut self, draw: impl FnOnce(&mut Surface)) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            self.current = Surface::new(width, height);
            self.previous = Surface::new(width, height);
        }

        self.current.clear();
        draw(&mut self.current);
        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg = Rgb::new(255, 255, 255);
        let mut last_bg = Rgb::new(0, 0, 0);
        let mut last_bold = false;
        let mut last_dim = false;

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            // The wide char already painted this cell
            if cell.wide_tail {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                execute!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.style.fg != last_fg {
                execute!(
                    self.stdout,
                    SetForegroundColor(CtColor::Rgb {
                        r: cell.style.fg.r,
                        g: cell.style.fg.g,
                        b: cell.style.fg.b,
                    })
                )?;
                last_fg = cell.style.fg;
            }

            if cell.style.bg != last_bg {
                execute!(
                    self.stdout,
                    SetBackgroundColor(CtColor::Rgb {
                        r: cell.style.bg.r,
                        g: cell.style.bg.g,
                        b: cell.style.bg.b,
                    })
                )?;
                last_bg = cell.style.bg;
            }

            if cell.style.bold != last_bold || cell.style.dim != last_dim {
                execute!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                if cell.style.bold {
                    execute!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    execute!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                last_bold = cell.style.bold;
                last_dim = cell.style.dim;
            }

            write!(self.stdout, "{}", cell.ch)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.ch).max(1) as u16;
        }

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
