mod app;
mod event;
mod screens;
mod surface;
mod terminal;
mod text;
mod theme;

use std::fs::File;
use std::io;
use std::time::{Duration, Instant};

use log::error;
use simplelog::{Config, LevelFilter, WriteLogger};
use tategu_core::Catalog;

use crate::app::{App, Flow};
use crate::event::{AppEvent, map_event};
use crate::terminal::Terminal;

/// Built-in fitting catalog served to the list screen.
const FITTINGS: &str = include_str!("../data/fittings.json");

/// Redraw cadence while something on screen is animating.
const FRAME: Duration = Duration::from_millis(16);

fn main() {
    let log_file = File::create("tategu-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    // Parse before entering raw mode so a bad catalog still prints cleanly.
    let catalog = match Catalog::from_json(FITTINGS) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("embedded catalog rejected: {err}");
            eprintln!("Error: {err}");
            return;
        }
    };

    if let Err(err) = run(catalog) {
        eprintln!("Error: {err}");
    }
}

fn run(catalog: Catalog) -> io::Result<()> {
    let mut app = App::new(catalog);
    let mut terminal = Terminal::new()?;
    let (width, height) = terminal.size();
    app.handle_event(AppEvent::Resize { width, height }, Instant::now());

    loop {
        terminal.frame(|surface| app.draw(surface, Instant::now()))?;

        // Block on input when the screen is static; otherwise wake at frame
        // rate so tweens, page loads, and the hint timer keep moving.
        let timeout = app.is_animating().then_some(FRAME);
        let raw_events = terminal.poll(timeout)?;

        let now = Instant::now();
        for raw in &raw_events {
            let Some(event) = map_event(raw) else {
                continue;
            };
            if let Flow::Quit = app.handle_event(event, now) {
                return Ok(());
            }
        }
        app.tick(Instant::now());
    }
}
