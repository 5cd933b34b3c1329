//! Sky Dive Dan entry point
//!
//! Runs the simulation in a terminal: sets up raw mode, reads at most one
//! key press per frame and draws each frame's snapshot.

#[cfg(not(target_arch = "wasm32"))]
mod display;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io::{BufWriter, Write, stdout};
    use std::path::PathBuf;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Instant;

    use crossterm::{
        ExecutableCommand, cursor,
        event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
        terminal,
    };

    use skydive::sim::WallClock;
    use skydive::{Flow, InputEvent, Key, Settings};

    use crate::display;

    /// What one frame's input asks for
    enum FrameInput {
        Quit,
        Event(Option<InputEvent>),
    }

    /// Send log output to `$SKYDIVE_LOG` if set; stderr would scribble over the game
    fn init_logging() {
        let mut builder = env_logger::Builder::from_default_env();
        if let Some(path) = std::env::var_os("SKYDIVE_LOG") {
            match std::fs::File::create(&path) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Err(e) => eprintln!("cannot open log file {:?}: {}", path, e),
            }
        }
        builder.init();
    }

    /// Take the first key press waiting in the queue; later ones wait for later frames
    fn poll_input(rx: &mpsc::Receiver<Event>) -> FrameInput {
        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            else {
                continue;
            };
            if kind == KeyEventKind::Release {
                continue;
            }

            let key = match code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return FrameInput::Quit,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return FrameInput::Quit;
                }
                KeyCode::Left => Key::Left,
                KeyCode::Right => Key::Right,
                _ => Key::Other,
            };
            return FrameInput::Event(Some(InputEvent::KeyDown(key)));
        }
        FrameInput::Event(None)
    }

    fn game_loop<W: Write>(
        out: &mut W,
        settings: &Settings,
        rx: &mpsc::Receiver<Event>,
    ) -> std::io::Result<()> {
        let seed = settings.resolve_seed();
        log::info!("Game initialized with seed: {}", seed);

        let clock = WallClock::new();
        let mut flow = if settings.intro {
            Flow::with_intro(settings.width, settings.height, seed, clock)
        } else {
            Flow::playing(settings.width, settings.height, seed, clock)
        };
        let frame = settings.frame_duration();

        loop {
            let frame_start = Instant::now();

            let event = match poll_input(rx) {
                FrameInput::Quit => break,
                FrameInput::Event(event) => event,
            };

            if let Some(report) = flow.step(event) {
                if report.big_combo {
                    log::info!("Big combo!");
                }
            }

            display::render(out, &flow.view())?;

            let elapsed = frame_start.elapsed();
            if elapsed < frame {
                thread::sleep(frame - elapsed);
            }
        }

        if let Some(scene) = flow.scene() {
            log::info!(
                "Final score {} after {} waves",
                scene.state().score(),
                scene.state().wave()
            );
        }
        Ok(())
    }

    pub fn run() -> std::io::Result<()> {
        init_logging();
        log::info!("Sky Dive Dan starting...");

        let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
        let settings = Settings::load(settings_path.as_deref());

        let mut out = BufWriter::new(stdout());
        terminal::enable_raw_mode()?;
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;

        // Blocking reads live on their own thread so the frame loop never stalls
        let (tx, rx) = mpsc::channel::<Event>();
        thread::spawn(move || {
            while let Ok(ev) = event::read() {
                if tx.send(ev).is_err() {
                    break;
                }
            }
        });

        let result = game_loop(&mut out, &settings, &rx);

        // Always restore the terminal
        let _ = out.execute(cursor::Show);
        let _ = out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();

        result
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No terminal front end on the web
}
