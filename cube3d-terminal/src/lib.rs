/// Terminal front-end for the rotating wireframe cube
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{self},
};
use cube3d_core::{Config, Control, FrameOutcome, Scene};
use std::io::{self, stdout, Stdout, Write};
use std::time::Duration;

pub mod clock;
pub mod input;
pub mod renderer;

pub use clock::FrameLimiter;
pub use input::action_for;
pub use renderer::TerminalCanvas;

/// Main application struct for terminal wireframe rendering
pub struct TerminalApp<W: Write = Stdout> {
    scene: Scene,
    canvas: TerminalCanvas<W>,
    limiter: FrameLimiter,
    frame_count: u64,
    skipped_frames: u64,
}

impl TerminalApp<Stdout> {
    pub fn new(config: &Config) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self::with_writer(config, stdout(), cols as usize, rows as usize))
    }

    /// Run until a quit signal arrives, restoring the terminal afterwards
    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.main_loop();
        let restored = restore_terminal(&mut stdout(), terminal::disable_raw_mode);

        log::info!(
            "Rendered {} frames ({} skipped)",
            self.frame_count,
            self.skipped_frames
        );
        result.and(restored)
    }

    fn main_loop(&mut self) -> io::Result<()> {
        loop {
            if self.step(pending_events())? == Control::Quit {
                log::info!("Quit requested");
                return Ok(());
            }
        }
    }
}

impl<W: Write> TerminalApp<W> {
    fn with_writer(config: &Config, writer: W, cols: usize, rows: usize) -> Self {
        Self {
            scene: Scene::from_config(config),
            canvas: TerminalCanvas::new(writer, config.width, config.height, cols, rows),
            limiter: FrameLimiter::new(config.target_fps),
            frame_count: 0,
            skipped_frames: 0,
        }
    }

    /// One loop iteration: handle events, wait out the frame budget, render.
    ///
    /// Stops consuming `events` at the first quit signal and returns
    /// `Control::Quit` without rendering.
    pub fn step<I>(&mut self, events: I) -> io::Result<Control>
    where
        I: IntoIterator<Item = io::Result<Event>>,
    {
        // Handle input
        for event in events {
            let event = event?;
            if let Event::Resize(cols, rows) = event {
                self.canvas.resize(cols as usize, rows as usize);
            }
            if let Some(action) = action_for(&event) {
                if self.scene.handle(action) == Control::Quit {
                    return Ok(Control::Quit);
                }
            }
        }

        // Frame timing
        self.limiter.tick();

        // Render
        if let FrameOutcome::Skipped(_) = self.scene.render_frame(&mut self.canvas)? {
            self.skipped_frames += 1;
        }
        self.frame_count += 1;
        Ok(Control::Continue)
    }
}

/// Every terminal event already queued, without blocking
fn pending_events() -> impl Iterator<Item = io::Result<Event>> {
    std::iter::from_fn(|| match event::poll(Duration::ZERO) {
        Ok(true) => Some(event::read()),
        Ok(false) => None,
        Err(err) => Some(Err(err)),
    })
}

/// Leave raw mode and the alternate screen. Both steps run even if the
/// first fails; the first error is returned.
fn restore_terminal<W: Write>(
    writer: &mut W,
    disable_raw_mode: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(
        writer,
        DisableMouseCapture,
        terminal::LeaveAlternateScreen,
        cursor::Show
    );
    raw.and(screen)
}
