use std::io;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
};
use log::{info, warn};
use pencil_dust_config::{Config, log_path};
use pencil_dust_particles::{Animator, Signal, StrokeBuffer, StrokeLayer, to_color};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Paragraph},
};

mod host;
mod logging;

use host::{TerminalEnvironment, cell_center};

/// How long to wait for input when no frame is queued.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Some(path) = log_path() {
        if let Err(err) = logging::init(&path) {
            eprintln!("pencil-dust: logging disabled: {err:#}");
        }
    }

    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = run(terminal, &config);
    ratatui::restore();
    result
}

/// Run the app with mouse reporting switched on for its lifetime.
fn run(mut terminal: DefaultTerminal, config: &Config) -> Result<()> {
    execute!(io::stdout(), EnableMouseCapture)?;
    let size = terminal.size()?;
    let result = App::new(config, size.width, size.height).run(&mut terminal);
    let released = execute!(io::stdout(), DisableMouseCapture);
    result?;
    released?;
    Ok(())
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Host signals, frame queue and theme marker.
    env: TerminalEnvironment,
    /// The particle layer behind the overlay.
    animator: Animator<StrokeBuffer>,
    /// Overlay title.
    title: String,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal of `cols` × `rows`.
    pub fn new(config: &Config, cols: u16, rows: u16) -> Self {
        let theme = config.theme.resolve();
        info!("starting in {} mode at {:?}", theme.name(), config.frame_interval());
        Self {
            running: false,
            env: TerminalEnvironment::new(cols, rows, theme, config.frame_interval()),
            animator: config
                .seed
                .map_or_else(Animator::new, Animator::with_seed),
            title: config.title.clone(),
        }
    }

    /// Run the application's main loop.
    ///
    /// The animator is mounted for exactly the lifetime of the loop.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        self.running = true;
        self.animator.start(&mut self.env);
        let result = self.event_loop(terminal);
        self.animator.stop(&mut self.env);

        let leaked = self.env.active_subscriptions();
        if leaked > 0 {
            warn!("{leaked} subscriptions still registered after unmount");
        }
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.fire_due_frame(Instant::now());
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let theme = self.env.theme();
        let area = frame.area();

        match self.animator.surface() {
            Some(surface) => {
                frame.render_widget(StrokeLayer::new(surface, theme.paper_rgb()), area)
            }
            None => frame.render_widget(
                Block::new().style(Style::new().bg(to_color(theme.paper_rgb()))),
                area,
            ),
        }

        // Content above the particles; no fill, so strokes show around it.
        let ink = to_color(theme.ink_rgb());
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Top padding
            Constraint::Length(1), // Title
            Constraint::Fill(1),   // Bottom padding
            Constraint::Length(1), // Help text
        ])
        .split(area);

        let title = Paragraph::new(self.title.as_str())
            .style(Style::new().fg(ink).bold())
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        let help = Line::from(vec![
            "q".bold().fg(ink),
            " quit  ".fg(ink),
            "d".bold().fg(ink),
            format!(" {} mode", theme.toggle().name()).fg(ink),
        ])
        .centered();
        frame.render_widget(help, chunks[3]);
    }

    /// Wait for input until the next frame is due, then drain whatever arrived.
    fn handle_crossterm_events(&mut self) -> Result<()> {
        let timeout = self
            .env
            .next_deadline()
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(Instant::now()));

        if event::poll(timeout)? {
            self.handle_event(event::read()?);
            while self.running && event::poll(Duration::ZERO)? {
                self.handle_event(event::read()?);
            }
        }
        Ok(())
    }

    /// Route one terminal event to the animator's subscriptions or the app.
    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Moved | MouseEventKind::Drag(_),
                column,
                row,
                ..
            }) => {
                if self.env.is_listening(Signal::PointerMove) {
                    self.animator.on_pointer_move(cell_center(column, row));
                }
            }
            Event::Resize(cols, rows) => {
                let viewport = self.env.set_size(cols, rows);
                if self.env.is_listening(Signal::Resize) {
                    self.animator.on_resize(viewport);
                }
            }
            _ => {}
        }
    }

    /// Tick the animator if its frame is due at `now`.
    fn fire_due_frame(&mut self, now: Instant) {
        if let Some(handle) = self.env.take_due_frame(now) {
            self.animator.on_frame(&mut self.env, handle);
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('d')) => self.toggle_theme(),
            _ => {}
        }
    }

    /// Switch between light and dark presentation.
    fn toggle_theme(&mut self) {
        let theme = self.env.toggle_theme();
        info!("switched to {} mode", theme.name());
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
