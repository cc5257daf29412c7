mod cli;
mod glitch;
mod logging;
mod page;
mod terminal;
mod titan;

use std::io::stdout;
use std::time::{Duration, Instant};

use chrono::Utc;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
};
use fastrand::Rng;
use hawiyat_background::BackgroundState;
use hawiyat_config::{Config, ConfigSource};
use hawiyat_core::{
    AnimationSpeed, BackgroundStyle, Countdown, FrameClock, Point, Scheduler, ScrollMapper,
    TimerId,
};
use ratatui::{DefaultTerminal, Frame};

use crate::cli::Cli;
use crate::glitch::GlitchText;
use crate::page::{Document, PageContent, Scroll, Section, SmoothProgress};
use crate::terminal::{BLINK_MS, HackerTerminal, TYPE_MS};
use crate::titan::{LIGHTNING_PERIOD_MS, TitanReveal};

/// Rows moved per arrow key or wheel notch.
const SCROLL_STEP: i32 = 3;

/// How long the loading overlay stays up.
const LOADING_MS: u64 = 1200;

const COUNTDOWN_MS: u64 = 1000;

/// How long a flipped countdown unit stays highlighted.
const FLIP_MS: u64 = 500;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let (mut config, source) = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);

    if cli.write_config {
        let path = match &cli.config {
            Some(path) => {
                config.save_to(path)?;
                path.clone()
            }
            None => config.save()?,
        };
        println!("wrote {}", path.display());
        return Ok(());
    }

    logging::init(&config.log.level, config.log_path().as_deref())?;
    report_config_source(&source);
    let seed = config.animation.seed.unwrap_or_else(|| fastrand::u64(..));
    tracing::info!(seed, fps = config.animation.fps, "starting");

    let terminal = ratatui::init();
    let result = run(config, seed, terminal);
    ratatui::restore();
    result
}

fn report_config_source(source: &ConfigSource) {
    match source {
        ConfigSource::File(path) => tracing::debug!(path = %path.display(), "loaded config"),
        ConfigSource::Missing(path) => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
        }
        ConfigSource::NoConfigDir => tracing::warn!("no config directory, using defaults"),
    }
}

fn run(config: Config, seed: u64, terminal: DefaultTerminal) -> color_eyre::Result<()> {
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;
    let result = App::new(config, seed).run(terminal);
    execute!(stdout(), DisableMouseCapture, DisableFocusChange)?;
    result
}

/// Timers the app registers.
#[derive(Debug, Clone, Copy)]
struct Timers {
    countdown: TimerId,
    blink: TimerId,
    hero_glitch: TimerId,
    platform_glitch: TimerId,
    titan_glitch: TimerId,
    lightning: TimerId,
    typing: Option<TimerId>,
    loading: Option<TimerId>,
    loading_glitch: Option<TimerId>,
    flip: Option<TimerId>,
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    style: BackgroundStyle,
    speed: AnimationSpeed,
    rng: Rng,
    clock: FrameClock,
    scheduler: Scheduler,
    timers: Option<Timers>,
    background: BackgroundState,
    countdown: Countdown,
    hero_title: GlitchText,
    platform_title: GlitchText,
    loading_title: GlitchText,
    terminal: HackerTerminal,
    terminal_focused: bool,
    titan: TitanReveal,
    /// Mapper for the titan section, from the last built page.
    titan_mapper: Option<ScrollMapper>,
    /// First row of the terminal section in the last built page.
    terminal_row: Option<u16>,
    scroll: Scroll,
    progress: SmoothProgress,
    loading: bool,
    /// Screen rows at the last frame.
    screen_rows: u16,
    now_ms: u64,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, seed: u64) -> Self {
        let mut rng = Rng::with_seed(seed);
        let titan = TitanReveal::new(&mut rng);
        Self {
            running: false,
            style: config.animation.background,
            speed: config.animation.speed,
            countdown: Countdown::new(config.countdown.target),
            config,
            background: BackgroundState::new(rng.u64(..)),
            rng,
            clock: FrameClock::new(),
            scheduler: Scheduler::new(),
            timers: None,
            hero_title: GlitchText::new("ATTACK ON HAWIYAT", 2.0),
            platform_title: GlitchText::new("THE HAWIYAT PLATFORM", 1.5),
            loading_title: GlitchText::new("INITIALIZING SECURITY BREACH PROTOCOL...", 1.0),
            terminal: HackerTerminal::new(),
            terminal_focused: false,
            titan,
            titan_mapper: None,
            terminal_row: None,
            scroll: Scroll::default(),
            progress: SmoothProgress::default(),
            loading: true,
            screen_rows: 0,
            now_ms: 0,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let started = Instant::now();
        self.start(0);
        while self.running {
            self.update(started.elapsed().as_millis() as u64);
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        self.shutdown();
        Ok(())
    }

    /// Register every timer and take the first countdown reading.
    fn start(&mut self, now_ms: u64) {
        self.running = true;
        self.now_ms = now_ms;
        let flips = self.countdown.tick(Utc::now());

        let scheduler = &mut self.scheduler;
        self.timers = Some(Timers {
            countdown: scheduler.register_interval(COUNTDOWN_MS, now_ms),
            blink: scheduler.register_interval(BLINK_MS, now_ms),
            hero_glitch: scheduler.register_interval(self.hero_title.period_ms(), now_ms),
            platform_glitch: scheduler.register_interval(self.platform_title.period_ms(), now_ms),
            titan_glitch: scheduler
                .register_interval(self.titan.headline_mut().period_ms(), now_ms),
            lightning: scheduler.register_interval(LIGHTNING_PERIOD_MS, now_ms),
            typing: Some(scheduler.register_interval(TYPE_MS, now_ms)),
            loading: Some(scheduler.register_timeout(LOADING_MS, now_ms)),
            loading_glitch: Some(
                scheduler.register_interval(self.loading_title.period_ms(), now_ms),
            ),
            flip: flips
                .any()
                .then(|| scheduler.register_timeout(FLIP_MS, now_ms)),
        });
        tracing::debug!(timers = self.scheduler.len(), "timers registered");
    }

    /// Advance everything to `now_ms`.
    fn update(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        let tick = self.clock.tick(now_ms);
        for id in self.scheduler.poll(now_ms) {
            self.on_timer(id, now_ms);
        }
        self.background
            .advance(tick.delta_ms * self.speed.multiplier(), self.style);
        self.progress.advance(self.scroll.progress(), tick.delta_ms);
    }

    fn on_timer(&mut self, id: TimerId, now_ms: u64) {
        let Some(timers) = self.timers.as_mut() else {
            return;
        };

        if id == timers.countdown {
            if self.countdown.tick(Utc::now()).any() {
                if let Some(flip) = timers.flip.take() {
                    self.scheduler.cancel(flip);
                }
                timers.flip = Some(self.scheduler.register_timeout(FLIP_MS, now_ms));
            }
        } else if Some(id) == timers.flip {
            timers.flip = None;
            self.countdown.settle();
        } else if Some(id) == timers.typing {
            if !self.terminal.type_banner() {
                self.scheduler.cancel(id);
                timers.typing = None;
            }
        } else if id == timers.blink {
            self.terminal.blink();
        } else if id == timers.hero_glitch {
            self.hero_title.roll(now_ms, &mut self.rng);
        } else if id == timers.platform_glitch {
            self.platform_title.roll(now_ms, &mut self.rng);
        } else if id == timers.titan_glitch {
            self.titan.headline_mut().roll(now_ms, &mut self.rng);
        } else if id == timers.lightning {
            self.titan.roll_lightning(now_ms, &mut self.rng);
        } else if Some(id) == timers.loading_glitch {
            self.loading_title.roll(now_ms, &mut self.rng);
        } else if Some(id) == timers.loading {
            timers.loading = None;
            if let Some(glitch) = timers.loading_glitch.take() {
                self.scheduler.cancel(glitch);
            }
            self.loading = false;
            tracing::debug!(now_ms, "loading finished");
        }
    }

    fn shutdown(&mut self) {
        self.scheduler.cancel_all();
        self.timers = None;
        tracing::info!("shutting down");
    }

    fn page_content(&self, width: u16, rows: u16) -> PageContent<'_> {
        PageContent {
            width,
            viewport_rows: rows,
            scroll_row: self.scroll.offset(),
            now_ms: self.now_ms,
            platform_url: &self.config.platform_url,
            countdown: &self.countdown,
            hero_title: &self.hero_title,
            platform_title: &self.platform_title,
            terminal: &self.terminal,
            terminal_focused: self.terminal_focused,
        }
    }

    /// Lay the page out for a `width` × `rows` screen and refresh everything
    /// derived from the layout.
    fn layout(&mut self, width: u16, rows: u16) -> Document {
        self.screen_rows = rows;
        let document = Document::build(&self.page_content(width, rows));
        self.scroll.set_bounds(document.height(), rows);
        self.titan_mapper =
            page::titan_bounds(&document).map(|(top, height)| ScrollMapper::new(top, height));
        self.terminal_row = document.span(Section::Terminal).map(|span| span.top);
        self.sync_scroll();
        document
    }

    /// Recompute scroll-derived state.
    fn sync_scroll(&mut self) {
        if let Some(mapper) = self.titan_mapper {
            self.titan.update_scroll(mapper.state(self.scroll.units()));
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let document = self.layout(area.width, area.height);

        self.background.render(frame, area, self.style);
        document.render(frame, area, self.scroll.offset());

        let url = self.config.platform_url.as_str();
        if self.titan.is_active() {
            self.titan.render(frame, area, self.now_ms, url);
        } else if let Some(rect) = document
            .span(Section::TitanReveal)
            .and_then(|span| span.visible_in(self.scroll.offset(), area))
        {
            self.titan.render(frame, rect, self.now_ms, url);
        }

        page::render_progress_bar(frame, area, self.progress.value());
        if !self.terminal_focused {
            page::render_help(frame, area, self.style.label(), self.speed.label());
        }
        if self.loading {
            page::render_loading(frame, area, &self.loading_title, self.now_ms);
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(self.config.animation.frame_ms()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::FocusLost => self.background.set_pointer(None),
                Event::Resize(_, _) => self.sync_scroll(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }

        if self.terminal_focused {
            match key.code {
                KeyCode::Esc => self.terminal_focused = false,
                KeyCode::Enter => self.terminal.submit(),
                KeyCode::Backspace => self.terminal.backspace(),
                KeyCode::Char(ch) => self.terminal.push_char(ch),
                _ => {}
            }
            return;
        }

        let screen = self.screen_rows.max(1) as i32;
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Tab => self.focus_terminal(),
            KeyCode::Char('b') => self.cycle_background(),
            KeyCode::Char('s') => self.cycle_speed(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-SCROLL_STEP),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(SCROLL_STEP),
            KeyCode::PageUp => self.scroll_by(-screen),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(screen),
            KeyCode::Home => {
                self.scroll.to_top();
                self.sync_scroll();
            }
            KeyCode::End => {
                self.scroll.to_bottom();
                self.sync_scroll();
            }
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.background
                    .set_pointer(Some(Point::from_cell(mouse.column, mouse.row)));
            }
            MouseEventKind::ScrollUp => self.scroll_by(-SCROLL_STEP),
            MouseEventKind::ScrollDown => self.scroll_by(SCROLL_STEP),
            _ => {}
        }
    }

    fn scroll_by(&mut self, rows: i32) {
        self.scroll.scroll_by(rows);
        self.sync_scroll();
    }

    /// Bring the terminal into view and send keys to it.
    fn focus_terminal(&mut self) {
        self.terminal_focused = true;
        if let Some(row) = self.terminal_row {
            self.scroll.scroll_to(row);
            self.sync_scroll();
        }
    }

    /// Cycle through background layer combinations.
    fn cycle_background(&mut self) {
        self.style = self.style.next();
        tracing::debug!(style = self.style.label(), "background changed");
    }

    fn cycle_speed(&mut self) {
        self.speed = self.speed.next();
        tracing::debug!(speed = self.speed.label(), "animation speed changed");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
