//! Main Application
//!
//! The App struct owns the carousel for as long as the TUI is up:
//! - Event loop (keyboard, mouse, focus, resize)
//! - Rotation ticker mounted on start, cancelled on every exit path
//! - Mouse mapping: hover pauses, leaving resumes, clicks select
//!
//! # Event Flow
//!
//! 1. Terminal events become `CarouselEvent`s via the last frame's `HitMap`
//! 2. Ticks arrive on the same channel from the ticker task
//! 3. Every event is applied to the `Carousel`, then the frame is redrawn
//! 4. While a slide is in flight, frames are paced at ~30 FPS

use std::io;
use std::time::{Duration, Instant};

use carousel_core::{
    aria_current, Accessible, Carousel, CarouselConfig, CarouselEvent, LayoutMode, StepDirection,
    TickerHandle,
};
use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;

use crate::theme::{BLUSH, TEXT_SECONDARY};
use crate::widgets::{CarouselView, HitMap, CAROUSEL_HEIGHT};

/// Capacity of the carousel event channel
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Frame pacing while a slide transition is running (~30 FPS)
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    /// The carousel being shown
    carousel: Carousel,

    // === Timer ===
    /// Sender handed to the ticker on mount
    events_tx: mpsc::Sender<CarouselEvent>,
    /// Ticks from the ticker task
    events_rx: mpsc::Receiver<CarouselEvent>,
    /// Running ticker, if mounted
    ticker: Option<TickerHandle>,

    // === Pointer State ===
    /// Layout of the last rendered frame
    hits: HitMap,
    /// Whether the pointer is currently over the carousel region
    pointer_inside: bool,
    /// Indicator under the pointer
    hovered_indicator: Option<usize>,

    /// Terminal size
    size: (u16, u16),
}

impl App {
    /// Create a new App for a terminal of `size` (columns, rows)
    pub fn new(config: CarouselConfig, size: (u16, u16)) -> Self {
        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        tracing::info!(
            layout = %config.layout,
            tick_ms = config.tick_interval.as_millis(),
            source = %config.source(),
            "Creating carousel"
        );

        Self {
            running: true,
            carousel: Carousel::with_buddies(config),
            events_tx,
            events_rx,
            ticker: None,
            hits: HitMap::default(),
            pointer_inside: false,
            hovered_indicator: None,
            size,
        }
    }

    /// The carousel (for inspection)
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Whether the event loop should keep going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a ticker is mounted
    pub fn is_mounted(&self) -> bool {
        self.ticker.is_some()
    }

    /// Terminal size as of the last resize or draw
    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    /// Layout of the last rendered frame
    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    /// Start the rotation timer (needs a tokio runtime)
    pub fn mount(&mut self) {
        if self.ticker.is_none() {
            self.ticker = self.carousel.mount(self.events_tx.clone());
        }
    }

    /// Stop the rotation timer and discard ticks it already queued
    pub fn unmount(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
        while self.events_rx.try_recv().is_ok() {}
    }

    /// Ticks waiting to be applied
    pub fn queued_events(&self) -> usize {
        self.events_rx.len()
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // Create async event stream for non-blocking terminal events
        let mut event_stream = EventStream::new();

        self.mount();
        let result = self.event_loop(terminal, &mut event_stream).await;

        self.unmount();
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        event_stream: &mut EventStream,
    ) -> anyhow::Result<()> {
        // Render initial frame immediately so user sees UI
        terminal.draw(|frame| self.draw(frame))?;

        while self.running {
            let animating = self.carousel.is_animating(Instant::now());

            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => return Err(e.into()),
                        None => self.running = false,
                    }
                }

                // Ticks from the rotation timer
                Some(event) = self.events_rx.recv() => {
                    self.apply(event);
                }

                // Frame pacing for the slide transition
                () = tokio::time::sleep(FRAME_DURATION), if animating => {}
            }

            terminal.draw(|frame| self.draw(frame))?;
        }

        Ok(())
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => self.pointer_left(),
            Event::Resize(w, h) => self.handle_resize(w, h),
            _ => {}
        }
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            // Quit
            KeyCode::Esc | KeyCode::Char('q') => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }

            // Browse
            KeyCode::Left | KeyCode::Char('h') => {
                self.apply(CarouselEvent::Step(StepDirection::Previous));
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.apply(CarouselEvent::Step(StepDirection::Next));
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < self.carousel.items().len() {
                    self.apply(CarouselEvent::Select(index));
                }
            }

            _ => {}
        }
    }

    /// Handle mouse input
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if self.hits.region_contains(x, y) {
                    self.pointer_entered();
                } else {
                    self.pointer_left();
                }
                self.hovered_indicator = self.hits.indicator_at(x, y);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.hits.indicator_at(x, y) {
                    self.apply(CarouselEvent::Select(index));
                } else if self.carousel.config().layout == LayoutMode::FullRow {
                    if let Some(index) = self.hits.tile_at(x, y) {
                        self.apply(CarouselEvent::Select(index));
                    }
                }
            }
            _ => {}
        }
    }

    fn pointer_entered(&mut self) {
        if !self.pointer_inside {
            self.pointer_inside = true;
            self.apply(CarouselEvent::PointerEnter);
        }
    }

    fn pointer_left(&mut self) {
        self.hovered_indicator = None;
        if self.pointer_inside {
            self.pointer_inside = false;
            self.apply(CarouselEvent::PointerLeave);
        }
    }

    /// Handle terminal resize
    fn handle_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        tracing::debug!(width, height, "Terminal resized");
    }

    /// Apply a carousel event
    fn apply(&mut self, event: CarouselEvent) {
        self.carousel.handle(event, Instant::now());
    }

    /// Carousel area: full width, vertically centred above the status line
    fn carousel_area(&self, area: Rect) -> Rect {
        let usable = area.height.saturating_sub(1);
        let height = CAROUSEL_HEIGHT.min(usable);
        Rect::new(area.x, area.y + (usable - height) / 2, area.width, height)
    }

    /// Render the UI
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.size = (area.width, area.height);

        let buf = frame.buffer_mut();
        buf.set_style(area, Style::default().bg(BLUSH));

        let carousel_area = self.carousel_area(area);
        let view = CarouselView::new(&self.carousel, Instant::now())
            .hovered_indicator(self.hovered_indicator);
        frame.render_stateful_widget(view, carousel_area, &mut self.hits);

        if area.height > 0 {
            let status = self.status_line();
            frame.buffer_mut().set_stringn(
                area.x,
                area.bottom() - 1,
                &status,
                usize::from(area.width),
                Style::default().fg(TEXT_SECONDARY).bg(BLUSH),
            );
        }
    }

    /// Status bar text
    fn status_line(&self) -> String {
        let hover = self
            .hovered_indicator
            .and_then(|index| self.carousel.indicators().get(index).copied())
            .and_then(|indicator| {
                let current = aria_current(&indicator).map_or("", |_| " (current)");
                indicator
                    .accessible_label()
                    .map(|label| format!(" | {label}{current}"))
            })
            .unwrap_or_default();

        format!(
            " {} | \u{2190}/\u{2192} browse | click a dot | Esc to quit{}",
            self.carousel.state().description(),
            hover
        )
    }
}
