//! Integration Tests for the TUI surface
//!
//! These tests render the app into a ratatui `TestBackend` and then feed it
//! terminal events the way crossterm would, checking that:
//! - The region label, caption and indicators are on screen
//! - Hovering the carousel pauses it and leaving resumes it
//! - Clicking dots (and tiles, in the full-row layout) selects
//! - Keys browse and quit

use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use buddy_carousel_tui::App;
use carousel_core::{CarouselConfig, RotationState};

const WIDTH: u16 = 90;
const HEIGHT: u16 = 24;

// ============================================================================
// Helpers
// ============================================================================

fn draw(app: &mut App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

fn screen_text(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| row_text(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_initial_frame_shows_label_caption_and_dots() {
    let mut app = App::new(CarouselConfig::windowed(), (WIDTH, HEIGHT));
    let buf = draw(&mut app);
    let screen = screen_text(&buf);

    assert!(screen.contains("Meet your potential buddies"));
    assert!(screen.contains("Red Panda"));
    assert_eq!(screen.matches('●').count(), 9);
    assert!(row_text(&buf, HEIGHT - 1).contains("rotating"));
}

#[test]
fn test_only_active_buddy_is_captioned() {
    let mut app = App::new(CarouselConfig::windowed(), (WIDTH, HEIGHT));
    let screen = screen_text(&draw(&mut app));

    // Neighbours in the window are drawn as tiles but not named
    for hidden in ["Ghost", "Narwhal", "Quokka", "Koala"] {
        assert!(!screen.contains(hidden), "{hidden} should not be captioned");
    }
}

#[test]
fn test_full_row_draws_a_tile_per_buddy() {
    let mut app = App::new(CarouselConfig::full_row(), (WIDTH, HEIGHT));
    draw(&mut app);

    for index in 0..9 {
        assert!(app.hits().tile_rect(index).is_some(), "tile {index}");
    }
}

// ============================================================================
// Pointer
// ============================================================================

#[test]
fn test_hover_pauses_and_leave_resumes() {
    let mut app = App::new(CarouselConfig::windowed(), (WIDTH, HEIGHT));
    draw(&mut app);
    let region = app.hits().region;

    app.handle_event(mouse(MouseEventKind::Moved, region.x + 3, region.y + 2));
    assert_eq!(app.carousel().state(), RotationState::Paused);

    // Moving within the region doesn't toggle anything
    app.handle_event(mouse(MouseEventKind::Moved, region.x + 10, region.y + 4));
    assert_eq!(app.carousel().state(), RotationState::Paused);

    app.handle_event(mouse(MouseEventKind::Moved, 0, HEIGHT - 1));
    assert_eq!(app.carousel().state(), RotationState::Running);
}

#[test]
fn test_focus_lost_counts_as_leaving() {
    let mut app = App::new(CarouselConfig::windowed(), (WIDTH, HEIGHT));
    draw(&mut app);
    let region = app.hits().region;

    app.handle_event(mouse(MouseEventKind::Moved, region.x + 1, region.y + 1));
    assert!(app.carousel().is_paused());
    app.handle_event(Event::FocusLost);
    assert!(!app.carousel().is_paused());
}

#[test]
fn test_clicking_a_dot_selects_without_resuming() {
    let mut app = App::new(CarouselConfig::windowed(), (WIDTH, HEIGHT));
    draw(&mut app);
    let dot = app.hits().indicator_rect(5).unwrap();

    app.handle_event(mouse(MouseEventKind::Moved, dot.x, dot.y));
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), dot.x, dot.y));
    assert_eq!(app.carousel().active_index(), Some(5));
    assert!(app.carousel().is_paused());

    let buf = draw(&mut app);
    assert!(row_text(&buf, HEIGHT - 1).contains("View Bear (current)"));
    assert!(row_text(&buf, HEIGHT - 1).contains("paused"));
}

#[test]
fn test_hovering_a_dot_shows_its_label() {
    let mut app = App::new(CarouselConfig::windowed(), (WIDTH, HEIGHT));
    draw(&mut app);
    let dot = app.hits().indicator_rect(2).unwrap();

    app.handle_event(mouse(MouseEventKind::Moved, dot.x, dot.y));
    let buf = draw(&mut app);
    let status = row_text(&buf, HEIGHT - 1);
    assert!(status.contains("View Koala"));
    assert!(!status.contains("(current)"));
}

#[test]
fn test_tile_click_selects_only_in_full_row() {
    let mut windowed = App::new(CarouselConfig::windowed(), (WIDTH, HEIGHT));
    draw(&mut windowed);
    let tile = windowed.hits().tile_rect(1).unwrap();
    windowed.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), tile.x + 1, tile.y + 1));
    assert_eq!(windowed.carousel().active_index(), Some(0));

    let mut row = App::new(CarouselConfig::full_row(), (WIDTH, HEIGHT));
    draw(&mut row);
    let tile = row.hits().tile_rect(6).unwrap();
    let (x, y) = (tile.x + tile.width / 2, tile.y + tile.height / 2);
    assert_eq!(row.hits().tile_at(x, y), Some(6));
    row.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), x, y));
    assert_eq!(row.carousel().active_index(), Some(6));
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_arrow_keys_and_digits_browse() {
    let mut app = App::new(CarouselConfig::windowed(), (WIDTH, HEIGHT));

    app.handle_event(key(KeyCode::Left));
    assert_eq!(app.carousel().active_index(), Some(8));
    app.handle_event(key(KeyCode::Right));
    app.handle_event(key(KeyCode::Right));
    assert_eq!(app.carousel().active_index(), Some(1));
    app.handle_event(key(KeyCode::Char('7')));
    assert_eq!(app.carousel().active_index(), Some(6));
    assert_eq!(app.carousel().state(), RotationState::Running);
}

#[test]
fn test_quit_keys() {
    let mut app = App::new(CarouselConfig::default(), (WIDTH, HEIGHT));
    app.handle_event(key(KeyCode::Char('q')));
    assert!(!app.is_running());

    let mut app = App::new(CarouselConfig::default(), (WIDTH, HEIGHT));
    app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!app.is_running());
}

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test]
async fn test_mount_and_unmount() {
    let mut app = App::new(CarouselConfig::default(), (WIDTH, HEIGHT));
    assert!(!app.is_mounted());
    app.mount();
    assert!(app.is_mounted());
    app.unmount();
    assert!(!app.is_mounted());
}

#[tokio::test(start_paused = true)]
async fn test_unmount_discards_queued_ticks() {
    let config = CarouselConfig::windowed().with_tick_interval(Duration::from_millis(100));
    let mut app = App::new(config, (WIDTH, HEIGHT));
    app.mount();

    // Nobody drains the channel while the clock runs past a few periods
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert!(app.queued_events() > 0);

    app.unmount();
    assert_eq!(app.queued_events(), 0);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(app.queued_events(), 0);
    assert_eq!(app.carousel().active_index(), Some(0));
}

#[test]
fn test_resize_is_tracked() {
    let mut app = App::new(CarouselConfig::default(), (WIDTH, HEIGHT));
    app.handle_event(Event::Resize(120, 40));
    assert_eq!(app.size(), (120, 40));
}
