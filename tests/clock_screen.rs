//! Integration tests for the clock screen, rendered through a test terminal.

use chrono::NaiveTime;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use timeview::layout::ScreenLayout;
use timeview::screens::clock::TIME_PREFIX;
use timeview::{Clock, ClockScreen, FixedClock, Screen};

fn fixed_screen(h: u32, m: u32, s: u32) -> ClockScreen<FixedClock> {
    let time = NaiveTime::from_hms_opt(h, m, s).unwrap();
    ClockScreen::with_clock(FixedClock(time)).unwrap()
}

/// Render the screen into a test terminal and return the buffer as one string.
fn render_to_text<C: Clock>(screen: &mut ClockScreen<C>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    let mut render_result = Ok(());
    terminal
        .draw(|frame| {
            let area = frame.area();
            render_result = screen.render(frame, area);
        })
        .unwrap();
    render_result.unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

/// Pull the `HH:MM:SS` suffix that follows the prefix out of rendered text.
fn time_suffix(text: &str) -> &str {
    let start = text.find(TIME_PREFIX).expect("prefix not rendered") + TIME_PREFIX.len();
    &text[start..start + 8]
}

#[test]
fn fixed_clock_renders_the_exact_text() {
    let mut screen = fixed_screen(14, 5, 9);
    screen.on_enter().unwrap();
    let text = render_to_text(&mut screen);
    assert!(text.contains("The current local time is: 14:05:09"));
}

#[test]
fn rendered_suffix_is_a_valid_time_of_day() {
    let mut screen = ClockScreen::new().unwrap();
    screen.on_enter().unwrap();
    let text = render_to_text(&mut screen);
    let suffix = time_suffix(&text);
    let parsed = NaiveTime::parse_from_str(suffix, "%H:%M:%S");
    assert!(parsed.is_ok(), "rendered suffix {suffix:?} is not a time");
}

#[test]
fn display_is_a_snapshot_not_a_live_clock() {
    let mut screen = ClockScreen::new().unwrap();
    screen.on_enter().unwrap();
    let first = render_to_text(&mut screen);
    std::thread::sleep(std::time::Duration::from_millis(20));
    let second = render_to_text(&mut screen);
    // No re-activation happened, so the text must be byte-identical
    assert_eq!(time_suffix(&first), time_suffix(&second));
}

#[test]
fn successive_activations_are_non_decreasing() {
    let mut screen = ClockScreen::new().unwrap();
    screen.on_enter().unwrap();
    let first = NaiveTime::parse_from_str(time_suffix(&render_to_text(&mut screen)), "%H:%M:%S")
        .unwrap();
    screen.on_enter().unwrap();
    let second = NaiveTime::parse_from_str(time_suffix(&render_to_text(&mut screen)), "%H:%M:%S")
        .unwrap();
    assert!(second >= first);
}

#[test]
fn missing_widget_identifier_fails_fast() {
    let layout = ScreenLayout::inflate(&[]);
    assert!(layout.find_label("time_text").is_err());
}

#[test]
fn rendering_before_activation_is_an_error() {
    let mut screen = fixed_screen(0, 0, 0);
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    let mut render_result = Ok(());
    terminal
        .draw(|frame| {
            let area = frame.area();
            render_result = screen.render(frame, area);
        })
        .unwrap();
    assert!(render_result.is_err());
}
