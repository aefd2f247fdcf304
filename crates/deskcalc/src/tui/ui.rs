//! TUI rendering
//!
//! ```text
//! ┌───────────────────────────┐
//! │                       42+ │  result line
//! │                         8 │  current line
//! └───────────────────────────┘
//!  Error: ...                     status line
//! ┌───────────────────────────┐
//! │          keypad           │
//! └───────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Display colours
pub mod palette {
    use ratatui::style::Color;

    /// Display background
    pub const LIGHT_GRAY: Color = Color::Rgb(0xF5, 0xF5, 0xF5);
    /// Text on display and buttons
    pub const LABEL: Color = Color::Rgb(0x25, 0x26, 0x5E);
    /// Digit buttons
    pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
    /// Operator and clear buttons
    pub const OFF_WHITE: Color = Color::Rgb(0xF8, 0xFA, 0xFF);
    /// Equals button
    pub const LIGHT_BLUE: Color = Color::Rgb(0xCC, 0xED, 0xFF);
    /// Status line errors
    pub const ERROR: Color = Color::Rgb(0xC0, 0x39, 0x2B);
}

/// Window title
pub const TITLE: &str = " deskcalc ";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Returns the keypad rectangle for a given screen area
///
/// The event loop uses this to hit-test clicks against the last frame.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    split(area)[2]
}

fn split(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Display
            Constraint::Length(1), // Status
            Constraint::Min(7),    // Keypad
        ])
        .split(area)
        .to_vec()
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let calc = self.app.calculator();
        let base = Style::default().fg(palette::LABEL).bg(palette::LIGHT_GRAY);

        let lines = vec![
            Line::from(Span::styled(calc.result_text(), base)),
            Line::from(Span::styled(
                calc.current_text(),
                base.add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .style(base)
            .block(
                Block::default()
                    .title(TITLE)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette::LABEL)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.status(),
            Style::default().fg(palette::ERROR),
        ))
        .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = split(area);
        self.render_display(chunks[0], buf);
        self.render_status(chunks[1], buf);
        KeypadWidget::new(self.app.pressed()).render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keypad::parse_key_sequence;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &CalculatorApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    fn app_after(seq: &str) -> CalculatorApp {
        let mut app = CalculatorApp::new();
        for key in parse_key_sequence(seq).unwrap() {
            app.press(key);
        }
        app
    }

    #[test]
    fn test_render_empty() {
        let content = draw(&CalculatorApp::new());
        assert!(content.contains("deskcalc"));
        assert!(!content.contains("Error"));
    }

    #[test]
    fn test_render_both_lines() {
        let content = draw(&app_after("42+8"));
        assert!(content.contains("42+"));
        assert!(content.contains('8'));
    }

    #[test]
    fn test_render_result() {
        let content = draw(&app_after("10/4="));
        assert!(content.contains("2.5"));
    }

    #[test]
    fn test_render_error_status() {
        let content = draw(&app_after("1/0="));
        assert!(content.contains("Error: Division by zero"));
        assert!(content.contains("1/"));
    }

    #[test]
    fn test_keypad_area_below_display() {
        let area = Rect::new(0, 0, 40, 24);
        let keypad = keypad_area(area);
        assert_eq!(keypad.y, 5);
        assert_eq!(keypad.height, 19);
        assert_eq!(keypad.width, 40);
    }
}
