//! Clickable keypad widget
//!
//! Lays out [`LAYOUT`] inside a bordered block. Spanning buttons (`C`, `=`)
//! cover several cells.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use super::ui::palette;
use crate::core::keypad::{position_of, slot_at, Key, KeySlot, COLS, LAYOUT, ROWS};

/// Keypad widget for rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct KeypadWidget {
    pressed: Option<usize>,
}

impl KeypadWidget {
    /// Creates a new keypad widget, highlighting the pressed button
    #[must_use]
    pub fn new(pressed: Option<usize>) -> Self {
        Self { pressed }
    }

    /// Returns the area inside the border
    #[must_use]
    pub fn inner(area: Rect) -> Rect {
        Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        }
    }

    /// Returns the cell size, or None if the area is too small
    fn cell_size(inner: Rect) -> Option<(u16, u16)> {
        let width = inner.width / COLS as u16;
        let height = inner.height / ROWS as u16;
        if width == 0 || height == 0 {
            None
        } else {
            Some((width, height))
        }
    }

    /// Returns the screen rectangle of a button
    #[must_use]
    pub fn button_rect(area: Rect, slot: &KeySlot) -> Option<Rect> {
        let inner = Self::inner(area);
        let (width, height) = Self::cell_size(inner)?;
        Some(Rect {
            x: inner.x + slot.col as u16 * width,
            y: inner.y + slot.row as u16 * height,
            width: slot.col_span as u16 * width,
            height,
        })
    }

    /// Converts a click position to a button index into [`LAYOUT`]
    #[must_use]
    pub fn hit_test(area: Rect, x: u16, y: u16) -> Option<usize> {
        let inner = Self::inner(area);
        let (width, height) = Self::cell_size(inner)?;
        if x < inner.x || y < inner.y {
            return None;
        }
        let col = usize::from((x - inner.x) / width);
        let row = usize::from((y - inner.y) / height);
        slot_at(row, col).and_then(|slot| position_of(slot.key))
    }

    fn button_style(key: Key, pressed: bool) -> Style {
        if pressed {
            return Style::default()
                .fg(palette::WHITE)
                .bg(palette::LABEL)
                .add_modifier(Modifier::BOLD);
        }
        let bg = match key {
            Key::Operand(_) => palette::WHITE,
            Key::Operator(_) | Key::Clear => palette::OFF_WHITE,
            Key::Equals => palette::LIGHT_BLUE,
        };
        let style = Style::default().fg(palette::LABEL).bg(bg);
        if matches!(key, Key::Operand(_)) {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

impl Widget for KeypadWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::LABEL))
            .render(area, buf);

        for (index, slot) in LAYOUT.iter().enumerate() {
            let Some(rect) = Self::button_rect(area, slot) else {
                return;
            };
            let style = Self::button_style(slot.key, self.pressed == Some(index));
            buf.set_style(rect, style);

            let label = slot.key.label().to_string();
            let label_x = rect.x + rect.width.saturating_sub(1) / 2;
            let label_y = rect.y + rect.height / 2;
            buf.set_span(label_x, label_y, &Span::styled(label, style), 1);
        }
    }
}
