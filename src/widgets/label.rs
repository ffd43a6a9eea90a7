//! Single-line text display widget.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// A text display widget: one line of styled text with an alignment.
///
/// This is the leaf widget the screen layout paints label and hint slots
/// with.
pub struct Label<'a> {
    text: &'a str,
    style: Style,
    alignment: Alignment,
}

impl<'a> Label<'a> {
    /// Create a label with default style and centered alignment.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            style: Style::default(),
            alignment: Alignment::Center,
        }
    }

    /// Set the text style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the horizontal alignment.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Widget for Label<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.text)
            .style(self.style)
            .alignment(self.alignment)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn label_renders_its_text() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        Label::new("hello").alignment(Alignment::Left).render(area, &mut buf);
        assert!(buffer_text(&buf).starts_with("hello"));
    }

    #[test]
    fn centered_label_is_padded() {
        let area = Rect::new(0, 0, 11, 1);
        let mut buf = Buffer::empty(area);
        Label::new("mid").render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.trim() == "mid");
        assert!(text.starts_with(' '));
    }
}
