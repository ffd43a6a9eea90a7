//! Declarative widget tree for a screen.
//!
//! A screen's layout is declared as a slice of [`WidgetDecl`]s and inflated
//! into a [`ScreenLayout`] at screen construction. Widgets are addressed by
//! their declared identifier; the lookup is done once, yielding a typed
//! [`LabelHandle`] that is used for all later text updates. A lookup for an
//! identifier the layout does not declare is a programmer error and fails
//! with an error rather than rendering a blank widget.

use crate::styles::theme;
use crate::widgets::Label;
use anyhow::{anyhow, Result};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Kind of widget a layout slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Body text: centered in the content area, themed as body text.
    Label,
    /// Hint text: a single muted line at the bottom of the screen.
    Hint,
}

/// One entry of a declarative layout description.
#[derive(Debug, Clone, Copy)]
pub struct WidgetDecl {
    /// Identifier used to locate the widget after inflation.
    pub id: &'static str,
    /// What the slot displays.
    pub kind: WidgetKind,
}

/// Typed handle to a label slot.
///
/// Obtained once from [`ScreenLayout::find_label`] at screen construction
/// instead of re-resolving the identifier on every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelHandle(usize);

struct Slot {
    decl: WidgetDecl,
    text: String,
}

/// An inflated widget tree.
///
/// Owns the text content of every widget; slots start empty.
pub struct ScreenLayout {
    slots: Vec<Slot>,
}

impl ScreenLayout {
    /// Inflate a declarative layout description into a widget tree.
    pub fn inflate(decls: &[WidgetDecl]) -> Self {
        Self {
            slots: decls
                .iter()
                .map(|decl| Slot {
                    decl: *decl,
                    text: String::new(),
                })
                .collect(),
        }
    }

    /// Locate a label widget by its declared identifier.
    ///
    /// Errors if the identifier is absent from the layout or names a
    /// non-label widget. Callers treat this as fatal.
    pub fn find_label(&self, id: &str) -> Result<LabelHandle> {
        let index = self
            .slots
            .iter()
            .position(|slot| slot.decl.id == id)
            .ok_or_else(|| anyhow!("no widget with id `{id}` in layout"))?;
        if self.slots[index].decl.kind != WidgetKind::Label {
            return Err(anyhow!("widget `{id}` is not a label"));
        }
        Ok(LabelHandle(index))
    }

    /// Set the visible text of a label.
    pub fn set_text(&mut self, handle: LabelHandle, text: impl Into<String>) {
        self.slots[handle.0].text = text.into();
    }

    /// The current visible text of a label.
    pub fn text(&self, handle: LabelHandle) -> &str {
        &self.slots[handle.0].text
    }

    /// Set the text of a hint slot by identifier.
    ///
    /// Hints are static, so the identifier lookup here is a one-time setup
    /// call, not a per-frame one.
    pub fn set_hint(&mut self, id: &str, text: impl Into<String>) -> Result<()> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.decl.id == id && slot.decl.kind == WidgetKind::Hint)
            .ok_or_else(|| anyhow!("no hint widget with id `{id}` in layout"))?;
        slot.text = text.into();
        Ok(())
    }

    /// Draw the widget tree into `area` inside a bordered block.
    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str) {
        let t = theme();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(title)
            .title_style(t.title_style())
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let constraints: Vec<Constraint> = self
            .slots
            .iter()
            .map(|slot| match slot.decl.kind {
                WidgetKind::Label => Constraint::Min(1),
                WidgetKind::Hint => Constraint::Length(1),
            })
            .collect();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (slot, chunk) in self.slots.iter().zip(chunks.iter()) {
            match slot.decl.kind {
                WidgetKind::Label => {
                    // Vertically center the label line within its chunk
                    let line = Rect {
                        y: chunk.y + chunk.height / 2,
                        height: 1.min(chunk.height),
                        ..*chunk
                    };
                    frame.render_widget(
                        Label::new(&slot.text).style(t.text_style()),
                        line,
                    );
                }
                WidgetKind::Hint => {
                    frame.render_widget(
                        Label::new(&slot.text).style(t.hint_style()),
                        *chunk,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECLS: &[WidgetDecl] = &[
        WidgetDecl {
            id: "time_text",
            kind: WidgetKind::Label,
        },
        WidgetDecl {
            id: "quit_hint",
            kind: WidgetKind::Hint,
        },
    ];

    #[test]
    fn find_label_returns_handle_for_declared_id() {
        let layout = ScreenLayout::inflate(DECLS);
        assert!(layout.find_label("time_text").is_ok());
    }

    #[test]
    fn find_label_fails_for_missing_id() {
        let layout = ScreenLayout::inflate(DECLS);
        let err = layout.find_label("no_such_widget").unwrap_err();
        assert!(err.to_string().contains("no_such_widget"));
    }

    #[test]
    fn find_label_rejects_non_label_widgets() {
        let layout = ScreenLayout::inflate(DECLS);
        assert!(layout.find_label("quit_hint").is_err());
    }

    #[test]
    fn set_text_round_trips_through_the_slot() {
        let mut layout = ScreenLayout::inflate(DECLS);
        let handle = layout.find_label("time_text").unwrap();
        assert_eq!(layout.text(handle), "");
        layout.set_text(handle, "12:00:00");
        assert_eq!(layout.text(handle), "12:00:00");
    }

    #[test]
    fn set_hint_fails_for_missing_id() {
        let mut layout = ScreenLayout::inflate(DECLS);
        assert!(layout.set_hint("time_text", "nope").is_err());
        assert!(layout.set_hint("quit_hint", "Quit: q").is_ok());
    }
}
