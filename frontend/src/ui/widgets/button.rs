//! Prop-driven button widget.
//!
//! Purely presentational: the widget renders from its props and never holds
//! state. Activation goes through [`Button::activate`], which runs the
//! caller-supplied closure only while the button is enabled, so a disabled
//! button can never fire its handler.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Widget;

use crate::theme::Palette;

/// Visual emphasis of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

/// Horizontal padding applied around the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn padding(self) -> u16 {
        match self {
            ButtonSize::Small => 1,
            ButtonSize::Medium => 2,
            ButtonSize::Large => 4,
        }
    }
}

/// A clickable label with a closed set of variants and sizes.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    palette: Palette,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    full_width: bool,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, palette: Palette) -> Self {
        Self {
            label,
            palette,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            full_width: false,
            focused: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// Run `on_press` only when the button is enabled.
    pub fn activate<F: FnOnce()>(&self, on_press: F) {
        if self.is_enabled() {
            on_press();
        }
    }

    /// Rendered width when not stretched to the full area.
    pub fn width(&self) -> u16 {
        let label_width = u16::try_from(self.label.chars().count()).unwrap_or(u16::MAX);
        label_width.saturating_add(self.size.padding() * 2)
    }

    fn style(&self) -> Style {
        let (bg, fg) = match self.variant {
            ButtonVariant::Primary => (self.palette.accent, self.palette.accent_text),
            ButtonVariant::Secondary => (self.palette.border, self.palette.text),
            ButtonVariant::Danger => (self.palette.error, self.palette.accent_text),
        };
        let mut style = Style::default().bg(bg).fg(fg);
        if self.disabled {
            style = Style::default()
                .bg(self.palette.background)
                .fg(self.palette.dim)
                .add_modifier(Modifier::DIM);
        } else if self.focused {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        style
    }
}

impl Widget for &Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let width = if self.full_width {
            area.width
        } else {
            self.width().min(area.width)
        };
        let rect = Rect::new(area.x, area.y, width, 1);
        buf.set_style(rect, self.style());
        Line::from(self.label).centered().render(rect, buf);
    }
}
