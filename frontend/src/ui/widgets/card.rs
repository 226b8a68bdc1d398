//! Prop-driven card widget.
//!
//! A bordered container with optional title and footer slots. Unset slots
//! are omitted entirely: the border renders unbroken where a title or
//! footer would sit. `hoverable` cards highlight their border while
//! hovered/focused.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::theme::Palette;

/// A bordered content container with optional title and footer.
#[derive(Debug, Clone)]
pub struct Card<'a> {
    body: Text<'a>,
    palette: Palette,
    title: Option<&'a str>,
    footer: Option<&'a str>,
    hoverable: bool,
    hovered: bool,
}

impl<'a> Card<'a> {
    pub fn new(body: impl Into<Text<'a>>, palette: Palette) -> Self {
        Self {
            body: body.into(),
            palette,
            title: None,
            footer: None,
            hoverable: false,
            hovered: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn hoverable(mut self, hoverable: bool) -> Self {
        self.hoverable = hoverable;
        self
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    fn border_style(&self) -> Style {
        if self.hoverable && self.hovered {
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.border)
        }
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut block = Block::bordered().border_style(self.border_style());
        if let Some(title) = self.title {
            block = block.title(
                Line::from(format!(" {title} "))
                    .style(Style::default().fg(self.palette.text).add_modifier(Modifier::BOLD)),
            );
        }
        if let Some(footer) = self.footer {
            block = block.title_bottom(
                Line::from(format!(" {footer} ")).style(Style::default().fg(self.palette.dim)),
            );
        }

        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.body)
            .style(Style::default().fg(self.palette.text))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
