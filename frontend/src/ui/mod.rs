//! Page drawing and layout.

pub mod artist_detail;
pub mod browse;
pub mod login;
pub mod widgets;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::app::{App, Screen};
use crate::theme;

/// Top-level draw: background, header, page body, help footer.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = theme::palette(app.theme);
    let area = frame.area();

    frame.render_widget(
        Block::new().style(Style::default().bg(palette.background)),
        area,
    );

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_header(frame, app, palette, header_area);

    let body = body_area.inner(ratatui::layout::Margin::new(2, 1));
    match &app.screen {
        Screen::Login(state) => login::draw(frame, state, palette, body),
        Screen::Browse(state) => browse::draw(frame, state, palette, body),
        Screen::ArtistDetail(state) => artist_detail::draw(frame, state, palette, body),
    }

    draw_footer(frame, app, palette, footer_area);
}

fn draw_header(frame: &mut Frame, app: &App, palette: theme::Palette, area: Rect) {
    let title = Span::styled(
        " kanora ",
        Style::default()
            .fg(palette.accent_text)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );
    let screen_name = match &app.screen {
        Screen::Login(_) => "sign in",
        Screen::Browse(_) => "artists",
        Screen::ArtistDetail(_) => "artist",
    };
    let line = Line::from(vec![
        title,
        Span::styled(format!(" {screen_name}"), Style::default().fg(palette.dim)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_footer(frame: &mut Frame, app: &App, palette: theme::Palette, area: Rect) {
    let help = match &app.screen {
        Screen::Login(_) => "tab switch field · enter sign in · esc quit",
        Screen::Browse(_) => "↑/↓ select · enter open · t theme · esc sign out · q quit",
        Screen::ArtistDetail(_) => "↑/↓ select · t theme · esc back · q quit",
    };
    let line = Line::from(vec![
        Span::styled(help, Style::default().fg(palette.dim)),
        Span::styled(
            format!("  [{} theme]", app.theme),
            Style::default().fg(palette.dim),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
