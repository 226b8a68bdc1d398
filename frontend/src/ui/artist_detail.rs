//! Artist detail page: biography header and album card grid.
//!
//! The page is in exactly one of four states after load: loading, error,
//! loaded-with-data, or not-found (the fetch succeeded but returned no
//! entity). Transport failures collapse into a generic error message; an
//! API-reported failure keeps the reported message.

use kanora_types::{ApiResponse, ArtistDetails};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme::Palette;
use crate::ui::widgets::{Button, ButtonSize, ButtonVariant, Card};

/// Message shown when a fetch fails without an API-reported message.
pub const GENERIC_ERROR_TEXT: &str = "An unexpected error occurred.";
/// Message shown when the artist has no albums.
pub const NO_ALBUMS_TEXT: &str = "No albums found for this artist.";
/// Message shown when the fetch succeeded but found no artist.
pub const NOT_FOUND_TEXT: &str = "Artist not found.";

/// State for the artist detail page.
#[derive(Debug, Clone)]
pub struct ArtistDetailState {
    /// The artist being viewed; results for other artists are stale.
    pub artist_id: String,
    /// Name carried over from the browse row for the loading header.
    pub artist_name: String,
    /// Whether data is loading.
    pub loading: bool,
    /// Error message if loading failed.
    pub error: Option<String>,
    /// The fetch succeeded but returned no entity.
    pub not_found: bool,
    /// Loaded artist data.
    pub details: Option<ArtistDetails>,
    /// Highlighted album card.
    pub selected: usize,
}

impl ArtistDetailState {
    /// Fresh state with a fetch in flight.
    pub fn loading(artist_id: String, artist_name: String) -> Self {
        Self {
            artist_id,
            artist_name,
            loading: true,
            error: None,
            not_found: false,
            details: None,
            selected: 0,
        }
    }

    /// Fold a fetch result into the page state.
    pub fn apply_result(&mut self, result: Result<ApiResponse<ArtistDetails>, String>) {
        self.loading = false;
        match result {
            Err(detail) => {
                tracing::warn!(detail, artist_id = %self.artist_id, "artist detail fetch failed");
                self.error = Some(GENERIC_ERROR_TEXT.to_owned());
            }
            Ok(response) if !response.success => {
                self.error =
                    Some(response.error.unwrap_or_else(|| GENERIC_ERROR_TEXT.to_owned()));
            }
            Ok(response) => match response.data {
                Some(details) => {
                    self.artist_name = details.name.clone();
                    self.details = Some(details);
                }
                None => self.not_found = true,
            },
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let count = self.details.as_ref().map_or(0, |d| d.albums.len());
        if self.selected + 1 < count {
            self.selected += 1;
        }
    }
}

const CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 4;

fn status_paragraph(text: String, style: Style) -> Paragraph<'static> {
    Paragraph::new(Span::styled(text, style))
}

/// Draws the artist detail page in `area`.
pub fn draw(frame: &mut Frame, state: &ArtistDetailState, palette: Palette, area: Rect) {
    let [header_area, body_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);

    // Header: artist name and biography.
    let mut header_lines = vec![Line::from(Span::styled(
        state.artist_name.clone(),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(bio) = state.details.as_ref().and_then(|d| d.bio.as_deref()) {
        header_lines.push(Line::from(Span::styled(
            bio.to_owned(),
            Style::default().fg(palette.dim),
        )));
    }
    frame.render_widget(Paragraph::new(header_lines), header_area);

    if state.loading {
        frame.render_widget(
            status_paragraph("Loading…".to_owned(), Style::default().fg(palette.dim)),
            body_area,
        );
        return;
    }
    if let Some(error) = &state.error {
        frame.render_widget(
            status_paragraph(
                format!("Error: {error}"),
                Style::default().fg(palette.error),
            ),
            body_area,
        );
        return;
    }
    if state.not_found {
        frame.render_widget(
            status_paragraph(NOT_FOUND_TEXT.to_owned(), Style::default().fg(palette.dim)),
            body_area,
        );
        if body_area.height > 2 {
            let back_area = Rect::new(
                body_area.x,
                body_area.y + 2,
                body_area.width,
                1,
            );
            let back = Button::new("Back to artists (esc)", palette)
                .variant(ButtonVariant::Secondary)
                .size(ButtonSize::Small);
            frame.render_widget(&back, back_area);
        }
        return;
    }
    let Some(details) = &state.details else {
        return;
    };
    if details.albums.is_empty() {
        frame.render_widget(
            status_paragraph(NO_ALBUMS_TEXT.to_owned(), Style::default().fg(palette.dim)),
            body_area,
        );
        return;
    }

    draw_album_grid(frame, state, details, palette, body_area);
}

fn draw_album_grid(
    frame: &mut Frame,
    state: &ArtistDetailState,
    details: &ArtistDetails,
    palette: Palette,
    area: Rect,
) {
    let columns = usize::from((area.width / CARD_WIDTH).max(1));

    for (index, album) in details.albums.iter().enumerate() {
        let col = index % columns;
        let row = index / columns;
        let y_offset = u16::try_from(row).unwrap_or(u16::MAX).saturating_mul(CARD_HEIGHT);
        if y_offset >= area.height {
            break;
        }
        let x_offset = u16::try_from(col).unwrap_or(u16::MAX).saturating_mul(CARD_WIDTH);
        let cell = Rect::new(
            area.x + x_offset,
            area.y + y_offset,
            CARD_WIDTH.min(area.width.saturating_sub(x_offset)),
            CARD_HEIGHT.min(area.height.saturating_sub(y_offset)),
        );

        let art_marker = if album.cover_art_url.is_some() {
            "▣"
        } else {
            "♪"
        };
        let body = vec![Line::from(vec![
            Span::styled(format!("{art_marker} "), Style::default().fg(palette.accent)),
            Span::styled(album.title.clone(), Style::default().fg(palette.text)),
        ])];

        let mut card = Card::new(body, palette)
            .hoverable(true)
            .hovered(index == state.selected);
        if let Some(year) = album.release_year() {
            card = card.footer(year);
        }
        frame.render_widget(card, cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette;
    use kanora_types::{AlbumSummary, Theme};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;

    fn details(name: &str, albums: Vec<AlbumSummary>) -> ArtistDetails {
        ArtistDetails {
            id: "11111111-1111-4111-8111-111111111111".to_owned(),
            name: name.to_owned(),
            bio: None,
            albums,
        }
    }

    fn loading_state() -> ArtistDetailState {
        ArtistDetailState::loading(
            "11111111-1111-4111-8111-111111111111".to_owned(),
            "X".to_owned(),
        )
    }

    fn rendered_text(state: &ArtistDetailState) -> String {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| draw(frame, state, palette(Theme::Dark), frame.area()))
            .expect("draw");
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..16 {
            for x in 0..60 {
                if let Some(cell) = buffer.cell(Position::new(x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn success_with_no_albums_renders_the_empty_message() {
        let mut state = loading_state();
        state.apply_result(Ok(ApiResponse::ok(details("X", vec![]))));

        let text = rendered_text(&state);
        assert!(text.contains('X'));
        assert!(text.contains(NO_ALBUMS_TEXT));
    }

    #[test]
    fn reported_failures_render_the_reported_message() {
        let mut state = loading_state();
        state.apply_result(Ok(ApiResponse::failure("boom")));

        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(rendered_text(&state).contains("Error: boom"));
    }

    #[test]
    fn transport_failures_render_the_generic_message() {
        let mut state = loading_state();
        state.apply_result(Err("connection reset".to_owned()));

        let text = rendered_text(&state);
        assert!(text.contains(&format!("Error: {GENERIC_ERROR_TEXT}")));
    }

    #[test]
    fn empty_success_renders_the_not_found_state() {
        let mut state = loading_state();
        state.apply_result(Ok(ApiResponse::empty()));

        assert!(state.not_found);
        assert!(rendered_text(&state).contains(NOT_FOUND_TEXT));
    }

    #[test]
    fn loading_state_renders_a_spinner_line() {
        let state = loading_state();
        assert!(state.loading);
        assert!(rendered_text(&state).contains("Loading…"));
    }

    #[test]
    fn loaded_albums_render_as_cards_with_year_footers() {
        let mut state = loading_state();
        state.apply_result(Ok(ApiResponse::ok(details(
            "Nordlys",
            vec![AlbumSummary {
                id: "aaaaaaa1-aaaa-4aaa-8aaa-aaaaaaaaaaa1".to_owned(),
                title: "Polar Night".to_owned(),
                cover_art_url: None,
                release_date: Some("2021-11-05".to_owned()),
            }],
        ))));

        let text = rendered_text(&state);
        assert!(text.contains("Polar Night"));
        assert!(text.contains("2021"));
    }

    #[test]
    fn selection_stays_within_the_album_grid() {
        let mut state = loading_state();
        state.apply_result(Ok(ApiResponse::ok(details(
            "Nordlys",
            vec![
                AlbumSummary {
                    id: "aaaaaaa1-aaaa-4aaa-8aaa-aaaaaaaaaaa1".to_owned(),
                    title: "A".to_owned(),
                    cover_art_url: None,
                    release_date: None,
                },
                AlbumSummary {
                    id: "aaaaaaa2-aaaa-4aaa-8aaa-aaaaaaaaaaa2".to_owned(),
                    title: "B".to_owned(),
                    cover_art_url: None,
                    release_date: None,
                },
            ],
        ))));

        state.move_down();
        assert_eq!(state.selected, 1);
        state.move_down();
        assert_eq!(state.selected, 1);
        state.move_up();
        state.move_up();
        assert_eq!(state.selected, 0);
    }
}
