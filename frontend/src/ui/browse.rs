//! Browse page: selectable list of all artists.

use kanora_types::{ApiResponse, ArtistSummary};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};

use crate::theme::Palette;
use crate::ui::artist_detail::GENERIC_ERROR_TEXT;

/// State for the browse page.
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    pub loading: bool,
    pub error: Option<String>,
    pub artists: Vec<ArtistSummary>,
    pub selected: usize,
}

impl BrowseState {
    /// Fresh state with a fetch in flight.
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Fold a fetch result into the page state.
    pub fn apply_result(&mut self, result: Result<ApiResponse<Vec<ArtistSummary>>, String>) {
        self.loading = false;
        match result {
            Err(detail) => {
                tracing::warn!(detail, "artist listing failed");
                self.error = Some(GENERIC_ERROR_TEXT.to_owned());
            }
            Ok(response) if !response.success => {
                self.error =
                    Some(response.error.unwrap_or_else(|| GENERIC_ERROR_TEXT.to_owned()));
            }
            Ok(response) => {
                self.artists = response.data.unwrap_or_default();
                self.selected = 0;
            }
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.artists.len() {
            self.selected += 1;
        }
    }

    pub fn selected_artist(&self) -> Option<&ArtistSummary> {
        self.artists.get(self.selected)
    }
}

fn album_count_label(count: u32) -> String {
    if count == 1 {
        "1 album".to_owned()
    } else {
        format!("{count} albums")
    }
}

/// Draws the browse page in `area`.
pub fn draw(frame: &mut Frame, state: &BrowseState, palette: Palette, area: Rect) {
    if state.loading {
        frame.render_widget(
            Paragraph::new(Span::styled("Loading…", Style::default().fg(palette.dim))),
            area,
        );
        return;
    }
    if let Some(error) = &state.error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("Error: {error}"),
                Style::default().fg(palette.error),
            )),
            area,
        );
        return;
    }
    if state.artists.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "The library has no artists yet.",
                Style::default().fg(palette.dim),
            )),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = state
        .artists
        .iter()
        .enumerate()
        .map(|(index, artist)| {
            let selected = index == state.selected;
            let marker = if selected { "▸ " } else { "  " };
            let name_style = if selected {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(artist.name.clone(), name_style),
                Span::styled(
                    format!("  {}", album_count_label(artist.album_count)),
                    Style::default().fg(palette.dim),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(name: &str, album_count: u32) -> ArtistSummary {
        ArtistSummary {
            id: "11111111-1111-4111-8111-111111111111".to_owned(),
            name: name.to_owned(),
            album_count,
        }
    }

    #[test]
    fn successful_results_populate_the_list() {
        let mut state = BrowseState::loading();
        state.apply_result(Ok(ApiResponse::ok(vec![artist("Nordlys", 2)])));
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.selected_artist().map(|a| a.name.as_str()), Some("Nordlys"));
    }

    #[test]
    fn reported_failures_keep_their_message() {
        let mut state = BrowseState::loading();
        state.apply_result(Ok(ApiResponse::failure("boom")));
        assert_eq!(state.error.as_deref(), Some("boom"));
    }

    #[test]
    fn transport_failures_collapse_to_the_generic_message() {
        let mut state = BrowseState::loading();
        state.apply_result(Err("connection refused".to_owned()));
        assert_eq!(state.error.as_deref(), Some(GENERIC_ERROR_TEXT));
    }

    #[test]
    fn selection_stays_within_bounds() {
        let mut state = BrowseState::loading();
        state.apply_result(Ok(ApiResponse::ok(vec![
            artist("Nordlys", 2),
            artist("Veiled Harbour", 0),
        ])));

        state.move_up();
        assert_eq!(state.selected, 0);
        state.move_down();
        assert_eq!(state.selected, 1);
        state.move_down();
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn album_counts_pluralise() {
        assert_eq!(album_count_label(1), "1 album");
        assert_eq!(album_count_label(0), "0 albums");
        assert_eq!(album_count_label(3), "3 albums");
    }
}
