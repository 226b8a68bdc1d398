//! Application state: the active page, the theme, and event plumbing.

use std::sync::mpsc;

use crossterm::event::KeyEvent;
use kanora_types::Theme;

use crate::config::Config;
use crate::keys::{self, Action};
use crate::net::{Command, Event, Handle};
use crate::theme;
use crate::ui::artist_detail::ArtistDetailState;
use crate::ui::browse::BrowseState;
use crate::ui::login::LoginState;
use crate::ui::widgets::Button;

/// Which page the UI is on.
#[derive(Debug, Clone)]
pub enum Screen {
    Login(LoginState),
    Browse(BrowseState),
    ArtistDetail(ArtistDetailState),
}

pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub screen: Screen,
    pub should_quit: bool,
    pub needs_redraw: bool,
    net: Handle,
    events: mpsc::Receiver<Event>,
}

impl App {
    pub fn new(config: Config, net: Handle, events: mpsc::Receiver<Event>) -> Self {
        Self {
            config,
            theme: Theme::default(),
            screen: Screen::Login(LoginState::new()),
            should_quit: false,
            needs_redraw: true,
            net,
            events,
        }
    }

    /// Drain pending network events into the current page.
    pub fn tick(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.apply_event(event);
            self.needs_redraw = true;
        }
    }

    fn apply_event(&mut self, event: Event) {
        match event {
            Event::LoginResult(result) => self.apply_login_result(result),
            Event::LogoutResult(result) => {
                if let Err(detail) = result {
                    tracing::warn!(detail, "logout request failed");
                }
            }
            Event::ArtistsResult(result) => {
                if let Screen::Browse(state) = &mut self.screen {
                    state.apply_result(result);
                }
            }
            Event::ArtistDetailsResult { artist_id, result } => {
                // Results for a page we navigated away from are stale.
                match &mut self.screen {
                    Screen::ArtistDetail(state) if state.artist_id == artist_id => {
                        state.apply_result(result);
                    }
                    _ => tracing::debug!(artist_id, "discarding stale artist detail result"),
                }
            }
        }
    }

    fn apply_login_result(&mut self, result: Result<kanora_types::ApiResponse<()>, String>) {
        let Screen::Login(state) = &mut self.screen else {
            return;
        };
        state.submitting = false;
        match result {
            Err(detail) => {
                tracing::warn!(detail, "login request failed");
                state.error = Some("An unexpected error occurred.".to_owned());
            }
            Ok(response) if !response.success => {
                state.error = Some(
                    response
                        .error
                        .unwrap_or_else(|| "An unexpected error occurred.".to_owned()),
                );
            }
            Ok(_) => self.open_browse(),
        }
    }

    fn open_browse(&mut self) {
        self.screen = Screen::Browse(BrowseState::loading());
        self.net.dispatch(Command::FetchArtists);
    }

    fn open_artist_detail(&mut self, artist_id: String, artist_name: String) {
        self.net.dispatch(Command::FetchArtistDetails {
            artist_id: artist_id.clone(),
        });
        self.screen = Screen::ArtistDetail(ArtistDetailState::loading(artist_id, artist_name));
    }

    fn sign_out(&mut self) {
        self.net.dispatch(Command::Logout);
        self.screen = Screen::Login(LoginState::new());
    }

    fn submit_login(&mut self) {
        let palette = theme::palette(self.theme);
        let Screen::Login(state) = &mut self.screen else {
            return;
        };
        // The submit button is disabled while a request is in flight; a
        // disabled button never invokes its handler.
        let button = Button::new("Sign in", palette).disabled(state.submitting);
        let mut submitted = false;
        button.activate(|| submitted = true);
        if !submitted {
            return;
        }

        state.submitting = true;
        state.error = None;
        self.net.dispatch(Command::Login {
            username: state.username.clone(),
            password: state.password.clone(),
        });
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: &KeyEvent) {
        match &self.screen {
            Screen::Login(_) => self.handle_login_key(key),
            Screen::Browse(_) => self.handle_browse_key(key),
            Screen::ArtistDetail(_) => self.handle_detail_key(key),
        }
    }

    fn handle_login_key(&mut self, key: &KeyEvent) {
        let Some(action) = keys::form_action(key.code) else {
            return;
        };
        match action {
            Action::Back => self.should_quit = true,
            Action::Select => self.submit_login(),
            Action::NextField => {
                if let Screen::Login(state) = &mut self.screen {
                    state.next_field();
                }
            }
            Action::Char(c) => {
                if let Screen::Login(state) = &mut self.screen {
                    state.push_char(c);
                }
            }
            Action::DeleteChar => {
                if let Screen::Login(state) = &mut self.screen {
                    state.delete_char();
                }
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: &KeyEvent) {
        let Some(action) = keys::list_action(key.code) else {
            return;
        };
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleTheme => self.theme = self.theme.toggle(),
            Action::Back => self.sign_out(),
            Action::MoveUp => {
                if let Screen::Browse(state) = &mut self.screen {
                    state.move_up();
                }
            }
            Action::MoveDown => {
                if let Screen::Browse(state) = &mut self.screen {
                    state.move_down();
                }
            }
            Action::Select => {
                let selection = match &self.screen {
                    Screen::Browse(state) => state
                        .selected_artist()
                        .map(|artist| (artist.id.clone(), artist.name.clone())),
                    _ => None,
                };
                if let Some((artist_id, artist_name)) = selection {
                    self.open_artist_detail(artist_id, artist_name);
                }
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: &KeyEvent) {
        let Some(action) = keys::list_action(key.code) else {
            return;
        };
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleTheme => self.theme = self.theme.toggle(),
            Action::Back => self.open_browse(),
            Action::MoveUp => {
                if let Screen::ArtistDetail(state) = &mut self.screen {
                    state.move_up();
                }
            }
            Action::MoveDown => {
                if let Screen::ArtistDetail(state) = &mut self.screen {
                    state.move_down();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::login::LoginField;
    use crossterm::event::{KeyCode, KeyModifiers};
    use kanora_types::{ApiResponse, ArtistDetails, ArtistSummary};

    fn test_app() -> (App, mpsc::Receiver<Command>, mpsc::Sender<Event>) {
        let (handle, cmd_rx) = Handle::detached();
        let (event_tx, event_rx) = mpsc::channel();
        let app = App::new(Config::default(), handle, event_rx);
        (app, cmd_rx, event_tx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn artist(id: &str, name: &str) -> ArtistSummary {
        ArtistSummary {
            id: id.to_owned(),
            name: name.to_owned(),
            album_count: 1,
        }
    }

    fn logged_in_browse(app: &mut App, artists: Vec<ArtistSummary>) {
        app.screen = Screen::Browse(BrowseState::loading());
        let Screen::Browse(state) = &mut app.screen else {
            unreachable!()
        };
        state.apply_result(Ok(ApiResponse::ok(artists)));
    }

    #[test]
    fn theme_toggle_flips_and_restores() {
        let (mut app, _cmds, _events) = test_app();
        logged_in_browse(&mut app, vec![]);
        let start = app.theme;

        app.handle_key(&key(KeyCode::Char('t')));
        assert_eq!(app.theme, start.toggle());

        app.handle_key(&key(KeyCode::Char('t')));
        assert_eq!(app.theme, start);
    }

    #[test]
    fn successful_login_navigates_to_browse_and_fetches_artists() {
        let (mut app, cmds, events) = test_app();
        if let Screen::Login(state) = &mut app.screen {
            state.username = "admin".to_owned();
            state.password = "password".to_owned();
        }
        app.handle_key(&key(KeyCode::Enter));
        assert!(matches!(cmds.try_recv(), Ok(Command::Login { .. })));

        events
            .send(Event::LoginResult(Ok(ApiResponse::ok(()))))
            .expect("send event");
        app.tick();

        assert!(matches!(app.screen, Screen::Browse(_)));
        assert!(matches!(cmds.try_recv(), Ok(Command::FetchArtists)));
    }

    #[test]
    fn failed_login_keeps_the_page_and_reports_the_error() {
        let (mut app, _cmds, events) = test_app();
        if let Screen::Login(state) = &mut app.screen {
            state.submitting = true;
        }
        events
            .send(Event::LoginResult(Ok(ApiResponse::failure(
                "invalid credentials",
            ))))
            .expect("send event");
        app.tick();

        let Screen::Login(state) = &app.screen else {
            panic!("should stay on the login page");
        };
        assert!(!state.submitting);
        assert_eq!(state.error.as_deref(), Some("invalid credentials"));
    }

    #[test]
    fn submitting_while_a_request_is_in_flight_is_ignored() {
        let (mut app, cmds, _events) = test_app();
        if let Screen::Login(state) = &mut app.screen {
            state.submitting = true;
        }
        app.handle_key(&key(KeyCode::Enter));
        assert!(cmds.try_recv().is_err(), "no second login is dispatched");
    }

    #[test]
    fn selecting_an_artist_opens_the_detail_page() {
        let (mut app, cmds, _events) = test_app();
        logged_in_browse(
            &mut app,
            vec![artist("11111111-1111-4111-8111-111111111111", "Nordlys")],
        );

        app.handle_key(&key(KeyCode::Enter));

        let Screen::ArtistDetail(state) = &app.screen else {
            panic!("should navigate to the detail page");
        };
        assert!(state.loading);
        assert_eq!(state.artist_name, "Nordlys");
        assert!(matches!(
            cmds.try_recv(),
            Ok(Command::FetchArtistDetails { .. })
        ));
    }

    #[test]
    fn stale_detail_results_are_discarded() {
        let (mut app, _cmds, events) = test_app();
        app.screen = Screen::ArtistDetail(ArtistDetailState::loading(
            "22222222-2222-4222-8222-222222222222".to_owned(),
            "Veiled Harbour".to_owned(),
        ));

        // A result for a previously viewed artist arrives late.
        events
            .send(Event::ArtistDetailsResult {
                artist_id: "11111111-1111-4111-8111-111111111111".to_owned(),
                result: Ok(ApiResponse::ok(ArtistDetails {
                    id: "11111111-1111-4111-8111-111111111111".to_owned(),
                    name: "Nordlys".to_owned(),
                    bio: None,
                    albums: vec![],
                })),
            })
            .expect("send event");
        app.tick();

        let Screen::ArtistDetail(state) = &app.screen else {
            panic!("still on the detail page");
        };
        assert!(state.loading, "stale result must not touch the page");
        assert_eq!(state.artist_name, "Veiled Harbour");
    }

    #[test]
    fn back_from_detail_returns_to_a_fresh_browse_fetch() {
        let (mut app, cmds, _events) = test_app();
        app.screen = Screen::ArtistDetail(ArtistDetailState::loading(
            "11111111-1111-4111-8111-111111111111".to_owned(),
            "Nordlys".to_owned(),
        ));

        app.handle_key(&key(KeyCode::Esc));
        assert!(matches!(app.screen, Screen::Browse(_)));
        assert!(matches!(cmds.try_recv(), Ok(Command::FetchArtists)));
    }

    #[test]
    fn sign_out_returns_to_login_and_dispatches_logout() {
        let (mut app, cmds, _events) = test_app();
        logged_in_browse(&mut app, vec![]);

        app.handle_key(&key(KeyCode::Esc));
        assert!(matches!(app.screen, Screen::Login(_)));
        assert!(matches!(cmds.try_recv(), Ok(Command::Logout)));
    }

    #[test]
    fn typing_on_the_login_page_feeds_the_form() {
        let (mut app, _cmds, _events) = test_app();
        app.handle_key(&key(KeyCode::Char('a')));
        app.handle_key(&key(KeyCode::Tab));
        app.handle_key(&key(KeyCode::Char('p')));

        let Screen::Login(state) = &app.screen else {
            panic!("on the login page");
        };
        assert_eq!(state.username, "a");
        assert_eq!(state.password, "p");
        assert_eq!(state.focus, LoginField::Password);
    }
}
