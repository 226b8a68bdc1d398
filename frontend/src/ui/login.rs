//! Login page: branding block above the sign-in form.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme::Palette;
use crate::ui::widgets::{Button, Card};

/// Which form element has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
    Submit,
}

/// State for the login page.
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    /// A login request is in flight; the submit button is disabled.
    pub submitting: bool,
    pub error: Option<String>,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Submit,
            LoginField::Submit => LoginField::Username,
        };
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            LoginField::Username => self.username.push(c),
            LoginField::Password => self.password.push(c),
            LoginField::Submit => {}
        }
    }

    pub fn delete_char(&mut self) {
        match self.focus {
            LoginField::Username => {
                self.username.pop();
            }
            LoginField::Password => {
                self.password.pop();
            }
            LoginField::Submit => {}
        }
    }
}

const FORM_WIDTH: u16 = 44;

fn field_line<'a>(
    label: &'a str,
    value: String,
    focused: bool,
    palette: Palette,
) -> [Line<'a>; 2] {
    let marker = if focused { "▸ " } else { "  " };
    let label_style = if focused {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    let cursor = if focused { "_" } else { "" };
    [
        Line::from(vec![Span::raw(marker), Span::styled(label, label_style)]),
        Line::from(Span::styled(
            format!("  {value}{cursor}"),
            Style::default().fg(palette.text),
        )),
    ]
}

/// Draws the login page centered in `area`.
pub fn draw(frame: &mut Frame, state: &LoginState, palette: Palette, area: Rect) {
    let [column] = Layout::horizontal([Constraint::Length(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let [branding_area, card_area, button_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(10),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(column);

    // Branding block.
    let branding = Paragraph::new(vec![
        Line::from(Span::styled(
            "Kanora",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            "Your music, wherever you are.",
            Style::default().fg(palette.dim),
        ))
        .centered(),
    ]);
    frame.render_widget(branding, branding_area);

    // Sign-in form.
    let mut body: Vec<Line> = Vec::new();
    body.extend(field_line(
        "Username",
        state.username.clone(),
        state.focus == LoginField::Username,
        palette,
    ));
    body.push(Line::default());
    body.extend(field_line(
        "Password",
        "•".repeat(state.password.chars().count()),
        state.focus == LoginField::Password,
        palette,
    ));
    if let Some(error) = &state.error {
        body.push(Line::default());
        body.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(palette.error),
        )));
    }

    frame.render_widget(Card::new(body, palette).title("Sign in"), card_area);

    let label = if state.submitting {
        "Signing in…"
    } else {
        "Sign in"
    };
    let button = Button::new(label, palette)
        .disabled(state.submitting)
        .full_width(true)
        .focused(state.focus == LoginField::Submit);
    frame.render_widget(&button, button_area);
}
