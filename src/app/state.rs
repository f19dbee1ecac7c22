use chrono::{DateTime, NaiveDateTime, Utc};

use crate::config::{Configuration, DotShape, Mode, QuoteKind, render_link};
use crate::foundation::error::DotsResult;
use crate::persist::SaveConfigRequest;
use crate::quote::{QuoteProvider, resolve_quote};
use crate::render::{PREVIEW_CANVAS, Profile, Scene, compose_wallpaper};
use crate::theme::{self, THEMES};

/// Pages of the configurator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    Create,
    Install,
    Concept,
    About,
    Auth,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Create => "create",
            View::Install => "install",
            View::Concept => "concept",
            View::About => "about",
            View::Auth => "auth",
        }
    }
}

/// Which form the auth view opens with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Identity handed over by the auth collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserSession {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Result of generating a shareable link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedLink {
    pub url: String,
    /// Present only when a user is signed in.
    pub save: Option<SaveConfigRequest>,
}

/// All configurator state in one place. Every operation is a plain method; nothing is global.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub view: View,
    pub auth_mode: AuthMode,
    pub session: Option<UserSession>,
    pub draft: Configuration,
    /// Clear the quote text from generated links so every render fetches a new one.
    pub daily_quote: bool,
    pub quote_pending: bool,
    pub generated_url: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate(&mut self, view: View) {
        tracing::debug!(from = self.view.as_str(), to = view.as_str(), "navigate");
        self.view = view;
    }

    /// Open the editor, or the sign-up form when nobody is signed in.
    pub fn start_creating(&mut self) {
        if self.session.is_some() {
            self.navigate(View::Create);
        } else {
            self.auth_mode = AuthMode::Signup;
            self.navigate(View::Auth);
        }
    }

    pub fn sign_in(&mut self, session: UserSession) {
        tracing::info!(user = %session.id, "signed in");
        self.session = Some(session);
        self.navigate(View::Create);
    }

    pub fn sign_out(&mut self) {
        self.session = None;
        self.generated_url = None;
        self.navigate(View::Home);
    }

    /// Out-of-range indices select the first theme.
    pub fn select_theme(&mut self, theme_id: i64) {
        let valid = usize::try_from(theme_id).is_ok_and(|i| i < THEMES.len());
        self.draft.theme_id = if valid { theme_id } else { 0 };
    }

    pub fn select_shape(&mut self, shape: DotShape) {
        self.draft.shape = shape;
    }

    pub fn select_mode(&mut self, mode: Mode) {
        self.draft.mode = mode;
    }

    pub fn set_birth_date(&mut self, raw: impl Into<String>) {
        self.draft.birth_date = raw.into();
    }

    pub fn set_phone_model(&mut self, model: impl Into<String>) {
        self.draft.phone_model = model.into();
    }

    pub fn set_quote_kind(&mut self, kind: QuoteKind) {
        self.draft.quote_type = kind;
        if kind == QuoteKind::None {
            self.draft.quote_text.clear();
            self.daily_quote = false;
        }
    }

    pub fn set_quote_tag(&mut self, tag: impl Into<String>) {
        self.draft.quote_tag = tag.into();
    }

    pub fn set_quote_text(&mut self, text: impl Into<String>) {
        self.draft.quote_text = text.into();
    }

    pub fn set_daily_quote(&mut self, daily: bool) {
        self.daily_quote = daily;
    }

    /// Mark a quote fetch as started. Returns what to ask for, or `None` when there is no tag or
    /// no quote kind selected.
    pub fn request_quote(&mut self) -> Option<(QuoteKind, String)> {
        let tag = self.draft.quote_tag.trim();
        if tag.is_empty() || self.draft.quote_type == QuoteKind::None {
            return None;
        }
        self.quote_pending = true;
        Some((self.draft.quote_type, tag.to_string()))
    }

    /// Store a resolved quote. A hand-fetched quote turns the daily refresh off.
    pub fn apply_quote(&mut self, text: impl Into<String>) {
        self.draft.quote_text = text.into();
        self.quote_pending = false;
        self.daily_quote = false;
    }

    /// Request, await and apply a quote in one step. Returns `false` when nothing was requested.
    pub async fn fetch_quote<P: QuoteProvider>(&mut self, provider: &P) -> bool {
        let Some((kind, tag)) = self.request_quote() else {
            return false;
        };
        let text = resolve_quote(provider, kind, &tag).await;
        self.apply_quote(text);
        true
    }

    /// Build the render link for the draft and, when signed in, the save payload.
    pub fn generate_link(&mut self, base: &str, generated_at: DateTime<Utc>) -> GeneratedLink {
        let url = render_link(base, &self.draft, self.daily_quote);
        self.generated_url = Some(url.clone());
        let save = self
            .session
            .as_ref()
            .map(|s| SaveConfigRequest::new(&s.id, &self.draft, generated_at));
        GeneratedLink { url, save }
    }

    /// Interactive preview of the draft.
    pub fn preview_scene(&self, now: NaiveDateTime) -> DotsResult<Scene> {
        compose_wallpaper(
            &self.draft,
            theme::resolve(self.draft.theme_id),
            Profile::Preview,
            PREVIEW_CANVAS,
            now,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/state.rs"]
mod tests;
