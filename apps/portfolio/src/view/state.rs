//! UI state machine: active section plus dark-mode flag.
//!
//! Each interaction is an `Action`; `UiState::update` returns the next state
//! instead of mutating in place, so controls can be rendered as links to the
//! state they produce.

use serde::Deserialize;

use crate::content::SectionKey;

/// Fixed location and suggested save name of the CV document.
pub const CV_PATH: &str = "/cv.pdf";
pub const CV_FILENAME: &str = "YonathanCristaldo_CV.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Query string of `/`. Absent fields fall back to the initial state.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub section: Option<SectionKey>,
    pub theme: Option<Theme>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub active_section: SectionKey,
    pub dark_mode: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectSection(SectionKey),
    ToggleDarkMode,
    DownloadCv,
}

/// Client-side download to trigger: navigate to `path`, save as `filename`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadRequest {
    pub path: &'static str,
    pub filename: &'static str,
}

impl DownloadRequest {
    pub const CV: DownloadRequest = DownloadRequest {
        path: CV_PATH,
        filename: CV_FILENAME,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Download(DownloadRequest),
}

/// Rendered target of a control: a page state, or a file to save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub download: Option<&'static str>,
}

impl UiState {
    pub fn from_query(query: &ViewQuery) -> Self {
        UiState {
            active_section: query.section.unwrap_or_default(),
            dark_mode: query.theme.unwrap_or_default() == Theme::Dark,
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    pub fn update(self, action: Action) -> (UiState, Option<Effect>) {
        match action {
            Action::SelectSection(key) => (
                UiState {
                    active_section: key,
                    ..self
                },
                None,
            ),
            Action::ToggleDarkMode => (
                UiState {
                    dark_mode: !self.dark_mode,
                    ..self
                },
                None,
            ),
            Action::DownloadCv => (self, Some(Effect::Download(DownloadRequest::CV))),
        }
    }

    /// Link a control dispatching `action` should point at.
    pub fn link(self, action: Action) -> Link {
        match self.update(action) {
            (_, Some(Effect::Download(request))) => Link {
                href: request.path.to_string(),
                download: Some(request.filename),
            },
            (next, None) => Link {
                href: next.href(),
                download: None,
            },
        }
    }

    /// Link target that renders this state.
    pub fn href(&self) -> String {
        format!(
            "/?section={}&theme={}",
            self.active_section,
            self.theme().as_str()
        )
    }
}
