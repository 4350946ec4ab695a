use crate::view::state::Theme;

/// Class names applied per element for one color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub card: &'static str,
    pub section_card: &'static str,
    pub heading: &'static str,
    pub nav_bar: &'static str,
    pub nav_selected: &'static str,
    pub nav_unselected: &'static str,
    pub contact_button: &'static str,
    pub bubble: &'static str,
    pub switch_track: &'static str,
    pub download_button: &'static str,
}

const LIGHT: Palette = Palette {
    page: "page page--light",
    card: "card card--light",
    section_card: "section-card section-card--light",
    heading: "heading--light",
    nav_bar: "nav nav--light",
    nav_selected: "nav-button nav-button--selected-light",
    nav_unselected: "nav-button nav-button--light",
    contact_button: "contact-button contact-button--light",
    bubble: "bubble bubble--light",
    switch_track: "switch switch--light",
    download_button: "download-button download-button--light",
};

const DARK: Palette = Palette {
    page: "page page--dark",
    card: "card card--dark",
    section_card: "section-card section-card--dark",
    heading: "heading--dark",
    nav_bar: "nav nav--dark",
    nav_selected: "nav-button nav-button--selected-dark",
    nav_unselected: "nav-button nav-button--dark",
    contact_button: "contact-button contact-button--dark",
    bubble: "bubble bubble--dark",
    switch_track: "switch switch--dark",
    download_button: "download-button download-button--dark",
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    pub fn nav_button(&self, selected: bool) -> &'static str {
        if selected {
            self.nav_selected
        } else {
            self.nav_unselected
        }
    }
}
