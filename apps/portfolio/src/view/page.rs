//! Portfolio page: assembles the view-model for one `UiState` and renders it.

use askama::Template;
use rand::Rng;

use crate::content::models::ContactKind;
use crate::content::{ContentSections, Education, Job, Profile, SectionKey};
use crate::view::background::Background;
use crate::view::state::{Action, Link, UiState};
use crate::view::theme::Palette;

/// Entrance delay between consecutive cards.
pub const STAGGER_STEP_MS: u32 = 100;

pub const TECHNICAL_SKILLS_TITLE: &str = "Habilidades Técnicas";
pub const SOFT_SKILLS_TITLE: &str = "Habilidades Blandas";
pub const DOWNLOAD_LABEL: &str = "Descargar CV";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavControl {
    pub key: SectionKey,
    pub label: &'static str,
    pub href: String,
    pub selected: bool,
    pub class: &'static str,
}

/// A list item paired with its entrance delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staggered<'a, T> {
    pub item: &'a T,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCard {
    pub title: &'static str,
    pub items: &'static [&'static str],
    pub delay_ms: u32,
    pub enter_from_right: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody<'a> {
    Profile(&'a str),
    Experience(Vec<Staggered<'a, Job>>),
    Education(Vec<Staggered<'a, Education>>),
    Skills(Vec<SkillCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSwitch {
    pub checked: bool,
    pub href: String,
    pub class: &'static str,
}

#[derive(Template)]
#[template(path = "portfolio.html")]
pub struct PortfolioPage<'a> {
    pub state: UiState,
    pub profile: &'a Profile,
    pub palette: Palette,
    pub background: Background,
    pub nav: Vec<NavControl>,
    pub section_title: &'static str,
    pub body: SectionBody<'a>,
    pub theme_switch: ThemeSwitch,
    pub download: Link,
    pub download_label: &'static str,
}

fn stagger<T>(items: &[T]) -> Vec<Staggered<'_, T>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| Staggered {
            item,
            delay_ms: i as u32 * STAGGER_STEP_MS,
        })
        .collect()
}

/// Navigation controls in key declaration order; exactly one is selected.
pub fn nav_controls(
    content: &ContentSections,
    state: UiState,
    palette: &Palette,
) -> Vec<NavControl> {
    SectionKey::ALL
        .iter()
        .map(|&key| {
            let selected = state.active_section == key;
            NavControl {
                key,
                label: content.title(key),
                href: state.link(Action::SelectSection(key)).href,
                selected,
                class: palette.nav_button(selected),
            }
        })
        .collect()
}

pub fn section_body(content: &ContentSections, key: SectionKey) -> SectionBody<'_> {
    match key {
        SectionKey::Profile => SectionBody::Profile(content.profile.content),
        SectionKey::Experience => SectionBody::Experience(stagger(content.experience.content)),
        SectionKey::Education => SectionBody::Education(stagger(content.education.content)),
        SectionKey::Skills => SectionBody::Skills(vec![
            SkillCard {
                title: TECHNICAL_SKILLS_TITLE,
                items: content.skills.content.technical,
                delay_ms: 0,
                enter_from_right: false,
            },
            SkillCard {
                title: SOFT_SKILLS_TITLE,
                items: content.skills.content.soft,
                delay_ms: STAGGER_STEP_MS,
                enter_from_right: true,
            },
        ]),
    }
}

impl<'a> PortfolioPage<'a> {
    pub fn new<R: Rng + ?Sized>(
        content: &'a ContentSections,
        profile: &'a Profile,
        state: UiState,
        rng: &mut R,
    ) -> Self {
        let palette = Palette::for_theme(state.theme());

        PortfolioPage {
            state,
            profile,
            background: Background::render(&palette, rng),
            nav: nav_controls(content, state, &palette),
            section_title: content.title(state.active_section),
            body: section_body(content, state.active_section),
            theme_switch: ThemeSwitch {
                checked: state.dark_mode,
                href: state.link(Action::ToggleDarkMode).href,
                class: palette.switch_track,
            },
            download: state.link(Action::DownloadCv),
            download_label: DOWNLOAD_LABEL,
            palette,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CONTENT, PROFILE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state(key: SectionKey, dark_mode: bool) -> UiState {
        UiState {
            active_section: key,
            dark_mode,
        }
    }

    fn render(state: UiState) -> String {
        let mut rng = StdRng::seed_from_u64(1);
        PortfolioPage::new(&CONTENT, &PROFILE, state, &mut rng)
            .render()
            .expect("template renders")
    }

    fn assert_in_order(html: &str, needles: &[&str]) {
        let mut from = 0;
        for needle in needles {
            let pos = html[from..]
                .find(needle)
                .unwrap_or_else(|| panic!("'{needle}' missing or out of order"));
            from += pos + needle.len();
        }
    }

    #[test]
    fn test_exactly_active_control_selected() {
        let palette = Palette::for_theme(crate::view::state::Theme::Light);
        for active in SectionKey::ALL {
            let nav = nav_controls(&CONTENT, state(active, false), &palette);
            let keys: Vec<SectionKey> = nav.iter().map(|c| c.key).collect();
            assert_eq!(keys, SectionKey::ALL);
            for control in &nav {
                assert_eq!(control.selected, control.key == active);
                assert_eq!(control.class, palette.nav_button(control.key == active));
            }
        }
    }

    #[test]
    fn test_nav_links_keep_theme() {
        let palette = Palette::for_theme(crate::view::state::Theme::Dark);
        let nav = nav_controls(&CONTENT, state(SectionKey::Profile, true), &palette);
        assert_eq!(nav[3].href, "/?section=skills&theme=dark");
    }

    #[test]
    fn test_body_matches_table_entry() {
        assert_eq!(
            section_body(&CONTENT, SectionKey::Profile),
            SectionBody::Profile(CONTENT.profile.content)
        );
        match section_body(&CONTENT, SectionKey::Experience) {
            SectionBody::Experience(jobs) => {
                let items: Vec<&Job> = jobs.iter().map(|s| s.item).collect();
                let expected: Vec<&Job> = CONTENT.experience.content.iter().collect();
                assert_eq!(items, expected);
                let delays: Vec<u32> = jobs.iter().map(|s| s.delay_ms).collect();
                assert_eq!(delays, [0, 100, 200]);
            }
            other => panic!("unexpected body {other:?}"),
        }
        match section_body(&CONTENT, SectionKey::Education) {
            SectionBody::Education(entries) => {
                let items: Vec<&Education> = entries.iter().map(|s| s.item).collect();
                let expected: Vec<&Education> = CONTENT.education.content.iter().collect();
                assert_eq!(items, expected);
                let delays: Vec<u32> = entries.iter().map(|s| s.delay_ms).collect();
                assert_eq!(delays, [0, 100, 200]);
            }
            other => panic!("unexpected body {other:?}"),
        }
        match section_body(&CONTENT, SectionKey::Skills) {
            SectionBody::Skills(cards) => {
                assert_eq!(cards[0].items, CONTENT.skills.content.technical);
                assert_eq!(cards[1].items, CONTENT.skills.content.soft);
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_initial_render_shows_profile_paragraph() {
        let html = render(UiState::default());
        assert!(html.contains(CONTENT.profile.content));
        assert!(html.contains("Yonathan Ariel Cristaldo"));
        assert!(html.contains("page page--light"));
        assert!(html.contains(r#"aria-checked="false""#));
    }

    #[test]
    fn test_experience_render_preserves_order() {
        let html = render(state(SectionKey::Experience, false));
        assert_in_order(
            &html,
            &[
                "Desarrollo de Software - EasyRent (Proyecto Institucional)",
                "Participé activamente en un equipo de desarrollo, aplicando metodologías ágiles.",
                "Colaboré en la automatización de procesos de desarrollo y pruebas.",
                "Proyecto de Investigación - Universidad Nacional de Misiones",
                "Ayudantía ad honorem - Universidad Nacional de Misiones",
                "Asistente en las cátedras de Estadística I.",
                "Desarrollé habilidades de liderazgo y comunicación efectiva al orientar a estudiantes.",
            ],
        );
        assert!(!html.contains(CONTENT.profile.content));
    }

    #[test]
    fn test_education_render_preserves_order() {
        let html = render(state(SectionKey::Education, true));
        assert_in_order(
            &html,
            &[
                "Analista en Sistemas",
                "2018-2023",
                "Licenciatura en Sistemas de Información (En curso)",
                "2019-Actualidad",
                "Técnico Electromecánico",
                "EPET N°30",
                "2012-2017",
            ],
        );
    }

    #[test]
    fn test_skills_render_preserves_order() {
        let html = render(state(SectionKey::Skills, false));
        let mut expected = vec![TECHNICAL_SKILLS_TITLE];
        expected.extend_from_slice(CONTENT.skills.content.technical);
        expected.push(SOFT_SKILLS_TITLE);
        expected.extend_from_slice(CONTENT.skills.content.soft);
        assert_in_order(&html, &expected);
    }

    #[test]
    fn test_dark_render_recolors() {
        let html = render(state(SectionKey::Profile, true));
        assert!(html.contains("page page--dark"));
        assert!(html.contains("bubble bubble--dark"));
        assert!(html.contains(r#"aria-checked="true""#));
        assert!(!html.contains("page--light"));
    }

    #[test]
    fn test_download_control_rendered() {
        let html = render(state(SectionKey::Education, false));
        assert!(html.contains(r#"cv.pdf" download="#));
        assert!(html.contains(r#"download="YonathanCristaldo_CV.pdf""#));
        assert!(html.contains(DOWNLOAD_LABEL));
    }

    #[test]
    fn test_contacts_open_new_context() {
        let html = render(UiState::default());
        for contact in PROFILE.contacts {
            assert!(html.contains(contact.label));
        }
        assert_eq!(
            html.matches(r#"target="_blank""#).count(),
            PROFILE.contacts.len()
        );
    }

    #[test]
    fn test_twenty_bubbles_rendered() {
        let html = render(UiState::default());
        assert_eq!(html.matches("bubble bubble--light").count(), 20);
    }

    #[test]
    fn test_background_inert_without_stylesheet() {
        let html = render(UiState::default());
        let start = html.find(r#"<div class="backdrop""#).unwrap();
        let tag = &html[start..start + html[start..].find('>').unwrap()];
        assert!(tag.contains("position: fixed"));
        assert!(tag.contains("pointer-events: none"));
        assert_eq!(html.matches("position: absolute;").count(), 20);
    }

    #[test]
    fn test_revisiting_section_reproduces_content() {
        let first = section_body(&CONTENT, SectionKey::Experience);
        let _ = section_body(&CONTENT, SectionKey::Skills);
        let again = section_body(&CONTENT, SectionKey::Experience);
        assert_eq!(first, again);
    }
}
