const NAV_LINK_FADE_SECONDS: f64 = 0.5;
const NAV_LINK_STAGGER_DIVISOR: f64 = 7.0;
const NAV_LINK_BASE_DELAY_SECONDS: f64 = 0.3;
const SCROLL_TOP_BASE_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; width: 50px; height: 50px; background-color: var(--primary-color); color: white; border: none; border-radius: 50%; cursor: pointer; font-size: 1.2rem; z-index: 1000; box-shadow: 0 5px 15px rgba(74, 144, 226, 0.4); transition: all 0.3s ease;";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn menu_class(self) -> &'static str {
        if self.open {
            "nav-links nav-active"
        } else {
            "nav-links"
        }
    }

    pub fn burger_class(self) -> &'static str {
        if self.open {
            "burger toggle"
        } else {
            "burger"
        }
    }

    pub fn link_animation(self, index: usize) -> Option<String> {
        if !self.open {
            return None;
        }

        let delay = index as f64 / NAV_LINK_STAGGER_DIVISOR + NAV_LINK_BASE_DELAY_SECONDS;
        Some(format!(
            "animation: navLinkFade {NAV_LINK_FADE_SECONDS}s ease forwards {delay}s"
        ))
    }
}

/// Returns the element id an in-page link points at.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn anchor_scroll_top(target_top: f64, anchor_offset: f64) -> f64 {
    (target_top - anchor_offset).max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMotion {
    Smooth,
    Instant,
}

impl ScrollMotion {
    pub fn for_preference(prefers_reduced_motion: bool) -> Self {
        if prefers_reduced_motion {
            Self::Instant
        } else {
            Self::Smooth
        }
    }
}

pub fn scroll_top_button_style(visible: bool, hovered: bool) -> String {
    let display = if visible { "block" } else { "none" };
    let scale = if hovered { "1.1" } else { "1" };
    format!("{SCROLL_TOP_BASE_STYLE} display: {display}; transform: scale({scale});")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burger_toggles_and_links_close() {
        let menu = MenuState::default();
        assert!(!menu.is_open());

        let menu = menu.toggled();
        assert!(menu.is_open());
        assert_eq!(menu.menu_class(), "nav-links nav-active");
        assert_eq!(menu.burger_class(), "burger toggle");

        assert!(!menu.toggled().is_open());
        assert!(!menu.closed().is_open());
        assert!(!menu.closed().closed().is_open());
    }

    #[test]
    fn open_menu_staggers_link_animation() {
        let menu = MenuState::default().toggled();
        assert_eq!(
            menu.link_animation(0).as_deref(),
            Some("animation: navLinkFade 0.5s ease forwards 0.3s")
        );
        assert_eq!(
            menu.link_animation(7).as_deref(),
            Some("animation: navLinkFade 0.5s ease forwards 1.3s")
        );
        assert_eq!(MenuState::default().link_animation(2), None);
    }

    #[test]
    fn anchor_targets_only_in_page_fragments() {
        assert_eq!(anchor_target("#projects"), Some("projects"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
        assert_eq!(anchor_target("/resume.pdf"), None);
    }

    #[test]
    fn anchor_scroll_accounts_for_fixed_navbar() {
        assert_eq!(anchor_scroll_top(900.0, 70.0), 830.0);
        assert_eq!(anchor_scroll_top(20.0, 70.0), 0.0);
    }

    #[test]
    fn reduced_motion_disables_smooth_scroll() {
        assert_eq!(ScrollMotion::for_preference(true), ScrollMotion::Instant);
        assert_eq!(ScrollMotion::for_preference(false), ScrollMotion::Smooth);
    }

    #[test]
    fn scroll_top_button_hides_and_scales() {
        let hidden = scroll_top_button_style(false, false);
        assert!(hidden.ends_with("display: none; transform: scale(1);"));

        let hovered = scroll_top_button_style(true, true);
        assert!(hovered.ends_with("display: block; transform: scale(1.1);"));
        assert!(hovered.contains("var(--primary-color)"));
    }
}
