//! Scroll-position driven presentation state: navbar elevation, the active
//! navigation link, and the scroll-to-top control.

const ELEVATED_NAVBAR_STYLE: &str = "background-color: rgba(22, 33, 62, 0.95); backdrop-filter: blur(10px);";
const PLAIN_NAVBAR_STYLE: &str = "background-color: var(--darker-bg); backdrop-filter: none;";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavbarMode {
    #[default]
    Plain,
    Elevated,
}

impl NavbarMode {
    pub fn style(self) -> &'static str {
        match self {
            Self::Plain => PLAIN_NAVBAR_STYLE,
            Self::Elevated => ELEVATED_NAVBAR_STYLE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionMetrics {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    pub elevate_after: f64,
    pub section_lookahead: f64,
    pub scroll_top_after: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            elevate_after: 100.0,
            section_lookahead: 200.0,
            scroll_top_after: 500.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct UiState {
    pub navbar: NavbarMode,
    pub active_section: Option<String>,
    pub show_scroll_top: bool,
}

pub fn compute_ui_state(offset: f64, sections: &[SectionMetrics], thresholds: &ScrollThresholds) -> UiState {
    let offset = normalize_offset(offset);

    let navbar = if offset > thresholds.elevate_after {
        NavbarMode::Elevated
    } else {
        NavbarMode::Plain
    };

    // Sections arrive in document order; the last one whose early threshold
    // has been passed wins.
    let active_section = sections
        .iter()
        .filter(|section| section.top - thresholds.section_lookahead <= offset)
        .last()
        .map(|section| section.id.clone());

    UiState {
        navbar,
        active_section,
        show_scroll_top: offset > thresholds.scroll_top_after,
    }
}

fn normalize_offset(offset: f64) -> f64 {
    if offset.is_finite() {
        offset.max(0.0)
    } else {
        0.0
    }
}

pub trait ScrollSurface {
    fn scroll_offset(&self) -> f64;
    fn sections(&self) -> Vec<SectionMetrics>;
}

pub trait ViewAdapter {
    fn set_navbar_mode(&mut self, mode: NavbarMode);
    fn set_active_section(&mut self, id: Option<&str>);
    fn set_scroll_top_visible(&mut self, visible: bool);
}

/// Applies [`compute_ui_state`] to a view, writing only the parts that
/// changed since the previous call.
#[derive(Debug, Default)]
pub struct ScrollController {
    thresholds: ScrollThresholds,
    applied: Option<UiState>,
}

impl ScrollController {
    pub fn new(thresholds: ScrollThresholds) -> Self {
        Self {
            thresholds,
            applied: None,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> Option<&UiState> {
        self.applied.as_ref()
    }

    pub fn on_scroll<S, V>(&mut self, surface: &S, view: &mut V) -> bool
    where
        S: ScrollSurface + ?Sized,
        V: ViewAdapter + ?Sized,
    {
        let offset = surface.scroll_offset();
        let sections = surface.sections();
        let next = compute_ui_state(offset, &sections, &self.thresholds);
        self.apply(next, view)
    }

    fn apply<V>(&mut self, next: UiState, view: &mut V) -> bool
    where
        V: ViewAdapter + ?Sized,
    {
        let previous = self.applied.take();
        let mut changed = false;

        if previous.as_ref().map(|state| state.navbar) != Some(next.navbar) {
            view.set_navbar_mode(next.navbar);
            changed = true;
        }

        if previous.as_ref().map(|state| &state.active_section) != Some(&next.active_section) {
            view.set_active_section(next.active_section.as_deref());
            changed = true;
        }

        if previous.as_ref().map(|state| state.show_scroll_top) != Some(next.show_scroll_top) {
            view.set_scroll_top_visible(next.show_scroll_top);
            changed = true;
        }

        self.applied = Some(next);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSurface {
        offset: f64,
        sections: Vec<SectionMetrics>,
    }

    impl ScrollSurface for FixedSurface {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn sections(&self) -> Vec<SectionMetrics> {
            self.sections.clone()
        }
    }

    #[derive(Default)]
    struct RecordingView {
        writes: Vec<String>,
    }

    impl ViewAdapter for RecordingView {
        fn set_navbar_mode(&mut self, mode: NavbarMode) {
            self.writes.push(format!("navbar:{mode:?}"));
        }

        fn set_active_section(&mut self, id: Option<&str>) {
            self.writes.push(format!("active:{}", id.unwrap_or("")));
        }

        fn set_scroll_top_visible(&mut self, visible: bool) {
            self.writes.push(format!("top:{visible}"));
        }
    }

    fn page_sections() -> Vec<SectionMetrics> {
        [("home", 0.0), ("about", 700.0), ("projects", 1500.0), ("contact", 2600.0)]
            .into_iter()
            .map(|(id, top)| SectionMetrics {
                id: id.to_string(),
                top,
                height: 600.0,
            })
            .collect()
    }

    fn state_at(offset: f64) -> UiState {
        compute_ui_state(offset, &page_sections(), &ScrollThresholds::default())
    }

    #[test]
    fn navbar_elevates_strictly_after_threshold() {
        assert_eq!(state_at(0.0).navbar, NavbarMode::Plain);
        assert_eq!(state_at(100.0).navbar, NavbarMode::Plain);
        assert_eq!(state_at(101.0).navbar, NavbarMode::Elevated);
    }

    #[test]
    fn scroll_top_shows_strictly_after_threshold() {
        assert!(!state_at(500.0).show_scroll_top);
        assert!(state_at(501.0).show_scroll_top);
    }

    #[test]
    fn active_section_switches_two_hundred_pixels_early() {
        assert_eq!(state_at(0.0).active_section.as_deref(), Some("home"));
        assert_eq!(state_at(499.0).active_section.as_deref(), Some("home"));
        assert_eq!(state_at(500.0).active_section.as_deref(), Some("about"));
        assert_eq!(state_at(1300.0).active_section.as_deref(), Some("projects"));
        assert_eq!(state_at(9_000.0).active_section.as_deref(), Some("contact"));
    }

    #[test]
    fn active_section_is_greatest_qualifying_top() {
        let sections = page_sections();
        let thresholds = ScrollThresholds::default();
        for offset in (0..3_200).step_by(37).map(f64::from) {
            let expected = sections
                .iter()
                .filter(|section| section.top - 200.0 <= offset)
                .max_by(|a, b| a.top.total_cmp(&b.top))
                .map(|section| section.id.clone());
            assert_eq!(compute_ui_state(offset, &sections, &thresholds).active_section, expected);
        }
    }

    #[test]
    fn no_section_qualifies_before_first_threshold() {
        let sections = vec![SectionMetrics {
            id: "about".to_string(),
            top: 900.0,
            height: 400.0,
        }];
        let state = compute_ui_state(699.0, &sections, &ScrollThresholds::default());
        assert_eq!(state.active_section, None);
    }

    #[test]
    fn empty_page_never_has_active_section() {
        let state = compute_ui_state(5_000.0, &[], &ScrollThresholds::default());
        assert_eq!(state.active_section, None);
        assert_eq!(state.navbar, NavbarMode::Elevated);
        assert!(state.show_scroll_top);
    }

    #[test]
    fn negative_overscroll_reads_as_top() {
        let state = state_at(-40.0);
        assert_eq!(state.navbar, NavbarMode::Plain);
        assert_eq!(state.active_section.as_deref(), Some("home"));
    }

    #[test]
    fn repeated_offset_converges_without_extra_writes() {
        let surface = FixedSurface {
            offset: 800.0,
            sections: page_sections(),
        };
        let mut view = RecordingView::default();
        let mut controller = ScrollController::new(ScrollThresholds::default());

        assert!(controller.on_scroll(&surface, &mut view));
        assert_eq!(view.writes, vec!["navbar:Elevated", "active:about", "top:true"]);

        assert!(!controller.on_scroll(&surface, &mut view));
        assert_eq!(view.writes.len(), 3);
    }

    #[test]
    fn each_part_is_written_independently() {
        let mut surface = FixedSurface {
            offset: 50.0,
            sections: page_sections(),
        };
        let mut view = RecordingView::default();
        let mut controller = ScrollController::new(ScrollThresholds::default());
        controller.on_scroll(&surface, &mut view);
        view.writes.clear();

        surface.offset = 150.0;
        assert!(controller.on_scroll(&surface, &mut view));
        assert_eq!(view.writes, vec!["navbar:Elevated"]);

        view.writes.clear();
        surface.offset = 520.0;
        controller.on_scroll(&surface, &mut view);
        assert_eq!(view.writes, vec!["active:about", "top:true"]);
        assert_eq!(
            controller.state().and_then(|state| state.active_section.as_deref()),
            Some("about")
        );
    }

    #[test]
    fn navbar_styles_differ_by_mode() {
        assert!(NavbarMode::Elevated.style().contains("blur(10px)"));
        assert!(NavbarMode::Plain.style().contains("var(--darker-bg)"));
    }
}
