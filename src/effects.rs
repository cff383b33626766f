pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
const REVEAL_TRANSITION: &str = "transition: all 0.6s ease-out;";
const TILT_DAMPING: f64 = 20.0;
const TILT_RESTING_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";
const SKILL_TAG_HOVER_SHADOW: &str = "0 5px 15px rgba(74, 144, 226, 0.4)";

pub const KEYFRAMES_CSS: &str = r#"
@keyframes navLinkFade {
    from { opacity: 0; transform: translateX(50px); }
    to { opacity: 1; transform: translateX(0); }
}

@keyframes slideIn {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
}

.nav-links a.active::after {
    width: 100%;
}
"#;

/// Once revealed an element stays revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Hidden,
    Revealed,
}

impl Reveal {
    pub fn observe(self, is_intersecting: bool) -> Self {
        if is_intersecting {
            Self::Revealed
        } else {
            self
        }
    }

    pub fn style(self) -> String {
        match self {
            Self::Hidden => format!("opacity: 0; transform: translateY(30px); {REVEAL_TRANSITION}"),
            Self::Revealed => format!("opacity: 1; transform: translateY(0); {REVEAL_TRANSITION}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn from_pointer(rect: CardRect, client_x: f64, client_y: f64) -> Self {
        let x = client_x - rect.left;
        let y = client_y - rect.top;
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;

        Self {
            rotate_x: (y - center_y) / TILT_DAMPING,
            rotate_y: (center_x - x) / TILT_DAMPING,
        }
    }

    pub fn transform(self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-10px)",
            self.rotate_x, self.rotate_y
        )
    }
}

pub fn card_transform(tilt: Option<Tilt>) -> String {
    tilt.map(Tilt::transform)
        .unwrap_or_else(|| TILT_RESTING_TRANSFORM.to_string())
}

pub fn skill_tag_shadow(hovered: bool) -> &'static str {
    if hovered {
        SKILL_TAG_HOVER_SHADOW
    } else {
        "none"
    }
}
