use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use js_sys::Array;
use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};
use yew::prelude::*;

use crate::config::{InteractionConfig, CONFIG_ELEMENT_ID};
use crate::contact::{self, ContactDraft, ContactField, ValidationError};
use crate::effects::{
    card_transform, skill_tag_shadow, CardRect, Reveal, Tilt, KEYFRAMES_CSS, REVEAL_ROOT_MARGIN,
    REVEAL_THRESHOLD,
};
use crate::error::MountError;
use crate::highlight::tokenize;
use crate::logging::{self, log_event};
use crate::nav::{anchor_scroll_top, anchor_target, scroll_top_button_style, MenuState, ScrollMotion};
use crate::notification::{ActiveNotification, NotificationCenter, NotificationEvent, Severity};
use crate::scroll::{NavbarMode, ScrollController, ScrollSurface, SectionMetrics, ViewAdapter};
use crate::typewriter::Typewriter;

const MOUNT_POINT_ID: &str = "app";
const SECTION_SELECTOR: &str = "section[id]";
const OWNER_NAME: &str = "Alex Morgan";
const HERO_HEADLINE: &str = "Hi, I'm Alex Morgan";

static NAV_ITEMS: [(&str, &str); 7] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("code", "Code"),
    ("experience", "Experience"),
    ("contact", "Contact"),
];

static SKILL_GROUPS: [(&str, &[&str]); 3] = [
    ("Languages", &["Rust", "TypeScript", "Python", "SQL"]),
    ("Frontend", &["Yew", "WebAssembly", "HTML", "CSS"]),
    ("Tooling", &["Git", "Docker", "Linux", "CI/CD"]),
];

struct Project {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    href: &'static str,
}

static PROJECTS: [Project; 3] = [
    Project {
        title: "Trailhead",
        description: "Offline-first hiking planner that syncs routes when a connection returns.",
        tags: &["Rust", "SQLite", "PWA"],
        href: "https://github.com/",
    },
    Project {
        title: "Ledgerline",
        description: "Budget dashboard rendering thousands of transactions without jank.",
        tags: &["TypeScript", "WebAssembly"],
        href: "https://github.com/",
    },
    Project {
        title: "Pulse",
        description: "Uptime monitor with a tiny status page and webhook alerts.",
        tags: &["Rust", "Tokio", "Postgres"],
        href: "https://github.com/",
    },
];

static CODE_SAMPLES: [(&str, &str); 2] = [
    (
        "debounce.js",
        "// Run fn at most once per wait window\nfunction debounce(fn, wait) {\n  let timer = null;\n  return (...args) => {\n    clearTimeout(timer);\n    timer = setTimeout(() => fn(...args), wait);\n  };\n}",
    ),
    (
        "api.ts",
        "/* Fetch a profile and fall back to a guest */\nexport async function loadProfile(id) {\n  const res = await fetch(`/api/profile/${id}`);\n  if (res.status !== 200) return { name: \"guest\" };\n  return res.json();\n}",
    ),
];

static EXPERIENCE: [(&str, &str, &str); 3] = [
    ("2024 — Present", "Software Engineer, Northwind", "Owns the customer-facing web client and its WebAssembly rendering core."),
    ("2022 — 2024", "Frontend Developer, Bluebird Labs", "Shipped the design system and cut bundle size by a third."),
    ("2021", "Intern, City Transit Data", "Built dashboards for live vehicle positions."),
];

static CONTACT_ITEMS: [(&str, &str, &str); 3] = [
    ("fas fa-envelope", "Email", "hello@example.com"),
    ("fab fa-github", "GitHub", "github.com/alexmorgan"),
    ("fas fa-map-marker-alt", "Location", "Remote"),
];

fn document() -> Option<Document> {
    window()?.document()
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn scroll_window_to(top: f64) {
    let Some(win) = window() else {
        return;
    };

    let behavior = match ScrollMotion::for_preference(prefers_reduced_motion()) {
        ScrollMotion::Smooth => ScrollBehavior::Smooth,
        ScrollMotion::Instant => ScrollBehavior::Instant,
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(behavior);
    win.scroll_to_with_scroll_to_options(&options);
}

fn scroll_to_anchor(href: &str, anchor_offset: f64) {
    let Some(id) = anchor_target(href) else {
        return;
    };

    // Unknown targets are ignored.
    let Some(target) = document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    scroll_window_to(anchor_scroll_top(f64::from(target.offset_top()), anchor_offset));
}

struct DomScrollSurface {
    window: Window,
    document: Document,
}

impl DomScrollSurface {
    fn new() -> Option<Self> {
        let window = window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl ScrollSurface for DomScrollSurface {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn sections(&self) -> Vec<SectionMetrics> {
        let Ok(nodes) = self.document.query_selector_all(SECTION_SELECTOR) else {
            return Vec::new();
        };

        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .filter(|section| !section.id().is_empty())
            .map(|section| SectionMetrics {
                id: section.id(),
                top: f64::from(section.offset_top()),
                height: f64::from(section.client_height()),
            })
            .collect()
    }
}

struct YewScrollView {
    navbar: UseStateHandle<NavbarMode>,
    active_section: UseStateHandle<Option<String>>,
    scroll_top_visible: UseStateHandle<bool>,
}

impl ViewAdapter for YewScrollView {
    fn set_navbar_mode(&mut self, mode: NavbarMode) {
        self.navbar.set(mode);
    }

    fn set_active_section(&mut self, id: Option<&str>) {
        self.active_section.set(id.map(str::to_string));
    }

    fn set_scroll_top_visible(&mut self, visible: bool) {
        self.scroll_top_visible.set(visible);
    }
}

/// Holds at most one pending timeout. Arming replaces the previous handle,
/// and dropping a gloo `Timeout` clears it.
#[derive(Default)]
struct TimerSlot {
    pending: Option<Timeout>,
}

impl TimerSlot {
    fn arm(&mut self, delay_ms: u64, callback: impl FnOnce() + 'static) {
        let delay_ms = u32::try_from(delay_ms).unwrap_or(u32::MAX);
        self.pending = Some(Timeout::new(delay_ms, callback));
    }

    fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

fn sync_notification(
    center: Rc<RefCell<NotificationCenter>>,
    shown: UseStateHandle<Option<ActiveNotification>>,
    timer: Rc<RefCell<TimerSlot>>,
) {
    let now = logging::now_unix_millis();
    let deadline = {
        let mut center = center.borrow_mut();
        if let Some(NotificationEvent::Removed { id }) = center.advance(now) {
            log::debug!("notification {id} dismissed");
        }
        shown.set(center.current().cloned());
        center.next_deadline()
    };

    let mut slot = timer.borrow_mut();
    match deadline {
        Some(deadline) => {
            let delay_ms = deadline.saturating_sub(now);
            let timer_handle = timer.clone();
            slot.arm(delay_ms, move || sync_notification(center, shown, timer_handle));
        }
        None => slot.cancel(),
    }
}

type RevealCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_reveal(element: &Element, reveal: UseStateHandle<Reveal>) -> Option<(IntersectionObserver, RevealCallback)> {
    let callback = RevealCallback::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };

            if (*reveal).observe(entry.is_intersecting()) == Reveal::Revealed {
                observer.unobserve(&entry.target());
                reveal.set(Reveal::Revealed);
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some((observer, callback))
}

#[derive(Properties, PartialEq)]
struct RevealBlockProps {
    class: AttrValue,
    #[prop_or_default]
    children: Html,
}

#[function_component(RevealBlock)]
fn reveal_block(props: &RevealBlockProps) -> Html {
    let node = use_node_ref();
    let reveal = use_state(Reveal::default);

    {
        let node = node.clone();
        let reveal = reveal.clone();
        use_effect_with((), move |_| {
            let observation = node
                .cast::<Element>()
                .and_then(|element| observe_reveal(&element, reveal));

            move || {
                if let Some((observer, _callback)) = observation {
                    observer.disconnect();
                }
            }
        });
    }

    html! {
        <div class={props.class.clone()} ref={node} style={(*reveal).style()}>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AnchorLinkProps {
    href: AttrValue,
    anchor_offset: f64,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    on_navigate: Callback<()>,
    #[prop_or_default]
    children: Html,
}

#[function_component(AnchorLink)]
fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let anchor_offset = props.anchor_offset;
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |event: MouseEvent| {
            if anchor_target(&href).is_none() {
                return;
            }
            event.prevent_default();
            on_navigate.emit(());
            scroll_to_anchor(&href, anchor_offset);
        })
    };

    html! {
        <a class={props.class.clone()} href={props.href.clone()} {onclick}>
            {props.children.clone()}
        </a>
    }
}

enum TypewriterAction {
    Tick,
}

impl Reducible for Typewriter {
    type Action = TypewriterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TypewriterAction::Tick => {
                let mut next = (*self).clone();
                if next.tick() {
                    Rc::new(next)
                } else {
                    self
                }
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct TypedHeadingProps {
    text: AttrValue,
    start_delay_ms: u32,
    char_interval_ms: u32,
}

#[function_component(TypedHeading)]
fn typed_heading(props: &TypedHeadingProps) -> Html {
    let typewriter = {
        let text = props.text.to_string();
        use_reducer_eq(move || {
            if prefers_reduced_motion() {
                Typewriter::completed(text)
            } else {
                Typewriter::new(text)
            }
        })
    };
    let ticker = use_mut_ref(|| None::<Interval>);

    {
        let dispatcher = typewriter.dispatcher();
        let ticker = ticker.clone();
        let already_complete = typewriter.is_complete();
        let start_delay_ms = props.start_delay_ms;
        let char_interval_ms = props.char_interval_ms;
        use_effect_with((), move |_| {
            let starter = (!already_complete).then(|| {
                let ticker = ticker.clone();
                Timeout::new(start_delay_ms, move || {
                    *ticker.borrow_mut() = Some(Interval::new(char_interval_ms, move || {
                        dispatcher.dispatch(TypewriterAction::Tick);
                    }));
                })
            });

            move || {
                drop(starter);
                drop(ticker.borrow_mut().take());
            }
        });
    }

    {
        let ticker = ticker.clone();
        use_effect_with(typewriter.is_complete(), move |complete| {
            if *complete {
                drop(ticker.borrow_mut().take());
            }
            || ()
        });
    }

    html! {
        <h1 aria-label={props.text.clone()}>
            <span aria-hidden="true">{typewriter.visible().to_string()}</span>
        </h1>
    }
}

#[derive(Properties, PartialEq)]
struct SkillTagProps {
    label: AttrValue,
}

#[function_component(SkillTag)]
fn skill_tag(props: &SkillTagProps) -> Html {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <span
            class="skill-tag"
            style={format!("box-shadow: {};", skill_tag_shadow(*hovered))}
            {onmouseenter}
            {onmouseleave}
        >
            {props.label.clone()}
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    title: AttrValue,
    description: AttrValue,
    tags: Vec<AttrValue>,
    href: AttrValue,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let node = use_node_ref();
    let tilt = use_state(|| None::<Tilt>);

    let onmousemove = {
        let node = node.clone();
        let tilt = tilt.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(card) = node.cast::<Element>() else {
                return;
            };
            let bounds = card.get_bounding_client_rect();
            let rect = CardRect {
                left: bounds.left(),
                top: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
            };
            tilt.set(Some(Tilt::from_pointer(
                rect,
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            )));
        })
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(None))
    };

    html! {
        <RevealBlock class="project-card">
            <article
                class="project-card-body"
                ref={node}
                style={format!("transform: {};", card_transform(*tilt))}
                {onmousemove}
                {onmouseleave}
            >
                <h3>{props.title.clone()}</h3>
                <p>{props.description.clone()}</p>
                <ul class="project-tags">
                    { for props.tags.iter().map(|tag| html! { <li>{tag.clone()}</li> }) }
                </ul>
                <a class="project-link" href={props.href.clone()} target="_blank" rel="noopener noreferrer">
                    {"View source"}
                </a>
            </article>
        </RevealBlock>
    }
}

#[derive(Properties, PartialEq)]
struct CodeCardProps {
    title: AttrValue,
    source: AttrValue,
}

#[function_component(CodeCard)]
fn code_card(props: &CodeCardProps) -> Html {
    let tokens = tokenize(&props.source)
        .into_iter()
        .map(|token| match token.kind.color() {
            Some(color) => html! {
                <span style={format!("color: {color};")}>{token.text.to_string()}</span>
            },
            None => html! { {token.text.to_string()} },
        })
        .collect::<Html>();

    html! {
        <RevealBlock class="code-card">
            <div class="code-header">{props.title.clone()}</div>
            <pre><code>{tokens}</code></pre>
        </RevealBlock>
    }
}

fn input_value(event: &InputEvent) -> String {
    let Some(target) = event.target() else {
        return String::new();
    };

    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }

    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
struct ContactFormProps {
    on_notify: Callback<(String, Severity)>,
}

#[function_component(ContactForm)]
fn contact_form(props: &ContactFormProps) -> Html {
    let draft = use_state(ContactDraft::default);

    let on_field = |field: ContactField| {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let mut next = (*draft).clone();
            next.set(field, input_value(&event));
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let outcome = contact::submit(&*draft);
            match &outcome.result {
                Ok(submission) => log_event(
                    log::Level::Info,
                    "contact_form_submitted",
                    json!({
                        "nameLength": submission.name.chars().count(),
                        "emailLength": submission.email.chars().count(),
                        "messageLength": submission.message.chars().count(),
                    }),
                ),
                Err(ValidationError::MissingFields(fields)) => log_event(
                    log::Level::Info,
                    "contact_form_rejected",
                    json!({ "missing": fields }),
                ),
            }

            if outcome.clear_fields {
                draft.set(ContactDraft::default());
            }
            on_notify.emit((outcome.message.to_string(), outcome.severity));
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <input
                type="text"
                name="name"
                placeholder="Your Name"
                value={draft.name.clone()}
                oninput={on_field(ContactField::Name)}
            />
            <input
                type="email"
                name="email"
                placeholder="Your Email"
                value={draft.email.clone()}
                oninput={on_field(ContactField::Email)}
            />
            <textarea
                name="message"
                rows="5"
                placeholder="Your Message"
                value={draft.message.clone()}
                oninput={on_field(ContactField::Message)}
            />
            <button type="submit" class="btn btn-primary">{"Send Message"}</button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: InteractionConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config;
    let navbar_mode = use_state(NavbarMode::default);
    let active_section = use_state(|| None::<String>);
    let scroll_top_visible = use_state(|| false);
    let scroll_top_hovered = use_state(|| false);
    let menu = use_state(MenuState::default);
    let notification_center = use_mut_ref(|| NotificationCenter::new(config.notification_timing()));
    let notification_timer = use_mut_ref(TimerSlot::default);
    let shown_notification = use_state(|| None::<ActiveNotification>);

    {
        let mut view = YewScrollView {
            navbar: navbar_mode.clone(),
            active_section: active_section.clone(),
            scroll_top_visible: scroll_top_visible.clone(),
        };
        let thresholds = config.scroll_thresholds();
        use_effect_with((), move |_| {
            let listener = DomScrollSurface::new().map(|surface| {
                let mut controller = ScrollController::new(thresholds);
                controller.on_scroll(&surface, &mut view);

                let target = surface.window.clone();
                EventListener::new(&target, "scroll", move |_| {
                    controller.on_scroll(&surface, &mut view);
                })
            });

            move || drop(listener)
        });
    }

    {
        let notification_timer = notification_timer.clone();
        use_effect_with((), move |_| {
            move || notification_timer.borrow_mut().cancel()
        });
    }

    let on_notify = {
        let center = notification_center.clone();
        let shown = shown_notification.clone();
        let timer = notification_timer.clone();
        Callback::from(move |(message, severity): (String, Severity)| {
            let event = center
                .borrow_mut()
                .show(message, severity, logging::now_unix_millis());
            if let NotificationEvent::Shown { id, replaced } = event {
                log_event(
                    log::Level::Debug,
                    "notification_shown",
                    json!({ "id": id, "severity": severity.as_str(), "replaced": replaced }),
                );
            }
            sync_notification(center.clone(), shown.clone(), timer.clone());
        })
    };

    let on_burger = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.set(menu.closed()))
    };

    let on_scroll_top = Callback::from(|_: MouseEvent| scroll_window_to(0.0));
    let on_scroll_top_enter = {
        let hovered = scroll_top_hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_scroll_top_leave = {
        let hovered = scroll_top_hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let anchor_offset = config.anchor_offset;

    html! {
        <>
            <style>{KEYFRAMES_CSS}</style>
            <nav class="navbar" style={(*navbar_mode).style()}>
                <div class="nav-container">
                    <AnchorLink class={classes!("logo")} href="#home" {anchor_offset} on_navigate={close_menu.clone()}>
                        {"AM"}
                    </AnchorLink>
                    <ul class={menu.menu_class()}>
                        { for NAV_ITEMS.iter().enumerate().map(|(index, (id, label))| {
                            let is_active = (*active_section).as_deref() == Some(*id);
                            html! {
                                <li style={menu.link_animation(index)}>
                                    <AnchorLink
                                        class={classes!(is_active.then_some("active"))}
                                        href={format!("#{id}")}
                                        {anchor_offset}
                                        on_navigate={close_menu.clone()}
                                    >
                                        {*label}
                                    </AnchorLink>
                                </li>
                            }
                        }) }
                    </ul>
                    <div
                        class={menu.burger_class()}
                        role="button"
                        aria-label="Toggle navigation"
                        aria-expanded={menu.is_open().to_string()}
                        onclick={on_burger}
                    >
                        <div class="line1"></div>
                        <div class="line2"></div>
                        <div class="line3"></div>
                    </div>
                </div>
            </nav>

            <section id="home" class="hero">
                <div class="hero-content">
                    <TypedHeading
                        text={HERO_HEADLINE}
                        start_delay_ms={config.typing_start_delay_ms}
                        char_interval_ms={config.typing_char_interval_ms}
                    />
                    <p class="hero-subtitle">{"Rust and web engineer building fast, friendly interfaces."}</p>
                    <div class="hero-buttons">
                        <AnchorLink class={classes!("btn", "btn-primary")} href="#projects" {anchor_offset}>{"View My Work"}</AnchorLink>
                        <AnchorLink class={classes!("btn", "btn-secondary")} href="#contact" {anchor_offset}>{"Get In Touch"}</AnchorLink>
                    </div>
                </div>
            </section>

            <section id="about" class="about">
                <h2 class="section-title">{"About Me"}</h2>
                <RevealBlock class="about-content">
                    <p>
                        {"I'm "}{OWNER_NAME}{", a software engineer who likes small, fast tools and the people who use them. "}
                        {"Most of my recent work compiles to WebAssembly."}
                    </p>
                </RevealBlock>
            </section>

            <section id="skills" class="skills">
                <h2 class="section-title">{"Skills"}</h2>
                <div class="skills-grid">
                    { for SKILL_GROUPS.iter().map(|(group, skills)| html! {
                        <div class="skill-category">
                            <h3>{*group}</h3>
                            <div class="skill-tags">
                                { for skills.iter().map(|skill| html! { <SkillTag label={*skill} /> }) }
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="projects" class="projects">
                <h2 class="section-title">{"Projects"}</h2>
                <div class="projects-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <ProjectCard
                            title={project.title}
                            description={project.description}
                            tags={project.tags.iter().map(|tag| AttrValue::from(*tag)).collect::<Vec<_>>()}
                            href={project.href}
                        />
                    }) }
                </div>
            </section>

            <section id="code" class="code-showcase">
                <h2 class="section-title">{"Code Samples"}</h2>
                <div class="code-grid">
                    { for CODE_SAMPLES.iter().map(|(title, source)| html! {
                        <CodeCard title={*title} source={*source} />
                    }) }
                </div>
            </section>

            <section id="experience" class="experience">
                <h2 class="section-title">{"Experience"}</h2>
                <div class="timeline">
                    { for EXPERIENCE.iter().map(|(period, role, summary)| html! {
                        <RevealBlock class="timeline-item">
                            <span class="timeline-date">{*period}</span>
                            <h3>{*role}</h3>
                            <p>{*summary}</p>
                        </RevealBlock>
                    }) }
                </div>
            </section>

            <section id="contact" class="contact">
                <h2 class="section-title">{"Get In Touch"}</h2>
                <div class="contact-content">
                    <div class="contact-info">
                        { for CONTACT_ITEMS.iter().map(|(icon, label, value)| html! {
                            <RevealBlock class="contact-item">
                                <i class={*icon} aria-hidden="true"></i>
                                <span class="contact-label">{*label}</span>
                                <span class="contact-value">{*value}</span>
                            </RevealBlock>
                        }) }
                    </div>
                    <ContactForm on_notify={on_notify} />
                </div>
            </section>

            <footer class="footer">
                <p>{format!("© {OWNER_NAME}")}</p>
            </footer>

            { for (*shown_notification).as_ref().map(|notification| html! {
                <div class={notification.class()} style={notification.style()} role="status">
                    {notification.message.clone()}
                </div>
            }) }

            <button
                class="scroll-to-top"
                type="button"
                aria-label="Scroll to top"
                style={scroll_top_button_style(*scroll_top_visible, *scroll_top_hovered)}
                onclick={on_scroll_top}
                onmouseenter={on_scroll_top_enter}
                onmouseleave={on_scroll_top_leave}
            >
                <i class="fas fa-arrow-up" aria-hidden="true"></i>
            </button>
        </>
    }
}

fn load_config(document: &Document) -> InteractionConfig {
    let source = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    let (config, rejected) = InteractionConfig::resolve(source.as_deref());
    logging::init(config.log_level);
    if let Some(error) = rejected {
        log_event(
            log::Level::Warn,
            "config_invalid",
            json!({ "error": error.to_string() }),
        );
    }
    config
}

pub fn run() -> Result<(), MountError> {
    let document = window()
        .ok_or(MountError::MissingWindow)?
        .document()
        .ok_or(MountError::MissingDocument)?;

    let config = load_config(&document);
    log_event(
        log::Level::Debug,
        "config_loaded",
        json!({
            "navbarElevateAfter": config.navbar_elevate_after,
            "sectionLookahead": config.section_lookahead,
            "scrollTopAfter": config.scroll_top_after,
            "notificationDwellMs": config.notification_dwell_ms,
            "logLevel": config.log_level.as_str(),
        }),
    );

    let root = document
        .get_element_by_id(MOUNT_POINT_ID)
        .ok_or(MountError::MissingMountPoint(MOUNT_POINT_ID))?;

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();

    logging::print_welcome();
    log_event(
        log::Level::Info,
        "app_mounted",
        json!({ "mountPoint": MOUNT_POINT_ID }),
    );
    Ok(())
}
