//! Single-slot transient notifications.
//!
//! The center is driven by explicit millisecond timestamps. Each visible
//! notification owns exactly one pending deadline; showing a new one replaces
//! the notification together with its deadline, so a dismissal scheduled for
//! an older notification can never remove a newer one.

const NOTIFICATION_BASE_STYLE: &str = "position: fixed; top: 100px; right: 20px; padding: 15px 25px; color: white; border-radius: 5px; box-shadow: 0 5px 15px rgba(0, 0, 0, 0.3); z-index: 10000; font-weight: 500;";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    fn background(self) -> &'static str {
        match self {
            Self::Info => "var(--primary-color)",
            Self::Success => "#2ecc71",
            Self::Error => "#e94b3c",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Leaving,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationTiming {
    pub dwell_ms: u64,
    pub exit_ms: u64,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            dwell_ms: 4_000,
            exit_ms: 300,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveNotification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
    deadline: u64,
}

impl ActiveNotification {
    pub fn class(&self) -> String {
        format!("notification notification-{}", self.severity.as_str())
    }

    pub fn style(&self) -> String {
        let animation = match self.phase {
            Phase::Visible => "slideIn 0.3s ease-out",
            Phase::Leaving => "slideOut 0.3s ease-out",
        };
        format!(
            "{NOTIFICATION_BASE_STYLE} background-color: {}; animation: {animation};",
            self.severity.background()
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationEvent {
    Shown { id: u64, replaced: Option<u64> },
    Leaving { id: u64 },
    Removed { id: u64 },
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    timing: NotificationTiming,
    current: Option<ActiveNotification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new(timing: NotificationTiming) -> Self {
        Self {
            timing,
            current: None,
            next_id: 0,
        }
    }

    pub fn current(&self) -> Option<&ActiveNotification> {
        self.current.as_ref()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.current.as_ref().map(|notification| notification.deadline)
    }

    pub fn show(&mut self, message: impl Into<String>, severity: Severity, now: u64) -> NotificationEvent {
        self.next_id += 1;
        let id = self.next_id;
        let replaced = self
            .current
            .replace(ActiveNotification {
                id,
                message: message.into(),
                severity,
                phase: Phase::Visible,
                deadline: now.saturating_add(self.timing.dwell_ms),
            })
            .map(|previous| previous.id);

        NotificationEvent::Shown { id, replaced }
    }

    /// Moves the current notification through every transition whose deadline
    /// is at or before `now`, returning the last one taken.
    pub fn advance(&mut self, now: u64) -> Option<NotificationEvent> {
        let mut last = None;

        while let Some(notification) = self.current.as_mut() {
            if notification.deadline > now {
                break;
            }

            match notification.phase {
                Phase::Visible => {
                    notification.phase = Phase::Leaving;
                    notification.deadline = notification.deadline.saturating_add(self.timing.exit_ms);
                    last = Some(NotificationEvent::Leaving { id: notification.id });
                }
                Phase::Leaving => {
                    let id = notification.id;
                    self.current = None;
                    last = Some(NotificationEvent::Removed { id });
                }
            }
        }

        last
    }
}
