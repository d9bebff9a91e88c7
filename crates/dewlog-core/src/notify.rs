//! Platform notifier collaborator and transient UI notices.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Notification permission state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Granted,
    Denied,
    /// The platform has no notification capability at all.
    Unsupported,
}

/// Platform notification service.
///
/// The engine never talks to the OS directly; the host injects an
/// implementation (desktop toast, terminal bell, test recorder). Missing
/// permission suppresses delivery silently -- reminder evaluation keeps
/// running either way.
pub trait Notifier {
    fn permission(&self) -> Permission;
    fn request_permission(&mut self) -> Permission;
    fn send(&mut self, title: &str, body: &str, icon: &str);
}

/// Ask the platform for notification permission and describe the outcome.
///
/// On an unsupported platform this surfaces an error notice and performs no
/// further action.
pub fn request_notification_permission<N: Notifier>(notifier: &mut N) -> Notice {
    if notifier.permission() == Permission::Unsupported {
        return Notice::error("Notifications are not supported on this platform.");
    }
    match notifier.request_permission() {
        Permission::Granted => Notice::success("Notification permission granted!", 3),
        _ => Notice::error("Notification permission denied."),
    }
}

pub const COLOR_SUCCESS: &str = "#25be4d";
pub const COLOR_ERROR: &str = "red";
pub const COLOR_WARNING: &str = "orange";
pub const COLOR_INFO: &str = "cyan";

/// Transient user-visible message.
///
/// The engine only constructs these; the UI layer displays one and clears
/// it after `timeout_secs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub color: String,
    pub timeout_secs: u64,
}

impl Notice {
    pub fn success(message: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            message: message.into(),
            color: COLOR_SUCCESS.into(),
            timeout_secs,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            color: COLOR_ERROR.into(),
            timeout_secs: 3,
        }
    }

    pub fn warning(message: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            message: message.into(),
            color: COLOR_WARNING.into(),
            timeout_secs,
        }
    }

    pub fn info(message: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            message: message.into(),
            color: COLOR_INFO.into(),
            timeout_secs,
        }
    }

    /// Transient notice for a rejected operation. Duplicate reminders are a
    /// warning, everything else an error.
    pub fn from_validation(err: &ValidationError) -> Self {
        match err {
            ValidationError::DuplicateReminder(_) => Notice::warning(err.to_string(), 3),
            _ => Notice::error(err.to_string()),
        }
    }
}
