//! Transient notifications shown after cart events.

use serde::Serialize;
use std::fmt;

use crate::error::CartError;
use crate::locale::{Locale, Message};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    /// Material icon name for the kind.
    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Success => "check_circle",
            NoticeKind::Info => "info",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
        }
    }
}

/// A localized, short-lived message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// Build a notice from a message in the given language.
    pub fn new(kind: NoticeKind, message: &Message, locale: Locale) -> Self {
        Self {
            kind,
            message: message.text(locale),
        }
    }

    /// Map a cart error to what the shopper sees.
    pub fn from_error(error: &CartError, locale: Locale) -> Self {
        match error {
            CartError::EmptyCart => Self::new(NoticeKind::Warning, &Message::CartEmpty, locale),
            CartError::QuantityExceedsLimit(..) => {
                Self::new(NoticeKind::Warning, &Message::QuantityLimit, locale)
            }
            other => Self {
                kind: NoticeKind::Error,
                message: other.to_string(),
            },
        }
    }

    /// Material icon name for this notice.
    pub fn icon(&self) -> &'static str {
        self.kind.icon()
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_is_warning() {
        let notice = Notice::from_error(&CartError::EmptyCart, Locale::En);
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.message, "Your cart is empty");
        assert_eq!(notice.icon(), "warning");
    }

    #[test]
    fn test_other_errors_use_error_text() {
        let notice = Notice::from_error(&CartError::Overflow, Locale::Mm);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Arithmetic overflow in money calculation");
    }

    #[test]
    fn test_icons() {
        assert_eq!(NoticeKind::Success.icon(), "check_circle");
        assert_eq!(NoticeKind::Info.icon(), "info");
        assert_eq!(NoticeKind::Error.icon(), "error");
    }
}
