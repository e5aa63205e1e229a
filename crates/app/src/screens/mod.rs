//! Data-screen view models.
//!
//! Every screen is the same thin shape: fetch, hold rows, surface a
//! transient notice when a request fails, and leave whatever is already
//! on screen in place. Rendering (layout, styling, charts) belongs to the
//! embedding UI layer.

pub mod dashboard;
pub mod expenses;
pub mod ingredients;
pub mod inventory;
pub mod orders;
pub mod products;
pub mod reports;
pub mod sales;
pub mod users;

use brewpos_client::{ApiError, ApiMessage};

/// Transient feedback shown after a request completes (the snackbar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub status: String,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }

    /// Pass the backend's `{status, message}` envelope through verbatim.
    pub fn from_message(message: &ApiMessage) -> Self {
        Self {
            status: message.status.clone(),
            message: message.message.clone(),
        }
    }

    pub fn from_error(err: &ApiError) -> Self {
        match err {
            ApiError::Validation { message, .. } | ApiError::Auth { message } => {
                Self::error(message.clone())
            }
            ApiError::Network(_) => Self::error("Cannot reach the server."),
            ApiError::Server { .. } | ApiError::Decode(_) => {
                Self::error("Something went wrong on the server.")
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Peso display formatting: thousands separators, two decimals.
pub fn peso(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}\u{20B1}{grouped}.{frac:02}")
}
