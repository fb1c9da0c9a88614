use crate::error::DashboardError;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeLevel::Success => write!(f, "✅"),
            NoticeLevel::Warning => write!(f, "⚠️ "),
            NoticeLevel::Error => write!(f, "❌"),
        }
    }
}

/// A user-facing status line in a view, optionally followed by the columns
/// the offending table actually has.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub available_columns: Option<Vec<String>>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            available_columns: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
            available_columns: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            available_columns: None,
        }
    }

    pub fn with_available_columns(mut self, columns: &[String]) -> Self {
        self.available_columns = Some(columns.to_vec());
        self
    }

    /// Turn a recoverable processing error into a warning.
    pub fn from_error(err: &DashboardError) -> Self {
        match err {
            DashboardError::MissingColumn {
                required,
                available,
            } => Notice::warning(format!("Missing column(s): {}", quote_all(required)))
                .with_available_columns(available),
            other => Notice::warning(other.to_string()),
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!("{} {}", self.level, self.message);
        if let Some(ref columns) = self.available_columns {
            out.push_str(&format!("\n   Available columns: {}", quote_all(columns)));
        }
        out
    }
}

pub(crate) fn quote_all(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("'{}'", n))
        .collect::<Vec<_>>()
        .join(", ")
}
