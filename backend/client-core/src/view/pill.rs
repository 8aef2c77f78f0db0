use models::Status;

/// Colour of the rounded status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PillStyle {
    Success,
    Danger,
    Warning,
}

impl PillStyle {
    /// Bootstrap background utility class.
    pub fn css_class(&self) -> &'static str {
        match self {
            PillStyle::Success => "text-bg-success",
            PillStyle::Danger => "text-bg-danger",
            PillStyle::Warning => "text-bg-warning",
        }
    }
}

impl From<Status> for PillStyle {
    fn from(status: Status) -> Self {
        match status {
            Status::Alive => PillStyle::Success,
            Status::Dead => PillStyle::Danger,
            Status::Unknown => PillStyle::Warning,
        }
    }
}

/// `"Alive"` → success, `"Dead"` → danger, anything else → warning.
pub fn status_pill_style(status: &str) -> PillStyle {
    PillStyle::from(Status::from(status))
}
