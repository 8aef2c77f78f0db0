use std::fmt::{Display, Formatter, Result as FormatResult};

use serde::Serialize;

/// Rendered HTML that fully replaces the mount point's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Markup {
    fn from(html: String) -> Self {
        Markup(html)
    }
}

impl Display for Markup {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        formatter.write_str(&self.0)
    }
}
