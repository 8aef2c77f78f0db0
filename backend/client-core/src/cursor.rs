//! Pagination cursor state.
//!
//! A [`PageCursor`] is only ever produced from a successful page response
//! (or freshly from the base URL), so it is replaced wholesale rather than
//! edited field by field.

use models::api::ApiPageInfo;

use url::Url;

/// Which way the user is paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Forward,
    Backward,
}

impl From<bool> for PageDirection {
    fn from(forward: bool) -> Self {
        if forward {
            PageDirection::Forward
        } else {
            PageDirection::Backward
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    base: Url,
    next: Option<Url>,
    previous: Option<Url>,
}

impl PageCursor {
    /// A cursor with no neighbours; every direction resolves to `base`.
    pub fn new(base: Url) -> Self {
        Self {
            base,
            next: None,
            previous: None,
        }
    }

    pub fn with_links(base: Url, next: Option<Url>, previous: Option<Url>) -> Self {
        Self {
            base,
            next,
            previous,
        }
    }

    /// Build the cursor described by a page's `info` block.
    ///
    /// Links are resolved against `base`, so both absolute URLs (what the
    /// public API sends) and relative references are accepted.
    pub fn from_page_info(base: &Url, info: &ApiPageInfo) -> Result<Self, url::ParseError> {
        let next = info.next.as_deref().map(|link| base.join(link)).transpose()?;
        let previous = info.prev.as_deref().map(|link| base.join(link)).transpose()?;

        Ok(Self::with_links(base.clone(), next, previous))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn next(&self) -> Option<&Url> {
        self.next.as_ref()
    }

    pub fn previous(&self) -> Option<&Url> {
        self.previous.as_ref()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// URL to request for `direction`, falling back to the base listing.
    pub fn target(&self, direction: PageDirection) -> &Url {
        let link = match direction {
            PageDirection::Forward => self.next.as_ref(),
            PageDirection::Backward => self.previous.as_ref(),
        };

        link.unwrap_or(&self.base)
    }
}
