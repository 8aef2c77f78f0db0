use crate::view::Markup;

/// The single mount point rendered views are written to.
///
/// Every call fully replaces what was mounted before.
pub trait RenderTarget: Send + Sync + 'static {
    fn mount(&self, markup: Markup);
}
