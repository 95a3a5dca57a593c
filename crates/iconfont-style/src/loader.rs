//! Installing the icon font stylesheet into a rendering context.

use crate::resource::StylesheetResource;
use crate::sink::StyleSink;
use crate::Result;

/// Install the stylesheet from the versioned CDN location.
///
/// ```
/// use iconfont_style::{PageStyles, install_default, CDN_STYLESHEET};
///
/// let mut page = PageStyles::new();
/// install_default(&mut page)?;
/// assert_eq!(page.iter().next().map(|r| r.href()), Some(CDN_STYLESHEET));
/// # Ok::<(), iconfont_style::Error>(())
/// ```
pub fn install_default<S: StyleSink + ?Sized>(sink: &mut S) -> Result<()> {
    install_from(sink, &StylesheetResource::cdn()?)
}

/// Install the stylesheet from a caller-supplied location.
///
/// The typical production setup points this at a trimmed font subset
/// bundled with the application's theme.
pub fn install_from<S: StyleSink + ?Sized>(
    sink: &mut S,
    resource: &StylesheetResource,
) -> Result<()> {
    tracing::info!(
        "Installing Font Awesome {} stylesheet: {}",
        iconfont_core::FONT_AWESOME_VERSION,
        resource
    );
    sink.add_stylesheet(resource).inspect_err(|e| {
        tracing::warn!("Failed to install icon font stylesheet {}: {}", resource, e);
    })
}
