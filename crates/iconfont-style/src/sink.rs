//! Stylesheet sinks: the page contexts a stylesheet is installed into.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::resource::StylesheetResource;
use crate::Result;

/// A rendering context that can load stylesheets.
///
/// Hosts implement this for their page or document type; installation
/// functions take the sink explicitly instead of reaching for a current page.
pub trait StyleSink {
    /// Add a stylesheet to the context.
    fn add_stylesheet(&mut self, resource: &StylesheetResource) -> Result<()>;
}

/// Ordered set of stylesheets attached to a page.
///
/// Adding a stylesheet that is already present is a no-op, so installation
/// is idempotent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStyles {
    stylesheets: Vec<StylesheetResource>,
}

impl PageStyles {
    /// Create an empty stylesheet set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a stylesheet is present.
    pub fn contains(&self, resource: &StylesheetResource) -> bool {
        self.stylesheets.contains(resource)
    }

    /// Get the number of stylesheets.
    pub fn len(&self) -> usize {
        self.stylesheets.len()
    }

    /// Check if no stylesheet has been added.
    pub fn is_empty(&self) -> bool {
        self.stylesheets.is_empty()
    }

    /// Iterate over stylesheets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StylesheetResource> {
        self.stylesheets.iter()
    }

    /// Render `<link>` elements for every stylesheet, one per line.
    pub fn to_link_tags(&self) -> String {
        self.stylesheets
            .iter()
            .map(|resource| {
                format!(
                    "<link rel=\"stylesheet\" href=\"{}\">",
                    escape_attribute(resource.href())
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StyleSink for PageStyles {
    fn add_stylesheet(&mut self, resource: &StylesheetResource) -> Result<()> {
        if self.contains(resource) {
            tracing::debug!("Stylesheet already present: {}", resource);
            return Ok(());
        }
        self.stylesheets.push(resource.clone());
        Ok(())
    }
}

/// A sink shared between threads.
///
/// Clones refer to the same underlying sink.
#[derive(Debug, Default)]
pub struct SharedSink<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> SharedSink<S> {
    /// Wrap a sink for shared use.
    pub fn new(sink: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sink)),
        }
    }

    /// Lock the underlying sink.
    pub fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock()
    }
}

impl<S> Clone for SharedSink<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: StyleSink> StyleSink for SharedSink<S> {
    fn add_stylesheet(&mut self, resource: &StylesheetResource) -> Result<()> {
        self.inner.lock().add_stylesheet(resource)
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_styles_deduplicate() {
        let cdn = StylesheetResource::cdn().unwrap();
        let local = StylesheetResource::theme("fa/fa.css").unwrap();

        let mut styles = PageStyles::new();
        assert!(styles.is_empty());

        styles.add_stylesheet(&cdn).unwrap();
        styles.add_stylesheet(&local).unwrap();
        styles.add_stylesheet(&cdn).unwrap();

        assert_eq!(styles.len(), 2);
        let order: Vec<_> = styles.iter().cloned().collect();
        assert_eq!(order, vec![cdn, local]);
    }

    #[test]
    fn link_tags() {
        let mut styles = PageStyles::new();
        assert_eq!(styles.to_link_tags(), "");

        styles
            .add_stylesheet(&StylesheetResource::theme("fa/fa.css?v=1&min").unwrap())
            .unwrap();
        styles
            .add_stylesheet(&StylesheetResource::external("https://example.com/fa.css").unwrap())
            .unwrap();

        assert_eq!(
            styles.to_link_tags(),
            "<link rel=\"stylesheet\" href=\"fa/fa.css?v=1&amp;min\">\n\
             <link rel=\"stylesheet\" href=\"https://example.com/fa.css\">"
        );
    }

    #[test]
    fn shared_sink_clones_share_state() {
        let shared = SharedSink::new(PageStyles::new());
        let mut handle = shared.clone();

        handle
            .add_stylesheet(&StylesheetResource::theme("fa.css").unwrap())
            .unwrap();

        assert_eq!(shared.lock().len(), 1);
    }
}
