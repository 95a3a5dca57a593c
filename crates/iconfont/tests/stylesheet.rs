//! Integration tests for stylesheet installation.

use std::thread;

use iconfont::prelude::*;
use iconfont::style::{CDN_STYLESHEET, SharedSink};

#[test]
fn page_setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let mut page = PageStyles::new();
    install_default(&mut page).unwrap();

    let link = page.to_link_tags();
    assert_eq!(link, format!("<link rel=\"stylesheet\" href=\"{CDN_STYLESHEET}\">"));
    assert!(CDN_STYLESHEET.contains(iconfont::FONT_AWESOME_VERSION));
}

#[test]
fn configured_location_replaces_cdn() {
    let config = IconFontConfig::from_toml_str(
        r#"
        [stylesheet]
        theme = "font-awesome/css/font-awesome.min.css"
        "#,
    )
    .unwrap();

    let mut page = PageStyles::new();
    config.install(&mut page).unwrap();

    assert_eq!(page.len(), 1);
    assert!(!page.iter().any(StylesheetResource::is_external));
}

#[test]
fn shared_page_installs_once_across_threads() {
    let page = SharedSink::new(PageStyles::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let mut sink = page.clone();
            thread::spawn(move || install_default(&mut sink))
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(page.lock().len(), 1);
}

#[test]
fn compose_is_shareable_across_threads() {
    let variants = [IconVariant::Spin, IconVariant::SizeLarge];
    let expected = compose(Icon::cog, &variants);

    let results: Vec<_> = (0..4)
        .map(|_| thread::spawn(move || compose(Icon::cog, &variants)))
        .map(|handle| handle.join().unwrap())
        .collect();

    assert!(results.iter().all(|html| *html == expected));
}
