//! Allow-list cleaning for editor output and stored descriptions.

use std::sync::LazyLock;

use ammonia::Builder;

static CLEANER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder
        .add_generic_attributes(&["class", "dir"])
        .link_rel(Some("noopener noreferrer"));
    builder
});

/// Strip scripts, event handlers and unsafe URLs from `html`.
pub fn sanitize(html: &str) -> String {
    CLEANER.clean(html).to_string()
}
