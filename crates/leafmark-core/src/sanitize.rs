use std::collections::HashSet;

use ammonia::Builder;

use crate::options::RenderOptions;
use crate::pipeline::render;

/// Renders and then cleans the fragment against an allow-list of exactly
/// the markup the pipeline emits.
///
/// The table and fenced-code paths carry backend-supplied content past the
/// entity escape; callers that do not fully trust stored history content
/// can use this instead of [`render`].
pub fn render_sanitized(text: &str, options: &RenderOptions) -> String {
    let raw_html = render(text, options);

    let tags: HashSet<&'static str> = [
        "br", "code", "div", "em", "h3", "h4", "h5", "li", "pre", "span", "strong", "table",
        "tbody", "td", "th", "thead", "tr", "ul",
    ]
    .iter()
    .copied()
    .collect();

    let mut generic_attributes: HashSet<&'static str> = HashSet::new();
    generic_attributes.insert("class");
    generic_attributes.insert("style");

    Builder::new()
        .tags(tags)
        .generic_attributes(generic_attributes)
        .clean(&raw_html)
        .to_string()
}
