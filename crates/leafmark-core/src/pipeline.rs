//! The rendering pipeline: a fixed sequence of substitution stages.
//!
//! Order matters. Pre-existing `<br>` tags, fenced code and tables are
//! pulled out before the entity escape so their contents are never
//! double-processed; their placeholders are resolved again at the end,
//! after every line-oriented rule has run.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::escape::escape_html;
use crate::options::RenderOptions;
use crate::stash::{Stash, br_token};
use crate::table;

static BR_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("br pattern"));
static FENCED_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```.*?```").expect("fence pattern"));
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern"));
static HEADING_3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.*?)$").expect("heading"));
static HEADING_2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*?)$").expect("heading"));
static HEADING_1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*?)$").expect("heading"));
static ITEM_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:<li[^>]*>.*?</li>)+").expect("item run pattern"));
static ORDERED_PAREN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\)\s(.*)$").expect("ordered pattern"));
static ORDERED_DOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s(.*)$").expect("ordered pattern"));
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*?)`").expect("code pattern"));
static EMOJI_LEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(\p{Emoji}+ )").expect("emoji pattern"));

const LI_OPEN: &str = "<li style=\"margin-left: 20px;\">";

/// Converts the restricted Markdown dialect used by chat and history
/// content into an HTML fragment.
///
/// Pure and infallible: any string in, some string out. Malformed Markdown
/// degrades to literal or partially-transformed text rather than an error.
pub fn render(text: &str, options: &RenderOptions) -> String {
    let br = br_token();

    // 1. Protect pre-existing line breaks from the escape pass.
    let text = BR_TAG.replace_all(text, br.as_str()).into_owned();

    // 2. Pull fenced code blocks out before any rule can rewrite them.
    let mut code = Stash::new("code");
    let text = FENCED_CODE
        .replace_all(&text, |caps: &Captures| code.store(caps[0].to_string()))
        .into_owned();

    // 3. Tables, rendered to HTML now and parked until the end so their
    //    own tags survive the escape.
    let mut tables = Stash::new("table");
    let text = if options.tables {
        table::extract_tables(&text, &br, &mut tables)
    } else {
        text
    };

    // 4. Entity-escape what remains. Placeholder tokens carry no
    //    metacharacters and pass through unchanged.
    let mut html = escape_html(&text);

    // 5. Protected line breaks come back as literal tags.
    html = html.replace(&br, "<br>");

    // 6. Bold before italic, so double markers are consumed first.
    html = BOLD.replace_all(&html, "<strong>$1</strong>").into_owned();
    html = ITALIC.replace_all(&html, "<em>$1</em>").into_owned();

    // 7. Headers, longest prefix first. The page chrome owns h1/h2, so
    //    Markdown levels 1..3 map to h3..h5.
    html = HEADING_3.replace_all(&html, "<h5>$1</h5>").into_owned();
    html = HEADING_2.replace_all(&html, "<h4>$1</h4>").into_owned();
    html = HEADING_1.replace_all(&html, "<h3>$1</h3>").into_owned();

    // 8. Remaining newlines become explicit breaks.
    html = html.replace('\n', "<br>");

    // 9. List items, then one wrapper per contiguous run.
    html = lists(&html);

    // 10. Inline code spans. Their content already went through the escape.
    html = INLINE_CODE
        .replace_all(
            &html,
            "<code style=\"background: #f0f0f0; padding: 2px 6px; border-radius: 3px; \
             font-size: 0.9em;\">$1</code>",
        )
        .into_owned();

    // 11. Fenced code comes back as a preformatted block.
    html = code.restore_into(&html, code_block_html);

    // 12. Tables come back as-is; they were finished in stage 3.
    html = tables.restore_into(&html, str::to_string);

    // 13. Chat bubbles give a leading emoji run extra weight.
    if options.emoji_emphasis {
        html = EMOJI_LEAD
            .replace_all(
                &html,
                "<span style=\"font-size: 1.2em; font-weight: 500;\">$1</span>",
            )
            .into_owned();
    }

    html
}

/// Stage 8 consumed every newline, so "lines" are now `<br>`-separated
/// segments. Dash items are substituted per segment, the break between
/// adjacent items is dropped, and a greedy match spanning each consecutive
/// run of item tags wraps it in a single list container. Numbered items
/// (`1) ` or `1. `) become the same item tag afterwards and stay unwrapped.
fn lists(html: &str) -> String {
    let html = map_segments(html, |segment| {
        segment
            .strip_prefix("- ")
            .map(|rest| format!("{}{}</li>", LI_OPEN, rest))
            .unwrap_or_else(|| segment.to_string())
    });
    let html = html.replace("</li><br><li", "</li><li");
    let html = ITEM_RUN
        .replace_all(&html, |caps: &Captures| {
            format!(
                "<ul style=\"margin: 10px 0; padding-left: 0;\">{}</ul>",
                &caps[0]
            )
        })
        .into_owned();
    map_segments(&html, |segment| {
        if let Some(caps) = ORDERED_PAREN.captures(segment) {
            format!("{}{}</li>", LI_OPEN, &caps[1])
        } else if let Some(caps) = ORDERED_DOT.captures(segment) {
            format!("{}{}</li>", LI_OPEN, &caps[1])
        } else {
            segment.to_string()
        }
    })
}

fn map_segments(html: &str, map: impl Fn(&str) -> String) -> String {
    html.split("<br>")
        .map(|segment| map(segment))
        .collect::<Vec<_>>()
        .join("<br>")
}

fn code_block_html(fenced: &str) -> String {
    // Only the fence markers go; a leading info string stays part of the
    // body, as the chat UI always showed it.
    let body = fenced.replace("```", "");
    let body = body.trim();
    // Fenced content bypassed the escape pass; escape it on the way back in.
    format!(
        "<pre style=\"background: #2d3748; color: #e2e8f0; padding: 1rem; border-radius: 6px; \
         overflow-x: auto; margin: 0.75rem 0; font-size: 0.85em; line-height: 1.4;\"><code>{}\
         </code></pre>",
        escape_html(body)
    )
}
