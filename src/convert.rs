use std::collections::HashMap;
use std::sync::LazyLock;

use html2md::{Handle, StructuredPrinter, TagHandler, TagHandlerFactory};
use regex::Regex;
use url::Url;

static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Tags whose text is never page content.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "title"];

/// Drops the tag together with everything inside it.
#[derive(Debug, Default)]
struct SkipHandler;

impl TagHandler for SkipHandler {
    fn handle(&mut self, _tag: &Handle, _printer: &mut StructuredPrinter) {}

    fn after_handle(&mut self, _printer: &mut StructuredPrinter) {}

    fn skip_descendants(&self) -> bool {
        true
    }
}

/// Converts a fetched page to markdown.
///
/// Links stay inline, images and tables are kept, lines are never wrapped and
/// non-ASCII text is not transliterated. html2md backslash-escapes `_ * ~ < > \`
/// in body text, so `__NEXT_DATA__` comes out as `\_\_NEXT\_DATA\_\_`.
/// Script, style, noscript and title contents are dropped.
pub fn to_markdown(html: &str) -> String {
    let mut handlers: HashMap<String, Box<dyn TagHandlerFactory>> = HashMap::new();
    for tag in SKIPPED_TAGS {
        handlers.insert((*tag).to_owned(), Box::new(SkipHandler::default));
    }
    html2md::parse_html_custom(html, &handlers)
}

/// Normalizes converted markdown before it is written.
///
/// Blank-line runs are collapsed to a single blank line, a `# Title` heading
/// derived from `identifier` is added when the text does not already open with
/// a heading, and a `<!-- Source: ... -->` comment is put on top. The result
/// always ends with exactly one newline.
pub fn clean_markdown(markdown: &str, identifier: &str, source_url: &Url) -> String {
    let mut body = BLANK_RUN_RE.replace_all(markdown, "\n\n").into_owned();

    if !body.trim_start().starts_with('#') {
        let title = title_from_identifier(identifier);
        body = format!("# {title}\n\n{body}");
    }

    format!("<!-- Source: {source_url} -->\n\n{}\n", body.trim())
}

/// `2.1-application-initialization-and-lifecycle` -> `2.1 Application Initialization And Lifecycle`.
pub fn title_from_identifier(identifier: &str) -> String {
    let mut title = String::with_capacity(identifier.len());
    let mut prev_is_letter = false;
    for ch in identifier.chars() {
        let ch = if ch == '-' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_is_letter {
                title.extend(ch.to_lowercase());
            } else {
                title.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            title.push(ch);
            prev_is_letter = false;
        }
    }
    title
}
