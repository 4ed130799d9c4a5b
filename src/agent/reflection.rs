use regex::Regex;
use std::sync::LazyLock;

use crate::facts::EvidencePack;

pub const DEFAULT_MAX_WORDS: usize = 550;

static FACT_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(F\d{1,4})\]").unwrap());
static BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Keeps whole paragraphs while they fit in `max_words`. A first paragraph
/// that alone exceeds the limit is cut at the word boundary.
pub fn truncate_by_words(text: &str, max_words: usize) -> String {
    let mut kept: Vec<String> = Vec::new();
    let mut count = 0;
    for paragraph in BLANK_LINE.split(text) {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        let words = paragraph.split_whitespace().count();
        if count + words <= max_words {
            kept.push(paragraph.to_string());
            count += words;
        } else {
            if count == 0 {
                kept.push(
                    paragraph
                        .split_whitespace()
                        .take(max_words)
                        .collect::<Vec<_>>()
                        .join(" "),
                );
            }
            break;
        }
    }
    kept.join("\n\n")
}

/// Citations such as `[F003]` that refer to something in the pack, in
/// first-seen order.
pub fn cited_fact_ids(text: &str, pack: &EvidencePack) -> Vec<String> {
    let known = pack.fact_ids();
    let mut cited: Vec<String> = Vec::new();
    for caps in FACT_ID.captures_iter(text) {
        let id = &caps[1];
        if known.contains(&id) && !cited.iter().any(|c| c == id) {
            cited.push(id.to_string());
        }
    }
    cited
}

/// Appends every unique source URL of the pack, in pack order.
pub fn append_verification_links(text: &str, pack: &EvidencePack) -> String {
    let urls = pack.source_urls();
    if urls.is_empty() {
        return text.trim_end().to_string();
    }
    let mut output = format!("{}\n\nSources:", text.trim_end());
    for url in urls {
        output.push_str("\n- ");
        output.push_str(url);
    }
    output
}
