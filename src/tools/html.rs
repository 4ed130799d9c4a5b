use regex::Regex;
use std::sync::LazyLock;

static BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static WRAPPED_BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*(.+)\*\*$").unwrap());
static KNOWN_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\*\*(Advantage|Clear Advantage|Structural Importance|Expansion of Future|Contrast with|Contrast / What to be grateful for|Trajectory conclusion|Fact to retain|Sources \(Fact IDs\)|Verification links)\b",
    )
    .unwrap()
});

const HEADING_STYLE: &str = "margin: 1.5em 0 0.6em 0; font-size: 1.1em; font-weight: 600;";
const PARAGRAPH_STYLE: &str = "margin: 0 0 1.25em 0;";

pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn is_heading_line(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return false;
    }
    if line.starts_with("### ") || line == "Sources:" {
        return true;
    }
    if line.starts_with("**") && line.ends_with("**") && line.matches("**").count() == 2 {
        return true;
    }
    KNOWN_HEADING.is_match(line)
}

fn heading_to_html(line: &str) -> String {
    let raw = line.trim();
    let content = match raw.strip_prefix("### ") {
        Some(rest) => rest.trim().to_string(),
        None => WRAPPED_BOLD.replace(raw, "$1").into_owned(),
    };
    format!("<h3 style=\"{}\">{}</h3>", HEADING_STYLE, escape(&content))
}

fn paragraph_to_html(text: &str) -> String {
    let safe = escape(text);
    let safe = BOLD.replace_all(&safe, "<strong>$1</strong>");
    format!(
        "<p style=\"{}\">{}</p>",
        PARAGRAPH_STYLE,
        safe.replace('\n', "<br>")
    )
}

/// Blank-line separated blocks become paragraphs; a block whose first line
/// looks like a heading is split into a heading and a paragraph.
pub fn reflection_to_html(reflection: &str) -> String {
    let mut parts = Vec::new();
    for block in BLANK_LINE.split(reflection) {
        let lines = block
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();
        let Some(first) = lines.first() else {
            continue;
        };
        if is_heading_line(first) {
            parts.push(heading_to_html(first));
            let rest = lines[1..].join("\n");
            if !rest.is_empty() {
                parts.push(paragraph_to_html(&rest));
            }
        } else {
            parts.push(paragraph_to_html(block.trim()));
        }
    }
    parts.join("\n")
}

pub fn email_document(reflection: &str) -> String {
    format!(
        r#"<html>
  <head></head>
  <body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif; line-height: 1.6; color: #333; max-width: 680px; margin: 0 auto; padding: 20px;">
    <div style="background-color: #f8f9fa; padding: 20px; border-radius: 8px; margin-bottom: 20px;">
      <p style="margin: 0; font-size: 14px; color: #666;">
        <strong>Reminder:</strong> Read this reflection out loud and anchor to the facts.
      </p>
    </div>
    <div style="font-size: 16px; line-height: 1.8;">
{}
    </div>
  </body>
</html>
"#,
        reflection_to_html(reflection)
    )
}
