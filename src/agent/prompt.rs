use anyhow::Context;
use std::fs;
use std::path::Path;

use crate::facts::catalog::{country_name, HOME_COUNTRY};
use crate::facts::{EvidencePack, Indicator};

pub const PROMPT: &str = r#"
# Role & Context
You write a short daily reflection for one reader living in Canada. The goal is to anchor the
reader in concrete, verifiable advantages of their baseline situation, without hype and without
inventing anything.

# Today's Focus
- Date: {{date}}
- Focus category: {{category}}
- Contrast emphasis: {{comparison}}

# Verified Evidence Pack
Use only the facts below. Each one has an ID such as [F003].

{{facts}}

# Live Indicators
{{indicators}}

# Structure
- **Advantage**: one paragraph on the focus category.
- **Structural Importance**: why this advantage compounds over time.
- **Contrast with** another country: name the country explicitly and compare.
- **Fact to retain**: a single sentence worth remembering.
- **Sources (Fact IDs)**: the IDs you used.

# Evidence-use rules (non-negotiable)
- Cite only the fact IDs listed above, at the end of the sentence, e.g. [F003].
- Every numeric, ranking, policy, or country-specific claim must carry a citation.
- If a claim is not in the evidence pack, omit it. Do not introduce new numbers or rankings.
- Include at least one explicit contrast between Canada and another named country.
- Use at least 4 different fact IDs when the pack has that many.
- Stay under 500 words.
"#;

const NO_INDICATORS: &str = "No live indicators are available today; rely on the evidence pack.";

pub fn load_template(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            log::info!("loading prompt template from {}", path.display());
            let template = fs::read_to_string(path)
                .with_context(|| format!("Reading prompt template {}", path.display()))?;
            if template.trim().is_empty() {
                anyhow::bail!("Prompt template {} is empty", path.display());
            }
            Ok(template)
        }
        None => Ok(PROMPT.to_string()),
    }
}

pub fn render_facts(pack: &EvidencePack) -> String {
    pack.facts
        .iter()
        .map(|fact| {
            format!(
                "[{}] | Category: {}\nCanada advantage: {}\nContrast context: {}\nSource(s): {} ({})\nAs-of: {}",
                fact.id,
                fact.category,
                fact.statement,
                fact.contrast,
                fact.source_urls.join(" ; "),
                fact.source_name,
                fact.as_of
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_indicator_group(group: &[&Indicator]) -> String {
    let first = group[0];
    let values = group
        .iter()
        .map(|i| {
            format!(
                "{} {} ({})",
                country_name(&i.country_code),
                i.formatted_value(),
                i.year
            )
        })
        .collect::<Vec<_>>()
        .join("; ");
    let direction = if first.higher_is_better {
        "higher is better"
    } else {
        "lower is better"
    };
    format!(
        "[{}] | {}: {} ({})\nSource: {}",
        first.id, first.label, values, direction, first.source_url
    )
}

/// Indicators sharing an ID are rendered on one line so the country contrast
/// stays visible.
pub fn render_indicators(pack: &EvidencePack) -> String {
    if pack.indicators.is_empty() {
        return NO_INDICATORS.to_string();
    }
    let mut groups: Vec<Vec<&Indicator>> = Vec::new();
    for indicator in &pack.indicators {
        match groups.last_mut() {
            Some(group) if group[0].id == indicator.id => group.push(indicator),
            _ => groups.push(vec![indicator]),
        }
    }
    groups
        .iter()
        .map(|g| render_indicator_group(g))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Fills the template placeholders. Evidence blocks missing from a custom
/// template are appended so every fact ID reaches the model.
pub fn render_prompt(template: &str, pack: &EvidencePack) -> String {
    let facts = render_facts(pack);
    let indicators = render_indicators(pack);
    let comparison = format!(
        "{} (home country: {})",
        pack.comparison.label,
        country_name(HOME_COUNTRY)
    );

    let mut output = template
        .replace("{{date}}", &pack.date.format("%Y-%m-%d").to_string())
        .replace("{{category}}", pack.category.label())
        .replace("{{comparison}}", &comparison);

    let mut appended = Vec::new();
    if output.contains("{{facts}}") {
        output = output.replace("{{facts}}", &facts);
    } else {
        appended.push(format!("Verified evidence pack:\n\n{}", facts));
    }
    if output.contains("{{indicators}}") {
        output = output.replace("{{indicators}}", &indicators);
    } else {
        appended.push(format!("Live indicators:\n\n{}", indicators));
    }

    let mut output = output.trim().to_string();
    for block in appended {
        output.push_str("\n\n");
        output.push_str(&block);
    }
    output
}
