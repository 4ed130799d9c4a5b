use chrono::NaiveDate;
use state_anchor::agent::prompt::{load_template, render_prompt, PROMPT};
use state_anchor::facts::catalog::COMPARISON_PROFILES;
use state_anchor::facts::{facts_for, Category, EvidencePack, Indicator};
use std::fs;
use tempfile::tempdir;

fn indicator(country: &str, value: f64) -> Indicator {
    Indicator {
        id: "F108".to_string(),
        label: "Inflation, consumer prices (annual %)".to_string(),
        country_code: country.to_string(),
        value,
        year: "2024".to_string(),
        source_url: "https://data.worldbank.org/indicator/FP.CPI.TOTL.ZG?locations=CA-AR"
            .to_string(),
        decimals: 1,
        higher_is_better: false,
    }
}

fn finance_pack(indicators: Vec<Indicator>) -> EvidencePack {
    EvidencePack {
        date: NaiveDate::from_ymd_opt(2025, 4, 2).expect("valid date"),
        category: Category::Finance,
        comparison: &COMPARISON_PROFILES[5],
        facts: facts_for(Category::Finance),
        indicators,
    }
}

#[test]
fn render_prompt_fills_every_placeholder() {
    let pack = finance_pack(vec![indicator("CA", 2.4), indicator("AR", 219.9)]);

    let output = render_prompt(PROMPT, &pack);

    assert!(!output.contains("{{"));
    assert!(output.contains("Date: 2025-04-02"));
    assert!(output.contains("Focus category: Currency, capital, and financial system"));
    assert!(output.contains("high-inflation settings"));
}

#[test]
fn render_prompt_mentions_every_fact_id() {
    let pack = finance_pack(Vec::new());

    let output = render_prompt(PROMPT, &pack);

    for id in pack.fact_ids() {
        assert!(output.contains(&format!("[{id}]")), "missing {id}");
    }
    assert!(output.contains("No live indicators are available today"));
}

#[test]
fn render_prompt_contrasts_two_countries_for_indicators() {
    let pack = finance_pack(vec![indicator("CA", 2.4), indicator("AR", 219.9)]);

    let output = render_prompt(PROMPT, &pack);

    assert!(output.contains(
        "[F108] | Inflation, consumer prices (annual %): Canada 2.4% (2024); Argentina 219.9% (2024) (lower is better)"
    ));
    assert!(output.contains("Canada"));
    assert!(output.contains("Argentina"));
}

#[test]
fn render_prompt_appends_blocks_missing_from_custom_template() {
    let pack = finance_pack(vec![indicator("CA", 2.4), indicator("AR", 219.9)]);

    let output = render_prompt("Write about {{category}}.", &pack);

    assert!(output.starts_with("Write about Currency, capital, and financial system."));
    assert!(output.contains("Verified evidence pack:"));
    assert!(output.contains("Live indicators:"));
    assert!(output.contains("[F003]"));
    assert!(output.contains("[F108]"));
}

#[test]
fn load_template_defaults_to_builtin_prompt() {
    let template = load_template(None).expect("Failed to load template");

    assert_eq!(template, PROMPT);
}

#[test]
fn load_template_reads_file() {
    let dir = tempdir().expect("Failed to create tempdir");
    let path = dir.path().join("prompt.txt");
    fs::write(&path, "Custom {{facts}}").expect("Failed to write template");

    let template = load_template(Some(path.as_path())).expect("Failed to load template");

    assert_eq!(template, "Custom {{facts}}");
}

#[test]
fn load_template_rejects_missing_or_empty_file() {
    let dir = tempdir().expect("Failed to create tempdir");
    let empty = dir.path().join("empty.txt");
    fs::write(&empty, "  \n").expect("Failed to write template");

    assert!(load_template(Some(dir.path().join("missing.txt").as_path())).is_err());
    assert!(load_template(Some(empty.as_path())).is_err());
}
