use chrono::NaiveDate;
use state_anchor::agent::reflection::{
    append_verification_links, cited_fact_ids, truncate_by_words,
};
use state_anchor::facts::catalog::COMPARISON_PROFILES;
use state_anchor::facts::{Category, EvidencePack, Fact, Indicator};

static F1: Fact = Fact {
    id: "F1",
    category: Category::Institutions,
    tags: &[],
    statement: "First statement.",
    contrast: "First contrast.",
    source_name: "Source A",
    source_urls: &["https://a"],
    as_of: "2024",
};

static F2: Fact = Fact {
    id: "F2",
    category: Category::Institutions,
    tags: &[],
    statement: "Second statement.",
    contrast: "Second contrast.",
    source_name: "Source B",
    source_urls: &["https://b"],
    as_of: "2024",
};

static F3: Fact = Fact {
    id: "F3",
    category: Category::Institutions,
    tags: &[],
    statement: "Third statement.",
    contrast: "Third contrast.",
    source_name: "Source B and C",
    source_urls: &["https://b", "https://c"],
    as_of: "2024",
};

fn pack(facts: Vec<&'static Fact>, indicators: Vec<Indicator>) -> EvidencePack {
    EvidencePack {
        date: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
        category: Category::Institutions,
        comparison: &COMPARISON_PROFILES[0],
        facts,
        indicators,
    }
}

fn gini(country: &str) -> Indicator {
    Indicator {
        id: "F109".to_string(),
        label: "Gini index".to_string(),
        country_code: country.to_string(),
        value: 31.1,
        year: "2021".to_string(),
        source_url: "https://data.worldbank.org/indicator/SI.POV.GINI?locations=CA-US".to_string(),
        decimals: 1,
        higher_is_better: false,
    }
}

#[test]
fn appends_sources_in_pack_order() {
    let pack = pack(vec![&F1, &F2], Vec::new());

    let output = append_verification_links("BODY", &pack);

    assert_eq!(output, "BODY\n\nSources:\n- https://a\n- https://b");
}

#[test]
fn lists_each_url_once_including_indicators() {
    let pack = pack(vec![&F2, &F3, &F1], vec![gini("CA"), gini("US")]);

    let output = append_verification_links("BODY\n\n", &pack);

    assert_eq!(
        output,
        "BODY\n\nSources:\n- https://b\n- https://c\n- https://a\n- https://data.worldbank.org/indicator/SI.POV.GINI?locations=CA-US"
    );
}

#[test]
fn leaves_text_alone_without_sources() {
    let pack = pack(Vec::new(), Vec::new());

    assert_eq!(append_verification_links("BODY  \n", &pack), "BODY");
}

#[test]
fn extracts_known_citations_in_order() {
    let pack = pack(vec![&F1, &F2], vec![gini("CA"), gini("US")]);
    let text = "One [F2]. Two [F1]. Again [F2]. Unknown [F777]. Indicator [F109].";

    assert_eq!(cited_fact_ids(text, &pack), vec!["F2", "F1", "F109"]);
}

#[test]
fn truncates_at_paragraph_boundaries() {
    let text = "one two three\n\nfour five six\n\nseven eight";

    assert_eq!(truncate_by_words(text, 6), "one two three\n\nfour five six");
    assert_eq!(truncate_by_words(text, 7), "one two three\n\nfour five six");
    assert_eq!(truncate_by_words(text, 100), text);
}

#[test]
fn cuts_an_oversized_first_paragraph() {
    assert_eq!(truncate_by_words("a b c d e\n\nf g", 3), "a b c");
}

#[test]
fn drops_blank_paragraphs() {
    assert_eq!(truncate_by_words("\n\n  alpha  \n \n\n beta", 10), "alpha\n\nbeta");
}
