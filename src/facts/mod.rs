pub mod catalog;
pub mod rotation;

use std::collections::HashSet;
use std::fmt;

use chrono::{Datelike, NaiveDate};

use catalog::{FACTS, HOME_COUNTRY, INDICATORS};
use rotation::rotate;
pub use rotation::{select_comparison, select_focus};

use crate::tools::world_bank::{public_indicator_url, IndicatorSource};

pub const DEFAULT_MAX_FACTS: usize = 6;
/// Indicators pulled in by the contrast emphasis on top of the focus ones.
pub const MAX_CONTRAST_INDICATORS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Institutions,
    Finance,
    Mobility,
    SecondChances,
    Healthcare,
    Stability,
    Information,
}

impl Category {
    /// Rotation order of the daily focus.
    pub const ALL: [Category; 7] = [
        Category::Institutions,
        Category::Finance,
        Category::Mobility,
        Category::SecondChances,
        Category::Healthcare,
        Category::Stability,
        Category::Information,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Institutions => "institutions",
            Category::Finance => "finance",
            Category::Mobility => "mobility",
            Category::SecondChances => "second_chances",
            Category::Healthcare => "healthcare",
            Category::Stability => "stability",
            Category::Information => "information",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Institutions => {
                "Legal & institutional protections (rule of law, contract enforcement, low corruption)"
            }
            Category::Finance => "Currency, capital, and financial system",
            Category::Mobility => {
                "Mobility, language, and naturalization (move freely, no language trap, durable status)"
            }
            Category::SecondChances => {
                "Optionality under failure (income support, pensions, bankruptcy discharge)"
            }
            Category::Healthcare => "Healthcare access and basic public health infrastructure",
            Category::Stability => "Political stability, public safety, and state capacity",
            Category::Information => "Press freedom and open information",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A curated, source-backed statement that the model may cite by `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fact {
    pub id: &'static str,
    pub category: Category,
    pub tags: &'static [&'static str],
    pub statement: &'static str,
    pub contrast: &'static str,
    pub source_name: &'static str,
    pub source_urls: &'static [&'static str],
    pub as_of: &'static str,
}

/// Blueprint for a live cross-country data point.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSpec {
    pub id: &'static str,
    pub code: &'static str,
    pub label: &'static str,
    pub category: Category,
    pub tags: &'static [&'static str],
    pub comparison_country: &'static str,
    pub higher_is_better: bool,
    pub decimals: usize,
}

/// One fetched value of an indicator for one country. Both countries of an
/// indicator share the same `id` and `source_url`.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub id: String,
    pub label: String,
    pub country_code: String,
    pub value: f64,
    pub year: String,
    pub source_url: String,
    pub decimals: usize,
    pub higher_is_better: bool,
}

impl Indicator {
    pub fn formatted_value(&self) -> String {
        let num = format!("{:.*}", self.decimals, self.value);
        if self.label.contains("(%") || self.label.ends_with("%)") {
            format!("{}%", num)
        } else {
            num
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonProfile {
    pub label: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct EvidencePack {
    pub date: NaiveDate,
    pub category: Category,
    pub comparison: &'static ComparisonProfile,
    pub facts: Vec<&'static Fact>,
    pub indicators: Vec<Indicator>,
}

impl EvidencePack {
    pub fn fact_ids(&self) -> Vec<&str> {
        self.facts
            .iter()
            .map(|f| f.id)
            .chain(self.indicators.iter().map(|i| i.id.as_str()))
            .fold(Vec::new(), |mut ids, id| {
                if !ids.contains(&id) {
                    ids.push(id);
                }
                ids
            })
    }

    /// Every source URL in pack order: facts first, then indicators.
    /// Duplicates keep their first position.
    pub fn source_urls(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.facts
            .iter()
            .flat_map(|f| f.source_urls.iter().copied())
            .chain(self.indicators.iter().map(|i| i.source_url.as_str()))
            .filter(|url| !url.is_empty() && seen.insert(*url))
            .collect()
    }
}

pub fn facts_for(category: Category) -> Vec<&'static Fact> {
    FACTS.iter().filter(|f| f.category == category).collect()
}

pub fn indicators_for(category: Category) -> Vec<&'static IndicatorSpec> {
    INDICATORS.iter().filter(|i| i.category == category).collect()
}

/// Indicators outside `category` whose tags meet the comparison profile.
pub fn contrast_indicators(
    category: Category,
    comparison: &ComparisonProfile,
) -> Vec<&'static IndicatorSpec> {
    INDICATORS
        .iter()
        .filter(|i| i.category != category)
        .filter(|i| i.tags.iter().any(|t| comparison.tags.contains(t)))
        .collect()
}

pub struct FactBank<S> {
    source: S,
    max_facts: usize,
}

impl<S: IndicatorSource> FactBank<S> {
    pub fn new(source: S, max_facts: usize) -> Self {
        Self {
            source,
            max_facts: max_facts.max(1),
        }
    }

    /// Live indicators for `category`. A failing indicator is dropped with a
    /// warning; this never fails the run.
    pub async fn fetch_indicators(&self, category: Category) -> Vec<Indicator> {
        let indicators = self.resolve(&indicators_for(category)).await;
        log::info!(
            "resolved {} live indicator values for {}",
            indicators.len(),
            category.slug()
        );
        indicators
    }

    async fn resolve(&self, specs: &[&IndicatorSpec]) -> Vec<Indicator> {
        let mut indicators = Vec::new();
        for spec in specs {
            let countries = [HOME_COUNTRY, spec.comparison_country];
            let observations = match self.source.latest(spec.code, &countries).await {
                Ok(observations) => observations,
                Err(err) => {
                    log::warn!("skipping indicator {} ({}): {}", spec.id, spec.code, err);
                    continue;
                }
            };

            let resolved = countries
                .iter()
                .map(|code| observations.iter().find(|o| o.country_code == *code))
                .collect::<Option<Vec<_>>>();
            let Some(resolved) = resolved else {
                log::warn!("skipping indicator {}: incomplete observations", spec.id);
                continue;
            };

            let source_url = public_indicator_url(spec.code, &countries);
            indicators.extend(resolved.into_iter().map(|obs| Indicator {
                id: spec.id.to_string(),
                label: spec.label.to_string(),
                country_code: obs.country_code.clone(),
                value: obs.value,
                year: obs.year.clone(),
                source_url: source_url.clone(),
                decimals: spec.decimals,
                higher_is_better: spec.higher_is_better,
            }));
        }
        indicators
    }

    /// Focus facts first, then facts matching the contrast emphasis, then a
    /// breadth fill from the whole bank, up to `max_facts`.
    pub async fn build_evidence_pack(&self, date: NaiveDate) -> EvidencePack {
        let category = select_focus(date);
        let comparison = select_comparison(date);
        let day = date.ordinal() as usize;

        let mut facts = rotate(&facts_for(category), day);
        facts.truncate(self.max_facts);

        let supporting = FACTS
            .iter()
            .filter(|f| f.tags.iter().any(|t| comparison.tags.contains(t)))
            .collect::<Vec<_>>();
        let breadth = FACTS.iter().collect::<Vec<_>>();
        let candidates = rotate(&supporting, day + 5)
            .into_iter()
            .chain(rotate(&breadth, day + 11));
        for fact in candidates {
            if facts.len() >= self.max_facts {
                break;
            }
            if !facts.iter().any(|f| f.id == fact.id) {
                facts.push(fact);
            }
        }

        let mut specs = indicators_for(category);
        let mut extra = rotate(&contrast_indicators(category, comparison), day + 5);
        extra.truncate(MAX_CONTRAST_INDICATORS);
        specs.extend(extra);

        log::info!(
            "focus for {}: {} ({} facts, {} indicators, contrast: {})",
            date,
            category.slug(),
            facts.len(),
            specs.len(),
            comparison.label
        );

        let indicators = self.resolve(&specs).await;
        log::info!("resolved {} live indicator values", indicators.len());
        EvidencePack {
            date,
            category,
            comparison,
            facts,
            indicators,
        }
    }
}
