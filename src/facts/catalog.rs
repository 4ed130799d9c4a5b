use super::{Category, ComparisonProfile, Fact, IndicatorSpec};

/// Country every indicator is reported for.
pub const HOME_COUNTRY: &str = "CA";

pub fn country_name(code: &str) -> &str {
    match code {
        "CA" => "Canada",
        "US" => "United States",
        "ZW" => "Zimbabwe",
        "AR" => "Argentina",
        "JP" => "Japan",
        other => other,
    }
}

pub const COMPARISON_PROFILES: &[ComparisonProfile] = &[
    ComparisonProfile {
        label: "low-trust economies with weak rule-of-law and corruption risk",
        tags: &["low_trust", "rule_of_law", "corruption", "zimbabwe"],
    },
    ComparisonProfile {
        label: "language/mobility traps where domestic constraints reduce exit options",
        tags: &["language_trap", "mobility", "hukou"],
    },
    ComparisonProfile {
        label: "wealthy but rigid systems with weaker second-chance mechanisms",
        tags: &["second_chance", "debt", "income_shock"],
    },
    ComparisonProfile {
        label: "systems with temporary-status work but narrow paths to citizenship",
        tags: &["citizenship", "family", "temporary_status"],
    },
    ComparisonProfile {
        label: "high-cost risk environments where one shock can impair recovery",
        tags: &["us_risk", "medical_debt", "income_shock"],
    },
    ComparisonProfile {
        label: "high-inflation settings where cash and wages erode quickly",
        tags: &["inflation", "currency", "macrostability"],
    },
    ComparisonProfile {
        label: "states with constrained press and weaker civic protections",
        tags: &["press_freedom", "civil_liberties", "information_access"],
    },
];

pub const FACTS: &[Fact] = &[
    Fact {
        id: "F001",
        category: Category::Mobility,
        tags: &["mobility", "legal", "hukou", "language_trap"],
        statement: "Section 6(2) of the Charter gives citizens and permanent residents the right \
                    to move to any province and pursue a livelihood there.",
        contrast: "China's hukou system ties many social benefits to local registration, which \
                   can limit migrant access in destination cities.",
        source_name: "Constitution Act, 1982 (Charter, s.6) + World Bank hukou analysis",
        source_urls: &[
            "https://laws.justice.gc.ca/eng/Const/page-12.html",
            "https://blogs.worldbank.org/en/peoplemove/chinas-hukou-reform-remains-major-challenge-domestic-migrants-cities",
        ],
        as_of: "Current law / World Bank 2024",
    },
    Fact {
        id: "F002",
        category: Category::Healthcare,
        tags: &["healthcare", "us_risk", "medical_debt"],
        statement: "Under the Canada Health Act framework, provincial public plans must cover \
                    medically necessary hospital and physician services.",
        contrast: "Commonwealth Fund reported that 32% of working-age adults in the U.S. had \
                   medical debt in 2023.",
        source_name: "Canada Health Act guidance + Commonwealth Fund affordability survey",
        source_urls: &[
            "https://www.canada.ca/en/health-canada/services/health-care-system/canada-health-care-system-medicare/canada-health-act/myth-busters.html",
            "https://www.commonwealthfund.org/sites/default/files/2023-10/Collins_2023_AffordabilitySurveyTopline_PR_10-26-2023_v2.pdf",
        ],
        as_of: "Current framework / 2023 survey",
    },
    Fact {
        id: "F003",
        category: Category::Finance,
        tags: &["currency", "banking", "low_trust", "macrostability"],
        statement: "CDIC insures eligible deposits up to CAD 100,000 per depositor, per insured \
                    category, at member institutions.",
        contrast: "In weakly supervised banking systems, household losses from bank failures can \
                   fall directly on depositors.",
        source_name: "Canada Deposit Insurance Corporation (CDIC)",
        source_urls: &["https://www.cdic.ca/depositors/whats-covered/"],
        as_of: "Current",
    },
    Fact {
        id: "F004",
        category: Category::Finance,
        tags: &["currency", "inflation", "state_capacity", "macrostability"],
        statement: "The Bank of Canada targets 2% inflation within a 1-3% control range under a \
                    jointly renewed monetary policy framework.",
        contrast: "High-inflation systems can rapidly erode purchasing power, planning horizons, \
                   and savings.",
        source_name: "Bank of Canada inflation-control framework",
        source_urls: &[
            "https://www.bankofcanada.ca/rates/indicators/key-variables/inflation-control-target/",
        ],
        as_of: "Renewed through end-2026",
    },
    Fact {
        id: "F005",
        category: Category::Mobility,
        tags: &["citizenship", "mobility", "temporary_status"],
        statement: "Permanent residents can apply for citizenship after 1,095 days of physical \
                    presence in the preceding 5 years, if other criteria are met.",
        contrast: "Some high-income jurisdictions have narrow, nomination-based naturalization \
                   paths for foreigners rather than broad residence-based pathways.",
        source_name: "IRCC citizenship eligibility + UAE nationality rules",
        source_urls: &[
            "https://www.canada.ca/en/immigration-refugees-citizenship/services/canadian-citizenship/become-canadian-citizen/eligibility.html",
            "https://u.ae/en/information-and-services/passports-and-traveling/emirati-nationality/provisions-allowing-foreigners-to-acquire-the-emirati-nationality",
        ],
        as_of: "Current",
    },
    Fact {
        id: "F006",
        category: Category::Mobility,
        tags: &["family", "citizenship", "temporary_status"],
        statement: "Canadian citizens and permanent residents can sponsor eligible \
                    spouses/partners, children, parents, and grandparents for permanent residence.",
        contrast: "In many migration systems, workers can reside temporarily but cannot secure \
                   durable status for close family.",
        source_name: "IRCC family sponsorship program",
        source_urls: &[
            "https://www.canada.ca/en/immigration-refugees-citizenship/services/immigrate-canada/family-sponsorship.html",
        ],
        as_of: "Current",
    },
    Fact {
        id: "F007",
        category: Category::Mobility,
        tags: &["language", "language_trap", "mobility"],
        statement: "The Official Languages Act gives English and French equal status in federal \
                    institutions and guarantees access to federal services in either language \
                    where required.",
        contrast: "Stronger bilingual institutional support reduces language lock-in and improves \
                   domestic and international mobility of skills.",
        source_name: "Official Languages Act",
        source_urls: &[
            "https://laws-lois.justice.gc.ca/eng/acts/o-3.01/page-1.html",
            "https://www.canada.ca/en/treasury-board-secretariat/services/values-ethics/official-languages/public-services/bilingual-offices-facilities.html",
        ],
        as_of: "Current",
    },
    Fact {
        id: "F008",
        category: Category::SecondChances,
        tags: &["second_chance", "income_shock", "state_capacity"],
        statement: "Employment Insurance provides temporary income support for eligible workers \
                    who lose employment while they search for work or upgrade skills.",
        contrast: "Where unemployment insurance is weak or absent, job loss can force immediate \
                   asset depletion and shorter planning horizons.",
        source_name: "Government of Canada EI program overview",
        source_urls: &["https://www.canada.ca/en/employment-social-development/programs/ei.html"],
        as_of: "Current",
    },
    Fact {
        id: "F009",
        category: Category::SecondChances,
        tags: &["pension", "state_capacity", "income_shock"],
        statement: "The Canada Pension Plan is a mandatory, contributory, earnings-related social \
                    insurance program for most workers earning above CAD 3,500 (outside \
                    Quebec's QPP).",
        contrast: "Mandatory pooled pension contributions create a more predictable retirement \
                   floor than systems relying mainly on voluntary or informal saving.",
        source_name: "Canada Pension Plan contributions and program pages",
        source_urls: &[
            "https://www.canada.ca/en/services/benefits/publicpensions/cpp/contributions.html",
            "https://www.canada.ca/en/employment-social-development/programs/pension-plan.html",
        ],
        as_of: "Current",
    },
    Fact {
        id: "F010",
        category: Category::SecondChances,
        tags: &["second_chance", "debt", "legal"],
        statement: "For a first bankruptcy, automatic discharge can occur after 9 months when \
                    conditions are met (or 21 months with surplus income obligations).",
        contrast: "A structured discharge framework provides legal second chances that are weaker \
                   or slower in many jurisdictions.",
        source_name: "Office of the Superintendent of Bankruptcy (Canada)",
        source_urls: &[
            "https://ised-isde.canada.ca/site/office-superintendent-bankruptcy/en/you-owe-money/you-owe-money-bankruptcy-discharge-and-its-consequences-bankrupt",
        ],
        as_of: "Current",
    },
    Fact {
        id: "F011",
        category: Category::Information,
        tags: &["civil_liberties", "press_freedom", "zimbabwe", "low_trust"],
        statement: "Freedom House (2025) scores Canada at 97/100 (Free).",
        contrast: "Freedom House (2025) scores Zimbabwe at 26/100 (Not Free).",
        source_name: "Freedom House, Freedom in the World 2025 country reports",
        source_urls: &[
            "https://freedomhouse.org/country/canada/freedom-world/2025",
            "https://freedomhouse.org/country/zimbabwe/freedom-world/2025",
        ],
        as_of: "2025",
    },
    Fact {
        id: "F012",
        category: Category::Institutions,
        tags: &["rule_of_law", "legal", "low_trust"],
        statement: "World Justice Project Rule of Law Index 2024 ranks Canada 12th of 142 \
                    countries.",
        contrast: "Higher rule-of-law performance generally means stronger contract enforcement \
                   and lower arbitrary policy risk.",
        source_name: "World Justice Project Rule of Law Index 2024",
        source_urls: &[
            "https://worldjusticeproject.org/rule-of-law-index/global/2024",
            "https://worldjusticeproject.org/sites/default/files/documents/Canada_2.pdf",
        ],
        as_of: "2024",
    },
    Fact {
        id: "F013",
        category: Category::Information,
        tags: &["press_freedom", "information_access"],
        statement: "Reporters Without Borders' 2024 World Press Freedom Index ranks Canada 14th \
                    of 180.",
        contrast: "Compared with censored environments, stronger press freedom increases access \
                   to independent information and scrutiny.",
        source_name: "RSF World Press Freedom Index 2024",
        source_urls: &["https://rsf.org/en/classement/2024/americas"],
        as_of: "2024",
    },
    Fact {
        id: "F014",
        category: Category::Institutions,
        tags: &["corruption", "low_trust", "rule_of_law"],
        statement: "Transparency International CPI 2024 gives Canada a score of 75/100 (rank \
                    15/180).",
        contrast: "Lower perceived corruption reduces everyday bribery risk and improves policy \
                   predictability for households and firms.",
        source_name: "Transparency International country profile (Canada)",
        source_urls: &["https://www.transparency.org/en/countries/canada"],
        as_of: "2024",
    },
    Fact {
        id: "F015",
        category: Category::Stability,
        tags: &["stability", "state_capacity"],
        statement: "Global Peace Index 2024 ranks Canada 11th of 163.",
        contrast: "Higher peacefulness reduces disruption risk to work, schooling, logistics, and \
                   long-term planning.",
        source_name: "Institute for Economics & Peace, Global Peace Index 2024",
        source_urls: &["https://www.economicsandpeace.org/report/global-peace-index-2024/"],
        as_of: "2024",
    },
];

pub const INDICATORS: &[IndicatorSpec] = &[
    IndicatorSpec {
        id: "F101",
        code: "SP.DYN.LE00.IN",
        label: "Life expectancy at birth, total (years)",
        category: Category::Healthcare,
        tags: &["healthcare", "us_risk"],
        comparison_country: "US",
        higher_is_better: true,
        decimals: 1,
    },
    IndicatorSpec {
        id: "F102",
        code: "VC.IHR.PSRC.P5",
        label: "Intentional homicides (per 100,000 people)",
        category: Category::Stability,
        tags: &["stability", "us_risk", "public_safety"],
        comparison_country: "US",
        higher_is_better: false,
        decimals: 1,
    },
    IndicatorSpec {
        id: "F103",
        code: "SH.H2O.SMDW.ZS",
        label: "People using safely managed drinking water services (% of population)",
        category: Category::Healthcare,
        tags: &["infrastructure", "water", "zimbabwe", "low_trust"],
        comparison_country: "ZW",
        higher_is_better: true,
        decimals: 1,
    },
    IndicatorSpec {
        id: "F104",
        code: "SH.STA.SMSS.ZS",
        label: "People using safely managed sanitation services (% of population)",
        category: Category::Healthcare,
        tags: &["infrastructure", "sanitation", "zimbabwe", "low_trust"],
        comparison_country: "ZW",
        higher_is_better: true,
        decimals: 1,
    },
    IndicatorSpec {
        id: "F105",
        code: "EG.ELC.ACCS.ZS",
        label: "Access to electricity (% of population)",
        category: Category::Stability,
        tags: &["infrastructure", "electricity", "zimbabwe", "state_capacity"],
        comparison_country: "ZW",
        higher_is_better: true,
        decimals: 1,
    },
    IndicatorSpec {
        id: "F106",
        code: "IT.NET.USER.ZS",
        label: "Individuals using the Internet (% of population)",
        category: Category::Information,
        tags: &["information_access", "infrastructure", "zimbabwe"],
        comparison_country: "ZW",
        higher_is_better: true,
        decimals: 1,
    },
    IndicatorSpec {
        id: "F107",
        code: "FX.OWN.TOTL.ZS",
        label: "Account ownership at a financial institution or with a mobile-money-service \
                provider (% age 15+)",
        category: Category::Finance,
        tags: &["banking", "financial_inclusion", "zimbabwe", "low_trust"],
        comparison_country: "ZW",
        higher_is_better: true,
        decimals: 1,
    },
    IndicatorSpec {
        id: "F108",
        code: "FP.CPI.TOTL.ZG",
        label: "Inflation, consumer prices (annual %)",
        category: Category::Finance,
        tags: &["inflation", "currency", "macrostability"],
        comparison_country: "AR",
        higher_is_better: false,
        decimals: 1,
    },
    IndicatorSpec {
        id: "F109",
        code: "SI.POV.GINI",
        label: "Gini index",
        category: Category::Institutions,
        tags: &["state_capacity", "us_risk", "inequality"],
        comparison_country: "US",
        higher_is_better: false,
        decimals: 1,
    },
];
