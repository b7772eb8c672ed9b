use serde::{Deserialize, Serialize};

/// Raw numeric answer as captured by the questionnaire: a JSON number, free text, or any other
/// JSON value kept as-is so the request still deserializes.
///
/// Values are interpreted through [`super::numeric`], never parsed ad hoc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
    /// Booleans, objects and arrays. Always reads as absent.
    Malformed(serde_json::Value),
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

/// Degree level targeted by the applicant and offered by a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramLevel {
    Bachelor,
    Master,
    Phd,
}

impl ProgramLevel {
    pub fn from_label(value: &str) -> Option<Self> {
        match normalize_label(value).as_str() {
            "bachelor" | "bachelors" | "undergraduate" => Some(Self::Bachelor),
            "master" | "masters" | "graduate" => Some(Self::Master),
            "phd" | "doctorate" | "doctoral" => Some(Self::Phd),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ProgramLevel::Bachelor => "Bachelor",
            ProgramLevel::Master => "Master",
            ProgramLevel::Phd => "PhD",
        }
    }
}

/// Grading scale the applicant reported their average in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingScheme {
    FivePoint,
    FourPoint,
    Percentage,
}

impl GradingScheme {
    pub fn from_label(value: &str) -> Option<Self> {
        match normalize_label(value).as_str() {
            "five_point" | "5" | "5-point" | "five point" => Some(Self::FivePoint),
            "four_point" | "4" | "4-point" | "four point" => Some(Self::FourPoint),
            "percentage" | "100" | "percent" => Some(Self::Percentage),
            _ => None,
        }
    }
}

/// How the applicant intends to pay for tuition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinanceSource {
    SelfFunded,
    Family,
    Sponsor,
    Scholarship,
    Mixed,
}

impl FinanceSource {
    pub const fn seeks_scholarship(self) -> bool {
        matches!(self, FinanceSource::Scholarship | FinanceSource::Mixed)
    }
}

/// Annual tuition bracket picked in the budget step of the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetBracket {
    #[serde(rename = "0-10000")]
    UpTo10k,
    #[serde(rename = "10000-20000")]
    UpTo20k,
    #[serde(rename = "20000-30000")]
    UpTo30k,
    #[serde(rename = "30000-50000")]
    UpTo50k,
    #[serde(rename = "50000+")]
    Above50k,
}

impl BudgetBracket {
    /// Highest annual tuition the bracket covers.
    pub const fn ceiling(self) -> u32 {
        match self {
            BudgetBracket::UpTo10k => 10_000,
            BudgetBracket::UpTo20k => 20_000,
            BudgetBracket::UpTo30k => 30_000,
            BudgetBracket::UpTo50k => 50_000,
            BudgetBracket::Above50k => u32::MAX,
        }
    }
}

/// English proficiency certificates recognised by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnglishTest {
    Ielts,
    Toefl,
    Duolingo,
    Pte,
}

impl EnglishTest {
    pub fn from_label(value: &str) -> Option<Self> {
        match normalize_label(value).as_str() {
            "ielts" => Some(Self::Ielts),
            "toefl" | "toefl ibt" => Some(Self::Toefl),
            "duolingo" | "det" => Some(Self::Duolingo),
            "pte" | "pte academic" => Some(Self::Pte),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EnglishTest::Ielts => "IELTS",
            EnglishTest::Toefl => "TOEFL",
            EnglishTest::Duolingo => "Duolingo",
            EnglishTest::Pte => "PTE",
        }
    }
}

/// Graduate admission exam the applicant sat. Only one may be declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardizedTest {
    Gre,
    Gmat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GreScores {
    #[serde(default)]
    pub verbal: Option<RawNumber>,
    #[serde(default)]
    pub quant: Option<RawNumber>,
    #[serde(default)]
    pub writing: Option<RawNumber>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GmatScores {
    #[serde(default)]
    pub total: Option<RawNumber>,
    #[serde(default)]
    pub quant: Option<RawNumber>,
    #[serde(default)]
    pub verbal: Option<RawNumber>,
}

/// Self-reported applicant data collected by the multi-step questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub nationality: Option<String>,
    /// Preferred country of study; `"any"` or absent disables the country filter.
    #[serde(default)]
    pub study_country: Option<String>,
    pub level: ProgramLevel,
    pub grading_scheme: GradingScheme,
    #[serde(default)]
    pub gpa: Option<RawNumber>,
    #[serde(default)]
    pub finance_source: Option<FinanceSource>,
    #[serde(default)]
    pub budget: Option<BudgetBracket>,
    #[serde(default)]
    pub english_test: Option<EnglishTest>,
    #[serde(default)]
    pub english_score: Option<RawNumber>,
    #[serde(default)]
    pub standardized_test: Option<StandardizedTest>,
    #[serde(default)]
    pub gre: GreScores,
    #[serde(default)]
    pub gmat: GmatScores,
    #[serde(default)]
    pub disciplines: Vec<String>,
}

impl UserProfile {
    /// Country filter applied by the aggregator, `None` when the applicant accepts any country.
    pub fn country_preference(&self) -> Option<&str> {
        self.study_country
            .as_deref()
            .map(str::trim)
            .filter(|country| !country.is_empty() && !country.eq_ignore_ascii_case("any"))
    }

    pub fn seeks_scholarship(&self) -> bool {
        self.finance_source
            .map(FinanceSource::seeks_scholarship)
            .unwrap_or(false)
    }
}

/// Minimum score for one accepted English certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnglishMinimum {
    pub test: EnglishTest,
    #[serde(default)]
    pub min_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnglishRequirement {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub tests: Vec<EnglishMinimum>,
}

impl EnglishRequirement {
    pub fn accepts(&self, test: EnglishTest) -> bool {
        self.tests.iter().any(|minimum| minimum.test == test)
    }

    /// Minimum for an accepted test; an accepted test without a published minimum is 0.
    pub fn minimum_for(&self, test: EnglishTest) -> Option<f64> {
        self.tests
            .iter()
            .find(|minimum| minimum.test == test)
            .map(|minimum| minimum.min_score.unwrap_or(0.0))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GreRequirement {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min_verbal: Option<f64>,
    #[serde(default)]
    pub min_quant: Option<f64>,
    #[serde(default)]
    pub min_writing: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GmatRequirement {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min_total: Option<f64>,
}

/// Admission requirements published for a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    /// Minimum GPA on the 4.0 scale; `None` means no requirement.
    #[serde(default)]
    pub min_gpa: Option<f64>,
    #[serde(default)]
    pub grading_schemes: Vec<GradingScheme>,
    #[serde(default)]
    pub english: EnglishRequirement,
    #[serde(default)]
    pub gre: Option<GreRequirement>,
    #[serde(default)]
    pub gmat: Option<GmatRequirement>,
    pub tuition: u32,
    #[serde(default)]
    pub scholarships: bool,
}

impl Requirements {
    pub fn gre_required(&self) -> bool {
        self.gre.as_ref().map(|gre| gre.required).unwrap_or(false)
    }

    pub fn gmat_required(&self) -> bool {
        self.gmat.as_ref().map(|gmat| gmat.required).unwrap_or(false)
    }
}

/// Static catalog entry describing one program offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: String,
    pub name: String,
    pub country: String,
    pub city: String,
    pub level: ProgramLevel,
    pub disciplines: Vec<String>,
    #[serde(default)]
    pub ranking: Option<u32>,
    pub requirements: Requirements,
}

impl University {
    /// True when any of the applicant's target disciplines is taught here.
    pub fn offers_any(&self, disciplines: &[String]) -> bool {
        disciplines.iter().any(|wanted| {
            let wanted = normalize_label(wanted);
            !wanted.is_empty()
                && self
                    .disciplines
                    .iter()
                    .any(|offered| normalize_label(offered) == wanted)
        })
    }

    pub fn located_in(&self, country: &str) -> bool {
        normalize_label(&self.country) == normalize_label(country)
    }
}

pub(crate) fn normalize_label(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}
