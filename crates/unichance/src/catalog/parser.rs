use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::CatalogError;
use crate::chances::domain::{
    EnglishMinimum, EnglishRequirement, EnglishTest, GmatRequirement, GradingScheme,
    GreRequirement, ProgramLevel, Requirements, University,
};

const LIST_SEPARATOR: char = ';';

pub(crate) fn parse_universities<R: Read>(reader: R) -> Result<Vec<University>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut universities = Vec::new();

    for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
        let row = record?;
        universities.push(row.into_university(index + 1)?);
    }

    Ok(universities)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    name: String,
    country: String,
    #[serde(default)]
    city: String,
    level: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    disciplines: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    ranking: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    min_gpa: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    grading_schemes: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    english_required: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    english_tests: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    gre_required: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    gre_min_verbal: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    gre_min_quant: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    gre_min_writing: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    gmat_required: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    gmat_min_total: Option<String>,
    tuition: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    scholarships: Option<String>,
}

impl CatalogRow {
    fn into_university(self, row: usize) -> Result<University, CatalogError> {
        let cell = CellReader { row };

        let level = ProgramLevel::from_label(&self.level)
            .ok_or_else(|| cell.invalid("level", &self.level))?;

        let grading_schemes = split_list(self.grading_schemes.as_deref())
            .map(|value| {
                GradingScheme::from_label(value).ok_or_else(|| cell.invalid("grading_schemes", value))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let english = EnglishRequirement {
            required: cell.flag("english_required", self.english_required.as_deref())?,
            tests: split_list(self.english_tests.as_deref())
                .map(|entry| cell.english_minimum(entry))
                .collect::<Result<Vec<_>, _>>()?,
        };

        let gre = self
            .gre_required
            .as_deref()
            .map(|flag| -> Result<GreRequirement, CatalogError> {
                Ok(GreRequirement {
                    required: cell.flag("gre_required", Some(flag))?,
                    min_verbal: cell.decimal("gre_min_verbal", self.gre_min_verbal.as_deref())?,
                    min_quant: cell.decimal("gre_min_quant", self.gre_min_quant.as_deref())?,
                    min_writing: cell
                        .decimal("gre_min_writing", self.gre_min_writing.as_deref())?,
                })
            })
            .transpose()?;

        let gmat = self
            .gmat_required
            .as_deref()
            .map(|flag| -> Result<GmatRequirement, CatalogError> {
                Ok(GmatRequirement {
                    required: cell.flag("gmat_required", Some(flag))?,
                    min_total: cell.decimal("gmat_min_total", self.gmat_min_total.as_deref())?,
                })
            })
            .transpose()?;

        let tuition = self
            .tuition
            .parse::<u32>()
            .map_err(|_| cell.invalid("tuition", &self.tuition))?;

        let ranking = self
            .ranking
            .as_deref()
            .map(|value| value.parse::<u32>().map_err(|_| cell.invalid("ranking", value)))
            .transpose()?;

        Ok(University {
            id: self.id,
            name: self.name,
            country: self.country,
            city: self.city,
            level,
            disciplines: split_list(self.disciplines.as_deref())
                .map(str::to_string)
                .collect(),
            ranking,
            requirements: Requirements {
                min_gpa: cell.decimal("min_gpa", self.min_gpa.as_deref())?,
                grading_schemes,
                english,
                gre,
                gmat,
                tuition,
                scholarships: cell.flag("scholarships", self.scholarships.as_deref())?,
            },
        })
    }
}

/// Cell conversions that report the data row and column on failure.
struct CellReader {
    row: usize,
}

impl CellReader {
    fn invalid(&self, column: &'static str, value: &str) -> CatalogError {
        CatalogError::InvalidCell {
            row: self.row,
            column,
            value: value.to_string(),
        }
    }

    fn flag(&self, column: &'static str, value: Option<&str>) -> Result<bool, CatalogError> {
        let Some(value) = value else {
            return Ok(false);
        };
        match value.to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Ok(true),
            "false" | "no" | "n" | "0" => Ok(false),
            _ => Err(self.invalid(column, value)),
        }
    }

    fn decimal(&self, column: &'static str, value: Option<&str>) -> Result<Option<f64>, CatalogError> {
        value
            .map(|value| {
                value
                    .parse::<f64>()
                    .ok()
                    .filter(|parsed| parsed.is_finite())
                    .ok_or_else(|| self.invalid(column, value))
            })
            .transpose()
    }

    /// `IELTS:6.5` or a bare `IELTS` for an accepted test without a published minimum.
    fn english_minimum(&self, entry: &str) -> Result<EnglishMinimum, CatalogError> {
        let (test, minimum) = match entry.split_once(':') {
            Some((test, minimum)) => (test.trim(), Some(minimum.trim())),
            None => (entry, None),
        };

        Ok(EnglishMinimum {
            test: EnglishTest::from_label(test).ok_or_else(|| self.invalid("english_tests", entry))?,
            min_score: self.decimal("english_tests", minimum)?,
        })
    }
}

fn split_list(value: Option<&str>) -> impl Iterator<Item = &str> {
    value
        .unwrap_or_default()
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
