use super::normalizer::{normalize_cell, normalize_email};
use crate::workflows::leadgen::domain::{LeadSource, RawLead};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::warn;

pub(crate) fn parse_leads<R: Read>(reader: R) -> Result<Vec<RawLead>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut leads = Vec::new();

    for (index, record) in csv_reader.deserialize::<LeadRow>().enumerate() {
        let row = record?;
        let Some(email) = row.email.as_deref().map(normalize_email) else {
            // Header row is line 1.
            warn!(line = index + 2, "skipping CSV row without an email address");
            continue;
        };

        leads.push(RawLead {
            email,
            first_name: row.first_name.as_deref().map(normalize_cell),
            last_name: row.last_name.as_deref().map(normalize_cell),
            company: row.company.as_deref().map(normalize_cell),
            source: LeadSource::CsvImport,
        });
    }

    Ok(leads)
}

#[derive(Debug, Deserialize)]
struct LeadRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    first_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    last_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    company: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !normalize_cell(value).is_empty()))
}
