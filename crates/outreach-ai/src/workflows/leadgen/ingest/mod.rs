mod normalizer;
mod parser;

pub(crate) use normalizer::normalize_email;

use super::domain::{LeadSource, RawLead};
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum LeadImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for LeadImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadImportError::Io(err) => write!(f, "failed to read lead export: {}", err),
            LeadImportError::Csv(err) => write!(f, "invalid lead CSV data: {}", err),
        }
    }
}

impl std::error::Error for LeadImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeadImportError::Io(err) => Some(err),
            LeadImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LeadImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for LeadImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Turns CSV exports and hand-entered contacts into raw leads.
pub struct LeadIngestor;

impl LeadIngestor {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawLead>, LeadImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Expects the headers `email, first_name, last_name, company`; other columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RawLead>, LeadImportError> {
        let leads = parser::parse_leads(reader)?;
        info!(count = leads.len(), "ingested leads from CSV");
        Ok(leads)
    }

    pub fn manual(entries: Vec<RawLead>) -> Vec<RawLead> {
        entries
            .into_iter()
            .map(|mut lead| {
                lead.email = normalizer::normalize_email(&lead.email);
                lead.source = LeadSource::Manual;
                lead
            })
            .filter(|lead| !lead.email.is_empty())
            .collect()
    }
}
