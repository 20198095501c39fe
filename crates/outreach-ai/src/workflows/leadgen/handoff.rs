use super::domain::ScoredLead;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Error raised while writing the outreach handoff file.
#[derive(Debug, thiserror::Error)]
pub enum HandoffError {
    #[error("failed to write handoff file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize qualified leads: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes qualifying leads to the list the outreach worker consumes.
#[derive(Debug, Clone)]
pub struct OutreachHandoff {
    output_path: PathBuf,
    min_score: u32,
}

impl OutreachHandoff {
    pub fn new(output_path: impl Into<PathBuf>, min_score: u32) -> Self {
        Self {
            output_path: output_path.into(),
            min_score,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn qualified<'a>(&self, leads: &'a [ScoredLead]) -> Vec<&'a ScoredLead> {
        leads
            .iter()
            .filter(|lead| lead.score >= self.min_score)
            .collect()
    }

    /// Writes the qualifying subset as a pretty JSON array, replacing any previous file.
    /// Returns how many leads were handed off.
    pub fn write(&self, leads: &[ScoredLead]) -> Result<usize, HandoffError> {
        let qualified = self.qualified(leads);

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
            }
        }

        let file = File::create(&self.output_path).map_err(|source| self.io_error(source))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &qualified)?;
        writer.flush().map_err(|source| self.io_error(source))?;

        info!(
            handed_off = qualified.len(),
            path = %self.output_path.display(),
            "handed qualified leads to outreach"
        );
        Ok(qualified.len())
    }

    fn io_error(&self, source: std::io::Error) -> HandoffError {
        HandoffError::Io {
            path: self.output_path.clone(),
            source,
        }
    }
}
