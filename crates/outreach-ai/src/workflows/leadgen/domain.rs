use serde::{Deserialize, Serialize};

/// Where a lead entered the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    CsvImport,
    #[default]
    Manual,
}

/// Contact as captured from an import or a manual entry, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawLead {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub source: LeadSource,
}

impl RawLead {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            first_name: None,
            last_name: None,
            company: None,
            source: LeadSource::Manual,
        }
    }
}

/// Firmographic attributes attached to a raw lead. This is what the ICP scorer reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnrichedLead {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub source: LeadSource,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl EnrichedLead {
    /// A lead with no firmographics at all.
    pub fn bare(email: impl Into<String>) -> Self {
        Self::from_raw(RawLead::new(email))
    }

    pub fn from_raw(raw: RawLead) -> Self {
        let RawLead {
            email,
            first_name,
            last_name,
            company,
            source,
        } = raw;

        Self {
            email,
            first_name,
            last_name,
            company,
            source,
            industry: None,
            company_size: None,
            tech_stack: Vec::new(),
            role: None,
            location: None,
        }
    }
}

/// Ideal customer profile a batch is scored against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IcpProfile {
    pub target_industries: Vec<String>,
    pub target_roles: Vec<String>,
    #[serde(default)]
    pub required_tech: Vec<String>,
    /// Carried with the profile for downstream filters; it carries no scoring weight.
    #[serde(default)]
    pub min_company_size: Option<u32>,
}

/// Coarse bucket derived from a lead's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSegment {
    Hot,
    Warm,
    Cold,
    /// Reserved for leads rejected by a validation step upstream of scoring.
    /// The scorer itself never assigns it.
    Unqualified,
}

impl LeadSegment {
    pub const fn label(self) -> &'static str {
        match self {
            LeadSegment::Hot => "hot",
            LeadSegment::Warm => "warm",
            LeadSegment::Cold => "cold",
            LeadSegment::Unqualified => "unqualified",
        }
    }
}

/// Scoring output. Built once per scoring call and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredLead {
    #[serde(flatten)]
    pub lead: EnrichedLead,
    pub score: u32,
    pub segment: LeadSegment,
    pub match_reasons: Vec<String>,
}

impl ScoredLead {
    pub fn email(&self) -> &str {
        &self.lead.email
    }
}
