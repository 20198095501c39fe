use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::leadgen::domain::{EnrichedLead, IcpProfile, RawLead};
use crate::workflows::leadgen::enrichment::LeadEnricher;
use crate::workflows::leadgen::scoring::{IcpScorer, ScoringConfig};
use crate::workflows::leadgen::service::LeadGenService;

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn growth_profile() -> IcpProfile {
    IcpProfile {
        target_industries: strings(&["SaaS"]),
        target_roles: strings(&["Head of Growth"]),
        required_tech: strings(&["Python"]),
        min_company_size: None,
    }
}

pub(super) fn multi_tech_profile() -> IcpProfile {
    IcpProfile {
        target_industries: strings(&["SaaS", "Fintech"]),
        target_roles: strings(&["Head of Growth", "CTO"]),
        required_tech: strings(&["Python", "AWS", "Kubernetes"]),
        min_company_size: Some(50),
    }
}

pub(super) fn lead(
    industry: Option<&str>,
    role: Option<&str>,
    tech_stack: &[&str],
) -> EnrichedLead {
    let mut lead = EnrichedLead::bare("lead@example.com");
    lead.industry = industry.map(str::to_string);
    lead.role = role.map(str::to_string);
    lead.tech_stack = strings(tech_stack);
    lead
}

pub(super) fn scorer(profile: IcpProfile) -> IcpScorer {
    IcpScorer::with_config(profile, ScoringConfig::default())
}

/// Enricher that echoes fixed firmographics keyed on the company name.
#[derive(Default)]
pub(super) struct FixtureEnricher;

impl LeadEnricher for FixtureEnricher {
    fn enrich(&self, raw: RawLead) -> EnrichedLead {
        let company = raw.company.clone().unwrap_or_default();
        let mut lead = EnrichedLead::from_raw(raw);
        match company.as_str() {
            "HotCo" => {
                lead.industry = Some("SaaS".to_string());
                lead.role = Some("Head of Growth".to_string());
                lead.tech_stack = strings(&["Python"]);
            }
            "WarmCo" => {
                lead.industry = Some("SaaS".to_string());
                lead.role = Some("Intern".to_string());
                lead.tech_stack = strings(&["Python"]);
            }
            _ => {
                lead.industry = Some("Retail".to_string());
                lead.role = Some("Intern".to_string());
            }
        }
        lead
    }
}

pub(super) fn raw(email: &str, company: &str) -> RawLead {
    let mut lead = RawLead::new(email);
    lead.company = Some(company.to_string());
    lead
}

pub(super) fn build_service() -> LeadGenService<FixtureEnricher> {
    LeadGenService::new(Arc::new(FixtureEnricher), growth_profile())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
