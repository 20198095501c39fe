use super::domain::{EnrichedLead, RawLead};

/// Attaches firmographic data to a raw lead.
pub trait LeadEnricher: Send + Sync {
    fn enrich(&self, lead: RawLead) -> EnrichedLead;
}

/// Offline enricher that derives plausible firmographics from the lead itself.
///
/// The output is a pure function of the input so batches are reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockEnricher;

impl MockEnricher {
    fn industry_for(company: Option<&str>) -> &'static str {
        let is_tech = company
            .map(|name| name.to_ascii_lowercase().contains("tech"))
            .unwrap_or(false);
        if is_tech {
            "SaaS"
        } else {
            "Retail"
        }
    }

    fn tech_stack_for(email: &str) -> Vec<String> {
        let digest = email
            .bytes()
            .fold(0u32, |acc, byte| acc.wrapping_mul(31).wrapping_add(byte as u32));
        if digest % 2 == 0 {
            vec!["Python".to_string(), "AWS".to_string()]
        } else {
            vec!["Shopify".to_string()]
        }
    }
}

impl LeadEnricher for MockEnricher {
    fn enrich(&self, lead: RawLead) -> EnrichedLead {
        let industry = Self::industry_for(lead.company.as_deref());
        let tech_stack = Self::tech_stack_for(&lead.email);

        let mut enriched = EnrichedLead::from_raw(lead);
        enriched.industry = Some(industry.to_string());
        enriched.company_size = Some("50-200".to_string());
        enriched.tech_stack = tech_stack;
        enriched.role = Some("Head of Growth".to_string());
        enriched.location = Some("San Francisco, CA".to_string());
        enriched
    }
}
