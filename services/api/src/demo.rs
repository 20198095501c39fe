use crate::infra::{read_profile, InMemoryAgentDispatcher, InMemoryLeadStateRepository};
use clap::Args;
use outreach_ai::config::AppConfig;
use outreach_ai::error::AppError;
use outreach_ai::telemetry::{self, LogSink};
use outreach_ai::workflows::leadgen::{
    IcpProfile, LeadBatch, LeadGenService, MockEnricher, RawLead, ScoredLead,
};
use outreach_ai::workflows::replies::{
    InboundMessage, IntentClassifier, ReplyHandlerService, ReplyOutcome,
};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct LeadScoreArgs {
    /// JSON file describing the ideal customer profile
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// CSV export with email, first_name, last_name, company columns
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Handoff file for qualified leads (defaults to OUTREACH_HANDOFF_PATH)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ReplyClassifyArgs {
    /// Email address the reply came from
    #[arg(long)]
    pub(crate) sender: String,
    /// Reply body
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub(crate) text: Option<String>,
    /// File containing the reply body
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
}

/// Loads configuration and routes logs to stderr so stdout stays readable.
fn cli_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;
    Ok(config)
}

pub(crate) fn run_lead_scoring(args: LeadScoreArgs) -> Result<(), AppError> {
    let config = cli_config()?;
    let profile = read_profile(&args.profile)?;

    let batch = match &args.csv {
        Some(path) => LeadBatch::new().with_csv(File::open(path)?)?,
        None => LeadBatch::new(),
    };

    let service = LeadGenService::new(Arc::new(MockEnricher), profile);
    let scored = service.process_batch(batch);
    print_scored_leads(&scored);

    let output = args.output.unwrap_or(config.handoff.output_path);
    let handed_off = service.handoff(&scored, &output)?;
    println!(
        "\nHanded off {} qualified lead(s) to {}",
        handed_off,
        output.display()
    );
    Ok(())
}

pub(crate) async fn run_reply_classification(args: ReplyClassifyArgs) -> Result<(), AppError> {
    let config = cli_config()?;
    let body = match (args.text, args.file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => String::new(),
    };

    let service = reply_service(IntentClassifier::new(&config.classifier));
    let outcome = service
        .process_inbound(InboundMessage::new(args.sender, body))
        .await?;
    print_reply_outcome(&outcome);
    Ok(())
}

pub(crate) async fn run_demo() -> Result<(), AppError> {
    let config = cli_config()?;

    println!("Outreach AI demo");
    println!("\nLead scoring");
    let profile = IcpProfile {
        target_industries: vec!["SaaS".to_string(), "Fintech".to_string()],
        target_roles: vec!["Head of Growth".to_string(), "CTO".to_string()],
        required_tech: vec!["Python".to_string()],
        min_company_size: None,
    };
    let service = LeadGenService::new(Arc::new(MockEnricher), profile);
    let batch = LeadBatch::new().with_manual(demo_leads());
    let scored = service.process_batch(batch);
    print_scored_leads(&scored);

    let handoff = service.handoff_to(config.handoff.output_path.clone());
    let qualified = handoff.qualified(&scored);
    println!(
        "  {} of {} lead(s) qualify for outreach (handoff file not written in demo)",
        qualified.len(),
        scored.len()
    );

    println!("\nReply handling");
    let dispatcher = Arc::new(InMemoryAgentDispatcher::default());
    let replies = ReplyHandlerService::new(
        Arc::new(IntentClassifier::new(&config.classifier)),
        Arc::new(InMemoryLeadStateRepository::default()),
        dispatcher.clone(),
    );
    for (sender, body) in demo_replies() {
        let outcome = replies
            .process_inbound(InboundMessage::new(sender, body))
            .await?;
        print_reply_outcome(&outcome);
    }

    let triggers = dispatcher.triggers();
    if triggers.is_empty() {
        println!("\nDownstream agents: none triggered");
    } else {
        println!("\nDownstream agents:");
        for trigger in triggers {
            println!("  - {} <- {}", trigger.agent.label(), trigger.lead_email);
        }
    }
    Ok(())
}

fn reply_service(
    classifier: IntentClassifier,
) -> ReplyHandlerService<InMemoryLeadStateRepository, InMemoryAgentDispatcher> {
    ReplyHandlerService::new(
        Arc::new(classifier),
        Arc::new(InMemoryLeadStateRepository::default()),
        Arc::new(InMemoryAgentDispatcher::default()),
    )
}

fn demo_leads() -> Vec<RawLead> {
    [
        ("lead1@techco.com", "TechCo", "John"),
        ("lead2@retail.com", "RetailInc", "Jane"),
    ]
    .into_iter()
    .map(|(email, company, first_name)| {
        let mut lead = RawLead::new(email);
        lead.company = Some(company.to_string());
        lead.first_name = Some(first_name.to_string());
        lead
    })
    .collect()
}

fn demo_replies() -> [(&'static str, &'static str); 2] {
    [
        (
            "user1@example.com",
            "Hi,\nPlease remove me from your list.\nThanks.",
        ),
        (
            "user2@example.com",
            "Hello,\nI'm interested in your product. Can we schedule a call?\nBest,\nJohn",
        ),
    ]
}

fn print_scored_leads(scored: &[ScoredLead]) {
    if scored.is_empty() {
        println!("  No leads to score");
        return;
    }
    for lead in scored {
        println!(
            "  {:<28} score {:>3} ({})",
            lead.email(),
            lead.score,
            lead.segment.label()
        );
        if !lead.match_reasons.is_empty() {
            println!("    reasons: {}", lead.match_reasons.join("; "));
        }
    }
}

fn print_reply_outcome(outcome: &ReplyOutcome) {
    println!(
        "  {} -> {} (confidence {:.2}, via {}) state: {}",
        outcome.sender,
        outcome.result.intent.label(),
        outcome.result.confidence,
        outcome.source.label(),
        outcome.lead_state.label()
    );
    if let Some(meeting_time) = &outcome.result.meeting_time {
        println!("    meeting time: {meeting_time}");
    }
    if let Some(product) = &outcome.result.requested_product {
        println!("    requested product: {product}");
    }
}
