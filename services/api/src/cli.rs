use crate::demo::{
    run_demo, run_lead_scoring, run_reply_classification, LeadScoreArgs, ReplyClassifyArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use outreach_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Outreach AI",
    about = "Score leads against an ICP and classify prospect replies",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a batch of leads and write the outreach handoff
    Leads {
        #[command(subcommand)]
        command: LeadsCommand,
    },
    /// Classify inbound replies
    Replies {
        #[command(subcommand)]
        command: RepliesCommand,
    },
    /// Run the sample lead batch and sample replies end to end
    Demo,
}

#[derive(Subcommand, Debug)]
enum LeadsCommand {
    /// Enrich and score leads from a CSV export against an ICP profile
    Score(LeadScoreArgs),
}

#[derive(Subcommand, Debug)]
enum RepliesCommand {
    /// Classify a single reply and show the resulting lead state
    Classify(ReplyClassifyArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Leads {
            command: LeadsCommand::Score(args),
        } => run_lead_scoring(args),
        Command::Replies {
            command: RepliesCommand::Classify(args),
        } => run_reply_classification(args).await,
        Command::Demo => run_demo().await,
    }
}
