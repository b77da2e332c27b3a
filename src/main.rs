use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod gemini;
mod models;
mod orchestrator;
mod prompt;
mod providers;
mod render;
mod session;

use models::{ConnectionState, GenerationState, ProviderKind};
use orchestrator::{Credentials, Orchestrator};

#[derive(Parser)]
#[command(name = "progress-report")]
#[command(about = "AI-assisted student progress report generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to PowerSchool and list the student roster
    Roster {
        #[arg(long, default_value = "https://myschool.powerschool.com")]
        server_url: String,
        #[arg(long, default_value = "test-client-id")]
        client_id: String,
        #[arg(long, default_value = "test-client-secret")]
        client_secret: String,
    },
    /// Fetch and display the merged record for one student
    Fetch {
        #[arg(long)]
        student: String,
        #[arg(long, default_value = "https://myschool.powerschool.com")]
        server_url: String,
        #[arg(long, default_value = "test-client-id")]
        client_id: String,
        #[arg(long, default_value = "test-client-secret")]
        client_secret: String,
        /// IXL username; skill data is skipped unless both IXL credentials are given
        #[arg(long)]
        ixl_username: Option<String>,
        #[arg(long)]
        ixl_password: Option<String>,
        /// Skip the behavioral observations source
        #[arg(long)]
        no_behavior: bool,
    },
    /// Print the generation prompt without contacting the endpoint
    Preview {
        #[arg(long)]
        student: String,
        #[arg(long)]
        focus: Option<String>,
        #[arg(long, default_value = "https://myschool.powerschool.com")]
        server_url: String,
        #[arg(long, default_value = "test-client-id")]
        client_id: String,
        #[arg(long, default_value = "test-client-secret")]
        client_secret: String,
        #[arg(long)]
        ixl_username: Option<String>,
        #[arg(long)]
        ixl_password: Option<String>,
        #[arg(long)]
        no_behavior: bool,
    },
    /// Generate and display the progress report
    Generate {
        #[arg(long)]
        student: String,
        /// Teacher's focus area or concern for this report
        #[arg(long)]
        focus: Option<String>,
        /// Write the raw (unrendered) report text to this file
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value = "https://myschool.powerschool.com")]
        server_url: String,
        #[arg(long, default_value = "test-client-id")]
        client_id: String,
        #[arg(long, default_value = "test-client-secret")]
        client_secret: String,
        #[arg(long)]
        ixl_username: Option<String>,
        #[arg(long)]
        ixl_password: Option<String>,
        #[arg(long)]
        no_behavior: bool,
    },
}

/// Connects the academic provider (mandatory) plus whichever optional
/// sources were requested. A failed optional source is reported and
/// skipped; it never blocks the others.
async fn connect_sources(
    orchestrator: &mut Orchestrator,
    server_url: String,
    client_id: String,
    client_secret: String,
    ixl_username: Option<String>,
    ixl_password: Option<String>,
    no_behavior: bool,
) -> anyhow::Result<()> {
    orchestrator
        .connect_provider(Credentials::Academic {
            server_url,
            client_id,
            client_secret,
        })
        .await;
    match orchestrator.session.connection(ProviderKind::Academic) {
        ConnectionState::Connected => println!("PowerSchool connected."),
        ConnectionState::Failed(reason) => bail!("PowerSchool: {reason}"),
        _ => bail!("PowerSchool connection did not complete"),
    }

    if let (Some(username), Some(secret)) = (ixl_username, ixl_password) {
        orchestrator
            .connect_provider(Credentials::Skill { username, secret })
            .await;
        match orchestrator.session.connection(ProviderKind::Skill) {
            ConnectionState::Connected => println!("IXL connected."),
            ConnectionState::Failed(reason) => println!("IXL skipped: {reason}"),
            _ => {}
        }
    }

    if !no_behavior {
        orchestrator.connect_provider(Credentials::Behavior).await;
        if orchestrator.session.is_connected(ProviderKind::Behavior) {
            println!("Behavioral system connected.");
        }
    }

    Ok(())
}

fn print_record(orchestrator: &Orchestrator) {
    let input = &orchestrator.session.input;
    println!("Student: {}", input.student_name);
    for (label, data) in [
        ("PowerSchool data", &input.academic_data),
        ("IXL data", &input.skill_data),
        ("Behavioral notes", &input.behavior_data),
    ] {
        println!("\n{label}:");
        if data.is_empty() {
            println!("  (source not connected)");
        } else {
            for line in data.lines() {
                println!("  {line}");
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut orchestrator = Orchestrator::new();

    match cli.command {
        Commands::Roster {
            server_url,
            client_id,
            client_secret,
        } => {
            connect_sources(
                &mut orchestrator,
                server_url,
                client_id,
                client_secret,
                None,
                None,
                true,
            )
            .await?;
            println!("\nStudents:");
            for student in &orchestrator.session.roster {
                println!("- {} ({})", student.name, student.id);
            }
        }
        Commands::Fetch {
            student,
            server_url,
            client_id,
            client_secret,
            ixl_username,
            ixl_password,
            no_behavior,
        } => {
            connect_sources(
                &mut orchestrator,
                server_url,
                client_id,
                client_secret,
                ixl_username,
                ixl_password,
                no_behavior,
            )
            .await?;
            orchestrator.select_student(&student).await;
            print_record(&orchestrator);
        }
        Commands::Preview {
            student,
            focus,
            server_url,
            client_id,
            client_secret,
            ixl_username,
            ixl_password,
            no_behavior,
        } => {
            connect_sources(
                &mut orchestrator,
                server_url,
                client_id,
                client_secret,
                ixl_username,
                ixl_password,
                no_behavior,
            )
            .await?;
            orchestrator.select_student(&student).await;
            if let Some(focus) = focus.as_deref() {
                orchestrator.set_focus_area(focus);
            }
            println!("{}", prompt::build_prompt(&orchestrator.session.input));
        }
        Commands::Generate {
            student,
            focus,
            out,
            server_url,
            client_id,
            client_secret,
            ixl_username,
            ixl_password,
            no_behavior,
        } => {
            connect_sources(
                &mut orchestrator,
                server_url,
                client_id,
                client_secret,
                ixl_username,
                ixl_password,
                no_behavior,
            )
            .await?;
            orchestrator.select_student(&student).await;
            if let Some(focus) = focus.as_deref() {
                orchestrator.set_focus_area(focus);
            }

            println!("Generating report...");
            orchestrator.generate_report().await;

            match &orchestrator.session.generation {
                GenerationState::Succeeded(text) => {
                    println!("\n{}", render::to_terminal(&render::parse(text)));
                    if let Some(path) = out {
                        std::fs::write(&path, text)?;
                        println!("Report written to {}.", path.display());
                    }
                }
                GenerationState::Failed(reason) => bail!("{reason}"),
                _ => bail!("generation did not complete"),
            }
        }
    }

    Ok(())
}
