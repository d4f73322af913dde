//! taskctl - command line client for the task manager service
//!
//! Lists work-group rosters with the actions the acting user may take and
//! runs membership mutations through the same policy gate a UI would use.

#![allow(missing_docs)]

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use futures::future::join_all;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::process::ExitCode;
use taskmanager_rs::config::Config;
use taskmanager_rs::services::{
    MembershipDispatcher, MembershipRequest, MembershipService, MutationOutcome, NotificationLevel,
    RosterView,
};
use taskmanager_rs::utils::logging::init_logging;
use taskmanager_rs::{TaskManagerClient, build_info};
use tracing::debug;

static LONG_VERSION: Lazy<String> = Lazy::new(|| build_info().long_version());

#[derive(Parser)]
#[command(
    name = "taskctl",
    version,
    long_version = LONG_VERSION.as_str(),
    about = "Task manager work-group membership client"
)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "TASKMANAGER_CONFIG")]
    config: Option<PathBuf>,

    /// Service base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Bearer token
    #[arg(long)]
    token: Option<String>,

    /// Login of the acting user
    #[arg(long)]
    actor: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a group's roster and the actions available on each member
    Members { group: i64 },
    /// Groups the acting user belongs to
    Groups,
    /// Invite a user as MEMBER
    Add { group: i64, username: String },
    /// Remove a member from the group
    Remove { group: i64, username: String },
    /// Promote a MEMBER to MODERATOR
    Promote { group: i64, username: String },
    /// Demote a MODERATOR to MEMBER
    Demote { group: i64, username: String },
    /// Hand the OWNER role to another member
    Transfer { group: i64, username: String },
    /// Leave the group
    Leave { group: i64 },
    /// Add a user directly as MODERATOR
    #[command(name = "add-moderator")]
    AddModerator { group: i64, username: String },
    /// Remove a MODERATOR from the group
    #[command(name = "remove-moderator")]
    RemoveModerator { group: i64, username: String },
}

impl Commands {
    fn into_request(self) -> Option<(i64, MembershipRequest)> {
        let request = match self {
            Commands::Members { .. } | Commands::Groups => return None,
            Commands::Add { group, username } => (group, MembershipRequest::AddMember { username }),
            Commands::Remove { group, username } => {
                (group, MembershipRequest::RemoveMember { username })
            }
            Commands::Promote { group, username } => {
                (group, MembershipRequest::PromoteToModerator { username })
            }
            Commands::Demote { group, username } => {
                (group, MembershipRequest::DemoteModerator { username })
            }
            Commands::Transfer { group, username } => (
                group,
                MembershipRequest::TransferOwnership {
                    new_owner: username,
                },
            ),
            Commands::Leave { group } => (group, MembershipRequest::LeaveGroup),
            Commands::AddModerator { group, username } => {
                (group, MembershipRequest::AddModerator { username })
            }
            Commands::RemoveModerator { group, username } => {
                (group, MembershipRequest::RemoveModerator { username })
            }
        };
        Some(request)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn load_config(cli: &Cli) -> Result<Config> {
    let base = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::default(),
    };
    let mut config = base.with_env_overrides()?;

    if let Some(base_url) = &cli.base_url {
        config.client.base_url = base_url.clone();
    }
    if let Some(token) = &cli.token {
        config.client.token = Some(token.clone());
    }
    if let Some(actor) = &cli.actor {
        config.client.username = Some(actor.clone());
    }

    config.validate()?;
    Ok(config)
}

async fn run(cli: Cli) -> Result<bool> {
    let config = load_config(&cli).await?;
    init_logging(&config.logging)?;
    debug!("Loaded configuration: {:?}", config);

    let actor = config
        .client
        .username
        .clone()
        .ok_or_else(|| anyhow!("No acting user; pass --actor or set TASKMANAGER_USERNAME"))?;

    let client = TaskManagerClient::new(config.client.clone())?;
    let service = MembershipService::new(client);

    match cli.command {
        Commands::Members { group } => {
            let view = service
                .roster_view(&actor, group)
                .await
                .with_context(|| format!("Failed to load members of group {}", group))?;
            print_roster(&view);
            Ok(true)
        }
        Commands::Groups => {
            print_groups(service.dispatcher(), &actor).await?;
            Ok(true)
        }
        command => {
            let Some((group, request)) = command.into_request() else {
                return Ok(true);
            };
            let outcome = service.execute(&actor, group, request).await;
            Ok(print_outcome(&outcome))
        }
    }
}

fn print_roster(view: &RosterView) {
    match &view.actor {
        Some(actor) => println!(
            "Group {} as {} ({})",
            view.group_id, actor.username, actor.role
        ),
        None => println!("Group {} (not a member)", view.group_id),
    }
    if !view.group_actions.is_empty() {
        let actions: Vec<&str> = view.group_actions.iter().map(|a| a.as_str()).collect();
        println!("Group actions: {}", actions.join(", "));
    }

    for row in &view.rows {
        let marker = if row.is_self { " (you)" } else { "" };
        let actions: Vec<&str> = row.actions.iter().map(|a| a.as_str()).collect();
        println!(
            "  {:<20} {:<10} {}",
            format!("{}{}", row.member.login, marker),
            row.member.role,
            actions.join(", ")
        );
    }
}

async fn print_groups(client: &TaskManagerClient, actor: &str) -> Result<()> {
    let groups = client.my_active_groups().await?;
    let rosters = join_all(groups.iter().map(|g| async move {
        match g.group_id {
            Some(id) => client.active_members(actor, id).await.ok(),
            None => None,
        }
    }))
    .await;

    for (group, roster) in groups.iter().zip(rosters) {
        let role = group.role.map(|r| r.as_str()).unwrap_or("-");
        let size = roster
            .map(|members| members.len().to_string())
            .unwrap_or_else(|| "?".to_string());
        println!(
            "{:>5}  {:<30} {:<10} {} members",
            group
                .group_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            group.group_name,
            role,
            size
        );
    }
    Ok(())
}

fn print_outcome(outcome: &MutationOutcome) -> bool {
    let notification = outcome.notification();
    match notification.level {
        NotificationLevel::Success => println!("{}", notification.message),
        NotificationLevel::Error => eprintln!("{}", notification.message),
    }
    for member in outcome.members() {
        println!("  {:<20} {}", member.login, member.role);
    }
    outcome.is_success()
}
