use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use teamup_match::config::Settings;
use teamup_match::core::Matcher;
use teamup_match::models::{CreateTeamRequest, InviteRequest, MatchTag, RecommendRequest, ScoringWeights};
use teamup_match::presentation;
use teamup_match::services::{load_profiles, FileStore, RecommendationService, TeamService};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "teamup-match")]
#[command(about = "Teammate recommendations and team formation for course projects", long_about = None)]
struct Cli {
    /// Configuration file; defaults to config/default.toml plus config/local.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Candidate pool file, overriding storage.profiles_file
    #[arg(long, global = true)]
    profiles: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank teammates for a user
    Recommend {
        #[arg(long)]
        user: String,
        #[arg(long)]
        top_n: Option<usize>,
        /// Keep only recommendations matched on this dimension
        #[arg(long)]
        tag: Option<MatchTag>,
        /// Case-insensitive search over name and major
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        weight_time: Option<f64>,
        #[arg(long)]
        weight_skill: Option<f64>,
        #[arg(long)]
        weight_interest: Option<f64>,
        #[arg(long)]
        weight_personality: Option<f64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Manage teams
    Team {
        #[command(subcommand)]
        command: TeamCommands,
    },
    /// Invite a candidate into a team
    Invite {
        #[arg(long)]
        team: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        candidate: String,
    },
    /// List a team's invitations
    Invitations {
        #[arg(long)]
        team: String,
    },
    /// Accept a pending invitation
    Accept {
        #[arg(long)]
        team: String,
        #[arg(long)]
        invitation: String,
    },
}

#[derive(Subcommand)]
enum TeamCommands {
    /// Create a team owned by a user
    Create {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        course_id: String,
        #[arg(long, default_value = "")]
        course_name: String,
    },
    /// List the teams a user belongs to
    List {
        #[arg(long)]
        member: String,
    },
}

fn init_logging(settings: &Settings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("failed to load configuration")?;

    init_logging(&settings);
    info!("Configuration loaded successfully");

    let locale = settings.display.locale;

    match cli.command {
        Commands::Recommend {
            user,
            top_n,
            tag,
            search,
            weight_time,
            weight_skill,
            weight_interest,
            weight_personality,
            json,
        } => {
            let profiles_file = cli.profiles.unwrap_or_else(|| settings.storage.profiles_file.clone());
            let pool = load_profiles(&profiles_file)
                .with_context(|| format!("failed to load profiles from {}", profiles_file.display()))?;

            let base = settings.weights();
            let overridden = [weight_time, weight_skill, weight_interest, weight_personality]
                .iter()
                .any(Option::is_some);
            let weights = overridden.then(|| ScoringWeights {
                time: weight_time.unwrap_or(base.time),
                skill: weight_skill.unwrap_or(base.skill),
                interest: weight_interest.unwrap_or(base.interest),
                personality: weight_personality.unwrap_or(base.personality),
            });

            let service = RecommendationService::new(Matcher::new(base), settings.matching.max_top_n);
            let request = RecommendRequest {
                user_id: user,
                top_n: top_n.unwrap_or(settings.matching.default_top_n),
                weights,
                tag,
                search,
            };

            let response = service.recommend(&request, &pool)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print!("{}", presentation::render_recommendations(&response, locale));
            }
        }
        Commands::Team { command } => {
            let teams = open_team_service(&settings)?;
            match command {
                TeamCommands::Create { owner, name, course_id, course_name } => {
                    let team = teams.create_team(CreateTeamRequest {
                        owner_id: owner,
                        name,
                        course_id,
                        course_name,
                    })?;
                    println!("Created {}", presentation::render_team(&team));
                }
                TeamCommands::List { member } => {
                    let member_teams = teams.teams_for_member(&member)?;
                    if member_teams.is_empty() {
                        println!("{} has no teams yet.", member);
                    }
                    for team in &member_teams {
                        println!("- {}", presentation::render_team(team));
                    }
                }
            }
        }
        Commands::Invite { team, from, candidate } => {
            let teams = open_team_service(&settings)?;
            let invitation = teams.invite_candidate(InviteRequest {
                team_id: team,
                inviter_id: from,
                candidate_id: candidate,
            })?;
            println!("Invited: {}", presentation::render_invitation(&invitation));
        }
        Commands::Invitations { team } => {
            let teams = open_team_service(&settings)?;
            for invitation in teams.invitations(&team)? {
                println!("- {}", presentation::render_invitation(&invitation));
            }
        }
        Commands::Accept { team, invitation } => {
            let teams = open_team_service(&settings)?;
            let updated = teams.accept_invitation(&team, &invitation)?;
            println!("Accepted: {}", presentation::render_team(&updated));
        }
    }

    Ok(())
}

fn open_team_service(settings: &Settings) -> anyhow::Result<TeamService<FileStore>> {
    let store = FileStore::open(&settings.storage.data_file).with_context(|| {
        format!("failed to open store {}", settings.storage.data_file.display())
    })?;
    Ok(TeamService::new(store))
}

