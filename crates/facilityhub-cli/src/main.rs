use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input};
use dotenvy::dotenv;
use facilityhub_auth::{create_access_token, verify_token};
use facilityhub_cli::outline::{menu_outline, permission_table};
use facilityhub_cli::seeder::{self, SeedConfig, UsersPerProperty};
use facilityhub_client::HttpSources;
use facilityhub_config::{ClientConfig, JwtConfig, NavigationConfig};
use facilityhub_db::{PgDirectory, init_db_pool, run_migrations};
use facilityhub_models::{AccountTier, UserId};
use facilityhub_nav::{
    Avatar, ExpandedGroups, LoadOutcome, NavigationSession, Navigator, Session, render_menu,
};
use facilityhub_observability::init_basic_console_logging;

#[derive(Parser)]
#[command(name = "facilityhub-cli")]
#[command(about = "FacilityHub CLI - navigation previews and development tools", long_about = None)]
struct Cli {
    /// Role permission JSON file (defaults to ROLE_PERMISSIONS_FILE, then the built-in table)
    #[arg(long, global = true)]
    permissions: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the role permission table
    Roles,
    /// Print the menu a role sees on a tier
    Menu {
        /// Account tier: admin, cadmin or user
        #[arg(short = 't', long, default_value = "cadmin")]
        tier: AccountTier,

        /// Role identifier
        #[arg(short = 'r', long)]
        role: String,

        /// Mark the leaf at this path active
        #[arg(short = 'p', long)]
        current_path: Option<String>,

        /// Group labels to expand (repeatable)
        #[arg(short = 'e', long = "expand")]
        expanded: Vec<String>,

        /// Print JSON instead of an outline
        #[arg(long)]
        json: bool,
    },
    /// Load the navigation of a token's user from a running API
    Whoami {
        /// Bearer token (prompted if not provided)
        #[arg(long)]
        token: Option<String>,

        /// User id; read from the token when omitted
        #[arg(long)]
        user_id: Option<UserId>,
    },
    /// Mint a development access token
    IssueToken {
        /// User id the token is issued for
        #[arg(short = 'u', long)]
        user_id: UserId,

        /// Email claim (prompted if not provided)
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
    /// Seed the database with demo properties and users
    Seed {
        /// Number of properties to create
        #[arg(short = 'p', long, default_value = "3")]
        properties: usize,

        /// Client admins per property
        #[arg(long, default_value = "1")]
        client_admins: usize,

        /// Property users per property
        #[arg(long, default_value = "6")]
        users: usize,

        /// Organization admins
        #[arg(long, default_value = "1")]
        org_admins: usize,

        /// Skip placeholder logos
        #[arg(long)]
        no_logos: bool,
    },
    /// Delete every user and property
    ClearSeed {
        /// Do not ask for confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_basic_console_logging();

    let cli = Cli::parse();
    let navigation_config = match cli.permissions {
        Some(path) => NavigationConfig {
            permissions_file: Some(path),
        },
        None => NavigationConfig::from_env(),
    };

    match cli.command {
        Commands::Roles => handle_roles(&navigation_config),
        Commands::Menu {
            tier,
            role,
            current_path,
            expanded,
            json,
        } => handle_menu(&navigation_config, tier, &role, current_path, expanded, json),
        Commands::Whoami { token, user_id } => {
            handle_whoami(&navigation_config, token, user_id).await
        }
        Commands::IssueToken { user_id, email } => handle_issue_token(user_id, email),
        Commands::Seed {
            properties,
            client_admins,
            users,
            org_admins,
            no_logos,
        } => {
            let config = SeedConfig::new(properties)
                .with_users(UsersPerProperty {
                    client_admins,
                    property_users: users,
                })
                .with_org_admins(org_admins)
                .with_logos(!no_logos);
            handle_seed(&navigation_config, &config).await
        }
        Commands::ClearSeed { yes } => handle_clear_seed(yes).await,
    }
}

fn load_navigator(config: &NavigationConfig) -> anyhow::Result<Navigator> {
    Navigator::load(config.permissions_file.as_deref()).context("Failed to build navigation")
}

fn handle_roles(config: &NavigationConfig) -> anyhow::Result<()> {
    let navigator = load_navigator(config)?;
    print!("{}", permission_table(navigator.table()));
    Ok(())
}

fn handle_menu(
    config: &NavigationConfig,
    tier: AccountTier,
    role: &str,
    current_path: Option<String>,
    expanded: Vec<String>,
    json: bool,
) -> anyhow::Result<()> {
    let navigator = load_navigator(config)?;
    if !navigator.table().contains_role(role) {
        eprintln!("⚠️  Unknown role '{role}': only universal items are shown");
    }

    let menu = navigator.resolve(tier, role);
    let items = render_menu(
        &menu,
        current_path.as_deref(),
        &ExpandedGroups::from_labels(expanded),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        println!("{} / {} ({} pages)\n", tier, role, menu.leaf_count());
        print!("{}", menu_outline(&items));
    }
    Ok(())
}

async fn handle_whoami(
    config: &NavigationConfig,
    token: Option<String>,
    user_id: Option<UserId>,
) -> anyhow::Result<()> {
    let token = match token {
        Some(token) => token,
        None => Input::new()
            .with_prompt("Bearer token")
            .interact_text()
            .context("Failed to read token")?,
    };

    let user_id = match user_id {
        Some(id) => id,
        None => {
            let claims = verify_token(&token, &JwtConfig::from_env())
                .map_err(|e| anyhow::anyhow!("Cannot read user id from token: {}", e.error))?;
            claims
                .subject()
                .map(UserId::from)
                .context("Token subject is not a user id")?
        }
    };

    let navigator: Navigator = load_navigator(config)?;
    let sources = Arc::new(HttpSources::new(&ClientConfig::from_env())?);
    println!("Loading navigation from {}...", sources.base_url());

    let navigation = NavigationSession::new(navigator, sources.clone(), sources);
    if navigation.load(&Session::new(user_id, token)).await == LoadOutcome::Stale {
        bail!("Navigation load was superseded");
    }

    let Some(loaded) = navigation.current().await else {
        bail!("No navigation loaded");
    };

    match &loaded.profile {
        Some(profile) => println!(
            "{} <{}>  {} / {}",
            profile.full_name(),
            profile.email,
            profile.user_type,
            profile.user_role
        ),
        None => println!("⚠️  Profile unavailable, showing degraded navigation"),
    }
    match &loaded.avatar {
        Avatar::Logo { data } => println!("Avatar: property logo ({} bytes base64)", data.len()),
        Avatar::Generic => println!("Avatar: generic"),
    }
    println!();
    print!(
        "{}",
        menu_outline(&loaded.render(None, &ExpandedGroups::default()))
    );
    Ok(())
}

fn handle_issue_token(user_id: UserId, email: Option<String>) -> anyhow::Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .context("Failed to read email")?,
    };

    let jwt_config = JwtConfig::from_env();
    let token = create_access_token(user_id.into_inner(), &email, &jwt_config)
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e.error))?;

    eprintln!(
        "✅ Token for {email} valid for {}s",
        jwt_config.access_token_expiry
    );
    println!("{token}");
    Ok(())
}

async fn connect() -> anyhow::Result<PgDirectory> {
    let pool = init_db_pool().await?;
    run_migrations(&pool).await?;
    Ok(PgDirectory::new(pool))
}

async fn handle_seed(config: &NavigationConfig, seed_config: &SeedConfig) -> anyhow::Result<()> {
    let navigator = load_navigator(config)?;
    let directory = connect().await?;
    let summary = seeder::seed_all(&directory, navigator.table(), seed_config).await?;
    println!(
        "   {} properties, {} users",
        summary.properties, summary.users
    );
    Ok(())
}

async fn handle_clear_seed(yes: bool) -> anyhow::Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete every user and property?")
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            println!("Aborted");
            return Ok(());
        }
    }

    let directory = connect().await?;
    seeder::clear_all(&directory).await
}
