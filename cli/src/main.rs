//! OpenHue CLI - Control a Philips Hue bridge from the command line

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use openhue_commands::ui::{RealUserInterface, print_not_configured};
use openhue_runtime::{HueError, SettingsStore, Startup, startup};

/// Exit status used when a command needs settings that do not exist yet.
///
/// A missing configuration is reported to the user but is not treated as a
/// failure by calling scripts.
const NOT_CONFIGURED_EXIT_CODE: i32 = 0;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure the bridge address and application key
    Setup(SetupArgs),
    /// Pair with a bridge and print a new application key
    Auth(AuthArgs),
    /// Find Hue bridges on the local network
    Discover,
    /// Fetch a resource from the bridge and print it as JSON
    Get(GetArgs),
}

impl Commands {
    /// Name checked against the list of commands allowed without settings
    const fn name(&self) -> &'static str {
        match self {
            Self::Setup(_) => "setup",
            Self::Auth(_) => "auth",
            Self::Discover => "discover",
            Self::Get(_) => "get",
        }
    }
}

#[derive(Debug, Args)]
struct SetupArgs {
    /// Bridge IP address or host name
    #[arg(short, long)]
    bridge: String,
    /// Existing application key (pairs with the bridge when omitted)
    #[arg(short, long)]
    key: Option<String>,
}

#[derive(Debug, Args)]
struct AuthArgs {
    /// Bridge IP address or host name
    #[arg(short, long)]
    bridge: String,
}

#[derive(Debug, Args)]
struct GetArgs {
    /// Resource path, e.g. /clip/v2/resource/light
    #[arg(default_value = "/clip/v2/resource")]
    path: String,
}

// Conversion implementations

impl From<SetupArgs> for openhue_commands::setup::SetupArgs {
    fn from(args: SetupArgs) -> Self {
        Self {
            bridge: args.bridge,
            key: args.key,
        }
    }
}

impl From<AuthArgs> for openhue_commands::auth::AuthArgs {
    fn from(args: AuthArgs) -> Self {
        Self {
            bridge: args.bridge,
        }
    }
}

impl From<GetArgs> for openhue_commands::get::GetArgs {
    fn from(args: GetArgs) -> Self {
        Self { path: args.path }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = SettingsStore::from_env()?;

    let startup = match startup(&store, cli.command.name()) {
        Ok(startup) => startup,
        Err(HueError::NotConfigured { state }) => {
            tracing::debug!("Settings unavailable: {}", state.describe());
            print_not_configured(&RealUserInterface);
            std::process::exit(NOT_CONFIGURED_EXIT_CODE);
        }
        Err(e) => return Err(e.into()),
    };

    match cli.command {
        Commands::Setup(args) => openhue_commands::setup::execute(args.into(), store).await,
        Commands::Auth(args) => openhue_commands::auth::execute(args.into()).await,
        Commands::Discover => openhue_commands::discover::execute().await,
        Commands::Get(args) => {
            let Startup::Context(ctx) = startup else {
                unreachable!("startup builds a context for every non-exempt command");
            };
            openhue_commands::get::execute(args.into(), &ctx).await
        }
    }
}
