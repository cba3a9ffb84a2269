use dotenvy::dotenv;
use finance_buddy::{
    cli::{AppContext, Cli, commands},
    config::{self, database},
    errors::Result,
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Load .env before anything reads the environment
    dotenv().ok(); // Make it non-fatal, env vars can be set externally

    // 2. Initialize tracing; quiet by default so report output stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 3. Parse arguments and load the application configuration
    let cli = Cli::init();
    let app_config = config::load_app_configuration(&cli.config, cli.database_url.clone())?;
    debug!("Loaded configuration: {:?}", app_config);

    // 4. Open the ledger and make sure the tables exist
    let db = database::init_db(&app_config.database_url)
        .await
        .inspect(|_| debug!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Run the requested view
    let ctx = AppContext::new(db, app_config);
    commands::report_outcome(commands::run(&ctx, cli.command).await)
}
