use agri_market::presentation::MarketForm;
use agri_market::terminal::{run_session, Terminal};
use agri_market::app_system::DEFAULT_LOG_FILTER;
use agri_market::{setup_tracing, MarketConfig, MarketSystem};
use tokio::io::BufReader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing(DEFAULT_LOG_FILTER);
    let config = MarketConfig::from_env();

    info!("Starting Agriculture Management System");

    let system = MarketSystem::new(&config);

    let session = async {
        let mut form = MarketForm::load(system.client.clone())
            .await
            .map_err(|e| e.to_string())?;
        let mut terminal = Terminal::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
        run_session(&mut form, &mut terminal)
            .await
            .map_err(|e| e.to_string())
    }
    .await;

    if let Err(e) = &session {
        error!(error = %e, "Session failed");
    }

    system.shutdown().await?;

    info!("Agriculture Management System closed");
    session
}
