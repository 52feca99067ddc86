use card_payments_gateway::bank::mock::{MockBank, MockBehavior};
use card_payments_gateway::bank::simulator::SimulatorBank;
use card_payments_gateway::bank::AcquiringBank;
use card_payments_gateway::clock::SystemClock;
use card_payments_gateway::config::AppConfig;
use card_payments_gateway::http::routes::router;
use card_payments_gateway::repo::payments_repo::PaymentsRepo;
use card_payments_gateway::service::payment_service::PaymentService;
use card_payments_gateway::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let bank: Arc<dyn AcquiringBank> = if cfg.uses_mock_bank() {
        let behavior = MockBehavior::parse(&cfg.bank_mock_behavior).unwrap_or_else(|| {
            tracing::warn!(
                value = %cfg.bank_mock_behavior,
                "unrecognised BANK_MOCK_BEHAVIOR, falling back to ALWAYS_AUTHORIZE"
            );
            MockBehavior::AlwaysAuthorize
        });
        tracing::warn!(?behavior, "using in-process mock bank");
        Arc::new(MockBank::new(behavior))
    } else {
        tracing::info!(url = %cfg.bank_simulator_url, timeout_ms = cfg.bank_timeout_ms, "using bank simulator");
        Arc::new(SimulatorBank::new(cfg.bank_simulator_url.clone(), cfg.bank_timeout_ms))
    };

    let payment_service = PaymentService::new(PaymentsRepo::new(), bank, Arc::new(SystemClock));
    let app = router(AppState { payment_service });

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
