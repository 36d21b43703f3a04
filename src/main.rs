use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use sitescribe::application::ports::{Clock, Extractor, SystemClock};
use sitescribe::application::services::ConversionService;
use sitescribe::domain::DocumentKind;
use sitescribe::infrastructure::analysis::AnalyzerFactory;
use sitescribe::infrastructure::extraction::{
    ExcelExtractor, ImageExtractor, PdfExtractor, WordExtractor,
};
use sitescribe::infrastructure::observability::{TracingConfig, init_tracing};
use sitescribe::infrastructure::storage::BlobStoreFactory;
use sitescribe::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.json,
    ));

    let analyzer = AnalyzerFactory::create(&settings.analysis)?;
    let blob_store = BlobStoreFactory::create(&settings.storage)?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let extractors: Vec<(DocumentKind, Arc<dyn Extractor>)> = vec![
        (
            DocumentKind::Pdf,
            Arc::new(PdfExtractor::new(Arc::clone(&analyzer))),
        ),
        (DocumentKind::Word, Arc::new(WordExtractor)),
        (DocumentKind::Excel, Arc::new(ExcelExtractor)),
        (
            DocumentKind::Image,
            Arc::new(ImageExtractor::new(Arc::clone(&analyzer))),
        ),
    ];

    let conversion_service = Arc::new(ConversionService::new(extractors, Arc::clone(&clock)));

    let state = AppState {
        conversion_service,
        blob_store,
        clock,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .with_context(|| format!("invalid listen address {}", settings.server.host))?;
    tracing::info!(%addr, environment = %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
