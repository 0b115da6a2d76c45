use std::sync::Arc;

use quotedesk_market_data::{
    GridSurfaceBuilder, QueryEngine, YahooConfig, YahooQuoteSource, YahooSymbolPreparser,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout only carries the payload
    if config.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_engine(config: &Config) -> anyhow::Result<QueryEngine> {
    let mut yahoo_config = YahooConfig {
        request_timeout: config.request_timeout,
        max_expirations: config.max_expirations,
        ..YahooConfig::default()
    };
    if let Some(user_agent) = &config.user_agent {
        yahoo_config.user_agent = user_agent.clone();
    }

    let source = YahooQuoteSource::with_config(yahoo_config)?;
    let preparser = match &config.default_suffix {
        Some(suffix) => YahooSymbolPreparser::with_default_suffix(suffix.as_str()),
        None => YahooSymbolPreparser::new(),
    };

    tracing::debug!(
        "Quote source ready (default suffix: {:?})",
        config.default_suffix
    );

    Ok(QueryEngine::new(
        Arc::new(source),
        Arc::new(preparser),
        Arc::new(GridSurfaceBuilder),
    ))
}
