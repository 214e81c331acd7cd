use std::sync::Arc;

use anyhow::{Error, Result, anyhow};
use stack_notifier::{
    api::run_api_server, clients::sns::SnsClient, config::Config, filter::NotificationFilter,
    runtime::run_lambda_runtime, utils::init_tracing,
};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = Config::load().inspect_err(|e| error!(error = %e, "Startup failed"))?;

    let publisher = SnsClient::new(&config).await;
    let filter = NotificationFilter::new(config.filter_config(), Arc::new(publisher));

    if config.runs_in_lambda() {
        run_lambda_runtime(filter).await
    } else {
        run_api_server(&config, filter)
            .await
            .map_err(|e| anyhow!("Local event server failed: {}", e))
    }
}
