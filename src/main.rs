use homework_notifier::config::{environment::log_file_from_env, init_logging, Config};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let log_file = log_file_from_env();
    if let Err(e) = init_logging(&log_file) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Missing credentials are logged by Config::from_env; halt without retrying.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Startup aborted: {}", e);
            return;
        }
    };

    let mut engine = homework_notifier::create_monitor(&config);

    if let Err(e) = engine.run().await {
        tracing::error!("Unrecoverable error: {}", e);
        std::process::exit(1);
    }
}
