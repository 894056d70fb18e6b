use azure_price_fetcher::{Settings, run_and_report};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Failures are logged by the pipeline; the exit status stays 0 either way.
    run_and_report(&Settings::default());
}
