use clap::Parser;

mod cli;

use cli::args::Cli;
use cli::logging::init_logging;
use cli::run::{report_failure, run};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let code = match run(cli.into_config()).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(event = "ixbench.failed", error = %e);
            report_failure(&e)
        }
    };
    std::process::exit(code);
}
