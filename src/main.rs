#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

use std::sync::Arc;

use thisslime::TracingError;
use tracing::{info, trace};
use tracing_unwrap::ResultExt;

use wordle_assist::{errors::Result, logging, terminal, Assistant, Config, HttpSolver};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = Config::load().expect_or_log("config should be valid");
    logging::init_tracing(config.logs.filter());

    if let Err(err) = run(config).await {
        err.trace();
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    let solver = HttpSolver::from_config(&config.solver)?;
    info!(endpoint = %solver.endpoint(), "using solver");

    let (assistant, events) = Assistant::new(Arc::new(solver), config.session.settle());
    terminal::spawn_stdin(assistant.sender())?;
    println!("{}", terminal::HELP);

    assistant
        .run(events, |snapshot| println!("\n{}", terminal::render(snapshot)))
        .await;

    trace!("finished");
    Ok(())
}
