use std::process::ExitCode;

use signin_form::{Config, init_tracing, run};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = Config::load();
    let logging = config.as_ref().map(|c| c.logging.clone()).unwrap_or_default();
    init_tracing(&logging.level, logging.json_format);

    match config.and_then(|config| run(&config, std::io::stdin().lock(), std::io::stdout())) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => err.report(),
    }
}
