use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use go_outline::cli::{one_line_error, CliArgs};

fn try_main() -> Result<String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(anyhow!(one_line_error(&e))),
    };
    let config = args.into_config().map_err(|e| anyhow!(e))?;
    go_outline::tracing::init(config.log_dir.as_deref());
    tracing::debug!(?config, "starting outline");

    let stdin = io::stdin();
    let json = go_outline::run(&config, stdin.lock())?;
    Ok(json)
}

fn main() -> ExitCode {
    // Nothing reaches stdout unless the whole outline was built
    let result = try_main().and_then(|json| {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", json).context("failed to write outline")?;
        stdout.flush().context("failed to write outline")
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
