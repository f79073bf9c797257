//! folio binary entrypoint kept minimal. The data model lives in the library crate.

mod args;

use clap::Parser;

fn main() {
    let args = args::Args::parse();
    let settings = folio::settings::settings();
    folio::logging::init(
        &args::determine_log_level(&args, &settings),
        &args::determine_log_target(&args),
    );

    tracing::info!(command = ?args.command, "folio starting");
    match args::process_args(&args, &settings) {
        Ok(output) => {
            print!("{output}");
            tracing::info!("folio exited");
        }
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
