mod cli;
mod context;

use std::io;

use anyhow::Result;
use clap::Parser;
use qclear_client::{Cleaner, HttpApi};
use qclear_ui::styles::render_fail_icon;

use cli::Cli;
use context::RuntimeContext;

/// Exit status for Ctrl+C, as a shell reports SIGINT.
const INTERRUPTED: i32 = 130;

fn main() {
    let _ = ctrlc::set_handler(|| std::process::exit(INTERRUPTED));

    let cli = Cli::parse();

    let ctx = match RuntimeContext::from_cli(&cli) {
        Ok(ctx) => ctx,
        Err(e) => fail(e),
    };

    if ctx.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("qclear=debug,qclear_client=debug,qclear_config=debug")
            .with_writer(io::stderr)
            .init();
    }

    if let Err(e) = run(&ctx) {
        fail(e);
    }
}

fn fail(e: anyhow::Error) -> ! {
    eprintln!("{} Error: {:#}", render_fail_icon(), e);
    std::process::exit(1);
}

fn run(ctx: &RuntimeContext) -> Result<()> {
    tracing::debug!(?ctx, "starting");

    let api = HttpApi::new(&ctx.config.url, ctx.config.timeout());
    let mut cleaner = Cleaner::new(api, &ctx.config.url, io::stdout());

    if !cleaner.verify_server() {
        std::process::exit(1);
    }

    let summary = cleaner.clear_all_collections(ctx.force, &mut io::stdin().lock())?;
    tracing::debug!(
        collections = summary.collections,
        total_points = summary.total_points,
        deleted = summary.deleted(),
        attempted = summary.attempted(),
        "run finished"
    );
    Ok(())
}
