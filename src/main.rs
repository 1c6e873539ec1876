mod cli;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use img_collector::{collector, Summary};
use indicatif::ProgressBar;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = cli::Args::parse();
    let options = args.options();

    if options.dry_run {
        println!("[dry-run] No files will be copied.");
    }

    let pb = ProgressBar::new(0);
    pb.set_style(collector::progress_style());

    match collector::run_with_progress(&options, &pb) {
        Ok(summary) => {
            print_summary(&summary, &args)?;
            Ok(())
        }
        Err(aborted) => {
            pb.finish_and_clear();
            print_summary(&aborted.summary, &args)?;
            Err(anyhow::Error::new(aborted.cause).context("collection aborted"))
        }
    }
}

fn print_summary(summary: &Summary, args: &cli::Args) -> Result<()> {
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary.report(args.dry_run))?
        );
        return Ok(());
    }

    for error in &summary.errors {
        eprintln!("{}", error);
    }
    println!("Done. {}", summary);
    Ok(())
}
