use clap::Parser;
use img_collector::Options;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "img-collector")]
#[command(about = "Collect images from source folders into one directory, renamed per folder by modification time")]
pub struct Args {
    /// Source directory (can be given multiple times, processed in order)
    #[arg(short, long = "src", value_name = "DIR", required = true)]
    pub sources: Vec<PathBuf>,

    /// Destination directory
    #[arg(short, long = "dst", value_name = "DIR")]
    pub dest: PathBuf,

    /// Print the copy plan without writing any files
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Print the final summary as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Args {
    pub fn options(&self) -> Options {
        Options {
            sources: self.sources.clone(),
            dest: self.dest.clone(),
            dry_run: self.dry_run,
        }
    }
}
