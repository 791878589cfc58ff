use clap::Parser;
use std::path::PathBuf;
use std::process;

use handin::cryptography::load_public_key;
use handin::error::SubmitError;
use handin::submission::Submission;
use handin::{HANDIN_HOST, HANDIN_PORT, SUBMISSION_PUBLIC_KEY};

#[derive(Parser)]
#[command(name = "handin")]
#[command(about = "Encrypts and submits coursework to the collection server", long_about = None)]
#[command(version)]
struct Cli {
    /// Course identifier (e.g. cs450)
    course_id: String,

    /// Lab identifier (e.g. lab1)
    lab_id: String,

    /// Files to submit, in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Submission server hostname
    #[arg(long, default_value = HANDIN_HOST)]
    host: String,

    /// Submission server port
    #[arg(long, default_value_t = HANDIN_PORT)]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on verbose flag
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
        log::info!("Verbose logging enabled");
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    match run(&cli) {
        Ok(response) => println!("{}", response),
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Submission unsuccessful");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, SubmitError> {
    let public_key = load_public_key(SUBMISSION_PUBLIC_KEY)?;

    let mut submission = Submission::new(cli.course_id.clone(), cli.lab_id.clone(), public_key);
    for file in &cli.files {
        submission.add_file(file)?;
    }

    submission.send(&cli.host, cli.port)
}
