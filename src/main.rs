use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use trivia_quiz::{Quiz, terminal};

const DEFAULT_QUESTIONS_PATH: &str = "Desktop/Questions_gameCo/questionsCo.csv";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file to load the questions from [default: ~/Desktop/Questions_gameCo/questionsCo.csv]
    #[arg(short, long, env = "TRIVIA_QUESTIONS")]
    questions: Option<PathBuf>,

    /// Seed for shuffling questions and options
    #[arg(long)]
    seed: Option<u64>,
}

fn default_questions_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(DEFAULT_QUESTIONS_PATH)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let color = terminal::init();

    let path = args.questions.unwrap_or_else(default_questions_path);
    let mut rng = match args.seed {
        Some(seed) => {
            info!("using shuffle seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    debug!("question bank: {}, coloured output: {}", path.display(), color);

    let result = Quiz::load(&path, &mut io::stdout(), &mut rng).and_then(|quiz| quiz.run(&mut rng));
    match result {
        Ok(Some(_)) => ExitCode::SUCCESS,
        Ok(None) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error running quiz: {}", e);
            ExitCode::FAILURE
        }
    }
}
