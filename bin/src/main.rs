use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead};
use std::time::Instant;
use word_search_generator::*;

/// Generates word search puzzles from a list of words.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Logs each word placement.
    #[clap(short, long)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a puzzle and print it.
    Generate {
        /// The number of columns in the grid.
        #[clap(long)]
        width: usize,

        /// The number of rows in the grid.
        #[clap(long)]
        height: usize,

        /// The language whose alphabet fills the cells around the words.
        #[clap(short, long, default_value = "en")]
        language: String,

        /// Seed for the random placement, to reproduce a puzzle.
        #[clap(short, long)]
        seed: Option<u64>,

        /// Leaves the cells around the words blank instead of filling them.
        #[clap(long)]
        show_answers: bool,

        #[clap(flatten)]
        words: WordArgs,
    },
    /// Print the smallest grid size that could hold the longest word.
    MinSize {
        #[clap(flatten)]
        words: WordArgs,
    },
    /// List the supported languages.
    Languages,
}

#[derive(clap::Args, Debug)]
struct WordArgs {
    /// Path to a file that contains a list of words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: Option<String>,

    /// Words to hide in the puzzle.
    words: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();
    let args = Args::parse();
    init_logger(args.verbose);

    match args.command {
        Command::Generate {
            width,
            height,
            language,
            seed,
            show_answers,
            words,
        } => {
            let mut config = PuzzleConfig::new(width, height, words.read()?)
                .with_language(&language)
                .with_hidden_words(!show_answers);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let grid = config.generate()?;
            for line in print_grid(&grid, show_answers) {
                println!("{}", line);
            }
        }
        Command::MinSize { words } => {
            println!("{}", minimum_grid_size(&words.read()?)?);
        }
        Command::Languages => {
            for alphabet in supported_languages() {
                println!(
                    "{}: {}",
                    alphabet.code(),
                    alphabet.letters().iter().collect::<String>()
                );
            }
        }
    }

    log::info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

impl WordArgs {
    /// Collects the words given on the command line followed by the non-blank lines of the
    /// words file.
    fn read(&self) -> io::Result<Vec<String>> {
        let mut words = self.words.clone();
        if let Some(path) = &self.words_file {
            let reader = io::BufReader::new(File::open(path)?);
            for line in reader.lines() {
                let line = line?;
                if !line.trim().is_empty() {
                    words.push(line.trim().to_string());
                }
            }
        }
        Ok(words)
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
}
