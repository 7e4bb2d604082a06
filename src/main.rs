//! Annotation text CLI.
//!
//! Reads annotation strings one per line from a file or stdin and cleans,
//! filters or translates them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use annotext::{Glossary, GlossaryMatcher, TranslationResult};

/// CAD Annotation Text Tool
///
/// Clean MTEXT annotations, detect Chinese content and translate it to
/// Japanese through a glossary.
#[derive(Parser)]
#[command(name = "annotext")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cleaned text and extracted Chinese of every line
    Clean {
        /// Input text file, one annotation per line (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Print only the lines that carry Chinese content
    Detect {
        /// Input text file, one annotation per line (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Translate every line and print the results as JSON
    Translate {
        /// Input text file, one annotation per line (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// JSON glossary layered over the built-in one
        #[arg(short, long, value_name = "FILE")]
        glossary: Option<PathBuf>,

        /// Do not start from the built-in glossary
        #[arg(long, requires = "glossary")]
        no_builtin: bool,

        /// Translate lines on all cores
        #[arg(long)]
        parallel: bool,

        /// Output JSON file (optional, defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Dump the built-in glossary as JSON
    Glossary {
        /// Output JSON file (optional, defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Command handler owning the matcher.
struct AnnotationHandler {
    matcher: GlossaryMatcher,
}

impl AnnotationHandler {
    fn new() -> Self {
        Self {
            matcher: GlossaryMatcher::with_default_chain(),
        }
    }

    /// Prints `cleaned<TAB>extracted` for every line.
    fn clean(&self, input: Option<&Path>) -> Result<()> {
        let normalizer = self.matcher.normalizer();
        let mut out = io::stdout().lock();

        for line in read_lines(input)? {
            writeln!(
                out,
                "{}\t{}",
                normalizer.clean(&line),
                normalizer.extract_script_content(&line)
            )?;
        }

        Ok(())
    }

    /// Prints the lines that carry Chinese content, unchanged.
    fn detect(&self, input: Option<&Path>) -> Result<()> {
        let lines = read_lines(input)?;
        let mut out = io::stdout().lock();

        for line in self.matcher.filter(&lines) {
            writeln!(out, "{}", line)?;
        }

        Ok(())
    }

    /// Translates every line and writes the results as a JSON array.
    fn translate(
        &self,
        input: Option<&Path>,
        glossary: &Glossary,
        parallel: bool,
        output: Option<&Path>,
    ) -> Result<()> {
        let lines = read_lines(input)?;
        log::debug!("Translating {} lines with {} glossary entries", lines.len(), glossary.len());

        let results = if parallel {
            self.matcher.translate_parallel(&lines, glossary)
        } else {
            self.matcher.translate(&lines, glossary)
        };

        let json = serde_json::to_string_pretty(&results)
            .with_context(|| "Failed to serialize translation results")?;

        if let Some(output_path) = output {
            std::fs::write(output_path, &json)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            println!(
                "✓ Translated {} line(s), {} from the glossary → {}",
                results.len(),
                matched_count(&results),
                output_path.display()
            );
        } else {
            println!("{}", json);
        }

        Ok(())
    }

    /// Writes the built-in glossary as JSON.
    fn dump_glossary(&self, output: Option<&Path>) -> Result<()> {
        let glossary = Glossary::builtin();
        let json = glossary
            .to_json_pretty()
            .with_context(|| "Failed to serialize glossary")?;

        if let Some(output_path) = output {
            std::fs::write(output_path, &json)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            println!(
                "✓ Wrote {} glossary entries → {}",
                glossary.len(),
                output_path.display()
            );
        } else {
            println!("{}", json);
        }

        Ok(())
    }
}

fn matched_count(results: &[TranslationResult]) -> usize {
    results.iter().filter(|r| r.is_matched()).count()
}

/// Reads non-blank lines from `input`, or stdin when no file is given.
///
/// Lines that are not valid UTF-8 are logged and skipped.
fn read_lines(input: Option<&Path>) -> Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file does not exist: {}", path.display());
            }
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    Ok(collect_lines(reader))
}

fn collect_lines(reader: impl BufRead) -> Vec<String> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match line {
            Ok(line) => Some(line.trim_end_matches('\r').to_string()),
            Err(err) => {
                log::warn!("Skipping line {}: {}", index + 1, err);
                None
            }
        })
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Builds the glossary for `translate`: built-in, user file, or both.
fn build_glossary(user: Option<&Path>, no_builtin: bool) -> Result<Glossary> {
    let mut glossary = if no_builtin {
        Glossary::new()
    } else {
        Glossary::builtin().clone()
    };

    if let Some(path) = user {
        let user_glossary = Glossary::load(path)
            .with_context(|| format!("Failed to load glossary {}", path.display()))?;
        glossary.merge(&user_glossary);
    }

    Ok(glossary)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let handler = AnnotationHandler::new();

    match &cli.command {
        Commands::Clean { input } => handler.clean(input.as_deref())?,
        Commands::Detect { input } => handler.detect(input.as_deref())?,
        Commands::Translate {
            input,
            glossary,
            no_builtin,
            parallel,
            output,
        } => {
            let glossary = build_glossary(glossary.as_deref(), *no_builtin)?;
            handler.translate(input.as_deref(), &glossary, *parallel, output.as_deref())?;
        }
        Commands::Glossary { output } => handler.dump_glossary(output.as_deref())?,
    }

    Ok(())
}
