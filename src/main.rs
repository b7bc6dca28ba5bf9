use anyhow::{Context, Result};
use clap::Parser;
use gommit::config::{LintConfig, default_candidates};
use gommit::interactive::{TerminalEditor, TerminalPrompt};
use gommit::lint::catalog;
use gommit::report::{self, OutputFormat};
use gommit::{Error, MessageFile, MessageStore, RepairLoop, Validator};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "gommit")]
#[command(about = "Lint conventional commit messages from a git commit-msg hook")]
#[command(version)]
struct Args {
    #[arg(help = "Path to the commit message file (reads stdin when omitted)")]
    file: Option<PathBuf>,
    #[arg(long, help = "Path to a gommit.conf.yaml file")]
    config: Option<PathBuf>,
    #[arg(long, help = "Only validate; never prompt, edit or rewrite the message")]
    check: bool,
    #[arg(long, help = "Output format for --check", value_enum, default_value = "text")]
    format: OutputFormat,
    #[arg(long, help = "Editor command for the repair step (defaults to $VISUAL/$EDITOR)")]
    editor: Option<String>,
    #[arg(long, help = "List all rules and whether they are enabled")]
    list_rules: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gommit=warn")))
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            if let Some(gommit_err) = err.downcast_ref::<Error>() {
                let violations = gommit_err.violations();
                if !violations.is_empty() {
                    report::print_violations(violations);
                }
            }
            report::print_error(&format!("{err:#}"));
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<i32> {
    let config = match &args.config {
        Some(path) => LintConfig::from_yaml_file(path)?,
        None => LintConfig::resolve(&default_candidates())?,
    };

    if args.list_rules {
        report::print_rules(catalog::all_rules(), &config);
        return Ok(0);
    }

    let validator = Validator::new().context("Failed to compile commit message patterns")?;

    let mut store = match args.file {
        Some(path) => MessageFile::new(path),
        None => {
            if !args.check {
                report::print_heading("No file provided. Enter your commit message (Ctrl+D when finished):");
            }
            MessageFile::from_reader(std::io::stdin().lock())?
        }
    };

    if args.check {
        let message = store.read()?;
        let result = validator.validate(&message, &config);
        report::print_result(&result, args.format)?;
        return Ok(if result.is_valid() { 0 } else { 1 });
    }

    let editor = match args.editor {
        Some(command) => TerminalEditor::with_executable(command),
        None => TerminalEditor::new(),
    };

    let repaired = RepairLoop::new(&validator, &config, editor, TerminalPrompt)
        .run(&mut store)
        .with_context(|| format!("Commit rejected for '{}'", store.path().display()))?;

    report::print_success(&repaired.message);
    Ok(0)
}
