use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use helplayout_core::{DEFAULT_TOTAL_WIDTH, LayoutConfig, WidthMode, wrap_paragraph_text};
use helplayout_loader::{HelpDocument, load_config};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "helplayout")]
#[command(about = "Render, wrap and measure two-column help screens", version)]
struct Cli {
    /// Log layout decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a help document.
    Render(RenderArgs),
    /// Wrap free-form text, preserving paragraph breaks.
    Wrap(WrapArgs),
    /// Print the flag-column width a help document would use.
    Measure(MeasureArgs),
    /// Validate one or more help documents.
    Validate(ValidateArgs),
}

/// Layout settings that override the document's own.
#[derive(Debug, Args)]
struct LayoutOverrides {
    /// Layout config file applied before the flags below.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Total line width.
    #[arg(long)]
    width: Option<usize>,
    /// Flag column width: 'auto' or a fixed number of columns.
    #[arg(long)]
    arg_width: Option<WidthMode>,
    /// Minimum flag column width in auto mode.
    #[arg(long)]
    min_arg_width: Option<usize>,
    /// Maximum flag column width in auto mode.
    #[arg(long)]
    max_arg_width: Option<usize>,
    /// Padding added to the computed column width.
    #[arg(long)]
    padding: Option<usize>,
    /// Number of description paragraphs to keep (0 keeps all).
    #[arg(long)]
    lines: Option<usize>,
}

impl LayoutOverrides {
    fn apply(&self, mut layout: LayoutConfig) -> Result<LayoutConfig, String> {
        if let Some(path) = &self.config {
            layout = load_config(path)
                .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?;
        }
        if let Some(width) = self.width {
            layout.total_width = width;
        }
        if let Some(mode) = self.arg_width {
            layout.mode = mode;
        }
        if let Some(min) = self.min_arg_width {
            layout.min_column_width = min;
        }
        if let Some(max) = self.max_arg_width {
            layout.max_column_width = max;
        }
        if let Some(padding) = self.padding {
            layout.padding = padding;
        }
        if let Some(lines) = self.lines {
            layout.description_paragraphs = lines;
        }
        Ok(layout.normalized())
    }
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Help document (.json, .yaml or .yml).
    input: PathBuf,
    #[command(flatten)]
    layout: LayoutOverrides,
    /// Render even if validation reports errors.
    #[arg(long)]
    no_validate: bool,
}

#[derive(Debug, Args)]
struct WrapArgs {
    /// Text file to wrap (reads stdin when omitted).
    input: Option<PathBuf>,
    /// Maximum line width.
    #[arg(long, default_value_t = DEFAULT_TOTAL_WIDTH)]
    width: usize,
}

#[derive(Debug, Args)]
struct MeasureArgs {
    /// Help document (.json, .yaml or .yml).
    input: PathBuf,
    #[command(flatten)]
    layout: LayoutOverrides,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Help documents to validate.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Render(args) => run_render(args),
        Command::Wrap(args) => run_wrap(args),
        Command::Measure(args) => run_measure(args),
        Command::Validate(args) => run_validate(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn load_document(path: &Path, overrides: &LayoutOverrides) -> Result<HelpDocument, String> {
    let mut document = HelpDocument::load(path)
        .map_err(|err| format!("Failed to load '{}': {err}", path.display()))?;
    document.layout = overrides.apply(document.layout)?;
    tracing::debug!(path = %path.display(), layout = ?document.layout, "loaded document");
    Ok(document)
}

fn run_render(args: RenderArgs) -> Result<(), String> {
    let document = load_document(&args.input, &args.layout)?;

    if !args.no_validate {
        let errors = document.validate();
        if !errors.is_empty() {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            return Err(format!(
                "'{}' is invalid: {}",
                args.input.display(),
                messages.join("; ")
            ));
        }
    }

    print!("{}", document.render());
    Ok(())
}

fn run_wrap(args: WrapArgs) -> Result<(), String> {
    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|err| format!("Failed to read stdin: {err}"))?;
            text
        }
    };

    print!("{}", wrap_paragraph_text(&text, args.width));
    Ok(())
}

fn run_measure(args: MeasureArgs) -> Result<(), String> {
    let document = load_document(&args.input, &args.layout)?;
    println!("{}", document.to_layout().column_width());
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let mut failures = Vec::new();

    for path in &args.inputs {
        let document = HelpDocument::load(path)
            .map_err(|err| format!("Failed to load '{}': {err}", path.display()))?;
        let errors = document.validate();
        if errors.is_empty() {
            continue;
        }
        for error in &errors {
            eprintln!("{}: {error}", path.display());
        }
        failures.push(path.display().to_string());
    }

    if !failures.is_empty() {
        return Err(format!(
            "{} invalid document(s): {}",
            failures.len(),
            failures.join(", ")
        ));
    }

    println!("Validated {} document(s).", args.inputs.len());
    Ok(())
}
