use std::io::Read as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use htmlpress::{Generator, OptionValue, RendererKind};

#[derive(Parser, Debug)]
#[command(name = "htmlpress", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a page into a PDF (requires `wkhtmltopdf`).
    Pdf(ConvertArgs),
    /// Convert a page into an image (requires `wkhtmltoimage`).
    Image(ConvertArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Input URL or file path; `-` reads HTML from stdin.
    input: String,

    /// Output file path.
    #[arg(long)]
    out: PathBuf,

    /// Renderer binary to use instead of the conventional install location.
    #[arg(long)]
    binary: Option<PathBuf>,

    /// Replace the output file if it already exists.
    #[arg(long)]
    overwrite: bool,

    /// Set a renderer option, e.g. `--set orientation=Landscape` or
    /// `--set no-background`. Repeatable; applied after `--options`.
    #[arg(long = "set", value_name = "NAME[=VALUE]")]
    set: Vec<String>,

    /// JSON file with renderer options (an object of name/value pairs).
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Print the resolved command line instead of running the renderer.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Pdf(args) => convert(RendererKind::Pdf, args),
        Command::Image(args) => convert(RendererKind::Image, args),
    }
}

fn convert(kind: RendererKind, args: ConvertArgs) -> anyhow::Result<()> {
    let mut generator = Generator::new(kind);
    if let Some(binary) = args.binary {
        generator.set_binary(binary);
    }

    if let Some(path) = &args.options {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read options file '{}'", path.display()))?;
        let values: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&text).context("parse options JSON (expected an object)")?;
        for (name, value) in values {
            let value: OptionValue = serde_json::from_value(value)
                .with_context(|| format!("parse value of option '{name}'"))?;
            generator.set_option(&name, value)?;
        }
    }

    for entry in &args.set {
        let (name, value) = parse_set(entry)?;
        generator.set_option(name, value)?;
    }

    if args.dry_run {
        let command = generator.get_command(&args.input, &args.out, &[])?;
        println!("{command}");
        return Ok(());
    }

    let out = if args.input == "-" {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .context("read HTML from stdin")?;
        generator.generate_from_html(&html, &args.out, &[], args.overwrite)?
    } else {
        generator.generate(&args.input, &args.out, &[], args.overwrite)?
    };

    eprintln!("wrote {}", out.display());
    Ok(())
}

/// Parse a `--set` entry. A bare name turns the flag on; values go through
/// JSON first so numbers, booleans, arrays and objects keep their shape, and
/// anything that does not parse as JSON is taken as a plain string.
fn parse_set(entry: &str) -> anyhow::Result<(&str, OptionValue)> {
    match entry.split_once('=') {
        None => Ok((entry, OptionValue::Flag(true))),
        Some((name, raw)) => {
            let value = match serde_json::from_str::<serde_json::Value>(raw) {
                Ok(json) if !json.is_string() => serde_json::from_value(json)
                    .with_context(|| format!("parse value of option '{name}'"))?,
                _ => OptionValue::Scalar(raw.to_string()),
            };
            Ok((name, value))
        }
    }
}
