//! htmark - Fast HTML to Markdown converter

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use htmark::{Config, HeaderStyle, HtmlConverter, PreserveComments};

#[derive(Parser)]
#[command(name = "htmark")]
#[command(version, about = "Fast HTML to Markdown converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    htmark page.html                    Convert a file to stdout
    curl -s URL | htmark -o page.md     Convert stdin to a file
    htmark --atx --strip-tags page.html Use # headings and drop unknown tags")]
struct Cli {
    /// Input HTML file (reads stdin when omitted or "-")
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output Markdown file (writes stdout when omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// JSON file of options, applied before the flags below
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Render h1 and h2 with # markers instead of underlines
    #[arg(long)]
    atx: bool,

    /// Drop tags without a Markdown form, keeping their content
    #[arg(long)]
    strip_tags: bool,

    /// Tags to remove along with their content (space separated)
    #[arg(long, value_name = "TAGS")]
    remove_nodes: Option<String>,

    /// Tags to keep verbatim as HTML (space separated)
    #[arg(long, value_name = "TAGS")]
    white_tags: Option<String>,

    /// Marker for bold text
    #[arg(long, value_name = "MARKER")]
    bold_style: Option<String>,

    /// Marker for italic text
    #[arg(long, value_name = "MARKER")]
    italic_style: Option<String>,

    /// Bullet for unordered lists
    #[arg(long, value_name = "CHAR")]
    list_item_style: Option<char>,

    /// Bullet for every other adjacent unordered list
    #[arg(long, value_name = "CHAR")]
    list_item_style_alternate: Option<char>,

    /// Render <br> as a bare newline
    #[arg(long)]
    hard_break: bool,

    /// Which HTML comments to keep
    #[arg(long, value_enum, value_name = "POLICY")]
    comments: Option<CommentPolicy>,

    /// Report recoverable HTML parse errors as warnings
    #[arg(long)]
    show_errors: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CommentPolicy {
    None,
    All,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "htmark=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let config = build_config(cli)?;
    let converter = HtmlConverter::with_config(config).map_err(|e| e.to_string())?;

    let input = read_input(cli.input.as_ref()).map_err(|e| e.to_string())?;
    let mut markdown = converter.convert_bytes(&input).map_err(|e| e.to_string())?;
    if !markdown.is_empty() {
        markdown.push('\n');
    }

    match &cli.output {
        Some(path) => fs::write(path, markdown)
            .map_err(|e| format!("failed to write {}: {e}", path.display())),
        None => io::stdout()
            .write_all(markdown.as_bytes())
            .map_err(|e| e.to_string()),
    }
}

fn build_config(cli: &Cli) -> Result<Config, String> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            Config::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => Config::default(),
    };

    if cli.atx {
        config.header_style = HeaderStyle::Atx;
    }
    if cli.strip_tags {
        config.strip_tags = true;
    }
    if cli.hard_break {
        config.hard_break = true;
    }
    if cli.show_errors {
        config.suppress_errors = false;
    }
    if let Some(comments) = cli.comments {
        config.preserve_comments = match comments {
            CommentPolicy::None => PreserveComments::None,
            CommentPolicy::All => PreserveComments::All,
        };
    }

    let mut overrides = Vec::new();
    if let Some(tags) = &cli.remove_nodes {
        overrides.push(("remove_nodes", tags.clone()));
    }
    if let Some(tags) = &cli.white_tags {
        overrides.push(("white_tags", tags.clone()));
    }
    if let Some(marker) = &cli.bold_style {
        overrides.push(("bold_style", marker.clone()));
    }
    if let Some(marker) = &cli.italic_style {
        overrides.push(("italic_style", marker.clone()));
    }
    if let Some(bullet) = cli.list_item_style {
        overrides.push(("list_item_style", bullet.to_string()));
    }
    if let Some(bullet) = cli.list_item_style_alternate {
        overrides.push(("list_item_style_alternate", bullet.to_string()));
    }
    config.merge(overrides).map_err(|e| e.to_string())?;

    Ok(config)
}

fn read_input(path: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read(path),
        _ => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}
