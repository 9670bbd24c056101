use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

use tinsel_render::{AsciiOptions, FancyOptions, LogFacade};
use tinsel_shapes::{TreeShape, TreeSize};

mod page;

#[derive(Parser)]
#[command(name = "tinsel")]
#[command(about = "tinsel: ASCII and CSS Christmas tree renderer")]
#[command(version)]
struct Cli {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: log::LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the ASCII tree to a standalone HTML page
    Ascii {
        /// Built-in shape: small or large
        #[arg(long, default_value = "small")]
        size: String,

        /// Custom shape file, one row per line (overrides --size)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Class for the <pre> content element
        #[arg(long)]
        class_name: Option<String>,

        /// Class for the wrapper element
        #[arg(long)]
        wrapper_class: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the CSS tree with random ornaments to a standalone HTML page
    Fancy {
        /// small or large
        #[arg(long, default_value = "small")]
        size: String,

        /// Seed for reproducible ornament placement
        #[arg(long)]
        seed: Option<u64>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the rows of a built-in shape through the logger
    Log {
        /// small or large
        #[arg(default_value = "small")]
        size: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Dom(#[from] tinsel_dom::DomError),
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Command::Ascii {
            size,
            data,
            class_name,
            wrapper_class,
            output,
        } => cmd_ascii(&size, data.as_deref(), class_name, wrapper_class, output.as_deref()),
        Command::Fancy { size, seed, output } => cmd_fancy(&size, seed, output.as_deref()),
        Command::Log { size } => {
            tinsel_render::log_tree(&size, &mut LogFacade);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn read_shape(path: &Path) -> Result<TreeShape, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(TreeShape::from_text(&text))
}

fn emit(title: &str, tree_html: &str, output: Option<&Path>) -> Result<(), CliError> {
    let html = page::document(title, tree_html);
    match output {
        Some(path) => {
            std::fs::write(path, html).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("Built: {}", path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn cmd_ascii(
    size: &str,
    data: Option<&Path>,
    class_name: Option<String>,
    wrapper_class: Option<String>,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let data = match data {
        Some(path) => read_shape(path)?,
        None => TreeShape::Builtin(TreeSize::from_selector(size)),
    };
    let options = ascii_options(data, class_name, wrapper_class);

    let tree_html = page::ascii(&options)?;
    emit("ascii tree", &tree_html, output)
}

/// Empty class names fall back to the defaults.
fn ascii_options(
    data: TreeShape,
    class_name: Option<String>,
    wrapper_class: Option<String>,
) -> AsciiOptions {
    let defaults = AsciiOptions::default();
    AsciiOptions {
        data,
        class_name: class_name
            .filter(|c| !c.is_empty())
            .unwrap_or(defaults.class_name),
        wrapper_class: wrapper_class
            .filter(|c| !c.is_empty())
            .unwrap_or(defaults.wrapper_class),
    }
}

fn cmd_fancy(size: &str, seed: Option<u64>, output: Option<&Path>) -> Result<(), CliError> {
    let options = FancyOptions {
        size: TreeSize::from_selector(size),
    };

    let tree_html = match seed {
        Some(seed) => page::fancy(&options, &mut StdRng::seed_from_u64(seed))?,
        None => page::fancy(&options, &mut rand::thread_rng())?,
    };
    emit("fancy tree", &tree_html, output)
}
