//! CLI entry point for lsr

use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use termcolor::{BufferedStandardStream, ColorChoice, WriteColor};
use terminal_size::{Width, terminal_size};

use lsr::{
    RenderConfig, SortKey, Stylist, Theme, read_dir_entries, render_entries, render_glob_groups,
    render_tree,
};

/// Width used when the terminal size cannot be determined.
const FALLBACK_WIDTH: usize = 80;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lsr")]
#[command(about = "A colorful ls replacement with grid, long and tree views")]
#[command(version)]
struct Args {
    /// Paths or glob patterns to list
    paths: Vec<String>,

    /// Show hidden entries
    #[arg(short, long)]
    all: bool,

    /// Long listing; repeat (-ll) for mode, link count, owner and group
    #[arg(short, action = ArgAction::Count)]
    long: u8,

    /// Sort key: name, size, time or extension
    #[arg(short, long, default_value = "name", value_name = "KEY")]
    sort: String,

    /// Reverse the sort order
    #[arg(short, long)]
    reverse: bool,

    /// Force a grid column count (0 = fit to the terminal)
    #[arg(short, long, default_value_t = 0, value_name = "N")]
    columns: usize,

    /// Spaces between grid columns
    #[arg(long, default_value_t = 2, value_name = "N")]
    col_sep: usize,

    /// Print exact sizes in bytes
    #[arg(short, long)]
    bytes: bool,

    /// Recurse into directories as a tree
    #[arg(short, long)]
    tree: bool,

    /// Control color output: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Disable per-category icons
    #[arg(long)]
    no_icons: bool,

    /// Use the light color theme
    #[arg(long)]
    light: bool,
}

fn main() {
    let args = Args::parse();

    let mut paths = args.paths.clone();
    if paths.is_empty() {
        paths.push(".".to_string());
    }

    let use_color = should_use_color(args.color);

    let mut columns = args.columns;
    let mut icons = !args.no_icons;
    if !io::stdout().is_terminal() {
        // Piped output: one plain name per line so the result stays
        // machine-readable.
        columns = 1;
        icons = false;
    }

    let term_width = match terminal_size() {
        Some((Width(w), _)) => w as usize,
        None => FALLBACK_WIDTH,
    };

    let config = RenderConfig {
        show_hidden: args.all,
        sort: SortKey::parse(&args.sort),
        reverse: args.reverse,
        columns,
        col_sep: args.col_sep,
        long: args.long >= 1,
        extended: args.long >= 2,
        bytes: args.bytes,
        color: use_color,
        icons,
        term_width,
    };

    let theme = if args.light { Theme::Light } else { Theme::Dark };

    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = BufferedStandardStream::stdout(choice);

    let mut failures = 0usize;
    for path in &paths {
        let result = if args.tree {
            render_tree(&mut stdout, &theme, Path::new(path), &config)
        } else if path.contains('*') {
            render_glob_groups(&mut stdout, &theme, path, &config)
        } else {
            list_path(&mut stdout, &theme, path, paths.len() > 1, &config)
        };

        if let Err(e) = result {
            eprintln!("lsr: {path}: {e}");
            failures += 1;
        }
    }

    if let Err(e) = stdout.flush() {
        eprintln!("lsr: error writing output: {e}");
        process::exit(1);
    }

    if failures > 0 && failures == paths.len() {
        process::exit(1);
    }
}

/// Flat listing of one path argument. With more than one argument each
/// listing is announced by a `path:` header, the same shape glob groups
/// use.
fn list_path(
    w: &mut dyn WriteColor,
    stylist: &dyn Stylist,
    path: &str,
    show_header: bool,
    config: &RenderConfig,
) -> io::Result<()> {
    let entries = read_dir_entries(Path::new(path), config.show_hidden)?;
    if show_header {
        writeln!(w, "{path}:")?;
    }
    render_entries(w, stylist, entries, config)
}
