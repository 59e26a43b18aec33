//! CLI entry point for dirsize

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use dirsize::{
    DirectoryLister, OutputConfig, ScanConfig, SortOrder, print_json, print_listing, sort_entries,
};

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
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirsize")]
#[command(about = "List the entries of a directory sorted by their total size")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(long, value_name = "PATH")]
    root: Option<OsString>,

    /// Size sort order
    #[arg(long, value_enum, default_value = "asc")]
    sort: SortOrder,

    /// Skip names matching pattern at any depth (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    dirsize::logging::init_logging(args.verbose);

    // An empty --root counts as missing
    let Some(root) = args.root.filter(|r| !r.is_empty()).map(PathBuf::from) else {
        println!("Please specify a directory using the --root flag.");
        return;
    };

    let lister = DirectoryLister::new(ScanConfig {
        ignore_patterns: args.ignore,
    });

    let mut entries = lister.list_children(&root).unwrap_or_else(|e| {
        eprintln!("dirsize: {}", e);
        process::exit(1);
    });

    sort_entries(&mut entries, args.sort);

    let result = if args.json {
        print_json(&entries)
    } else {
        let config = OutputConfig {
            use_color: should_use_color(args.color),
        };
        print_listing(&entries, &config)
    };

    if let Err(e) = result {
        eprintln!("dirsize: {}", e);
        process::exit(1);
    }
}
