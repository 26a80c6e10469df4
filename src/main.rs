//! CLI entry point for hyperion

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use env_logger::Env;
use hyperion::{ChartStyle, TreeConfig, scan, write_json, write_report};
use log::warn;
use termcolor::{ColorChoice, StandardStream};

const ABOUT: &str = r#"
Hyperion - Advanced Directory Tree Visualizer

A command-line tool for visualizing directory structures with:
- Customizable tree display with Unicode/ASCII characters
- Colorized output with file type differentiation
- Filtering by folder name, file extension and exact file name
- File type statistics and largest-files tables
- Bar and sparkline charts of the size distribution

License: MIT
Repository: https://github.com/Anouar-A-Alaoui/hyperion

Use 'hyperion --help' for usage instructions.
"#;

const EXAMPLES: &str = r#"Examples:
  # Basic usage (folders only)
  hyperion

  # Exclude folders and file types
  hyperion --show-files --exclude-folders "bin,obj" --exclude-files ".exe,.dll"

  # Show stats with Unicode and color
  hyperion --show-files --unicode --color --show-stats

  # Show top 15 largest files with chart
  hyperion --show-files --stat-table --stats-count 15 --chart

  # Compact view with background color
  hyperion --show-files --compact --bg-color
"#;

#[derive(Parser, Debug)]
#[command(name = "hyperion")]
#[command(about = "Directory tree visualizer with size statistics and charts")]
#[command(version)]
#[command(after_help = EXAMPLES)]
struct Args {
    /// Root directory to scan
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Folders to exclude from tree (comma-separated)
    #[arg(long = "exclude-folders", default_value = "node_modules")]
    exclude_folders: String,

    /// Show files as well as directories
    #[arg(long = "show-files")]
    show_files: bool,

    /// File extensions to exclude (comma-separated, e.g. ".exe,.dll")
    #[arg(long = "exclude-files", default_value = "")]
    exclude_files: String,

    /// File names to exclude exactly (comma-separated, e.g. "config.json,README.md")
    #[arg(long = "exclude-names", default_value = "")]
    exclude_names: String,

    /// Maximum depth to recurse (-1 for unlimited)
    #[arg(long = "max-depth", default_value_t = -1, allow_negative_numbers = true)]
    max_depth: i64,

    /// Use Unicode characters for tree visuals (--unicode=false for ASCII)
    #[arg(long, default_value_t = true, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    unicode: bool,

    /// Use colors in output (--color=false to disable)
    #[arg(long, default_value_t = true, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    color: bool,

    /// Use background colors for items
    #[arg(long = "bg-color")]
    bg_color: bool,

    /// Enable compact tree layout
    #[arg(long)]
    compact: bool,

    /// Show total files, directories and size
    #[arg(long = "show-stats")]
    show_stats: bool,

    /// Show a table of the largest files and file types
    #[arg(long = "stat-table")]
    stat_table: bool,

    /// Number of entries in the largest-files table and chart
    #[arg(long = "stats-count", default_value_t = 10)]
    stats_count: usize,

    /// Show a chart of the file size distribution
    #[arg(long)]
    chart: bool,

    /// Chart style
    #[arg(long = "chart-style", value_enum, default_value = "auto")]
    chart_style: ChartStyle,

    /// Print statistics as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Show information about hyperion
    #[arg(long)]
    about: bool,
}

impl Args {
    fn to_config(&self) -> TreeConfig {
        TreeConfig {
            path: self.path.clone(),
            exclude_folders: split_list(&self.exclude_folders),
            show_files: self.show_files,
            exclude_extensions: split_list(&self.exclude_files),
            exclude_names: split_list(&self.exclude_names),
            max_depth: usize::try_from(self.max_depth).ok(),
            unicode: self.unicode,
            color: should_use_color(self.color),
            bg_color: self.bg_color,
            compact: self.compact,
            show_stats: self.show_stats,
            stat_table: self.stat_table,
            stats_count: self.stats_count,
            chart: self.chart,
            chart_style: self.chart_style,
        }
    }
}

/// Split a comma-separated list, trimming each part. Empty input gives an empty list.
fn split_list(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split(',').map(|part| part.trim().to_string()).collect()
}

/// Determine whether to use color output.
fn should_use_color(requested: bool) -> bool {
    if !requested {
        return false;
    }
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Crude Unicode check based on the TERM value.
fn terminal_supports_unicode(term: &str) -> bool {
    let term = term.to_lowercase();
    ["xterm", "unicode", "utf", "linux"]
        .iter()
        .any(|marker| term.contains(marker))
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if args.about {
        println!("{}", ABOUT);
        return;
    }

    let config = args.to_config();

    if cfg!(windows) && config.unicode {
        let term = std::env::var("TERM").unwrap_or_default();
        if !terminal_supports_unicode(&term) {
            warn!("Unicode characters may not display correctly in this terminal.");
            warn!("Use --unicode=false for ASCII characters instead.");
        }
    }

    let choice = if config.color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let stats = match scan(&config, &mut stdout) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("hyperion: {}", e);
            process::exit(1);
        }
    };

    let result = if args.json {
        write_json(&mut stdout, &config, &stats)
    } else if config.wants_report() {
        write_report(&mut stdout, &config, &stats)
    } else {
        Ok(())
    };

    if let Err(e) = result {
        eprintln!("hyperion: error writing output: {}", e);
        process::exit(1);
    }
}
