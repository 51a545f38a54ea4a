use anyhow::Result;
use clap::Parser;

use git_semver::{accumulate, config, git_ops, ui, Version};

#[derive(clap::Parser)]
#[command(
    name = "git-semver",
    about = "Compute a semantic version by replaying conventional commits"
)]
struct Args {
    #[arg(short, long, default_value = ".", help = "Path to the git repository")]
    repo: String,

    #[arg(
        short,
        long,
        help = "Replay only commits after this revision (tag, branch or hash)"
    )]
    from: Option<String>,

    #[arg(short, long, help = "Starting version, e.g. 1.2.3")]
    base: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print only the final version string")]
    quiet: bool,

    #[arg(long, help = "Disable colored output")]
    no_color: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-semver {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    ui::configure_colors(args.no_color, config.output.color);

    // Parse the starting version; an invalid base aborts before any git work
    let base_str = args
        .base
        .as_deref()
        .unwrap_or(&config.defaults.base_version);
    let start = match Version::parse(base_str) {
        Ok(v) => v,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Open the repository and collect history, oldest-first
    let repo = match git_ops::GitRepo::discover(&args.repo) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if !args.quiet {
        match args.from.as_deref() {
            Some(rev) => ui::display_status(&format!("Replaying commits after '{}'", rev)),
            None => ui::display_status("Replaying full history"),
        }
    }

    let records = match repo.commits_since(args.from.as_deref()) {
        Ok(records) => records,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let result = accumulate(start, records);

    if args.quiet {
        println!("{}", result.version);
    } else {
        ui::display_result(start, &result);
    }

    Ok(())
}
