use anyhow::Result;
use clap::{Parser, Subcommand};

use semanver::cli::commands::{self, CommandContext};
use semanver::config;
use semanver::ui;

mod logging;

#[derive(Parser)]
#[command(
    name = "semanver",
    about = "Parse and compare semantic version strings",
    version
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        help = "Parse MAJOR.MINOR.PATCH.REVISION versions"
    )]
    revision: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    no_color: bool,

    #[arg(short, long, global = true, help = "Show debug logging on stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every field of a version
    Parse { version: String },

    /// Show how two versions relate
    Compare { left: String, right: String },

    /// Print versions from oldest to newest
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,

        #[arg(long, help = "Print newest first")]
        reverse: bool,
    },

    /// Print the newest version
    Latest {
        #[arg(required = true)]
        versions: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::setup_logging(if args.verbose {
        logging::Level::Verbose
    } else {
        logging::Level::Default
    });

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    ui::set_color(config.output.color && !args.no_color);

    let ctx = match CommandContext::from_config(&config, args.revision) {
        Ok(ctx) => ctx,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args.command, &ctx) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run(command: Command, ctx: &CommandContext) -> semanver::Result<()> {
    match command {
        Command::Parse { version } => {
            let report = commands::parse_command(&version, ctx)?;
            println!("{}", ui::render_fields(&report));
        }
        Command::Compare { left, right } => {
            let comparison = commands::compare_command(&left, &right, ctx)?;
            println!("{}", ui::render_comparison(&comparison));
        }
        Command::Sort { versions, reverse } => {
            let sorted = commands::sort_command(&versions, reverse, ctx)?;
            println!("{}", ui::render_sorted(&sorted));
        }
        Command::Latest { versions } => {
            if let Some(newest) = commands::latest_command(&versions, ctx)? {
                println!("{}", newest);
            }
        }
    }
    Ok(())
}
