mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, fav::FavSubcommand, render::RenderArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cliq",
    about = "Describe a shell command once as a cliqfile template, then render and run it",
    version,
    propagate_version = true
)]
struct Cli {
    /// Configuration directory (default: ~/.config/cliq)
    #[arg(long, global = true, env = "CLIQ_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log debug output to stderr
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer a template from a command line containing {{placeholders}}
    Infer {
        /// Template name (default: "Generated Template")
        #[arg(long)]
        name: Option<String>,

        /// Write the template to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// The command line, e.g. 'convert {{input_file}} {{output_file}}'
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Validate a cliqfile
    Validate {
        file: PathBuf,

        /// Also require description/version/author and referenced variables
        #[arg(long)]
        strict: bool,
    },

    /// Clean up generated template YAML (code fences, think tags) and validate it
    Sanitize {
        /// Input file, or '-' for stdin
        input: String,

        /// Payload encoding: plain or base64
        #[arg(long, default_value = "plain")]
        encoding: String,

        /// Validate with the strict profile
        #[arg(long)]
        strict: bool,
    },

    /// Render a command to text without running it
    Preview(RenderArgs),

    /// Render a command and run it
    Run(RenderArgs),

    /// Manage favorite templates
    Fav {
        #[command(subcommand)]
        subcommand: FavSubcommand,
    },

    /// Show or change settings
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = root::resolve_config_root(cli.config_dir.as_deref()).and_then(|root| {
        match cli.command {
            Commands::Infer {
                name,
                output,
                command,
            } => cmd::infer::run(&command.join(" "), name, output.as_deref(), cli.json),
            Commands::Validate { file, strict } => cmd::validate::run(&file, strict, cli.json),
            Commands::Sanitize {
                input,
                encoding,
                strict,
            } => cmd::validate::sanitize(&input, &encoding, strict, cli.json),
            Commands::Preview(args) => cmd::render::preview(&root, args, cli.json),
            Commands::Run(args) => cmd::render::run(&root, args, cli.json),
            Commands::Fav { subcommand } => cmd::fav::run(&root, subcommand, cli.json),
            Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
