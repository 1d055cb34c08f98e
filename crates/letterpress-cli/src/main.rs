//! letterpress - Render newsletters to email-safe HTML

mod config;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use letterpress::{Newsletter, NewsletterRenderer, TemplateId};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "letterpress")]
#[command(version, about = "Compose and render email newsletters", long_about = None)]
#[command(after_help = "EXAMPLES:
    letterpress new -t 3 -s \"Monthly\" -o monthly.json
    letterpress render monthly.json -o monthly.html
    letterpress preview -d previews")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "LETTERPRESS_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Document language
    #[arg(long, global = true, env = "LETTERPRESS_LANG")]
    lang: Option<String>,

    /// Document width in pixels
    #[arg(long, global = true, env = "LETTERPRESS_WIDTH", value_name = "PX")]
    width: Option<u32>,

    /// Omit the doctype declaration
    #[arg(long, global = true)]
    no_doctype: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a newsletter populated with a template's default sections
    New {
        /// Template id (1 classic, 2 marketing, 3 simple)
        #[arg(
            short,
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u8).range(1..=3)
        )]
        template: u8,

        /// Subject line
        #[arg(short, long)]
        subject: Option<String>,

        /// Write JSON here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render a newsletter JSON file to HTML
    Render {
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Template id; defaults to the newsletter's own
        #[arg(short, long)]
        template: Option<u8>,

        /// Write HTML here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Fail instead of emitting the placeholder
        #[arg(long)]
        strict: bool,
    },

    /// Render every template's default newsletter into a directory
    Preview {
        #[arg(short, long, default_value = ".", value_name = "DIR")]
        dir: PathBuf,
    },

    /// Check a newsletter JSON file for consistency
    Validate {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// List the available templates
    Templates,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Execute a command; `Ok(false)` means it ran but found problems
fn run(cli: Cli) -> Result<bool> {
    let config =
        Config::load(cli.config.as_deref())?.with_overrides(cli.lang, cli.width, cli.no_doctype);
    let renderer = NewsletterRenderer::with_options(config.render);

    match cli.command {
        Command::New {
            template,
            subject,
            output,
        } => {
            let mut newsletter = Newsletter::new(TemplateId::try_from(template)?);
            if let Some(subject) = subject {
                newsletter.subject = subject;
            }
            emit(&newsletter.to_json()?, output.as_deref())?;
            info!(id = %newsletter.id, template, "created newsletter");
        }

        Command::Render {
            input,
            template,
            output,
            strict,
        } => {
            let newsletter = load(&input)?;
            let template = template.unwrap_or_else(|| newsletter.template_id.as_u8());

            let html = if strict {
                renderer
                    .try_render(&newsletter, TemplateId::try_from(template)?)
                    .with_context(|| format!("failed to render {}", input.display()))?
            } else {
                renderer.render(&newsletter, template)
            };
            emit(&html, output.as_deref())?;
        }

        Command::Preview { dir } => {
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            for template in TemplateId::ALL {
                let newsletter = Newsletter::new(template).with_subject(template.name());
                let path = dir.join(format!("template-{}.html", template));
                emit(&renderer.render_newsletter(&newsletter), Some(&path))?;
                println!("{}", path.display());
            }
        }

        Command::Validate { input } => {
            let violations = load(&input)?.violations();
            if !violations.is_empty() {
                for violation in &violations {
                    warn!(file = %input.display(), "{}", violation);
                    println!("{}: {}", input.display(), violation);
                }
                return Ok(false);
            }
            println!("{}: ok", input.display());
        }

        Command::Templates => {
            for template in TemplateId::ALL {
                let constants = template.constants();
                println!("{}  {:<22} {}", template, constants.name, constants.description);
            }
        }
    }

    Ok(true)
}

fn load(path: &Path) -> Result<Newsletter> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Newsletter::from_json(&json).with_context(|| format!("invalid newsletter {}", path.display()))
}

/// Write to `output`, or to stdout when none is given
fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
