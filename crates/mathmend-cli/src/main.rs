use std::io::Read;

use clap::{Parser, Subcommand};
use mathmend_pipeline::{process, process_mixed_text, rewrite_prose, MathStream};
use mathmend_render::{to_speech, to_speech_brief, to_unicode};

#[derive(Parser)]
#[command(name = "mathmend")]
#[command(about = "Repair and render malformed LaTeX math", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline on one formula and emit JSON
    Process {
        /// Input text; read from stdin when omitted
        text: Option<String>,
    },
    /// Repair math spans inside mixed prose, leaving the prose alone
    Mixed {
        text: Option<String>,
        /// Also rewrite bare keywords and arrows in the prose segments
        #[arg(long)]
        prose: bool,
    },
    /// Render a formula as Unicode plain text
    Unicode {
        text: Option<String>,
    },
    /// Render a formula as a Turkish speakable phrase
    Speech {
        text: Option<String>,
        /// Symbol-level substitution only, no phrase shaping
        #[arg(long)]
        brief: bool,
    },
    /// Validate a formula and emit the diagnostic report as JSON
    Validate {
        text: Option<String>,
    },
    /// Read stdin line by line as a chunk stream and emit repaired text
    Stream,
}

/// Explicit argument if given, otherwise all of stdin.
fn input(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(t) => Ok(t),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Process { text } => {
            let out = process(&input(text)?);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Mixed { text, prose } => {
            let text = input(text)?;
            let repaired = process_mixed_text(&text);
            let repaired = if prose { rewrite_prose(&repaired) } else { repaired };
            println!("{repaired}");
        }
        Commands::Unicode { text } => {
            let out = process(&input(text)?);
            println!("{}", to_unicode(&out.canonical));
        }
        Commands::Speech { text, brief } => {
            let out = process(&input(text)?);
            let spoken = if brief {
                to_speech_brief(&out.canonical)
            } else {
                to_speech(&out.canonical)
            };
            println!("{spoken}");
        }
        Commands::Validate { text } => {
            let canonical = mathmend_core::normalize(&mathmend_core::sanitize(&input(text)?));
            let report = mathmend_core::validate(&canonical);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Stream => {
            let mut stream = MathStream::new();
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            for line in buf.split_inclusive('\n') {
                print!("{}", stream.update(line));
            }
            print!("{}", stream.finish());
        }
    }
    Ok(())
}
