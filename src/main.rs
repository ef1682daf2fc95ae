use anyhow::Context;
use clap::{Parser, Subcommand};
use dmm_lcd_rs::{init_logger, parse_capture, LcdAnalyzer, OutputFrame};

#[derive(Parser)]
#[command(name = "dmm-lcd-cli")]
#[command(about = "CLI tool for decoding multimeter LCD bus captures")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a capture export and print one line per output frame
    Decode {
        file: std::path::PathBuf,
        /// Emit frames as JSON lines
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { file, json } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading capture {}", file.display()))?;
            let events = parse_capture(&text)?;

            let mut analyzer = LcdAnalyzer::new();
            for event in events {
                let Some(frame) = analyzer.process(event) else {
                    continue;
                };
                if json {
                    println!("{}", serde_json::to_string(&frame)?);
                    continue;
                }
                match frame {
                    OutputFrame::Reading(frame) => println!(
                        "[{:.6}s - {:.6}s] {}{}, {}",
                        frame.span.start,
                        frame.span.end,
                        frame.reading.value,
                        frame.reading.mode,
                        frame.reading.secondary
                    ),
                    OutputFrame::Error(frame) => println!(
                        "[{:.6}s - {:.6}s] ERROR: {}",
                        frame.span.start, frame.span.end, frame.error_info
                    ),
                }
            }
        }
    }

    Ok(())
}
