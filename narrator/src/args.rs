use std::path::PathBuf;

use clap::Parser;

/// Narrator text-to-speech Lambda
#[derive(Debug, Parser)]
#[command(name = "narrator", about = "Turn text into a signed MP3 download link")]
pub struct Args {
    /// Path to configuration file; defaults plus `AUDIO_BUCKET` when omitted
    #[arg(short, long, env = "NARRATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Handle a single event read from this file and print the response,
    /// instead of serving the Lambda runtime API
    #[arg(long)]
    pub event: Option<PathBuf>,
}
