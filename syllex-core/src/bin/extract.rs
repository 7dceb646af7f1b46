use std::error::Error;
use std::path::Path;

use bytes::Bytes;
use clap::Parser;
use syllex_core::ExtractQueue;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "extract")]
#[command(about = "Syllabus field extraction tool")]
struct Args {
    #[arg(help = "Input PDF file path")]
    input: String,

    #[arg(short, long, help = "Document password, if any")]
    password: Option<String>,
}

fn validate_input(input_path: &str) -> Result<(), Box<dyn Error>> {
    if !Path::new(input_path).exists() {
        error!("Input PDF not found: {}", input_path);
        return Err(format!("Input PDF not found: {}", input_path).into());
    }

    if !input_path.to_lowercase().ends_with(".pdf") {
        error!("Input file must be a PDF");
        return Err("Input file must be a PDF".into());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    info!("Starting syllabus extraction");
    info!("Input PDF: {}", args.input);

    validate_input(&args.input)?;

    let document = Bytes::from(std::fs::read(&args.input)?);

    let queue = ExtractQueue::new().await?;
    let data = queue
        .extract_with_password(document, args.password)
        .await?;

    println!("{}", serde_json::to_string(&data)?);

    info!("Extraction completed successfully!");
    Ok(())
}
