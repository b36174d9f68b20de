use clap::Parser;
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

use sponsor_extract::export::{self, ExportFormat};
use sponsor_extract::{extract_sponsors_with_config, AppConfig, ExtractError, SponsorRecord};

/// Extract sponsor information (brand name and URL) from YouTube video descriptions.
#[derive(Parser, Debug)]
#[command(name = "sponsor-extract", version, about)]
struct Cli {
    /// YouTube video URL, e.g. https://www.youtube.com/watch?v=VIDEO_ID
    url: String,

    /// Export format to write (json, csv, xlsx, txt, docx); repeatable
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    formats: Vec<ExportFormat>,

    /// Write every supported export format
    #[arg(long, conflicts_with = "formats")]
    all_formats: bool,

    /// Directory export files are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Completion provider (openrouter, ollama); overrides configuration
    #[arg(long)]
    provider: Option<String>,

    /// Model name; overrides configuration
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!("{:?}", cli);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(ExtractError::InvalidInput(message)) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ExtractError> {
    let mut config = AppConfig::load()?;
    if let Some(provider) = cli.provider {
        config.completion.provider = provider;
    }
    if cli.model.is_some() {
        config.completion.model = cli.model;
    }

    let extraction = extract_sponsors_with_config(&cli.url, &config).await?;

    println!("Video: {}", extraction.video.title);
    if !extraction.has_sponsors() {
        println!("No sponsor information found in the description.");
        return Ok(());
    }

    println!();
    println!("Extracted Sponsor Information");
    print!("{}", render_table(&extraction.sponsors));

    let formats = if cli.all_formats {
        ExportFormat::all().to_vec()
    } else {
        cli.formats
    };

    for format in formats {
        if !format.is_supported() {
            eprintln!("{} export is not available in this build", format.label());
            continue;
        }
        let path = export::write_export(
            &extraction.sponsors,
            &extraction.video.title,
            format,
            &cli.output_dir,
        )
        .await?;
        println!("Saved {}", path.display());
    }

    Ok(())
}

/// Two-column text table of the sponsors
fn render_table(records: &[SponsorRecord]) -> String {
    let brand_width = records
        .iter()
        .map(|record| record.brand.chars().count())
        .max()
        .unwrap_or(0)
        .max("Brand".len());

    let mut table = format!("{:<width$}  URL\n", "Brand", width = brand_width);
    table.push_str(&format!("{}  {}\n", "-".repeat(brand_width), "-".repeat(3)));
    for record in records {
        table.push_str(&format!(
            "{:<width$}  {}\n",
            record.brand,
            record.url,
            width = brand_width
        ));
    }
    table
}
