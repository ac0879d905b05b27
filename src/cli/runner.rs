use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use logokey::api::{CropOutcome, write_report};
use logokey::{
    ChromaKeyParams, CropParams, LogoConfig, OutputSet, crop_to_content, make_transparent,
    run_logo_pipeline,
};

use super::args::{CliArgs, Command};
use super::errors::AppError;

fn print_crop_outcome(outcome: &CropOutcome) {
    match outcome {
        CropOutcome::Cropped(report) => {
            let target = report
                .staging
                .clone()
                .or_else(|| report.destinations.first().cloned())
                .unwrap_or_default();
            println!(
                "Successfully cropped content to {} and saved to {}",
                report.bbox,
                target.display()
            );
        }
        CropOutcome::Empty => println!("Image is empty!"),
    }
}

fn run_crop(
    input: PathBuf,
    output: Option<PathBuf>,
    copies: Vec<PathBuf>,
    padding: u32,
    favicon: logokey::FaviconEncoding,
    report: Option<PathBuf>,
) -> Result<(), AppError> {
    if output.is_none() && copies.is_empty() {
        return Err(AppError::MissingArgument {
            arg: "--output or --copy".to_string(),
        });
    }

    let outcome = crop_to_content(
        &input,
        output.as_deref(),
        &copies,
        &CropParams { padding },
        favicon,
    )?;
    print_crop_outcome(&outcome);

    if let Some(path) = report {
        write_report(&outcome, &path)?;
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    match args.command {
        Command::Transparent {
            input,
            output,
            copies,
            threshold,
            favicon_encoding,
            report,
        } => {
            let params = ChromaKeyParams {
                threshold,
                ..ChromaKeyParams::default()
            };
            let outputs = OutputSet::new(output).with_copies(copies);
            let key = make_transparent(&input, &outputs, &params, favicon_encoding)?;
            println!(
                "Successfully saved transparent image to {}",
                key.primary.display()
            );
            if let Some(path) = report {
                write_report(&key, &path)?;
            }
        }
        Command::Crop {
            input,
            output,
            copies,
            padding,
            favicon_encoding,
            report,
        } => run_crop(input, output, copies, padding, favicon_encoding, report)?,
        Command::Run { config, report } => {
            info!("Loading config: {:?}", config);
            let cfg = LogoConfig::from_json_file(&config)?;
            let pipeline = run_logo_pipeline(&cfg)?;
            println!(
                "Successfully saved transparent image to {}",
                pipeline.key.primary.display()
            );
            print_crop_outcome(&pipeline.crop);
            if let Some(path) = report {
                write_report(&pipeline, &path)?;
            }
        }
    }

    Ok(())
}
