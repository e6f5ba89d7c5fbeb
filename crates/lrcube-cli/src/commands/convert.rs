//! Convert command - preset to params JSON or a stored LUT

use crate::ConvertArgs;
use anyhow::{Context, Result};
use lrcube::{
    ConvertError, ConvertOptions, DirectoryStore, FilterOutput, convert_xmp, convert_xmp_strict,
};
use tracing::debug;

pub fn run(args: ConvertArgs, verbose: bool) -> Result<()> {
    let options = load_options(&args)?;
    let text = super::read_preset(&args.input)?;
    let store = DirectoryStore::new(&args.output);

    if verbose {
        eprintln!(
            "Converting {} (size {}, {})",
            args.input.display(),
            options.cube_size,
            options.interpolation
        );
    }

    let result = if args.strict {
        convert_xmp_strict(&text, &options, &store)
    } else {
        convert_xmp(&text, &options, &store)
    };
    let output = match result {
        Ok(output) => output,
        Err(err @ ConvertError::Store { .. }) => {
            return Err(anyhow::Error::new(err).context("could not save LUT"));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Conversion failed: {}", args.input.display()));
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }
    match output {
        FilterOutput::Params(params) => {
            println!("{}", serde_json::to_string_pretty(&params)?);
        }
        FilterOutput::Lut(reference) => {
            if verbose {
                eprintln!("LUT written to {}", reference.path.display());
            }
            println!("{}", reference.filter_name());
        }
    }
    Ok(())
}

/// Config file first, then command-line overrides.
fn load_options(args: &ConvertArgs) -> Result<ConvertOptions> {
    let mut options = match &args.config {
        Some(path) => ConvertOptions::from_yaml_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => ConvertOptions::default(),
    };
    if let Some(size) = args.size {
        options.cube_size = size;
    }
    if let Some(interp) = args.interp {
        options.interpolation = interp;
    }
    options.validate().context("Invalid options")?;
    debug!(?options, "resolved convert options");
    Ok(options)
}
