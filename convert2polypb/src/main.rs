//! Converts a GeoJSON timezone boundary file into a `polypb` protobuf file.
//!
//! The output is written next to the input, with `.json` replaced by `.pb`, unless `--output` is
//! given. The path of the written file is printed to stdout.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use polypb::{BoundaryDocument, MetadataFormat, ShapeConverter};

#[derive(Parser, Debug)]
#[command(name = "convert2polypb", version, about)]
struct Args {
    /// GeoJSON boundary file to convert.
    input: PathBuf,

    /// Output file. Defaults to the input path with `.json` replaced by `.pb`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Encoding of the per-shape metadata.
    #[arg(long, value_enum, default_value_t = MetadataArg::Json)]
    metadata: MetadataArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MetadataArg {
    Json,
    Msgpack,
}

impl From<MetadataArg> for MetadataFormat {
    fn from(value: MetadataArg) -> Self {
        match value {
            MetadataArg::Json => MetadataFormat::Json,
            MetadataArg::Msgpack => MetadataFormat::MessagePack,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));

    run(&args.input, &output, args.metadata.into())?;
    println!("{}", output.display());

    Ok(())
}

fn run(input: &Path, output: &Path, metadata: MetadataFormat) -> anyhow::Result<()> {
    let raw = fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let document: BoundaryDocument = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse {}", input.display()))?;
    log::info!(
        "Read {} features from {}",
        document.features.len(),
        input.display()
    );

    let shapes = ShapeConverter::with_encoder(metadata)
        .convert(&document)
        .map_err(|err| {
            let tzid = document
                .features
                .get(err.feature_index())
                .and_then(|feature| feature.tzid())
                .unwrap_or("unknown");
            anyhow::Error::new(err).context(format!(
                "failed to convert {} (tzid {tzid})",
                input.display()
            ))
        })?;

    let bytes = shapes.to_bytes();
    fs::write(output, &bytes).with_context(|| format!("failed to write {}", output.display()))?;
    log::info!(
        "Wrote {} shapes ({} bytes) to {}",
        shapes.len(),
        bytes.len(),
        output.display()
    );

    Ok(())
}

/// Replaces the first `.json` in the path with `.pb`. Paths without `.json` get `.pb` appended, so
/// the input file is never overwritten.
fn default_output_path(input: &Path) -> PathBuf {
    match input.to_str() {
        Some(path) if path.contains(".json") => PathBuf::from(path.replacen(".json", ".pb", 1)),
        Some(_) => append_pb_extension(input),
        // Not UTF-8: only a trailing `.json` extension can be matched.
        None if input.extension() == Some(OsStr::new("json")) => input.with_extension("pb"),
        None => append_pb_extension(input),
    }
}

fn append_pb_extension(input: &Path) -> PathBuf {
    let mut output = input.as_os_str().to_owned();
    output.push(".pb");
    PathBuf::from(output)
}
