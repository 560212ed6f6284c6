//! Dataset Builder CLI
//!
//! Generates synthetic injury datasets and packs them as
//! MessagePack+LZ4 artifacts with checksums.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "dataset_builder")]
#[command(about = "Generate and pack synthetic injury datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Generate a dataset JSON file from a request file
    Generate {
        /// Input DatasetRequest JSON file path
        #[arg(long)]
        request: PathBuf,

        /// Output dataset JSON file path
        #[arg(long)]
        out: PathBuf,
    },

    /// Pack a dataset JSON file into a MsgPack+LZ4 artifact
    Pack {
        /// Input dataset JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Output MsgPack+LZ4 file path
        #[arg(long)]
        out: PathBuf,

        /// Schema version (e.g., "v1")
        #[arg(long, default_value = "v1")]
        schema_version: String,

        /// Verify artifact after packing
        #[arg(long, default_value = "false")]
        verify: bool,

        /// Output metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,
    },

    /// Verify a packed artifact against a checksum
    Verify {
        /// Packed artifact file path
        #[arg(long)]
        r#in: PathBuf,

        /// Expected SHA256 checksum (hex)
        #[arg(long)]
        checksum: String,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { request, out } => {
            println!("Generating dataset...");
            println!("   Request: {}", request.display());
            println!("   Output:  {}", out.display());

            let size = dataset_builder::generate_dataset(&request, &out)?;
            println!("\nDataset written: {} bytes ({:.2} KB)", size, size as f64 / 1024.0);
        }

        Commands::Pack { r#in, out, schema_version, verify, metadata } => {
            println!("Packing dataset...");
            println!("   Input:  {}", r#in.display());
            println!("   Output: {}", out.display());
            println!("   Schema: {}", schema_version);

            let meta = dataset_builder::pack_dataset(&r#in, &out, &schema_version)?;

            print_metadata(&meta);

            if verify {
                verify_pack_integrity(&out, &meta.checksum)?;
            }

            if let Some(metadata_path) = metadata {
                save_metadata(&metadata_path, &meta)?;
            }
        }

        Commands::Verify { r#in, checksum } => {
            verify_pack_integrity(&r#in, &checksum)?;
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_metadata(meta: &dataset_builder::PackMetadata) {
    println!("\nArtifact packed successfully");
    println!(
        "   Original size:   {} bytes ({:.2} KB)",
        meta.original_size,
        meta.original_size as f64 / 1024.0
    );
    println!(
        "   Compressed size: {} bytes ({:.2} KB)",
        meta.compressed_size,
        meta.compressed_size as f64 / 1024.0
    );
    println!("   Compression:     {:.1}%", meta.compression_ratio * 100.0);
    println!("   Checksum:        {}", meta.checksum);
    println!("   Created:         {}", meta.created_at);
}

#[cfg(feature = "cli")]
fn verify_pack_integrity(pack_path: &std::path::Path, checksum: &str) -> Result<()> {
    println!("\nVerifying artifact integrity...");
    let is_valid = dataset_builder::verify_pack(pack_path, checksum)?;

    if is_valid {
        println!("Verification passed");
        Ok(())
    } else {
        anyhow::bail!("Verification failed: checksum mismatch")
    }
}

#[cfg(feature = "cli")]
fn save_metadata(path: &PathBuf, meta: &dataset_builder::PackMetadata) -> Result<()> {
    let metadata_json = serde_json::to_string_pretty(meta)?;
    std::fs::write(path, metadata_json)?;
    println!("\nMetadata saved to: {}", path.display());
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("dataset_builder CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
