//! Dataset Builder Library
//!
//! Generates synthetic injury datasets through `ia_core` and packs
//! them for distribution: dataset JSON → typed decode → MessagePack →
//! LZ4 compression → SHA256 checksum.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use ia_core::api::{build_dataset_json, DatasetResponse};

/// Metadata describing one packed dataset artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackMetadata {
    /// Schema version (e.g. "v1")
    pub schema_version: String,
    /// SHA256 checksum (hex string)
    pub checksum: String,
    /// Creation time (RFC3339)
    pub created_at: String,
    /// Original JSON size in bytes
    pub original_size: u64,
    /// Compressed size in bytes
    pub compressed_size: u64,
    /// Compressed / original
    pub compression_ratio: f64,
}

/// Generate a dataset from a `DatasetRequest` JSON file and write the
/// raw dataset JSON to `output_json`.
pub fn generate_dataset(request_json: &Path, output_json: &Path) -> Result<u64> {
    let request = fs::read_to_string(request_json)
        .with_context(|| format!("Failed to read request file: {}", request_json.display()))?;

    let dataset = build_dataset_json(&request)
        .map_err(|e| anyhow::anyhow!("Dataset generation failed: {e}"))?;

    if let Some(parent) = output_json.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(output_json, &dataset)
        .with_context(|| format!("Failed to write output file: {}", output_json.display()))?;

    Ok(dataset.len() as u64)
}

/// Pack a dataset JSON file into a MessagePack+LZ4 artifact.
///
/// The input must be a `DatasetResponse` payload; decoding through the
/// typed model rejects files that merely look like JSON.
pub fn pack_dataset(
    input_json: &Path,
    output_msgpack_lz4: &Path,
    schema_version: &str,
) -> Result<PackMetadata> {
    let json_str = fs::read_to_string(input_json)
        .with_context(|| format!("Failed to read dataset file: {}", input_json.display()))?;

    let original_size = json_str.len() as u64;

    let dataset: DatasetResponse =
        serde_json::from_str(&json_str).context("Failed to parse dataset JSON")?;

    let msgpack_bytes =
        rmp_serde::to_vec(&dataset).context("Failed to serialize dataset to MessagePack")?;

    // Size-prepended so decompression needs no external length.
    let compressed = lz4_flex::compress_prepend_size(&msgpack_bytes);
    let compressed_size = compressed.len() as u64;

    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = format!("{:x}", hasher.finalize());

    if let Some(parent) = output_msgpack_lz4.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    fs::write(output_msgpack_lz4, &compressed).with_context(|| {
        format!("Failed to write output file: {}", output_msgpack_lz4.display())
    })?;

    let compression_ratio = compressed_size as f64 / original_size as f64;

    Ok(PackMetadata {
        schema_version: schema_version.to_string(),
        checksum,
        created_at: chrono::Utc::now().to_rfc3339(),
        original_size,
        compressed_size,
        compression_ratio,
    })
}

/// Verify a packed artifact against its expected SHA256 checksum.
pub fn verify_pack(pack_file: &Path, expected_checksum: &str) -> Result<bool> {
    let bytes = fs::read(pack_file)
        .with_context(|| format!("Failed to read pack file: {}", pack_file.display()))?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let actual = format!("{:x}", hasher.finalize());

    Ok(actual == expected_checksum)
}

/// Decompress and decode a packed artifact back to a dataset.
pub fn load_pack(pack_file: &Path) -> Result<DatasetResponse> {
    let compressed = fs::read(pack_file)
        .with_context(|| format!("Failed to read pack file: {}", pack_file.display()))?;

    let msgpack_bytes =
        lz4_flex::decompress_size_prepended(&compressed).context("Failed to decompress LZ4")?;

    let dataset: DatasetResponse = rmp_serde::from_slice(&msgpack_bytes)
        .context("Failed to deserialize dataset from MessagePack")?;

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Write a small dataset JSON file through the generation API.
    fn small_dataset(seed: u64) -> Result<NamedTempFile> {
        let mut request = NamedTempFile::new()?;
        let body = serde_json::json!({
            "schema_version": 1,
            "seed": seed,
            "seasons": [2024],
            "reference_date": "2025-03-01"
        });
        request.write_all(body.to_string().as_bytes())?;

        let dataset_json = NamedTempFile::new()?;
        let size = generate_dataset(request.path(), dataset_json.path())?;
        assert!(size > 0);
        Ok(dataset_json)
    }

    #[test]
    fn test_pack_verify_load_roundtrip() -> Result<()> {
        let dataset_json = small_dataset(42)?;

        let pack = NamedTempFile::new()?;
        let metadata = pack_dataset(dataset_json.path(), pack.path(), "v1")?;

        assert_eq!(metadata.schema_version, "v1");
        assert!(verify_pack(pack.path(), &metadata.checksum)?);

        // The typed round-trip preserves the corpus.
        let loaded = load_pack(pack.path())?;
        let original: DatasetResponse =
            serde_json::from_str(&fs::read_to_string(dataset_json.path())?)?;
        assert_eq!(loaded.summary.event_count, original.summary.event_count);
        assert_eq!(loaded.events.len(), original.events.len());
        assert_eq!(loaded.events[0].id, original.events[0].id);
        assert_eq!(loaded.demographics.len(), original.demographics.len());

        Ok(())
    }

    #[test]
    fn test_generated_dataset_compresses_well() -> Result<()> {
        let dataset_json = small_dataset(7)?;

        let pack = NamedTempFile::new()?;
        let metadata = pack_dataset(dataset_json.path(), pack.path(), "v1")?;

        // Repetitive field names make the corpus highly compressible.
        assert!(metadata.compression_ratio < 0.5);
        assert!(metadata.compressed_size < metadata.original_size);

        Ok(())
    }

    #[test]
    fn test_verify_detects_tampering() -> Result<()> {
        let dataset_json = small_dataset(3)?;

        let pack = NamedTempFile::new()?;
        let metadata = pack_dataset(dataset_json.path(), pack.path(), "v1")?;

        let mut bytes = fs::read(pack.path())?;
        bytes[0] ^= 0xff;
        fs::write(pack.path(), &bytes)?;

        assert!(!verify_pack(pack.path(), &metadata.checksum)?);
        Ok(())
    }

    #[test]
    fn test_pack_rejects_non_dataset_json() -> Result<()> {
        let mut not_a_dataset = NamedTempFile::new()?;
        not_a_dataset.write_all(br#"{"test": "data", "number": 42}"#)?;

        let pack = NamedTempFile::new()?;
        assert!(pack_dataset(not_a_dataset.path(), pack.path(), "v1").is_err());
        Ok(())
    }

    #[test]
    fn test_generate_rejects_bad_request() -> Result<()> {
        let mut request = NamedTempFile::new()?;
        request.write_all(br#"{"schema_version": 9, "seed": 1}"#)?;

        let out = NamedTempFile::new()?;
        assert!(generate_dataset(request.path(), out.path()).is_err());
        Ok(())
    }
}
