//! JSON → TypeScript data modules
//!
//! Pure serialization of the registry into `dist/`. Nothing here validates;
//! run the validator first.

use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Asset directories converted under the source root
pub const ASSET_TYPES: [&str; 3] = ["tokens", "vaults", "validators"];

/// Files written and asset types skipped by a compile run
#[derive(Debug, Default)]
pub struct CompileSummary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<&'static str>,
}

/// Token fields published to front-ends, in output order
const COMPILED_TOKEN_FIELDS: [&str; 5] = ["address", "decimals", "image", "name", "symbol"];

/// Convert every asset directory and `protocols.json` under `src_dir`
pub fn compile(src_dir: &Path, dist_dir: &Path) -> Result<CompileSummary> {
    let mut summary = CompileSummary::default();

    for asset_type in ASSET_TYPES {
        let asset_src = src_dir.join(asset_type);
        let asset_dist = dist_dir.join(asset_type);

        if !asset_src.is_dir() {
            info!("Skipping {} - source directory does not exist", asset_type);
            summary.skipped.push(asset_type);
            continue;
        }

        if asset_dist.exists() {
            fs::remove_dir_all(&asset_dist)
                .with_context(|| format!("Failed to clear {:?}", asset_dist))?;
        }
        fs::create_dir_all(&asset_dist)
            .with_context(|| format!("Failed to create {:?}", asset_dist))?;

        let mut json_files = fs::read_dir(&asset_src)
            .with_context(|| format!("Failed to list {:?}", asset_src))?
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        json_files.retain(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"));
        json_files.sort();

        for json_path in json_files {
            let ts_path = asset_dist.join(json_path.with_extension("ts").file_name().unwrap_or_default());
            let data = read_json(&json_path)?;

            let entries = data
                .get(asset_type)
                .ok_or_else(|| anyhow!("{:?} has no \"{}\" key", json_path, asset_type))?;

            let exported = if asset_type == "tokens" {
                let tokens = entries
                    .as_array()
                    .ok_or_else(|| anyhow!("{:?} \"tokens\" is not an array", json_path))?;
                serde_json::to_string_pretty(&compiled_tokens(tokens))?
            } else {
                serde_json::to_string_pretty(entries)?
            };

            write_module(&ts_path, asset_type, &exported)?;
            info!("Converted {}/{:?} to TypeScript", asset_type, json_path.file_name().unwrap_or_default());
            summary.written.push(ts_path);
        }
    }

    let protocols_src = src_dir.join("protocols.json");
    let protocols_dist = dist_dir.join("protocols.ts");
    let data = read_json(&protocols_src)?;
    let protocols = data
        .get("protocols")
        .ok_or_else(|| anyhow!("{:?} has no \"protocols\" key", protocols_src))?;

    fs::create_dir_all(dist_dir).with_context(|| format!("Failed to create {:?}", dist_dir))?;
    write_module(&protocols_dist, "protocols", &serde_json::to_string_pretty(protocols)?)?;
    info!("Converted protocols.json to TypeScript");
    summary.written.push(protocols_dist);

    Ok(summary)
}

/// Tokens with an image, projected and sorted by symbol
///
/// Entries are copied as they are; absent fields are left out.
fn compiled_tokens(tokens: &[Value]) -> Vec<Value> {
    let mut compiled = tokens
        .iter()
        .filter(|token| {
            token
                .get("image")
                .and_then(Value::as_str)
                .is_some_and(|image| !image.is_empty())
        })
        .map(|token| {
            let projected = COMPILED_TOKEN_FIELDS
                .iter()
                .filter_map(|field| Some((field.to_string(), token.get(*field)?.clone())))
                .collect::<Map<_, _>>();
            Value::Object(projected)
        })
        .collect::<Vec<_>>();

    compiled.sort_by(|a, b| {
        let (a, b) = (symbol_of(a), symbol_of(b));
        a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
    });
    compiled
}

fn symbol_of(token: &Value) -> &str {
    token.get("symbol").and_then(Value::as_str).unwrap_or_default()
}

fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
}

fn write_module(path: &Path, export: &str, json: &str) -> Result<()> {
    fs::write(path, format!("export const {} = {}\n", export, json))
        .with_context(|| format!("Failed to write {:?}", path))
}
