//! Compile step over a source tree on disk

use std::fs;
use std::path::Path;

use serde_json::json;

use registry_validator::compile::compile;

fn write_json(path: &Path, value: serde_json::Value) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

/// Parse the JSON literal out of `export const <name> = ...`
fn exported(path: &Path, name: &str) -> serde_json::Value {
    let content = fs::read_to_string(path).unwrap();
    let prefix = format!("export const {} = ", name);
    assert!(content.starts_with(&prefix), "{}", content);
    assert!(content.ends_with('\n'));
    serde_json::from_str(&content[prefix.len()..]).unwrap()
}

#[test]
fn test_compile_tokens_vaults_and_protocols() {
    let root = tempfile::tempdir().unwrap();
    let src = root.path().join("src");
    let dist = root.path().join("dist");

    write_json(
        &src.join("tokens/mainnet.json"),
        json!({
            "name": "Berachain Mainnet",
            "tokens": [
                {
                    "address": "0x6969696969696969696969696969696969696969",
                    "chainId": 80094,
                    "decimals": 18,
                    "description": "Wrapped native token",
                    "image": "https://assets.example.org/wbera.png",
                    "name": "Wrapped Bera",
                    "symbol": "WBERA"
                },
                {
                    "address": "0x1111111111111111111111111111111111111111",
                    "decimals": 18,
                    "name": "No Image",
                    "symbol": "NOIMG"
                },
                {
                    "address": "0xFCBD14DC51f0A4d49d5E53C2E0950e0bC26d0Dce",
                    "decimals": 18,
                    "image": "https://assets.example.org/honey.png",
                    "name": "Honey",
                    "symbol": "HONEY"
                }
            ]
        }),
    );
    write_json(
        &src.join("vaults/mainnet.json"),
        json!({ "vaults": [{ "stakingTokenAddress": "0x1111111111111111111111111111111111111111" }] }),
    );
    write_json(
        &src.join("protocols.json"),
        json!({ "protocols": [{ "id": "kodiak", "prefix": "kdk", "name": "Kodiak" }] }),
    );

    // Stale output from an earlier run is cleared
    fs::create_dir_all(dist.join("tokens")).unwrap();
    fs::write(dist.join("tokens/stale.ts"), "export const tokens = []\n").unwrap();

    let summary = compile(&src, &dist).unwrap();

    assert_eq!(summary.skipped, vec!["validators"]);
    assert_eq!(summary.written.len(), 3);
    assert!(!dist.join("tokens/stale.ts").exists());

    assert_eq!(
        exported(&dist.join("tokens/mainnet.ts"), "tokens"),
        json!([
            {
                "address": "0xFCBD14DC51f0A4d49d5E53C2E0950e0bC26d0Dce",
                "decimals": 18,
                "image": "https://assets.example.org/honey.png",
                "name": "Honey",
                "symbol": "HONEY"
            },
            {
                "address": "0x6969696969696969696969696969696969696969",
                "decimals": 18,
                "image": "https://assets.example.org/wbera.png",
                "name": "Wrapped Bera",
                "symbol": "WBERA"
            }
        ])
    );
    assert_eq!(
        exported(&dist.join("vaults/mainnet.ts"), "vaults"),
        json!([{ "stakingTokenAddress": "0x1111111111111111111111111111111111111111" }])
    );
    assert_eq!(
        exported(&dist.join("protocols.ts"), "protocols"),
        json!([{ "id": "kodiak", "prefix": "kdk", "name": "Kodiak" }])
    );
}

#[test]
fn test_compile_requires_protocols() {
    let root = tempfile::tempdir().unwrap();
    let src = root.path().join("src");
    fs::create_dir_all(&src).unwrap();

    let err = compile(&src, &root.path().join("dist")).unwrap_err();
    assert!(format!("{:#}", err).contains("protocols.json"));
}

#[test]
fn test_compile_rejects_asset_file_without_its_key() {
    let root = tempfile::tempdir().unwrap();
    let src = root.path().join("src");

    write_json(&src.join("validators/mainnet.json"), json!({ "vaults": [] }));
    write_json(&src.join("protocols.json"), json!({ "protocols": [] }));

    let err = compile(&src, &root.path().join("dist")).unwrap_err();
    assert!(err.to_string().contains("\"validators\""), "{}", err);
}
