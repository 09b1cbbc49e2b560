//! Per-chain validation reports

use serde::Serialize;
use tracing::{error, info};

use registry_config::Chain;

/// Outcome of validating one asset type on one chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainReport {
    pub chain: Chain,
    /// Asset type label used in status lines ("Token")
    pub asset: &'static str,
    pub diagnostics: Vec<String>,
}

impl ChainReport {
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Log the pass/fail status of a chain
pub fn output_status(report: &ChainReport) {
    if report.passed() {
        info!("✅ {} validation passed for {}", report.asset, report.chain);
        return;
    }

    for diagnostic in &report.diagnostics {
        error!(chain = %report.chain, "{}", diagnostic);
    }
    error!(
        "❌ {} validation failed for {} with {} error(s)",
        report.asset,
        report.chain,
        report.diagnostics.len()
    );
}

/// True when every report passed
pub fn all_passed(reports: &[ChainReport]) -> bool {
    reports.iter().all(ChainReport::passed)
}
