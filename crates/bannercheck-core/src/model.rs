//! Core data model: creative asset descriptors, rule verdicts, and reports.

use serde::{Deserialize, Serialize};

/// One candidate creative bundle, identified by name and three resolvable URLs.
///
/// Created by the batch driver; the runner never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreativeAsset {
    /// Display name of the creative (e.g. "summer-sale-300x250").
    pub name: String,
    /// Hosted preview HTML endpoint.
    pub preview_url: String,
    /// Packaged zip archive endpoint.
    pub zip_url: String,
    /// Static fallback image endpoint.
    pub placeholder_url: String,
}

/// Immutable view of a [`CreativeAsset`] handed to every rule of one run.
///
/// Rules must not mutate it; the runner shares a single context across all
/// rules of an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleContext {
    pub name: String,
    pub preview_url: String,
    pub zip_url: String,
    pub placeholder_url: String,
}

/// Outcome of one rule execution against one context.
///
/// `is_warning` is only meaningful when `passed` is true: it flags a soft
/// advisory concern (e.g. approaching a size limit) that does not fail the
/// asset but should be surfaced distinctly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub passed: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_warning: bool,
}

fn is_false(b: &bool) -> bool {
    !b
}

impl Verdict {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            is_warning: false,
        }
    }

    /// Passing verdict carrying an advisory warning.
    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            is_warning: true,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            is_warning: false,
        }
    }
}

/// One entry of a report's ordered results: which rule said what.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule_name: String,
    pub verdict: Verdict,
}

/// Aggregated verdicts for one creative asset.
///
/// `results` preserves catalog order; `passed` is the single boolean gate
/// (`failed_count == 0`), `failed_count`/`warning_count` support summarized
/// tooling such as CI gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetReport {
    pub name: String,
    pub preview_url: String,
    pub results: Vec<RuleOutcome>,
    pub passed: bool,
    pub failed_count: usize,
    pub warning_count: usize,
}

impl AssetReport {
    /// Derive a report from the ordered outcomes of one asset's run.
    pub fn from_outcomes(
        name: impl Into<String>,
        preview_url: impl Into<String>,
        results: Vec<RuleOutcome>,
    ) -> Self {
        let failed_count = results.iter().filter(|r| !r.verdict.passed).count();
        let warning_count = results.iter().filter(|r| r.verdict.is_warning).count();
        Self {
            name: name.into(),
            preview_url: preview_url.into(),
            passed: failed_count == 0,
            failed_count,
            warning_count,
            results,
        }
    }
}

/// Ordered list of per-asset reports, one per input asset.
pub type BatchReport = Vec<AssetReport>;
