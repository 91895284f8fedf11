//! Rule execution engine.
//!
//! Fans out every rule of an asset (and every asset of a batch) as
//! concurrent tokio tasks with join-all semantics: no task is cancelled
//! because a sibling failed, and output ordering always matches input
//! ordering via index-preserving aggregation, regardless of completion
//! order. No retries and no timeouts live here; if caller-level timeouts
//! are desired they belong around the fetch adapter.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::error::{BannerCheckError, Result};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::model::{AssetReport, CreativeAsset, RuleContext, RuleOutcome, Verdict};
use crate::rules::{default_rules, Rule};

/// Pure mapping from an asset descriptor to the context rules consume.
///
/// Verbatim field copy, no network access. The only failure mode is a
/// descriptor missing a required URL, which is API misuse rather than a
/// compliance finding and fails fast here.
pub fn build_context(asset: &CreativeAsset) -> Result<RuleContext> {
    for (field, value) in [
        ("preview_url", &asset.preview_url),
        ("zip_url", &asset.zip_url),
        ("placeholder_url", &asset.placeholder_url),
    ] {
        if value.is_empty() {
            return Err(BannerCheckError::InvalidAsset {
                name: asset.name.clone(),
                field,
            });
        }
    }
    Ok(RuleContext {
        name: asset.name.clone(),
        preview_url: asset.preview_url.clone(),
        zip_url: asset.zip_url.clone(),
        placeholder_url: asset.placeholder_url.clone(),
    })
}

/// Executes a rule catalog against creative assets.
pub struct Runner {
    fetcher: Arc<dyn Fetcher>,
    rules: Vec<Arc<dyn Rule>>,
}

impl Runner {
    /// Runner over a fresh HTTP fetcher and the default catalog.
    pub fn new() -> Result<Self> {
        Ok(Self {
            fetcher: Arc::new(HttpFetcher::new()?),
            rules: default_rules(),
        })
    }

    /// Runner over a custom fetcher and rule subset/order.
    pub fn with_rules(fetcher: Arc<dyn Fetcher>, rules: Vec<Arc<dyn Rule>>) -> Self {
        Self { fetcher, rules }
    }

    /// Run every rule concurrently against one asset.
    ///
    /// Builds the context once, shares it across rules, and never
    /// short-circuits: every rule reports, so a bad asset yields a complete
    /// diagnostic picture. `results` order matches catalog order.
    pub async fn run_one(&self, asset: &CreativeAsset) -> Result<AssetReport> {
        let ctx = Arc::new(build_context(asset)?);

        let mut join_set = JoinSet::new();
        for (idx, rule) in self.rules.iter().enumerate() {
            let rule = Arc::clone(rule);
            let ctx = Arc::clone(&ctx);
            let fetcher = Arc::clone(&self.fetcher);
            join_set.spawn(async move {
                let verdict = rule.run(&ctx, fetcher.as_ref()).await;
                debug!(rule = rule.name(), passed = verdict.passed, "rule finished");
                (idx, verdict)
            });
        }

        let mut slots: Vec<Option<Verdict>> = vec![None; self.rules.len()];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((idx, verdict)) => slots[idx] = Some(verdict),
                // A rule panicked; its slot stays empty and is reported as
                // a failure below. Siblings keep running.
                Err(e) => warn!(asset = %asset.name, error = %e, "rule task failed"),
            }
        }

        let results = self
            .rules
            .iter()
            .zip(slots)
            .map(|(rule, slot)| RuleOutcome {
                rule_name: rule.name().to_string(),
                verdict: slot.unwrap_or_else(|| Verdict::fail("rule aborted before producing a verdict")),
            })
            .collect();

        Ok(AssetReport::from_outcomes(
            asset.name.clone(),
            asset.preview_url.clone(),
            results,
        ))
    }

    /// Run every asset of a batch concurrently.
    ///
    /// Output is index-aligned with the input; one asset's failures never
    /// abort the rest of the batch.
    pub async fn run_many(&self, assets: &[CreativeAsset]) -> Result<Vec<AssetReport>> {
        // Fail fast on malformed descriptors before any network traffic.
        for asset in assets {
            build_context(asset)?;
        }

        let mut join_set = JoinSet::new();
        for (idx, asset) in assets.iter().cloned().enumerate() {
            let runner = Self {
                fetcher: Arc::clone(&self.fetcher),
                rules: self.rules.clone(),
            };
            join_set.spawn(async move {
                let report = runner.run_one(&asset).await;
                (idx, report)
            });
        }

        let mut slots: Vec<Option<AssetReport>> = vec![None; assets.len()];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((idx, Ok(report))) => slots[idx] = Some(report),
                Ok((_, Err(e))) => return Err(e),
                Err(e) => {
                    warn!(error = %e, "asset task failed");
                }
            }
        }

        // Descriptors were validated up front, so every slot is filled
        // unless a task panicked; surface that as an empty report rather
        // than aborting the batch.
        Ok(assets
            .iter()
            .zip(slots)
            .map(|(asset, slot)| {
                slot.unwrap_or_else(|| {
                    AssetReport::from_outcomes(asset.name.clone(), asset.preview_url.clone(), vec![])
                })
            })
            .collect())
    }
}

/// Run the full built-in catalog against one asset over a fresh HTTP
/// fetcher.
pub async fn run_tests(asset: &CreativeAsset) -> Result<AssetReport> {
    Runner::new()?.run_one(asset).await
}

/// Run the full built-in catalog against a batch of assets.
pub async fn run_tests_on_assets(assets: &[CreativeAsset]) -> Result<Vec<AssetReport>> {
    Runner::new()?.run_many(assets).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::StubFetcher;
    use crate::model::RuleContext;
    use async_trait::async_trait;

    fn asset(name: &str) -> CreativeAsset {
        CreativeAsset {
            name: name.to_string(),
            preview_url: format!("https://cdn.example.com/{name}/index.html"),
            zip_url: format!("https://cdn.example.com/{name}/banner.zip"),
            placeholder_url: format!("https://cdn.example.com/{name}/placeholder.jpg"),
        }
    }

    struct Named(&'static str, bool);

    #[async_trait]
    impl Rule for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        async fn run(&self, _ctx: &RuleContext, _fetch: &dyn Fetcher) -> Verdict {
            if self.1 {
                Verdict::pass("ok")
            } else {
                Verdict::fail("no")
            }
        }
    }

    /// Completes only after yielding many times, to shake up completion
    /// order relative to the other rules.
    struct Slow;

    #[async_trait]
    impl Rule for Slow {
        fn name(&self) -> &'static str {
            "Slow"
        }

        async fn run(&self, _ctx: &RuleContext, _fetch: &dyn Fetcher) -> Verdict {
            for _ in 0..50 {
                tokio::task::yield_now().await;
            }
            Verdict::pass("eventually")
        }
    }

    #[test]
    fn build_context_copies_fields_verbatim() {
        let asset = asset("banner");
        let ctx = build_context(&asset).unwrap();
        assert_eq!(ctx.name, asset.name);
        assert_eq!(ctx.preview_url, asset.preview_url);
        assert_eq!(ctx.zip_url, asset.zip_url);
        assert_eq!(ctx.placeholder_url, asset.placeholder_url);
    }

    #[test]
    fn build_context_rejects_missing_url() {
        let mut bad = asset("banner");
        bad.zip_url.clear();
        let err = build_context(&bad).unwrap_err();
        assert!(matches!(
            err,
            BannerCheckError::InvalidAsset { field: "zip_url", .. }
        ));
    }

    #[tokio::test]
    async fn results_match_catalog_order_not_completion_order() {
        let runner = Runner::with_rules(
            Arc::new(StubFetcher::new()),
            vec![Arc::new(Slow), Arc::new(Named("Fast", true))],
        );
        let report = runner.run_one(&asset("banner")).await.unwrap();
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].rule_name, "Slow");
        assert_eq!(report.results[1].rule_name, "Fast");
    }

    #[tokio::test]
    async fn one_failing_rule_does_not_stop_the_others() {
        let runner = Runner::with_rules(
            Arc::new(StubFetcher::new()),
            vec![
                Arc::new(Named("a", true)),
                Arc::new(Named("b", false)),
                Arc::new(Named("c", true)),
            ],
        );
        let report = runner.run_one(&asset("banner")).await.unwrap();
        assert!(!report.passed);
        assert_eq!(report.failed_count, 1);
        assert_eq!(report.results.len(), 3);
        assert!(report.results[0].verdict.passed);
        assert!(!report.results[1].verdict.passed);
        assert!(report.results[2].verdict.passed);
    }

    #[tokio::test]
    async fn batch_output_is_index_aligned_with_input() {
        let runner = Runner::with_rules(
            Arc::new(StubFetcher::new()),
            vec![Arc::new(Named("only", true))],
        );
        let assets = vec![asset("one"), asset("two"), asset("three")];
        let reports = runner.run_many(&assets).await.unwrap();
        assert_eq!(reports.len(), 3);
        for (asset, report) in assets.iter().zip(&reports) {
            assert_eq!(report.name, asset.name);
            assert_eq!(report.preview_url, asset.preview_url);
        }
    }

    #[tokio::test]
    async fn batch_fails_fast_on_malformed_descriptor() {
        let runner = Runner::with_rules(
            Arc::new(StubFetcher::new()),
            vec![Arc::new(Named("only", true))],
        );
        let mut bad = asset("bad");
        bad.preview_url.clear();
        let err = runner.run_many(&[asset("ok"), bad]).await.unwrap_err();
        assert!(matches!(err, BannerCheckError::InvalidAsset { .. }));
    }

    #[tokio::test]
    async fn rerunning_yields_identical_report() {
        let runner = Runner::with_rules(
            Arc::new(StubFetcher::new()),
            vec![Arc::new(Named("a", true)), Arc::new(Named("b", false))],
        );
        let first = runner.run_one(&asset("banner")).await.unwrap();
        let second = runner.run_one(&asset("banner")).await.unwrap();
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}
