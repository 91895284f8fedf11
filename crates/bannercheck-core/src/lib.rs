//! Compliance test runner for HTML5 banner creative bundles.
//!
//! Validates remote-hosted creative packages against publishing rules
//! before they enter a delivery pipeline:
//!
//! - Fetch adapter over GET/HEAD that normalizes transport failures to
//!   absence, so rules never see network errors
//! - Independent async rules (zip weight, placeholder presence, clickTag
//!   declaration, click-through href form, `target="_blank"` prohibition,
//!   opt-in external-asset reachability)
//! - A runner that fans out rules and assets concurrently and aggregates
//!   order-preserving pass/fail reports with warnings
//!
//! Checks operate on fetched text and HTTP metadata only; nothing is
//! rendered or executed.
//!
//! # Quick Start
//!
//! ```no_run
//! use bannercheck_core::{run_tests, CreativeAsset};
//!
//! # async fn example() -> bannercheck_core::Result<()> {
//! let asset = CreativeAsset {
//!     name: "summer-sale-300x250".into(),
//!     preview_url: "https://cdn.example.com/ads/123/index.html".into(),
//!     zip_url: "https://cdn.example.com/ads/123/banner.zip".into(),
//!     placeholder_url: "https://cdn.example.com/ads/123/placeholder.jpg".into(),
//! };
//! let report = run_tests(&asset).await?;
//! if !report.passed {
//!     println!("{}", bannercheck_core::report::console::render_report(&report));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Custom catalogs
//!
//! The built-in catalog is a fixed ordered list; callers may run any
//! subset/order via [`Runner::with_rules`], including the opt-in
//! [`rules::ExternalAssets`] rule (or [`rules::all_rules`]).

pub mod error;
pub mod fetch;
pub mod model;
pub mod report;
pub mod rules;
pub mod runner;

// Re-export main types
pub use error::{BannerCheckError, Result};
pub use fetch::{Fetcher, HttpFetcher, USER_AGENT};
pub use model::{AssetReport, BatchReport, CreativeAsset, RuleContext, RuleOutcome, Verdict};
pub use rules::{all_rules, default_rules, Rule};
pub use runner::{build_context, run_tests, run_tests_on_assets, Runner};
