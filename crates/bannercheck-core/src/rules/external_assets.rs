//! External asset reachability check (opt-in).
//!
//! Scans the whole HTML text for font and image references in `src=`/`url(`
//! key/value form — not just `<img>`/`<link>` tags, since creatives embed
//! references in inline styles and scripts — then verifies each referenced
//! resource is reachable from the preview location. `data:` URIs are inline
//! and never checked.

use std::collections::HashSet;

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;
use url::Url;

use crate::fetch::Fetcher;
use crate::model::{RuleContext, Verdict};

use super::Rule;

lazy_static! {
    /// Font references: `src:`/`src=`/`url:` followed by a quoted value
    /// ending in a font extension.
    static ref FONT_ASSET: Regex =
        Regex::new(r#"(?i)(?:src|url)\s*[:=]\s*["']([^"']*\.(?:woff2?|ttf|otf|eot))["']"#)
            .unwrap();
    /// Image references, same key/value shape.
    static ref IMAGE_ASSET: Regex =
        Regex::new(r#"(?i)(?:src|url)\s*[:=]\s*["']([^"']*\.(?:jpg|jpeg|png|gif|svg|webp))["']"#)
            .unwrap();
}

/// Deduplicated asset references in first-seen order.
fn extract_asset_urls(html: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for pattern in [&*FONT_ASSET, &*IMAGE_ASSET] {
        for captures in pattern.captures_iter(html) {
            let url = captures[1].to_string();
            if seen.insert(url.clone()) {
                urls.push(url);
            }
        }
    }
    urls
}

/// Browser-style relative resolution against the preview URL: absolute
/// values pass through, a leading `/` joins to the origin, anything else
/// replaces the last path segment. No `.`/`..` normalization.
fn resolve_asset_url(base_url: &str, asset_url: &str) -> Option<String> {
    if asset_url.starts_with("http://") || asset_url.starts_with("https://") {
        return Some(asset_url.to_string());
    }

    let base = Url::parse(base_url).ok()?;
    let origin = base.origin().ascii_serialization();

    if asset_url.starts_with('/') {
        return Some(format!("{}{}", origin, asset_url));
    }

    let mut segments: Vec<&str> = base.path().split('/').collect();
    segments.pop();
    segments.push(asset_url);
    Some(format!("{}{}", origin, segments.join("/")))
}

pub struct ExternalAssets;

#[async_trait]
impl Rule for ExternalAssets {
    fn name(&self) -> &'static str {
        "External Assets"
    }

    async fn run(&self, ctx: &RuleContext, fetch: &dyn Fetcher) -> Verdict {
        let Some(html) = fetch.fetch_text(&ctx.preview_url).await else {
            return Verdict::fail("HTML file not found");
        };

        let asset_urls = extract_asset_urls(&html);
        if asset_urls.is_empty() {
            return Verdict::pass("No external assets referenced");
        }
        debug!(asset = %ctx.name, count = asset_urls.len(), "asset references extracted");

        let data_uri_count = asset_urls
            .iter()
            .filter(|u| u.starts_with("data:"))
            .count();

        // Missing assets are reported by their original reference string,
        // not the resolved URL, so the finding points back at the HTML.
        let mut missing = Vec::new();
        for asset_url in &asset_urls {
            if asset_url.starts_with("data:") {
                continue;
            }
            match resolve_asset_url(&ctx.preview_url, asset_url) {
                Some(resolved) if fetch.exists(&resolved).await => {}
                _ => missing.push(asset_url.clone()),
            }
        }

        if !missing.is_empty() {
            return Verdict::fail(format!(
                "Missing {} asset(s): {}",
                missing.len(),
                missing.join(", ")
            ));
        }

        let external_count = asset_urls.len() - data_uri_count;
        if external_count > 0 {
            Verdict::pass(format!("All {} external asset(s) exist", external_count))
        } else {
            Verdict::pass(format!("All assets inlined ({} data URIs)", data_uri_count))
        }
    }
}
