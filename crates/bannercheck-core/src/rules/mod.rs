//! Compliance rules and the built-in catalog.
//!
//! Each rule is one independent check: a name plus an async function from a
//! creative's context to a [`Verdict`]. Rules are stateless, never mutate
//! the context, and never let a transport condition escape — the fetch
//! adapter hands them absence, and they turn absence into a deterministic
//! failing verdict.

use std::sync::Arc;

use async_trait::async_trait;

use crate::fetch::Fetcher;
use crate::model::{RuleContext, Verdict};

mod click_tag;
mod external_assets;
mod file_size;
mod href_pattern;
mod placeholder;
mod target_blank;

pub use click_tag::ClickTag;
pub use external_assets::ExternalAssets;
pub use file_size::{FileSize, MAX_ZIP_SIZE, WARN_ZIP_SIZE};
pub use href_pattern::HrefPattern;
pub use placeholder::PlaceholderImage;
pub use target_blank::TargetBlank;

/// One independent compliance check.
#[async_trait]
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self, ctx: &RuleContext, fetch: &dyn Fetcher) -> Verdict;
}

/// The fixed ordered catalog of built-in rules.
///
/// Order determines report display order only; rules are independent and
/// pass/fail does not depend on execution order.
pub fn default_rules() -> Vec<Arc<dyn Rule>> {
    vec![
        Arc::new(FileSize),
        Arc::new(PlaceholderImage),
        Arc::new(ClickTag),
        Arc::new(TargetBlank),
        Arc::new(HrefPattern),
    ]
}

/// Default catalog plus the opt-in [`ExternalAssets`] rule appended.
///
/// External asset verification fans out one HEAD request per referenced
/// asset, so it is not part of the default catalog; callers opt in here or
/// via `Runner::with_rules`.
pub fn all_rules() -> Vec<Arc<dyn Rule>> {
    let mut rules = default_rules();
    rules.push(Arc::new(ExternalAssets));
    rules
}

#[cfg(test)]
pub(crate) fn test_context() -> RuleContext {
    RuleContext {
        name: "banner".to_string(),
        preview_url: "https://cdn.example.com/ads/123/index.html".to_string(),
        zip_url: "https://cdn.example.com/ads/123/banner.zip".to_string(),
        placeholder_url: "https://cdn.example.com/ads/123/placeholder.jpg".to_string(),
    }
}
