//! Zip size limit check (IAB display-ad weight budget).

use async_trait::async_trait;
use tracing::debug;

use crate::fetch::Fetcher;
use crate::model::{RuleContext, Verdict};

use super::Rule;

/// Hard limit for the packaged zip, per the IAB display standard.
pub const MAX_ZIP_SIZE: u64 = 150 * 1024;
/// Advisory threshold: a passing size above this is flagged as a warning.
pub const WARN_ZIP_SIZE: u64 = 100 * 1024;

pub struct FileSize;

#[async_trait]
impl Rule for FileSize {
    fn name(&self) -> &'static str {
        "File Size"
    }

    async fn run(&self, ctx: &RuleContext, fetch: &dyn Fetcher) -> Verdict {
        let Some(zip_size) = fetch.content_length(&ctx.zip_url).await else {
            return Verdict::fail("Could not determine zip file size");
        };
        debug!(asset = %ctx.name, zip_size, "zip size resolved");

        let size_kb = format!("{:.2}", zip_size as f64 / 1024.0);

        // The limit itself is already over budget: 150*1024 exactly fails.
        if zip_size >= MAX_ZIP_SIZE {
            return Verdict::fail(format!(
                "Size {}KB exceeds max {}KB",
                size_kb,
                MAX_ZIP_SIZE / 1024
            ));
        }

        if zip_size > WARN_ZIP_SIZE {
            return Verdict::warn(format!("Size {}KB approaching limit", size_kb));
        }

        Verdict::pass(format!("Size {}KB is within limits", size_kb))
    }
}
