//! Placeholder image presence check.

use async_trait::async_trait;

use crate::fetch::Fetcher;
use crate::model::{RuleContext, Verdict};

use super::Rule;

pub struct PlaceholderImage;

#[async_trait]
impl Rule for PlaceholderImage {
    fn name(&self) -> &'static str {
        "Placeholder Image"
    }

    async fn run(&self, ctx: &RuleContext, fetch: &dyn Fetcher) -> Verdict {
        if !fetch.exists(&ctx.placeholder_url).await {
            return Verdict::fail("Missing placeholder image (.jpg)");
        }

        Verdict::pass("Placeholder image found")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::StubFetcher;
    use crate::rules::test_context;

    #[tokio::test]
    async fn present_placeholder_passes() {
        let ctx = test_context();
        let fetch = StubFetcher::new().with_existing(&ctx.placeholder_url);
        let verdict = PlaceholderImage.run(&ctx, &fetch).await;
        assert!(verdict.passed);
        assert_eq!(verdict.message, "Placeholder image found");
    }

    #[tokio::test]
    async fn missing_placeholder_fails() {
        let ctx = test_context();
        let verdict = PlaceholderImage.run(&ctx, &StubFetcher::new()).await;
        assert!(!verdict.passed);
        assert_eq!(verdict.message, "Missing placeholder image (.jpg)");
    }
}
