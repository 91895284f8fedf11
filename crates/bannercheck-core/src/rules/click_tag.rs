//! clickTag declaration check.
//!
//! Ad servers inject the click-through destination via the `clickTag`
//! JavaScript variable; a creative that never declares it cannot be tracked.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;

use crate::fetch::Fetcher;
use crate::model::{RuleContext, Verdict};

use super::Rule;

lazy_static! {
    /// JavaScript variable-declaration form, case-sensitive: `var clickTag =`.
    static ref CLICK_TAG: Regex = Regex::new(r"var\s+clickTag\s*=").unwrap();
}

pub struct ClickTag;

#[async_trait]
impl Rule for ClickTag {
    fn name(&self) -> &'static str {
        "ClickTag Variable"
    }

    async fn run(&self, ctx: &RuleContext, fetch: &dyn Fetcher) -> Verdict {
        let Some(html) = fetch.fetch_text(&ctx.preview_url).await else {
            return Verdict::fail("HTML file not found");
        };

        if !CLICK_TAG.is_match(&html) {
            return Verdict::fail("Missing clickTag variable declaration");
        }

        Verdict::pass("clickTag variable found")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::StubFetcher;
    use crate::rules::test_context;

    #[tokio::test]
    async fn missing_html_fails() {
        let ctx = test_context();
        let verdict = ClickTag.run(&ctx, &StubFetcher::new()).await;
        assert!(!verdict.passed);
        assert_eq!(verdict.message, "HTML file not found");
    }

    #[tokio::test]
    async fn declaration_found() {
        let ctx = test_context();
        let fetch = StubFetcher::new().with_body(
            &ctx.preview_url,
            r#"<script>var clickTag = "https://x";</script>"#,
        );
        let verdict = ClickTag.run(&ctx, &fetch).await;
        assert!(verdict.passed);
        assert_eq!(verdict.message, "clickTag variable found");
    }

    #[tokio::test]
    async fn declaration_is_case_sensitive() {
        let ctx = test_context();
        let fetch = StubFetcher::new().with_body(
            &ctx.preview_url,
            r#"<script>var clicktag = "https://x";</script>"#,
        );
        let verdict = ClickTag.run(&ctx, &fetch).await;
        assert!(!verdict.passed);
        assert_eq!(verdict.message, "Missing clickTag variable declaration");
    }

    #[tokio::test]
    async fn assignment_without_var_fails() {
        let ctx = test_context();
        let fetch = StubFetcher::new()
            .with_body(&ctx.preview_url, r#"<script>clickTag = "https://x";</script>"#);
        let verdict = ClickTag.run(&ctx, &fetch).await;
        assert!(!verdict.passed);
    }
}
