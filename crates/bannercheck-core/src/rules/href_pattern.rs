//! Click-through href check.
//!
//! The wrapping anchor must open `window.clickTag` so the ad server controls
//! the destination; any hardcoded href is a compliance failure.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;

use crate::fetch::Fetcher;
use crate::model::{RuleContext, Verdict};

use super::Rule;

lazy_static! {
    /// Required anchor form, single or double quoted:
    /// `href="javascript:window.open(window.clickTag)"`.
    static ref CLICK_HREF: Regex =
        Regex::new(r#"href\s*=\s*["']javascript:window\.open\(window\.clickTag\)["']"#).unwrap();
}

pub struct HrefPattern;

#[async_trait]
impl Rule for HrefPattern {
    fn name(&self) -> &'static str {
        "Href Pattern"
    }

    async fn run(&self, ctx: &RuleContext, fetch: &dyn Fetcher) -> Verdict {
        let Some(html) = fetch.fetch_text(&ctx.preview_url).await else {
            return Verdict::fail("HTML file not found");
        };

        if !CLICK_HREF.is_match(&html) {
            return Verdict::fail(
                r#"Missing correct href="javascript:window.open(window.clickTag)""#,
            );
        }

        Verdict::pass("Correct href pattern found")
    }
}
