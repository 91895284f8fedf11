//! target="_blank" prohibition.
//!
//! Creatives must not force a new tab; navigation is owned by the ad
//! server's click-through handling.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;

use crate::fetch::Fetcher;
use crate::model::{RuleContext, Verdict};

use super::Rule;

lazy_static! {
    /// Disallowed attribute, single or double quoted: `target="_blank"`.
    static ref TARGET_BLANK: Regex = Regex::new(r#"target\s*=\s*["']_blank["']"#).unwrap();
}

pub struct TargetBlank;

#[async_trait]
impl Rule for TargetBlank {
    fn name(&self) -> &'static str {
        "Target Blank"
    }

    async fn run(&self, ctx: &RuleContext, fetch: &dyn Fetcher) -> Verdict {
        let Some(html) = fetch.fetch_text(&ctx.preview_url).await else {
            return Verdict::fail("HTML file not found");
        };

        if TARGET_BLANK.is_match(&html) {
            return Verdict::fail(r#"Contains target="_blank" (not allowed)"#);
        }

        Verdict::pass(r#"No target="_blank" found"#)
    }
}
