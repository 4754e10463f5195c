//! Placeholder substitution
//!
//! Four literal tokens are recognized. Anything else in `{{...}}` form is left
//! as written.

use chrono::{Local, NaiveDateTime};

use crate::models::Template;

pub const TITLE_TOKEN: &str = "{{TITLE}}";
pub const DATE_TOKEN: &str = "{{DATE}}";
pub const TIME_TOKEN: &str = "{{TIME}}";
pub const TAGS_TOKEN: &str = "{{TAGS}}";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Values substituted into a template
///
/// `now` is captured once so `{{DATE}}` and `{{TIME}}` describe the same
/// instant.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub title: String,
    pub tags: Vec<String>,
    pub now: NaiveDateTime,
}

impl RenderContext {
    /// Build a context stamped with the current local time
    pub fn now(title: impl Into<String>, tags: Vec<String>) -> Self {
        Self::at(title, tags, Local::now().naive_local())
    }

    /// Build a context for a fixed instant
    pub fn at(title: impl Into<String>, tags: Vec<String>, now: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            tags,
            now,
        }
    }
}

/// Substitute the recognized tokens in a template's content
pub fn render_content(template: &Template, ctx: &RenderContext) -> String {
    let date = ctx.now.format(DATE_FORMAT).to_string();
    let time = ctx.now.format(TIME_FORMAT).to_string();
    let tags = ctx.tags.join(", ");

    template
        .content
        .replace(TITLE_TOKEN, &ctx.title)
        .replace(DATE_TOKEN, &date)
        .replace(TIME_TOKEN, &time)
        .replace(TAGS_TOKEN, &tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap()
    }

    #[test]
    fn test_all_tokens_replaced() {
        let template = Template::new("# {{TITLE}}\n{{DATE}} {{TIME}}\nTags: {{TAGS}}\n");
        let ctx = RenderContext::at("My Note", vec!["a".into(), "b".into()], fixed_clock());

        let out = render_content(&template, &ctx);

        assert_eq!(out, "# My Note\n2024-03-07 09:05:03\nTags: a, b\n");
        for token in [TITLE_TOKEN, DATE_TOKEN, TIME_TOKEN, TAGS_TOKEN] {
            assert!(!out.contains(token));
        }
    }

    #[test]
    fn test_repeated_tokens() {
        let template = Template::new("{{TITLE}} / {{TITLE}}");
        let ctx = RenderContext::at("x", vec![], fixed_clock());
        assert_eq!(render_content(&template, &ctx), "x / x");
    }

    #[test]
    fn test_no_tags_renders_empty() {
        let template = Template::new("Tags: {{TAGS}}");
        let ctx = RenderContext::at("t", vec![], fixed_clock());
        assert_eq!(render_content(&template, &ctx), "Tags: ");
    }

    #[test]
    fn test_unknown_tokens_untouched() {
        let template = Template::new("{{AUTHOR}} wrote {{TITLE}}");
        let ctx = RenderContext::at("it", vec![], fixed_clock());
        assert_eq!(render_content(&template, &ctx), "{{AUTHOR}} wrote it");
    }

    #[test]
    fn test_afternoon_is_24_hour() {
        let now = NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        let ctx = RenderContext::at("t", vec![], now);
        assert_eq!(
            render_content(&Template::new("{{DATE}}T{{TIME}}"), &ctx),
            "2023-12-31T23:59:00"
        );
    }
}
