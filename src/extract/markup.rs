//! Small text helpers shared by the extractors.

use crate::error::ConvertError;
use crate::model::Parameter;
use regex::Regex;
use std::sync::LazyLock;

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

// <span class="type">int</span> <span class="parameter">index</span>
static RE_TYPED_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<span class="type">([^<]+)</span>\s*<span class="parameter">([^<]+)</span>"#)
        .unwrap()
});

static RE_DIV_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"<div id="([^"]+)""#).unwrap());

/// Remove every `<...>` tag, keeping the text between them.
pub fn strip_tags(html: &str) -> String {
    RE_TAG.replace_all(html, "").into_owned()
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip tags, then collapse whitespace.
pub fn clean_text(html: &str) -> String {
    collapse_whitespace(&strip_tags(html))
}

/// Compile a pattern that embeds page-derived names.
pub fn compile(pattern: &str) -> Result<Regex, ConvertError> {
    Ok(Regex::new(pattern)?)
}

/// Parse the marked-up parameter list between a function's parentheses.
pub fn parse_typed_params(params_html: &str) -> Vec<Parameter> {
    if params_html.trim().is_empty() {
        return Vec::new();
    }
    RE_TYPED_PARAM
        .captures_iter(params_html)
        .map(|caps| Parameter {
            name: caps[2].trim().to_string(),
            type_name: caps[1].trim().to_string(),
        })
        .collect()
}

/// Build `name(type1 name1, type2 name2)`.
pub fn signature(name: &str, params: &[Parameter]) -> String {
    let list = params
        .iter()
        .map(|p| format!("{} {}", p.type_name, p.name))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({})", name, list)
}

/// Markup of the definition block opened by `<div id="id" ...>`.
///
/// The block ends where the next `<div id="...">` with a different id
/// starts, or at the end of the page. Returns `None` if no such div exists.
pub fn definition_block<'a>(html: &'a str, id: &str) -> Option<&'a str> {
    let start = RE_DIV_ID
        .captures_iter(html)
        .find(|caps| &caps[1] == id)?
        .get(0)?
        .start();
    let rest = &html[start..];
    let end = RE_DIV_ID
        .captures_iter(rest)
        .filter(|caps| &caps[1] != id)
        .find_map(|caps| caps.get(0).map(|m| m.start()))
        .unwrap_or(rest.len());
    Some(&rest[..end])
}
