//! Callback listing pages (`*Callbacks.html`).
//!
//! Each callback is laid out as:
//!
//! ```text
//! <div id="onDestroyed" class="codecontainer">
//!   <span class="keyword">callback</span> onDestroyed(index, lastDamageInflictor)<br/>
//!   <div id="onDestroyed" class="code">
//!     <p>Called when the entity is destroyed.</p>
//!     <span class="parameter">Parameters</span>
//!     <div class="indented">
//!       <span class="parameter">index</span> Index of the entity<br/>
//!     </div>
//!   </div>
//! </div>
//! ```

use crate::error::ConvertError;
use crate::extract::markup::{clean_text, compile, strip_tags};
use crate::extract::Extractor;
use crate::model::{CallbackDoc, CallbackFile};
use regex::{escape, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static RE_TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<h1>([^<]+)</h1>").unwrap());

static RE_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<p>\s*Note:(.*?)</p>").unwrap());

static RE_CALLBACK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<div id="([^"]+)" class="codecontainer">.*?<span class="keyword">callback</span>\s+([^<]+)<br/>"#,
    )
    .unwrap()
});

static RE_PARAM_DESC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<span class="parameter">([^<]+)</span>\s*(.*?)<br/>"#).unwrap()
});

static RE_SIGNATURE_ARGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*)\)").unwrap());

/// Extracts a [`CallbackFile`] from a callback listing page.
///
/// A page without a title is an error rather than a skip: every file picked
/// by the `*Callbacks.html` pattern is expected to be a callback page.
#[derive(Debug, Default)]
pub struct CallbackExtractor;

impl Extractor for CallbackExtractor {
    type Record = CallbackFile;

    fn extract(&self, html: &str) -> Result<Option<CallbackFile>, ConvertError> {
        let title = extract_title(html).ok_or(ConvertError::MissingTitle)?;
        let callbacks = extract_callbacks(html)?;
        let note = extract_notes(html);
        Ok(Some(CallbackFile {
            title,
            note,
            callbacks,
        }))
    }
}

/// Text of the first `<h1>`.
pub fn extract_title(html: &str) -> Option<String> {
    RE_TITLE.captures(html).map(|caps| caps[1].trim().to_string())
}

/// Text following `Note:` in the first note paragraph.
pub fn extract_notes(html: &str) -> Option<String> {
    RE_NOTE.captures(html).map(|caps| clean_text(&caps[1]))
}

/// All callback definitions in document order.
pub fn extract_callbacks(html: &str) -> Result<Vec<CallbackDoc>, ConvertError> {
    let mut callbacks = Vec::new();

    for caps in RE_CALLBACK.captures_iter(html) {
        let name = caps[1].to_string();
        let signature = caps[2].trim().to_string();

        let description = extract_description(html, &name)?;
        if description.is_empty() {
            tracing::debug!(callback = %name, "no description paragraph");
        }
        let param_descriptions = extract_param_descriptions(html, &name)?;
        let parameters = signature_params(&signature);

        callbacks.push(CallbackDoc {
            name,
            signature,
            description,
            parameters,
            param_descriptions,
        });
    }

    Ok(callbacks)
}

/// First paragraph inside the callback's `class="code"` body.
fn extract_description(html: &str, id: &str) -> Result<String, ConvertError> {
    let re = compile(&format!(
        r#"(?s)<div id="{}" class="code">.*?<p>(.*?)</p>"#,
        escape(id)
    ))?;
    Ok(re
        .captures(html)
        .map(|caps| clean_text(&caps[1]))
        .unwrap_or_default())
}

/// Parameter name → description from the nested "Parameters" section.
fn extract_param_descriptions(
    html: &str,
    id: &str,
) -> Result<HashMap<String, String>, ConvertError> {
    let re = compile(&format!(
        r#"(?s)<div id="{}" class="code">.*?<span class="parameter">Parameters</span>.*?<div class="indented">(.*?)</div>"#,
        escape(id)
    ))?;

    let mut descriptions = HashMap::new();
    if let Some(caps) = re.captures(html) {
        for pm in RE_PARAM_DESC.captures_iter(&caps[1]) {
            let name = pm[1].trim().to_string();
            let desc = strip_tags(pm[2].trim()).trim().to_string();
            descriptions.insert(name, desc);
        }
    }
    Ok(descriptions)
}

/// Parameter names between the signature's parentheses.
fn signature_params(signature: &str) -> Vec<String> {
    let Some(caps) = RE_SIGNATURE_ARGS.captures(signature) else {
        return Vec::new();
    };
    caps[1]
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
