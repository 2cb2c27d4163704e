//! Class reference pages.
//!
//! Class pages carry a sidebar of `#anchor` links to every property and
//! function (inherited ones tagged with `inheritedproperty` /
//! `inheritedcode`), and a definition block per member further down the page.

use crate::config::Config;
use crate::error::ConvertError;
use crate::extract::markup::{compile, definition_block, parse_typed_params, signature};
use crate::extract::Extractor;
use crate::model::{Access, Availability, ClassDoc, Constructor, Method, Parameter, Property};
use regex::{escape, Regex};
use std::collections::HashSet;
use std::sync::LazyLock;

// <h1>Ship</h1> or <h1>Ship : <a href="Entity.html">Entity</a></h1>
static RE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<h1>([^<:]+?)(?:\s*:\s*<a[^>]*>([^<]+)</a>)?</h1>").unwrap()
});

static RE_PROPERTY_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r##"<a\s+(?:class="(inheritedproperty)"\s+)?href="#([a-zA-Z_][a-zA-Z0-9_]*)"[^>]*>(?:[^<]+)</a>"##,
    )
    .unwrap()
});

static RE_METHOD_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r##"<a\s+class="(code|inheritedcode)"\s+href="#([a-zA-Z_][a-zA-Z0-9_]*)"[^>]*>(?:[^<]+)</a>"##,
    )
    .unwrap()
});

// <td align="right"> ... <b>[read-only]</b>
static RE_ACCESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<td align="right">.*?<b>\[([^\]]+)\]</b>"#).unwrap()
});

const CLIENT_ONLY_MARKER: &str = "only available on the client";
const SERVER_ONLY_MARKER: &str = "only available on the server";

/// Return type the pages use for functions that return nothing.
const PLACEHOLDER_RETURN: &str = "var";

/// Heading, inheritance and availability of a class page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    pub name: String,
    pub base_class: Option<String>,
    pub availability: Availability,
}

/// Extracts a [`ClassDoc`] from a class reference page.
#[derive(Debug)]
pub struct ClassExtractor {
    reserved_titles: Vec<String>,
    reserved_header_tokens: Vec<String>,
}

impl ClassExtractor {
    pub fn new(config: &Config) -> Self {
        Self {
            reserved_titles: config.reserved_titles.clone(),
            reserved_header_tokens: config.reserved_header_tokens.clone(),
        }
    }
}

impl Default for ClassExtractor {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Extractor for ClassExtractor {
    type Record = ClassDoc;

    fn extract(&self, html: &str) -> Result<Option<ClassDoc>, ConvertError> {
        let Some(info) = extract_class_info(html, &self.reserved_header_tokens) else {
            return Ok(None);
        };
        if self.reserved_titles.iter().any(|t| *t == info.name) {
            return Ok(None);
        }

        let constructor = extract_constructor(html, &info.name)?;
        let properties = extract_properties(html, info.base_class.as_deref())?;
        let methods = extract_methods(html, info.base_class.as_deref())?;

        Ok(Some(ClassDoc {
            name: info.name,
            base_class: info.base_class,
            availability: info.availability,
            constructor,
            properties,
            methods,
        }))
    }
}

/// Class name and base class from the first heading that is not a site
/// header, plus availability from the page's warning text.
pub fn extract_class_info(html: &str, reserved_tokens: &[String]) -> Option<ClassInfo> {
    let (name, base_class) = RE_HEADING.captures_iter(html).find_map(|caps| {
        let name = caps[1].trim();
        if name.is_empty() || reserved_tokens.iter().any(|t| name.contains(t.as_str())) {
            return None;
        }
        let base = caps.get(2).map(|m| m.as_str().trim().to_string());
        Some((name.to_string(), base))
    })?;

    let availability = if html.contains(CLIENT_ONLY_MARKER) {
        Availability::ClientOnly
    } else if html.contains(SERVER_ONLY_MARKER) {
        Availability::ServerOnly
    } else {
        Availability::Both
    };

    Some(ClassInfo {
        name,
        base_class,
        availability,
    })
}

/// The `function ClassName(...)` definition, if the page has one.
pub fn extract_constructor(
    html: &str,
    class_name: &str,
) -> Result<Option<Constructor>, ConvertError> {
    let re = compile(&format!(
        r#"<span class="keyword">function\s+</span>\s*{}\s*\(([^)]*)\)"#,
        escape(class_name)
    ))?;
    let Some(caps) = re.captures(html) else {
        return Ok(None);
    };

    let parameters = parse_typed_params(&caps[1]);
    Ok(Some(Constructor {
        signature: signature(class_name, &parameters),
        parameters,
    }))
}

/// Properties referenced from the sidebar, first occurrence of each name.
pub fn extract_properties(
    html: &str,
    base_class: Option<&str>,
) -> Result<Vec<Property>, ConvertError> {
    let mut properties = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for caps in RE_PROPERTY_LINK.captures_iter(html) {
        let inherited = caps.get(1).is_some();
        let name = &caps[2];
        if seen.contains(name) {
            continue;
        }

        let Some((type_name, access)) = find_property_definition(html, name)? else {
            tracing::debug!(property = name, "no definition block");
            continue;
        };
        seen.insert(name.to_string());

        properties.push(Property {
            name: name.to_string(),
            type_name,
            access,
            inherited,
            inherited_from: inherited_from(inherited, base_class),
        });
    }

    Ok(properties)
}

/// Declared type and access modifier of a property.
fn find_property_definition(
    html: &str,
    name: &str,
) -> Result<Option<(String, Access)>, ConvertError> {
    let re = compile(&format!(
        r#"(?s)<div id="{name}"[^>]*>.*?<span class="type">\s*([^<]+?)\s*</span>\s*<span class="property">\s*{name}\s*</span>"#,
        name = escape(name)
    ))?;
    let Some(caps) = re.captures(html) else {
        return Ok(None);
    };
    let type_name = caps[1].trim().to_string();

    let access = definition_block(html, name)
        .and_then(|block| RE_ACCESS.captures(block))
        .map(|m| Access::from_marker(&m[1]))
        .unwrap_or_default();

    Ok(Some((type_name, access)))
}

/// Methods referenced from the sidebar, first occurrence of each name.
pub fn extract_methods(html: &str, base_class: Option<&str>) -> Result<Vec<Method>, ConvertError> {
    let mut methods = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for caps in RE_METHOD_LINK.captures_iter(html) {
        let inherited = &caps[1] == "inheritedcode";
        let name = &caps[2];
        if seen.contains(name) {
            continue;
        }

        let Some((returns, parameters)) = find_method_definition(html, name)? else {
            tracing::debug!(method = name, "no definition block");
            continue;
        };
        seen.insert(name.to_string());

        methods.push(Method {
            name: name.to_string(),
            signature: signature(name, &parameters),
            returns,
            parameters,
            inherited,
            inherited_from: inherited_from(inherited, base_class),
        });
    }

    Ok(methods)
}

/// Return type and parameters of a method.
fn find_method_definition(
    html: &str,
    name: &str,
) -> Result<Option<(String, Vec<Parameter>)>, ConvertError> {
    let re = compile(&format!(
        r#"(?s)<div id="{name}"[^>]*>.*?<span class="keyword">function\s+([^<]+?)</span>\s*{name}\s*\(([^)]*)\)"#,
        name = escape(name)
    ))?;
    let Some(caps) = re.captures(html) else {
        return Ok(None);
    };

    let mut returns = caps[1].trim().to_string();
    if returns == PLACEHOLDER_RETURN {
        returns = "void".to_string();
    }
    let parameters = parse_typed_params(caps[2].trim());

    Ok(Some((returns, parameters)))
}

fn inherited_from(inherited: bool, base_class: Option<&str>) -> Option<String> {
    if inherited {
        base_class.map(str::to_string)
    } else {
        None
    }
}
