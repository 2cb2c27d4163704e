//! Data model for extracted documentation — format-agnostic.

use std::collections::HashMap;
use std::fmt;

/// A class reference page.
#[derive(Debug, Default)]
pub struct ClassDoc {
    pub name: String,
    /// Class linked after the `:` in the page heading
    pub base_class: Option<String>,
    pub availability: Availability,
    pub constructor: Option<Constructor>,
    /// Own and inherited properties, in navigation order
    pub properties: Vec<Property>,
    /// Own and inherited methods, in navigation order
    pub methods: Vec<Method>,
}

/// Execution context an API element may be used in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Availability {
    #[default]
    Both,
    ClientOnly,
    ServerOnly,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Both => "both",
            Availability::ClientOnly => "client-only",
            Availability::ServerOnly => "server-only",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    /// e.g. "Ship(int index, string name)"
    pub signature: String,
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
}

/// Access modifier of a property.
///
/// Pages only ever mark `[read-only]` and `[write-only]`, but whatever text
/// sits in the brackets is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Access {
    ReadOnly,
    WriteOnly,
    #[default]
    ReadWrite,
    Other(String),
}

impl Access {
    pub fn from_marker(marker: &str) -> Self {
        match marker.trim() {
            "read-only" => Access::ReadOnly,
            "write-only" => Access::WriteOnly,
            "read-write" => Access::ReadWrite,
            other => Access::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Access::ReadOnly => "read-only",
            Access::WriteOnly => "write-only",
            Access::ReadWrite => "read-write",
            Access::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub type_name: String,
    pub access: Access,
    pub inherited: bool,
    pub inherited_from: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub signature: String,
    /// Return type; the page placeholder `var` is stored as `void`
    pub returns: String,
    pub parameters: Vec<Parameter>,
    pub inherited: bool,
    pub inherited_from: Option<String>,
}

/// Members that can be declared on a class or picked up from its ancestor.
pub trait Member {
    fn is_inherited(&self) -> bool;
}

impl Member for Property {
    fn is_inherited(&self) -> bool {
        self.inherited
    }
}

impl Member for Method {
    fn is_inherited(&self) -> bool {
        self.inherited
    }
}

/// A callback listing page.
#[derive(Debug, Default)]
pub struct CallbackFile {
    pub title: String,
    pub note: Option<String>,
    pub callbacks: Vec<CallbackDoc>,
}

/// A single event-style function invoked by the host.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CallbackDoc {
    pub name: String,
    pub signature: String,
    /// Empty when the page has no prose for this callback
    pub description: String,
    /// Parameter names in signature order
    pub parameters: Vec<String>,
    /// Only parameters with documented text have an entry
    pub param_descriptions: HashMap<String, String>,
}
