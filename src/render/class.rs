//! YAML renderer for class pages.

use crate::model::{Availability, ClassDoc, Constructor, Method, Parameter, Property};
use crate::render::{finish, own_then_inherited, Renderer};

pub struct ClassYaml;

impl Renderer for ClassYaml {
    type Record = ClassDoc;

    fn render(&self, doc: &ClassDoc) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("# {} API Documentation", doc.name));
        lines.push(format!("name: {}", doc.name));
        lines.push("type: class".to_string());
        if let Some(ref base) = doc.base_class {
            lines.push(format!("extends: {}", base));
        }
        lines.push(format!("availability: {}", doc.availability));
        lines.push(format!("description: {} class", doc.name));
        lines.push(String::new());

        if let Some(ref ctor) = doc.constructor {
            render_constructor(&mut lines, &doc.name, ctor);
        }

        if !doc.properties.is_empty() {
            lines.push("properties:".to_string());
            for prop in own_then_inherited(&doc.properties) {
                render_property(&mut lines, prop);
            }
        }

        if !doc.methods.is_empty() {
            lines.push("methods:".to_string());
            for method in own_then_inherited(&doc.methods) {
                render_method(&mut lines, method);
            }
        }

        lines.push("notes:".to_string());
        lines.push("  - Auto-converted from HTML documentation".to_string());
        match doc.availability {
            Availability::ClientOnly => {
                lines.push("  - Client-only - not available on server".to_string())
            }
            Availability::ServerOnly => {
                lines.push("  - Server-only - not available on client".to_string())
            }
            Availability::Both => {}
        }
        if let Some(ref base) = doc.base_class {
            lines.push(format!("  - Inherits from {}", base));
        }

        finish(lines)
    }
}

fn render_constructor(lines: &mut Vec<String>, class_name: &str, ctor: &Constructor) {
    lines.push("constructor:".to_string());
    lines.push(format!("  signature: {}", ctor.signature));
    render_parameters(lines, &ctor.parameters, "  ");
    lines.push(format!("  returns: {} instance", class_name));
    lines.push(String::new());
}

fn render_property(lines: &mut Vec<String>, prop: &Property) {
    lines.push(format!("  - name: {}", prop.name));
    lines.push(format!("    type: {}", prop.type_name));
    lines.push(format!("    access: {}", prop.access.as_str()));
    if let Some(ref from) = prop.inherited_from {
        lines.push(format!("    inherited_from: {}", from));
    }
    lines.push(format!("    description: {} property", prop.name));
    lines.push(String::new());
}

fn render_method(lines: &mut Vec<String>, method: &Method) {
    lines.push(format!("  - name: {}", method.name));
    lines.push(format!("    signature: {}", method.signature));
    render_parameters(lines, &method.parameters, "    ");
    lines.push(format!("    returns: {}", method.returns));
    if let Some(ref from) = method.inherited_from {
        lines.push(format!("    inherited_from: {}", from));
    }
    lines.push(format!("    description: {} method", method.name));
    lines.push(String::new());
}

/// `parameters:` list at the given indent; nothing for an empty list.
fn render_parameters(lines: &mut Vec<String>, params: &[Parameter], indent: &str) {
    if params.is_empty() {
        return;
    }
    lines.push(format!("{}parameters:", indent));
    for param in params {
        lines.push(format!("{}  - name: {}", indent, param.name));
        lines.push(format!("{}    type: {}", indent, param.type_name));
        lines.push(format!("{}    description: {} parameter", indent, param.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Access;

    fn prop(name: &str, inherited_from: Option<&str>) -> Property {
        Property {
            name: name.to_string(),
            type_name: "int".to_string(),
            access: Access::ReadWrite,
            inherited: inherited_from.is_some(),
            inherited_from: inherited_from.map(str::to_string),
        }
    }

    fn method(name: &str, returns: &str, inherited_from: Option<&str>) -> Method {
        Method {
            name: name.to_string(),
            signature: format!("{}()", name),
            returns: returns.to_string(),
            parameters: Vec::new(),
            inherited: inherited_from.is_some(),
            inherited_from: inherited_from.map(str::to_string),
        }
    }

    #[test]
    fn ship_with_single_property() {
        let doc = ClassDoc {
            name: "Ship".to_string(),
            base_class: Some("Entity".to_string()),
            properties: vec![prop("id", None)],
            ..Default::default()
        };
        let out = ClassYaml.render(&doc);
        assert_eq!(
            out,
            "# Ship API Documentation\n\
             name: Ship\n\
             type: class\n\
             extends: Entity\n\
             availability: both\n\
             description: Ship class\n\
             \n\
             properties:\n  \
             - name: id\n    \
             type: int\n    \
             access: read-write\n    \
             description: id property\n\
             \n\
             notes:\n  \
             - Auto-converted from HTML documentation\n  \
             - Inherits from Entity\n"
        );
        assert!(!out.contains("constructor:"));
    }

    #[test]
    fn own_properties_precede_inherited() {
        let doc = ClassDoc {
            name: "Ship".to_string(),
            base_class: Some("Entity".to_string()),
            properties: vec![prop("id", Some("Entity")), prop("crew", None), prop("hp", Some("Entity"))],
            ..Default::default()
        };
        let out = ClassYaml.render(&doc);
        let crew = out.find("- name: crew").unwrap();
        let id = out.find("- name: id").unwrap();
        let hp = out.find("- name: hp").unwrap();
        assert!(crew < id && id < hp);
        assert!(out.contains("    access: read-write\n    inherited_from: Entity\n    description: id property\n"));
        assert_eq!(out.matches("inherited_from: Entity").count(), 2);
    }

    #[test]
    fn methods_with_constructor() {
        let doc = ClassDoc {
            name: "Ship".to_string(),
            availability: Availability::ClientOnly,
            constructor: Some(Constructor {
                signature: "Ship(int index)".to_string(),
                parameters: vec![Parameter {
                    name: "index".to_string(),
                    type_name: "int".to_string(),
                }],
            }),
            methods: vec![method("getPosition", "void", Some("Entity")), method("jump", "bool", None)],
            ..Default::default()
        };
        let out = ClassYaml.render(&doc);
        assert!(out.contains(
            "constructor:\n  \
             signature: Ship(int index)\n  \
             parameters:\n    \
             - name: index\n      \
             type: int\n      \
             description: index parameter\n  \
             returns: Ship instance\n\n"
        ));
        assert!(out.contains(
            "methods:\n  \
             - name: jump\n    \
             signature: jump()\n    \
             returns: bool\n    \
             description: jump method\n\n  \
             - name: getPosition\n    \
             signature: getPosition()\n    \
             returns: void\n    \
             inherited_from: Entity\n    \
             description: getPosition method\n\n"
        ));
        assert!(out.ends_with("  - Client-only - not available on server\n"));
        assert!(!out.contains("extends:"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let doc = ClassDoc {
            name: "Sector".to_string(),
            availability: Availability::ServerOnly,
            methods: vec![method("a", "void", None), method("b", "int", None)],
            ..Default::default()
        };
        assert_eq!(ClassYaml.render(&doc), ClassYaml.render(&doc));
        assert!(ClassYaml.render(&doc).contains("  - Server-only - not available on client\n"));
    }
}
