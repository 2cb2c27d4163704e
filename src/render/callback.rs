//! YAML renderer for callback listings.

use crate::model::{CallbackDoc, CallbackFile};
use crate::render::{finish, Renderer};

pub struct CallbackYaml;

impl Renderer for CallbackYaml {
    type Record = CallbackFile;

    fn render(&self, file: &CallbackFile) -> String {
        let mut lines: Vec<String> = Vec::new();
        let subject = file.title.replace(" Callbacks", "");

        lines.push(format!("# {} Documentation", file.title));
        lines.push(format!("name: {}", file.title));
        lines.push("type: callbacks".to_string());
        lines.push(format!(
            "description: Callback functions for {} scripts",
            subject.trim()
        ));
        lines.push(String::new());

        if let Some(ref note) = file.note {
            lines.push("note: |".to_string());
            lines.push(format!("  {}", note));
            lines.push(String::new());
        }

        if !file.callbacks.is_empty() {
            lines.push("callbacks:".to_string());
            for cb in &file.callbacks {
                render_callback(&mut lines, cb);
            }
        }

        lines.push("notes:".to_string());
        lines.push("  - Manually converted from HTML callbacks documentation".to_string());
        lines.push("  - Callbacks may be buffered and won't always execute immediately".to_string());

        finish(lines)
    }
}

fn render_callback(lines: &mut Vec<String>, cb: &CallbackDoc) {
    lines.push(format!("  - name: {}", cb.name));
    lines.push(format!("    signature: {}", cb.signature));

    if !cb.parameters.is_empty() {
        lines.push("    parameters:".to_string());
        for param in &cb.parameters {
            lines.push(format!("      - name: {}", param));
            match cb.param_descriptions.get(param) {
                Some(desc) => lines.push(format!("        description: {}", desc)),
                None => lines.push(format!("        description: {} parameter", param)),
            }
        }
    }

    if cb.description.is_empty() {
        lines.push(format!("    description: {} callback", cb.name));
    } else {
        lines.push(format!("    description: {}", cb.description));
    }
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn ship(callbacks: Vec<CallbackDoc>, note: Option<&str>) -> CallbackFile {
        CallbackFile {
            title: "Ship Callbacks".to_string(),
            note: note.map(str::to_string),
            callbacks,
        }
    }

    #[test]
    fn undocumented_callback_without_params() {
        let cb = CallbackDoc {
            name: "onDestroyed".to_string(),
            signature: "onDestroyed()".to_string(),
            ..Default::default()
        };
        let out = CallbackYaml.render(&ship(vec![cb], None));
        assert_eq!(
            out,
            "# Ship Callbacks Documentation\n\
             name: Ship Callbacks\n\
             type: callbacks\n\
             description: Callback functions for Ship scripts\n\
             \n\
             callbacks:\n  \
             - name: onDestroyed\n    \
             signature: onDestroyed()\n    \
             description: onDestroyed callback\n\
             \n\
             notes:\n  \
             - Manually converted from HTML callbacks documentation\n  \
             - Callbacks may be buffered and won't always execute immediately\n"
        );
        assert!(!out.contains("parameters:"));
    }

    #[test]
    fn params_fall_back_to_placeholder() {
        let mut param_descriptions = HashMap::new();
        param_descriptions.insert("index".to_string(), "Index of the entity".to_string());
        let cb = CallbackDoc {
            name: "onHit".to_string(),
            signature: "onHit(index, damage)".to_string(),
            description: "Called on hit.".to_string(),
            parameters: vec!["index".to_string(), "damage".to_string()],
            param_descriptions,
        };
        let out = CallbackYaml.render(&ship(vec![cb], None));
        assert!(out.contains(
            "    parameters:\n      \
             - name: index\n        \
             description: Index of the entity\n      \
             - name: damage\n        \
             description: damage parameter\n    \
             description: Called on hit.\n"
        ));
    }

    #[test]
    fn note_block() {
        let out = CallbackYaml.render(&ship(Vec::new(), Some("Callbacks are buffered.")));
        assert!(out.contains("note: |\n  Callbacks are buffered.\n\nnotes:\n"));
        assert!(!out.contains("callbacks:\n"));
    }
}
