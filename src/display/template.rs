//! Template display formatting

/// Format template names as a bulleted list
pub fn format_template_list(names: &[String]) -> String {
    if names.is_empty() {
        return "No templates found.\n".to_string();
    }

    let mut output = String::from("Available template files:\n");
    for name in names {
        output.push_str(&format!("- {}\n", name));
    }

    output
}
