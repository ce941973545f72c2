//! Named-placeholder substitution for catalog templates

use crate::error::{Result, ScaffoldError};

/// Render a template body by substituting `{{name}}` markers.
///
/// Substitution is textual and deterministic. After all pairs are applied
/// the body is scanned once more: any marker still present means the
/// substitution set was incomplete for this template, and rendering fails
/// rather than emitting a file with a literal `{{...}}` in it.
pub fn render(template_path: &str, body: &str, substitutions: &[(&str, &str)]) -> Result<String> {
    let mut content = body.to_string();
    for (key, value) in substitutions {
        let marker = format!("{{{{{}}}}}", key);
        content = content.replace(&marker, value);
    }

    if let Some(placeholder) = first_unresolved(&content) {
        return Err(ScaffoldError::UnresolvedPlaceholder {
            template: template_path.to_string(),
            placeholder,
        });
    }

    Ok(content)
}

/// Find the first `{{name}}` marker left in rendered content, if any.
fn first_unresolved(content: &str) -> Option<String> {
    let start = content.find("{{")?;
    let rest = &content[start + 2..];
    let end = rest.find("}}")?;
    Some(rest[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_all_occurrences() {
        let out = render(
            "main.go",
            "import \"{{module_path}}/config\"\nimport \"{{module_path}}/routes\"\n",
            &[("module_path", "github.com/yourusername/shopapi")],
        )
        .unwrap();
        assert!(out.contains("github.com/yourusername/shopapi/config"));
        assert!(out.contains("github.com/yourusername/shopapi/routes"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_multiple_placeholders() {
        let out = render(
            "config/config.go",
            "module {{module_path}} db {{project_name}}",
            &[
                ("module_path", "github.com/yourusername/shopapi"),
                ("project_name", "shopapi"),
            ],
        )
        .unwrap();
        assert_eq!(out, "module github.com/yourusername/shopapi db shopapi");
    }

    #[test]
    fn test_unresolved_placeholder_fails_loudly() {
        let err = render("routes/routes.go", "x {{missing}} y", &[]).unwrap_err();
        match err {
            ScaffoldError::UnresolvedPlaceholder {
                template,
                placeholder,
            } => {
                assert_eq!(template, "routes/routes.go");
                assert_eq!(placeholder, "missing");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let subs = [("module_path", "github.com/yourusername/demo")];
        let a = render("go.mod", "module {{module_path}}\n", &subs).unwrap();
        let b = render("go.mod", "module {{module_path}}\n", &subs).unwrap();
        assert_eq!(a, b);
    }
}
