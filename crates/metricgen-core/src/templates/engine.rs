//! Placeholder substitution.
//!
//! A single forward pass over the template text. Substituted values are not
//! rescanned, so a value containing `{{` passes through literally.

use crate::error::CodegenError;
use crate::templates::Template;
use crate::vars::TemplateVars;

/// Opening placeholder delimiter.
const OPEN: &str = "{{";
/// Closing placeholder delimiter.
const CLOSE: &str = "}}";

/// Replaces every `{{name}}` in the template with the value `vars` supplies.
///
/// Fails on the first placeholder `vars` does not define and on an opening
/// delimiter with no closing one; no partially substituted output is ever
/// returned.
pub fn substitute(template: &Template, vars: &dyn TemplateVars) -> Result<String, CodegenError> {
    let content = template.content();
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];
        let end = after
            .find(CLOSE)
            .ok_or_else(|| CodegenError::UnterminatedPlaceholder {
                template: template.path().to_path_buf(),
            })?;
        let name = after[..end].trim();
        let value = vars
            .get(name)
            .ok_or_else(|| CodegenError::UnknownPlaceholder {
                template: template.path().to_path_buf(),
                name: name.to_string(),
            })?;
        out.push_str(&value);
        rest = &after[end + CLOSE.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::FactoryVars;

    fn vars(generator: &str, methods: &str) -> FactoryVars {
        FactoryVars {
            generator: generator.to_string(),
            factory_methods: methods.to_string(),
        }
    }

    #[test]
    fn substitutes_a_single_placeholder() {
        let template = Template::from_content("t", "// by {{generator}}\n");
        let out = substitute(&template, &vars("metricgen", "")).unwrap();
        assert_eq!(out, "// by metricgen\n");
    }

    #[test]
    fn substitutes_repeated_placeholders() {
        let template = Template::from_content("t", "{{generator}} and {{generator}}");
        let out = substitute(&template, &vars("m", "")).unwrap();
        assert_eq!(out, "m and m");
    }

    #[test]
    fn passes_text_without_placeholders_through() {
        let template = Template::from_content("t", "fn f() { g(); }\n");
        let out = substitute(&template, &vars("m", "")).unwrap();
        assert_eq!(out, "fn f() { g(); }\n");
    }

    #[test]
    fn trims_whitespace_inside_delimiters() {
        let template = Template::from_content("t", "{{ generator }}");
        let out = substitute(&template, &vars("m", "")).unwrap();
        assert_eq!(out, "m");
    }

    #[test]
    fn unknown_placeholder_is_fatal_and_named() {
        let template = Template::from_content("t.tmpl", "a {{nope}} b");
        let err = substitute(&template, &vars("m", "")).unwrap_err();
        match err {
            CodegenError::UnknownPlaceholder { name, template } => {
                assert_eq!(name, "nope");
                assert_eq!(template, std::path::PathBuf::from("t.tmpl"));
            }
            other => panic!("expected UnknownPlaceholder, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_delimiter_is_fatal() {
        let template = Template::from_content("t.tmpl", "a {{generator");
        let err = substitute(&template, &vars("m", "")).unwrap_err();
        assert!(matches!(err, CodegenError::UnterminatedPlaceholder { .. }));
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let template = Template::from_content("t", "[{{factory_methods}}]");
        let out = substitute(&template, &vars("m", "{{generator}}")).unwrap();
        assert_eq!(out, "[{{generator}}]");
    }

    #[test]
    fn closing_braces_in_literal_text_are_ignored() {
        let template = Template::from_content("t", "impl X {} }} {{generator}}");
        let out = substitute(&template, &vars("m", "")).unwrap();
        assert_eq!(out, "impl X {} }} m");
    }
}
