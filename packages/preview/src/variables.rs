use regex::{Captures, Regex};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Variable name to replacement text
pub type TemplateValues = HashMap<String, String>;

// Substitution points: `{{word}}`
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern compiles"));

// Detection is looser than substitution: anything without whitespace or `}`
static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^\s}]+)\}\}").expect("reference pattern compiles"));

/// Replace every `{{name}}` with its value, or with nothing when the name is
/// unmapped or mapped to an empty string
pub fn generate_message(template: &str, values: &TemplateValues) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            values.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

/// Names referenced as `{{name}}` that also appear in `allowed`, in order of
/// first appearance
pub fn find_variables_in_template<S: AsRef<str>>(template: &str, allowed: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();

    REFERENCE
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .filter(|name| seen.insert(*name))
        .filter(|name| allowed.iter().any(|a| a.as_ref() == *name))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> TemplateValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitutes_known_variables() {
        let message = generate_message(
            "Hi {{first}} {{last}}!",
            &values(&[("first", "Ada"), ("last", "Lovelace")]),
        );
        assert_eq!(message, "Hi Ada Lovelace!");
    }

    #[test]
    fn test_unmapped_and_empty_become_empty() {
        let message = generate_message("[{{a}}][{{b}}]", &values(&[("a", "")]));
        assert_eq!(message, "[][]");
    }

    #[test]
    fn test_repeated_placeholder_replaced_everywhere() {
        let message = generate_message("{{x}}-{{x}}-{{x}}", &values(&[("x", "1")]));
        assert_eq!(message, "1-1-1");
    }

    #[test]
    fn test_leaves_other_text_untouched() {
        let template = "{single} {{with space}} {{}} {{ok}";
        assert_eq!(generate_message(template, &values(&[])), template);
    }

    #[test]
    fn test_replacement_is_not_rescanned() {
        let message = generate_message("{{a}}", &values(&[("a", "{{b}}"), ("b", "no")]));
        assert_eq!(message, "{{b}}");
    }

    #[test]
    fn test_find_variables_filters_to_allowed() {
        let found = find_variables_in_template("Hi {{first}} {{unknown}}", &["first", "last"]);
        assert_eq!(found, vec!["first"]);
    }

    #[test]
    fn test_find_variables_dedupes_in_first_appearance_order() {
        let found = find_variables_in_template(
            "{{b}} {{a}} {{b}} {{c}} {{a}}",
            &["a", "b", "c"],
        );
        assert_eq!(found, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_find_variables_accepts_non_word_names() {
        let found = find_variables_in_template("{{first-name}}", &["first-name"]);
        assert_eq!(found, vec!["first-name"]);
    }
}
