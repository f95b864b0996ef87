//! String transformation utilities for file naming

/// Convert a string to kebab-case
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            // Add dash before uppercase letter if:
            // - Not at the start
            // - Previous character was lowercase
            if i > 0 && prev_is_lowercase {
                result.push('-');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase();
        } else if ch == '-' || ch == '_' || ch == ' ' {
            if !result.is_empty() && !result.ends_with('-') {
                result.push('-');
            }
            prev_is_lowercase = false;
        }
    }

    result.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("codeReviewer"), "code-reviewer");
        assert_eq!(to_kebab_case("CodeReviewer"), "code-reviewer");
        assert_eq!(to_kebab_case("code-reviewer"), "code-reviewer");
        assert_eq!(to_kebab_case("code_reviewer"), "code-reviewer");
        assert_eq!(to_kebab_case("code reviewer"), "code-reviewer");
        assert_eq!(to_kebab_case("HTTPAgent"), "httpagent");
        assert_eq!(to_kebab_case("agent 007"), "agent-007");
    }

    #[test]
    fn test_to_kebab_case_strips_punctuation() {
        assert_eq!(to_kebab_case("a.b/c"), "abc");
        assert_eq!(to_kebab_case("--edge--"), "edge");
        assert_eq!(to_kebab_case(""), "");
    }
}
