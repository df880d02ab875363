use once_cell::sync::Lazy;
use regex::Regex;

static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```(?:json)?").unwrap());

/// Remove markdown code fence markers the LLM sometimes adds despite the
/// instructions, then trim surrounding whitespace.
pub fn strip_fences(raw: &str) -> String {
    FENCE.replace_all(raw, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_json_fence() {
        let raw = "```json\n{\"test_cases\": []}\n```";
        assert_eq!(strip_fences(raw), "{\"test_cases\": []}");
    }

    #[test]
    fn test_strips_bare_fence() {
        let raw = "```\n{\"test_cases\": []}\n```";
        assert_eq!(strip_fences(raw), "{\"test_cases\": []}");
    }

    #[test]
    fn test_noop_on_clean_input() {
        let raw = "{\"test_cases\": []}";
        assert_eq!(strip_fences(raw), raw);
    }

    #[test]
    fn test_idempotent() {
        let raw = "```json\n{\"a\": 1}\n```";
        let once = strip_fences(raw);
        assert_eq!(strip_fences(&once), once);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(strip_fences("  \n{\"a\": 1}\n  "), "{\"a\": 1}");
    }
}
