use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static DANGLING_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#",?\s*"(?:[^"\\]|\\.)*"\s*:\s*$"#).unwrap());
static TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",(\s*[}\]])").unwrap());
static END_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*$").unwrap());

/// Attempt to salvage a JSON string that was cut off mid-generation.
///
/// The happy path is untouched: if the text already parses, it is returned
/// unchanged. Otherwise the tail is rewritten, in order:
/// 1. drop an unterminated trailing string literal (escape-aware);
/// 2. drop a trailing object key that has a colon but no value;
/// 3. drop a trailing key literal left without its closing quote;
/// 4. drop trailing commas before closing delimiters and at the end;
/// 5. close the `{`/`[` still open at the end, innermost first, ignoring
///    delimiters that appear inside string values;
/// 6. drop any trailing comma the closing step exposed.
///
/// Repair never fabricates content: it only removes an incomplete tail and
/// balances delimiters. A failure to re-parse propagates the syntax error.
pub fn repair_truncated_json(raw: &str) -> Result<Value, serde_json::Error> {
    if let Ok(value) = serde_json::from_str(raw) {
        return Ok(value);
    }

    let mut text = strip_unterminated_string(raw);
    text = DANGLING_KEY.replace(&text, "").into_owned();
    text = strip_unterminated_string(&text);
    text = TRAILING_COMMA.replace_all(&text, "$1").into_owned();
    text = END_COMMA.replace(&text, "").into_owned();

    for delimiter in unclosed_delimiters(&text).into_iter().rev() {
        text.push(if delimiter == '{' { '}' } else { ']' });
    }
    let text = TRAILING_COMMA.replace_all(&text, "$1");

    serde_json::from_str(&text)
}

/// If the text ends inside a string literal (a quote opened but never
/// closed, accounting for escaped quotes), drop the literal together with
/// the comma and whitespace leading into it.
fn strip_unterminated_string(text: &str) -> String {
    let Some(open) = unterminated_string_start(text) else {
        return text.to_string();
    };

    let head = text[..open].trim_end();
    head.strip_suffix(',').unwrap_or(head).to_string()
}

/// Byte offset of the opening quote of a string left unterminated at the
/// end of `text`, if any.
fn unterminated_string_start(text: &str) -> Option<usize> {
    let mut in_string = false;
    let mut escaped = false;
    let mut open = 0;

    for (i, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => {
                if !in_string {
                    open = i;
                }
                in_string = !in_string;
            }
            _ => {}
        }
    }

    in_string.then_some(open)
}

/// Scan outside string literals and return the still-open `{`/`[`
/// delimiters in nesting order, outermost first.
fn unclosed_delimiters(text: &str) -> Vec<char> {
    let mut stack = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for ch in text.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            _ if in_string => {}
            '{' | '[' => stack.push(ch),
            '}' => {
                if stack.last() == Some(&'{') {
                    stack.pop();
                }
            }
            ']' => {
                if stack.last() == Some(&'[') {
                    stack.pop();
                }
            }
            _ => {}
        }
    }

    stack
}
