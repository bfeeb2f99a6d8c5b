//! Message template binding.
//!
//! A template is text with named or numbered holes (`"{Queue} has {0}
//! messages"`). Binding pairs holes with positional arguments and produces
//! the rendered text plus one property per bound hole.
//!
//! Rules:
//! - `{{` and `}}` are literal braces
//! - if every hole is numbered, holes bind by index; otherwise each hole
//!   takes the next argument in order
//! - `{@name}` captures the value's structure, `{$name}` captures its string
//!   form, a bare `{name}` renders strings without quotes
//! - alignment and format suffixes (`{Elapsed,8:0.00}`) are accepted and ignored
//! - a hole with no argument stays in the text verbatim
//! - arguments left over after binding become `__0`, `__1`, ... properties

use serde_json::{Map, Value};

/// Result of binding a template to its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundTemplate {
    pub text: String,
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    Default,
    Destructure,
    Stringify,
}

#[derive(Debug)]
struct Hole<'a> {
    raw: &'a str,
    name: &'a str,
    capture: Capture,
}

impl Hole<'_> {
    fn index(&self) -> Option<usize> {
        self.name.parse().ok()
    }
}

#[derive(Debug)]
enum Token<'a> {
    Text(String),
    Hole(Hole<'a>),
}

/// Bind `template` to `args`.
pub fn bind(template: &str, args: &[Value]) -> BoundTemplate {
    let tokens = parse(template);
    let holes: Vec<&Hole<'_>> = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Hole(h) => Some(h),
            Token::Text(_) => None,
        })
        .collect();
    let by_index = !holes.is_empty() && holes.iter().all(|h| h.index().is_some());

    let mut text = String::with_capacity(template.len());
    let mut properties = Map::new();
    let mut used = vec![false; args.len()];
    let mut next = 0;

    for token in &tokens {
        match token {
            Token::Text(s) => text.push_str(s),
            Token::Hole(hole) => {
                let position = if by_index {
                    hole.index()
                } else {
                    next += 1;
                    Some(next - 1)
                };
                match position.and_then(|i| args.get(i).map(|v| (i, v))) {
                    Some((i, value)) => {
                        used[i] = true;
                        let (rendered, captured) = render(value, hole.capture);
                        text.push_str(&rendered);
                        properties.insert(hole.name.to_string(), captured);
                    }
                    None => text.push_str(hole.raw),
                }
            }
        }
    }

    for (i, value) in args.iter().enumerate() {
        if !used[i] {
            properties.insert(format!("__{}", i), value.clone());
        }
    }

    BoundTemplate { text, properties }
}

fn render(value: &Value, capture: Capture) -> (String, Value) {
    match (capture, value) {
        (Capture::Destructure, v) => (v.to_string(), v.clone()),
        (Capture::Stringify, Value::String(s)) => (s.clone(), Value::String(s.clone())),
        (Capture::Stringify, v) => {
            let s = v.to_string();
            (s.clone(), Value::String(s))
        }
        (Capture::Default, Value::String(s)) => (s.clone(), Value::String(s.clone())),
        (Capture::Default, v) => (v.to_string(), v.clone()),
    }
}

fn parse(template: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        literal.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            literal.push('{');
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            literal.push('}');
            rest = &tail[2..];
        } else if tail.starts_with('}') {
            literal.push('}');
            rest = &tail[1..];
        } else {
            match tail[1..].find(['{', '}']) {
                Some(end) if tail.as_bytes()[end + 1] == b'}' => {
                    let raw = &tail[..end + 2];
                    match parse_hole(raw) {
                        Some(hole) => {
                            if !literal.is_empty() {
                                tokens.push(Token::Text(std::mem::take(&mut literal)));
                            }
                            tokens.push(Token::Hole(hole));
                        }
                        None => literal.push_str(raw),
                    }
                    rest = &tail[end + 2..];
                }
                _ => {
                    literal.push('{');
                    rest = &tail[1..];
                }
            }
        }
    }
    literal.push_str(rest);
    if !literal.is_empty() {
        tokens.push(Token::Text(literal));
    }
    tokens
}

/// `raw` includes the enclosing braces.
fn parse_hole(raw: &str) -> Option<Hole<'_>> {
    let inner = &raw[1..raw.len() - 1];
    let (capture, body) = match inner.as_bytes().first() {
        Some(b'@') => (Capture::Destructure, &inner[1..]),
        Some(b'$') => (Capture::Stringify, &inner[1..]),
        _ => (Capture::Default, inner),
    };
    let name = body.split([',', ':']).next().unwrap_or_default();
    let valid = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
    valid.then_some(Hole { raw, name, capture })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_template_destructures() {
        let bound = bind("{@obj}", &[json!({ "id": 7 })]);
        assert_eq!(bound.text, r#"{"id":7}"#);
        assert_eq!(bound.properties["obj"], json!({ "id": 7 }));
    }

    #[test]
    fn test_destructured_string_keeps_quotes() {
        let bound = bind("{@obj}", &[json!("hello")]);
        assert_eq!(bound.text, "\"hello\"");
        assert_eq!(bound.properties["obj"], json!("hello"));
    }

    #[test]
    fn test_named_holes_bind_in_order() {
        let bound = bind(
            "{Queue} has {Count} messages",
            &[json!("orders"), json!(12)],
        );
        assert_eq!(bound.text, "orders has 12 messages");
        assert_eq!(bound.properties["Queue"], json!("orders"));
        assert_eq!(bound.properties["Count"], json!(12));
    }

    #[test]
    fn test_numbered_holes_bind_by_index() {
        let bound = bind("{1} before {0}", &[json!("a"), json!("b")]);
        assert_eq!(bound.text, "b before a");
    }

    #[test]
    fn test_escaped_braces() {
        let bound = bind("{{literal}} {Value}", &[json!(1)]);
        assert_eq!(bound.text, "{literal} 1");
        assert_eq!(bound.properties.len(), 1);
    }

    #[test]
    fn test_missing_argument_leaves_hole() {
        let bound = bind("{First} and {Second}", &[json!("x")]);
        assert_eq!(bound.text, "x and {Second}");
        assert!(!bound.properties.contains_key("Second"));
    }

    #[test]
    fn test_extra_arguments_become_positional_properties() {
        let bound = bind("no holes", &[json!(1), json!(2)]);
        assert_eq!(bound.text, "no holes");
        assert_eq!(bound.properties["__0"], json!(1));
        assert_eq!(bound.properties["__1"], json!(2));
    }

    #[test]
    fn test_stringify_capture() {
        let bound = bind("{$Payload}", &[json!([1, 2])]);
        assert_eq!(bound.text, "[1,2]");
        assert_eq!(bound.properties["Payload"], json!("[1,2]"));
    }

    #[test]
    fn test_format_suffix_is_ignored() {
        let bound = bind("took {Elapsed,8:0.00} ms", &[json!(1.5)]);
        assert_eq!(bound.text, "took 1.5 ms");
        assert!(bound.properties.contains_key("Elapsed"));
    }

    #[test]
    fn test_malformed_braces_are_literal() {
        let bound = bind("open { and } close {not a hole}", &[]);
        assert_eq!(bound.text, "open { and } close {not a hole}");
        assert!(bound.properties.is_empty());
    }

    #[test]
    fn test_unclosed_hole_is_literal() {
        let bound = bind("value {Name", &[json!("x")]);
        assert_eq!(bound.text, "value {Name");
        assert_eq!(bound.properties["__0"], json!("x"));
    }
}
