//! Inline style declarations (`name: value; name: value`)

use indexmap::IndexMap;
use logos::Logos;

/// Style property name -> value, in declaration order
pub type StyleMap = IndexMap<String, String>;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum DeclToken {
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[regex(r"[^;:]+")]
    Text,
}

/// Parse an inline style attribute into a property map
///
/// Only the first `:` of a declaration separates name from value, so values
/// like `url(http://...)` survive. Declarations with an empty name are skipped.
pub fn parse_css_rules(text: &str) -> StyleMap {
    let mut rules = StyleMap::new();
    let mut name = String::new();
    let mut value = String::new();
    let mut in_value = false;

    let mut lexer = DeclToken::lexer(text);
    while let Some(token) = lexer.next() {
        match token {
            Ok(DeclToken::Semicolon) => {
                push_rule(&mut rules, &name, &value);
                name.clear();
                value.clear();
                in_value = false;
            }
            Ok(DeclToken::Colon) if !in_value => in_value = true,
            _ if in_value => value.push_str(lexer.slice()),
            _ => name.push_str(lexer.slice()),
        }
    }
    push_rule(&mut rules, &name, &value);

    rules
}

fn push_rule(rules: &mut StyleMap, name: &str, value: &str) {
    let name = name.trim();
    if name.is_empty() {
        return;
    }
    rules.insert(name.to_string(), value.trim().to_string());
}

/// Serialize a property map back into inline style text
pub fn format_css_rules(rules: &StyleMap) -> String {
    rules
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect::<Vec<_>>()
        .join("; ")
}
