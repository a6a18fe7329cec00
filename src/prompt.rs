//! Prompt templates: a fixed system prompt bound to a parameterised human turn
//!
//! Placeholders are written `{name}`. Literal braces are escaped as `{{` and `}}`.

use crate::error::{Error, Result};
use crate::openrouter::Message;
use std::collections::HashMap;

/// Named system prompt plus human-turn template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    /// Template name, used in errors and logs
    pub name: String,
    /// System prompt, sent verbatim
    pub system: String,
    /// Human-turn template with `{variable}` placeholders
    pub human: String,
}

impl PromptTemplate {
    /// Create a new template
    pub fn new(name: impl Into<String>, system: impl Into<String>, human: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            system: system.into(),
            human: human.into(),
        }
    }

    /// Template whose human turn is the raw `{input}`
    pub fn passthrough(name: impl Into<String>, system: impl Into<String>) -> Self {
        Self::new(name, system, "{input}")
    }

    /// Variables referenced by the human template, in order of first use
    pub fn variables(&self) -> Vec<String> {
        let mut names = Vec::new();
        for segment in parse(&self.human) {
            if let Segment::Variable(name) = segment {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
        names
    }

    /// Render the human turn
    pub fn render_human(&self, vars: &HashMap<&str, &str>) -> Result<String> {
        let mut out = String::with_capacity(self.human.len());
        for segment in parse(&self.human) {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Brace(c) => out.push(c),
                Segment::Variable(name) => {
                    let value = vars
                        .get(name)
                        .ok_or_else(|| Error::template(&self.name, name))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }

    /// Render the `[system, user]` message pair
    pub fn render(&self, vars: &HashMap<&str, &str>) -> Result<Vec<Message>> {
        Ok(vec![
            Message::system(&self.system),
            Message::user(self.render_human(vars)?),
        ])
    }

    /// Render a passthrough-style template for a single input
    pub fn render_input(&self, input: &str) -> Result<Vec<Message>> {
        self.render(&HashMap::from([("input", input)]))
    }
}

enum Segment<'a> {
    Literal(&'a str),
    Brace(char),
    Variable(&'a str),
}

fn parse(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        if pos > 0 {
            segments.push(Segment::Literal(&rest[..pos]));
        }
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            segments.push(Segment::Brace('{'));
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            segments.push(Segment::Brace('}'));
            rest = &tail[2..];
        } else if tail.starts_with('{') {
            match tail.find('}') {
                Some(end) if is_identifier(&tail[1..end]) => {
                    segments.push(Segment::Variable(&tail[1..end]));
                    rest = &tail[end + 1..];
                }
                // Not a placeholder; keep the brace as text
                _ => {
                    segments.push(Segment::Brace('{'));
                    rest = &tail[1..];
                }
            }
        } else {
            segments.push(Segment::Brace('}'));
            rest = &tail[1..];
        }
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    segments
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openrouter::Role;

    #[test]
    fn test_render_message_pair() {
        let template = PromptTemplate::new(
            "explain",
            "You are an expert teacher who explains concepts simply.",
            "Explain {topic} in 2-3 sentences for a beginner.",
        );
        let messages = template
            .render(&HashMap::from([("topic", "neural networks")]))
            .unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, "You are an expert teacher who explains concepts simply.");
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(
            messages[1].content,
            "Explain neural networks in 2-3 sentences for a beginner."
        );
    }

    #[test]
    fn test_missing_variable() {
        let template = PromptTemplate::new("quiz", "sys", "Q: {question}\nA: {answer}");
        let err = template
            .render(&HashMap::from([("question", "Why?")]))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Template { ref template, ref variable } if template == "quiz" && variable == "answer"
        ));
    }

    #[test]
    fn test_variables_in_order_without_duplicates() {
        let template = PromptTemplate::new("t", "sys", "{b} then {a} then {b}");
        assert_eq!(template.variables(), vec!["b", "a"]);
    }

    #[test]
    fn test_escaped_and_stray_braces() {
        let template = PromptTemplate::new("code", "sys", "fn {name}() {{ }} {not a var} }");
        let rendered = template
            .render_human(&HashMap::from([("name", "main")]))
            .unwrap();
        assert_eq!(rendered, "fn main() { } {not a var} }");
    }

    #[test]
    fn test_values_are_not_reinterpreted() {
        let template = PromptTemplate::passthrough("echo", "sys");
        let messages = template.render_input("use {input} literally").unwrap();
        assert_eq!(messages[1].content, "use {input} literally");
    }
}
