//! Inline `style` attribute handling.
//!
//! The template's spans carry their visible styling as a `style="k:v;k:v"`
//! declaration list. Modeled as an explicit ordered mapping so mutations
//! (stroke stripping in particular) operate on keys, not on raw strings.

use std::fmt;

/// An ordered list of CSS declarations from an inline `style` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    decls: Vec<(String, String)>,
}

impl Style {
    /// Parses a declaration list, trimming whitespace and discarding
    /// fragments without a key or value.
    pub fn parse(value: &str) -> Self {
        let decls = value
            .split(';')
            .filter_map(parse_decl)
            .map(|(key, val)| (key.to_string(), val.to_string()))
            .collect();
        Self { decls }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Sets a declaration, replacing an existing one in place so it keeps
    /// its position in the serialized list.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.decls.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.decls.push((key.to_string(), value.to_string())),
        }
    }

    /// Removes every declaration whose key satisfies the predicate.
    pub fn remove_matching<F: Fn(&str) -> bool>(&mut self, predicate: F) {
        self.decls.retain(|(key, _)| !predicate(key));
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.decls.iter().enumerate() {
            if index > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}:{}", key, value)?;
        }
        Ok(())
    }
}

fn parse_decl(fragment: &str) -> Option<(&str, &str)> {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return None;
    }
    let (key, value) = fragment.split_once(':')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// True for `stroke` and every `stroke-*` paint property.
pub fn is_stroke_property(key: &str) -> bool {
    key == "stroke" || key.starts_with("stroke-")
}
