//! The XPath subset used to anchor signatures.
//!
//! Supported: absolute (`/a/b`) and descendant (`//b`, `/a//b`) steps, name
//! tests by local name or `*`, and attribute equality predicates
//! (`[@Id='x']`, `[@Id="x"]`). Prefixes in name tests are ignored.

use super::XmlError;
use super::node::{Element, Node, local_part};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    descendant: bool,
    name: Option<String>,
    predicates: Vec<(String, String)>,
}

impl Step {
    fn matches(&self, element: &Element) -> bool {
        if let Some(name) = &self.name {
            if element.local_name() != name {
                return false;
            }
        }
        self.predicates
            .iter()
            .all(|(attr, value)| element.attr(attr) == Some(value.as_str()))
    }
}

/// A compiled expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XPath {
    steps: Vec<Step>,
}

impl XPath {
    pub fn parse(expr: &str) -> Result<Self, XmlError> {
        let unsupported = || XmlError::new(format!("unsupported XPath expression: {expr}"));
        let mut rest = expr.trim();
        if !rest.starts_with('/') {
            return Err(unsupported());
        }

        let mut steps = Vec::new();
        while !rest.is_empty() {
            let descendant = if let Some(r) = rest.strip_prefix("//") {
                rest = r;
                true
            } else if let Some(r) = rest.strip_prefix('/') {
                rest = r;
                false
            } else {
                return Err(unsupported());
            };

            let end = step_end(rest).ok_or_else(unsupported)?;
            let (step, tail) = rest.split_at(end);
            rest = tail;

            let (name_test, preds) = match step.find('[') {
                Some(i) => step.split_at(i),
                None => (step, ""),
            };
            if name_test.is_empty() {
                return Err(unsupported());
            }
            let name = match name_test {
                "*" => None,
                n => Some(local_part(n).to_string()),
            };
            steps.push(Step {
                descendant,
                name,
                predicates: parse_predicates(preds).ok_or_else(unsupported)?,
            });
        }
        if steps.is_empty() {
            return Err(unsupported());
        }
        Ok(Self { steps })
    }

    /// Child-index path (from `root`) of the first match in document order.
    pub fn find_first(&self, root: &Element) -> Option<Vec<usize>> {
        let mut found = None;
        // The root is the only child of the document node.
        let mut path = Vec::new();
        self.walk_root(root, &mut path, &mut found);
        found
    }

    fn walk_root(&self, root: &Element, path: &mut Vec<usize>, found: &mut Option<Vec<usize>>) {
        let first = &self.steps[0];
        if first.matches(root) {
            self.walk(root, 1, path, found);
        }
        if found.is_none() && first.descendant {
            self.descend(root, 0, path, found);
        }
    }

    /// `element` matched step `i - 1`; continue with step `i`.
    fn walk(&self, element: &Element, i: usize, path: &mut Vec<usize>, found: &mut Option<Vec<usize>>) {
        if found.is_some() {
            return;
        }
        let Some(step) = self.steps.get(i) else {
            *found = Some(path.clone());
            return;
        };
        if step.descendant {
            self.descend(element, i, path, found);
        } else {
            for (idx, child) in element.children.iter().enumerate() {
                if let Node::Element(e) = child {
                    if step.matches(e) {
                        path.push(idx);
                        self.walk(e, i + 1, path, found);
                        path.pop();
                        if found.is_some() {
                            return;
                        }
                    }
                }
            }
        }
    }

    /// Try step `i` against every descendant of `element`, in document order.
    fn descend(&self, element: &Element, i: usize, path: &mut Vec<usize>, found: &mut Option<Vec<usize>>) {
        for (idx, child) in element.children.iter().enumerate() {
            if found.is_some() {
                return;
            }
            if let Node::Element(e) = child {
                path.push(idx);
                if self.steps[i].matches(e) {
                    self.walk(e, i + 1, path, found);
                }
                if found.is_none() {
                    self.descend(e, i, path, found);
                }
                path.pop();
            }
        }
    }
}

/// Byte offset where the current step ends (next `/` outside brackets).
fn step_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '[') => depth += 1,
            (None, ']') => depth = depth.checked_sub(1)?,
            (None, '/') if depth == 0 => return Some(i),
            _ => {}
        }
    }
    (depth == 0 && quote.is_none()).then_some(s.len())
}

fn parse_predicates(mut s: &str) -> Option<Vec<(String, String)>> {
    let mut out = Vec::new();
    while !s.is_empty() {
        let inner_start = s.strip_prefix("[@")?;
        let eq = inner_start.find('=')?;
        let attr = inner_start[..eq].trim();
        let after = inner_start[eq + 1..].trim_start();
        let q = after.chars().next().filter(|c| *c == '\'' || *c == '"')?;
        let value_and_rest = &after[1..];
        let close = value_and_rest.find(q)?;
        let value = &value_and_rest[..close];
        s = value_and_rest[close + 1..].trim_start().strip_prefix(']')?;
        if attr.is_empty() {
            return None;
        }
        out.push((attr.to_string(), value.to_string()));
    }
    Some(out)
}
