//! Canonical XML 1.0 without comments
//! (<http://www.w3.org/TR/2001/REC-xml-c14n-20010315>).
//!
//! Operates on an [`Element`] subtree. Namespaces declared on ancestors are
//! passed in as `inherited` and rendered on the apex, as the inclusive
//! algorithm requires for document subsets.

use std::collections::BTreeMap;

use super::node::{Element, Node, local_part};

/// In-scope namespace bindings: prefix (`""` for the default) to URI.
pub type Namespaces = BTreeMap<String, String>;

/// Namespace declarations made by an element's own attributes.
pub fn declared_namespaces(element: &Element) -> impl Iterator<Item = (&str, &str)> {
    element.attributes.iter().filter_map(|(k, v)| {
        if k == "xmlns" {
            Some(("", v.as_str()))
        } else {
            k.strip_prefix("xmlns:").map(|p| (p, v.as_str()))
        }
    })
}

/// Bindings in scope at the element reached by `path` from `root`, excluding
/// the element's own declarations.
pub fn namespaces_at(root: &Element, path: &[usize]) -> Namespaces {
    let mut scope = Namespaces::new();
    let mut current = root;
    for &i in path {
        for (p, uri) in declared_namespaces(current) {
            scope.insert(p.to_string(), uri.to_string());
        }
        match current.children.get(i) {
            Some(Node::Element(e)) => current = e,
            _ => break,
        }
    }
    scope
}

/// Canonical form of `element` given the bindings inherited from its ancestors.
pub fn canonicalize(element: &Element, inherited: &Namespaces) -> String {
    let mut out = String::new();
    // Nothing has been rendered above the apex.
    render(element, inherited, &Namespaces::new(), &mut out);
    out
}

fn render(element: &Element, parent_scope: &Namespaces, parent_rendered: &Namespaces, out: &mut String) {
    let mut scope = parent_scope.clone();
    for (p, uri) in declared_namespaces(element) {
        scope.insert(p.to_string(), uri.to_string());
    }

    // A binding is emitted unless the nearest rendered ancestor already
    // emitted the same one. An empty default is only emitted to undo a
    // rendered non-empty default.
    let mut rendered = parent_rendered.clone();
    let mut ns_out: Vec<(&str, &str)> = Vec::new();
    for (p, uri) in &scope {
        let already = parent_rendered.get(p).map(String::as_str);
        let emit = match (p.as_str(), uri.as_str()) {
            ("", "") => already.is_some_and(|u| !u.is_empty()),
            _ => already != Some(uri.as_str()),
        };
        if emit {
            ns_out.push((p, uri));
            rendered.insert(p.clone(), uri.clone());
        }
    }

    let mut attrs: Vec<(&str, &str, &str)> = element
        .attributes
        .iter()
        .filter(|(k, _)| k != "xmlns" && !k.starts_with("xmlns:"))
        .map(|(k, v)| {
            let ns_uri = match k.split_once(':') {
                Some(("xml", _)) => "http://www.w3.org/XML/1998/namespace",
                Some((p, _)) => scope.get(p).map(String::as_str).unwrap_or(""),
                None => "",
            };
            (ns_uri, k.as_str(), v.as_str())
        })
        .collect();
    attrs.sort_by(|a, b| (a.0, local_part(a.1)).cmp(&(b.0, local_part(b.1))));

    out.push('<');
    out.push_str(&element.name);
    // BTreeMap order puts the default ("") first, then prefixes.
    for (p, uri) in ns_out {
        if p.is_empty() {
            out.push_str(" xmlns=\"");
        } else {
            out.push_str(" xmlns:");
            out.push_str(p);
            out.push_str("=\"");
        }
        escape_attr(uri, out);
        out.push('"');
    }
    for (_, name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_attr(value, out);
        out.push('"');
    }
    out.push('>');

    for child in &element.children {
        match child {
            Node::Element(e) => render(e, &scope, &rendered, out),
            Node::Text(t) => escape_text(t, out),
        }
    }

    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#xD;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            _ => out.push(c),
        }
    }
}
