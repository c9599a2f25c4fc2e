//! HTML serialization of a [`Page`].

use std::fmt::Write;

use super::dom::{Element, Node};
use super::page::Page;

const VOID_ELEMENTS: [&str; 4] = ["img", "meta", "link", "br"];

/// Escape HTML special characters for text and attribute values.
pub fn html_escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {name}=\"{}\"", html_escape(value));
}

fn write_element(out: &mut String, el: &Element) {
    let _ = write!(out, "<{}", el.tag);
    if let Some(id) = &el.id {
        write_attr(out, "id", id);
    }
    if !el.classes.is_empty() {
        write_attr(out, "class", &el.classes.join(" "));
    }
    for (name, value) in &el.attrs {
        write_attr(out, name, value);
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&el.tag) {
        return;
    }

    for child in &el.children {
        match child {
            Node::Element(child) => write_element(out, child),
            Node::Text(text) => out.push_str(&html_escape(text)),
            Node::Raw(markup) => out.push_str(markup),
        }
    }
    let _ = write!(out, "</{}>", el.tag);
}

/// Serialize an element subtree.
pub fn element_to_html(el: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, el);
    out
}

impl Page {
    /// Serialize the full document.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n");
        let _ = write!(out, "<html lang=\"{}\"", html_escape(self.lang));
        if !self.root_style().is_empty() {
            let style = self
                .root_style()
                .iter()
                .map(|(name, value)| format!("{name}: {value};"))
                .collect::<Vec<_>>()
                .join(" ");
            write_attr(&mut out, "style", &style);
        }
        out.push_str(">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        let _ = writeln!(out, "<title>{}</title>", html_escape(&self.title));
        if let Some(href) = &self.stylesheet {
            let _ = writeln!(out, "<link rel=\"stylesheet\" href=\"{}\">", html_escape(href));
        }
        out.push_str("</head>\n");
        out.push_str(&element_to_html(&self.body));
        out.push_str("\n</html>\n");
        out
    }
}
