//! The host page: a fixed layout addressed by element ids.

use super::dom::Element;
use crate::error::{LinkError, Result};
use crate::locale::Locale;
use crate::profile::DEFAULT_AVATAR;

/// Element ids the renderer writes to.
pub mod ids {
    pub const STATUS: &str = "status";
    pub const AVATAR: &str = "avatar";
    pub const NAME: &str = "name";
    pub const TAGLINE: &str = "tagline";
    pub const SOCIAL_LINKS: &str = "social-links";
    pub const CTA_LIST: &str = "cta-list";
    pub const FOOTER_LINE_1: &str = "footer-line-1";
    pub const FOOTER_LINE_2: &str = "footer-line-2";
    pub const FOOTER_CTA: &str = "footer-cta";
    pub const FOOTER: &str = "footer";

    /// Every id the page must provide.
    pub const ALL: [&str; 10] = [
        STATUS,
        AVATAR,
        NAME,
        TAGLINE,
        SOCIAL_LINKS,
        CTA_LIST,
        FOOTER_LINE_1,
        FOOTER_LINE_2,
        FOOTER_CTA,
        FOOTER,
    ];
}

/// Page state: document title, root style variables and the body tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub lang: &'static str,
    /// Stylesheet linked from the head.
    pub stylesheet: Option<String>,
    /// Custom properties set on the root element, in order of first set.
    root_style: Vec<(String, String)>,
    pub body: Element,
}

impl Page {
    /// Build the empty host page with the loading banner visible.
    pub fn new(locale: Locale) -> Self {
        let header = Element::new("header")
            .with_class("profile")
            .with_child(
                Element::new("img")
                    .with_id(ids::AVATAR)
                    .with_class("avatar")
                    .with_attr("src", DEFAULT_AVATAR)
                    .with_attr("alt", ""),
            )
            .with_child(Element::new("h1").with_id(ids::NAME).with_class("name"))
            .with_child(Element::new("p").with_id(ids::TAGLINE).with_class("tagline"))
            .with_child(
                Element::new("nav")
                    .with_id(ids::SOCIAL_LINKS)
                    .with_class("social-links"),
            );

        let footer = Element::new("footer")
            .with_id(ids::FOOTER)
            .with_class("footer")
            .with_child(Element::new("p").with_id(ids::FOOTER_LINE_1))
            .with_child(Element::new("p").with_id(ids::FOOTER_LINE_2))
            .with_child(
                Element::new("a")
                    .with_id(ids::FOOTER_CTA)
                    .with_class("footer-cta")
                    .with_class("hidden")
                    .with_attr("target", "_blank")
                    .with_attr("rel", "noopener"),
            );

        let main = Element::new("main")
            .with_class("page")
            .with_child(
                Element::new("div")
                    .with_id(ids::STATUS)
                    .with_class("status-chip")
                    .with_attr("role", "status")
                    .with_text(locale.loading()),
            )
            .with_child(header)
            .with_child(
                Element::new("section")
                    .with_id(ids::CTA_LIST)
                    .with_class("cta-list"),
            )
            .with_child(footer);

        Self {
            title: String::from("Links"),
            lang: locale.html_lang(),
            stylesheet: Some(String::from("styles.css")),
            root_style: Vec::new(),
            body: Element::new("body").with_child(main),
        }
    }

    /// Set the body `data-profile-id` attribute.
    #[must_use]
    pub fn with_profile_attribute(mut self, id: &str) -> Self {
        self.body.set_attr("data-profile-id", id);
        self
    }

    #[must_use]
    pub fn with_stylesheet(mut self, href: Option<String>) -> Self {
        self.stylesheet = href;
        self
    }

    /// The body `data-profile-id` attribute.
    pub fn profile_attribute(&self) -> Option<&str> {
        self.body.attr("data-profile-id")
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.body.find(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Result<&mut Element> {
        self.body
            .find_mut(id)
            .ok_or_else(|| LinkError::MissingElement { id: id.to_string() })
    }

    /// Set a custom property on the root element, e.g. `--accent`.
    pub fn set_style_property(&mut self, name: &str, value: &str) {
        match self.root_style.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.root_style.push((name.to_string(), value.to_string())),
        }
    }

    pub fn style_property(&self, name: &str) -> Option<&str> {
        self.root_style
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn root_style(&self) -> &[(String, String)] {
        &self.root_style
    }
}
