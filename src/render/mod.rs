//! Applies a [`ProfileView`] to the host [`Page`].
//!
//! Each step fully replaces what an earlier render wrote, so rendering again
//! with new data is safe.

pub mod dom;
mod html;
pub mod icons;
pub mod page;
pub mod status;

pub use dom::{Element, Node};
pub use html::{element_to_html, html_escape};
pub use page::{Page, ids};
pub use status::{hide_status, show_status};

use tracing::{debug, trace};

use crate::error::Result;
use crate::locale::Locale;
use crate::profile::{ButtonGroups, ButtonView, FooterView, ProfileView, SocialView};

/// Set `--<key>` on the root for every theme entry; `None` leaves styling alone.
pub fn apply_theme(page: &mut Page, theme: Option<&[(String, String)]>) {
    let Some(theme) = theme else {
        return;
    };
    for (key, value) in theme {
        trace!(key, value, "Setting theme variable");
        page.set_style_property(&format!("--{key}"), value);
    }
}

/// Set an element's text; empty text hides it, anything else shows it.
pub fn set_text(page: &mut Page, id: &str, value: &str) -> Result<()> {
    let el = page.element_mut(id)?;
    el.set_text(value);
    el.toggle_class("hidden", value.is_empty());
    Ok(())
}

pub fn set_image(page: &mut Page, id: &str, url: &str) -> Result<()> {
    page.element_mut(id)?.set_attr("src", url);
    Ok(())
}

fn social_link(item: &SocialView) -> Element {
    let label = item
        .label
        .as_deref()
        .filter(|l| !l.is_empty())
        .or_else(|| item.icon.as_deref().filter(|i| !i.is_empty()))
        .unwrap_or("social");

    let mut link = Element::new("a")
        .with_class("social-link")
        .with_attr("href", &item.url)
        .with_attr("target", "_blank")
        .with_attr("rel", "noopener")
        .with_attr("aria-label", label);

    match item.icon.as_deref().and_then(icons::icon_for) {
        Some(svg) => link.append(Node::Raw(svg)),
        None => {
            let glyph = icons::fallback_glyph(item.icon.as_deref());
            link = link.with_child(Element::new("span").with_text(&glyph.to_string()));
        }
    }
    link
}

/// Rebuild the social icon row; the row is hidden when nothing is left.
pub fn render_social(page: &mut Page, list: &[SocialView]) -> Result<()> {
    let holder = page.element_mut(ids::SOCIAL_LINKS)?;
    holder.clear_children();
    for item in list {
        holder.append(Node::Element(social_link(item)));
    }
    let empty = holder.child_elements().next().is_none();
    holder.toggle_class("hidden", empty);
    Ok(())
}

fn button(btn: &ButtonView) -> Element {
    let mut link = Element::new("a").with_class("cta-card");
    if btn.outline {
        link.add_class("outline");
    }

    match &btn.href {
        Some(href) => {
            link.set_attr("href", href);
            link.set_attr("target", "_blank");
            link.set_attr("rel", "noopener");
        }
        None => {
            link.set_attr("href", "#");
            link.set_attr("aria-disabled", "true");
            link.add_class("locked");
        }
    }

    link.with_text(&btn.label)
}

/// Rebuild the button list: profile buttons, a divider, then common buttons.
pub fn render_buttons(page: &mut Page, groups: &ButtonGroups, locale: Locale) -> Result<()> {
    let list = page.element_mut(ids::CTA_LIST)?;
    list.clear_children();

    if groups.is_empty() {
        list.append(Node::Element(
            Element::new("div")
                .with_class("status-chip")
                .with_class("error")
                .with_text(locale.no_buttons()),
        ));
        return Ok(());
    }

    for btn in &groups.profile {
        list.append(Node::Element(button(btn)));
    }
    if groups.needs_divider() {
        list.append(Node::Element(Element::new("div").with_class("cta-divider")));
    }
    for btn in &groups.common {
        list.append(Node::Element(button(btn)));
    }
    Ok(())
}

/// Fill the footer lines and call-to-action; hide the block when all are empty.
pub fn render_footer(page: &mut Page, footer: &FooterView) -> Result<()> {
    set_text(page, ids::FOOTER_LINE_1, &footer.line1)?;
    set_text(page, ids::FOOTER_LINE_2, &footer.line2)?;

    let cta = page.element_mut(ids::FOOTER_CTA)?;
    match &footer.cta {
        Some(link) => {
            cta.set_text(&link.label);
            cta.set_attr("href", &link.href);
            cta.remove_class("hidden");
        }
        None => cta.add_class("hidden"),
    }

    page.element_mut(ids::FOOTER)?
        .toggle_class("hidden", !footer.is_visible());
    Ok(())
}

/// Render every part of the view into the page.
pub fn render_view(page: &mut Page, view: &ProfileView, locale: Locale) -> Result<()> {
    apply_theme(page, view.theme.as_deref());
    page.title.clone_from(&view.title);

    set_image(page, ids::AVATAR, &view.avatar)?;
    set_text(page, ids::NAME, &view.name)?;
    set_text(page, ids::TAGLINE, &view.tagline)?;

    render_social(page, &view.social)?;
    render_buttons(page, &view.buttons, locale)?;
    render_footer(page, &view.footer)?;

    debug!(profile_id = %view.id, "Rendered profile");
    Ok(())
}
