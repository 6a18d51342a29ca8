//! Print-inspired templates: panels, cards and frames, several on light paper.

use super::RenderData;
use super::footer::{FooterTheme, footer};
use maud::{Markup, html};

pub(super) const SPLIT_CSS: &str = include_str!("../../static/templates/split.css");
pub(super) const MAGAZINE_CSS: &str = include_str!("../../static/templates/magazine.css");
pub(super) const POLAROID_CSS: &str = include_str!("../../static/templates/polaroid.css");
pub(super) const BLUEPRINT_CSS: &str = include_str!("../../static/templates/blueprint.css");
pub(super) const OUTLINE_CSS: &str = include_str!("../../static/templates/outline.css");

/// Navy text panel next to a gradient panel holding a large icon.
pub(super) fn split(data: &RenderData) -> Markup {
    html! {
        div.left {
            div.category { (data.category_label) }
            div.title { (data.title) }
        }
        div.right {
            div.icon-large { (data.icon) }
        }
        div.footer-bar { (footer(data, FooterTheme::Dark)) }
    }
}

pub(super) fn magazine(data: &RenderData) -> Markup {
    html! {
        div.issue-number { "01" }
        div.eyebrow {
            span { (data.icon) }
            " " (data.category_label)
        }
        div.title { (data.title) }
        div.description { "A technical deep dive into " (data.category_label) }
        div.footer { (footer(data, FooterTheme::Light)) }
    }
}

/// Instant photo on a dotted table; the category is the photo, the title
/// the caption.
pub(super) fn polaroid(data: &RenderData) -> Markup {
    html! {
        div.bg-dots {}
        div.card {
            div.photo {
                span.photo-label { (data.category_label) }
                span.photo-icon { (data.icon) }
            }
            div.caption { (data.title) }
            div.meta-row { (footer(data, FooterTheme::Light)) }
        }
    }
}

pub(super) fn blueprint(data: &RenderData) -> Markup {
    html! {
        div.grid {}
        div.grid-major {}
        div.corner-mark.corner-tl {}
        div.corner-mark.corner-tr {}
        div.corner-mark.corner-bl {}
        div.corner-mark.corner-br {}
        div.dimension-line {}
        div.content {
            div.ref-number { "REF. " (data.category_label) }
            div.icon-circle { (data.icon) }
            div.title { (data.title) }
        }
        div.footer { (footer(data, FooterTheme::Dark)) }
    }
}

pub(super) fn outline(data: &RenderData) -> Markup {
    html! {
        div.border-frame {}
        div.accent-dot {}
        div.accent-dot-2 {}
        div.content {
            div.icon-outline { (data.icon) }
            div.category { (data.category_label) }
            div.title { (data.title) }
            div.accent-line {}
        }
        div.footer { (footer(data, FooterTheme::Light)) }
    }
}
