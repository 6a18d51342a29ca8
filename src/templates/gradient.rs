//! Templates drawn mostly with the category colors themselves.

use super::footer::{FooterTheme, footer};
use super::RenderData;
use maud::{Markup, html};

pub(super) const MINIMAL_CSS: &str = include_str!("../../static/templates/minimal.css");
pub(super) const GLASS_CSS: &str = include_str!("../../static/templates/glass.css");
pub(super) const MESH_CSS: &str = include_str!("../../static/templates/mesh.css");
pub(super) const DUOTONE_CSS: &str = include_str!("../../static/templates/duotone.css");
pub(super) const STACK_CSS: &str = include_str!("../../static/templates/stack.css");
pub(super) const WAVE_CSS: &str = include_str!("../../static/templates/wave.css");

/// Full-bleed gradient with the icon boxed in the top-right corner.
pub(super) fn minimal(data: &RenderData) -> Markup {
    html! {
        div.icon-box { (data.icon) }
        div.category { (data.category_label) }
        div.title { (data.title) }
        div.footer { (footer(data, FooterTheme::Dark)) }
    }
}

/// Frosted card floating over the gradient.
pub(super) fn glass(data: &RenderData) -> Markup {
    html! {
        div.bg-shape.shape-1 {}
        div.bg-shape.shape-2 {}
        div.glass-card {
            div.category { (data.icon) " " (data.category_label) }
            div.title { (data.title) }
            div.footer { (footer(data, FooterTheme::Dark)) }
        }
    }
}

/// Blurred radial blobs of both colors on a near-black backdrop.
pub(super) fn mesh(data: &RenderData) -> Markup {
    html! {
        div.mesh-gradient {}
        div.content {
            div.icon-float { (data.icon) }
            div.category { (data.category_label) }
            div.title { (data.title) }
        }
        div.footer-bar { (footer(data, FooterTheme::Dark)) }
    }
}

pub(super) fn duotone(data: &RenderData) -> Markup {
    html! {
        div.bg-left {}
        div.bg-right {}
        div.content {
            div.icon-row {
                div.icon-bg { (data.icon) }
                div.category { (data.category_label) }
            }
            div.title { (data.title) }
        }
        div.footer { (footer(data, FooterTheme::Dark)) }
    }
}

/// Two offset cards peeking out behind the main one.
pub(super) fn stack(data: &RenderData) -> Markup {
    html! {
        div.card-back-2 {}
        div.card-back-1 {}
        div.card-main {
            div.badge { (data.icon) " " (data.category_label) }
            div.title { (data.title) }
            div.card-footer { (footer(data, FooterTheme::Dark)) }
        }
    }
}

pub(super) fn wave(data: &RenderData) -> Markup {
    html! {
        div.top-glow {}
        div.wave.wave-3 {}
        div.wave.wave-2 {}
        div.wave.wave-1 {}
        div.content {
            div.badge {
                span { (data.icon) }
                span { (data.category_label) }
            }
            div.title { (data.title) }
        }
        div.footer { (footer(data, FooterTheme::Dark)) }
    }
}
