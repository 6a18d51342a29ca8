//! Templates on a fixed near-black backdrop, with the category colors as
//! highlights.

use super::RenderData;
use super::footer::{FooterTheme, footer};
use maud::{Markup, html};

pub(super) const DARK_CSS: &str = include_str!("../../static/templates/dark.css");
pub(super) const NEON_CSS: &str = include_str!("../../static/templates/neon.css");
pub(super) const CODE_CSS: &str = include_str!("../../static/templates/code.css");
pub(super) const TERMINAL_CSS: &str = include_str!("../../static/templates/terminal.css");
pub(super) const RETRO_CSS: &str = include_str!("../../static/templates/retro.css");

/// Longest title shown inside the code snippet before it is cut with `...`.
const CODE_TITLE_CHARS: usize = 40;

pub(super) fn dark(data: &RenderData) -> Markup {
    html! {
        div.accent-bar {}
        div.bg-shape {}
        div.icon-badge { (data.icon) }
        div.category { (data.category_label) }
        div.title { (data.title) }
        div.footer { (footer(data, FooterTheme::Dark)) }
    }
}

/// Grid backdrop with a glowing accent line and icon.
pub(super) fn neon(data: &RenderData) -> Markup {
    html! {
        div.grid-bg {}
        div.glow-line {}
        div.content {
            div.icon-glow { (data.icon) }
            div.category { (data.category_label) }
            div.title { (data.title) }
        }
        div.footer { (footer(data, FooterTheme::Dark)) }
    }
}

/// Editor window with the article described as an object literal.
pub(super) fn code(data: &RenderData) -> Markup {
    html! {
        div.title-bar {
            div.dot.red {}
            div.dot.yellow {}
            div.dot.green {}
        }
        div.content {
            div.category-badge { (data.icon) " " (data.category_label) }
            div.title { (data.title) }
            div.code-line {
                span.keyword { "const" } " " span.function { "article" } " = {"
            }
            div.code-line.indent {
                span.string { "title" } ": "
                span.string { "\"" (truncate(&data.title, CODE_TITLE_CHARS)) "\"" } ","
            }
            div.code-line.indent {
                span.string { "readTime" } ": "
                span.string { "\"" (data.read_time) " min\"" }
            }
            div.code-line { "};" }
            div.code-line.comment { "// Read the full article →" }
        }
        div.footer { (footer(data, FooterTheme::Dark)) }
    }
}

pub(super) fn terminal(data: &RenderData) -> Markup {
    html! {
        div.scanlines {}
        div.tab-bar {
            span.tab.active { (data.icon) " " (data.category_label) }
            span.tab { "zsh" }
        }
        div.terminal {
            div.line { span.dim { "# " (data.category_label) } }
            div.line {
                span.prompt { "$" } " cat " span.str { "article.md" } " " span.flag { "--title" }
            }
            div.line { span.str { "\"" (data.title) "\"" } }
            div.line {}
            div.line { span.prompt { "$" } " read " span.flag { "--estimate" } }
            div.line { "⏱️  " (data.read_time) " min" }
            div.line {}
            div.line { span.prompt { "$" } " " span.cursor {} }
        }
        div.footer { (footer(data, FooterTheme::Dark)) }
    }
}

/// CRT monitor look: scanlines, striped bands and a blinking prompt.
pub(super) fn retro(data: &RenderData) -> Markup {
    html! {
        div.scanlines {}
        div.noise {}
        div.stripe-top {}
        div.stripe-bottom {}
        div.content {
            div.header-line { "/// " (data.brand) " ///" }
            div.icon-text { (data.icon) }
            div.category { (data.category_label) }
            div.title { (data.title) }
            div.blink-line { "> READ MORE _ ⏱️ " (data.read_time) " min" }
        }
        div.footer { (footer(data, FooterTheme::Dark)) }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
