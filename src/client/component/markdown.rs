use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Renders announcement Markdown to HTML.
///
/// Raw HTML in the source is emitted as escaped text.
pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[component]
pub fn Markdown(source: String, class: Option<&'static str>) -> Element {
    let class: &str = class.unwrap_or_default();
    let rendered = render_markdown(&source);

    rsx!(
        div {
            class: "markdown {class}",
            dangerous_inner_html: "{rendered}",
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown() {
        let html = render_markdown("**Kuliah Maghrib**\n\n- Ahad\n- Rabu");

        assert!(html.contains("<strong>Kuliah Maghrib</strong>"));
        assert!(html.contains("<li>Ahad</li>"));
    }

    #[test]
    fn escapes_raw_html() {
        let html = render_markdown("<script>alert(1)</script>");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
