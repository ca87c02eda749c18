use anyhow::Result;
use serde_json::Value;

use crate::logic::validate::escape_html;

/// The rendering collaborator: a named view plus a data context in,
/// a response body out. The server only depends on this seam; swapping
/// in a real template engine is a drop-in replacement.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &str, context: &Value) -> Result<String>;
}

/// Plain HTML renderer. Emits a page shell with the context laid out as
/// sections: the `title` key becomes the heading, `errors` becomes a
/// message list, everything else renders as lists and definition lists.
pub struct HtmlRenderer;

impl ViewRenderer for HtmlRenderer {
    fn render(&self, view: &str, context: &Value) -> Result<String> {
        let title = context.get("title").and_then(Value::as_str).unwrap_or(view);

        let mut page = String::new();
        page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<title>");
        page.push_str(&escape_html(title));
        page.push_str("</title>\n<link rel=\"stylesheet\" href=\"/static/style.css\">\n");
        page.push_str("</head>\n<body>\n<h1>");
        page.push_str(&escape_html(title));
        page.push_str("</h1>\n");

        if let Some(errors) = context.get("errors").and_then(Value::as_array) {
            page.push_str("<ul class=\"errors\">\n");
            for error in errors {
                let message = error
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                page.push_str("<li>");
                page.push_str(&escape_html(message));
                page.push_str("</li>\n");
            }
            page.push_str("</ul>\n");
        }

        if let Some(object) = context.as_object() {
            for (key, value) in object {
                if key == "title" || key == "errors" {
                    continue;
                }
                page.push_str("<section id=\"");
                page.push_str(&escape_html(key));
                page.push_str("\">\n");
                render_value(&mut page, value);
                page.push_str("</section>\n");
            }
        }

        page.push_str("</body>\n</html>\n");
        Ok(page)
    }
}

fn render_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => {
            out.push_str("<p>");
            out.push_str(if *b { "true" } else { "false" });
            out.push_str("</p>\n");
        }
        Value::Number(n) => {
            out.push_str("<p>");
            out.push_str(&n.to_string());
            out.push_str("</p>\n");
        }
        Value::String(s) => {
            out.push_str("<p>");
            out.push_str(&escape_html(s));
            out.push_str("</p>\n");
        }
        Value::Array(items) => {
            out.push_str("<ul>\n");
            for item in items {
                out.push_str("<li>");
                render_inline(out, item);
                out.push_str("</li>\n");
            }
            out.push_str("</ul>\n");
        }
        Value::Object(map) => {
            out.push_str("<dl>\n");
            for (key, value) in map {
                out.push_str("<dt>");
                out.push_str(&escape_html(key));
                out.push_str("</dt>\n<dd>");
                render_inline(out, value);
                out.push_str("</dd>\n");
            }
            out.push_str("</dl>\n");
        }
    }
}

fn render_inline(out: &mut String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(&escape_html(s)),
        nested => render_value(out, nested),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_becomes_the_heading() {
        let body = HtmlRenderer
            .render("brand_list", &json!({ "title": "Brand List" }))
            .unwrap();
        assert!(body.contains("<h1>Brand List</h1>"));
    }

    #[test]
    fn falls_back_to_the_view_name_without_a_title() {
        let body = HtmlRenderer.render("brand_form", &json!({})).unwrap();
        assert!(body.contains("<h1>brand_form</h1>"));
    }

    #[test]
    fn error_messages_render_as_a_list() {
        let ctx = json!({
            "title": "Create Brand",
            "errors": [{ "field": "name", "message": "Name must be specified." }],
        });
        let body = HtmlRenderer.render("brand_form", &ctx).unwrap();
        assert!(body.contains("<ul class=\"errors\">"));
        assert!(body.contains("<li>Name must be specified.</li>"));
    }

    #[test]
    fn interpolated_text_is_escaped() {
        let ctx = json!({ "title": "X", "note": "<b>bold</b>" });
        let body = HtmlRenderer.render("view", &ctx).unwrap();
        assert!(body.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!body.contains("<b>bold</b>"));
    }

    #[test]
    fn counts_render_as_numbered_sections() {
        let ctx = json!({ "title": "Home", "brand_count": 2 });
        let body = HtmlRenderer.render("index", &ctx).unwrap();
        assert!(body.contains("<section id=\"brand_count\">\n<p>2</p>\n</section>"));
    }
}
