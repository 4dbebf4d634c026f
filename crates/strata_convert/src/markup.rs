//! Markdown and HTML converters.

use pulldown_cmark::{Options, Parser, html::push_html};
use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// `html` renders CommonMark; `txt` and everything else returns the source.
pub(crate) fn markdown(data: Vec<u8>, ext: &str) -> Result<Vec<u8>, String> {
    if ext != "html" {
        return Ok(data);
    }
    let source = String::from_utf8_lossy(&data);
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let mut rendered = String::with_capacity(source.len() * 3 / 2);
    push_html(&mut rendered, Parser::new_ext(&source, options));
    Ok(rendered.into_bytes())
}

/// `txt` strips tags and collapses whitespace; everything else returns the source.
pub(crate) fn html(data: Vec<u8>, ext: &str) -> Result<Vec<u8>, String> {
    if ext != "txt" {
        return Ok(data);
    }
    let source = String::from_utf8_lossy(&data);
    let stripped = TAG.replace_all(&source, "");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    Ok(collapsed.trim().as_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_nested_tags() {
        let out = html(b"<div>\n  <p>Hello <b>there</b></p>\n</div>".to_vec(), "txt").unwrap();
        assert_eq!(out, b"Hello there");
    }

    #[test]
    fn markdown_txt_is_verbatim() {
        let src = b"# Title\n\n*emphasis*".to_vec();
        assert_eq!(markdown(src.clone(), "txt").unwrap(), src);
    }
}
