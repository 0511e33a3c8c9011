use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

use crate::highlight::escape_html;

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("valid image pattern"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("valid link pattern"));

/// An `![alt](path)` reference found in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef<'a> {
    pub alt: &'a str,
    pub path: &'a str,
}

/// A line cut at its image references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePiece<'a> {
    /// Text between images, trimmed; never empty.
    Text(&'a str),
    Image(ImageRef<'a>),
}

/// `[text](url)` links and `![alt](path)` images.
pub struct Link;

impl Link {
    /// Splits `text` around its images, or `None` when it has no image.
    pub fn split_images(text: &str) -> Option<Vec<LinePiece<'_>>> {
        let mut pieces = vec![];
        let mut last = 0;
        for caps in IMAGE.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            push_text(&mut pieces, &text[last..whole.start()]);
            pieces.push(LinePiece::Image(ImageRef {
                alt: caps.get(1).map_or("", |m| m.as_str()),
                path: caps.get(2).map_or("", |m| m.as_str()),
            }));
            last = whole.end();
        }
        if last == 0 {
            return None;
        }
        push_text(&mut pieces, &text[last..]);
        Some(pieces)
    }

    /// Replaces every `[text](url)` with an anchor element.
    pub fn substitute(text: &str) -> Cow<'_, str> {
        LINK.replace_all(text, |caps: &Captures<'_>| Self::anchor(&caps[1], &caps[2]))
    }

    pub fn anchor(text: &str, url: &str) -> String {
        format!("<a href=\"{}\">{text}</a>", escape_html(url))
    }
}

fn push_text<'a>(pieces: &mut Vec<LinePiece<'a>>, text: &'a str) {
    let text = text.trim();
    if !text.is_empty() {
        pieces.push(LinePiece::Text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image<'a>(alt: &'a str, path: &'a str) -> LinePiece<'a> {
        LinePiece::Image(ImageRef { alt, path })
    }

    #[test]
    fn lone_image_is_one_piece() {
        assert_eq!(
            Link::split_images("![diagram](img/flow.png)"),
            Some(vec![image("diagram", "img/flow.png")])
        );
    }

    #[test]
    fn text_around_an_image_is_kept() {
        assert_eq!(
            Link::split_images("See ![d](d.png) for the flow"),
            Some(vec![
                LinePiece::Text("See"),
                image("d", "d.png"),
                LinePiece::Text("for the flow"),
            ])
        );
    }

    #[test]
    fn images_keep_their_order() {
        assert_eq!(
            Link::split_images("![a](1.png) text ![b](2.png)"),
            Some(vec![
                image("a", "1.png"),
                LinePiece::Text("text"),
                image("b", "2.png"),
            ])
        );
    }

    #[test]
    fn plain_link_is_not_an_image() {
        assert_eq!(Link::split_images("[a](b)"), None);
    }

    #[test]
    fn substitutes_every_link() {
        assert_eq!(
            Link::substitute("see [docs](https://x.dev) or [home](/)"),
            r#"see <a href="https://x.dev">docs</a> or <a href="/">home</a>"#
        );
    }

    #[test]
    fn link_urls_are_attribute_escaped() {
        assert_eq!(
            Link::substitute("[q](/s?a=1&b=2)"),
            r#"<a href="/s?a=1&amp;b=2">q</a>"#
        );
    }

    #[test]
    fn text_without_links_is_untouched() {
        assert_eq!(Link::substitute("[not a link]"), "[not a link]");
    }
}
