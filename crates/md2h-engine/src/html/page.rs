use std::fmt::Write;

use crate::highlight::escape_html;
use crate::models::Toc;
use crate::parsing::blocks::Block;
use crate::parsing::inline::Link;

use super::{PathContext, SCRIPT_FILE, STYLE_FILE, render_block};

/// A document ready for assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            title: title.into(),
            blocks,
        }
    }
}

pub fn render_page(page: &Page, toc: &Toc, ctx: PathContext<'_>) -> String {
    let res = ctx.res_dir();
    let body = page
        .blocks
        .iter()
        .map(|block| render_block(block, ctx))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link href="{res}/{STYLE_FILE}" rel="stylesheet" />
  <title>{title}</title>
</head>
<body>
{aside}
<main>
{body}
</main>
<script src="{res}/{SCRIPT_FILE}"></script>
</body>
</html>
"#,
        title = escape_html(&page.title),
        aside = render_aside(toc, ctx),
    )
}

/// Navigation aside: one collapsible group per folder, one link per document.
pub fn render_aside(toc: &Toc, ctx: PathContext<'_>) -> String {
    let mut out = String::from("<aside>\n<nav aria-label=\"Contents\">\n");
    for (folder, files) in toc.folders() {
        let _ = writeln!(
            out,
            "<details>\n<summary>{}</summary>\n<ul>",
            escape_html(folder)
        );
        for file in files {
            let name = file.display_name();
            let link = Link::anchor(&escape_html(name), &ctx.page_href(name));
            let _ = writeln!(out, "<li>{link}</li>");
        }
        out.push_str("</ul>\n</details>\n");
    }
    out.push_str("</nav>\n</aside>");
    out
}
