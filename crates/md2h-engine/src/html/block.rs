use std::fmt::Write;

use crate::highlight::escape_html;
use crate::parsing::blocks::Block;

use super::PathContext;

/// Renders one block. Text fields are emitted as produced by the inline
/// transform, since they already carry markup.
pub fn render_block(block: &Block, ctx: PathContext<'_>) -> String {
    match block {
        Block::Heading { level, text } => format!("<h{level}>{text}</h{level}>"),
        Block::Paragraph { text } => format!("<p>{text}</p>"),
        Block::UnorderedList { items } => list("ul", "", items),
        Block::OrderedList { title, items } => list("ol", title, items),
        Block::DefinitionList { title, pairs } => {
            let mut out = format!("<dl>{title}\n");
            for (term, definition) in pairs {
                let _ = writeln!(out, "<dt>{term}</dt><dd>{definition}</dd>");
            }
            out.push_str("</dl>");
            out
        }
        Block::CodeBlock {
            highlighted,
            language,
            ..
        } => format!(
            "<div class=\"code-container\">\n\
             <button class=\"copy-btn\" type=\"button\" aria-label=\"Copy code\">Copy</button>\n\
             <pre class=\"code-block\"><code class=\"language-{language}\">{highlighted}</code></pre>\n\
             </div>"
        ),
        Block::BlockQuote { text } => format!("<blockquote>{text}</blockquote>"),
        Block::Table { header, rows } => table(header, rows),
        Block::HorizontalRule => "<hr>".to_owned(),
        Block::Image { alt, path } => format!(
            "<img src=\"{}/{}\" alt=\"{}\" />",
            ctx.img_dir(),
            escape_html(file_name(path)),
            escape_html(alt)
        ),
    }
}

fn list(tag: &str, title: &str, items: &[String]) -> String {
    let mut out = format!("<{tag}>{title}\n");
    for item in items {
        let _ = writeln!(out, "<li>{item}</li>");
    }
    let _ = write!(out, "</{tag}>");
    out
}

fn table(header: &[String], rows: &[Vec<String>]) -> String {
    let mut out = String::from("<table>\n");
    if !header.is_empty() {
        out.push_str("<thead>\n");
        row(&mut out, "th", header);
        out.push_str("</thead>\n");
    }
    out.push_str("<tbody>\n");
    for cells in rows {
        row(&mut out, "td", cells);
    }
    out.push_str("</tbody>\n</table>");
    out
}

fn row(out: &mut String, tag: &str, cells: &[String]) {
    out.push_str("<tr>");
    for cell in cells {
        let _ = write!(out, "<{tag}>{cell}</{tag}>");
    }
    out.push_str("</tr>\n");
}

/// Images are staged flat into the image directory, so only the file name is kept.
fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{Language, highlight};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const INDEX: PathContext<'static> = PathContext::Index { out_dir: "ZOut" };

    #[rstest]
    #[case(Block::Heading { level: 2, text: "<b>Setup</b>".into() }, "<h2><b>Setup</b></h2>")]
    #[case(Block::Paragraph { text: "plain".into() }, "<p>plain</p>")]
    #[case(Block::Paragraph { text: String::new() }, "<p></p>")]
    #[case(Block::BlockQuote { text: "q".into() }, "<blockquote>q</blockquote>")]
    #[case(Block::HorizontalRule, "<hr>")]
    fn single_line_blocks(#[case] block: Block, #[case] expected: &str) {
        assert_eq!(render_block(&block, PathContext::Content), expected);
    }

    #[test]
    fn unordered_list() {
        let block = Block::UnorderedList {
            items: vec!["a".into(), "b".into()],
        };
        assert_eq!(
            render_block(&block, PathContext::Content),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn ordered_and_definition_lists_carry_titles() {
        let ordered = Block::OrderedList {
            title: "Steps".into(),
            items: vec!["one".into()],
        };
        let definitions = Block::DefinitionList {
            title: "Terms".into(),
            pairs: vec![("rope".into(), "text tree".into())],
        };
        assert_eq!(
            render_block(&ordered, PathContext::Content),
            "<ol>Steps\n<li>one</li>\n</ol>"
        );
        assert_eq!(
            render_block(&definitions, PathContext::Content),
            "<dl>Terms\n<dt>rope</dt><dd>text tree</dd>\n</dl>"
        );
    }

    #[test]
    fn table_with_header() {
        let block = Block::Table {
            header: vec!["H1".into(), "H2".into()],
            rows: vec![vec!["v1".into(), "v2".into()], vec!["short".into()]],
        };
        insta::assert_snapshot!(render_block(&block, PathContext::Content), @r"
        <table>
        <thead>
        <tr><th>H1</th><th>H2</th></tr>
        </thead>
        <tbody>
        <tr><td>v1</td><td>v2</td></tr>
        <tr><td>short</td></tr>
        </tbody>
        </table>
        ");
    }

    #[test]
    fn table_without_header_has_no_thead() {
        let block = Block::Table {
            header: vec![],
            rows: vec![vec!["x".into()]],
        };
        assert!(!render_block(&block, PathContext::Content).contains("<thead>"));
    }

    #[test]
    fn code_block_wraps_highlighted_markup() {
        let source = "int x;\n".to_owned();
        let block = Block::CodeBlock {
            highlighted: highlight(&source, Language::CSharp),
            source,
            language: Language::CSharp,
        };
        insta::assert_snapshot!(render_block(&block, PathContext::Content), @r#"
        <div class="code-container">
        <button class="copy-btn" type="button" aria-label="Copy code">Copy</button>
        <pre class="code-block"><code class="language-csharp"><span class="type">int</span> <span class="pln">x</span><span class="pun">;</span>
        </code></pre>
        </div>
        "#);
    }

    #[rstest]
    #[case(PathContext::Content, r#"<img src="../Img/flow.png" alt="Flow" />"#)]
    #[case(INDEX, r#"<img src="ZOut/Img/flow.png" alt="Flow" />"#)]
    fn image_uses_staged_file_name(#[case] ctx: PathContext<'_>, #[case] expected: &str) {
        let block = Block::Image {
            alt: "Flow".into(),
            path: "docs/img/flow.png".into(),
        };
        assert_eq!(render_block(&block, ctx), expected);
    }

    #[test]
    fn image_attributes_are_escaped() {
        let block = Block::Image {
            alt: "a \"quoted\" <alt>".into(),
            path: "x.png".into(),
        };
        assert_eq!(
            render_block(&block, PathContext::Content),
            r#"<img src="../Img/x.png" alt="a &quot;quoted&quot; &lt;alt&gt;" />"#
        );
    }
}
