use std::fs;
use std::path::Path;

use md2h_engine::highlight::Language;
use md2h_engine::{Block, ParseOptions, SiteBuilder, SiteOptions, parse_str};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn converts_a_small_tree() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "Web/Styles.md",
        "# Styles\n```\np { margin: 4px; }\n```\n",
    );
    write(dir.path(), "Web/Intro.md", "# Intro\n* one\n* two\nafter\n");

    let options = SiteOptions {
        code_language: Language::Css,
        ..SiteOptions::default()
    };
    let report = SiteBuilder::new(dir.path(), options).build().unwrap();
    assert_eq!(report.pages.len(), 2);

    let styles = fs::read_to_string(dir.path().join("ZOut/Content/Styles.html")).unwrap();
    assert!(styles.contains(
        r#"<code class="language-css">p { <span class="kw">margin</span>: <span class="num">4px</span>; }"#
    ));

    let intro = fs::read_to_string(dir.path().join("ZOut/Content/Intro.html")).unwrap();
    assert!(intro.contains("<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n<p>after</p>"));
    assert!(dir.path().join("ZOut/Res/Style.css").is_file());
    assert!(dir.path().join("Index.html").is_file());
}

#[test]
fn parses_mixed_document() {
    let md = "\
## Table
|Key|Value|
|---|---|
|**x**|1|
> note
***
";
    let doc = parse_str(md, &ParseOptions::default());
    assert_eq!(
        doc.blocks,
        vec![
            Block::Heading {
                level: 2,
                text: "Table".into()
            },
            Block::Table {
                header: vec!["Key".into(), "Value".into()],
                rows: vec![vec!["<b>x</b>".into(), "1".into()]],
            },
            Block::BlockQuote {
                text: "note".into()
            },
            Block::HorizontalRule,
        ]
    );
}
