// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and a [link](page.html).\n\n* Bullet point\n* Another item\n\n|Name|Value|\n|---|---|\n|a|1|\n\n> Quoted line\n\n```\npublic class Example {\n    public int Value => 42;\n}\n```\n\n---\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_csharp_source(size: usize) -> String {
    let base = r#"// Sample type
public sealed class Counter {
    private int _count = 0;
    /* increments */
    public void Add(int by) { _count += by; }
    public string Label => @"count ""quoted""";
    public char Sep = ',';
    public double Ratio = 3.14;
}
"#;
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_typescript_source(size: usize) -> String {
    let base = r#"@Component({ selector: 'app-root' })
export class AppComponent implements OnInit {
  private readonly total: bigint = 1_000_000n;
  title = `Hello ${name}`;
  ngOnInit(): void {
    const items: Array<string> = ["a", 'b'];
    // comment
    console.log(items.length, 0xFF);
  }
}
"#;
    base.repeat(size)
}
