use std::io::{self, Read};

fn main() {
    let mut html = String::new();
    io::stdin().read_to_string(&mut html).expect("read stdin");
    let out = html2keep::convert(&html);

    let artifact = match std::env::args().nth(1).as_deref() {
        Some("keep") => out.keep_html,
        Some("text") => out.plain_text,
        _ => out.html,
    };
    for diagnostic in &out.diagnostics {
        eprintln!("{}: {diagnostic}", diagnostic.kind());
    }
    println!("{artifact}");
}
