//! Benchmarks for parse + outline extraction
//!
//! Run with: cargo bench --bench outline

use std::io::Cursor;
use std::path::PathBuf;

use go_outline::outline::extract_outline;
use go_outline::source::{OverlayArchive, SourceText};
use go_outline::syntax::GoParser;
use go_outline::ParseMode;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Sample source generation
// ============================================================================

fn generate_go(decls: usize) -> String {
    let mut src = String::from("package bench\n\nimport (\n\t\"fmt\"\n\t\"strings\"\n)\n\n");
    for i in 0..decls {
        src.push_str(&format!(
            "// Item{i} is generated.\ntype Item{i} struct {{\n\tName string\n}}\n\n\
             const Max{i}, Min{i} = {i}, 0\n\n\
             func (it *Item{i}) String() string {{\n\treturn fmt.Sprint(strings.ToUpper(it.Name))\n}}\n\n"
        ));
    }
    src
}

fn source(text: &str) -> SourceText {
    SourceText {
        path: PathBuf::from("bench.go"),
        text: text.to_string(),
    }
}

// ============================================================================
// Benchmarks
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn parse_and_outline(bencher: divan::Bencher, decls: usize) {
    let text = generate_go(decls);
    let mut parser = GoParser::new().unwrap();

    bencher.bench_local(|| {
        let file = parser.parse(source(&text), ParseMode::Full).unwrap();
        divan::black_box(extract_outline(&file).unwrap())
    });
}

#[divan::bench(args = [10, 100, 1000])]
fn imports_only(bencher: divan::Bencher, decls: usize) {
    let text = generate_go(decls);
    let mut parser = GoParser::new().unwrap();

    bencher.bench_local(|| {
        let file = parser.parse(source(&text), ParseMode::ImportsOnly).unwrap();
        divan::black_box(extract_outline(&file).unwrap())
    });
}

#[divan::bench(args = [1, 50, 500])]
fn decode_overlay(bencher: divan::Bencher, entries: usize) {
    let text = generate_go(20);
    let mut archive = Vec::new();
    for i in 0..entries {
        archive.extend_from_slice(format!("/src/file{}.go\n{}\n", i, text.len()).as_bytes());
        archive.extend_from_slice(text.as_bytes());
    }

    bencher.bench_local(|| divan::black_box(OverlayArchive::parse(Cursor::new(&archive)).unwrap()));
}
