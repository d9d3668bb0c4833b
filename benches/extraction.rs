use criterion::{Criterion, criterion_group, criterion_main};
use pdfdump::format::PlainFormatter;
use pdfdump::{ExtractError, PdfReader, join_pages, run_files};
use std::hint::black_box;
use std::path::Path;

/// Serves the same synthetic document for every path.
struct SyntheticReader {
    pages: Vec<String>,
}

impl SyntheticReader {
    fn new(page_count: usize) -> Self {
        let pages = (0..page_count)
            .map(|i| {
                format!(
                    "Page {}\nSection {}: Ride requests are matched to the nearest driver.\n{}",
                    i + 1,
                    i,
                    "Lorem ipsum dolor sit amet. ".repeat(40)
                )
            })
            .collect();
        Self { pages }
    }
}

impl PdfReader for SyntheticReader {
    fn read_pages(&self, _path: &Path) -> Result<Vec<String>, ExtractError> {
        Ok(self.pages.clone())
    }
}

fn bench_join_pages(c: &mut Criterion) {
    let reader = SyntheticReader::new(200);
    c.bench_function("join_pages_200", |b| {
        b.iter(|| join_pages(black_box(&reader.pages)))
    });
}

fn bench_run_files(c: &mut Criterion) {
    let reader = SyntheticReader::new(50);
    let files: Vec<String> = (0..20).map(|i| format!("doc_{}.pdf", i)).collect();

    c.bench_function("run_files_20_docs", |b| {
        b.iter(|| {
            let mut out: Vec<u8> = Vec::with_capacity(1 << 20);
            run_files(&reader, files.as_slice(), &mut PlainFormatter::default(), &mut out).unwrap();
            black_box(out)
        })
    });
}

criterion_group!(benches, bench_join_pages, bench_run_files);
criterion_main!(benches);
