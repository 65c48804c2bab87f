use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use epicatalog::{parse_csv, Catalog, CsvWriter};

fn build_catalog_csv(size: usize) -> String {
    let mut writer = CsvWriter::from_writer(Vec::new()).crlf(true);
    writer.write_row(["codigo", "descricao", "imagem"]).unwrap();
    for i in 0..size {
        writer
            .write_row([
                format!("CA-{}", i),
                format!("Luva \"tipo {}\", tamanho G", i % 7),
                format!("img/{}.png", i),
            ])
            .unwrap();
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [100, 1000, 10000, 100000].iter() {
        let text = build_catalog_csv(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(parse_csv(black_box(text))));
        });
    }

    group.finish();
}

fn benchmark_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");

    for size in [1000, 10000].iter() {
        let text = build_catalog_csv(*size);
        group.bench_with_input(BenchmarkId::new("load", size), &text, |b, text| {
            b.iter(|| black_box(Catalog::from_csv_str(text).unwrap()));
        });

        let catalog = Catalog::from_csv_str(&text).unwrap();
        group.bench_with_input(BenchmarkId::new("search", size), &catalog, |b, catalog| {
            b.iter(|| black_box(catalog.search(black_box("tipo 3"))));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parse, benchmark_catalog);
criterion_main!(benches);
