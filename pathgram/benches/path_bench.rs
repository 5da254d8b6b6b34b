use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathgram::path::{
    decompose, join, normalize, parse, relative, resolver, FixedCurrentDirectory, PlatformStyle,
};
use pathgram::{Operation, PathEngine, PathOptions};
use serde_json::json;

const STYLES: [PlatformStyle; 2] = [PlatformStyle::Posix, PlatformStyle::Windows];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for style in STYLES {
        group.bench_with_input(BenchmarkId::new("drive_path", style), &style, |b, &style| {
            b.iter(|| parse(black_box("c:/foo\\bar/baz/asdf/quux.html"), style));
        });
    }

    // Benchmark UNC root detection
    group.bench_function("unc_path", |b| {
        b.iter(|| parse(black_box("\\\\server\\share\\dir\\file"), PlatformStyle::Windows));
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for style in STYLES {
        // Benchmark path that is already normal
        group.bench_with_input(BenchmarkId::new("clean", style), &style, |b, &style| {
            b.iter(|| normalize::normalize(black_box("/absolute/path/to/file"), style));
        });

        // Benchmark path with . and .. components
        group.bench_with_input(BenchmarkId::new("with_dots", style), &style, |b, &style| {
            b.iter(|| normalize::normalize(black_box("/a/b/../c/./d"), style));
        });

        // Benchmark relative path with leading ..
        group.bench_with_input(BenchmarkId::new("relative_up", style), &style, |b, &style| {
            b.iter(|| normalize::normalize(black_box("../../a/b/c/d/../../e/f"), style));
        });
    }

    group.finish();
}

fn bench_join_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("join_resolve");
    let parts = ["/foo", "bar", "baz/asdf", "quux", ".."];

    for style in STYLES {
        group.bench_with_input(BenchmarkId::new("join", style), &style, |b, &style| {
            b.iter(|| join::join(black_box(&parts), style));
        });
    }

    let cwd = FixedCurrentDirectory::new("/home/myself/node");
    let relative_parts = ["wwwroot", "static_files/png/", "../gif/image.gif"];
    group.bench_function("resolve_relative", |b| {
        b.iter(|| resolver::resolve(black_box(&relative_parts), PlatformStyle::Posix, &cwd));
    });

    group.bench_function("resolve_absolute_last", |b| {
        b.iter(|| {
            resolver::resolve(
                black_box(&["c:\\foo/bar", "d:/tmp/file/"]),
                PlatformStyle::Windows,
                &cwd,
            )
        });
    });

    group.finish();
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");
    let path = "/foo/bar/baz/asdf/quux.html";
    let style = PlatformStyle::Posix;

    group.bench_function("dirname", |b| {
        b.iter(|| decompose::dirname(black_box(path), style));
    });
    group.bench_function("basename_suffix", |b| {
        b.iter(|| decompose::basename(black_box(path), Some(".html"), style));
    });
    group.bench_function("extname", |b| {
        b.iter(|| decompose::extname(black_box(path), style));
    });

    group.finish();
}

fn bench_relative(c: &mut Criterion) {
    let mut group = c.benchmark_group("relative");
    let cwd = FixedCurrentDirectory::new("/");

    // Benchmark sibling route
    group.bench_function("sibling", |b| {
        b.iter(|| {
            relative::relative(
                black_box("/data/orandea/test/aaa"),
                black_box("/data/orandea/impl/bbb"),
                PlatformStyle::Posix,
                &cwd,
            )
        });
    });

    // Benchmark Windows sibling route
    group.bench_function("windows_sibling", |b| {
        b.iter(|| {
            relative::relative(
                black_box("c:\\users\\me\\src"),
                black_box("c:\\users\\me\\docs\\api"),
                PlatformStyle::Windows,
                &cwd,
            )
        });
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let engine = PathEngine::new(
        PathOptions::new(PlatformStyle::Posix).with_current_dir(FixedCurrentDirectory::new("/")),
    );
    let args = [json!("/foo"), json!("bar"), json!("..")];

    c.bench_function("invoke_join", |b| {
        b.iter(|| engine.invoke(Operation::Join, black_box(&args)));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_normalize,
    bench_join_resolve,
    bench_decompose,
    bench_relative,
    bench_dispatch
);
criterion_main!(benches);
