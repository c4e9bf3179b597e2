//! Analysis benchmarks for layermap
//!
//! - A1: full two-pass analysis of a synthetic layered repository
//! - A2: summary and DOT rendering of the resulting architecture
//!
//! Run with: cargo bench --bench analyze_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use layermap::{analyze, export_dot, render_summary, ArchitectureStats};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DOMAINS: usize = 50;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// One handler, service, repository and client per domain
fn setup_layered_repo(domains: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    for i in 0..domains {
        let name = format!("Domain{}", i);
        write(
            root,
            &format!("internal/http/{}_handler.go", i),
            &format!(
                "package http\n\ntype {name}Handler struct {{\n\tsvc *{name}Service\n}}\n\ntype {name}Request struct {{\n\tID string\n}}\n"
            ),
        );
        write(
            root,
            &format!("internal/service/{}.go", i),
            &format!(
                "package service\n\ntype {name}Notifier interface {{\n\tNotify() error\n}}\n\ntype {name}Service struct {{\n\trepo   {name}Repository\n\tclient *{name}Client\n\tnotify {name}Notifier\n\tname   string\n}}\n"
            ),
        );
        write(
            root,
            &format!("internal/repository/{}.go", i),
            &format!("package repository\n\ntype {name}Repository struct {{\n\tdb *sql.DB\n}}\n"),
        );
        write(
            root,
            &format!("internal/adapters/{}/client.go", i),
            &format!("package adapters\n\ntype {name}Client struct {{\n\tbaseURL string\n}}\n"),
        );
    }

    temp_dir
}

/// A1: Full analysis
fn benchmark_a1_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("A1_Analyze");
    let repo = setup_layered_repo(DOMAINS);

    group.throughput(Throughput::Elements((DOMAINS * 4) as u64));
    group.bench_function("layered_repo", |b| {
        b.iter(|| analyze(black_box(repo.path())).unwrap())
    });

    group.finish();
}

/// A2: Rendering
fn benchmark_a2_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("A2_Render");
    let repo = setup_layered_repo(DOMAINS);
    let arch = analyze(repo.path()).unwrap();

    group.bench_function("summary", |b| {
        b.iter(|| {
            let stats = ArchitectureStats::from_architecture(black_box(&arch));
            render_summary(&arch, &stats)
        })
    });
    group.bench_function("dot", |b| b.iter(|| export_dot(black_box(&arch))));

    group.finish();
}

criterion_group!(benches, benchmark_a1_analyze, benchmark_a2_render);
criterion_main!(benches);
