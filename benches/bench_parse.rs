use criterion::{Criterion, criterion_group, criterion_main};

fn argv() -> Vec<String> {
    [
        "--generator_script",
        "GenerateProtocol.py",
        "--markupsafe_dir",
        "/opt/markupsafe",
        "--jinja_dir",
        "/opt/jinja2",
        "--output_base",
        "out/protocol",
        "--config",
        "protocol_config.json",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn bench_split_known_args(c: &mut Criterion) {
    let args = argv();
    c.bench_function("split_known_args_10", |b| {
        b.iter(|| {
            let _ = genlaunch_lib::args::split_known_args(&args);
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let args = argv();
    c.bench_function("parse_10", |b| {
        b.iter(|| {
            let _ = genlaunch_lib::args::parse(&args);
        })
    });
}

criterion_group!(benches, bench_split_known_args, bench_parse);
criterion_main!(benches);
