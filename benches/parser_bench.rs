use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mysql_slowlog_parser::{SlowLogParser, SlowLogReader, parse_entry, parse_events_from_str};

// 生成测试数据
fn generate_test_data(num_events: usize) -> String {
    let mut log_text = String::new();
    for i in 0..num_events {
        log_text.push_str(&format!(
            "# Time: 2021-01-01T00:00:{:02}.000000Z\n\
             # User@Host: app[app] @ web{} [10.0.0.{}]  Id: {}\n\
             # Query_time: 0.{:06}  Lock_time: 0.000045 Rows_sent: {}  Rows_examined: {}\n\
             use shop;\n\
             SET timestamp={};\n\
             SELECT * FROM orders\n\
             WHERE id = {};\n",
            i % 60,
            i % 10,
            i % 255,
            i,
            i,
            i % 100,
            i * 10,
            1609459200 + i,
            i
        ));
    }
    log_text
}

// 生成单个日志块
fn generate_single_block() -> Vec<String> {
    vec![
        "# Time: 2021-01-01T00:00:00.000000Z".to_string(),
        "# User@Host: app[app] @ web01 [10.0.0.5]  Id: 42".to_string(),
        "# Query_time: 0.000123  Lock_time: 0.000045 Rows_sent: 1  Rows_examined: 10".to_string(),
        "use shop;".to_string(),
        "SET timestamp=1609459200;".to_string(),
        "SELECT * FROM orders WHERE id = 1;".to_string(),
    ]
}

fn benchmark_parse_entry(c: &mut Criterion) {
    let block = generate_single_block();

    c.bench_function("parse_entry", |b| {
        b.iter(|| black_box(parse_entry(black_box(block.as_slice()))))
    });
}

fn benchmark_consume_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("consume_line");

    for size in [10, 100, 1000, 10000].iter() {
        let log_text = generate_test_data(*size);
        group.bench_with_input(BenchmarkId::new("consume_line", size), &log_text, |b, text| {
            b.iter(|| {
                let mut parser = SlowLogParser::new();
                let mut count = 0;
                for line in black_box(text).lines() {
                    if parser.consume_line(line).is_some() {
                        count += 1;
                    }
                }
                if parser.flush().is_some() {
                    count += 1;
                }
                black_box(count)
            })
        });
    }

    group.finish();
}

fn benchmark_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader");

    for size in [100, 1000, 10000].iter() {
        let log_text = generate_test_data(*size);
        group.bench_with_input(BenchmarkId::new("SlowLogReader", size), &log_text, |b, text| {
            b.iter(|| {
                let count = SlowLogReader::new(black_box(text).as_bytes())
                    .filter(Result::is_ok)
                    .count();
                black_box(count)
            })
        });
        group.bench_with_input(
            BenchmarkId::new("parse_events_from_str", size),
            &log_text,
            |b, text| b.iter(|| black_box(parse_events_from_str(black_box(text)))),
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(100)
        .warm_up_time(std::time::Duration::from_secs(1))
        .measurement_time(std::time::Duration::from_secs(3));
    targets =
        benchmark_parse_entry,
        benchmark_consume_line,
        benchmark_reader
}

criterion_main!(benches);
