use criterion::{black_box, criterion_group, criterion_main, Criterion};
use netdiag::enrichment::without_enrichment;
use netdiag::subnet::calculate_ip_info;
use netdiag::traceroute::{group_by_asn, parse_traceroute};

fn benchmark_subnet(c: &mut Criterion) {
    c.bench_function("calculate_ip_info_slash24", |b| {
        b.iter(|| calculate_ip_info(black_box("192.168.1.1/24")))
    });

    c.bench_function("calculate_ip_info_all_prefixes", |b| {
        let inputs: Vec<String> = (0..=32).map(|p| format!("10.20.30.40/{p}")).collect();
        b.iter(|| {
            for input in &inputs {
                let _ = calculate_ip_info(black_box(input));
            }
        })
    });
}

fn benchmark_traceroute_parse(c: &mut Criterion) {
    let trace: String = (1..=30)
        .map(|i| {
            if i % 5 == 0 {
                format!("{i:2}  * * *\n")
            } else {
                format!("{i:2}  hop{i}.example.net (203.0.{i}.1)  {i}.512 ms  {i}.470 ms\n")
            }
        })
        .collect();

    c.bench_function("parse_traceroute_30_hops", |b| {
        b.iter(|| parse_traceroute(black_box(&trace)))
    });

    c.bench_function("parse_and_group_30_hops", |b| {
        b.iter(|| group_by_asn(without_enrichment(parse_traceroute(black_box(&trace)))))
    });
}

criterion_group!(benches, benchmark_subnet, benchmark_traceroute_parse);
criterion_main!(benches);
