use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use carbon_processor::models::EmissionRecord;
use carbon_processor::processors::{AreaAggregator, EmissionIngestor};
use carbon_processor::processors::stats::robust_central_value;

// Create synthetic survey rows spread across a number of areas
fn create_test_records(area_count: usize, rows_per_area: usize) -> Vec<EmissionRecord> {
    let mut records = Vec::with_capacity(area_count * rows_per_area);

    for area_id in 1..=area_count {
        for row in 0..rows_per_area {
            let per_record = 50.0 + (row as f64) * 3.5 + (area_id as f64);
            let area_total = 1000.0 + (row as f64) * 120.0;

            records.push(EmissionRecord {
                area: format!("Area {}", area_id),
                city: "Mumbai".to_string(),
                country: "India".to_string(),
                area_type_raw: "Residential".to_string(),
                total_co2: format!("{:.1}", per_record),
                area_total_emission: format!("{:.1}", area_total),
            });
        }
    }

    records
}

fn create_test_csv(area_count: usize, rows_per_area: usize) -> String {
    let mut text =
        String::from("area,city,country,area_type_raw,total_co2,area_total_emission\n");
    for record in create_test_records(area_count, rows_per_area) {
        text.push_str(&format!(
            "{},{},{},{},{},{}\n",
            record.area,
            record.city,
            record.country,
            record.area_type_raw,
            record.total_co2,
            record.area_total_emission
        ));
    }
    text
}

fn benchmark_area_aggregator(c: &mut Criterion) {
    let records = create_test_records(20, 100);

    c.bench_function("area_aggregator", |b| {
        b.iter(|| {
            let aggregator = AreaAggregator::new();
            let summaries = aggregator.aggregate(&records).unwrap();
            black_box(summaries.len())
        })
    });
}

fn benchmark_full_ingestion(c: &mut Criterion) {
    let text = create_test_csv(20, 100);

    c.bench_function("full_ingestion", |b| {
        b.iter(|| {
            let ingestor = EmissionIngestor::new();
            let (summaries, report) = ingestor.ingest_text(&text).unwrap();
            black_box((summaries.len(), report.rows_grouped))
        })
    });
}

fn benchmark_robust_central_value(c: &mut Criterion) {
    let values: Vec<f64> = (0..1000)
        .map(|i| if i % 50 == 0 { 900.0 } else { (i % 400) as f64 })
        .collect();

    c.bench_function("robust_central_value", |b| {
        b.iter(|| black_box(robust_central_value(&values, 500.0)))
    });
}

fn benchmark_varying_data_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation_by_size");

    for &size in &[10, 50, 100, 500] {
        group.bench_with_input(BenchmarkId::new("areas", size), &size, |b, &area_count| {
            let records = create_test_records(area_count, 50);

            b.iter(|| {
                let aggregator = AreaAggregator::new();
                let summaries = aggregator.aggregate(&records).unwrap();
                black_box(summaries.len())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_area_aggregator,
    benchmark_full_ingestion,
    benchmark_robust_central_value,
    benchmark_varying_data_sizes
);
criterion_main!(benches);
