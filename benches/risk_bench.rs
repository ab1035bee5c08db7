// ABOUTME: Criterion benchmarks for the ASCVD risk engine and HTTP handler path
// ABOUTME: Measures single assessments, patient batches, and in-process requests through the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Risk Server Contributors

//! Criterion benchmarks for risk assessment.
//!
//! The calculator benches isolate the equation; the router bench adds JSON
//! decoding, middleware, and response encoding.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use cardio_risk_server::config::environment::ServerConfig;
use cardio_risk_server::intelligence::RiskScoreCalculator;
use cardio_risk_server::models::{Race, RiskAssessmentInput, Sex};
use cardio_risk_server::server::build_router;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tower::ServiceExt;

const REFERENCE_BODY: &str = r#"{"age":55,"gender":"male","race":"white","cholesterol":213,"hdl":50,"bp":120,"diabetes":false,"smoker":false,"onHypertensionTreatment":false}"#;

/// Deterministic spread of in-domain patients
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn generate_patients(count: usize) -> Vec<RiskAssessmentInput> {
    (0..count)
        .map(|index| RiskAssessmentInput {
            age: 20 + (index % 60) as u32,
            sex: Sex::Male,
            race: Race::White,
            total_cholesterol: 150.0 + ((index * 37) % 150) as f64,
            hdl_cholesterol: 30.0 + ((index * 11) % 50) as f64,
            systolic_blood_pressure: 100.0 + ((index * 13) % 80) as f64,
            on_hypertension_treatment: index % 3 == 0,
            has_diabetes: index % 5 == 0,
            is_smoker: index % 2 == 0,
        })
        .collect()
}

fn bench_single_assessment(c: &mut Criterion) {
    let calculator = RiskScoreCalculator::default();
    let input = generate_patients(1)[0];

    c.bench_function("assess_single_patient", |b| {
        b.iter(|| calculator.assess(black_box(&input)));
    });
}

#[allow(clippy::cast_possible_truncation)]
fn bench_patient_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("assess_batch");
    let calculator = RiskScoreCalculator::default();

    for count in [10_usize, 100, 1000] {
        let patients = generate_patients(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &patients, |b, patients| {
            b.iter(|| {
                patients
                    .iter()
                    .filter_map(|input| calculator.assess(black_box(input)).ok())
                    .count()
            });
        });
    }

    group.finish();
}

fn bench_http_round_trip(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let app = build_router(
        &ServerConfig::default(),
        Arc::new(RiskScoreCalculator::default()),
    );

    c.bench_function("post_risk_assessment", |b| {
        b.iter(|| {
            let request = Request::builder()
                .method(Method::POST)
                .uri("/api/risk-assessment")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(REFERENCE_BODY))
                .unwrap();
            rt.block_on(app.clone().oneshot(request)).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_single_assessment,
    bench_patient_batches,
    bench_http_round_trip
);
criterion_main!(benches);
