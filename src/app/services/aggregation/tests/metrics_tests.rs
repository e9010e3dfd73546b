//! Tests for per-estate metrics

use super::*;
use crate::app::services::aggregation::{compute_metrics, percent_realized, remaining};

#[test]
fn test_remaining_and_percent() {
    assert_eq!(remaining(100.0, 40.0), 60.0);
    assert_eq!(percent_realized(100.0, 40.0), 40.0);
}

#[test]
fn test_zero_plan_gives_zero_percent() {
    assert_eq!(percent_realized(0.0, 5.0), 0.0);
    assert_eq!(remaining(0.0, 5.0), -5.0);
}

#[test]
fn test_over_realization_is_negative_remaining() {
    assert_eq!(remaining(30.0, 45.0), -15.0);
    assert_eq!(percent_realized(30.0, 45.0), 150.0);
}

#[test]
fn test_one_metric_per_estate_in_order() {
    let kebuns = sample_kebuns();
    let metrics = compute_metrics(&kebuns);

    assert_eq!(metrics.len(), kebuns.len());
    let ids: Vec<&str> = metrics.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["A1", "B1", "A2", "X1", "B2"]);

    let first = &metrics[0];
    assert_eq!(first.nama_kebun, "KEBUN A1");
    assert_eq!(first.sisa_pemupukan_npk, 60.0);
    assert_eq!(first.sisa_pemupukan_dolomit, 150.0);
    assert_eq!(first.persen_realisasi_npk, 40.0);
    assert_eq!(first.persen_realisasi_dolomit, 25.0);

    let zero_plan = &metrics[2];
    assert_eq!(zero_plan.persen_realisasi_npk, 0.0);
    assert_eq!(zero_plan.persen_realisasi_dolomit, 100.0);
}

#[test]
fn test_metrics_serialize_with_dashboard_names() {
    let metrics = compute_metrics(&sample_kebuns()[..1]);
    let json = serde_json::to_value(&metrics[0]).unwrap();

    assert_eq!(json["sisaPemupukanNPK"], 60.0);
    assert_eq!(json["persenRealisasiDolomit"], 25.0);
    assert_eq!(json["nama_kebun"], "KEBUN A1");
}
