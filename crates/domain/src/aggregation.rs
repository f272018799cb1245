//! Pure weighted-aggregation math.
//!
//! These functions have no side effects and perform no I/O; the engine's
//! status orchestration decides what to do with the resulting mean. Callers
//! are expected to branch to status removal on an empty metric collection
//! before aggregating - an empty input here is a caller bug, not a data
//! condition.

use thiserror::Error;

use crate::value_objects::WeightedMetric;

/// Tolerance for asserting that normalized weights sum to 1.
pub const WEIGHT_EPSILON: f64 = 1e-9;

/// Errors from weighted-metric aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AggregationError {
    /// The metric collection was empty. Callers must branch to "remove
    /// status" before reaching aggregation.
    #[error("cannot aggregate an empty metric collection")]
    EmptyInput,

    /// Every metric carried zero weight, leaving nothing to scale against.
    /// Neither shipped weight formula can produce this; a component that
    /// trips it is violating its own contract.
    #[error("total metric weight is zero")]
    ZeroTotalWeight,
}

/// Scale weights so they sum to 1, preserving order and values.
pub fn normalize(metrics: &[WeightedMetric]) -> Result<Vec<WeightedMetric>, AggregationError> {
    if metrics.is_empty() {
        return Err(AggregationError::EmptyInput);
    }

    let total: f64 = metrics.iter().map(WeightedMetric::weight).sum();
    if total <= 0.0 {
        return Err(AggregationError::ZeroTotalWeight);
    }

    Ok(metrics
        .iter()
        .map(|metric| metric.with_weight(metric.weight() / total))
        .collect())
}

/// Weighted mean of an already-normalized collection: sum of value x weight.
pub fn weighted_mean(metrics: &[WeightedMetric]) -> f64 {
    metrics
        .iter()
        .map(|metric| metric.value() * metric.weight())
        .sum()
}

/// Normalize, then fold into a single mean in `[0, 1]`.
pub fn aggregate(metrics: &[WeightedMetric]) -> Result<f64, AggregationError> {
    Ok(weighted_mean(&normalize(metrics)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(pairs: &[(f64, f64)]) -> Vec<WeightedMetric> {
        pairs
            .iter()
            .map(|(value, weight)| WeightedMetric::new(*value, *weight))
            .collect()
    }

    #[test]
    fn test_normalized_weights_sum_to_one() {
        let inputs = vec![
            metrics(&[(0.75, 2.5), (0.0, 5.5)]),
            metrics(&[(1.0, 1.0)]),
            metrics(&[(0.2, 0.1), (0.4, 0.2), (0.6, 0.7), (0.8, 12.0)]),
        ];

        for input in inputs {
            let normalized = normalize(&input).expect("normalizes");
            let total: f64 = normalized.iter().map(WeightedMetric::weight).sum();
            assert!(
                (total - 1.0).abs() < WEIGHT_EPSILON,
                "weights summed to {total}"
            );
        }
    }

    #[test]
    fn test_normalize_preserves_order_and_values() {
        let input = metrics(&[(0.75, 2.5), (0.0, 5.5)]);
        let normalized = normalize(&input).expect("normalizes");

        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].value(), 0.75);
        assert_eq!(normalized[1].value(), 0.0);
        assert_eq!(normalized[0].weight(), 0.3125);
        assert_eq!(normalized[1].weight(), 0.6875);
    }

    #[test]
    fn test_normalize_empty_input_is_an_error() {
        assert_eq!(normalize(&[]), Err(AggregationError::EmptyInput));
    }

    #[test]
    fn test_normalize_zero_total_weight_is_an_error() {
        let input = metrics(&[(0.5, 0.0), (0.25, 0.0)]);
        assert_eq!(normalize(&input), Err(AggregationError::ZeroTotalWeight));
    }

    #[test]
    fn test_reference_scenario_weighted_mean() {
        // slots [{level:1, max:4, used:1}, {level:3, max:2, used:2}]:
        // values 0.75 / 0.0, raw weights 2.5 / 5.5
        let input = metrics(&[(0.75, 2.5), (0.0, 5.5)]);
        assert_eq!(aggregate(&input).expect("aggregates"), 0.234375);
    }

    #[test]
    fn test_all_consumed_mean_is_zero() {
        let input = metrics(&[(0.0, 2.5), (0.0, 5.5), (0.0, 8.5)]);
        assert_eq!(aggregate(&input).expect("aggregates"), 0.0);
    }

    #[test]
    fn test_single_metric_mean_is_its_value() {
        let input = metrics(&[(0.6, 42.0)]);
        assert!((aggregate(&input).expect("aggregates") - 0.6).abs() < WEIGHT_EPSILON);
    }
}
