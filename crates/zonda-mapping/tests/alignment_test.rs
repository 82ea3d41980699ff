//! Integration tests for feature/label alignment across turbine and park mappings.

use approx::assert_relative_eq;
use ndarray::s;
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;
use zonda_data::{DEFAULT_TARGET, Park, Turbine, TurbineId};
use zonda_mapping::{
    Mapping, MappingConfig, MappingError, PowerDiffMapping, PowerMapping, WindowConfig,
};

fn random_turbine(rng: &mut StdRng, id: u32, len: usize) -> Turbine {
    let values = (0..len).map(|_| rng.gen_range(0.0..2.5)).collect();
    Turbine::from_values(id, DEFAULT_TARGET, values).unwrap()
}

fn random_park(seed: u64, turbines: usize, len: usize) -> Park {
    let mut rng = StdRng::seed_from_u64(seed);
    let turbines = (0..turbines as u32)
        .map(|id| random_turbine(&mut rng, id, len))
        .collect();
    Park::new("random", turbines)
}

#[rstest]
#[case(2, 1, 0)]
#[case(3, 3, 0)]
#[case(3, 3, 5)]
#[case(6, 12, 2)]
#[case(1, 4, 1)]
fn test_park_levels_and_deltas_match_first_turbine(
    #[case] feature_window: usize,
    #[case] horizon: usize,
    #[case] padding: usize,
) {
    let park = random_park(7, 4, 60);
    let window = WindowConfig::new(feature_window, horizon).with_padding(padding);
    let mapping = PowerDiffMapping::default();

    let park_features = mapping.features_park(&park, &window).unwrap();
    let n = park.len();
    let w = feature_window;

    assert_eq!(park_features.ncols(), n * (2 * w - 1));

    for (idx, turbine) in park.iter().enumerate() {
        let mill = mapping.features_mill(turbine, &window).unwrap();
        assert_eq!(mill.nrows(), park_features.nrows());

        let levels = park_features.slice(s![.., idx * w..(idx + 1) * w]);
        assert_eq!(levels, mill.slice(s![.., ..w]));

        let delta_start = n * w + idx * (w - 1);
        let deltas = park_features.slice(s![.., delta_start..delta_start + w - 1]);
        assert_eq!(deltas, mill.slice(s![.., w..]));
    }
}

#[rstest]
#[case(2, 1, 0)]
#[case(4, 2, 3)]
#[case(5, 6, 0)]
fn test_park_labels_are_sum_of_turbine_labels(
    #[case] feature_window: usize,
    #[case] horizon: usize,
    #[case] padding: usize,
) {
    let park = random_park(11, 5, 40);
    let window = WindowConfig::new(feature_window, horizon).with_padding(padding);
    let mapping = PowerDiffMapping::default();

    let park_labels = mapping.labels_park(&park, &window).unwrap();
    let mut summed = ndarray::Array1::<f32>::zeros(park_labels.len());
    for turbine in &park {
        summed += &mapping.labels_mill(turbine, &window).unwrap();
    }

    for (park_label, sum) in park_labels.iter().zip(summed.iter()) {
        assert_relative_eq!(*park_label, *sum, epsilon = 1e-4);
    }
}

#[test]
fn test_labels_read_series_directly() {
    let mut rng = StdRng::seed_from_u64(3);
    let turbine = random_turbine(&mut rng, 1, 50);
    let series = {
        use zonda_data::MeasurementSource;
        turbine.series(DEFAULT_TARGET).unwrap()
    };
    let mapping = PowerDiffMapping::default();

    for (w, h, p) in [(1, 1, 0), (3, 2, 4), (8, 8, 1), (10, 1, 0)] {
        let window = WindowConfig::new(w, h).with_padding(p);
        let labels = mapping.labels_mill(&turbine, &window).unwrap();

        assert_eq!(labels.len(), 50 - (w + h + p - 1));
        for t in p..labels.len() {
            assert_eq!(labels[t], series[t + w + h - 1] as f32);
        }
    }
}

#[test]
fn test_padding_rows_are_zero_for_every_builder() {
    let park = random_park(19, 3, 30);
    let window = WindowConfig::new(3, 2).with_padding(4);
    let mappings: [Box<dyn Mapping>; 2] = [
        Box::new(PowerMapping::default()),
        Box::new(PowerDiffMapping::default()),
    ];

    for mapping in &mappings {
        let turbine = &park.turbines()[0];
        let mill = mapping.mill_dataset(turbine, &window).unwrap();
        let park_data = mapping.park_dataset(&park, &window).unwrap();

        for dataset in [&mill, &park_data] {
            assert!(dataset.features.slice(s![..4, ..]).iter().all(|&v| v == 0.0));
            assert!(dataset.labels.slice(s![..4]).iter().all(|&v| v == 0.0));
            assert!(dataset.labels.slice(s![4..]).iter().any(|&v| v != 0.0));
        }
    }
}

#[test]
fn test_padding_covering_every_row_gives_zeros() {
    // L=6, W=2, H=1, P=3 -> one row, and it is padding
    let park = random_park(37, 3, 6);
    let window = WindowConfig::new(2, 1).with_padding(3);
    let mapping = PowerDiffMapping::default();

    let features = mapping.features_park(&park, &window).unwrap();
    assert_eq!(features.dim(), (1, 3 * 3));
    assert!(features.iter().all(|&v| v == 0.0));

    let labels = mapping.labels_mill(&park.turbines()[0], &window).unwrap();
    assert_eq!(labels.len(), 1);
    assert!(labels.iter().all(|&v| v == 0.0));

    let park_labels = mapping.labels_park(&park, &window).unwrap();
    assert_eq!(park_labels.to_vec(), vec![0.0]);
}

#[test]
fn test_row_counts_agree_across_builders() {
    let park = random_park(23, 3, 25);
    let mapping = PowerDiffMapping::default();

    for padding in 0..4 {
        let window = WindowConfig::new(4, 3).with_padding(padding);
        let expected = 25 - (4 + 3 + padding - 1);

        let mill = mapping.mill_dataset(&park.turbines()[1], &window).unwrap();
        let park_data = mapping.park_dataset(&park, &window).unwrap();

        assert_eq!(mill.len(), expected);
        assert_eq!(park_data.len(), expected);
        assert_eq!(park_data.num_features(), 3 * 7);
    }
}

#[test]
fn test_padding_keeps_absolute_rows() {
    let park = random_park(29, 2, 30);
    let mapping = PowerDiffMapping::default();
    let unpadded = mapping
        .park_dataset(&park, &WindowConfig::new(3, 2))
        .unwrap();
    let padded = mapping
        .park_dataset(&park, &WindowConfig::new(3, 2).with_padding(3))
        .unwrap();

    let (features, labels) = padded.valid_rows(3);
    assert_eq!(features, unpadded.features.slice(s![3..features.nrows() + 3, ..]));
    assert_eq!(labels, unpadded.labels.slice(s![3..labels.len() + 3]));
}

#[test]
fn test_builders_are_deterministic() {
    let park = random_park(31, 4, 45);
    let window = WindowConfig::new(5, 2).with_padding(1);
    let mapping = PowerDiffMapping::default();

    let first = mapping.park_dataset(&park, &window).unwrap();
    let second = mapping.park_dataset(&park, &window).unwrap();

    let bits = |values: &[f32]| values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(
        bits(first.features.as_slice().unwrap()),
        bits(second.features.as_slice().unwrap())
    );
    assert_eq!(
        bits(first.labels.as_slice().unwrap()),
        bits(second.labels.as_slice().unwrap())
    );
}

#[test]
fn test_custom_target_column() {
    let df = df! {
        "wind_speed" => [4.0f64, 5.5, 7.0, 6.5, 8.0],
        "power" => [0.1f64, 0.3, 0.6, 0.5, 0.9],
    }
    .unwrap();
    let turbine = Turbine::new(TurbineId(12), df);
    let mapping = PowerDiffMapping::new(MappingConfig::with_target("power"));

    let dataset = mapping
        .mill_dataset(&turbine, &WindowConfig::new(2, 2))
        .unwrap();

    assert_eq!(dataset.len(), 2);
    assert_relative_eq!(dataset.features[[0, 2]], 0.2, epsilon = 1e-6);
    assert_relative_eq!(dataset.labels[1], 0.9, epsilon = 1e-6);
}

#[test]
fn test_park_errors() {
    let mapping = PowerDiffMapping::default();
    let window = WindowConfig::new(2, 1);

    let empty = Park::new("empty", Vec::new());
    assert!(matches!(
        mapping.features_park(&empty, &window),
        Err(MappingError::EmptyGroup)
    ));
    assert!(matches!(
        mapping.labels_park(&empty, &window),
        Err(MappingError::EmptyGroup)
    ));

    let mut rng = StdRng::seed_from_u64(5);
    let ragged = Park::new(
        "ragged",
        vec![
            random_turbine(&mut rng, 1, 12),
            random_turbine(&mut rng, 2, 12),
            random_turbine(&mut rng, 3, 9),
        ],
    );
    match mapping.labels_park(&ragged, &window) {
        Err(MappingError::LengthMismatch { entity, .. }) => assert_eq!(entity, "turbine-3"),
        other => panic!("expected LengthMismatch, got {other:?}"),
    }

    let short = Park::new("short", vec![random_turbine(&mut rng, 1, 3)]);
    assert!(matches!(
        mapping.features_park(&short, &window.with_padding(1)),
        Err(MappingError::InsufficientData {
            required: 4,
            actual: 3
        })
    ));
}
