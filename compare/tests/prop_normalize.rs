use compare::normalize;
use dataset::{BenchTable, Library, Metric, Scenario};
use proptest::prelude::*;

fn rows_strategy() -> impl Strategy<Value = (usize, Vec<Vec<(f64, f64)>>)> {
    (1usize..5).prop_flat_map(|libs| {
        (
            Just(libs),
            prop::collection::vec(
                prop::collection::vec((0.001f64..10_000.0, 0.001f64..10_000.0), libs),
                1..10,
            ),
        )
    })
}

fn metric_strategy() -> impl Strategy<Value = Metric> {
    prop_oneof![Just(Metric::Save), Just(Metric::Load)]
}

fn build(libs: usize, rows: &[Vec<(f64, f64)>]) -> BenchTable {
    let mut builder = BenchTable::builder();
    for idx in 0..libs {
        builder = builder.library(format!("lib{idx}"));
    }
    for (row_idx, row) in rows.iter().enumerate() {
        let mut scenario = Scenario::new(format!("s{row_idx}"));
        for (lib_idx, (save, load)) in row.iter().enumerate() {
            scenario = scenario.timing(format!("lib{lib_idx}"), *save, *load);
        }
        builder = builder.scenario(scenario);
    }
    builder.build().unwrap()
}

proptest! {
    #[test]
    fn prop_baseline_is_exactly_one(
        (libs, rows) in rows_strategy(),
        pick in any::<prop::sample::Index>(),
        metric in metric_strategy(),
    ) {
        let table = build(libs, &rows);
        let baseline = Library::new(format!("lib{}", pick.index(libs)));
        let cmp = normalize(&table, metric, &baseline).unwrap();
        let series = cmp.series_for(&baseline).unwrap();
        prop_assert!(series.values.iter().all(|value| *value == 1.0));
    }

    #[test]
    fn prop_ratio_times_baseline_recovers_raw(
        (libs, rows) in rows_strategy(),
        pick in any::<prop::sample::Index>(),
        metric in metric_strategy(),
    ) {
        let table = build(libs, &rows);
        let baseline = Library::new(format!("lib{}", pick.index(libs)));
        let cmp = normalize(&table, metric, &baseline).unwrap();
        for series in &cmp.series {
            prop_assert_eq!(series.values.len(), cmp.labels.len());
            for (label, value) in cmp.labels.iter().zip(&series.values) {
                let raw = table.timing(label, &series.library, metric).unwrap();
                let base = table.timing(label, &baseline, metric).unwrap();
                let recovered = value * base;
                prop_assert!((recovered - raw).abs() <= raw.abs() * 1e-9 + 1e-12);
            }
        }
    }
}
