//! Property checks over the rating tables.

use proptest::prelude::*;
use proptest::sample::select;

use rock_core::calculations::{recalc, ClassificationInput};
use rock_core::equations::rqd_points;
use rock_core::tables::{
    ClassificationTable, Q_JA, Q_JN, Q_JR, Q_JW, Q_SRF, RMR_CONDITION, RMR_ORIENTATION,
    RMR_SPACING, RMR_STRENGTH, RMR_WATER,
};

fn ratings(table: &'static ClassificationTable) -> impl Strategy<Value = f64> {
    select(table.entries.iter().map(|e| e.value).collect::<Vec<_>>())
}

prop_compose! {
    fn table_input()(
        strength in ratings(&RMR_STRENGTH),
        rqd in 0.0f64..=100.0,
        spacing in ratings(&RMR_SPACING),
        condition in ratings(&RMR_CONDITION),
        water in ratings(&RMR_WATER),
        orientation in ratings(&RMR_ORIENTATION),
        jn in ratings(&Q_JN),
        jr in ratings(&Q_JR),
        ja in ratings(&Q_JA),
        jw in ratings(&Q_JW),
        srf in ratings(&Q_SRF),
    ) -> ClassificationInput {
        ClassificationInput { strength, rqd, spacing, condition, water, orientation, jn, jr, ja, jw, srf }
    }
}

proptest! {
    #[test]
    fn rmr_stays_within_bounds(input in table_input()) {
        let result = recalc(&input);
        prop_assert!((0.0..=100.0).contains(&result.rmr_score));
        prop_assert!(result.gsi <= result.rmr_score);
    }

    #[test]
    fn q_value_has_three_decimals(input in table_input()) {
        let q = recalc(&input).q_value;
        prop_assert!(q.is_finite());
        prop_assert!(q >= 0.0);
        let scaled = q * 1000.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-6 * scaled.abs().max(1.0));
    }

    #[test]
    fn rqd_points_never_decrease(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rqd_points(low) <= rqd_points(high));
    }

    #[test]
    fn recalc_is_deterministic(input in table_input()) {
        prop_assert_eq!(recalc(&input), recalc(&input));
    }
}
