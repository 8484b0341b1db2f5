use proptest::prelude::*;

use investment_projector::{project, ProjectionParams, ProjectionSummary};

fn arb_params() -> impl Strategy<Value = ProjectionParams> {
    (
        0.0..1_000_000.0f64,
        0.0..0.3f64,
        0.0..100_000.0f64,
        0.0..0.2f64,
        0.0..0.15f64,
        0u32..=100,
        18u32..=90,
        1900i32..=2200,
    )
        .prop_map(
            |(
                initial_amount,
                annual_return_rate,
                yearly_contribution,
                contribution_growth_rate,
                inflation_rate,
                years,
                starting_age,
                starting_year,
            )| ProjectionParams {
                initial_amount,
                annual_return_rate,
                yearly_contribution,
                contribution_growth_rate,
                inflation_rate,
                years,
                starting_age,
                starting_year,
            },
        )
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn record_count_is_years_plus_one(params in arb_params()) {
        let records = project(&params);
        prop_assert_eq!(records.len(), params.years as usize + 1);
    }

    #[test]
    fn labels_advance_by_one(params in arb_params()) {
        let records = project(&params);
        for (i, r) in records.iter().enumerate() {
            prop_assert_eq!(r.year, params.starting_year + i as i32);
            prop_assert_eq!(r.age, params.starting_age + i as u32);
        }
    }

    #[test]
    fn totals_never_decrease(params in arb_params()) {
        let records = project(&params);
        for pair in records.windows(2) {
            prop_assert!(pair[1].total_deposits >= pair[0].total_deposits);
            prop_assert!(pair[1].total_interest >= pair[0].total_interest);
            prop_assert!(pair[1].balance >= pair[0].balance);
        }
    }

    #[test]
    fn balance_follows_recurrence(params in arb_params()) {
        let records = project(&params);
        let mut prior = params.initial_amount;
        for r in &records {
            prop_assert!(close(r.balance, prior + r.contribution + r.interest));
            prop_assert!(close(r.interest, (prior + r.contribution) * params.annual_return_rate));
            prior = r.balance;
        }
    }

    #[test]
    fn balance_is_deposits_plus_interest(params in arb_params()) {
        let records = project(&params);
        for r in &records {
            prop_assert!(close(r.balance, r.total_deposits + r.total_interest));
        }
    }

    #[test]
    fn first_year_present_value_is_nominal(params in arb_params()) {
        let records = project(&params);
        prop_assert_eq!(records[0].pv_balance, records[0].balance);
        prop_assert_eq!(records[0].pv_deposits, records[0].total_deposits);
    }

    #[test]
    fn zero_inflation_keeps_nominal_values(mut params in arb_params()) {
        params.inflation_rate = 0.0;
        for r in project(&params) {
            prop_assert_eq!(r.pv_balance, r.balance);
            prop_assert_eq!(r.pv_deposits, r.total_deposits);
        }
    }

    #[test]
    fn present_value_never_exceeds_nominal(params in arb_params()) {
        for r in project(&params) {
            prop_assert!(r.pv_balance <= r.balance);
            prop_assert!(r.pv_deposits <= r.total_deposits);
        }
    }

    #[test]
    fn summary_matches_last_record(params in arb_params()) {
        let records = project(&params);
        let summary = ProjectionSummary::from_records(&records).unwrap();
        let last = records.last().unwrap();
        prop_assert_eq!(summary.final_year, last.year);
        prop_assert_eq!(summary.final_balance, last.balance);
        prop_assert_eq!(summary.total_deposits, last.total_deposits);
    }
}
