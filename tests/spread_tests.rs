//! Property and scenario tests for the spread allocator.

use nospread::domain::spread::{
    find_best_spread, proportional_allocation, score_payoffs, weight, SearchMode, Spread,
};
use nospread::domain::{DomainError, FeeRate, Price};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn fee() -> FeeRate {
    FeeRate::default()
}

/// Price vectors covering cheap, expensive, mixed and priced-out markets.
fn markets() -> Vec<Vec<Price>> {
    vec![
        vec![dec!(0.40), dec!(0.45), dec!(0.20)],
        vec![dec!(0.62), dec!(0.71), dec!(0.55), dec!(0.80)],
        vec![dec!(0.99), dec!(0.99)],
        vec![dec!(1.0), dec!(0.50), dec!(0.50)],
        vec![dec!(0.30), dec!(0.30), dec!(0.30), dec!(0.30)],
        vec![dec!(0.65), dec!(0.74), dec!(0.68), dec!(1.0), dec!(0.54)],
        vec![dec!(0.05), dec!(0.97)],
    ]
}

fn permutations(n: usize) -> Vec<Vec<usize>> {
    if n == 0 {
        return vec![vec![]];
    }
    let mut out = Vec::new();
    for rest in permutations(n - 1) {
        for slot in 0..=rest.len() {
            let mut perm = rest.clone();
            perm.insert(slot, n - 1);
            out.push(perm);
        }
    }
    out
}

fn permute<T: Copy>(values: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&i| values[i]).collect()
}

#[test]
fn zero_allocation_always_scores_zero() {
    for prices in markets() {
        let zeros = vec![0; prices.len()];
        let profile = score_payoffs(&zeros, &prices, fee()).unwrap();
        assert_eq!(profile.guaranteed_profit, Decimal::ZERO, "prices {prices:?}");
    }
}

#[test]
fn relabeling_bins_preserves_guaranteed_profit() {
    let prices = [dec!(0.62), dec!(0.71), dec!(0.55), dec!(0.80)];
    let allocation = [496, 492, 500, 487];
    let expected = score_payoffs(&allocation, &prices, fee())
        .unwrap()
        .guaranteed_profit;
    assert_eq!(expected, dec!(110.472));

    for order in permutations(prices.len()) {
        let profit = score_payoffs(&permute(&allocation, &order), &permute(&prices, &order), fee())
            .unwrap()
            .guaranteed_profit;
        assert_eq!(profit, expected, "order {order:?}");
    }
}

#[test]
fn relabeling_bins_permutes_best_spread() {
    let prices = [dec!(0.40), dec!(0.45), dec!(0.20)];
    let base = find_best_spread(&prices, 850, SearchMode::BestOverRange, fee()).unwrap();

    for order in permutations(prices.len()) {
        let spread =
            find_best_spread(&permute(&prices, &order), 850, SearchMode::BestOverRange, fee())
                .unwrap();
        assert_eq!(spread.guaranteed_profit, base.guaranteed_profit);
        assert_eq!(spread.allocation, permute(&base.allocation, &order));
    }
}

#[test]
fn weight_falls_as_price_rises() {
    let mut price = dec!(0.01);
    let mut previous = weight(price, fee()).unwrap();
    while price < dec!(0.99) {
        price += dec!(0.01);
        let current = weight(price, fee()).unwrap();
        assert!(previous > current, "weight({price}) should be below its predecessor");
        previous = current;
    }
}

#[test]
fn priced_out_bins_never_receive_shares() {
    for prices in markets() {
        let priced_out: Vec<usize> = (0..prices.len())
            .filter(|&i| prices[i] == Decimal::ONE)
            .collect();
        for ceiling in [1, 2, 17, 100, 850] {
            let allocation = proportional_allocation(&prices, ceiling, fee()).unwrap();
            for &i in &priced_out {
                assert_eq!(allocation[i], 0, "prices {prices:?} ceiling {ceiling}");
            }
        }
    }
}

#[test]
fn best_over_range_respects_budget_and_never_loses() {
    for prices in markets() {
        for max_shares in [1, 10, 99, 250] {
            let spread =
                find_best_spread(&prices, max_shares, SearchMode::BestOverRange, fee()).unwrap();

            assert!(
                spread.allocation.iter().all(|&s| s <= max_shares),
                "prices {prices:?} budget {max_shares}: {:?}",
                spread.allocation
            );
            assert!(spread.guaranteed_profit >= Decimal::ZERO);
            assert_eq!(spread.allocation.len(), prices.len());

            let rescored = score_payoffs(&spread.allocation, &prices, fee()).unwrap();
            assert_eq!(rescored.guaranteed_profit, spread.guaranteed_profit);
        }
    }
}

#[test]
fn three_bin_scenario_locks_in_profit() {
    let prices = [dec!(0.40), dec!(0.45), dec!(0.20)];
    let spread = find_best_spread(&prices, 850, SearchMode::BestOverRange, fee()).unwrap();

    assert_eq!(spread.allocation, vec![831, 826, 849]);
    assert_eq!(spread.guaranteed_profit, dec!(687.750));
}

#[test]
fn near_par_market_has_no_profit() {
    let prices = [dec!(0.99), dec!(0.99)];
    for max_shares in [1, 50, 850] {
        let spread =
            find_best_spread(&prices, max_shares, SearchMode::BestOverRange, fee()).unwrap();
        assert!(spread.guaranteed_profit <= Decimal::ZERO);
        assert_eq!(spread, Spread::empty(2));
    }
}

#[test]
fn priced_out_bin_behaves_like_smaller_market() {
    for ceiling in [1, 3, 40, 399] {
        let with_par = proportional_allocation(&[dec!(1.0), dec!(0.50), dec!(0.50)], ceiling, fee())
            .unwrap();
        let two_bin = proportional_allocation(&[dec!(0.50), dec!(0.50)], ceiling, fee()).unwrap();

        assert_eq!(with_par[0], 0);
        assert_eq!(&with_par[1..], two_bin.as_slice());
    }

    let with_par = find_best_spread(
        &[dec!(1.0), dec!(0.3), dec!(0.3), dec!(0.3)],
        100,
        SearchMode::BestOverRange,
        fee(),
    )
    .unwrap();
    let three_bin = find_best_spread(
        &[dec!(0.3), dec!(0.3), dec!(0.3)],
        100,
        SearchMode::BestOverRange,
        fee(),
    )
    .unwrap();

    assert_eq!(with_par.allocation, vec![0, 100, 100, 100]);
    assert_eq!(three_bin.allocation, vec![100, 100, 100]);
    assert_eq!(with_par.guaranteed_profit, dec!(96.000));
    assert_eq!(with_par.guaranteed_profit, three_bin.guaranteed_profit);
}

#[test]
fn first_fit_can_exceed_budget() {
    let prices = [dec!(0.62), dec!(0.71), dec!(0.55), dec!(0.80)];

    let first = find_best_spread(&prices, 500, SearchMode::FirstFit, fee()).unwrap();
    assert_eq!(first.allocation, vec![636, 630, 641, 625]);
    assert_eq!(first.guaranteed_profit, dec!(141.547));

    let best = find_best_spread(&prices, 500, SearchMode::BestOverRange, fee()).unwrap();
    assert_eq!(best.allocation, vec![496, 492, 500, 487]);
    assert_eq!(best.guaranteed_profit, dec!(110.472));
}

#[test]
fn fully_priced_out_market_is_degenerate() {
    let prices = [dec!(1), dec!(1), dec!(1)];
    assert_eq!(
        find_best_spread(&prices, 10, SearchMode::BestOverRange, fee()),
        Err(DomainError::DegenerateMarket)
    );
}

#[test]
fn exact_quotient_keeps_the_last_whole_share() {
    let prices = [dec!(0.88), dec!(0.75), dec!(0.16), dec!(0.59), dec!(0.5)];
    let spread = find_best_spread(&prices, 108, SearchMode::BestOverRange, fee()).unwrap();

    assert_eq!(spread.allocation, vec![100, 101, 107, 103, 104]);
    assert_eq!(spread.guaranteed_profit, dec!(100.424));
    assert_eq!(spread.ceiling, Some(88));

    // One share short in the last bin, as a lossy float evaluation gives.
    let short = score_payoffs(&[100, 101, 107, 103, 103], &prices, fee()).unwrap();
    assert_eq!(short.guaranteed_profit, dec!(99.974));
    assert!(short.guaranteed_profit < spread.guaranteed_profit);
}
