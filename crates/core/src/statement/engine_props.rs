//! Property-based tests for statement evaluation.
//!
//! - Totals reconcile with their components for arbitrary balances
//! - Evaluation is deterministic
//! - Sequencing never invents values for titles or a missing prior column

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::cash_flow::{CASH_FLOW, CashFlowLine};
use super::definition::{LineKind, StatementDefinition};
use super::engine::FormulaEngine;
use super::profit_loss::PROFIT_LOSS;
use super::sequencer::sequence;
use crate::balance::{AccountGroupBalance, BalanceSnapshot, GroupAmounts, PeriodColumn};

/// Strategy for balances between -10,000,000.00 and 10,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn group_amounts() -> impl Strategy<Value = GroupAmounts> {
    (amount(), amount(), amount(), amount()).prop_map(|(opening, current, debit, credit)| GroupAmounts {
        opening,
        current,
        debit,
        credit,
    })
}

/// Random amounts for every group a statement references.
fn snapshot_for<L: super::LineKey>(
    definition: &'static StatementDefinition<L>,
) -> impl Strategy<Value = BalanceSnapshot> {
    let codes: Vec<&'static str> = definition.group_codes().into_iter().collect();
    let count = codes.len();
    (
        prop::collection::vec(group_amounts(), count),
        prop::collection::vec(group_amounts(), count),
        any::<bool>(),
    )
        .prop_map(move |(current, previous, has_prior)| {
            codes
                .iter()
                .zip(current)
                .zip(previous)
                .fold(BalanceSnapshot::new(has_prior), |snapshot, ((code, current), previous)| {
                    snapshot.with_group(AccountGroupBalance {
                        code: (*code).to_string(),
                        current,
                        previous: has_prior.then_some(previous),
                    })
                })
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// ZH = ZA + ZG, ZG = ZB + ZC + ZF, ZF = ZD + ZE and the section
    /// identities hold in both columns.
    #[test]
    fn prop_cash_flow_totals_reconcile(snapshot in snapshot_for(&CASH_FLOW)) {
        for column in [PeriodColumn::Current, PeriodColumn::Previous] {
            let Some(evaluation) = FormulaEngine::evaluate(&CASH_FLOW, &snapshot, column).unwrap() else {
                prop_assert!(!snapshot.has_prior());
                continue;
            };
            prop_assert!(evaluation.warnings.is_empty());
            prop_assert_eq!(FormulaEngine::cross_check(&CASH_FLOW, &evaluation), vec![]);
            prop_assert_eq!(
                evaluation.value(CashFlowLine::Zh),
                evaluation.value(CashFlowLine::Za) + evaluation.value(CashFlowLine::Zg)
            );
        }
    }

    /// XI = XG + XH - RQ - RS and XG = XE + XF.
    #[test]
    fn prop_profit_loss_totals_reconcile(snapshot in snapshot_for(&PROFIT_LOSS)) {
        let evaluation = FormulaEngine::evaluate(&PROFIT_LOSS, &snapshot, PeriodColumn::Current)
            .unwrap()
            .unwrap();
        prop_assert_eq!(FormulaEngine::cross_check(&PROFIT_LOSS, &evaluation), vec![]);
    }

    /// Evaluating the same snapshot twice gives the same values.
    #[test]
    fn prop_evaluation_is_deterministic(snapshot in snapshot_for(&CASH_FLOW)) {
        let first = FormulaEngine::evaluate(&CASH_FLOW, &snapshot, PeriodColumn::Current).unwrap();
        let second = FormulaEngine::evaluate(&CASH_FLOW, &snapshot, PeriodColumn::Current).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Titles carry no values; the previous column is empty without a prior
    /// window and filled for every line with one.
    #[test]
    fn prop_sequence_values_follow_columns(snapshot in snapshot_for(&CASH_FLOW)) {
        let current = FormulaEngine::evaluate(&CASH_FLOW, &snapshot, PeriodColumn::Current)
            .unwrap()
            .unwrap();
        let previous = FormulaEngine::evaluate(&CASH_FLOW, &snapshot, PeriodColumn::Previous).unwrap();
        let items = sequence(&CASH_FLOW, &current, previous.as_ref());

        prop_assert_eq!(items.len(), CASH_FLOW.layout.len());
        for item in items {
            if item.kind == LineKind::Title {
                prop_assert!(item.current_value.is_none() && item.previous_value.is_none());
            } else {
                prop_assert!(item.current_value.is_some());
                prop_assert_eq!(item.previous_value.is_some(), snapshot.has_prior());
            }
        }
    }
}
