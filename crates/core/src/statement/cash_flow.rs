//! Tableau des flux de trésorerie (SYSCOHADA révisé).
//!
//! Group balances use the `C`/`O`/`D`/`K` shorthands for current, opening,
//! debit and credit amounts. Some terms cancel or repeat (FA reads FA1 and
//! FA2 twice, FD4 is added with an unconfirmed sign); they are kept so the
//! figures reconcile with statements already filed from the same ledger.

use super::definition::{
    C, D, Identity, K, LayoutRow, LineDefinition, LineKey, LineKind, O, StatementDefinition, Term,
};

/// Lines of the cash-flow statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CashFlowLine {
    /// Opening net cash.
    Za,
    /// Overall self-financing capacity.
    Fa,
    /// Change in non-operating current assets.
    Fb,
    /// Change in inventories.
    Fc,
    /// Change in receivables.
    Fd,
    /// Change in current liabilities.
    Fe,
    /// Working-capital variation subtotal.
    Bf,
    /// Operating cash flow.
    Zb,
    /// Intangible acquisitions.
    Ff,
    /// Tangible acquisitions.
    Fg,
    /// Financial acquisitions.
    Fh,
    /// Intangible and tangible disposals.
    Fi,
    /// Financial disposals.
    Fj,
    /// Investing cash flow.
    Zc,
    /// Capital increases.
    Fk,
    /// Investment grants received.
    Fl,
    /// Capital withdrawals.
    Fm,
    /// Dividends paid.
    Fn,
    /// Equity financing cash flow.
    Zd,
    /// Borrowings.
    Fo,
    /// Other financial debts.
    Fp,
    /// Repayments.
    Fq,
    /// Debt financing cash flow.
    Ze,
    /// Financing cash flow.
    Zf,
    /// Net cash variation.
    Zg,
    /// Closing net cash.
    Zh,
}

impl CashFlowLine {
    /// Every line, in table order.
    pub const ALL: [Self; 26] = [
        Self::Za,
        Self::Fa,
        Self::Fb,
        Self::Fc,
        Self::Fd,
        Self::Fe,
        Self::Bf,
        Self::Zb,
        Self::Ff,
        Self::Fg,
        Self::Fh,
        Self::Fi,
        Self::Fj,
        Self::Zc,
        Self::Fk,
        Self::Fl,
        Self::Fm,
        Self::Fn,
        Self::Zd,
        Self::Fo,
        Self::Fp,
        Self::Fq,
        Self::Ze,
        Self::Zf,
        Self::Zg,
        Self::Zh,
    ];
}

impl LineKey for CashFlowLine {
    fn code(self) -> &'static str {
        match self {
            Self::Za => "ZA",
            Self::Fa => "FA",
            Self::Fb => "FB",
            Self::Fc => "FC",
            Self::Fd => "FD",
            Self::Fe => "FE",
            Self::Bf => "BF",
            Self::Zb => "ZB",
            Self::Ff => "FF",
            Self::Fg => "FG",
            Self::Fh => "FH",
            Self::Fi => "FI",
            Self::Fj => "FJ",
            Self::Zc => "ZC",
            Self::Fk => "FK",
            Self::Fl => "FL",
            Self::Fm => "FM",
            Self::Fn => "FN",
            Self::Zd => "ZD",
            Self::Fo => "FO",
            Self::Fp => "FP",
            Self::Fq => "FQ",
            Self::Ze => "ZE",
            Self::Zf => "ZF",
            Self::Zg => "ZG",
            Self::Zh => "ZH",
        }
    }

    fn reference(self) -> &'static str {
        match self {
            Self::Bf => "",
            other => other.code(),
        }
    }
}

use CashFlowLine as L;

const fn group(key: L, description: &'static str, terms: &'static [Term<L>]) -> LineDefinition<L> {
    LineDefinition {
        key,
        description,
        note: None,
        kind: LineKind::Group,
        terms,
    }
}

const fn total(key: L, description: &'static str, terms: &'static [Term<L>]) -> LineDefinition<L> {
    LineDefinition {
        key,
        description,
        note: None,
        kind: LineKind::Total,
        terms,
    }
}

const ZA: &[Term<L>] = &[
    Term::plus(O, "BQ"),
    Term::plus(O, "BR"),
    Term::plus(O, "BS"),
    Term::plus(O, "DQ"),
    Term::plus(O, "DR"),
];

const FA: &[Term<L>] = &[
    Term::plus(C, "TA"),
    Term::plus(C, "TB"),
    Term::plus(C, "TD"),
    Term::plus(C, "TE"),
    Term::plus(C, "TH"),
    Term::plus(C, "FF5"),
    Term::plus(C, "FG6"),
    Term::plus(C, "FA1"),
    Term::minus(C, "RA"),
    Term::minus(C, "RB"),
    Term::minus(C, "RC"),
    Term::minus(C, "RE"),
    Term::minus(C, "RH"),
    Term::minus(C, "RJ"),
    Term::minus(C, "RK"),
    Term::minus(C, "FA2"),
    Term::plus(C, "FA2"),
    Term::plus(C, "FA1"),
    Term::minus(C, "TK"),
    Term::minus(C, "TM"),
    Term::minus(C, "TL"),
    Term::minus(C, "RM"),
    Term::minus(C, "RN"),
    Term::minus(C, "TO"),
    Term::minus(C, "RP"),
    Term::minus(C, "RQ"),
    Term::minus(C, "RS"),
];

const FB: &[Term<L>] = &[Term::plus(C, "BA"), Term::minus(O, "BA")];

const FC: &[Term<L>] = &[Term::plus(C, "BB"), Term::plus(C, "BBA"), Term::minus(O, "BB")];

const FD: &[Term<L>] = &[
    Term::plus(C, "BH"),
    Term::plus(C, "BI"),
    Term::plus(C, "BJ"),
    Term::plus(C, "FD5"),
    Term::plus(C, "FD6"),
    Term::plus(C, "BHA"),
    Term::plus(C, "BIA"),
    Term::plus(C, "BJA"),
    Term::minus(O, "BH"),
    Term::minus(O, "BI"),
    Term::minus(O, "BJ"),
    Term::minus(O, "BHA"),
    Term::minus(O, "BIA"),
    Term::minus(O, "BJA"),
    Term::plus(C, "FD1"),
    Term::minus(O, "FD1"),
    Term::plus(C, "FD2"),
    Term::minus(O, "FD2"),
    Term::minus(C, "FD3"),
    Term::plus(O, "FD3"),
    Term::plus(C, "FD4"),
    Term::minus(O, "FD4"),
    Term::minus(D, "FD5"),
    Term::minus(D, "FD6"),
];

const FE: &[Term<L>] = &[
    Term::plus(C, "DI"),
    Term::plus(C, "DJ"),
    Term::plus(C, "DK"),
    Term::plus(C, "DM"),
    Term::plus(C, "DN"),
    Term::minus(O, "DI"),
    Term::minus(O, "DJ"),
    Term::minus(O, "DK"),
    Term::minus(O, "DM"),
    Term::minus(O, "DN"),
    Term::plus(C, "FE1"),
    Term::minus(O, "FE1"),
    Term::minus(C, "FE2"),
    Term::plus(O, "FE2"),
    Term::minus(C, "FE3"),
    Term::plus(O, "FE3"),
    Term::minus(C, "FE4"),
    Term::plus(O, "FE4"),
    Term::minus(C, "FE5"),
    Term::plus(O, "FE5"),
    Term::minus(C, "FE6"),
    Term::plus(O, "FE6"),
    Term::minus(C, "FE7"),
    Term::plus(O, "FE7"),
    Term::minus(K, "FE8"),
    Term::plus(K, "FE9"),
];

const BF: &[Term<L>] = &[
    Term::minus_line(L::Fb),
    Term::minus_line(L::Fc),
    Term::minus_line(L::Fd),
    Term::plus_line(L::Fe),
];

const ZB: &[Term<L>] = &[
    Term::plus_line(L::Fa),
    Term::minus_line(L::Fb),
    Term::minus_line(L::Fc),
    Term::minus_line(L::Fd),
    Term::plus_line(L::Fe),
];

const FF: &[Term<L>] = &[
    Term::plus(D, "AE"),
    Term::plus(D, "AF"),
    Term::plus(D, "AG"),
    Term::plus(D, "AH"),
    Term::minus(K, "FF1"),
    Term::plus(D, "FD5"),
    Term::minus(K, "FF2"),
    Term::plus(D, "FF2"),
    Term::minus(K, "FE2"),
    Term::plus(D, "FE2"),
    Term::plus(D, "FF3"),
    Term::minus(K, "FF3"),
    Term::minus(K, "FF4"),
    Term::minus(K, "FF5"),
];

const FG: &[Term<L>] = &[
    Term::plus(D, "AJ"),
    Term::plus(D, "AK"),
    Term::plus(D, "AL"),
    Term::plus(D, "AM"),
    Term::plus(D, "AN"),
    Term::minus(K, "FG1"),
    Term::plus(D, "FD6"),
    Term::plus(K, "FE3"),
    Term::minus(D, "FE3"),
    Term::minus(D, "FG2"),
    Term::plus(K, "FG2"),
    Term::plus(K, "FG4"),
    Term::plus(K, "FG5"),
    Term::plus(K, "FG6"),
    Term::minus(C, "FG7"),
    Term::minus(C, "FG8"),
];

const FH: &[Term<L>] = &[
    Term::plus(D, "FH1"),
    Term::minus(K, "FH2"),
    Term::minus(K, "FH3"),
    Term::minus(K, "FH4"),
    Term::plus(D, "FH2"),
];

const FI: &[Term<L>] = &[
    Term::minus(K, "FI2"),
    Term::plus(D, "FI1"),
    Term::minus(K, "FI1"),
    Term::minus(K, "FA1"),
    Term::plus(D, "FI3"),
    Term::plus(K, "FI3"),
];

const FJ: &[Term<L>] = &[
    Term::minus(K, "FJ1"),
    Term::plus(D, "FJ2"),
    Term::minus(K, "FJ2"),
    Term::minus(K, "AS"),
    Term::plus(D, "FH3"),
    Term::minus(D, "FH4"),
];

const ZC: &[Term<L>] = &[
    Term::minus_line(L::Ff),
    Term::minus_line(L::Fg),
    Term::minus_line(L::Fh),
    Term::plus_line(L::Fi),
    Term::plus_line(L::Fj),
];

const FK: &[Term<L>] = &[Term::minus(K, "FE4")];
const FL: &[Term<L>] = &[Term::minus(K, "FL")];
const FM: &[Term<L>] = &[Term::minus(D, "FE6")];
const FN: &[Term<L>] = &[Term::minus(D, "FE7")];

const ZD: &[Term<L>] = &[
    Term::plus_line(L::Fk),
    Term::plus_line(L::Fl),
    Term::minus_line(L::Fm),
    Term::minus_line(L::Fn),
];

const FO: &[Term<L>] = &[Term::plus(K, "FO1"), Term::minus(D, "FO2"), Term::minus(D, "FO3")];
const FP: &[Term<L>] = &[Term::plus(C, "FP")];
const FQ: &[Term<L>] = &[Term::plus(D, "FO1"), Term::minus(K, "FO2"), Term::minus(K, "FO3")];

const ZE: &[Term<L>] = &[Term::plus_line(L::Fo), Term::plus_line(L::Fp), Term::minus_line(L::Fq)];
const ZF: &[Term<L>] = &[Term::plus_line(L::Zd), Term::plus_line(L::Ze)];
const ZG: &[Term<L>] = &[Term::plus_line(L::Zb), Term::plus_line(L::Zc), Term::plus_line(L::Zf)];
const ZH: &[Term<L>] = &[Term::plus_line(L::Za), Term::plus_line(L::Zg)];

static LINES: [LineDefinition<L>; 26] = [
    group(
        L::Za,
        "Trésorerie nette au 1er janvier (Trésorerie actif N-1 - Trésorerie passif N-1)",
        ZA,
    ),
    group(L::Fa, "Capacité d'Autofinancement Globale (CAFG)", FA),
    group(L::Fb, "- Actif circulant HAO (1)", FB),
    group(L::Fc, "- Variation des stocks", FC),
    group(L::Fd, "- Variation des créances", FD),
    group(L::Fe, "+ Variation du passif circulant (1)", FE),
    total(
        L::Bf,
        "Variation du BF lié aux activités opérationnelles (FB+FC+FD+FE)",
        BF,
    ),
    total(
        L::Zb,
        "Flux de trésorerie provenant des activités opérationnelles (somme FA à FE)",
        ZB,
    ),
    group(
        L::Ff,
        "- Décaissements liés aux acquisitions d'immobilisations incorporelles",
        FF,
    ),
    group(
        L::Fg,
        "- Décaissements liés aux acquisitions d'immobilisations corporelles",
        FG,
    ),
    group(
        L::Fh,
        "- Décaissements liés aux acquisitions d'immobilisations financières",
        FH,
    ),
    group(
        L::Fi,
        "+ Encaissements liés aux cessions d'immobilisations incorporelles et corporelles",
        FI,
    ),
    group(
        L::Fj,
        "+ Encaissements liés aux cessions d'immobilisations financières",
        FJ,
    ),
    total(
        L::Zc,
        "Flux de trésorerie provenant des activités d'investissement (somme FF à FJ)",
        ZC,
    ),
    group(L::Fk, "+ Augmentations de capital par apports nouveaux", FK),
    group(L::Fl, "+ Subventions d'investissement reçues", FL),
    group(L::Fm, "- Prélèvements sur le capital", FM),
    group(L::Fn, "- Dividendes versés", FN),
    total(
        L::Zd,
        "Flux de trésorerie provenant des capitaux propres (somme FK à FN)",
        ZD,
    ),
    group(L::Fo, "+ Emprunts", FO),
    group(L::Fp, "+ Autres dettes financières", FP),
    group(
        L::Fq,
        "- Remboursements des emprunts et autres dettes financières",
        FQ,
    ),
    total(
        L::Ze,
        "Flux de trésorerie provenant des capitaux étrangers (somme FO à FQ)",
        ZE,
    ),
    total(
        L::Zf,
        "Flux de trésorerie provenant des activités de financement (D+E)",
        ZF,
    ),
    total(
        L::Zg,
        "VARIATION DE LA TRÉSORERIE NETTE DE LA PÉRIODE (B+C+F)",
        ZG,
    ),
    total(L::Zh, "Trésorerie nette au 31 Décembre (G+A)", ZH),
];

static LAYOUT: [LayoutRow<L>; 30] = [
    LayoutRow::Line(L::Za),
    LayoutRow::Title("Flux de trésorerie provenant des activités opérationnelles"),
    LayoutRow::Line(L::Fa),
    LayoutRow::Line(L::Fb),
    LayoutRow::Line(L::Fc),
    LayoutRow::Line(L::Fd),
    LayoutRow::Line(L::Fe),
    LayoutRow::Line(L::Bf),
    LayoutRow::Line(L::Zb),
    LayoutRow::Title("Flux de trésorerie provenant des activités d'investissements"),
    LayoutRow::Line(L::Ff),
    LayoutRow::Line(L::Fg),
    LayoutRow::Line(L::Fh),
    LayoutRow::Line(L::Fi),
    LayoutRow::Line(L::Fj),
    LayoutRow::Line(L::Zc),
    LayoutRow::Title("Flux de trésorerie provenant du financement par les capitaux propres"),
    LayoutRow::Line(L::Fk),
    LayoutRow::Line(L::Fl),
    LayoutRow::Line(L::Fm),
    LayoutRow::Line(L::Fn),
    LayoutRow::Line(L::Zd),
    LayoutRow::Title("Trésorerie provenant du financement par les capitaux étrangers"),
    LayoutRow::Line(L::Fo),
    LayoutRow::Line(L::Fp),
    LayoutRow::Line(L::Fq),
    LayoutRow::Line(L::Ze),
    LayoutRow::Line(L::Zf),
    LayoutRow::Line(L::Zg),
    LayoutRow::Line(L::Zh),
];

static IDENTITIES: [Identity<L>; 7] = [
    Identity {
        total: L::Zh,
        components: ZH,
    },
    Identity {
        total: L::Zg,
        components: ZG,
    },
    Identity {
        total: L::Zf,
        components: ZF,
    },
    Identity {
        total: L::Zb,
        components: &[Term::plus_line(L::Fa), Term::plus_line(L::Bf)],
    },
    Identity {
        total: L::Ze,
        components: ZE,
    },
    Identity {
        total: L::Zd,
        components: ZD,
    },
    Identity {
        total: L::Zc,
        components: ZC,
    },
];

/// The cash-flow statement.
pub static CASH_FLOW: StatementDefinition<CashFlowLine> = StatementDefinition {
    title: "TABLEAU DES FLUX DE TRESORERIE",
    lines: &LINES,
    layout: &LAYOUT,
    identities: &IDENTITIES,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::{AccountGroupBalance, BalanceSnapshot, GroupAmounts, PeriodColumn};
    use crate::ledger::AmountField;
    use crate::statement::engine::FormulaEngine;
    use crate::statement::order::validate;
    use crate::statement::sequencer::sequence;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn snapshot(groups: &[(&str, GroupAmounts)]) -> BalanceSnapshot {
        groups.iter().fold(BalanceSnapshot::new(false), |snapshot, (code, amounts)| {
            snapshot.with_group(AccountGroupBalance {
                code: (*code).to_string(),
                current: *amounts,
                previous: None,
            })
        })
    }

    fn current(value: Decimal) -> GroupAmounts {
        GroupAmounts::default().with(AmountField::Current, value)
    }

    fn opening(value: Decimal) -> GroupAmounts {
        GroupAmounts::default().with(AmountField::Opening, value)
    }

    fn evaluate(snapshot: &BalanceSnapshot) -> crate::statement::engine::Evaluation<CashFlowLine> {
        FormulaEngine::evaluate(&CASH_FLOW, snapshot, PeriodColumn::Current)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_definition_is_valid() {
        let order = validate(&CASH_FLOW).unwrap();
        assert_eq!(order, CashFlowLine::ALL.to_vec());
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: std::collections::BTreeSet<_> = CashFlowLine::ALL.iter().map(|line| line.code()).collect();
        assert_eq!(codes.len(), CashFlowLine::ALL.len());
        assert_eq!(CashFlowLine::Bf.reference(), "");
        assert_eq!(CashFlowLine::Zh.reference(), "ZH");
    }

    #[test]
    fn test_layout_order() {
        let evaluation = evaluate(&BalanceSnapshot::new(false));
        let rows: Vec<&str> = sequence(&CASH_FLOW, &evaluation, None)
            .iter()
            .map(|item| if item.code.is_empty() { "title" } else { item.code })
            .collect();
        assert_eq!(
            rows,
            vec![
                "ZA", "title", "FA", "FB", "FC", "FD", "FE", "BF", "ZB", "title", "FF", "FG", "FH", "FI",
                "FJ", "ZC", "title", "FK", "FL", "FM", "FN", "ZD", "title", "FO", "FP", "FQ", "ZE", "ZF",
                "ZG", "ZH",
            ]
        );
    }

    #[test]
    fn test_all_zero_balances() {
        let evaluation = evaluate(&BalanceSnapshot::new(false));
        let items = sequence(&CASH_FLOW, &evaluation, None);

        for item in &items {
            match item.kind {
                LineKind::Title => assert_eq!(item.current_value, None),
                _ => assert_eq!(item.current_value, Some(Decimal::ZERO), "{}", item.code),
            }
            assert_eq!(item.previous_value, None);
        }
        assert!(FormulaEngine::cross_check(&CASH_FLOW, &evaluation).is_empty());
    }

    #[test]
    fn test_opening_cash() {
        let evaluation = evaluate(&snapshot(&[
            ("BQ", opening(dec!(1000))),
            ("BS", opening(dec!(250.50))),
            ("DR", opening(dec!(-300))),
        ]));
        assert_eq!(evaluation.value(CashFlowLine::Za), dec!(950.50));
        assert_eq!(evaluation.value(CashFlowLine::Zh), dec!(950.50));
    }

    #[test]
    fn test_working_capital_subtotal() {
        let evaluation = evaluate(&snapshot(&[
            ("BA", GroupAmounts { opening: dec!(10), current: dec!(30), ..GroupAmounts::default() }),
            ("BB", GroupAmounts { opening: dec!(100), current: dec!(80), ..GroupAmounts::default() }),
            ("DI", GroupAmounts { opening: dec!(50), current: dec!(75), ..GroupAmounts::default() }),
            ("TA", current(dec!(1000))),
            ("RA", current(dec!(400))),
        ]));

        assert_eq!(evaluation.value(CashFlowLine::Fa), dec!(600));
        assert_eq!(evaluation.value(CashFlowLine::Fb), dec!(20));
        assert_eq!(evaluation.value(CashFlowLine::Fc), dec!(-20));
        assert_eq!(evaluation.value(CashFlowLine::Fe), dec!(25));
        assert_eq!(evaluation.value(CashFlowLine::Bf), dec!(25));
        assert_eq!(evaluation.value(CashFlowLine::Zb), dec!(625));
    }

    /// FA reads FA1 twice and FA2 once added, once subtracted.
    #[test]
    fn test_fa_duplicated_terms_are_kept() {
        let evaluation = evaluate(&snapshot(&[("FA1", current(dec!(7))), ("FA2", current(dec!(11)))]));
        assert_eq!(evaluation.value(CashFlowLine::Fa), dec!(14));
    }

    /// FD4 enters FD as current minus opening, like FD1 and FD2.
    #[test]
    fn test_fd4_sign_is_pinned() {
        let evaluation = evaluate(&snapshot(&[(
            "FD4",
            GroupAmounts { opening: dec!(40), current: dec!(100), ..GroupAmounts::default() },
        )]));
        assert_eq!(evaluation.value(CashFlowLine::Fd), dec!(60));

        let evaluation = evaluate(&snapshot(&[(
            "FD3",
            GroupAmounts { opening: dec!(40), current: dec!(100), ..GroupAmounts::default() },
        )]));
        assert_eq!(evaluation.value(CashFlowLine::Fd), dec!(-60));
    }

    #[test]
    fn test_fe_credit_and_debit_terms() {
        let evaluation = evaluate(&snapshot(&[
            ("FE8", GroupAmounts { credit: dec!(5), ..GroupAmounts::default() }),
            ("FE9", GroupAmounts { credit: dec!(12), ..GroupAmounts::default() }),
            ("FE5", GroupAmounts { opening: dec!(3), current: dec!(9), ..GroupAmounts::default() }),
        ]));
        assert_eq!(evaluation.value(CashFlowLine::Fe), dec!(1));
    }

    #[test]
    fn test_investing_section() {
        let evaluation = evaluate(&snapshot(&[
            ("AE", GroupAmounts { debit: dec!(500), ..GroupAmounts::default() }),
            ("AJ", GroupAmounts { debit: dec!(1200), ..GroupAmounts::default() }),
            ("FH1", GroupAmounts { debit: dec!(300), ..GroupAmounts::default() }),
            ("FI1", GroupAmounts { debit: dec!(90), credit: dec!(40), ..GroupAmounts::default() }),
            ("AS", GroupAmounts { credit: dec!(60), ..GroupAmounts::default() }),
        ]));

        assert_eq!(evaluation.value(CashFlowLine::Ff), dec!(500));
        assert_eq!(evaluation.value(CashFlowLine::Fg), dec!(1200));
        assert_eq!(evaluation.value(CashFlowLine::Fh), dec!(300));
        assert_eq!(evaluation.value(CashFlowLine::Fi), dec!(50));
        assert_eq!(evaluation.value(CashFlowLine::Fj), dec!(-60));
        assert_eq!(evaluation.value(CashFlowLine::Zc), dec!(-2010));
    }

    #[test]
    fn test_financing_section() {
        let evaluation = evaluate(&snapshot(&[
            ("FE4", GroupAmounts { credit: dec!(-1000), ..GroupAmounts::default() }),
            ("FL", GroupAmounts { credit: dec!(-200), ..GroupAmounts::default() }),
            ("FE7", GroupAmounts { debit: dec!(-150), ..GroupAmounts::default() }),
            ("FO1", GroupAmounts { debit: dec!(100), credit: dec!(5000), ..GroupAmounts::default() }),
            ("FP", current(dec!(700))),
        ]));

        assert_eq!(evaluation.value(CashFlowLine::Fk), dec!(1000));
        assert_eq!(evaluation.value(CashFlowLine::Fl), dec!(200));
        assert_eq!(evaluation.value(CashFlowLine::Fn), dec!(150));
        assert_eq!(evaluation.value(CashFlowLine::Zd), dec!(1050));
        assert_eq!(evaluation.value(CashFlowLine::Fo), dec!(5000));
        assert_eq!(evaluation.value(CashFlowLine::Fq), dec!(100));
        assert_eq!(evaluation.value(CashFlowLine::Ze), dec!(5600));
        assert_eq!(evaluation.value(CashFlowLine::Zf), dec!(6650));
        assert_eq!(evaluation.value(CashFlowLine::Zg), dec!(6650));
        assert!(FormulaEngine::cross_check(&CASH_FLOW, &evaluation).is_empty());
    }
}
