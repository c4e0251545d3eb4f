//! Compte de résultat (SYSCOHADA révisé).
//!
//! Every T* and R* line reads the current balance of the group with the same
//! code. Revenues are added and charges subtracted in the X* totals.

use super::definition::{C, Identity, LayoutRow, LineDefinition, LineKey, LineKind, StatementDefinition, Term};

/// Lines of the profit-and-loss statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum ProfitLossLine {
    Ta,
    Ra,
    Rb,
    Xa,
    Tb,
    Tc,
    Td,
    Xb,
    Te,
    Tf,
    Tg,
    Th,
    Ti,
    Rc,
    Rd,
    Re,
    Rf,
    Rg,
    Rh,
    Ri,
    Rj,
    Xc,
    Rk,
    Xd,
    Tj,
    Rl,
    Xe,
    Tk,
    Tl,
    Tm,
    Rm,
    Rn,
    Xf,
    Xg,
    Tn,
    To,
    Ro,
    Rp,
    Xh,
    Rq,
    Rs,
    Xi,
}

impl LineKey for ProfitLossLine {
    fn code(self) -> &'static str {
        match self {
            Self::Ta => "TA",
            Self::Ra => "RA",
            Self::Rb => "RB",
            Self::Xa => "XA",
            Self::Tb => "TB",
            Self::Tc => "TC",
            Self::Td => "TD",
            Self::Xb => "XB",
            Self::Te => "TE",
            Self::Tf => "TF",
            Self::Tg => "TG",
            Self::Th => "TH",
            Self::Ti => "TI",
            Self::Rc => "RC",
            Self::Rd => "RD",
            Self::Re => "RE",
            Self::Rf => "RF",
            Self::Rg => "RG",
            Self::Rh => "RH",
            Self::Ri => "RI",
            Self::Rj => "RJ",
            Self::Xc => "XC",
            Self::Rk => "RK",
            Self::Xd => "XD",
            Self::Tj => "TJ",
            Self::Rl => "RL",
            Self::Xe => "XE",
            Self::Tk => "TK",
            Self::Tl => "TL",
            Self::Tm => "TM",
            Self::Rm => "RM",
            Self::Rn => "RN",
            Self::Xf => "XF",
            Self::Xg => "XG",
            Self::Tn => "TN",
            Self::To => "TO",
            Self::Ro => "RO",
            Self::Rp => "RP",
            Self::Xh => "XH",
            Self::Rq => "RQ",
            Self::Rs => "RS",
            Self::Xi => "XI",
        }
    }
}

use ProfitLossLine as P;

macro_rules! group_line {
    ($key:expr, $code:literal, $note:expr, $description:literal) => {
        LineDefinition {
            key: $key,
            description: $description,
            note: $note,
            kind: LineKind::Group,
            terms: &[Term::plus(C, $code)],
        }
    };
}

const XA: &[Term<P>] = &[Term::plus_line(P::Ta), Term::minus_line(P::Ra), Term::minus_line(P::Rb)];

const XB: &[Term<P>] = &[
    Term::plus_line(P::Ta),
    Term::plus_line(P::Tb),
    Term::plus_line(P::Tc),
    Term::plus_line(P::Td),
];

const XC: &[Term<P>] = &[
    Term::plus_line(P::Xa),
    Term::plus_line(P::Tb),
    Term::plus_line(P::Tc),
    Term::plus_line(P::Td),
    Term::plus_line(P::Te),
    Term::plus_line(P::Tf),
    Term::plus_line(P::Tg),
    Term::plus_line(P::Th),
    Term::plus_line(P::Ti),
    Term::minus_line(P::Rc),
    Term::minus_line(P::Rd),
    Term::minus_line(P::Re),
    Term::minus_line(P::Rf),
    Term::minus_line(P::Rg),
    Term::minus_line(P::Rh),
    Term::minus_line(P::Ri),
    Term::minus_line(P::Rj),
];

const XD: &[Term<P>] = &[Term::plus_line(P::Xc), Term::minus_line(P::Rk)];
const XE: &[Term<P>] = &[Term::plus_line(P::Xd), Term::plus_line(P::Tj), Term::minus_line(P::Rl)];

const XF: &[Term<P>] = &[
    Term::plus_line(P::Tk),
    Term::plus_line(P::Tl),
    Term::plus_line(P::Tm),
    Term::minus_line(P::Rm),
    Term::minus_line(P::Rn),
];

const XG: &[Term<P>] = &[Term::plus_line(P::Xe), Term::plus_line(P::Xf)];

const XH: &[Term<P>] = &[
    Term::plus_line(P::Tn),
    Term::plus_line(P::To),
    Term::minus_line(P::Ro),
    Term::minus_line(P::Rp),
];

const XI: &[Term<P>] = &[
    Term::plus_line(P::Xg),
    Term::plus_line(P::Xh),
    Term::minus_line(P::Rq),
    Term::minus_line(P::Rs),
];

const fn total(key: P, description: &'static str, terms: &'static [Term<P>]) -> LineDefinition<P> {
    LineDefinition {
        key,
        description,
        note: None,
        kind: LineKind::Total,
        terms,
    }
}

static LINES: [LineDefinition<P>; 42] = [
    group_line!(P::Ta, "TA", Some("21"), "Ventes de marchandises"),
    group_line!(P::Ra, "RA", Some("22"), "Achats de marchandises"),
    group_line!(P::Rb, "RB", Some("6"), "Variation de stocks de marchandises"),
    total(P::Xa, "MARGE COMMERCIALE (Somme TA à RB)", XA),
    group_line!(P::Tb, "TB", Some("21"), "Ventes de produits fabriqués"),
    group_line!(P::Tc, "TC", Some("21"), "Travaux, services vendus"),
    group_line!(P::Td, "TD", Some("21"), "Produits accessoires"),
    total(P::Xb, "CHIFFRE D'AFFAIRES (A + B + C + D)", XB),
    group_line!(P::Te, "TE", Some("6"), "Production stockée (ou déstockage)"),
    group_line!(P::Tf, "TF", Some("21"), "Production immobilisée"),
    group_line!(P::Tg, "TG", Some("21"), "Subventions d'exploitation"),
    group_line!(P::Th, "TH", Some("21"), "Autres produits"),
    group_line!(P::Ti, "TI", Some("12"), "Transferts de charges d'exploitation"),
    group_line!(P::Rc, "RC", Some("22"), "Achats de matières premières et fournitures liées"),
    group_line!(
        P::Rd,
        "RD",
        Some("6"),
        "Variation de stocks de matières premières et fournitures liées"
    ),
    group_line!(P::Re, "RE", Some("22"), "Autres achats"),
    group_line!(P::Rf, "RF", Some("6"), "Variation de stocks d'autres approvisionnements"),
    group_line!(P::Rg, "RG", Some("23"), "Transports"),
    group_line!(P::Rh, "RH", Some("24"), "Services extérieurs"),
    group_line!(P::Ri, "RI", Some("25"), "Impôts et taxes"),
    group_line!(P::Rj, "RJ", Some("26"), "Autres charges"),
    total(P::Xc, "VALEUR AJOUTÉE (XB+RA+RB) + (somme TE à RJ)", XC),
    group_line!(P::Rk, "RK", Some("27"), "Charges de personnel"),
    total(P::Xd, "EXCÉDENT BRUT D'EXPLOITATION (XC+RK)", XD),
    group_line!(
        P::Tj,
        "TJ",
        Some("28"),
        "Reprises d'amortissements, provisions et dépréciations"
    ),
    group_line!(
        P::Rl,
        "RL",
        Some("3C&28"),
        "Dotations aux amortissements, aux provisions et dépréciations"
    ),
    total(P::Xe, "RÉSULTAT D'EXPLOITATION (XD+TJ+RL)", XE),
    group_line!(P::Tk, "TK", Some("29"), "Revenus financiers et assimilés"),
    group_line!(P::Tl, "TL", Some("28"), "Reprises de provisions et dépréciations financières"),
    group_line!(P::Tm, "TM", Some("12"), "Transferts de charges financières"),
    group_line!(P::Rm, "RM", Some("29"), "Frais financiers et charges assimilées"),
    group_line!(
        P::Rn,
        "RN",
        Some("3C&28"),
        "Dotations aux provisions et aux dépréciations financières"
    ),
    total(P::Xf, "RÉSULTAT FINANCIER (somme TK à RN)", XF),
    total(P::Xg, "RÉSULTAT DES ACTIVITÉS ORDINAIRES (XE+XF)", XG),
    group_line!(P::Tn, "TN", Some("3D"), "Produits des cessions d'immobilisations"),
    group_line!(P::To, "TO", Some("30"), "Autres Produits HAO"),
    group_line!(P::Ro, "RO", Some("3D"), "Valeurs comptables des cessions d'immobilisations"),
    group_line!(P::Rp, "RP", Some("30"), "Autres Charges HAO"),
    total(P::Xh, "RÉSULTAT HORS ACTIVITÉS ORDINAIRES (somme TN à RP)", XH),
    group_line!(P::Rq, "RQ", Some("30"), "Participation des travailleurs"),
    group_line!(P::Rs, "RS", Some("37"), "Impôts sur le résultat"),
    total(P::Xi, "RÉSULTAT NET (XG+XH+RQ+RS)", XI),
];

static LAYOUT: [LayoutRow<P>; 42] = [
    LayoutRow::Line(P::Ta),
    LayoutRow::Line(P::Ra),
    LayoutRow::Line(P::Rb),
    LayoutRow::Line(P::Xa),
    LayoutRow::Line(P::Tb),
    LayoutRow::Line(P::Tc),
    LayoutRow::Line(P::Td),
    LayoutRow::Line(P::Xb),
    LayoutRow::Line(P::Te),
    LayoutRow::Line(P::Tf),
    LayoutRow::Line(P::Tg),
    LayoutRow::Line(P::Th),
    LayoutRow::Line(P::Ti),
    LayoutRow::Line(P::Rc),
    LayoutRow::Line(P::Rd),
    LayoutRow::Line(P::Re),
    LayoutRow::Line(P::Rf),
    LayoutRow::Line(P::Rg),
    LayoutRow::Line(P::Rh),
    LayoutRow::Line(P::Ri),
    LayoutRow::Line(P::Rj),
    LayoutRow::Line(P::Xc),
    LayoutRow::Line(P::Rk),
    LayoutRow::Line(P::Xd),
    LayoutRow::Line(P::Tj),
    LayoutRow::Line(P::Rl),
    LayoutRow::Line(P::Xe),
    LayoutRow::Line(P::Tk),
    LayoutRow::Line(P::Tl),
    LayoutRow::Line(P::Tm),
    LayoutRow::Line(P::Rm),
    LayoutRow::Line(P::Rn),
    LayoutRow::Line(P::Xf),
    LayoutRow::Line(P::Xg),
    LayoutRow::Line(P::Tn),
    LayoutRow::Line(P::To),
    LayoutRow::Line(P::Ro),
    LayoutRow::Line(P::Rp),
    LayoutRow::Line(P::Xh),
    LayoutRow::Line(P::Rq),
    LayoutRow::Line(P::Rs),
    LayoutRow::Line(P::Xi),
];

static IDENTITIES: [Identity<P>; 3] = [
    Identity {
        total: P::Xi,
        components: XI,
    },
    Identity {
        total: P::Xg,
        components: XG,
    },
    Identity {
        total: P::Xd,
        components: XD,
    },
];

/// The profit-and-loss statement.
pub static PROFIT_LOSS: StatementDefinition<ProfitLossLine> = StatementDefinition {
    title: "COMPTE DE RESULTAT",
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
    use rust_decimal_macros::dec;

    fn snapshot(groups: &[(&str, rust_decimal::Decimal)]) -> BalanceSnapshot {
        groups.iter().fold(BalanceSnapshot::new(false), |snapshot, (code, value)| {
            snapshot.with_group(AccountGroupBalance {
                code: (*code).to_string(),
                current: GroupAmounts::default().with(AmountField::Current, *value),
                previous: None,
            })
        })
    }

    #[test]
    fn test_definition_is_valid() {
        let order = validate(&PROFIT_LOSS).unwrap();
        assert_eq!(order.len(), LINES.len());
        assert_eq!(PROFIT_LOSS.group_codes().len(), 33);
    }

    #[test]
    fn test_group_lines_read_their_own_code() {
        for line in PROFIT_LOSS.lines.iter().filter(|line| line.kind == LineKind::Group) {
            assert_eq!(line.terms, &[Term::plus(C, line.key.code())], "{}", line.key.code());
        }
    }

    #[test]
    fn test_net_result() {
        let balances = snapshot(&[
            ("TA", dec!(10000)),
            ("RA", dec!(6000)),
            ("RB", dec!(-500)),
            ("TB", dec!(2000)),
            ("RE", dec!(700)),
            ("RK", dec!(1800)),
            ("RL", dec!(400)),
            ("TK", dec!(150)),
            ("RM", dec!(250)),
            ("TN", dec!(900)),
            ("RO", dec!(600)),
            ("RS", dec!(300)),
        ]);
        let evaluation = FormulaEngine::evaluate(&PROFIT_LOSS, &balances, PeriodColumn::Current)
            .unwrap()
            .unwrap();

        assert_eq!(evaluation.value(P::Xa), dec!(4500));
        assert_eq!(evaluation.value(P::Xb), dec!(12000));
        assert_eq!(evaluation.value(P::Xc), dec!(5800));
        assert_eq!(evaluation.value(P::Xd), dec!(4000));
        assert_eq!(evaluation.value(P::Xe), dec!(3600));
        assert_eq!(evaluation.value(P::Xf), dec!(-100));
        assert_eq!(evaluation.value(P::Xg), dec!(3500));
        assert_eq!(evaluation.value(P::Xh), dec!(300));
        assert_eq!(evaluation.value(P::Xi), dec!(3500));
        assert!(FormulaEngine::cross_check(&PROFIT_LOSS, &evaluation).is_empty());
    }
}
