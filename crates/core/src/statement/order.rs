//! Evaluation order of statement lines.

use std::collections::{BTreeSet, HashMap};

use super::definition::{LayoutRow, LineKey, Operand, StatementDefinition};
use super::error::DefinitionError;

/// Orders lines so every line comes after the lines its formula reads.
///
/// Kahn's algorithm; among lines that are ready at the same time, table order
/// wins, so a table already in dependency order comes back unchanged.
///
/// # Errors
///
/// Returns `DefinitionError::DuplicateLine` or `UnknownLine` for malformed
/// tables and `DefinitionError::Cycle` when formulas reference each other.
pub fn evaluation_order<L: LineKey>(definition: &StatementDefinition<L>) -> Result<Vec<L>, DefinitionError> {
    let positions = definition.positions();
    if positions.len() != definition.lines.len() {
        let mut seen = BTreeSet::new();
        for line in definition.lines {
            if !seen.insert(line.key) {
                return Err(DefinitionError::DuplicateLine(line.key.code()));
            }
        }
    }

    let mut pending: Vec<usize> = vec![0; definition.lines.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); definition.lines.len()];
    for (index, line) in definition.lines.iter().enumerate() {
        for dependency in line.dependencies() {
            let Some(&position) = positions.get(&dependency) else {
                return Err(DefinitionError::UnknownLine {
                    referenced: dependency.code(),
                    by: line.key.code(),
                });
            };
            pending[index] += 1;
            dependents[position].push(index);
        }
    }

    let mut ready: BTreeSet<usize> = pending
        .iter()
        .enumerate()
        .filter(|(_, count)| **count == 0)
        .map(|(index, _)| index)
        .collect();
    let mut order = Vec::with_capacity(definition.lines.len());

    while let Some(index) = ready.pop_first() {
        order.push(definition.lines[index].key);
        for &dependent in &dependents[index] {
            pending[dependent] -= 1;
            if pending[dependent] == 0 {
                ready.insert(dependent);
            }
        }
    }

    if order.len() != definition.lines.len() {
        let lines = pending
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(index, _)| definition.lines[index].key.code())
            .collect();
        return Err(DefinitionError::Cycle { lines });
    }

    Ok(order)
}

/// Checks a definition end to end and returns its evaluation order.
///
/// Beyond [`evaluation_order`], every layout row and identity must reference
/// a defined line.
///
/// # Errors
///
/// See [`evaluation_order`].
pub fn validate<L: LineKey>(definition: &StatementDefinition<L>) -> Result<Vec<L>, DefinitionError> {
    let order = evaluation_order(definition)?;
    let positions: HashMap<L, usize> = definition.positions();
    let known = |line: L, by: &'static str| {
        if positions.contains_key(&line) {
            Ok(())
        } else {
            Err(DefinitionError::UnknownLine {
                referenced: line.code(),
                by,
            })
        }
    };

    for row in definition.layout {
        if let LayoutRow::Line(line) = *row {
            known(line, "layout")?;
        }
    }
    for identity in definition.identities {
        known(identity.total, "identity")?;
        for term in identity.components {
            if let Operand::Line(line) = term.operand {
                known(line, identity.total.code())?;
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::definition::{C, Identity, LineDefinition, LineKind, Term};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    enum Key {
        A,
        B,
        T,
        X,
    }

    impl LineKey for Key {
        fn code(self) -> &'static str {
            match self {
                Self::A => "A",
                Self::B => "B",
                Self::T => "T",
                Self::X => "X",
            }
        }
    }

    const GROUP_TERMS: &[Term<Key>] = &[Term::plus(C, "G")];
    const A_MINUS_B: &[Term<Key>] = &[Term::plus_line(Key::A), Term::minus_line(Key::B)];
    const B_PLUS_A: &[Term<Key>] = &[Term::plus_line(Key::B), Term::plus_line(Key::A)];
    const JUST_A: &[Term<Key>] = &[Term::plus_line(Key::A)];
    const JUST_X: &[Term<Key>] = &[Term::plus_line(Key::X)];
    const T_PLUS_A: &[Term<Key>] = &[Term::plus_line(Key::T), Term::plus_line(Key::A)];

    const fn group(key: Key) -> LineDefinition<Key> {
        LineDefinition {
            key,
            description: "",
            note: None,
            kind: LineKind::Group,
            terms: GROUP_TERMS,
        }
    }

    const fn total(key: Key, terms: &'static [Term<Key>]) -> LineDefinition<Key> {
        LineDefinition {
            key,
            description: "",
            note: None,
            kind: LineKind::Total,
            terms,
        }
    }

    const fn statement(lines: &'static [LineDefinition<Key>]) -> StatementDefinition<Key> {
        StatementDefinition {
            title: "test",
            lines,
            layout: &[],
            identities: &[],
        }
    }

    #[test]
    fn test_ordered_table_is_unchanged() {
        static LINES: [LineDefinition<Key>; 3] = [
            group(Key::A),
            group(Key::B),
            total(Key::T, A_MINUS_B),
        ];
        let order = evaluation_order(&statement(&LINES)).unwrap();
        assert_eq!(order, vec![Key::A, Key::B, Key::T]);
    }

    #[test]
    fn test_total_declared_first_moves_after_components() {
        static LINES: [LineDefinition<Key>; 3] = [
            total(Key::T, B_PLUS_A),
            group(Key::B),
            group(Key::A),
        ];
        let order = evaluation_order(&statement(&LINES)).unwrap();
        assert_eq!(order, vec![Key::B, Key::A, Key::T]);
    }

    #[test]
    fn test_cycle_is_rejected() {
        static LINES: [LineDefinition<Key>; 3] = [
            group(Key::A),
            total(Key::T, JUST_X),
            total(Key::X, T_PLUS_A),
        ];
        let result = evaluation_order(&statement(&LINES));
        assert_eq!(
            result,
            Err(DefinitionError::Cycle {
                lines: vec!["T", "X"]
            })
        );
    }

    #[test]
    fn test_dangling_reference_is_rejected() {
        static LINES: [LineDefinition<Key>; 1] = [total(Key::T, JUST_A)];
        let result = evaluation_order(&statement(&LINES));
        assert_eq!(
            result,
            Err(DefinitionError::UnknownLine {
                referenced: "A",
                by: "T"
            })
        );
    }

    #[test]
    fn test_duplicate_line_is_rejected() {
        static LINES: [LineDefinition<Key>; 2] = [group(Key::A), group(Key::A)];
        assert_eq!(
            evaluation_order(&statement(&LINES)),
            Err(DefinitionError::DuplicateLine("A"))
        );
    }

    #[test]
    fn test_validate_checks_identities() {
        static LINES: [LineDefinition<Key>; 1] = [group(Key::A)];
        static DEFINITION: StatementDefinition<Key> = StatementDefinition {
            title: "test",
            lines: &LINES,
            layout: &[LayoutRow::Line(Key::A), LayoutRow::Title("section")],
            identities: &[Identity {
                total: Key::T,
                components: JUST_A,
            }],
        };
        assert_eq!(
            validate(&DEFINITION),
            Err(DefinitionError::UnknownLine {
                referenced: "T",
                by: "identity"
            })
        );
    }
}
