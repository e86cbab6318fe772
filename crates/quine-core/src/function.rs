use std::fmt;

use smol_str::SmolStr;

use crate::error::Result;
use crate::ops::{BinOp, UnaryOp};
use crate::table::{TruthTable, VariableCount};

/// A boolean function represented by its complete truth table.
///
/// Unlike a raw [`TruthTable`], a function's variable list never contains
/// duplicates: combining two functions merges any shared variables into a
/// single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanFunction {
    table: TruthTable,
}

impl BooleanFunction {
    /// The identity function of a single variable: false at row 0, true at
    /// row 1.
    pub fn from_variable(name: impl Into<SmolStr>) -> Result<Self> {
        let mut table = TruthTable::new(vec![name.into()])?;
        table.set(1, true);
        Ok(Self { table })
    }

    pub fn truth_table(&self) -> &TruthTable {
        &self.table
    }

    pub fn variables(&self) -> &[SmolStr] {
        self.table.variables()
    }

    pub fn variable_count(&self) -> VariableCount {
        self.table.variable_count()
    }

    /// Apply a unary operator to every output value.
    pub fn apply_unary(&self, op: UnaryOp) -> BooleanFunction {
        let mut table = self.table.clone();
        for row in 0..table.row_count() {
            table.set(row, op.apply(self.table[row]));
        }
        BooleanFunction { table }
    }

    /// Combine with another function under a binary operator.
    ///
    /// The variable lists are concatenated with `self`'s variables in the
    /// low bits of the combined row index: combined row `i` evaluates
    /// `self` at `i & low_mask(n)` and `other` at `i >> n`, where `n` is
    /// `self`'s variable count. Shared variable names are then merged so
    /// each appears as one column, keeping the first occurrence's position.
    pub fn apply_binary(&self, op: BinOp, other: &BooleanFunction) -> Result<BooleanFunction> {
        let n = self.variable_count();
        n.checked_add(other.variable_count())?;

        let mut variables = self.variables().to_vec();
        variables.extend_from_slice(other.variables());
        let mut combined = TruthTable::new(variables)?;
        for row in 0..combined.row_count() {
            let lhs = self.table[row & low_mask(n.get())];
            let rhs = other.table[row >> n.get()];
            combined.set(row, op.apply(lhs, rhs));
        }
        Ok(BooleanFunction {
            table: merge_duplicates(&combined)?,
        })
    }

    /// Row indices where the function is true, ascending.
    pub fn minterms(&self) -> Vec<u64> {
        (0..self.table.row_count())
            .filter(|&row| self.table[row])
            .collect()
    }

    /// Row indices where the function is false, ascending.
    pub fn maxterms(&self) -> Vec<u64> {
        (0..self.table.row_count())
            .filter(|&row| !self.table[row])
            .collect()
    }

    pub fn is_tautology(&self) -> bool {
        (0..self.table.row_count()).all(|row| self.table[row])
    }

    pub fn is_contradiction(&self) -> bool {
        (0..self.table.row_count()).all(|row| !self.table[row])
    }
}

impl fmt::Display for BooleanFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.table, f)
    }
}

/// Mask selecting the low `n` bits of a row index.
fn low_mask(n: u8) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

fn bit(row: u64, column: u8) -> bool {
    (row >> column) & 1 == 1
}

/// Column positions of each distinct variable name, in first-appearance
/// order.
fn variable_groups(variables: &[SmolStr]) -> Vec<(SmolStr, Vec<u8>)> {
    let mut groups: Vec<(SmolStr, Vec<u8>)> = Vec::new();
    for (column, name) in variables.iter().enumerate() {
        match groups.iter_mut().find(|(seen, _)| seen == name) {
            Some((_, columns)) => columns.push(column as u8),
            None => groups.push((name.clone(), vec![column as u8])),
        }
    }
    groups
}

/// A row is consistent when every occurrence of a variable carries the
/// same bit.
fn agrees_on_duplicates(row: u64, groups: &[(SmolStr, Vec<u8>)]) -> bool {
    groups.iter().all(|(_, columns)| {
        let first = bit(row, columns[0]);
        columns.iter().all(|&column| bit(row, column) == first)
    })
}

/// Re-index a consistent row into the merged table by compacting the
/// first-occurrence columns.
fn merged_row(row: u64, groups: &[(SmolStr, Vec<u8>)]) -> u64 {
    let mut merged = 0u64;
    for (position, (_, columns)) in groups.iter().enumerate() {
        if bit(row, columns[0]) {
            merged |= 1 << position;
        }
    }
    merged
}

/// Collapse duplicate variable columns into one, dropping the rows where
/// duplicate occurrences disagree.
fn merge_duplicates(table: &TruthTable) -> Result<TruthTable> {
    let groups = variable_groups(table.variables());
    if groups.len() == table.variables().len() {
        return Ok(table.clone());
    }
    let unique: Vec<SmolStr> = groups.iter().map(|(name, _)| name.clone()).collect();
    let mut merged = TruthTable::new(unique)?;
    for row in 0..table.row_count() {
        if agrees_on_duplicates(row, &groups) {
            merged.set(merged_row(row, &groups), table[row]);
        }
    }
    Ok(merged)
}
