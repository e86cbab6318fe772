use std::fmt;
use std::ops::Index;

use smol_str::SmolStr;

use crate::error::{Error, Result};

/// The most variables a single truth table can hold.
///
/// Row indices are `u64`, one bit per variable.
pub const MAX_VARIABLES: u8 = 64;

/// The number of variables in a truth table, bounded to `0..=64`.
///
/// Construction and arithmetic are checked against the bound; exceeding it
/// is an error, never a wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VariableCount(u8);

impl VariableCount {
    pub const MAX: VariableCount = VariableCount(MAX_VARIABLES);

    pub fn new(count: u8) -> Result<Self> {
        VariableCount::try_from(count as u64)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn checked_add(self, other: VariableCount) -> Result<VariableCount> {
        VariableCount::try_from(self.0 as u64 + other.0 as u64)
    }
}

impl TryFrom<u64> for VariableCount {
    type Error = Error;

    fn try_from(count: u64) -> Result<Self> {
        if count > MAX_VARIABLES as u64 {
            return Err(Error::TooManyVariables { count });
        }
        Ok(VariableCount(count as u8))
    }
}

impl TryFrom<usize> for VariableCount {
    type Error = Error;

    fn try_from(count: usize) -> Result<Self> {
        VariableCount::try_from(count as u64)
    }
}

impl fmt::Display for VariableCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A complete truth table: variable names plus one output value per row.
///
/// Row indices encode variable assignments: bit `k` of the index holds the
/// value of `variables[k]`, so the first variable is the least significant
/// bit. Variable names may repeat within a raw table; combining functions
/// merges duplicate columns (see `BooleanFunction`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<SmolStr>,
    values: Vec<bool>,
}

impl TruthTable {
    /// An all-false table over `variables`.
    ///
    /// Fails on an empty variable list, on more than [`MAX_VARIABLES`]
    /// variables, and when `2^n` rows are not addressable in memory (a
    /// 64-variable table needs more rows than `usize` can index).
    pub fn new(variables: Vec<SmolStr>) -> Result<Self> {
        if variables.is_empty() {
            return Err(Error::EmptyVariables);
        }
        let count = VariableCount::try_from(variables.len())?;
        let rows = usize::try_from(1u128 << count.get())
            .map_err(|_| Error::TableTooLarge { variables: count })?;
        Ok(Self {
            variables,
            values: vec![false; rows],
        })
    }

    pub fn variables(&self) -> &[SmolStr] {
        &self.variables
    }

    pub fn variable_count(&self) -> VariableCount {
        // length was validated in new()
        VariableCount(self.variables.len() as u8)
    }

    pub fn row_count(&self) -> u64 {
        self.values.len() as u64
    }

    /// The value at `row`, or `None` when the row is out of range.
    pub fn get(&self, row: u64) -> Option<bool> {
        self.values.get(usize::try_from(row).ok()?).copied()
    }

    /// Set the value at `row`.
    ///
    /// Panics when the row is out of range, like slice indexing.
    pub fn set(&mut self, row: u64, value: bool) {
        let index = self.row_index(row);
        self.values[index] = value;
    }

    fn row_index(&self, row: u64) -> usize {
        assert!(
            row < self.row_count(),
            "row {row} out of range for {} variables",
            self.variables.len()
        );
        row as usize
    }
}

impl Index<u64> for TruthTable {
    type Output = bool;

    fn index(&self, row: u64) -> &bool {
        &self.values[self.row_index(row)]
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, name) in self.variables.iter().enumerate() {
            if k > 0 {
                f.write_str(" ")?;
            }
            f.write_str(name)?;
        }
        for row in 0..self.row_count() {
            f.write_str("\n")?;
            for k in 0..self.variables.len() as u32 {
                if k > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", (row >> k) & 1)?;
            }
            write!(f, " : {}", u8::from(self.values[row as usize]))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_count_accepts_the_bound() {
        assert_eq!(VariableCount::new(64).unwrap(), VariableCount::MAX);
        assert_eq!(VariableCount::new(0).unwrap().get(), 0);
    }

    #[test]
    fn test_variable_count_rejects_past_the_bound() {
        assert!(matches!(
            VariableCount::new(65),
            Err(Error::TooManyVariables { count: 65 })
        ));
        assert!(matches!(
            VariableCount::try_from(1_000_000u64),
            Err(Error::TooManyVariables { count: 1_000_000 })
        ));
    }

    #[test]
    fn test_variable_count_checked_add() {
        let a = VariableCount::new(32).unwrap();
        let b = VariableCount::new(32).unwrap();
        assert_eq!(a.checked_add(b).unwrap(), VariableCount::MAX);

        let c = VariableCount::new(33).unwrap();
        assert!(matches!(
            a.checked_add(c),
            Err(Error::TooManyVariables { count: 65 })
        ));
    }

    #[test]
    fn test_new_table_is_all_false() {
        let table = TruthTable::new(vec!["a".into(), "b".into()]).unwrap();
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.variable_count().get(), 2);
        for row in 0..4 {
            assert_eq!(table.get(row), Some(false));
        }
    }

    #[test]
    fn test_empty_variable_list_is_rejected() {
        assert!(matches!(
            TruthTable::new(Vec::new()),
            Err(Error::EmptyVariables)
        ));
    }

    #[test]
    fn test_sixty_four_variable_table_does_not_fit() {
        let variables: Vec<SmolStr> = (0..64).map(|_| SmolStr::new("x")).collect();
        let err = TruthTable::new(variables).unwrap_err();
        assert_eq!(
            err.to_string(),
            "a truth table over 64 variables does not fit in memory"
        );
        assert!(matches!(
            err,
            Error::TableTooLarge {
                variables: VariableCount::MAX
            }
        ));
    }

    #[test]
    fn test_set_and_index() {
        let mut table = TruthTable::new(vec!["a".into()]).unwrap();
        table.set(1, true);
        assert!(!table[0]);
        assert!(table[1]);
        assert_eq!(table.get(2), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_out_of_range_panics() {
        let mut table = TruthTable::new(vec!["a".into()]).unwrap();
        table.set(2, true);
    }

    #[test]
    fn test_duplicate_names_are_allowed_in_raw_tables() {
        let table = TruthTable::new(vec!["a".into(), "a".into()]).unwrap();
        assert_eq!(table.row_count(), 4);
    }

    #[test]
    fn test_display_layout() {
        let mut table = TruthTable::new(vec!["a".into(), "b".into()]).unwrap();
        table.set(3, true);
        insta::assert_snapshot!(table, @r"
        a b
        0 0 : 0
        1 0 : 0
        0 1 : 0
        1 1 : 1
        ");
    }

    #[test]
    fn test_display_single_variable() {
        let mut table = TruthTable::new(vec!["x".into()]).unwrap();
        table.set(0, true);
        assert_eq!(table.to_string(), "x\n0 : 1\n1 : 0");
    }
}
