//! # Placement
//!
//! A `Placement` is one candidate queen arrangement: index = row, value = column of
//! the queen in that row. The columns always form a permutation of `0..n`, so two
//! queens can never share a row or a column and only diagonal conflicts remain.
//!
//! ```rust
//! use nqueens_ga::placement::Placement;
//!
//! let solved = Placement::try_from(vec![1, 3, 0, 2]).unwrap();
//! assert_eq!(solved.conflicts(), 0);
//!
//! let diagonal = Placement::try_from(vec![0, 1, 2, 3]).unwrap();
//! assert_eq!(diagonal.conflicts(), 6);
//!
//! assert!(Placement::try_from(vec![0, 0, 1]).is_err());
//! ```

use std::fmt;

use crate::error::{GeneticError, Result};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// A permutation of `0..n` placing one queen per row.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    columns: Vec<usize>,
}

impl Placement {
    /// The identity placement `[0, 1, ..., n-1]` (every queen on the main diagonal).
    pub fn identity(size: usize) -> Self {
        Self {
            columns: (0..size).collect(),
        }
    }

    /// Column of the queen in each row.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Board size `n`.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of queen pairs sharing a diagonal. Zero means the placement solves
    /// the board.
    ///
    /// Runs in O(n²) over all row pairs.
    pub fn conflicts(&self) -> usize {
        let n = self.columns.len();
        let mut conflicts = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if j - i == self.columns[i].abs_diff(self.columns[j]) {
                    conflicts += 1;
                }
            }
        }
        conflicts
    }

    /// Single-point order crossover at a fixed cut point.
    ///
    /// The child keeps `self[..point]` verbatim and fills the remaining rows with
    /// the columns of `other` that are not yet used, in the order they appear in
    /// `other`.
    ///
    /// # Panics
    ///
    /// Panics if the parents differ in length or `point` exceeds the board size.
    pub fn crossover_at(&self, other: &Self, point: usize) -> Self {
        let n = self.len();
        assert_eq!(n, other.len(), "parents must have equal length");
        assert!(point <= n, "cut point {} is past the end of the board", point);

        let mut used = vec![false; n];
        let mut columns = Vec::with_capacity(n);
        for &column in &self.columns[..point] {
            used[column] = true;
            columns.push(column);
        }
        columns.extend(other.columns.iter().copied().filter(|&column| !used[column]));

        debug_assert!(is_permutation(&columns));
        Self { columns }
    }

    /// Returns a copy with the queens of rows `i` and `j` exchanged.
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut columns = self.columns.clone();
        columns.swap(i, j);
        Self { columns }
    }
}

impl Phenotype for Placement {
    fn random(size: usize, rng: &mut RandomNumberGenerator) -> Self {
        let mut columns: Vec<usize> = (0..size).collect();
        rng.shuffle(&mut columns);
        Self { columns }
    }

    /// Cut point is drawn uniformly from `0..n`.
    fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> Self {
        if self.is_empty() {
            return self.clone();
        }
        let point = rng.index(self.len());
        self.crossover_at(other, point)
    }

    /// Swap mutation: with probability `mutation_rate`, two distinct rows trade
    /// columns. Boards with fewer than two rows come back unchanged.
    fn mutate(&self, mutation_rate: f64, rng: &mut RandomNumberGenerator) -> Self {
        if self.len() < 2 || !rng.chance(mutation_rate) {
            return self.clone();
        }
        let (i, j) = rng.distinct_pair(self.len());
        self.swapped(i, j)
    }
}

impl TryFrom<Vec<usize>> for Placement {
    type Error = GeneticError;

    fn try_from(columns: Vec<usize>) -> Result<Self> {
        let n = columns.len();
        let mut seen = vec![false; n];
        for (row, &column) in columns.iter().enumerate() {
            if column >= n {
                return Err(GeneticError::InvalidPlacement(format!(
                    "column {} in row {} is outside a board of size {}",
                    column, row, n
                )));
            }
            if std::mem::replace(&mut seen[column], true) {
                return Err(GeneticError::InvalidPlacement(format!(
                    "column {} appears more than once",
                    column
                )));
            }
        }
        Ok(Self { columns })
    }
}

impl From<Placement> for Vec<usize> {
    fn from(placement: Placement) -> Self {
        placement.columns
    }
}

impl AsRef<[usize]> for Placement {
    fn as_ref(&self) -> &[usize] {
        &self.columns
    }
}

/// Text rendering of the board, one row per line. `Q` marks a queen, empty
/// squares alternate between `.` (light) and `:` (dark).
impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.len();
        for (row, &queen) in self.columns.iter().enumerate() {
            for col in 0..n {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let square = if col == queen {
                    "Q"
                } else if (row + col) % 2 == 0 {
                    "."
                } else {
                    ":"
                };
                f.write_str(square)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Whether `columns` contains every value of `0..columns.len()` exactly once.
pub fn is_permutation(columns: &[usize]) -> bool {
    let mut seen = vec![false; columns.len()];
    columns
        .iter()
        .all(|&c| c < seen.len() && !std::mem::replace(&mut seen[c], true))
}
