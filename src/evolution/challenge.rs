use crate::{phenotype::Phenotype, placement::Placement};

/// Scores a phenotype. Lower is better and zero is a perfect score.
pub trait Challenge<Pheno: Phenotype> {
    fn score(&self, phenotype: &Pheno) -> usize;
}

/// Fitness of an N-Queens placement: the number of queen pairs sharing a diagonal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagonalConflicts;

impl Challenge<Placement> for DiagonalConflicts {
    fn score(&self, phenotype: &Placement) -> usize {
        phenotype.conflicts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_deterministic() {
        let placement = Placement::try_from(vec![3, 0, 4, 1, 5, 2]).unwrap();
        let first = DiagonalConflicts.score(&placement);
        for _ in 0..10 {
            assert_eq!(DiagonalConflicts.score(&placement), first);
        }
        assert_eq!(first, placement.conflicts());
    }
}
