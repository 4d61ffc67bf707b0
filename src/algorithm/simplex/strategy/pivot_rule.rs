//! # Pivot rules
//!
//! Strategies for selecting the column entering the basis.
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::rational::Rational;

/// Deciding how to pivot.
///
/// During the simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found through the minimum-ratio test.
/// That decision is currently made independent of the strategy.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal simplex method.
    ///
    /// # Return value
    ///
    /// The index of a column with strictly negative relative cost, or `None` if there is no such
    /// column and the current solution is optimal.
    fn select_pivot_column(&mut self, tableau: &Tableau) -> Option<usize>;
}

/// Pivot on the column with the most negative relative cost.
///
/// The classic Dantzig rule. Ties are broken towards the first column encountered in the
/// left-to-right scan. This rule does not protect against cycling on degenerate problems.
pub struct MostNegative;

impl PivotRule for MostNegative {
    fn new() -> Self {
        Self
    }

    fn select_pivot_column(&mut self, tableau: &Tableau) -> Option<usize> {
        let mut candidate: Option<(usize, &Rational)> = None;
        for column in 0..tableau.nr_columns() {
            let cost = tableau.relative_cost(column);
            if !cost.is_negative() {
                continue;
            }
            let better = match candidate {
                Some((_, minimum)) => cost < minimum,
                None => true,
            };
            if better {
                candidate = Some((column, cost));
            }
        }

        candidate.map(|(column, _)| column)
    }
}

/// Simply pivot on the first column which has a negative relative cost.
///
/// This is the column half of Bland's rule; combined with the first-encountered tie-break of the
/// ratio test it avoids cycling on degenerate problems, at the price of typically needing more
/// iterations than `MostNegative`.
pub struct FirstProfitable;

impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_pivot_column(&mut self, tableau: &Tableau) -> Option<usize> {
        (0..tableau.nr_columns())
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|(_, cost)| cost.is_negative())
            .map(|(column, _)| column)
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::simplex::strategy::pivot_rule::{
        FirstProfitable, MostNegative, PivotRule,
    };
    use crate::data::linear_algebra::vector::DenseVector;
    use crate::algorithm::simplex::tableau::Tableau;
    use crate::tests::problem_1;
    use crate::R;

    #[test]
    fn most_negative_column() {
        let tableau = problem_1::initial_tableau();
        let mut rule = MostNegative::new();

        // Costs are (-2, -3, -4, 0, 0)
        assert_eq!(rule.select_pivot_column(&tableau), Some(2));
    }

    #[test]
    fn most_negative_tie_breaks_towards_first() {
        let tableau = Tableau::new_with_basis(
            DenseVector::new(vec![R!(-3), R!(-1), R!(-3), R!(0), R!(0)]),
            vec![DenseVector::new(vec![R!(1), R!(1), R!(1), R!(1)])],
            DenseVector::new(vec![R!(2), R!(0)]),
            vec![3],
        );
        let mut rule = MostNegative::new();

        assert_eq!(rule.select_pivot_column(&tableau), Some(0));
    }

    #[test]
    fn first_profitable_column() {
        let tableau = problem_1::initial_tableau();
        let mut rule = FirstProfitable::new();

        assert_eq!(rule.select_pivot_column(&tableau), Some(0));
    }

    #[test]
    fn no_profitable_column_at_the_optimum() {
        let tableau = problem_1::optimal_tableau();

        assert_eq!(MostNegative::new().select_pivot_column(&tableau), None);
        assert_eq!(FirstProfitable::new().select_pivot_column(&tableau), None);
    }
}
