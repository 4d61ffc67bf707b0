//! # The simplex tableau
//!
//! Contains the simplex tableau and the elementary operations which can be performed upon it.
//! The tableau is extended with basis bookkeeping for solution extraction and debug checking.
use std::collections::HashSet;
use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::repeat_n;
use num_traits::{One, Zero};

use crate::data::linear_algebra::vector::DenseVector;
use crate::data::number_types::rational::Rational;

/// The most high-level data structure that is used by the simplex algorithm: the simplex tableau.
///
/// It owns the objective row, the constraint rows and the right-hand side, and is mutated in
/// place, one pivot per iteration, until termination. There is exactly one logical writer and no
/// concurrent readers during iteration.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tableau {
    /// Cost coefficient per column, with one trailing constant bias entry.
    ///
    /// Stored in the minimize convention: a strictly negative coefficient marks an improving
    /// column. Pivots never touch the trailing entry.
    objective: DenseVector<Rational>,
    /// Constraint coefficients, row-major. Each row is as long as the objective row minus its
    /// trailing entry.
    constraints: Vec<DenseVector<Rational>>,
    /// Right-hand side per constraint row, with the running objective value in the trailing
    /// entry.
    rhs: DenseVector<Rational>,

    /// Maps the rows to the column containing its pivot.
    ///
    /// This attribute changes with a basis change.
    basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading and writing.
    basis_columns: HashSet<usize>,
}

impl Tableau {
    /// Creates a simplex tableau with a specific basis.
    ///
    /// # Arguments
    ///
    /// * `objective`: Cost row in the minimize convention, one trailing bias entry included.
    /// * `constraints`: Constraint rows; each of length `objective.len() - 1`.
    /// * `rhs`: Right-hand side values, with the running objective value in the trailing entry.
    /// * `basis_indices`: Maps each row to a column, describing a basis.
    ///
    /// # Note
    ///
    /// Whether the arguments describe a basic feasible solution is the caller's responsibility;
    /// it is the algorithm's precondition and only checked through debug assertions.
    pub fn new_with_basis(
        objective: DenseVector<Rational>,
        constraints: Vec<DenseVector<Rational>>,
        rhs: DenseVector<Rational>,
        basis_indices: Vec<usize>,
    ) -> Self {
        debug_assert!(!constraints.is_empty());
        debug_assert!(constraints
            .iter()
            .all(|row| row.len() == objective.len() - 1));
        debug_assert_eq!(rhs.len(), constraints.len() + 1);
        debug_assert_eq!(basis_indices.len(), constraints.len());

        let basis_columns = basis_indices.iter().copied().collect();

        Self {
            objective,
            constraints,
            rhs,
            basis_indices,
            basis_columns,
        }
    }

    /// Brings a column into the basis by row-reducing on the pivot element and updating the data
    /// structures holding the collection of basis columns.
    ///
    /// # Arguments
    ///
    /// * `pivot_column`: Index of the column entering the basis, in range 0 until
    ///   `self.nr_columns()`. Its entry in the pivot row must be nonzero.
    /// * `pivot_row`: Index of the row whose basic column leaves the basis, in range 0 until
    ///   `self.nr_rows()`.
    pub fn bring_into_basis(&mut self, pivot_column: usize, pivot_row: usize) {
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(pivot_row < self.nr_rows());

        self.row_reduce(pivot_column, pivot_row);
        self.update_basis_indices(pivot_row, pivot_column);
    }

    /// The row reduction underlying a basis change.
    ///
    /// The pivot row is scaled such that the pivot element becomes exactly one; the pivot column
    /// is then eliminated from every other constraint row and from the objective row, each time
    /// carrying the same elimination through the right-hand side. This preserves the basic
    /// feasible solution invariant.
    fn row_reduce(&mut self, pivot_column: usize, pivot_row: usize) {
        let nr_columns = self.nr_columns();
        let nr_rows = self.nr_rows();

        let pivot_element = self.constraints[pivot_row][pivot_column].clone();
        debug_assert!(!pivot_element.is_zero());

        for column in 0..nr_columns {
            self.constraints[pivot_row][column] /= &pivot_element;
        }
        self.rhs[pivot_row] /= &pivot_element;

        for row in 0..nr_rows {
            if row == pivot_row {
                continue;
            }

            let factor = self.constraints[row][pivot_column].clone();
            if factor.is_zero() {
                continue;
            }
            for column in 0..nr_columns {
                let delta = &factor * &self.constraints[pivot_row][column];
                self.constraints[row][column] -= delta;
            }
            let delta = &factor * &self.rhs[pivot_row];
            self.rhs[row] -= delta;
        }

        let factor = self.objective[pivot_column].clone();
        if !factor.is_zero() {
            for column in 0..nr_columns {
                let delta = &factor * &self.constraints[pivot_row][column];
                self.objective[column] -= delta;
            }
            let delta = &factor * &self.rhs[pivot_row];
            self.rhs[nr_rows] -= delta;
        }
    }

    /// Update the basis index.
    ///
    /// Removes the index of the variable leaving the basis from the `basis_columns` attribute,
    /// while inserting the entering variable index.
    fn update_basis_indices(&mut self, pivot_row: usize, pivot_column: usize) {
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(pivot_column < self.nr_columns());

        let leaving_column = self.basis_indices[pivot_row];
        self.basis_columns.remove(&leaving_column);
        self.basis_indices[pivot_row] = pivot_column;
        self.basis_columns.insert(pivot_column);
    }

    /// Determine the row to pivot on, given the column.
    ///
    /// This is the row with the minimal ratio between the right-hand side and the pivot column
    /// entry, considering only rows where that entry is strictly positive; other rows cannot bind
    /// the entering variable. The first row attaining the minimum wins.
    ///
    /// Row selection allows for less strategy and heuristics than column selection, so it is not
    /// part of the `PivotRule` trait.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded in the direction of
    /// the provided column.
    pub fn select_pivot_row(&self, pivot_column: usize) -> Option<usize> {
        debug_assert!(pivot_column < self.nr_columns());

        let mut min_values: Option<(usize, Rational)> = None;
        for row in 0..self.nr_rows() {
            let entry = &self.constraints[row][pivot_column];
            if entry.is_positive() {
                let ratio = &self.rhs[row] / entry;
                match &min_values {
                    Some((_, min_ratio)) if !(&ratio < min_ratio) => {}
                    _ => min_values = Some((row, ratio)),
                }
            }
        }

        min_values.map(|(row, _)| row)
    }

    /// Calculates the relative cost of a column.
    ///
    /// Exact zero for basis columns; a strictly negative value marks an improving direction.
    pub fn relative_cost(&self, column: usize) -> &Rational {
        debug_assert!(column < self.nr_columns());

        &self.objective[column]
    }

    /// Single constraint coefficient with respect to the current basis.
    pub fn constraint_coefficient(&self, row: usize, column: usize) -> &Rational {
        debug_assert!(row < self.nr_rows());
        debug_assert!(column < self.nr_columns());

        &self.constraints[row][column]
    }

    /// The right-hand side value of a constraint row.
    pub fn constraint_value(&self, row: usize) -> &Rational {
        debug_assert!(row < self.nr_rows());

        &self.rhs[row]
    }

    /// Get the cost of the current solution.
    ///
    /// The running value accumulated in the trailing right-hand side entry, relative to the
    /// minimize convention of the stored objective row.
    pub fn objective_value(&self) -> &Rational {
        &self.rhs[self.nr_rows()]
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// Get the current basic solution.
    ///
    /// # Return value
    ///
    /// A value per column: each basic column takes the right-hand side of its row, every other
    /// column is at zero.
    pub fn basic_solution(&self) -> Vec<Rational> {
        let mut values = vec![Rational::zero(); self.nr_columns()];
        for (row, &column) in self.basis_indices.iter().enumerate() {
            values[column] = self.rhs[row].clone();
        }

        values
    }

    /// Number of variables in the problem, structural and slack alike.
    pub fn nr_columns(&self) -> usize {
        self.objective.len() - 1
    }

    /// Number of constraint rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.constraints.len()
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn is_in_basic_feasible_solution_state(tableau: &Tableau) -> bool {
    // Checking basis_columns
    // Correct number of basis columns (uniqueness is implied because it's a set)
    let nr_basis_columns = tableau.basis_columns.len() == tableau.nr_rows();

    // Checking basis_indices
    let nr_basis_indices = tableau.basis_indices.len() == tableau.nr_rows();
    // Same columns as in `basis_columns`
    let as_set = tableau
        .basis_indices
        .iter()
        .copied()
        .collect::<HashSet<_>>();
    let same_columns = as_set == tableau.basis_columns;

    // Checking the numbers: each basic column is a standard basis vector with a zero cost
    let identity_structure = tableau.basis_indices.iter().enumerate().all(|(row, &column)| {
        tableau.constraints[row][column].is_one()
            && (0..tableau.nr_rows())
                .filter(|&other_row| other_row != row)
                .all(|other_row| tableau.constraints[other_row][column].is_zero())
            && tableau.objective[column].is_zero()
    });

    // Feasibility: no constraint row has a negative right-hand side
    let nonnegative_rhs = (0..tableau.nr_rows()).all(|row| !tableau.rhs[row].is_negative());

    nr_basis_columns && nr_basis_indices && same_columns && identity_structure && nonnegative_rhs
}

impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let column_width = 10;
        let counter_width = 8;

        // Column counter
        write!(f, "{0:width$}", "", width = counter_width)?;
        write!(f, "{0:^width$}", "b", width = column_width)?;
        write!(f, "|")?;
        for column in 0..self.nr_columns() {
            write!(f, "{0:^width$}", column, width = column_width)?;
        }
        writeln!(f)?;

        // Separator
        let total_width = counter_width + 1 + (1 + self.nr_columns()) * column_width;
        writeln!(f, "{}", repeat_n('-', total_width).collect::<String>())?;

        // Cost row
        write!(f, "{0:>width$}", "cost  |", width = counter_width)?;
        write!(f, "{0:>width$.2}", self.objective_value().to_f64(), width = column_width)?;
        write!(f, "|")?;
        for column in 0..self.nr_columns() {
            write!(f, "{0:>width$.2}", self.relative_cost(column).to_f64(), width = column_width)?;
        }
        writeln!(f)?;

        // Separator
        writeln!(f, "{}", repeat_n('-', total_width).collect::<String>())?;

        // Row counter and row data
        for row in 0..self.nr_rows() {
            write!(f, "{0:>width$}", format!("{}  |", row), width = counter_width)?;
            write!(f, "{0:>width$.2}", self.constraint_value(row).to_f64(), width = column_width)?;
            write!(f, "|")?;
            for column in 0..self.nr_columns() {
                let approximation = self.constraints[row][column].to_f64();
                write!(f, "{0:>width$.2}", approximation, width = column_width)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "basis: {:?}", self.basis_indices)
    }
}

#[cfg(test)]
mod test {
    use num_traits::One;

    use crate::algorithm::simplex::tableau::{is_in_basic_feasible_solution_state, Tableau};
    use crate::data::linear_algebra::vector::DenseVector;
    use crate::tests::{problem_1, problem_2};
    use crate::R;

    /// A tableau with one structural variable and three slack rows, handy for exercising the
    /// ratio test in isolation.
    fn ratio_test_tableau() -> Tableau {
        Tableau::new_with_basis(
            DenseVector::new(vec![R!(-1), R!(0), R!(0), R!(0), R!(0)]),
            vec![
                DenseVector::new(vec![R!(2), R!(1), R!(0), R!(0)]),
                DenseVector::new(vec![R!(-1), R!(0), R!(1), R!(0)]),
                DenseVector::new(vec![R!(1), R!(0), R!(0), R!(1)]),
            ],
            DenseVector::new(vec![R!(4), R!(1), R!(2), R!(0)]),
            vec![1, 2, 3],
        )
    }

    #[test]
    fn select_pivot_row_ignores_nonpositive_entries() {
        let tableau = ratio_test_tableau();

        // Row 1 has a negative entry; its ratio of -1 must not win the minimum search.
        // Rows 0 and 2 tie at ratio 2, so the first one encountered is selected.
        assert_eq!(tableau.select_pivot_row(0), Some(0));
    }

    #[test]
    fn select_pivot_row_unbounded_column() {
        let tableau = Tableau::new_with_basis(
            DenseVector::new(vec![R!(-1), R!(0), R!(0)]),
            vec![DenseVector::new(vec![R!(0), R!(1)])],
            DenseVector::new(vec![R!(1), R!(0)]),
            vec![1],
        );

        assert_eq!(tableau.select_pivot_row(0), None);
    }

    #[test]
    fn bring_into_basis() {
        let mut tableau = problem_1::initial_tableau();
        assert!(is_in_basic_feasible_solution_state(&tableau));

        tableau.bring_into_basis(2, 1);

        assert!(is_in_basic_feasible_solution_state(&tableau));
        assert!(tableau.is_in_basis(2));
        assert!(!tableau.is_in_basis(4));
        assert_eq!(tableau, problem_1::optimal_tableau());
    }

    #[test]
    fn pivoting_again_on_the_same_element_changes_nothing() {
        let mut tableau = problem_2::initial_tableau();
        tableau.bring_into_basis(0, 0);

        // The pivot element is now exactly one and the column is eliminated everywhere else, so
        // repeating the pivot is a no-op scale.
        assert!(tableau.constraint_coefficient(0, 0).is_one());
        let after_first = tableau.clone();
        tableau.bring_into_basis(0, 0);
        assert_eq!(tableau, after_first);
    }

    #[test]
    fn basic_solution() {
        let mut tableau = problem_1::initial_tableau();
        assert_eq!(
            tableau.basic_solution(),
            vec![R!(0), R!(0), R!(0), R!(10), R!(15)],
        );

        tableau.bring_into_basis(2, 1);
        assert_eq!(
            tableau.basic_solution(),
            vec![R!(0), R!(0), R!(5), R!(5), R!(0)],
        );
    }

    #[test]
    fn negative_rhs_is_not_a_basic_feasible_solution() {
        let tableau = Tableau::new_with_basis(
            DenseVector::new(vec![R!(-1), R!(0), R!(0)]),
            vec![DenseVector::new(vec![R!(1), R!(1)])],
            DenseVector::new(vec![R!(-2), R!(0)]),
            vec![1],
        );

        assert!(!is_in_basic_feasible_solution_state(&tableau));
    }
}
