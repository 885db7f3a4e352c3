//! Small dense linear algebra: Cramer's rule, row reduction and the simplex method.

const EPS: f64 = 1e-9;
const MAX_PIVOTS: usize = 10_000;

/// Integer solution of `a1*x + b1*y = c1`, `a2*x + b2*y = c2` by Cramer's rule.
///
/// Returns `None` for a singular system or a non-integer solution.
pub fn solve_linear_2x2(a1: i64, b1: i64, c1: i64, a2: i64, b2: i64, c2: i64) -> Option<(i64, i64)> {
    let det = a1 * b2 - a2 * b1;
    if det == 0 {
        return None;
    }

    let det_x = c1 * b2 - c2 * b1;
    let det_y = a1 * c2 - a2 * c1;
    if det_x % det != 0 || det_y % det != 0 {
        return None;
    }
    Some((det_x / det, det_y / det))
}

/// Reduced row echelon form of a matrix, with the pivot column of each leading row
#[derive(Debug, Clone)]
pub struct Rref {
    /// The reduced matrix; row `i < rank` has a leading 1 in `pivot_cols[i]`
    pub matrix: Vec<Vec<f64>>,

    pub pivot_cols: Vec<usize>,
}

impl Rref {
    pub fn rank(&self) -> usize {
        self.pivot_cols.len()
    }

    /// Columns among the first `columns` that carry no pivot
    pub fn free_columns(&self, columns: usize) -> Vec<usize> {
        (0..columns)
            .filter(|col| !self.pivot_cols.contains(col))
            .collect()
    }
}

/// Gauss-Jordan elimination over the first `columns` columns.
///
/// Extra columns (such as the right-hand side of an augmented matrix) are
/// transformed along with the rows but never chosen as pivots.
pub fn rref(mut matrix: Vec<Vec<f64>>, columns: usize) -> Rref {
    let rows = matrix.len();
    let mut pivot_cols = Vec::new();

    for col in 0..columns {
        let rank = pivot_cols.len();
        if rank == rows {
            break;
        }

        let Some(pivot) = (rank..rows).find(|&row| matrix[row][col].abs() > EPS) else {
            continue;
        };
        matrix.swap(rank, pivot);
        pivot_on(&mut matrix, rank, col);
        pivot_cols.push(col);
    }

    Rref { matrix, pivot_cols }
}

/// Scales `row` so that `[row][col]` is 1 and clears `col` from every other row
fn pivot_on(tableau: &mut [Vec<f64>], row: usize, col: usize) {
    let pivot_val = tableau[row][col];
    for v in tableau[row].iter_mut() {
        *v /= pivot_val;
    }

    let pivot_row = tableau[row].clone();
    for (i, r) in tableau.iter_mut().enumerate() {
        let factor = r[col];
        if i == row || factor.abs() <= EPS {
            continue;
        }
        for (v, p) in r.iter_mut().zip(&pivot_row) {
            *v -= factor * p;
        }
    }
}

/// Minimises `sum(x)` subject to `Ax = b`, `x >= 0`
pub fn simplex(a: &[Vec<f64>], b: &[f64]) -> Option<Vec<f64>> {
    let n = a.first()?.len();
    simplex_with_objective(a, b, &vec![1.0; n])
}

/// Minimises `c·x` subject to `Ax = b`, `x >= 0` with the two-phase method.
///
/// Returns `None` when the system is infeasible or the objective unbounded.
pub fn simplex_with_objective(a: &[Vec<f64>], b: &[f64], c: &[f64]) -> Option<Vec<f64>> {
    let m = a.len();
    let n = a.first()?.len();
    let total = n + m;

    // Phase 1: one artificial variable per row, minimise their sum
    let mut tableau = vec![vec![0.0; total + 1]; m + 1];
    for i in 0..m {
        let sign = if b[i] >= 0.0 { 1.0 } else { -1.0 };
        for j in 0..n {
            tableau[i][j] = sign * a[i][j];
        }
        tableau[i][n + i] = 1.0;
        tableau[i][total] = sign * b[i];
    }
    for i in 0..m {
        tableau[m][n + i] = 1.0;
    }
    for i in 0..m {
        let row = tableau[i].clone();
        for (obj, v) in tableau[m].iter_mut().zip(&row) {
            *obj -= v;
        }
    }

    let mut basis: Vec<usize> = (n..total).collect();
    if !run_simplex(&mut tableau, &mut basis, total) {
        return None;
    }

    let infeasibility: f64 = (0..m)
        .filter(|&i| basis[i] >= n)
        .map(|i| tableau[i][total].abs())
        .sum();
    if infeasibility > EPS {
        log::debug!("Simplex phase 1 left artificial mass {}", infeasibility);
        return None;
    }

    // Drive degenerate artificials out of the basis
    for i in 0..m {
        if basis[i] < n {
            continue;
        }
        if let Some(j) = (0..n).find(|&j| tableau[i][j].abs() > EPS) {
            pivot_on(&mut tableau, i, j);
            basis[i] = j;
        }
    }

    // Phase 2: drop the artificial columns and optimise the real objective
    let mut phase2 = vec![vec![0.0; n + 1]; m + 1];
    for i in 0..m {
        phase2[i][..n].copy_from_slice(&tableau[i][..n]);
        phase2[i][n] = tableau[i][total];
    }
    phase2[m][..n].copy_from_slice(&c[..n]);

    for i in 0..m {
        if basis[i] >= n {
            continue;
        }
        let coef = phase2[m][basis[i]];
        let row = phase2[i].clone();
        for (obj, v) in phase2[m].iter_mut().zip(&row) {
            *obj -= coef * v;
        }
    }

    if !run_simplex(&mut phase2, &mut basis, n) {
        return None;
    }

    let mut solution = vec![0.0; n];
    for (i, &var) in basis.iter().enumerate() {
        if var < n {
            solution[var] = phase2[i][n];
        }
    }
    Some(solution)
}

/// Pivots until no entering column among the first `num_vars` has a negative
/// reduced cost. Returns false when the problem is unbounded.
fn run_simplex(tableau: &mut [Vec<f64>], basis: &mut [usize], num_vars: usize) -> bool {
    let m = basis.len();
    let last = tableau[0].len() - 1;

    for _ in 0..MAX_PIVOTS {
        let mut entering = None;
        let mut min_val = -EPS;
        for j in 0..num_vars {
            if tableau[m][j] < min_val {
                min_val = tableau[m][j];
                entering = Some(j);
            }
        }
        let Some(col) = entering else {
            return true;
        };

        let mut leaving = None;
        let mut min_ratio = f64::MAX;
        for i in 0..m {
            if tableau[i][col] > EPS {
                let ratio = tableau[i][last] / tableau[i][col];
                if ratio < min_ratio {
                    min_ratio = ratio;
                    leaving = Some(i);
                }
            }
        }
        let Some(row) = leaving else {
            return false;
        };

        basis[row] = col;
        pivot_on(tableau, row, col);
    }

    log::warn!("Simplex gave up after {} pivots", MAX_PIVOTS);
    false
}
