use super::coupling::Coupling;
use super::matrix::CostMatrix;
use crate::Energy;
use crate::Probability;

/// Minimum-cost bipartite assignment over a rectangular cost matrix.
///
/// Exactly `min(rows, cols)` pairs are matched: every row when the matrix is
/// wide, every column when it is tall. An empty matrix has an empty plan and
/// zero cost.
///
/// # Algorithm
///
/// Potential-based shortest augmenting paths (Kuhn-Munkres). Rows are added
/// one at a time; each addition runs a Dijkstra-like relaxation over reduced
/// costs `c[i][j] - u[i] - v[j]` until a free column is reached, then flips
/// the path. Tall matrices are solved on their transpose.
///
/// # Complexity
///
/// O(n² m) for n = min(rows, cols), m = max(rows, cols).
///
/// # Panics
///
/// `minimize` panics if a row has no finite cost to any column. Matrices
/// built from distributions never contain NaN or infinite cells.
pub struct Hungarian<'a> {
    matrix: &'a CostMatrix,
    plan: Vec<(usize, usize)>,
}

impl Hungarian<'_> {
    /// matched (row, col) pairs, sorted by row
    pub fn plan(&self) -> &[(usize, usize)] {
        &self.plan
    }

    fn solve(matrix: &CostMatrix) -> Vec<(usize, usize)> {
        if matrix.is_empty() {
            return Vec::new();
        }
        if matrix.rows() > matrix.cols() {
            let mut plan = Self::solve(&matrix.transpose())
                .into_iter()
                .map(|(j, i)| (i, j))
                .collect::<Vec<_>>();
            plan.sort_unstable();
            return plan;
        }
        let n = matrix.rows();
        let m = matrix.cols();
        // potentials and matching are 1-indexed; column 0 is the dummy source
        let mut u = vec![0f64; n + 1];
        let mut v = vec![0f64; m + 1];
        let mut p = vec![0usize; m + 1];
        let mut way = vec![0usize; m + 1];
        for i in 1..=n {
            p[0] = i;
            let mut j0 = 0usize;
            let mut minv = vec![f64::INFINITY; m + 1];
            let mut used = vec![false; m + 1];
            loop {
                used[j0] = true;
                let i0 = p[j0];
                let mut delta = f64::INFINITY;
                let mut j1 = 0usize;
                for j in 1..=m {
                    if used[j] {
                        continue;
                    }
                    let reduced = matrix.get(i0 - 1, j - 1) as f64 - u[i0] - v[j];
                    if reduced < minv[j] {
                        minv[j] = reduced;
                        way[j] = j0;
                    }
                    if minv[j] < delta {
                        delta = minv[j];
                        j1 = j;
                    }
                }
                assert!(j1 != 0, "non-finite cost in assignment matrix");
                for j in 0..=m {
                    if used[j] {
                        u[p[j]] += delta;
                        v[j] -= delta;
                    } else {
                        minv[j] -= delta;
                    }
                }
                j0 = j1;
                if p[j0] == 0 {
                    break;
                }
            }
            // flip the augmenting path back to the source
            while j0 != 0 {
                let j1 = way[j0];
                p[j0] = p[j1];
                j0 = j1;
            }
        }
        let mut plan = (1..=m)
            .filter(|&j| p[j] != 0)
            .map(|j| (p[j] - 1, j - 1))
            .collect::<Vec<_>>();
        plan.sort_unstable();
        plan
    }
}

impl Coupling for Hungarian<'_> {
    type X = usize;
    type Y = usize;

    fn minimize(mut self) -> Self {
        self.plan = Self::solve(self.matrix);
        self
    }
    fn flow(&self, x: &Self::X, y: &Self::Y) -> Probability {
        match self.plan.binary_search_by_key(x, |&(i, _)| i) {
            Ok(k) if self.plan[k].1 == *y => 1.,
            _ => 0.,
        }
    }
    fn cost(&self) -> Energy {
        self.plan
            .iter()
            .map(|&(i, j)| self.matrix.get(i, j))
            .sum::<Energy>()
    }
}

impl<'a> From<&'a CostMatrix> for Hungarian<'a> {
    fn from(matrix: &'a CostMatrix) -> Self {
        Self {
            matrix,
            plan: Vec::new(),
        }
    }
}
