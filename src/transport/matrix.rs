use super::density::Density;
use super::distribution::Distribution;
use super::measure::Absolute;
use super::measure::Measure;
use crate::Energy;

/// Dense row-major `rows × cols` matrix of ground costs.
///
/// Rows index the tensor (joint) distribution, columns index the
/// distribution over the whole universe. Either dimension may be zero.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Energy>,
}

impl CostMatrix {
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
    pub fn get(&self, i: usize, j: usize) -> Energy {
        self.cells[i * self.cols + j]
    }
    /// the same costs with rows and columns swapped
    pub fn transpose(&self) -> Self {
        let cells = (0..self.cols)
            .flat_map(|j| (0..self.rows).map(move |i| (i, j)))
            .map(|(i, j)| self.get(i, j))
            .collect();
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
    /// pairwise ground costs between two densities under any Measure
    pub fn measure<P, Q, M>(x: &P, y: &Q, metric: &M) -> Self
    where
        P: Density,
        Q: Density,
        M: Measure,
    {
        let cells = x
            .support()
            .flat_map(|i| y.support().map(move |j| (i.clone(), j)))
            .map(|(i, j)| metric.distance(x.density(&i), y.density(&j)))
            .collect();
        Self {
            rows: x.support().count(),
            cols: y.support().count(),
            cells,
        }
    }
}

/// `cost[i, j] = |tensor[i] - full[j]|`
impl From<(&Distribution, &Distribution)> for CostMatrix {
    fn from((tensor, full): (&Distribution, &Distribution)) -> Self {
        Self::measure(tensor, full, &Absolute)
    }
}

impl From<Vec<Vec<Energy>>> for CostMatrix {
    /// # Panics
    ///
    /// If the rows differ in length.
    fn from(rows: Vec<Vec<Energy>>) -> Self {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        assert!(rows.iter().all(|r| r.len() == cols), "ragged cost matrix");
        Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        }
    }
}

impl std::fmt::Display for CostMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{:>8.4}", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
