//! Dense distance matrix and tour evaluation.

use crate::error::{AcoError, Result};

/// Cost added for an edge whose distance is `+inf`.
///
/// Keeps tour lengths finite and comparable. It must exceed any tour length
/// reachable through finite edges for "unreachable is always worse" to hold.
pub const UNREACHABLE_PENALTY: f64 = 1_000_000.0;

/// A validated n×n distance matrix stored in row-major order.
///
/// Entries are non-negative or `+inf` (unreachable pair). The size is fixed
/// at construction and the data is never mutated afterwards.
///
/// # Examples
///
/// ```
/// use u_aco::matrix::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 5.0],
///     vec![4.0, 5.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(2, 1), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMatrix", into = "RawMatrix")
)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Unvalidated wire form of a [`DistanceMatrix`].
///
/// Deserialization goes through [`DistanceMatrix::from_data`], so a decoded
/// matrix obeys the same invariants as a constructed one.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawMatrix {
    data: Vec<f64>,
    size: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = AcoError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        DistanceMatrix::from_data(raw.size, raw.data)
    }
}

#[cfg(feature = "serde")]
impl From<DistanceMatrix> for RawMatrix {
    fn from(dm: DistanceMatrix) -> Self {
        RawMatrix {
            data: dm.data,
            size: dm.size,
        }
    }
}

impl DistanceMatrix {
    /// Builds a matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// - [`AcoError::EmptyMatrix`] if there are no rows.
    /// - [`AcoError::NotSquare`] if any row length differs from the row count.
    /// - [`AcoError::InvalidDistance`] for NaN or negative entries.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(AcoError::EmptyMatrix);
        }

        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(AcoError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: size,
                });
            }
            data.extend_from_slice(row);
        }

        Self::from_data(size, data)
    }

    /// Builds a matrix from a flat row-major buffer of `size * size` entries.
    ///
    /// # Errors
    ///
    /// - [`AcoError::EmptyMatrix`] if `size` is zero or `data` is empty.
    /// - [`AcoError::BufferLength`] if `data.len() != size * size`.
    /// - [`AcoError::InvalidDistance`] for NaN or negative entries.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if size == 0 || data.is_empty() {
            return Err(AcoError::EmptyMatrix);
        }
        let expected = size.checked_mul(size).unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(AcoError::BufferLength {
                len: data.len(),
                expected,
            });
        }
        if let Some(k) = data.iter().position(|d| d.is_nan() || *d < 0.0) {
            return Err(AcoError::InvalidDistance {
                from: k / size,
                to: k % size,
                value: data[k],
            });
        }
        Ok(Self { data, size })
    }

    /// Distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `d(i, j)` and `d(j, i)` agree within `tol` for every
    /// pair. Two infinite entries count as equal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a == b {
                    continue;
                }
                if (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }
}

/// Cyclic length of `tour`, including the closing edge back to the start.
///
/// Infinite edges contribute [`UNREACHABLE_PENALTY`] instead of `+inf`.
/// An empty tour has length 0.
pub fn tour_length(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    let n = tour.len();
    let mut total = 0.0;
    for i in 0..n {
        let d = distances.get(tour[i], tour[(i + 1) % n]);
        total += if d.is_infinite() { UNREACHABLE_PENALTY } else { d };
    }
    total
}

/// Returns `true` if `tour` contains every index in `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &c in tour {
        if c >= n || seen[c] {
            return false;
        }
        seen[c] = true;
    }
    true
}
