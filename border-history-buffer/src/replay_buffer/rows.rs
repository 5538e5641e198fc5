//! Fixed-width rows backing a vector-valued field of the buffer.

/// `capacity` rows of `dim` values in one flat vector.
#[derive(Clone, Debug)]
pub(super) struct Rows {
    dim: usize,
    buf: Vec<f32>,
}

impl Rows {
    /// Builds zero-filled rows.
    pub fn new(capacity: usize, dim: usize) -> Self {
        Self {
            dim,
            buf: vec![0.; capacity * dim],
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Overwrites the row at physical slot `i`.
    ///
    /// `data.len()` must be equal to `self.dim()`.
    #[inline]
    pub fn push(&mut self, i: usize, data: &[f32]) {
        let j = i * self.dim;
        self.buf[j..j + self.dim].copy_from_slice(data);
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[f32] {
        let j = i * self.dim;
        &self.buf[j..j + self.dim]
    }
}

#[cfg(test)]
mod test {
    use super::Rows;

    #[test]
    fn test_rows() {
        let mut rows = Rows::new(3, 2);
        rows.push(1, &[1., 2.]);
        rows.push(2, &[3., 4.]);
        assert_eq!(rows.row(0), &[0., 0.]);
        assert_eq!(rows.row(1), &[1., 2.]);
        assert_eq!(rows.row(2), &[3., 4.]);

        rows.push(1, &[5., 6.]);
        assert_eq!(rows.row(1), &[5., 6.]);
    }

    #[test]
    fn test_rows_zero_dim() {
        let mut rows = Rows::new(4, 0);
        rows.push(3, &[]);
        assert!(rows.row(3).is_empty());
    }
}
