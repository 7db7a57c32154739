/// A 2D intensity grid stored as f32, row-major.
/// Per-column math is done in f64; stored intensities are f32.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Row-major intensity values.
    pub data: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

impl Grid {
    /// Create a new Grid filled with the given value.
    pub fn new(width: usize, height: usize, fill: f32) -> Self {
        Self {
            data: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Create a zeroed square grid.
    pub fn square(side: usize) -> Self {
        Self::new(side, side, 0.0)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f32) {
        self.data[row * self.width + col] = val;
    }

    /// Write `values` down column `col`, one value per row.
    ///
    /// # Panics
    /// Panics if `values.len() != self.height` or `col` is out of range.
    pub fn set_column(&mut self, col: usize, values: &[f32]) {
        assert_eq!(values.len(), self.height, "column length must match grid height");
        assert!(col < self.width, "column {col} out of range for width {}", self.width);
        for (row, &v) in values.iter().enumerate() {
            self.set(row, col, v);
        }
    }

    /// Copy of column `col`, top to bottom.
    pub fn column(&self, col: usize) -> Vec<f32> {
        (0..self.height).map(|row| self.get(row, col)).collect()
    }

    /// Mean of column `col`. Returns 0 for an empty column.
    pub fn column_mean(&self, col: usize) -> f32 {
        if self.height == 0 {
            return 0.0;
        }
        let sum: f64 = (0..self.height).map(|row| self.get(row, col) as f64).sum();
        (sum / self.height as f64) as f32
    }

    /// Largest absolute value anywhere in the grid (0 for an empty grid).
    pub fn max_abs(&self) -> f32 {
        self.data.iter().fold(0.0f32, |m, &v| m.max(v.abs()))
    }

    /// Divide by the maximum absolute value and scale to `peak`.
    ///
    /// Values land in `[-peak, peak]`; nothing is clamped. An all-zero grid
    /// is left untouched.
    pub fn normalize_to(&mut self, peak: f32) {
        let m = self.max_abs();
        if m > 0.0 {
            for v in &mut self.data {
                *v = *v / m * peak;
            }
        }
    }
}
