use crate::error::{CourseError, Result};

// Converts metric distances into grid-cell counts.
// Every conversion in one generation call goes through the same Quantizer so
// lengths and coordinates stay commensurable: f64::round everywhere, ties away
// from zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantizer {
    resolution: f64, // metres per cell
}

impl Quantizer {
    pub fn new(resolution: f64) -> Result<Self> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(CourseError::invalid(
                "resolution",
                resolution,
                "must be a finite positive number",
            ));
        }
        Ok(Self { resolution })
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    // round(m / resolution)
    #[inline]
    pub fn quantize(&self, metres: f64) -> i64 {
        (metres / self.resolution).round() as i64
    }

    pub fn quantize_all(&self, metres: &[f64]) -> Vec<i64> {
        metres.iter().map(|&m| self.quantize(m)).collect()
    }

    // Length in cells; negative lengths collapse to zero
    #[inline]
    pub fn cells(&self, metres: f64) -> usize {
        self.quantize(metres).max(0) as usize
    }

    pub fn to_metric(&self, cells: usize) -> f64 {
        cells as f64 * self.resolution
    }
}

// One-shot helper for callers that only need a single conversion.
pub fn quantize(metres: f64, resolution: f64) -> Result<i64> {
    Ok(Quantizer::new(resolution)?.quantize(metres))
}

#[cfg(test)]
mod tests {
    use super::{Quantizer, quantize};

    #[test]
    fn rejects_non_positive_resolution() {
        assert!(Quantizer::new(0.0).is_err());
        assert!(Quantizer::new(-0.05).is_err());
        assert!(Quantizer::new(f64::NAN).is_err());
        assert!(quantize(1.0, 0.0).is_err());
    }

    #[test]
    fn rounds_to_nearest_cell() {
        let q = Quantizer::new(0.1).unwrap();
        assert_eq!(q.quantize(2.0), 20);
        assert_eq!(q.quantize(0.5), 5);
        assert_eq!(q.quantize(0.04), 0);
        assert_eq!(q.quantize(0.06), 1);
        assert_eq!(q.quantize(-0.26), -3);
        assert_eq!(q.cells(-0.26), 0);
    }

    #[test]
    fn round_trip_error_within_half_a_cell() {
        for &res in &[0.05, 0.1, 0.25, 0.3] {
            let q = Quantizer::new(res).unwrap();
            for i in 0..400 {
                let m = i as f64 * 0.037 - 3.0;
                let back = q.quantize(m) as f64 * res;
                assert!(
                    (back - m).abs() <= res / 2.0 + 1e-9,
                    "m={} res={} back={}",
                    m,
                    res,
                    back
                );
            }
        }
    }

    #[test]
    fn sequences_quantize_element_wise() {
        let q = Quantizer::new(0.1).unwrap();
        assert_eq!(q.quantize_all(&[0.0, 0.3, 1.26, -0.5]), vec![0, 3, 13, -5]);
        assert!((q.to_metric(15) - 1.5).abs() < 1e-12);
    }
}
