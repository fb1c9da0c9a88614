use serde::Serialize;

/// Least-squares line of `y` on `x`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation of the fitted points; NaN when `y` is constant.
    pub r: f64,
    pub points: usize,
}

/// Fit `y = intercept + slope * x` over the rows where both values exist.
///
/// Returns `None` with fewer than two points or when every `x` is equal.
pub fn linear_fit(x: &[Option<f64>], y: &[Option<f64>]) -> Option<LinearFit> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let count = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / count;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / count;

    let sxy: f64 = pairs.iter().map(|(a, b)| (a - mean_x) * (b - mean_y)).sum();
    let sxx: f64 = pairs.iter().map(|(a, _)| (a - mean_x).powi(2)).sum();
    let syy: f64 = pairs.iter().map(|(_, b)| (b - mean_y).powi(2)).sum();

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let r = if syy == 0.0 {
        f64::NAN
    } else {
        sxy / (sxx.sqrt() * syy.sqrt())
    };

    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
        r,
        points: pairs.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let x = [Some(0.0), Some(1.0), Some(2.0), Some(3.0)];
        let y = [Some(1.0), Some(3.0), Some(5.0), Some(7.0)];
        let fit = linear_fit(&x, &y).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.r - 1.0).abs() < 1e-12);
        assert_eq!(fit.points, 4);
    }

    #[test]
    fn test_gaps_are_dropped() {
        let x = [Some(0.0), None, Some(2.0), Some(4.0)];
        let y = [Some(0.0), Some(50.0), None, Some(-8.0)];
        let fit = linear_fit(&x, &y).unwrap();
        assert_eq!(fit.points, 2);
        assert!((fit.slope + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(linear_fit(&[Some(1.0)], &[Some(1.0)]).is_none());
        assert!(linear_fit(&[Some(2.0), Some(2.0)], &[Some(1.0), Some(5.0)]).is_none());

        let flat = linear_fit(&[Some(1.0), Some(2.0)], &[Some(3.0), Some(3.0)]).unwrap();
        assert_eq!(flat.slope, 0.0);
        assert!(flat.r.is_nan());
    }
}
