use statrs::distribution::{ContinuousCDF, StudentsT};

// ---------------------------------------------------------------------------
// Simple linear regression (closed-form OLS)
// ---------------------------------------------------------------------------

/// The five quantities of a fitted line y = intercept + slope · x.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionSummary {
    /// Slope coefficient (β₁).
    pub slope: f64,
    /// Intercept (β₀).
    pub intercept: f64,
    /// Pearson correlation coefficient between x and y.
    pub r_value: f64,
    /// Two-sided p-value for H₀: β₁ = 0, from t(n−2).
    pub p_value: f64,
    /// Standard error of the slope estimate.
    pub std_err: f64,
}

impl RegressionSummary {
    /// Coefficient of determination, r².
    pub fn r_squared(&self) -> f64 {
        self.r_value * self.r_value
    }
}

/// Fit y = intercept + slope · x by ordinary least squares.
///
/// β₁ = cov(x,y) / var(x),  β₀ = ȳ − β₁·x̄, with the slope's standard
/// error from the residual mean square and the p-value from the
/// t-statistic under n−2 degrees of freedom.
///
/// Returns `None` if the slices differ in length, fewer than 3 points
/// are given, any value is non-finite, or x has zero variance.
pub fn linear_fit(x: &[f64], y: &[f64]) -> Option<RegressionSummary> {
    let n = x.len();
    if n < 3 || n != y.len() {
        return None;
    }
    if x.iter().any(|v| !v.is_finite()) || y.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let nf = n as f64;
    let x_mean = x.iter().sum::<f64>() / nf;
    let y_mean = y.iter().sum::<f64>() / nf;

    let ss_x: f64 = x.iter().map(|&xi| (xi - x_mean).powi(2)).sum();
    let ss_y: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
    let s_xy: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (xi - x_mean) * (yi - y_mean))
        .sum();

    if ss_x < 1e-300 {
        return None; // zero variance in x
    }

    let slope = s_xy / ss_x;
    let intercept = y_mean - slope * x_mean;

    // Pearson r; undefined for a constant y, reported as 0.
    let r_value = if ss_y < 1e-300 {
        0.0
    } else {
        (s_xy / (ss_x * ss_y).sqrt()).clamp(-1.0, 1.0)
    };

    // Residual sum of squares and the slope's standard error.
    let ss_res: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| {
            let r = yi - (intercept + slope * xi);
            r * r
        })
        .sum();
    let df = nf - 2.0;
    let mse = ss_res / df;
    let std_err = (mse / ss_x).sqrt();

    let t = if std_err > 1e-300 {
        slope / std_err
    } else {
        f64::INFINITY
    };
    let p_value = two_sided_p(t, df);

    Some(RegressionSummary {
        slope,
        intercept,
        r_value,
        p_value,
        std_err,
    })
}

/// Two-sided p-value for a t-statistic with `df` degrees of freedom.
fn two_sided_p(t: f64, df: f64) -> f64 {
    if !t.is_finite() {
        return 0.0; // perfect fit, zero residual variance
    }
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0),
        Err(_) => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn recovers_exact_line() {
        // y = 3 + 2x with no noise.
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y: Vec<f64> = x.iter().map(|&xi| 3.0 + 2.0 * xi).collect();
        let fit = linear_fit(&x, &y).unwrap();

        assert!((fit.slope - 2.0).abs() < TOL);
        assert!((fit.intercept - 3.0).abs() < TOL);
        assert!((fit.r_squared() - 1.0).abs() < TOL);
        assert!(fit.p_value < 1e-9);
        assert!(fit.std_err < 1e-6);
    }

    #[test]
    fn negative_slope_gives_negative_r() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [8.0, 6.0, 4.0, 2.0];
        let fit = linear_fit(&x, &y).unwrap();
        assert!((fit.slope + 2.0).abs() < TOL);
        assert!((fit.r_value + 1.0).abs() < TOL);
    }

    #[test]
    fn noisy_data_has_nonzero_p() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y = [2.0, 1.0, 4.0, 3.0, 6.0, 5.0];
        let fit = linear_fit(&x, &y).unwrap();
        assert!(fit.p_value > 0.0 && fit.p_value < 1.0);
        assert!(fit.r_squared() < 1.0);
        assert!(fit.std_err > 0.0);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(linear_fit(&[1.0, 2.0], &[1.0, 2.0]).is_none());
        assert!(linear_fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]).is_none());
        assert!(linear_fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).is_none());
        assert!(linear_fit(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn constant_y_fits_flat_line() {
        let fit = linear_fit(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]).unwrap();
        assert!(fit.slope.abs() < TOL);
        assert!((fit.intercept - 5.0).abs() < TOL);
        assert_eq!(fit.r_value, 0.0);
    }
}
