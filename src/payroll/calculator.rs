/// Gross, tax and net pay for one record.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PayBreakdown {
    pub gross: f64,
    pub tax: f64,
    pub net: f64,
}

/// Computes pay from hours, hourly rate and a fractional tax rate.
///
/// Inputs are taken as given: no clamping or rejection happens here, callers
/// validate before storing.
pub fn compute(hours: f64, rate: f64, tax_rate: f64) -> PayBreakdown {
    let gross = hours * rate;
    let tax = gross * tax_rate;
    PayBreakdown {
        gross,
        tax,
        net: gross - tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_compute() {
        let pay = compute(80.0, 20.0, 0.20);
        assert_close(pay.gross, 1600.0);
        assert_close(pay.tax, 320.0);
        assert_close(pay.net, 1280.0);

        let pay = compute(40.0, 15.0, 0.10);
        assert_close(pay.gross, 600.0);
        assert_close(pay.tax, 60.0);
        assert_close(pay.net, 540.0);
    }

    #[test]
    fn test_compute_zero_hours() {
        let pay = compute(0.0, 42.5, 0.3);
        assert_eq!(pay, PayBreakdown::default());
    }

    #[test]
    fn test_compute_identities() {
        let cases = [
            (0.0, 0.0, 0.0),
            (1.0, 1.0, 1.0),
            (37.5, 18.25, 0.15),
            (168.0, 1000.0, 0.45),
            (0.25, 7.0, 0.0),
        ];
        for (hours, rate, tax_rate) in cases {
            let pay = compute(hours, rate, tax_rate);
            assert_close(pay.gross, hours * rate);
            assert_close(pay.net, pay.gross - pay.gross * tax_rate);
            assert_close(pay.gross, pay.tax + pay.net);
        }
    }

    #[test]
    fn test_compute_does_not_clamp() {
        let pay = compute(-2.0, 10.0, 1.5);
        assert_close(pay.gross, -20.0);
        assert_close(pay.tax, -30.0);
        assert_close(pay.net, 10.0);
    }
}
