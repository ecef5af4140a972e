//! Choropleth color scale domains.
//!
//! A sequential color scale needs the min/max of the selected metric
//! over the visible features. Features lacking the metric are skipped;
//! they render with the neutral fallback fill instead of distorting the
//! domain.

/// Computes the `(min, max)` domain over the present metric values.
///
/// Returns `None` when no feature carries the metric (or the input is
/// empty), in which case the map falls back to its unscaled default
/// fill. Non-finite values are ignored the same way as missing ones.
#[must_use]
pub fn value_domain<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut domain: Option<(f64, f64)> = None;

    for value in values.into_iter().flatten() {
        if !value.is_finite() {
            continue;
        }
        domain = Some(match domain {
            None => (value, value),
            Some((min, max)) => (min.min(value), max.max(value)),
        });
    }

    domain
}

#[cfg(test)]
mod tests {
    use super::value_domain;

    #[test]
    fn domain_over_present_values() {
        let values = [Some(3.0), None, Some(1.0), Some(7.5), None];
        assert_eq!(value_domain(values), Some((1.0, 7.5)));
    }

    #[test]
    fn single_value_collapses_domain() {
        assert_eq!(value_domain([Some(4.2)]), Some((4.2, 4.2)));
    }

    #[test]
    fn empty_and_all_missing_yield_none() {
        assert_eq!(value_domain([]), None);
        assert_eq!(value_domain([None, None]), None);
    }

    #[test]
    fn non_finite_values_are_skipped() {
        let values = [Some(2.0), Some(f64::NAN), Some(5.0), Some(f64::INFINITY)];
        assert_eq!(value_domain(values), Some((2.0, 5.0)));
    }
}
