use super::types::CloudsQuery;
use crate::catalog::types::CloudRecord;
use crate::error::QueryError;
use crate::geo::distance;
use std::collections::HashSet;

/// Keeps records whose provider is in `providers`, preserving order.
pub fn filter_by_providers(
    clouds: &[CloudRecord],
    providers: Option<&HashSet<String>>,
) -> Vec<CloudRecord> {
    match providers {
        None => clouds.to_vec(),
        Some(wanted) => {
            tracing::info!("Filtering by the given list of providers");
            clouds
                .iter()
                .filter(|cloud| wanted.contains(&cloud.provider))
                .cloned()
                .collect()
        }
    }
}

/// Stable ascending sort by distance from `(latitude, longitude)`.
///
/// NaN distances order after every finite distance.
pub fn sort_by_distance(
    clouds: Vec<CloudRecord>,
    latitude: f64,
    longitude: f64,
) -> Result<Vec<CloudRecord>, QueryError> {
    tracing::info!("Sorting clouds by distance to the user");
    let expected = clouds.len();

    let mut keyed: Vec<(f64, CloudRecord)> = clouds
        .into_iter()
        .map(|cloud| {
            let d = distance(latitude, longitude, cloud.geo_latitude, cloud.geo_longitude);
            (d, cloud)
        })
        .collect();
    keyed.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or_else(|| a.0.is_nan().cmp(&b.0.is_nan()))
    });

    let sorted: Vec<CloudRecord> = keyed.into_iter().map(|(_, cloud)| cloud).collect();
    check_length(expected, sorted.len())?;
    Ok(sorted)
}

fn check_length(expected: usize, actual: usize) -> Result<(), QueryError> {
    if expected != actual {
        tracing::error!(
            "Length of sorted clouds ({}) differs from the original list ({})",
            actual,
            expected
        );
        return Err(QueryError::LengthMismatch { expected, actual });
    }
    Ok(())
}

/// Filter, then sort the filtered subset if requested.
pub fn apply(clouds: &[CloudRecord], query: &CloudsQuery) -> Result<Vec<CloudRecord>, QueryError> {
    let filtered = filter_by_providers(clouds, query.providers.as_ref());

    match query.sort_from {
        Some(point) => sort_by_distance(filtered, point.latitude, point.longitude),
        None => Ok(filtered),
    }
}

#[cfg(test)]
mod length_check {
    use super::check_length;
    use crate::error::QueryError;

    #[test]
    fn mismatch_is_reported() {
        assert!(matches!(
            check_length(4, 3),
            Err(QueryError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        ));
        assert!(check_length(2, 2).is_ok());
    }
}
