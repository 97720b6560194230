use crate::error::ApiError;
use crate::query::{CloudsQuery, GeoPoint};
use serde::Deserialize;

/// Query-string values exactly as received.
///
/// Kept as strings so that coercion failures are reported as validation
/// errors (422) instead of the extractor's generic 400.
#[derive(Debug, Default, Deserialize)]
pub struct RawCloudsParams {
    pub providers_req: Option<String>,
    pub sorted_by_geolocation: Option<String>,
    pub user_latitude: Option<String>,
    pub user_longitude: Option<String>,
}

impl TryFrom<RawCloudsParams> for CloudsQuery {
    type Error = ApiError;

    fn try_from(raw: RawCloudsParams) -> Result<Self, Self::Error> {
        let sort = parse_flag("sorted_by_geolocation", raw.sorted_by_geolocation.as_deref())?;
        let latitude = parse_coordinate("user_latitude", raw.user_latitude.as_deref())?;
        let longitude = parse_coordinate("user_longitude", raw.user_longitude.as_deref())?;

        let providers = raw
            .providers_req
            .map(|list| list.split(',').map(str::to_string).collect());

        // Presence check only: 0.0 is a valid latitude/longitude.
        let sort_from = match (sort.unwrap_or(false), latitude, longitude) {
            (false, _, _) => None,
            (true, Some(latitude), Some(longitude)) => Some(GeoPoint {
                latitude,
                longitude,
            }),
            (true, _, _) => {
                return Err(ApiError::bad_request(
                    "user latitude and/or longitude are missing",
                ))
            }
        };

        Ok(CloudsQuery {
            providers,
            sort_from,
        })
    }
}

// Only a missing key is absent: `?sorted_by_geolocation=` is a malformed value.
fn parse_flag(name: &str, value: Option<&str>) -> Result<Option<bool>, ApiError> {
    let value = match value {
        None => return Ok(None),
        Some(v) => v.trim(),
    };

    match value.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" | "on" => Ok(Some(true)),
        "false" | "f" | "0" | "no" | "n" | "off" => Ok(Some(false)),
        _ => Err(ApiError::validation(format!(
            "{}: input should be a valid boolean, got '{}'",
            name, value
        ))),
    }
}

fn parse_coordinate(name: &str, value: Option<&str>) -> Result<Option<f64>, ApiError> {
    let value = match value {
        None => return Ok(None),
        Some(v) => v.trim(),
    };

    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(Some(number)),
        _ => Err(ApiError::validation(format!(
            "{}: input should be a valid number, got '{}'",
            name, value
        ))),
    }
}
