use std::collections::HashSet;

/// Reference location for a distance sort, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A validated query against the catalog.
///
/// `providers: None` means "no filter"; `Some` of an empty set matches nothing.
/// `sort_from: Some` requests a distance sort from that point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CloudsQuery {
    pub providers: Option<HashSet<String>>,
    pub sort_from: Option<GeoPoint>,
}
