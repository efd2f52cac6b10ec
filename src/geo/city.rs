//! City lookup for geographic coordinates.
//!
//! Resolves a city name from the configuration into coordinates using the
//! `cities` crate database of world cities.

/// Represents a city with its geographic information
#[derive(Debug, Clone, PartialEq)]
pub struct CityInfo {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityInfo {
    /// "Name, Country" as written in the configuration file.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

fn all_cities() -> impl Iterator<Item = CityInfo> {
    IntoIterator::into_iter(cities::all())
        .filter(|city| !city.city.trim().is_empty())
        .map(|city| CityInfo {
            name: city.city.to_string(),
            country: city.country.to_string(),
            latitude: city.latitude,
            longitude: city.longitude,
        })
}

/// Look up a city by name, case-insensitively.
///
/// Accepts either a bare name ("Jerusalem") or "Name, Country" to
/// disambiguate cities that share a name. The first match wins.
pub fn find_city(query: &str) -> Option<CityInfo> {
    let (name, country) = match query.split_once(',') {
        Some((name, country)) => (name.trim(), Some(country.trim())),
        None => (query.trim(), None),
    };
    if name.is_empty() {
        return None;
    }

    all_cities().find(|city| {
        city.name.eq_ignore_ascii_case(name)
            && country.is_none_or(|country| city.country.eq_ignore_ascii_case(country))
    })
}

/// Find the closest cities to a coordinate, nearest first.
pub fn find_cities_near_coordinate(
    target_lat: f64,
    target_lon: f64,
    max_results: usize,
) -> Vec<CityInfo> {
    let mut cities_with_distance: Vec<(CityInfo, f64)> = all_cities()
        .map(|city| {
            let distance =
                calculate_distance(target_lat, target_lon, city.latitude, city.longitude);
            (city, distance)
        })
        .collect();

    cities_with_distance.sort_by(|a, b| a.1.total_cmp(&b.1));

    cities_with_distance
        .into_iter()
        .take(max_results)
        .map(|(city, _)| city)
        .collect()
}

/// The single closest city to a coordinate.
pub fn nearest_city(latitude: f64, longitude: f64) -> Option<CityInfo> {
    find_cities_near_coordinate(latitude, longitude, 1).into_iter().next()
}

/// Approximate distance between two coordinates in degrees (flat Euclidean).
///
/// Good enough for ranking nearby cities; not a geodesic distance.
fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat_diff = lat1 - lat2;
    let lon_diff = lon1 - lon2;
    (lat_diff * lat_diff + lon_diff * lon_diff).sqrt()
}
