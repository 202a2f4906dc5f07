use serde::{Deserialize, Serialize};

/// A city and the country it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityEntry {
    /// Country name.
    pub country: String,
    /// City name.
    pub city: String,
}

impl CityEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(country: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
        }
    }
}

/// Sort by country, then by city, both ascending.
///
/// ```
/// use objkit_objects::{CityEntry, sort_cities_array};
///
/// let sorted = sort_cities_array(vec![
///     CityEntry::new("Russia", "Moscow"),
///     CityEntry::new("Belarus", "Minsk"),
///     CityEntry::new("Belarus", "Brest"),
/// ]);
/// assert_eq!(sorted[0], CityEntry::new("Belarus", "Brest"));
/// assert_eq!(sorted[2], CityEntry::new("Russia", "Moscow"));
/// ```
#[must_use]
pub fn sort_cities_array(mut cities: Vec<CityEntry>) -> Vec<CityEntry> {
    cities.sort_by(|a, b| a.country.cmp(&b.country).then_with(|| a.city.cmp(&b.city)));
    cities
}
