use std::cmp::Reverse;

use crate::model::City;

/// Capital first, then by population, largest first. Stable for ties.
pub fn sort_city_roster(cities: &mut [City]) {
    cities.sort_by_key(|c| (!c.is_capital, Reverse(c.population)));
}
