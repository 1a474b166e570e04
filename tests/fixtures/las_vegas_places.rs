//! Real Las Vegas points of interest for realistic planner fixtures.
//!
//! Coordinates sourced from OpenStreetMap via Overpass API.

use route_planner::model::{CategoryId, Place};
use route_planner::repository::InMemoryPlaceRepository;

pub const CASINO: CategoryId = 1;
pub const STEAKHOUSE: CategoryId = 2;
pub const PIZZA: CategoryId = 3;
pub const SUSHI: CategoryId = 4;
pub const BAKERY: CategoryId = 5;
/// A category with no places in the catalog.
pub const OBSERVATORY: CategoryId = 99;

/// Start position on the Strip, outside the Bellagio.
pub const STRIP_START: (f64, f64) = (36.1126, -115.1767);

/// (name, category, lat, lng)
const CATALOG: &[(&str, CategoryId, f64, f64)] = &[
    ("Wynn Las Vegas", CASINO, 36.1263781, -115.1658180),
    ("MGM Grand", CASINO, 36.1023654, -115.1688720),
    ("Caesars Palace", CASINO, 36.1162, -115.1745),
    ("Longhorn Casino", CASINO, 36.1070664, -115.0591256),
    ("SW Steakhouse", STEAKHOUSE, 36.1262145, -115.1669146),
    ("Gordon Ramsay Steak", STEAKHOUSE, 36.1127744, -115.1712029),
    ("BLT Steakhouse", STEAKHOUSE, 36.1135528, -115.1690095),
    ("Charlie Palmer Steak", STEAKHOUSE, 36.0910624, -115.1743364),
    ("Center Cut Steakhouse", STEAKHOUSE, 36.1162981, -115.1717185),
    ("Otto Pizzeria", PIZZA, 36.1231219, -115.1684514),
    ("Bonanno's NY Pizzeria", PIZZA, 36.1165192, -115.1719357),
    ("Grimaldi's Pizzeria", PIZZA, 36.1248850, -115.1683540),
    ("Slice of Vegas Pizza", PIZZA, 36.0944330, -115.1759954),
    ("Roma Pizza", PIZZA, 36.1012461, -115.0753039),
    ("I Love Sushi Henderson", SUSHI, 35.9916660, -115.1028343),
    ("Tomo Sushi", SUSHI, 36.0992464, -115.1142123),
    ("Sushi Twister", SUSHI, 36.1007300, -115.0526259),
    ("Le Macaron", BAKERY, 36.1217180, -115.1689230),
    ("Payard Patisserie", BAKERY, 36.1166582, -115.1759111),
    ("Coco's Bakery", BAKERY, 36.1004202, -115.1652380),
];

/// Every catalog entry as a `Place`, ids numbered from 100 in catalog order.
pub fn las_vegas_places() -> Vec<Place> {
    CATALOG
        .iter()
        .enumerate()
        .map(|(index, &(name, category, lat, lng))| {
            Place::new(100 + index as i64, name, category, lat, lng)
        })
        .collect()
}

pub fn las_vegas_repository() -> InMemoryPlaceRepository<Place> {
    las_vegas_places().into_iter().collect()
}

pub fn place_named(name: &str) -> Place {
    las_vegas_places()
        .into_iter()
        .find(|place| place.name == name)
        .unwrap_or_else(|| panic!("no fixture place named {}", name))
}
