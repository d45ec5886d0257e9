//! # Tour Catalog
//!
//! The fixed catalog of multi-day tours. Defined at build time, never
//! mutated, fully known ahead of time — so lookups cannot fail for any id
//! the UI presents.

/// One day of a tour itinerary.
#[derive(Debug, PartialEq, Eq)]
pub struct ItineraryDay {
    pub day: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A multi-day tour. Itineraries are non-empty and ordered.
#[derive(Debug, PartialEq, Eq)]
pub struct Tour {
    pub id: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub description: &'static str,
    pub itinerary: &'static [ItineraryDay],
}

/// The full catalog, in display order.
pub fn catalog() -> &'static [Tour] {
    CATALOG
}

/// Look up a tour by id.
pub fn find(id: &str) -> Option<&'static Tour> {
    CATALOG.iter().find(|t| t.id == id)
}

const CATALOG: &[Tour] = &[
    Tour {
        id: "imperiales",
        title: "The Imperial Cities",
        duration: "7 days",
        level: "Easy",
        description: "The classic historical circuit: Marrakech, Fes, Meknes and Rabat.",
        itinerary: &[
            ItineraryDay {
                day: "Day 1",
                title: "Marrakech",
                description: "Arrival and Jemaa el-Fna square.",
            },
            ItineraryDay {
                day: "Day 2",
                title: "Monuments",
                description: "Bahia Palace, Koutoubia, the souks.",
            },
            ItineraryDay {
                day: "Day 3",
                title: "Rabat",
                description: "Road to the capital via Casablanca.",
            },
            ItineraryDay {
                day: "Day 4",
                title: "Meknes & Fes",
                description: "Bab Mansour gate and arrival in Fes.",
            },
            ItineraryDay {
                day: "Day 5",
                title: "Fes",
                description: "A day inside the medina.",
            },
            ItineraryDay {
                day: "Day 6",
                title: "Atlas",
                description: "Return through Ifrane.",
            },
            ItineraryDay {
                day: "Day 7",
                title: "Departure",
                description: "Airport transfer.",
            },
        ],
    },
    Tour {
        id: "desert",
        title: "Route of the Kasbahs",
        duration: "5 days",
        level: "Moderate",
        description: "The southern adventure, from Ouarzazate to the Merzouga dunes.",
        itinerary: &[
            ItineraryDay {
                day: "Day 1",
                title: "Ouarzazate",
                description: "Ait Ben Haddou.",
            },
            ItineraryDay {
                day: "Day 2",
                title: "Dades",
                description: "Valley of the Roses.",
            },
            ItineraryDay {
                day: "Day 3",
                title: "Merzouga",
                description: "A night in the desert.",
            },
            ItineraryDay {
                day: "Day 4",
                title: "Draa",
                description: "Back through Agdz.",
            },
            ItineraryDay {
                day: "Day 5",
                title: "Marrakech",
                description: "End of the journey.",
            },
        ],
    },
    Tour {
        id: "nord",
        title: "The Blue North",
        duration: "6 days",
        level: "Relaxed",
        description: "Tangier and the blue pearl, Chefchaouen.",
        itinerary: &[
            ItineraryDay {
                day: "Day 1",
                title: "Tangier",
                description: "The kasbah and Cafe Hafa.",
            },
            ItineraryDay {
                day: "Day 2",
                title: "Cap Spartel",
                description: "Caves of Hercules.",
            },
            ItineraryDay {
                day: "Day 3",
                title: "Chefchaouen",
                description: "The blue city.",
            },
            ItineraryDay {
                day: "Day 4",
                title: "Akchour",
                description: "Waterfalls.",
            },
            ItineraryDay {
                day: "Day 5",
                title: "Asilah",
                description: "The artists' medina.",
            },
            ItineraryDay {
                day: "Day 6",
                title: "Departure",
                description: "Back to Tangier.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = catalog().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn test_itineraries_are_non_empty() {
        for tour in catalog() {
            assert!(!tour.itinerary.is_empty(), "tour {} has no days", tour.id);
        }
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert_eq!(find("desert").unwrap().title, "Route of the Kasbahs");
        assert!(find("atlantide").is_none());
    }
}
