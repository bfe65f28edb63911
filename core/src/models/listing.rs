// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: Option<i32>,
    pub name: String,
    pub category: ListingCategory,
    pub location: String,
    pub monthly_price: f32,
    pub rating: f32,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ListingCategory {
    Coaching,
    Library,
    Pg,
    Tiffin,
}

impl ListingCategory {
    pub const ALL: [ListingCategory; 4] = [
        ListingCategory::Coaching,
        ListingCategory::Library,
        ListingCategory::Pg,
        ListingCategory::Tiffin,
    ];
}

impl fmt::Display for ListingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingCategory::Coaching => write!(f, "Coaching"),
            ListingCategory::Library => write!(f, "Library"),
            ListingCategory::Pg => write!(f, "PG"),
            ListingCategory::Tiffin => write!(f, "Tiffin"),
        }
    }
}

impl Listing {
    /// Returns the built-in demo catalog, ordered by id.
    pub fn sample_catalog() -> Vec<Listing> {
        const ENTRIES: &[(&str, ListingCategory, &str, f32, f32)] = &[
            ("Apex IIT Academy", ListingCategory::Coaching, "Kota", 4500.0, 4.6),
            ("Scholars Point", ListingCategory::Coaching, "Delhi", 3800.0, 4.2),
            ("Vidya Mandir Classes", ListingCategory::Coaching, "Jaipur", 4200.0, 4.4),
            ("Prime NEET Hub", ListingCategory::Coaching, "Kota", 5200.0, 4.7),
            ("Concept Tree Tutorials", ListingCategory::Coaching, "Indore", 3500.0, 4.0),
            ("Silent Study Library", ListingCategory::Library, "Kota", 900.0, 4.8),
            ("Readers' Den", ListingCategory::Library, "Delhi", 1100.0, 4.3),
            ("Focus Zone Library", ListingCategory::Library, "Jaipur", 850.0, 4.5),
            ("Night Owl Reading Room", ListingCategory::Library, "Indore", 750.0, 4.1),
            ("Gyan Kendra Library", ListingCategory::Library, "Bhopal", 800.0, 4.2),
            ("Sunrise Boys PG", ListingCategory::Pg, "Kota", 6500.0, 4.1),
            ("Green View Girls PG", ListingCategory::Pg, "Delhi", 7200.0, 4.4),
            ("Comfort Stay PG", ListingCategory::Pg, "Jaipur", 5800.0, 3.9),
            ("Lakeside Residency", ListingCategory::Pg, "Bhopal", 6000.0, 4.3),
            ("Student Nest PG", ListingCategory::Pg, "Indore", 5500.0, 4.0),
            ("Maa's Kitchen Tiffin", ListingCategory::Tiffin, "Kota", 2400.0, 4.7),
            ("Ghar Ka Khana", ListingCategory::Tiffin, "Delhi", 2800.0, 4.5),
            ("Annapurna Meals", ListingCategory::Tiffin, "Jaipur", 2200.0, 4.2),
            ("Healthy Bites Tiffin", ListingCategory::Tiffin, "Indore", 2600.0, 4.1),
            ("Swad Tiffin Service", ListingCategory::Tiffin, "Bhopal", 2300.0, 4.4),
        ];

        ENTRIES
            .iter()
            .enumerate()
            .map(|(index, (name, category, location, monthly_price, rating))| Listing {
                id: Some(index as i32 + 1),
                name: (*name).to_string(),
                category: *category,
                location: (*location).to_string(),
                monthly_price: *monthly_price,
                rating: *rating,
            })
            .collect()
    }
}
