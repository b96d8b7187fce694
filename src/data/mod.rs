//! Core data models for Parkscout
//!
//! This module contains the record types produced by the extractors and the
//! nearby-places client, along with their display formatting.

use serde::{Deserialize, Serialize};

/// One protected-area entry, extracted from a detail page
///
/// Immutable after construction; a state query builds a fresh list of sites
/// which is discarded when the user picks a new state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Designation of the site (e.g. "National Park"); some sites have none
    pub category: String,
    /// Name of the site (e.g. "Isle Royale")
    pub name: String,
    /// City and state composite (e.g. "Houghton, MI")
    pub address: String,
    /// Postal code (e.g. "49931", "82190-0168")
    pub zipcode: String,
    /// Phone number (e.g. "(616) 319-7906")
    pub phone: String,
}

impl Site {
    /// Formats the one-line summary shown in the numbered site list
    ///
    /// Example: `Isle Royale (National Park): Houghton, MI 49931`
    pub fn info(&self) -> String {
        format!(
            "{} ({}): {} {}",
            self.name, self.category, self.address, self.zipcode
        )
    }
}

/// One nearby point of interest from the geolocation API
///
/// All fields are plain strings: the optional payload fields have already
/// been normalized, with absent or empty values replaced by their sentinel
/// ("no category" / "no address" / "no city"). Transient; constructed and
/// printed within a single loop iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// Name of the place
    pub name: String,
    /// Category of the place, or "no category"
    pub category: String,
    /// Street address, or "no address"
    pub address: String,
    /// City name, or "no city"
    pub city: String,
}

impl Place {
    /// Formats the bulleted line body shown in the nearby-places list
    ///
    /// Example: `Lakeside Diner (Restaurants): 12 Shore Rd, Houghton`
    pub fn info(&self) -> String {
        format!(
            "{} ({}): {}, {}",
            self.name, self.category, self.address, self.city
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_info_formatting() {
        let site = Site {
            category: "National Park".to_string(),
            name: "Isle Royale".to_string(),
            address: "Houghton, MI".to_string(),
            zipcode: "49931".to_string(),
            phone: "(906) 482-0984".to_string(),
        };

        assert_eq!(site.info(), "Isle Royale (National Park): Houghton, MI 49931");
    }

    #[test]
    fn test_site_info_with_empty_category() {
        let site = Site {
            category: String::new(),
            name: "Fort Wayne".to_string(),
            address: "Detroit, MI".to_string(),
            zipcode: "48209".to_string(),
            phone: "313-555-0100".to_string(),
        };

        // Empty category still renders the parentheses, matching the listing format
        assert_eq!(site.info(), "Fort Wayne (): Detroit, MI 48209");
    }

    #[test]
    fn test_place_info_formatting() {
        let place = Place {
            name: "Lakeside Diner".to_string(),
            category: "Restaurants".to_string(),
            address: "12 Shore Rd".to_string(),
            city: "Houghton".to_string(),
        };

        assert_eq!(
            place.info(),
            "Lakeside Diner (Restaurants): 12 Shore Rd, Houghton"
        );
    }

    #[test]
    fn test_place_info_with_sentinels() {
        let place = Place {
            name: "Trailhead".to_string(),
            category: "no category".to_string(),
            address: "no address".to_string(),
            city: "no city".to_string(),
        };

        assert_eq!(place.info(), "Trailhead (no category): no address, no city");
    }

    #[test]
    fn test_site_serialization_roundtrip() {
        let site = Site {
            category: "National Lakeshore".to_string(),
            name: "Pictured Rocks".to_string(),
            address: "Munising, MI".to_string(),
            zipcode: "49862".to_string(),
            phone: "(906) 387-3700".to_string(),
        };

        let json = serde_json::to_string(&site).expect("Failed to serialize Site");
        let back: Site = serde_json::from_str(&json).expect("Failed to deserialize Site");
        assert_eq!(back, site);
    }
}
