// src/domain/property.rs

use chrono::NaiveDate;
use std::collections::HashSet;
use std::fmt;
use url::form_urlencoded;

use crate::errors::CatalogError;

/// The kinds of property the platform lists. `All` is not a kind; it lives on
/// the filter side as the sentinel of the type facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    House,
    Apartment,
    Villa,
    Condo,
    Townhouse,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 5] = [
        PropertyKind::House,
        PropertyKind::Apartment,
        PropertyKind::Villa,
        PropertyKind::Condo,
        PropertyKind::Townhouse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyKind::House => "House",
            PropertyKind::Apartment => "Apartment",
            PropertyKind::Villa => "Villa",
            PropertyKind::Condo => "Condo",
            PropertyKind::Townhouse => "Townhouse",
        }
    }

    /// Case-insensitive lookup by label. Used for both query strings and DB rows.
    pub fn parse(raw: &str) -> Option<PropertyKind> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A listed property. Immutable once it is part of a catalog snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub address: String,
    pub kind: PropertyKind,
    /// Whole dollars.
    pub price: u64,
    pub bedrooms: u32,
    /// May be fractional (2.5 = two full baths and a half bath).
    pub bathrooms: f64,
    /// Square feet, always > 0.
    pub area: u32,
    pub image: String,
    pub is_verified: bool,
    pub listed_on: NaiveDate,
}

impl Property {
    fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::InvalidField {
                id: self.id.clone(),
                field: "id",
            });
        }
        if !self.bathrooms.is_finite() || self.bathrooms < 0.0 {
            return Err(CatalogError::InvalidField {
                id: self.id.clone(),
                field: "bathrooms",
            });
        }
        if self.area == 0 {
            return Err(CatalogError::InvalidField {
                id: self.id.clone(),
                field: "area",
            });
        }
        Ok(())
    }
}

/// An ordered, validated snapshot of properties. Ids are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    pub fn new(properties: Vec<Property>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(properties.len());
        for prop in &properties {
            prop.validate()?;
            if !seen.insert(prop.id.as_str()) {
                return Err(CatalogError::DuplicateId(prop.id.clone()));
            }
        }
        Ok(Self { properties })
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn verified_count(&self) -> usize {
        self.properties.iter().filter(|p| p.is_verified).count()
    }
}

/// One row of a property's ownership / listing history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub event: String,
    pub price: Option<u64>,
}

/// Everything the detail page shows about a single property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDetail {
    pub property: Property,
    pub description: Vec<String>,
    /// Gallery order; never empty (falls back to the cover image).
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub history: Vec<HistoryEntry>,
}

impl PropertyDetail {
    pub fn new(
        property: Property,
        description: Vec<String>,
        images: Vec<String>,
        features: Vec<String>,
        history: Vec<HistoryEntry>,
    ) -> Self {
        let images = if images.is_empty() {
            vec![property.image.clone()]
        } else {
            images
        };

        Self {
            property,
            description,
            images,
            features,
            history,
        }
    }
}

/// `750000` -> `$750,000`
pub fn format_price(price: u64) -> String {
    format!("${}", group_thousands(price))
}

/// `6500` -> `6,500`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Detail page path. The id is escaped into a single path segment, so ids
/// with spaces, `/`, `?` or non-ASCII text still round-trip.
pub fn property_path(id: &str) -> String {
    let segment: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
    format!("/property/{segment}")
}

/// Turns a raw `/property/{segment}` segment back into the id. Accepts both
/// `%20` and `+` for a space.
pub fn decode_path_id(segment: &str) -> String {
    // `&` and `=` would otherwise split the segment into pairs.
    let escaped = segment.replace('&', "%26").replace('=', "%3D");
    form_urlencoded::parse(escaped.as_bytes())
        .next()
        .map(|(id, _)| id.into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(id: &str) -> Property {
        Property {
            id: id.to_string(),
            title: "Test".to_string(),
            address: "1 Test St, Testville, TS".to_string(),
            kind: PropertyKind::House,
            price: 500_000,
            bedrooms: 3,
            bathrooms: 2.0,
            area: 1500,
            image: "https://example.com/a.jpg".to_string(),
            is_verified: false,
            listed_on: NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
        }
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let err = Catalog::new(vec![prop("1"), prop("2"), prop("1")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("1".to_string()));
    }

    #[test]
    fn catalog_rejects_bad_numbers() {
        let mut nan_baths = prop("1");
        nan_baths.bathrooms = f64::NAN;
        assert!(matches!(
            Catalog::new(vec![nan_baths]),
            Err(CatalogError::InvalidField { field: "bathrooms", .. })
        ));

        let mut no_area = prop("2");
        no_area.area = 0;
        assert!(matches!(
            Catalog::new(vec![no_area]),
            Err(CatalogError::InvalidField { field: "area", .. })
        ));
    }

    #[test]
    fn catalog_keeps_order() {
        let catalog = Catalog::new(vec![prop("b"), prop("a")]).unwrap();
        let ids: Vec<&str> = catalog.properties().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn detail_falls_back_to_cover_image() {
        let detail = PropertyDetail::new(prop("1"), vec![], vec![], vec![], vec![]);
        assert_eq!(detail.images, vec!["https://example.com/a.jpg".to_string()]);
    }

    #[test]
    fn paths_escape_and_decode_ids() {
        assert_eq!(property_path("7"), "/property/7");
        assert_eq!(property_path("villa 2/b"), "/property/villa+2%2Fb");

        for id in ["7", "villa 2/b", "a&b=c", "what?#", "château", "1+1"] {
            let path = property_path(id);
            let segment = path.strip_prefix("/property/").unwrap();
            assert!(!segment.contains('/'));
            assert_eq!(decode_path_id(segment), id);
        }

        // What a browser sends for a typed space.
        assert_eq!(decode_path_id("villa%202"), "villa 2");
        assert_eq!(decode_path_id(""), "");
    }

    #[test]
    fn prices_are_grouped() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(950), "$950");
        assert_eq!(format_price(750_000), "$750,000");
        assert_eq!(format_price(3_500_000), "$3,500,000");
        assert_eq!(group_thousands(6500), "6,500");
    }

    #[test]
    fn kind_parse_is_case_insensitive() {
        assert_eq!(PropertyKind::parse("villa"), Some(PropertyKind::Villa));
        assert_eq!(PropertyKind::parse(" Condo "), Some(PropertyKind::Condo));
        assert_eq!(PropertyKind::parse("All"), None);
        assert_eq!(PropertyKind::parse("castle"), None);
    }
}
