// src/domain/filter.rs

use url::form_urlencoded;

use crate::domain::property::PropertyKind;

/// Type facet. `All` is the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(PropertyKind),
}

impl TypeFilter {
    pub fn options() -> Vec<TypeFilter> {
        std::iter::once(TypeFilter::All)
            .chain(PropertyKind::ALL.into_iter().map(TypeFilter::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Only(kind) => kind.label(),
        }
    }

    fn parse(raw: &str) -> TypeFilter {
        PropertyKind::parse(raw)
            .map(TypeFilter::Only)
            .unwrap_or_default()
    }

    pub fn query_value(self) -> Option<&'static str> {
        match self {
            TypeFilter::All => None,
            TypeFilter::Only(kind) => Some(kind.label()),
        }
    }
}

/// Price brackets. Half-open `[lo, hi)` except `Over5M`, which has no upper
/// bound, so every price lands in exactly one bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    #[default]
    Any,
    Under500K,
    From500KTo1M,
    From1MTo5M,
    Over5M,
}

impl PriceRange {
    pub const OPTIONS: [PriceRange; 5] = [
        PriceRange::Any,
        PriceRange::Under500K,
        PriceRange::From500KTo1M,
        PriceRange::From1MTo5M,
        PriceRange::Over5M,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PriceRange::Any => "Any",
            PriceRange::Under500K => "Under $500k",
            PriceRange::From500KTo1M => "$500k - $1M",
            PriceRange::From1MTo5M => "$1M - $5M",
            PriceRange::Over5M => "Over $5M",
        }
    }

    /// `(lower inclusive, upper exclusive)`; `None` for the sentinel.
    pub fn bounds(self) -> Option<(u64, Option<u64>)> {
        match self {
            PriceRange::Any => None,
            PriceRange::Under500K => Some((0, Some(500_000))),
            PriceRange::From500KTo1M => Some((500_000, Some(1_000_000))),
            PriceRange::From1MTo5M => Some((1_000_000, Some(5_000_000))),
            PriceRange::Over5M => Some((5_000_000, None)),
        }
    }

    pub fn contains(self, price: u64) -> bool {
        match self.bounds() {
            None => true,
            Some((lo, hi)) => price >= lo && hi.map_or(true, |hi| price < hi),
        }
    }

    pub fn query_value(self) -> Option<&'static str> {
        match self {
            PriceRange::Any => None,
            PriceRange::Under500K => Some("under-500k"),
            PriceRange::From500KTo1M => Some("500k-1m"),
            PriceRange::From1MTo5M => Some("1m-5m"),
            PriceRange::Over5M => Some("over-5m"),
        }
    }

    fn parse(raw: &str) -> PriceRange {
        Self::OPTIONS
            .into_iter()
            .find(|range| range.query_value() == Some(raw.trim()))
            .unwrap_or_default()
    }
}

/// Bedroom lower bound: "Any", "1+" .. "5+".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinBedrooms {
    #[default]
    Any,
    AtLeast(u32),
}

impl MinBedrooms {
    pub fn options() -> Vec<MinBedrooms> {
        std::iter::once(MinBedrooms::Any)
            .chain((1..=5).map(MinBedrooms::AtLeast))
            .collect()
    }

    pub fn label(self) -> String {
        match self {
            MinBedrooms::Any => "Any".to_string(),
            MinBedrooms::AtLeast(n) => format!("{n}+"),
        }
    }

    pub fn admits(self, bedrooms: u32) -> bool {
        match self {
            MinBedrooms::Any => true,
            MinBedrooms::AtLeast(n) => bedrooms >= n,
        }
    }

    fn parse(raw: &str) -> MinBedrooms {
        match raw.trim().trim_end_matches('+').parse::<u32>() {
            Ok(n @ 1..=5) => MinBedrooms::AtLeast(n),
            _ => MinBedrooms::Any,
        }
    }

    fn query_value(self) -> Option<String> {
        match self {
            MinBedrooms::Any => None,
            MinBedrooms::AtLeast(n) => Some(n.to_string()),
        }
    }
}

/// Bathroom lower bound. Thresholds are stored in half-bath units so the
/// enum stays `Eq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinBathrooms {
    #[default]
    Any,
    AtLeastHalves(u32),
}

impl MinBathrooms {
    const HALVES: [u32; 5] = [2, 3, 4, 6, 8];

    pub fn options() -> Vec<MinBathrooms> {
        std::iter::once(MinBathrooms::Any)
            .chain(Self::HALVES.into_iter().map(MinBathrooms::AtLeastHalves))
            .collect()
    }

    pub fn threshold(self) -> Option<f64> {
        match self {
            MinBathrooms::Any => None,
            MinBathrooms::AtLeastHalves(h) => Some(f64::from(h) / 2.0),
        }
    }

    pub fn label(self) -> String {
        match self.threshold() {
            None => "Any".to_string(),
            Some(t) => format!("{t}+"),
        }
    }

    pub fn admits(self, bathrooms: f64) -> bool {
        self.threshold().map_or(true, |t| bathrooms >= t)
    }

    fn parse(raw: &str) -> MinBathrooms {
        let Ok(value) = raw.trim().trim_end_matches('+').parse::<f64>() else {
            return MinBathrooms::Any;
        };
        Self::HALVES
            .into_iter()
            .find(|h| f64::from(*h) / 2.0 == value)
            .map(MinBathrooms::AtLeastHalves)
            .unwrap_or_default()
    }

    fn query_value(self) -> Option<String> {
        self.threshold().map(|t| t.to_string())
    }
}

/// Parses a free-typed area bound. Anything that is not a finite,
/// non-negative number is "unset" so a typo never hides the whole catalog.
pub fn parse_area_bound(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// The user's current search text and facet selections for one listing view.
///
/// Every field's domain contains its own default, so no setter can produce an
/// invalid state. `FilterState::default()` constrains nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    search_text: String,
    property_type: TypeFilter,
    price_range: PriceRange,
    min_bedrooms: MinBedrooms,
    min_bathrooms: MinBathrooms,
    min_area: Option<f64>,
    max_area: Option<f64>,
    verified_only: bool,
}

impl FilterState {
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn property_type(&self) -> TypeFilter {
        self.property_type
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn min_bedrooms(&self) -> MinBedrooms {
        self.min_bedrooms
    }

    pub fn min_bathrooms(&self) -> MinBathrooms {
        self.min_bathrooms
    }

    pub fn min_area(&self) -> Option<f64> {
        self.min_area
    }

    pub fn max_area(&self) -> Option<f64> {
        self.max_area
    }

    pub fn verified_only(&self) -> bool {
        self.verified_only
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into().trim().to_string();
    }

    pub fn set_property_type(&mut self, value: TypeFilter) {
        self.property_type = value;
    }

    pub fn set_price_range(&mut self, value: PriceRange) {
        self.price_range = value;
    }

    pub fn set_min_bedrooms(&mut self, value: MinBedrooms) {
        self.min_bedrooms = value;
    }

    pub fn set_min_bathrooms(&mut self, value: MinBathrooms) {
        self.min_bathrooms = value;
    }

    pub fn set_min_area(&mut self, value: Option<f64>) {
        self.min_area = value.filter(|v| v.is_finite() && *v >= 0.0);
    }

    pub fn set_max_area(&mut self, value: Option<f64>) {
        self.max_area = value.filter(|v| v.is_finite() && *v >= 0.0);
    }

    pub fn set_verified_only(&mut self, value: bool) {
        self.verified_only = value;
    }

    /// Copy of `self` with one change applied. Used to build the link for a
    /// single user action (pick a dropdown option, flip a toggle).
    pub fn with(&self, change: impl FnOnce(&mut FilterState)) -> FilterState {
        let mut next = self.clone();
        change(&mut next);
        next
    }

    /// Number of clauses that currently constrain the result.
    pub fn active_clauses(&self) -> usize {
        [
            !self.search_text.is_empty(),
            self.property_type != TypeFilter::All,
            self.price_range != PriceRange::Any,
            self.min_bedrooms != MinBedrooms::Any,
            self.min_bathrooms != MinBathrooms::Any,
            self.min_area.is_some() || self.max_area.is_some(),
            self.verified_only,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Binds one query parameter to its field. Unknown keys are ignored and
    /// unrecognised values fall back to the field's sentinel.
    pub fn apply_param(&mut self, key: &str, value: &str) {
        match key {
            "q" => self.set_search_text(value),
            "type" => self.set_property_type(TypeFilter::parse(value)),
            "price" => self.set_price_range(PriceRange::parse(value)),
            "beds" => self.set_min_bedrooms(MinBedrooms::parse(value)),
            "baths" => self.set_min_bathrooms(MinBathrooms::parse(value)),
            "min_area" => self.set_min_area(parse_area_bound(value)),
            "max_area" => self.set_max_area(parse_area_bound(value)),
            "verified" => {
                self.set_verified_only(matches!(value.trim(), "1" | "true" | "on"))
            }
            _ => {}
        }
    }

    pub fn from_pairs<'a, I>(pairs: I) -> FilterState
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut state = FilterState::default();
        for (key, value) in pairs {
            state.apply_param(key, value);
        }
        state
    }

    /// Serializes the non-default fields back into query pairs.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search_text.is_empty() {
            pairs.push(("q", self.search_text.clone()));
        }
        if let Some(v) = self.property_type.query_value() {
            pairs.push(("type", v.to_string()));
        }
        if let Some(v) = self.price_range.query_value() {
            pairs.push(("price", v.to_string()));
        }
        if let Some(v) = self.min_bedrooms.query_value() {
            pairs.push(("beds", v));
        }
        if let Some(v) = self.min_bathrooms.query_value() {
            pairs.push(("baths", v));
        }
        if let Some(v) = self.min_area {
            pairs.push(("min_area", v.to_string()));
        }
        if let Some(v) = self.max_area {
            pairs.push(("max_area", v.to_string()));
        }
        if self.verified_only {
            pairs.push(("verified", "1".to_string()));
        }
        pairs
    }
}

pub fn encode_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        serializer.append_pair(k.as_ref(), v.as_ref());
    }
    serializer.finish()
}
