pub mod home;
pub mod properties;
pub mod property_detail;

pub use home::home_page;
pub use properties::{properties_page, ListingVm};
pub use property_detail::{property_detail_page, property_not_found_page, property_unavailable_page};
