// Landing page sections
// Developed by The DharaLink Team (c)2025

/// Version string used across the landing page (single source of truth)
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

pub const BRAND: &str = "DharaLink";

/// Section ids the header and hero link to.
pub const FEATURES_ID: &str = "features";
pub const ABOUT_ID: &str = "about";
pub const CONTACT_ID: &str = "contact";
pub const WAITLIST_ID: &str = "waitlist-form";

mod about;
mod features;
mod footer;
mod header;
mod hero;
mod waitlist;

pub use about::About;
pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use waitlist::Waitlist;
