use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Public listing page sizes.
pub const PROJECTS_PER_PAGE: u32 = 9;
pub const POSTS_PER_PAGE: u32 = 6;

/// Default and upper bound for the featured-projects strip.
pub const FEATURED_DEFAULT_LIMIT: u32 = 3;
pub const FEATURED_MAX_LIMIT: u32 = 12;

/// Cap for admin listings that accept a per_page override.
pub const MAX_PER_PAGE: u32 = 100;
