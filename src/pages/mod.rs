//! Page components for Shoreline.

mod landing;

pub use landing::Landing;
