pub mod algorithm;
pub mod params;
