pub mod colour_for;
pub mod kinds;
