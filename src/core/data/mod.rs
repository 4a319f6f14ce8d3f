pub mod canvas_dimensions;
pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod point;
pub mod render_config;
pub mod viewport;
