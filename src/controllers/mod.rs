//! Application layer: runs the core renderer and routes finished frames to
//! presenters.

pub mod ports;
pub mod render_controller;
