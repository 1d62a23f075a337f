// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct OscConfig {
    pub rx_port: u16,
    /// First segment of the tracker's OSC addresses, e.g. "notch" for
    /// "/notch/Head/all".
    pub namespace: String,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub marker_radius: f32,
    pub line_weight: f32,
}
