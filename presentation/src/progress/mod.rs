//! Progress indicators for headless mode

pub mod spinner;
