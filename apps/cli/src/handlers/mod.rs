pub mod presets;
pub mod process;
