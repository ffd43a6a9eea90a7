// Reusable UI widgets

pub mod label;

pub use label::Label;
