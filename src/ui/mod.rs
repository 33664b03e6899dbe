/// Widget composition for the three page sections
pub mod gallery;
pub mod slideshow;
pub mod starfield;
