mod component;
mod filter;

pub use component::WorkGallery;
