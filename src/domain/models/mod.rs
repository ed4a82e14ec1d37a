// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod page;

pub use page::PageDescriptor;
