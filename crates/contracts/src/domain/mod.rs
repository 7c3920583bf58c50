pub mod product;

pub use product::{NewListing, Price, Product};
