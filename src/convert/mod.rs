/// Conversion layer: decimal parsing, binary digits, grouped formatting.
pub mod bridge;
pub mod errors;
pub mod group;

pub use bridge::convert;
pub use errors::ConvertError;
pub use group::{GroupSpec, format_grouped};
