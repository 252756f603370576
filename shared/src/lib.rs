pub mod asset;
pub mod error;
pub mod forms;
pub mod geometry;
pub mod interaction;
pub mod label;
pub mod paint;
pub mod pricing;
pub mod registry;
pub mod selection;
pub mod status;
pub mod summary;
pub mod tooltip;

pub use error::MapError;
pub use forms::{FilingStatus, FormType};
pub use geometry::{BBox, Point, Size};
pub use registry::{CityReturns, Region};
pub use selection::SelectionSet;
pub use status::{Status, classify};
