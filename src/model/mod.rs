//! Label data owned by the label store.

mod category;
mod label;

pub use category::{LabelClass, LabelClassId};
pub use label::{ImageId, ImageLabels, LabelId, LabelRect, LabelStatus, LabelType};
