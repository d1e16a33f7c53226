pub mod half_plane;
pub mod traits;
pub mod vec_dataset;

pub use half_plane::{half_plane, Sample};
pub use traits::Dataset;
pub use vec_dataset::VecDataset;
