pub mod loader;
pub mod record;

pub use loader::{dataset_from_file, dataset_from_json_str, dataset_from_reader};
#[cfg(feature = "remote-dataset")]
pub use loader::dataset_from_url;
pub use record::NationRecord;
