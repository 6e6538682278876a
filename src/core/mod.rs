pub mod directory;
pub mod fetcher;
pub mod matcher;
pub mod pager;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{BreedDetail, Directory, FieldValue, Species};
pub use crate::domain::ports::{BreedApi, ConfigProvider};
pub use crate::utils::error::Result;
