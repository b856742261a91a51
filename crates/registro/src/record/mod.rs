//! Form records and the values they carry.

mod loader;
mod record;
mod value;

pub use loader::{LoaderConfig, RecordLoader};
pub use record::Record;
pub use value::{FieldValue, OptionPair, Scalar};

pub(crate) use value::number_to_json;
