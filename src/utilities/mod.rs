pub mod decode;

pub use decode::{decode_value_list, ParseError};
