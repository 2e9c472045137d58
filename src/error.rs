use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid value {value:?}: {source}")]
    InvalidValue {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("empty random range: min={min} is greater than max={max}")]
    EmptyRange { min: i32, max: i32 },
}

pub type Result<T> = std::result::Result<T, InputError>;

pub fn parse_value(value: &str) -> Result<i32> {
    value.trim().parse::<i32>().map_err(|source| InputError::InvalidValue {
        value: value.to_string(),
        source,
    })
}
