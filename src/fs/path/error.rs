use std::collections::TryReserveError;

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, From, Error, IsVariant, Clone, PartialEq, Eq)]
pub enum PathError {
    #[display("out of memory while canonicalizing path")]
    OutOfMemory(TryReserveError),
}
