use derive_more::{Display, Error, IsVariant};

#[derive(Debug, Display, Error, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    #[display("handle does not refer to a live node of the expected kind")]
    StaleHandle,
    #[display("entry is already linked into a list")]
    AlreadyLinked,
    #[display("entry is not linked into any list")]
    NotLinked,
    #[display("a list can't be joined onto itself")]
    SelfJoin,
}
