pub mod map;

#[doc(inline)]
pub use map::BucketMap;
