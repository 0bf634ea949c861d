/// Failures surfaced by the few fallible constructors in this crate.
///
/// Drawing itself never fails: out-of-range input is clipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("could not allocate {bytes} bytes for a {width}x{height} canvas")]
    OutOfMemory { width: u16, height: u16, bytes: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
