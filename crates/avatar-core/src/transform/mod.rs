//! Square-target transforms applied between decode and encode.
//!
//! Avatars are stored as squares. A picture that is not square has to be
//! either distorted, cropped or letterboxed on the way there; `ResizePolicy`
//! selects which.

mod crop;
mod pad;
mod square;

pub use crop::crop_center_square;
pub use pad::pad_to_square;
pub use square::{resize_to_square, ResizePolicy};
