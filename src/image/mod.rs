pub mod io;
pub mod label;
pub mod mask;
pub mod traits;

pub use self::label::LabelImage;
pub use self::mask::RegionMask;
pub use self::traits::{ImageView, Rows};
