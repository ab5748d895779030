pub mod f32;
pub mod io;
pub mod mask;
pub mod rgb;

pub use self::f32::ImageF32;
pub use self::mask::Mask;
pub use self::rgb::RgbImageU8;
