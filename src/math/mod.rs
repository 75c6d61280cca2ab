pub mod color;

pub mod prelude {
    pub use super::color::Color;
}
