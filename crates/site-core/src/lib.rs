pub mod clock;
pub mod constants;
pub mod glow;
pub mod parallax;
pub mod starfield;
pub mod ui;

pub use clock::*;
pub use constants::*;
pub use glow::*;
pub use parallax::*;
pub use starfield::*;
pub use ui::*;
