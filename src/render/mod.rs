//! Portrait rendering: expression color transforms, font loading, and canvas
//! synthesis.

pub mod color;
pub mod font;
pub mod portrait;

pub use font::load_font;
pub use portrait::render_portrait;
