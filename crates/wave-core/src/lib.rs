//! Platform-free model of the animated wave-field background.
//!
//! Nothing in here touches the DOM. The web front end supplies a
//! [`Surface`] and drives [`WaveField::step`] once per animation frame.

pub mod constants;
pub mod density;
pub mod field;
pub mod fps;
pub mod grid;
pub mod params;
pub mod pointer;
pub mod render;
pub mod surface;
pub mod viewport;
pub mod wave;

pub use density::*;
pub use field::*;
pub use fps::*;
pub use grid::*;
pub use params::*;
pub use pointer::*;
pub use render::*;
pub use surface::*;
pub use viewport::*;
pub use wave::*;
