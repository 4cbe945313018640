pub mod canvas;
pub mod color;
pub mod layout;
pub mod mask;
