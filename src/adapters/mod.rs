// Adapters layer: concrete page implementations the renderers write into.

pub mod html;
pub mod memory;
