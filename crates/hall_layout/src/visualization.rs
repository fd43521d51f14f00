pub mod colors;
pub mod layout_renderer;
pub mod legend;
pub mod svg_utils;

pub use layout_renderer::{RenderOptions, render_svg};
pub use legend::LegendPos;
pub use svg_utils::{html_encode, save_layout_svg, save_layout_svg_to_dir};
