#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{demo_stands, init_tracing, render_samples_to_png, RenderConfig};
