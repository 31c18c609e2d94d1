mod renderer;

pub use renderer::render_page;
