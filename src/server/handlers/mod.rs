mod pages;
mod static_files;

pub use pages::handle_request;
