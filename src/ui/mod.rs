pub mod html_renderer;
pub mod web_server;
