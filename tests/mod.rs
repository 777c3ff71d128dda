mod common;
mod web_server;
