mod actions;
mod app;
mod dom;
mod net;
mod render;
mod state;

pub use app::{predict_digit, run};
