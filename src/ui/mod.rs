/// UI module exports
mod bridge;
mod components;

pub mod options;
pub mod popup;
