use super::*;

mod analyze;
mod batch;
mod export;
mod model;
