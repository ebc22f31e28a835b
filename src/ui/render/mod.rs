mod all;
mod author;
mod footer;
mod header;
mod log;
mod questions;
mod take;

use super::Frame;

pub use all::all as render;
