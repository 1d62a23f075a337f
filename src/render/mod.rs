pub mod skeleton_renderer;

pub use skeleton_renderer::{screen_position, MarkerLayout, SkeletonRenderer};
