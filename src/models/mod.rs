pub mod skeleton;

pub use skeleton::{BodyPart, SkeletonState};
