pub mod kadane;
pub mod majority;
pub mod rotate_image;
