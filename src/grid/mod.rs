pub mod maximal_rectangle;
pub mod surrounded_regions;
