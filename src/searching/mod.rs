pub mod answer_search;
pub mod binary_search;
pub mod matrix;
pub mod peak;
pub mod rotated;
pub mod single_element;
