pub mod four_sum;
pub mod merge_sorted;
pub mod remove_element;
pub mod reverse_only_letters;
