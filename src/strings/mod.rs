pub mod compare_versions;
pub mod kmp;
pub mod manacher;
pub mod rabin_karp;
pub mod string_to_integer;
