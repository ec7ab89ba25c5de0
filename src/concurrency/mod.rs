//! Pedagogical threading demos, not infrastructure. Each demo terminates
//! and yields a deterministic aggregate result so it can be asserted on.

pub mod bounded_buffer;
pub mod dining_philosophers;
pub mod print_in_order;
pub mod worker_pool;
