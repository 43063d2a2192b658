//! Command handlers, one module per console command.

pub mod container_debug;
pub mod create_nodes;
