//! Background tasks spawned by the binary entrypoint.

pub mod lock_sweeper;
