pub mod prelude;

pub mod collections;
