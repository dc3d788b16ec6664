// Domain layer: the duration value and its conversion constants. No parsing or I/O here.

pub mod model;
