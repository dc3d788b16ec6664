// Adapters layer: glue between the duration value and external formats.

pub mod serialization;
