//! Survey pipeline: configuration, the sample generator, progress events, and the
//! source/sink seams to the surrounding data provider.
pub mod config;
pub mod events;
pub mod generator;
pub mod io;
