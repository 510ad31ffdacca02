//! Ports - boundary traits between the training core and its surroundings

pub mod observer;

pub use observer::Observer;
