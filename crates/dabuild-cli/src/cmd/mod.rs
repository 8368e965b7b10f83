pub mod arches;
pub mod dump;
pub mod packages;
pub mod paths;
pub mod releases;
