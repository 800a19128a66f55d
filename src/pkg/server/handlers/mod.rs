pub mod home;
pub mod predict;
pub mod probes;
