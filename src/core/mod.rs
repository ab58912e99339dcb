pub mod backup;
pub mod migrate;
pub mod verify;
