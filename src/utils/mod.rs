// Utils compartidos

pub mod constants;
pub mod format;
pub mod leaflet_ffi;
pub mod storage;

pub use constants::*;
pub use format::*;
pub use leaflet_ffi::{
    bridge_available, mount_map, set_map_center, set_map_markers, set_map_theme, unmount_map,
};
pub use storage::{BrowserStorage, KeyValueStorage, StorageError};

#[cfg(test)]
pub use storage::MemoryStorage;
