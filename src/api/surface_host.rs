use indexmap::IndexMap;

use crate::core::Viewport;

/// Host collaborator that owns the mount elements charts draw into.
///
/// The host keeps element identity stable across redraws; the engine only
/// asks for the current size of the element behind a mount id.
pub trait SurfaceHost {
    /// Current size of the mount element, or `None` when no element exists.
    fn mount_size(&self, mount_id: &str) -> Option<Viewport>;
}

/// Headless host backed by a fixed table of mount ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticSurfaceHost {
    mounts: IndexMap<String, Viewport>,
}

impl StaticSurfaceHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mount(mut self, mount_id: impl Into<String>, viewport: Viewport) -> Self {
        self.mounts.insert(mount_id.into(), viewport);
        self
    }

    /// Registers or resizes a mount element; returns its previous size.
    pub fn set_mount(&mut self, mount_id: impl Into<String>, viewport: Viewport) -> Option<Viewport> {
        self.mounts.insert(mount_id.into(), viewport)
    }

    pub fn remove_mount(&mut self, mount_id: &str) -> Option<Viewport> {
        self.mounts.shift_remove(mount_id)
    }

    #[must_use]
    pub fn mount_ids(&self) -> impl Iterator<Item = &str> {
        self.mounts.keys().map(String::as_str)
    }
}

impl SurfaceHost for StaticSurfaceHost {
    fn mount_size(&self, mount_id: &str) -> Option<Viewport> {
        self.mounts.get(mount_id).copied()
    }
}
