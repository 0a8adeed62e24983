//! Thread-safe handle over one adoption registry.
//!
//! Every call holds the lock for its whole duration, so a dual-gated
//! transition checks both guards and mutates both sides without another
//! caller seeing, or changing, anything in between.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::error;

use kennel_core::{
    application::{AdoptionRegistry, ApplicationError},
    domain::{Dni, DogId},
    error::KennelResult,
};

/// Cloneable, thread-safe registry handle.
#[derive(Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<AdoptionRegistry>>,
}

impl SharedRegistry {
    /// Wrap an existing registry.
    pub fn new(registry: AdoptionRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    fn read_guard(&self) -> KennelResult<RwLockReadGuard<'_, AdoptionRegistry>> {
        self.inner.read().map_err(|_| {
            error!("Registry lock poisoned");
            ApplicationError::RegistryLock.into()
        })
    }

    fn write_guard(&self) -> KennelResult<RwLockWriteGuard<'_, AdoptionRegistry>> {
        self.inner.write().map_err(|_| {
            error!("Registry lock poisoned");
            ApplicationError::RegistryLock.into()
        })
    }

    /// Run a query under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&AdoptionRegistry) -> R) -> KennelResult<R> {
        let guard = self.read_guard()?;
        Ok(f(&guard))
    }

    /// Run a fallible change under the write lock.
    pub fn write<R>(
        &self,
        f: impl FnOnce(&mut AdoptionRegistry) -> KennelResult<R>,
    ) -> KennelResult<R> {
        let mut guard = self.write_guard()?;
        f(&mut guard)
    }

    pub fn reserve(&self, dog: DogId, adopter: &Dni) -> KennelResult<()> {
        self.write(|r| r.reserve(dog, adopter))
    }

    pub fn adopt(&self, dog: DogId, adopter: &Dni) -> KennelResult<()> {
        self.write(|r| r.adopt(dog, adopter))
    }

    pub fn return_dog(&self, dog: DogId, adopter: &Dni) -> KennelResult<()> {
        self.write(|r| r.return_dog(dog, adopter))
    }

    /// A point-in-time copy of the whole registry.
    pub fn snapshot(&self) -> KennelResult<AdoptionRegistry> {
        self.read(AdoptionRegistry::clone)
    }
}

impl From<AdoptionRegistry> for SharedRegistry {
    fn from(registry: AdoptionRegistry) -> Self {
        Self::new(registry)
    }
}
