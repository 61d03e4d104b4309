//! `AppCore` - the primary application facade.
//!
//! Adapters receive an `AppCore` instance and use it to access all
//! functionality. It is constructed at the adapter's composition root.

use crate::ports::Repos;

use super::DogService;

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos);
///
/// let dog = core.dogs().create(NewDog::new("Dingo", 3, "Beagle")).await?;
/// ```
pub struct AppCore {
    dogs: DogService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            dogs: DogService::new(repos.dogs),
        }
    }

    /// Access the dog service.
    pub const fn dogs(&self) -> &DogService {
        &self.dogs
    }
}
