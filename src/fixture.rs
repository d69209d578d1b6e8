//! Factory for randomized instances of one type.

use crate::config::RandomConfig;
use fixture_generator::{
    GeneratorError, ObjectRandomizer, Randomize, RandomizerConfig, TypeOverrides,
};
use std::fmt;
use std::sync::{Mutex, PoisonError};

type Customizer<T> = Box<dyn Fn(&mut T) + Send + Sync>;

/// Produces fresh randomized `T`s.
///
/// Each instance is populated by an [`ObjectRandomizer`], then passed to the
/// factory's default customizer, then to the per-call customizer.
///
/// ```rust
/// use fixturegen::{Fixture, ObjectRandomizer, Randomize};
///
/// #[derive(Debug)]
/// struct Account {
///     owner: String,
///     balance: i32,
///     active: bool,
/// }
///
/// impl Randomize for Account {
///     fn randomize(r: &mut ObjectRandomizer) -> Self {
///         Self {
///             owner: r.next_object(),
///             balance: r.next_object(),
///             active: r.next_object(),
///         }
///     }
/// }
///
/// let accounts = Fixture::<Account>::with_defaults(|a| a.active = true).unwrap();
/// let account = accounts.create_with(|a| a.owner = "alice".into());
/// assert!(account.active);
/// assert_eq!(account.owner, "alice");
/// assert!((0..=100).contains(&account.balance));
/// ```
pub struct Fixture<T> {
    randomizer: Mutex<ObjectRandomizer>,
    defaults: Option<Customizer<T>>,
}

/// Overrides every fixture starts from: integers in `0..=100`.
pub fn default_overrides() -> TypeOverrides {
    let mut overrides = TypeOverrides::new();
    overrides.register(RandomConfig::default().integer().clone());
    overrides
}

impl<T: Randomize> Fixture<T> {
    pub fn new() -> Result<Self, GeneratorError> {
        Self::with_config(RandomizerConfig::default(), default_overrides())
    }

    /// Factory applying `customizer` to every created instance.
    pub fn with_defaults(
        customizer: impl Fn(&mut T) + Send + Sync + 'static,
    ) -> Result<Self, GeneratorError> {
        Ok(Self::new()?.customize(customizer))
    }

    pub fn with_config(
        config: RandomizerConfig,
        overrides: TypeOverrides,
    ) -> Result<Self, GeneratorError> {
        Ok(Self {
            randomizer: Mutex::new(ObjectRandomizer::new(config, overrides)?),
            defaults: None,
        })
    }

    /// Replace the default customizer.
    pub fn customize(mut self, customizer: impl Fn(&mut T) + Send + Sync + 'static) -> Self {
        self.defaults = Some(Box::new(customizer));
        self
    }

    pub fn create(&self) -> T {
        self.create_with(|_| {})
    }

    /// New instance, with `customizer` applied after the defaults.
    pub fn create_with(&self, customizer: impl FnOnce(&mut T)) -> T {
        let mut instance = {
            let mut randomizer = self
                .randomizer
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            randomizer.next_object::<T>()
        };
        if let Some(defaults) = &self.defaults {
            defaults(&mut instance);
        }
        customizer(&mut instance);
        instance
    }

    pub fn seed(&self) -> u64 {
        self.randomizer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .seed()
    }
}

impl<T> fmt::Debug for Fixture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fixture")
            .field("randomizer", &self.randomizer)
            .field("has_defaults", &self.defaults.is_some())
            .finish()
    }
}
