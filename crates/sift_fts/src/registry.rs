//! Name-keyed tokenizer registry.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use sift_core::Strategy;
use tracing::debug;

use crate::error::CreateError;
use crate::tokenizer::Tokenizer;

/// Name the category segmenter is registered under by
/// [`Registry::with_builtins`].
pub const DEFAULT_TOKENIZER: &str = "simple";

/// Factory for tokenizer instances.
pub trait TokenizerModule: Send + Sync {
    /// Build a tokenizer from the host's argument list.
    fn create(&self, args: &[&str]) -> Result<Tokenizer, CreateError>;
}

/// Module backed by one of the built-in segmentation strategies.
///
/// Accepts at most one argument, a strategy name overriding the module's
/// default:
///
/// ```text
/// simple              -> category
/// simple codepoint    -> codepoint
/// codepoint category  -> category
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltinModule {
    default: Strategy,
}

impl BuiltinModule {
    pub fn new(default: Strategy) -> Self {
        BuiltinModule { default }
    }

    /// Strategy used when no argument overrides it.
    pub fn default_strategy(self) -> Strategy {
        self.default
    }
}

impl TokenizerModule for BuiltinModule {
    fn create(&self, args: &[&str]) -> Result<Tokenizer, CreateError> {
        let strategy = match args {
            [] => self.default,
            [name] => name.parse()?,
            [_, extra, ..] => return Err(CreateError::UnexpectedArgument((*extra).to_owned())),
        };
        Ok(Tokenizer::for_strategy(strategy))
    }
}

/// Thread-safe map from tokenizer name to module.
#[derive(Default)]
pub struct Registry {
    modules: RwLock<FxHashMap<String, Arc<dyn TokenizerModule>>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `simple` (category) and `codepoint`.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register(
            DEFAULT_TOKENIZER,
            Arc::new(BuiltinModule::new(Strategy::Category)),
        );
        registry.register(
            Strategy::Codepoint.name(),
            Arc::new(BuiltinModule::new(Strategy::Codepoint)),
        );
        registry
    }

    /// Register `module` under `name`, replacing and returning any module
    /// already registered there.
    pub fn register(
        &self,
        name: impl Into<String>,
        module: Arc<dyn TokenizerModule>,
    ) -> Option<Arc<dyn TokenizerModule>> {
        let name = name.into();
        debug!(%name, "registering tokenizer");
        self.modules.write().insert(name, module)
    }

    /// Look up the module registered under `name`.
    pub fn find(&self, name: &str) -> Option<Arc<dyn TokenizerModule>> {
        self.modules.read().get(name).cloned()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.modules.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Create a tokenizer from the module registered under `name`.
    pub fn create(&self, name: &str, args: &[&str]) -> Result<Tokenizer, CreateError> {
        let module = self
            .find(name)
            .ok_or_else(|| CreateError::UnknownTokenizer(name.to_owned()))?;
        let tokenizer = module.create(args)?;
        debug!(name, ?args, strategy = tokenizer.strategy_name(), "created tokenizer");
        Ok(tokenizer)
    }
}
