//! Provider and model resolution for web search.
//!
//! The host hands over its provider directory as a list of loosely typed
//! [`ProviderEntry`] records. [`scan`] folds them into a [`ResolutionMap`]
//! (first credential, `always` model and `auto` model per [`Family`]) plus a
//! [`ModelDirectory`] used to classify the model a session is chatting with.
//! [`resolve`] then applies the precedence rules: locked model, active model
//! passthrough, fallback model. [`SessionModels`] tracks the active model per
//! session from host notifications.

pub use {
    entry::{Credentials, ModelEntry, ProviderEntry, TAG_OPTION, Tag, normalize_base_url},
    family::{Family, Shape},
    policy::{Reason, ResolvedProvider, Unresolved, diagnose, resolve},
    scan::{ModelDirectory, ProviderResolution, ResolutionMap, Scan, scan},
    session::{ActiveModel, SessionModels},
};

mod entry;
mod family;
mod policy;
mod scan;
mod session;
