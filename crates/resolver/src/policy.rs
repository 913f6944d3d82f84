//! Resolution policy.
//!
//! Precedence, first match wins:
//!
//! 1. a locked (`always`) model, scanning families in [`Family::ORDER`];
//! 2. the active model itself, if its family has credentials;
//! 3. a fallback (`auto`) model, scanning families in the same order.
//!
//! `always` pins a deployment to one model even when the user picked a
//! supported one. `auto` is only consulted once passthrough has failed.

use crate::{
    entry::Credentials,
    family::Family,
    scan::{ProviderResolution, ResolutionMap},
    session::ActiveModel,
};
use compact_str::CompactString;

/// Which rule produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// A model tagged `always`.
    Locked,
    /// The session's active model.
    Passthrough,
    /// A model tagged `auto`.
    Fallback,
}

/// The provider, model and credentials chosen for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    /// Upstream family.
    pub family: Family,
    /// Model id sent upstream.
    pub model_id: CompactString,
    /// Credentials for the family.
    pub credentials: Credentials,
    /// Rule that selected this resolution.
    pub reason: Reason,
}

/// Why no provider could be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unresolved {
    /// No supported family has credentials.
    NoCredentials,
    /// The active model belongs to a supported family without credentials.
    MissingCredentials(Family),
    /// The active model is not from a supported family and no `auto` model
    /// is configured.
    UnsupportedModel,
}

/// Pick the provider for a request.
///
/// `active_family` is the active model's family as classified by the model
/// directory. Passthrough requires that family to be present in `map`, not
/// merely recognized.
pub fn resolve(
    map: &ResolutionMap,
    active: Option<&ActiveModel>,
    active_family: Option<Family>,
) -> Option<ResolvedProvider> {
    if let Some((family, res, model)) = first_tagged(map, |r| r.locked_model.as_ref()) {
        return Some(resolved(family, res, model.clone(), Reason::Locked));
    }

    if let Some(active) = active
        && let Some(family) = active_family
        && let Some(res) = map.get(&family)
    {
        return Some(resolved(
            family,
            res,
            active.model_id.clone(),
            Reason::Passthrough,
        ));
    }

    if let Some((family, res, model)) = first_tagged(map, |r| r.fallback_model.as_ref()) {
        return Some(resolved(family, res, model.clone(), Reason::Fallback));
    }

    None
}

/// Classify a failed resolution for the error message.
pub fn diagnose(map: &ResolutionMap, active_family: Option<Family>) -> Unresolved {
    if map.is_empty() {
        return Unresolved::NoCredentials;
    }
    match active_family {
        Some(family) if !map.contains_key(&family) => Unresolved::MissingCredentials(family),
        _ => Unresolved::UnsupportedModel,
    }
}

fn first_tagged<'a>(
    map: &'a ResolutionMap,
    pick: impl Fn(&'a ProviderResolution) -> Option<&'a CompactString>,
) -> Option<(Family, &'a ProviderResolution, &'a CompactString)> {
    Family::ORDER.into_iter().find_map(|family| {
        let res = map.get(&family)?;
        pick(res).map(|model| (family, res, model))
    })
}

fn resolved(
    family: Family,
    res: &ProviderResolution,
    model_id: CompactString,
    reason: Reason,
) -> ResolvedProvider {
    tracing::info!(%family, model = %model_id, ?reason, "resolved web search provider");
    ResolvedProvider {
        family,
        model_id,
        credentials: res.credentials.clone(),
        reason,
    }
}
