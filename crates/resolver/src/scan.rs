//! Provider directory scanner.
//!
//! Folds the ordered provider list into per-family resolutions. Every
//! decision is first-seen-wins, first by provider order and then by model
//! order, so the result is reproducible for a given listing.

use crate::{
    entry::{Credentials, ProviderEntry, Tag},
    family::{Family, Shape},
    policy::{self, ResolvedProvider, Unresolved},
    session::ActiveModel,
};
use compact_str::CompactString;
use std::collections::BTreeMap;

/// Usable search configuration for one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResolution {
    /// Credentials of the first provider of this family that had any.
    pub credentials: Credentials,
    /// First model tagged `always`.
    pub locked_model: Option<CompactString>,
    /// First model tagged `auto`.
    pub fallback_model: Option<CompactString>,
}

/// Family to resolution. An absent family has no usable provider.
///
/// `BTreeMap` iteration follows [`Family::ORDER`].
pub type ResolutionMap = BTreeMap<Family, ProviderResolution>;

/// Every model seen during a scan with its API shape, credentialed or not.
#[derive(Debug, Clone, Default)]
pub struct ModelDirectory {
    models: Vec<DirectoryEntry>,
}

#[derive(Debug, Clone)]
struct DirectoryEntry {
    provider: CompactString,
    model: CompactString,
    shape: Shape,
}

impl ModelDirectory {
    /// Classify the active model.
    ///
    /// Matches on provider and model id. An active model without a
    /// provider id matches the first entry with the same model id; a model
    /// reported under one provider never borrows another provider's family.
    pub fn family_of(&self, active: &ActiveModel) -> Option<Family> {
        self.models
            .iter()
            .find(|e| {
                e.model == active.model_id
                    && (active.provider_id.is_empty() || e.provider == active.provider_id)
            })
            .and_then(|e| e.shape.family())
    }

    /// Iterate `(provider, model, shape)` in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, Shape)> {
        self.models
            .iter()
            .map(|e| (e.provider.as_str(), e.model.as_str(), e.shape))
    }

    /// Number of models recorded.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether no models were recorded.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Result of one directory scan.
#[derive(Debug, Clone, Default)]
pub struct Scan {
    /// Usable families.
    pub resolutions: ResolutionMap,
    /// All models seen, for active model classification.
    pub directory: ModelDirectory,
}

impl Scan {
    /// Classify `active` against the directory and run the policy.
    pub fn resolve(&self, active: Option<&ActiveModel>) -> Option<ResolvedProvider> {
        let family = active.and_then(|a| self.directory.family_of(a));
        policy::resolve(&self.resolutions, active, family)
    }

    /// Explain why [`Scan::resolve`] returned `None`.
    pub fn diagnose(&self, active: Option<&ActiveModel>) -> Unresolved {
        let family = active.and_then(|a| self.directory.family_of(a));
        policy::diagnose(&self.resolutions, family)
    }
}

#[derive(Default)]
struct Accumulator {
    credentials: Option<Credentials>,
    locked: Option<CompactString>,
    fallback: Option<CompactString>,
}

/// Scan the provider listing.
///
/// Only families with extractable credentials appear in the resolution
/// map; tags on a credential-less family are dropped. Entries without an id
/// are skipped.
pub fn scan(entries: &[ProviderEntry]) -> Scan {
    let mut families: BTreeMap<Family, Accumulator> = BTreeMap::new();
    let mut directory = ModelDirectory::default();

    for provider in entries {
        if provider.id.is_empty() {
            tracing::debug!("skipping provider entry without id");
            continue;
        }

        for model in &provider.models {
            if model.id.is_empty() {
                tracing::debug!(provider = %provider.id, "skipping model entry without id");
                continue;
            }

            let shape = Shape::parse(model.api.as_deref().or(provider.api.as_deref()));
            directory.models.push(DirectoryEntry {
                provider: provider.id.clone(),
                model: model.id.clone(),
                shape,
            });

            let Some(family) = shape.family() else {
                continue;
            };

            let acc = families.entry(family).or_default();
            if acc.credentials.is_none() {
                acc.credentials = provider.credentials();
                if acc.credentials.is_some() {
                    tracing::debug!(%family, provider = %provider.id, "credentials found");
                }
            }

            match model.tag() {
                Tag::Always if acc.locked.is_none() => {
                    tracing::debug!(%family, model = %model.id, "locked model");
                    acc.locked = Some(model.id.clone());
                }
                Tag::Auto if acc.fallback.is_none() => {
                    tracing::debug!(%family, model = %model.id, "fallback model");
                    acc.fallback = Some(model.id.clone());
                }
                _ => {}
            }
        }
    }

    let resolutions = families
        .into_iter()
        .filter_map(|(family, acc)| {
            let Some(credentials) = acc.credentials else {
                tracing::debug!(%family, "no credentials, family dropped");
                return None;
            };
            Some((
                family,
                ProviderResolution {
                    credentials,
                    locked_model: acc.locked,
                    fallback_model: acc.fallback,
                },
            ))
        })
        .collect();

    Scan {
        resolutions,
        directory,
    }
}
