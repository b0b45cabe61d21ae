//! Colorspace registry: name and alias resolution, scoped disabling.
//!
//! A [`Registry`] maps lookup keys to shared [`RgbColorspace`] instances.
//! Several keys can point at the same instance, which is how aliases work:
//! the canonical name, its simplified slug, and any explicit nicknames are
//! all registered up front, so lookup is a plain map get (aliases are
//! never computed at lookup time).
//!
//! A process-wide registry built once from the builtin dataset is
//! available through [`Registry::global`] and the module-level free
//! functions.
//!
//! # Scoped disabling
//!
//! [`Registry::disable_colorspaces`] hides colorspaces from every lookup
//! and listing function for the lifetime of the returned guard. Scopes
//! nest cumulatively and each exit restores exactly the previous disabled
//! set, even on panic. The snapshot/restore pair is not atomic across
//! threads: callers that need concurrent scoped disabling must serialize
//! scope entry/exit externally.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock, RwLock};

use crate::category::ColorspaceCategory;
use crate::colorspace::RgbColorspace;
use crate::components::{ColorspaceComponent, Whitepoint};
use crate::dataset::{self, POINTER_GAMUT_NAME};

/// Catalog of colorspaces addressable by name or alias.
#[derive(Debug, Default)]
pub struct Registry {
    colorspaces: HashMap<String, Arc<RgbColorspace>>,
    disabled: RwLock<HashSet<String>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry holding the builtin colorspace dataset.
    ///
    /// Each dataset entry is registered under its canonical name, its
    /// simplified slug, and its explicit aliases. A record that fails to
    /// build (degenerate primaries) is logged and skipped. Two synthetic
    /// entries complete the catalog: the "Passthrough" no-op colorspace
    /// (aliases "raw" and "null") and "Pointer's Gamut" (whitepoint only —
    /// a reference gamut boundary, not a true colorspace).
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        for entry in dataset::builtin_entries() {
            match RgbColorspace::from_record(&entry.record, entry.categories.to_vec()) {
                Ok(colorspace) => registry.add_colorspace(colorspace, entry.aliases),
                Err(error) => {
                    tracing::error!(
                        name = entry.record.name,
                        %error,
                        "skipping builtin colorspace"
                    );
                }
            }
        }

        let passthrough = RgbColorspace::new(
            "Passthrough",
            None,
            None,
            None,
            vec![ColorspaceCategory::Common, ColorspaceCategory::Special],
            "A 'null' colorspace that does nothing.",
            None,
            None,
        );
        registry.add_colorspace(passthrough, &["raw", "null"]);

        let whitepoint = Whitepoint::new(
            format!("{POINTER_GAMUT_NAME} Whitepoint"),
            [0.3101, 0.3162],
        );
        let pointer_gamut = RgbColorspace::new(
            POINTER_GAMUT_NAME,
            None,
            Some(whitepoint),
            None,
            vec![ColorspaceCategory::Special],
            "An approximation of the gamut of real diffuse surface colors \
             as seen by the human eye, based on Michael R. Pointer's 1980 \
             research. Not technically a colorspace.",
            None,
            None,
        );
        registry.add_colorspace(pointer_gamut, &[]);

        registry
    }

    /// The process-wide registry, built from the builtin dataset on first
    /// access and never rebuilt afterwards.
    pub fn global() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Registry::builtin)
    }

    /// Registers a colorspace under its name, its simplified name, and the
    /// given aliases.
    pub fn add_colorspace(&mut self, colorspace: RgbColorspace, aliases: &[&str]) {
        let colorspace = Arc::new(colorspace);

        let mut keys = vec![
            colorspace.name().to_string(),
            colorspace.name_simplified().to_string(),
        ];
        keys.extend(aliases.iter().map(|alias| alias.to_string()));

        for key in keys {
            tracing::debug!(key = %key, colorspace = colorspace.name(), "registering");
            if let Some(previous) = self.colorspaces.insert(key.clone(), colorspace.clone()) {
                if *previous != *colorspace {
                    tracing::warn!(
                        key = %key,
                        old = previous.name(),
                        new = colorspace.name(),
                        "colorspace key overwritten"
                    );
                }
            }
        }
    }

    /// Retrieves the colorspace registered for the given name or alias.
    ///
    /// Returns `None` for an empty name, an unregistered name, or a name
    /// hidden by an active [`Registry::disable_colorspaces`] scope.
    pub fn get_colorspace(&self, name: &str) -> Option<Arc<RgbColorspace>> {
        if name.is_empty() {
            return None;
        }
        if self.disabled.read().unwrap().contains(name) {
            return None;
        }
        self.colorspaces.get(name).cloned()
    }

    /// Like [`Registry::get_colorspace`] but the result is linearized
    /// through [`RgbColorspace::as_linear_copy`], even if the colorspace
    /// was not originally designed with linear transfer functions.
    ///
    /// This is the one force-linear mechanism: there is no name-suffix
    /// variant of it.
    pub fn get_colorspace_linear(&self, name: &str) -> Option<Arc<RgbColorspace>> {
        self.get_colorspace(name)
            .map(|colorspace| Arc::new(colorspace.as_linear_copy()))
    }

    /// All distinct visible colorspaces, deduplicated by value equality
    /// and sorted alphabetically by name.
    pub fn get_available_colorspaces(&self) -> Vec<Arc<RgbColorspace>> {
        let disabled = self.disabled.read().unwrap();
        let mut found: Vec<Arc<RgbColorspace>> = Vec::new();

        for (key, colorspace) in &self.colorspaces {
            if disabled.contains(key) {
                continue;
            }
            if !found.iter().any(|existing| **existing == **colorspace) {
                found.push(colorspace.clone());
            }
        }

        found.sort_by(|a, b| a.name().cmp(b.name()));
        found
    }

    /// All visible lookup keys, deduplicated and sorted.
    pub fn get_available_colorspaces_names(&self) -> Vec<String> {
        let disabled = self.disabled.read().unwrap();
        let mut names: Vec<String> = self
            .colorspaces
            .keys()
            .filter(|key| !disabled.contains(*key))
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Visible lookup keys grouped per distinct colorspace.
    ///
    /// Example: `[["ProPhoto RGB", "prophoto", "prophoto-rgb"], ...]`
    pub fn get_available_colorspaces_names_aliases(&self) -> Vec<Vec<String>> {
        let disabled = self.disabled.read().unwrap();
        let mut keys: Vec<&String> = self
            .colorspaces
            .keys()
            .filter(|key| !disabled.contains(*key))
            .collect();
        keys.sort();

        let mut groups: Vec<(Arc<RgbColorspace>, Vec<String>)> = Vec::new();
        for key in keys {
            let colorspace = &self.colorspaces[key];
            let group = groups.iter_mut().find(|(existing, _)| {
                Arc::ptr_eq(existing, colorspace) || **existing == **colorspace
            });
            match group {
                Some((_, names)) => names.push(key.clone()),
                None => groups.push((colorspace.clone(), vec![key.clone()])),
            }
        }

        groups.into_iter().map(|(_, names)| names).collect()
    }

    /// Hides every key resolving to any colorspace named in `names` until
    /// the returned guard is dropped.
    ///
    /// The guard snapshots the disabled set on entry and restores exactly
    /// that snapshot on exit, so scopes nest cumulatively: a nested scope
    /// disables the union, and leaving it re-enables only what the nested
    /// scope added.
    #[must_use = "disabling ends when the returned scope guard is dropped"]
    pub fn disable_colorspaces(&self, names: &[&str]) -> DisabledScope<'_> {
        let mut disabled = self.disabled.write().unwrap();
        let previous = disabled.clone();

        let targets: Vec<&Arc<RgbColorspace>> = names
            .iter()
            .filter_map(|name| self.colorspaces.get(*name))
            .collect();

        for (key, colorspace) in &self.colorspaces {
            if targets.iter().any(|target| Arc::ptr_eq(target, colorspace)) {
                disabled.insert(key.clone());
            }
        }

        tracing::debug!(?names, total = disabled.len(), "disabled colorspaces");
        drop(disabled);

        DisabledScope {
            registry: self,
            previous,
        }
    }
}

/// Guard for a [`Registry::disable_colorspaces`] scope.
///
/// Restores the previous disabled set when dropped, unconditionally —
/// including during unwinding.
#[derive(Debug)]
pub struct DisabledScope<'a> {
    registry: &'a Registry,
    previous: HashSet<String>,
}

impl Drop for DisabledScope<'_> {
    fn drop(&mut self) {
        let mut disabled = match self.registry.disabled.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *disabled = std::mem::take(&mut self.previous);
        tracing::debug!(total = disabled.len(), "restored disabled colorspaces");
    }
}

// ----------------------------------------------------------------------
// Module-level convenience API over the global registry
// ----------------------------------------------------------------------

/// Retrieves a colorspace from the global registry by name or alias.
///
/// With `force_linear` the result has linear transfer functions, even if
/// the colorspace was not originally designed with those.
pub fn get_colorspace(name: &str, force_linear: bool) -> Option<Arc<RgbColorspace>> {
    if force_linear {
        Registry::global().get_colorspace_linear(name)
    } else {
        Registry::global().get_colorspace(name)
    }
}

/// All distinct colorspaces of the global registry, sorted by name.
pub fn get_available_colorspaces() -> Vec<Arc<RgbColorspace>> {
    Registry::global().get_available_colorspaces()
}

/// All lookup keys of the global registry, sorted.
pub fn get_available_colorspaces_names() -> Vec<String> {
    Registry::global().get_available_colorspaces_names()
}

/// Lookup keys of the global registry grouped per distinct colorspace.
pub fn get_available_colorspaces_names_aliases() -> Vec<Vec<String>> {
    Registry::global().get_available_colorspaces_names_aliases()
}

/// Disables colorspaces in the global registry for the guard's lifetime.
#[must_use = "disabling ends when the returned scope guard is dropped"]
pub fn disable_colorspaces(names: &[&str]) -> DisabledScope<'static> {
    Registry::global().disable_colorspaces(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup_by_alias() {
        let registry = Registry::builtin();
        let by_name = registry.get_colorspace("sRGB Piecewise").unwrap();
        let by_slug = registry.get_colorspace("srgb-piecewise").unwrap();
        let by_alias = registry.get_colorspace("sRGB").unwrap();
        assert!(Arc::ptr_eq(&by_name, &by_slug));
        assert!(Arc::ptr_eq(&by_name, &by_alias));
    }

    #[test]
    fn test_lookup_misses() {
        let registry = Registry::builtin();
        assert!(registry.get_colorspace("").is_none());
        assert!(registry.get_colorspace("no such colorspace").is_none());
    }

    #[test]
    fn test_get_colorspace_linear() {
        let registry = Registry::builtin();
        let linear = registry.get_colorspace_linear("sRGB").unwrap();
        assert!(linear.transfer_functions().unwrap().are_linear());
        assert_eq!(linear.name(), "sRGB Piecewise Linear");
    }

    #[test]
    fn test_available_names_sorted_and_deduplicated() {
        let registry = Registry::builtin();
        let names = registry.get_available_colorspaces_names();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);
        assert!(names.iter().any(|n| n == "raw"));
    }

    #[test]
    fn test_available_colorspaces_distinct() {
        let registry = Registry::builtin();
        let colorspaces = registry.get_available_colorspaces();
        for pair in colorspaces.windows(2) {
            assert!(pair[0].name() <= pair[1].name());
            assert_ne!(*pair[0], *pair[1]);
        }
    }

    #[test]
    fn test_names_aliases_grouping() {
        let registry = Registry::builtin();
        let groups = registry.get_available_colorspaces_names_aliases();
        let passthrough = groups
            .iter()
            .find(|group| group.iter().any(|n| n == "Passthrough"))
            .unwrap();
        for key in ["passthrough", "raw", "null"] {
            assert!(passthrough.iter().any(|n| n == key), "missing {key}");
        }
    }

    #[test]
    fn test_disable_scope_hides_all_aliases() {
        let registry = Registry::builtin();
        {
            let _scope = registry.disable_colorspaces(&["sRGB Piecewise"]);
            assert!(registry.get_colorspace("sRGB Piecewise").is_none());
            assert!(registry.get_colorspace("srgb").is_none());
            assert!(registry.get_colorspace("srgb-piecewise").is_none());
            // Other entries untouched
            assert!(registry.get_colorspace("ACEScg").is_some());
        }
        assert!(registry.get_colorspace("sRGB Piecewise").is_some());
        assert!(registry.get_colorspace("srgb").is_some());
    }

    #[test]
    fn test_disable_scope_nesting_is_cumulative() {
        let registry = Registry::builtin();
        let outer = registry.disable_colorspaces(&["ACEScg"]);
        assert!(registry.get_colorspace("ap1").is_none());
        {
            let _inner = registry.disable_colorspaces(&["Rec.709"]);
            assert!(registry.get_colorspace("ap1").is_none());
            assert!(registry.get_colorspace("rec709").is_none());
        }
        // Inner scope exit restores Rec.709 but keeps ACEScg hidden
        assert!(registry.get_colorspace("rec709").is_some());
        assert!(registry.get_colorspace("ap1").is_none());
        drop(outer);
        assert!(registry.get_colorspace("ap1").is_some());
    }

    #[test]
    fn test_disable_hides_from_listings() {
        let registry = Registry::builtin();
        let total = registry.get_available_colorspaces().len();
        {
            let _scope = registry.disable_colorspaces(&["Passthrough"]);
            let visible = registry.get_available_colorspaces();
            assert_eq!(visible.len(), total - 1);
            assert!(!visible.iter().any(|cs| cs.name() == "Passthrough"));
            assert!(
                !registry
                    .get_available_colorspaces_names()
                    .iter()
                    .any(|n| n == "raw")
            );
        }
        assert_eq!(registry.get_available_colorspaces().len(), total);
    }

    #[test]
    fn test_disable_unknown_name_is_noop() {
        let registry = Registry::builtin();
        let total = registry.get_available_colorspaces_names().len();
        let _scope = registry.disable_colorspaces(&["no such colorspace"]);
        assert_eq!(registry.get_available_colorspaces_names().len(), total);
    }

    #[test]
    fn test_global_registry_is_stable() {
        let first = Registry::global() as *const Registry;
        let second = Registry::global() as *const Registry;
        assert_eq!(first, second);

        let srgb = get_colorspace("srgb", false).unwrap();
        let srgb_again = get_colorspace("sRGB", false).unwrap();
        assert!(Arc::ptr_eq(&srgb, &srgb_again));
    }

    #[test]
    fn test_pointer_gamut_entry() {
        let registry = Registry::builtin();
        let pointer = registry.get_colorspace(POINTER_GAMUT_NAME).unwrap();
        assert!(pointer.gamut().is_none());
        assert!(pointer.whitepoint().is_some());
        assert!(pointer.transfer_functions().is_none());
        assert!(!pointer.is_no_op());
    }
}
