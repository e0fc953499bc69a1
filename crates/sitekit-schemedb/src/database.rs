//! The merged scheme database.

use crate::markdown::{parse_scheme_markdown, SCHEME_REFERENCE_MD};
use crate::model::{builtin_presets, PlanningScheme, SchemeDocument};
use sitekit_core::SetbackDistances;
use std::collections::BTreeMap;

/// Planning scheme database: built-in numeric presets merged with the
/// council schemes from the embedded document reference.
#[derive(Debug, Clone)]
pub struct SchemeDatabase {
    schemes: Vec<PlanningScheme>,
    documents: BTreeMap<String, Vec<SchemeDocument>>,
}

impl SchemeDatabase {
    /// Build the database from the built-in presets and the embedded
    /// document reference.
    pub fn builtin() -> Self {
        Self::with_reference(SCHEME_REFERENCE_MD)
    }

    /// Build the database against a caller-supplied reference document.
    pub fn with_reference(reference_md: &str) -> Self {
        let documents = parse_scheme_markdown(reference_md);
        let mut schemes = builtin_presets();
        for name in documents.keys() {
            schemes.push(PlanningScheme::DocumentOnly { name: name.clone() });
        }
        tracing::debug!(
            "Scheme database loaded: {} presets, {} council schemes",
            builtin_presets().len(),
            documents.len()
        );
        Self { schemes, documents }
    }

    /// Every scheme name, presets first, then councils alphabetically.
    pub fn scheme_names(&self) -> Vec<&str> {
        self.schemes.iter().map(|scheme| scheme.name()).collect()
    }

    /// Look up a scheme by name.
    pub fn resolve(&self, name: &str) -> Option<&PlanningScheme> {
        self.schemes.iter().find(|scheme| scheme.name() == name)
    }

    /// Setback table for a scheme name. Unknown names and document-only
    /// schemes resolve to the all-zero table.
    pub fn setbacks_for(&self, name: &str) -> SetbackDistances {
        match self.resolve(name) {
            Some(scheme) => scheme.setbacks(),
            None => {
                tracing::warn!("Unknown planning scheme '{}', using zero setbacks", name);
                SetbackDistances::zeroed()
            }
        }
    }

    /// Reference documents for a scheme name. Numeric presets and unknown
    /// names have none.
    pub fn documents_for(&self, name: &str) -> &[SchemeDocument] {
        self.documents.get(name).map_or(&[], Vec::as_slice)
    }
}

impl Default for SchemeDatabase {
    fn default() -> Self {
        Self::builtin()
    }
}
