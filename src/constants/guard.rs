//! Cross-family integrity check.
//!
//! Pools the declared entries of every family handed to it, groups them by
//! identifier and fails when any identifier is claimed more than once. Runs
//! once at startup or from a test; it never touches the lookup caches.

use crate::constants::{Catalog, DeclaredEntry, OwnerToken};
use crate::error::CatalogError;
use crate::i18n::TranslationValidator;
use serde::Serialize;
use std::any::TypeId;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Where identifiers must be unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UniquenessScope {
    /// No two entries in the whole catalog share an identifier.
    #[default]
    Global,
    /// Identifiers are unique inside each family only.
    PerFamily,
}

impl FromStr for UniquenessScope {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "per-family" | "per_family" | "family" => Ok(Self::PerFamily),
            other => Err(format!(
                "unknown uniqueness scope '{}' (expected 'global' or 'per-family')",
                other
            )),
        }
    }
}

impl fmt::Display for UniquenessScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::PerFamily => write!(f, "per-family"),
        }
    }
}

/// One entry taking part in a duplicate group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateMember {
    pub family: &'static str,
    pub name: String,
}

/// Every entry declaring the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    pub id: Uuid,
    pub members: Vec<DuplicateMember>,
}

impl fmt::Display for DuplicateGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .members
            .iter()
            .map(|m| format!("{}.{}", m.family, m.name))
            .collect();
        write!(f, "identifier {} is declared by {}", self.id, names.join(", "))
    }
}

/// Outcome of a guard scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IntegrityReport {
    pub families_checked: usize,
    pub entries_checked: usize,
    pub duplicates: Vec<DuplicateGroup>,

    /// Families whose declaration could not be evaluated
    pub load_errors: Vec<String>,

    /// Malformed translation bundles
    pub translation_errors: Vec<String>,

    /// Suspicious translation bundles
    pub translation_warnings: Vec<String>,
}

impl IntegrityReport {
    /// Findings that fail the check. Translation findings count only when `strict`.
    pub fn violations(&self, strict: bool) -> Vec<String> {
        let mut violations: Vec<String> = self
            .duplicates
            .iter()
            .map(ToString::to_string)
            .chain(self.load_errors.iter().cloned())
            .collect();

        if strict {
            violations.extend(self.translation_errors.iter().cloned());
            violations.extend(self.translation_warnings.iter().cloned());
        }

        violations
    }

    pub fn is_ok(&self, strict: bool) -> bool {
        self.violations(strict).is_empty()
    }
}

/// Catalog-wide duplicate identifier check.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogGuard {
    scope: UniquenessScope,
    strict: bool,
}

impl CatalogGuard {
    pub fn new(scope: UniquenessScope) -> Self {
        Self { scope, strict: false }
    }

    /// Treat translation findings as violations.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Collect findings without failing.
    pub fn scan(&self, families: &[OwnerToken]) -> IntegrityReport {
        let mut report = IntegrityReport {
            families_checked: families.len(),
            ..IntegrityReport::default()
        };

        if let Err(e) = check_family_names(families) {
            report.load_errors.push(e.to_string());
        }

        let mut pooled: Vec<(TypeId, DeclaredEntry)> = Vec::new();
        for token in families {
            match token.declared() {
                Ok(entries) => pooled.extend(entries.into_iter().map(|e| (token.type_id(), e))),
                Err(e) => report
                    .load_errors
                    .push(format!("family {} failed to load: {}", token.family(), e)),
            }
        }
        report.entries_checked = pooled.len();

        // (owner or None for global scope, id) -> members, deterministic order
        let mut groups: BTreeMap<(Option<TypeId>, Uuid), Vec<DuplicateMember>> = BTreeMap::new();
        for (owner, entry) in &pooled {
            let partition = match self.scope {
                UniquenessScope::Global => None,
                UniquenessScope::PerFamily => Some(*owner),
            };
            groups
                .entry((partition, entry.id))
                .or_default()
                .push(DuplicateMember {
                    family: entry.family,
                    name: entry.name.clone(),
                });

            let label = format!("{}.{}", entry.family, entry.name);
            let validation =
                TranslationValidator::validate(&label, entry.english.as_ref(), entry.nynorsk.as_ref());
            report.translation_errors.extend(validation.errors);
            report.translation_warnings.extend(validation.warnings);
        }

        report.duplicates = groups
            .into_iter()
            .filter(|(_, members)| members.len() > 1)
            .map(|((_, id), members)| DuplicateGroup { id, members })
            .collect();

        report
    }

    /// Scan and fail with [`CatalogError::Integrity`] listing every violation.
    pub fn check(&self, families: &[OwnerToken]) -> Result<IntegrityReport, CatalogError> {
        info!(
            "Checking {} constant families ({} uniqueness{})",
            families.len(),
            self.scope,
            if self.strict { ", strict translations" } else { "" }
        );

        let report = self.scan(families);

        for finding in report.translation_errors.iter().chain(&report.translation_warnings) {
            warn!("Translation: {}", finding);
        }

        let violations = report.violations(self.strict);
        if !violations.is_empty() {
            for violation in &violations {
                error!("Catalog integrity: {}", violation);
            }
            let details = violations
                .iter()
                .map(|v| format!("  - {}", v))
                .collect::<Vec<_>>()
                .join("\n");
            return Err(CatalogError::Integrity {
                violations: violations.len(),
                details,
            });
        }

        info!(
            "Catalog integrity ok: {} entries in {} families",
            report.entries_checked, report.families_checked
        );
        Ok(report)
    }

    /// Check every family registered in the [`Catalog`].
    pub fn check_registered(&self) -> Result<IntegrityReport, CatalogError> {
        self.check(&Catalog::families())
    }
}

/// Fail when two distinct owners share a family name.
///
/// The family name also names the export file.
pub fn check_family_names(families: &[OwnerToken]) -> Result<(), CatalogError> {
    let mut seen: HashMap<&'static str, &OwnerToken> = HashMap::new();
    for token in families {
        match seen.get(token.family()) {
            Some(first) if **first != *token => {
                return Err(CatalogError::FamilyConflict {
                    family: token.family(),
                    first: first.owner(),
                    second: token.owner(),
                })
            }
            Some(_) => {}
            None => {
                seen.insert(token.family(), token);
            }
        }
    }
    Ok(())
}
