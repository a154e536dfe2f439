//! Seed export: projects families into entity rows and translation rows.
//!
//! One JSON file per family plus `manifest.json`. Translation rows already
//! present in a family file are kept; declared rows are upserted over them.

use crate::constants::{check_family_names, Entity, FamilyIndex, OwnerToken};
use crate::error::CatalogError;
use crate::i18n::{merge_translations, Language, LanguageRegistry, MergeStats, TranslationEntry};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const MANIFEST_FILE: &str = "manifest.json";

/// A base entity row: identifier plus the serialized payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRow {
    pub id: Uuid,
    pub payload: serde_json::Value,
}

/// Both projections of one family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyExport {
    pub family: &'static str,
    pub kind: &'static str,
    pub entities: Vec<EntityRow>,
    pub translations: Vec<TranslationEntry>,
}

impl FamilyExport {
    pub fn from_index<E: Entity>(index: &FamilyIndex<E>) -> Result<Self, CatalogError> {
        let entities = index
            .all_entities()
            .iter()
            .map(|entry| {
                serde_json::to_value(entry.entity())
                    .map(|payload| EntityRow {
                        id: entry.id(),
                        payload,
                    })
                    .map_err(|e| CatalogError::Serialize {
                        family: index.family(),
                        id: entry.id(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            family: index.family(),
            kind: E::KIND,
            entities,
            translations: index.all_translations(),
        })
    }

    /// File name inside the export directory (e.g., "provider_type.json").
    pub fn file_name(&self) -> String {
        format!("{}.json", snake_case(self.family))
    }
}

/// Only the part of an existing family file that survives a re-export.
#[derive(Debug, Default, Deserialize)]
struct StoredFamily {
    #[serde(default)]
    translations: Vec<TranslationEntry>,
}

/// One family's line in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub family: String,
    pub kind: String,
    pub file: String,
    pub entities: usize,
    pub translations: usize,
}

/// One registered language and the rows written in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestLanguage {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub base: bool,
    pub translations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub generated_at: DateTime<Utc>,
    pub languages: Vec<ManifestLanguage>,
    pub families: Vec<ManifestEntry>,
    pub translations_inserted: usize,
    pub translations_updated: usize,
}

/// Export of a set of families, ready to be written.
#[derive(Debug, Clone)]
pub struct SeedExport {
    pub generated_at: DateTime<Utc>,
    pub families: Vec<FamilyExport>,
}

impl SeedExport {
    /// Project every family. Fails on the first family that cannot load and
    /// when two owners would write the same family file.
    pub fn collect(tokens: &[OwnerToken]) -> Result<Self, CatalogError> {
        check_family_names(tokens)?;

        let families = tokens
            .iter()
            .map(OwnerToken::export)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            generated_at: Utc::now(),
            families,
        })
    }

    pub fn entity_count(&self) -> usize {
        self.families.iter().map(|f| f.entities.len()).sum()
    }

    pub fn translation_count(&self) -> usize {
        self.families.iter().map(|f| f.translations.len()).sum()
    }

    /// Write one file per family and the manifest into `dir`.
    pub fn write_to_dir(&self, dir: &Path, pretty: bool) -> anyhow::Result<Manifest> {
        fs::create_dir_all(dir)
            .context(format!("Failed to create export directory {}", dir.display()))?;

        let mut manifest = Manifest {
            generated_at: self.generated_at,
            languages: LanguageRegistry::get()
                .list_all()
                .into_iter()
                .map(|lang| ManifestLanguage {
                    code: lang.code.to_string(),
                    name: lang.name.to_string(),
                    native_name: lang.native_name.to_string(),
                    base: lang.is_base,
                    translations: 0,
                })
                .collect(),
            families: Vec::with_capacity(self.families.len()),
            translations_inserted: 0,
            translations_updated: 0,
        };

        for family in &self.families {
            let path = dir.join(family.file_name());

            let mut translations = read_existing_translations(&path)?;
            let stats = merge_translations(&mut translations, family.translations.iter().cloned());
            log_merge(family.family, &stats);

            let unregistered = translations
                .iter()
                .filter(|row| Language::from_code(&row.language_code).is_err())
                .count();
            if unregistered > 0 {
                warn!(
                    "{}: keeping {} stored translation(s) in unregistered languages",
                    family.family, unregistered
                );
            }
            for language in &mut manifest.languages {
                language.translations += translations
                    .iter()
                    .filter(|row| row.language_code == language.code)
                    .count();
            }

            let output = FamilyExport {
                translations,
                ..family.clone()
            };
            write_json(&path, &output, pretty)?;

            manifest.translations_inserted += stats.inserted;
            manifest.translations_updated += stats.updated;
            manifest.families.push(ManifestEntry {
                family: family.family.to_string(),
                kind: family.kind.to_string(),
                file: family.file_name(),
                entities: output.entities.len(),
                translations: output.translations.len(),
            });
        }

        write_json(&dir.join(MANIFEST_FILE), &manifest, pretty)?;

        info!(
            "Exported {} families ({} entities, {} translations) to {}",
            manifest.families.len(),
            self.entity_count(),
            self.translation_count(),
            dir.display()
        );

        Ok(manifest)
    }
}

fn read_existing_translations(path: &Path) -> anyhow::Result<Vec<TranslationEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .context(format!("Failed to read existing export {}", path.display()))?;
    let stored: StoredFamily = serde_json::from_str(&content)
        .context(format!("Failed to parse existing export {}", path.display()))?;

    Ok(stored.translations)
}

fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context(format!("Failed to serialize {}", path.display()))?;

    fs::write(path, json).context(format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn log_merge(family: &str, stats: &MergeStats) {
    debug!(
        "{}: {} translations inserted, {} updated, {} unchanged",
        family, stats.inserted, stats.updated, stats.unchanged
    );
}

/// "ProviderType" -> "provider_type"
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
