//! Template schema definitions.
//!
//! A template schema is a YAML document naming one or more record templates.
//! Each field of a template carries a [`GeneratorConfig`] that selects one of
//! the `random-core` generators.
//!
//! ```yaml
//! version: 1
//! seed: 42
//! templates:
//!   - name: users
//!     fields:
//!       - name: id
//!         generator:
//!           type: sequential
//!           start: 1
//!       - name: nickname
//!         generator:
//!           type: string
//!           pool: lower
//!           min: 4
//!           max: 8
//! ```

use random_core::{
    Pool, RandomError, StringArgs, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, INTEGER_MAX,
    INTEGER_MIN, MAX_FRACTION_DIGITS, NATURAL_MAX,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A field generator is misconfigured
    #[error("Invalid generator for field '{field}' in template '{template}': {reason}")]
    InvalidGenerator {
        template: String,
        field: String,
        reason: String,
    },

    /// Template not found in schema
    #[error("Template not found: {0}")]
    TemplateNotFound(String),
}

// ============================================================================
// Generator Configuration
// ============================================================================

fn default_natural_max() -> i64 {
    NATURAL_MAX
}

fn default_integer_min() -> i64 {
    INTEGER_MIN
}

fn default_integer_max() -> i64 {
    INTEGER_MAX
}

fn default_dmax() -> i64 {
    MAX_FRACTION_DIGITS
}

fn default_step() -> i64 {
    1
}

/// Generator configuration for a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Natural number in `[min, max]`
    Natural {
        #[serde(default)]
        min: i64,
        #[serde(default = "default_natural_max")]
        max: i64,
    },

    /// Signed integer in `[min, max]`
    Integer {
        #[serde(default = "default_integer_min")]
        min: i64,
        #[serde(default = "default_integer_max")]
        max: i64,
    },

    /// Float with `natural(dmin, dmax)` fractional digits
    Float {
        min: i64,
        max: i64,
        #[serde(default)]
        dmin: i64,
        #[serde(default = "default_dmax")]
        dmax: i64,
    },

    /// Single character; the default pool when `pool` is absent
    Character {
        #[serde(default)]
        pool: Option<String>,
    },

    /// String with either an exact `length` or `min`/`max` bounds
    String {
        #[serde(default)]
        pool: Option<String>,
        #[serde(default)]
        length: Option<i64>,
        #[serde(default)]
        min: Option<i64>,
        #[serde(default)]
        max: Option<i64>,
    },

    /// Integer sequence
    Range {
        #[serde(default)]
        start: i64,
        stop: i64,
        #[serde(default = "default_step")]
        step: i64,
    },

    /// Dotted-quad address
    Ip,

    /// Record index plus `start`
    Sequential {
        #[serde(default)]
        start: i64,
    },

    /// Uniform pick from a list of values
    OneOf { values: Vec<serde_json::Value> },

    /// Fixed value
    Static { value: serde_json::Value },
}

impl GeneratorConfig {
    /// Resolve the pool of a `character` generator.
    pub fn character_pool(pool: Option<&str>) -> Result<Pool, RandomError> {
        pool.map_or_else(|| Ok(Pool::default()), Pool::resolve)
    }

    /// Resolve the call pattern of a `string` generator.
    ///
    /// Returns `Ok(None)` when the generator is not a `string` generator.
    pub fn string_args(&self) -> Result<Option<StringArgs>, String> {
        let GeneratorConfig::String {
            pool,
            length,
            min,
            max,
        } = self
        else {
            return Ok(None);
        };

        let pool = match pool {
            Some(id) => Some(Pool::resolve(id).map_err(|e| e.to_string())?),
            None => None,
        };

        let args = match (pool, *length, *min, *max) {
            (_, Some(_), Some(_), _) | (_, Some(_), _, Some(_)) => {
                return Err("'length' cannot be combined with 'min'/'max'".to_string())
            }
            (_, None, Some(_), None) | (_, None, None, Some(_)) => {
                return Err("'min' and 'max' must be given together".to_string())
            }
            (None, None, None, None) => StringArgs::Default,
            (None, Some(length), None, None) => StringArgs::Length(length),
            (None, None, Some(min), Some(max)) => StringArgs::Between { min, max },
            (Some(pool), Some(length), None, None) => StringArgs::PoolLength(pool, length),
            (Some(pool), None, Some(min), Some(max)) => StringArgs::PoolBetween { pool, min, max },
            (Some(pool), None, None, None) => StringArgs::PoolBetween {
                pool,
                min: DEFAULT_MIN_LENGTH,
                max: DEFAULT_MAX_LENGTH,
            },
        };
        Ok(Some(args))
    }

    /// Resolve the pool or string call pattern this generator needs.
    pub fn resolve(&self) -> Result<ResolvedInputs, String> {
        match self {
            GeneratorConfig::Character { pool } => Self::character_pool(pool.as_deref())
                .map(ResolvedInputs::Pool)
                .map_err(|e| e.to_string()),
            GeneratorConfig::String { .. } => Ok(ResolvedInputs::String(
                self.string_args()?.unwrap_or_default(),
            )),
            GeneratorConfig::OneOf { values } if values.is_empty() => {
                Err("'values' must not be empty".to_string())
            }
            _ => Ok(ResolvedInputs::None),
        }
    }
}

/// Generator inputs resolved once when the schema is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResolvedInputs {
    /// The generator reads its configuration directly
    #[default]
    None,
    /// Pool of a `character` generator
    Pool(Pool),
    /// Call pattern of a `string` generator
    String(StringArgs),
}

// ============================================================================
// Template Types
// ============================================================================

/// A field with its generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name in the generated record
    pub name: String,

    /// Generator configuration for this field
    pub generator: GeneratorConfig,
}

/// A named record template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDefinition {
    /// Template name
    pub name: String,

    /// Field definitions with generators
    pub fields: Vec<FieldDefinition>,
}

impl TemplateDefinition {
    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get all field names.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

fn default_version() -> u32 {
    1
}

/// Full template schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Seed for repeatable output; fresh randomness when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Template definitions
    pub templates: Vec<TemplateDefinition>,

    /// Cached template lookup (not serialized)
    #[serde(skip)]
    template_map: HashMap<String, usize>,

    /// Resolved inputs per template, parallel to each template's fields
    #[serde(skip)]
    resolved: Vec<Vec<ResolvedInputs>>,
}

impl TemplateSchema {
    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading template schema");
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from YAML string and validate every generator.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: TemplateSchema = serde_yaml::from_str(yaml)?;
        schema.resolved = schema.resolve_fields()?;
        schema.build_template_map();
        debug!(
            templates = schema.templates.len(),
            seed = ?schema.seed,
            "parsed template schema"
        );
        Ok(schema)
    }

    fn resolve_fields(&self) -> Result<Vec<Vec<ResolvedInputs>>, SchemaError> {
        self.templates
            .iter()
            .map(|template| {
                template
                    .fields
                    .iter()
                    .map(|field| {
                        field
                            .generator
                            .resolve()
                            .map_err(|reason| SchemaError::InvalidGenerator {
                                template: template.name.clone(),
                                field: field.name.clone(),
                                reason,
                            })
                    })
                    .collect()
            })
            .collect()
    }

    fn build_template_map(&mut self) {
        self.template_map = self
            .templates
            .iter()
            .enumerate()
            .map(|(idx, template)| (template.name.clone(), idx))
            .collect();
    }

    /// Get a template by name.
    pub fn get_template(&self, name: &str) -> Option<&TemplateDefinition> {
        self.template_map
            .get(name)
            .and_then(|&idx| self.templates.get(idx))
    }

    /// Get a template and its resolved field inputs, failing when the
    /// template does not exist.
    pub fn require_template(
        &self,
        name: &str,
    ) -> Result<(&TemplateDefinition, &[ResolvedInputs]), SchemaError> {
        let idx = *self
            .template_map
            .get(name)
            .ok_or_else(|| SchemaError::TemplateNotFound(name.to_string()))?;
        let template = self
            .templates
            .get(idx)
            .ok_or_else(|| SchemaError::TemplateNotFound(name.to_string()))?;
        let resolved = self.resolved.get(idx).map_or(&[][..], Vec::as_slice);
        Ok((template, resolved))
    }

    /// Get all template names in the schema.
    pub fn template_names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
