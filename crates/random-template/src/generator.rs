//! Record generator producing JSON records from templates.

use crate::schema::{
    GeneratorConfig, ResolvedInputs, SchemaError, TemplateDefinition, TemplateSchema,
};
use random_core::{generate_range, Random, RandomError, RngSource, ThreadSource, UniformSource};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Schema error
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Generator input error
    #[error("Random error: {0}")]
    Random(#[from] RandomError),

    /// Generator configuration rejected at generation time
    #[error("Invalid generator for field '{field}': {reason}")]
    InvalidGenerator { field: String, reason: String },
}

/// A generated record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Template the record was generated from
    pub template: String,
    /// Position of the record in the generation sequence
    pub index: u64,
    /// Generated field values
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The fields as a JSON object.
    pub fn to_json(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

type BoxedSource = Box<dyn UniformSource + Send>;

/// Generator that fills templates with random values.
///
/// Uses a seeded source when the schema (or [`RecordGenerator::with_seed`])
/// provides a seed, and the thread-local source otherwise.
pub struct RecordGenerator {
    schema: TemplateSchema,
    random: Random<BoxedSource>,
    index: u64,
}

impl RecordGenerator {
    pub fn new(schema: TemplateSchema) -> Self {
        let source: BoxedSource = match schema.seed {
            Some(seed) => Box::new(RngSource::seeded(seed)),
            None => Box::new(ThreadSource),
        };
        Self {
            schema,
            random: Random::with_source(source),
            index: 0,
        }
    }

    /// Replace the source with one seeded from `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random = Random::with_source(Box::new(RngSource::seeded(seed)));
        self
    }

    /// Use a caller-provided source.
    pub fn with_source<S: UniformSource + Send + 'static>(mut self, source: S) -> Self {
        self.random = Random::with_source(Box::new(source));
        self
    }

    /// Set the index of the next record.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Get the current record index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &TemplateSchema {
        &self.schema
    }

    /// Generate the next record for the given template.
    pub fn next_record(&mut self, template: &str) -> Result<Record, GeneratorError> {
        let (definition, resolved) = self.schema.require_template(template)?;

        let index = self.index;
        let fields = generate_fields(&mut self.random, definition, resolved, index)?;
        self.index += 1;

        trace!(template, index, "generated record");
        Ok(Record {
            template: definition.name.clone(),
            index,
            fields,
        })
    }

    /// Generate `count` records lazily.
    pub fn records(
        &mut self,
        template: &str,
        count: u64,
    ) -> Result<RecordIterator<'_>, GeneratorError> {
        self.schema.require_template(template)?;

        debug!(template, count, start = self.index, "generating records");
        Ok(RecordIterator {
            generator: self,
            template: template.to_string(),
            remaining: count,
        })
    }
}

fn generate_fields(
    random: &mut Random<BoxedSource>,
    definition: &TemplateDefinition,
    resolved: &[ResolvedInputs],
    index: u64,
) -> Result<Map<String, Value>, GeneratorError> {
    definition
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let inputs = resolved.get(i).unwrap_or(&ResolvedInputs::None);
            let value = generate_resolved(random, &field.generator, inputs, index).map_err(
                |e| match e {
                    GeneratorError::InvalidGenerator { reason, .. } => {
                        GeneratorError::InvalidGenerator {
                            field: field.name.clone(),
                            reason,
                        }
                    }
                    other => other,
                },
            )?;
            Ok((field.name.clone(), value))
        })
        .collect()
}

/// Generate one value from a generator configuration.
pub fn generate_value<S: UniformSource>(
    random: &mut Random<S>,
    config: &GeneratorConfig,
    index: u64,
) -> Result<Value, GeneratorError> {
    let inputs = config
        .resolve()
        .map_err(|reason| GeneratorError::InvalidGenerator {
            field: String::new(),
            reason,
        })?;
    generate_resolved(random, config, &inputs, index)
}

/// Generate one value using inputs resolved ahead of time. Inputs that do not
/// match the generator kind are resolved again from `config`.
fn generate_resolved<S: UniformSource>(
    random: &mut Random<S>,
    config: &GeneratorConfig,
    inputs: &ResolvedInputs,
    index: u64,
) -> Result<Value, GeneratorError> {
    let value = match config {
        GeneratorConfig::Natural { min, max } => Value::from(random.natural(*min, *max)),

        GeneratorConfig::Integer { min, max } => Value::from(random.integer(*min, *max)),

        GeneratorConfig::Float {
            min,
            max,
            dmin,
            dmax,
        } => {
            let value = random.float(*min, *max, *dmin, *dmax);
            // JSON has no NaN
            serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number)
        }

        GeneratorConfig::Character { pool } => match inputs {
            ResolvedInputs::Pool(resolved) => Value::from(random.character(resolved).to_string()),
            _ => {
                let pool = GeneratorConfig::character_pool(pool.as_deref())?;
                Value::from(random.character(&pool).to_string())
            }
        },

        GeneratorConfig::String { .. } => match inputs {
            ResolvedInputs::String(args) => Value::from(random.string(args)),
            _ => {
                let args = config
                    .string_args()
                    .map_err(|reason| GeneratorError::InvalidGenerator {
                        field: String::new(),
                        reason,
                    })?
                    .unwrap_or_default();
                Value::from(random.string(&args))
            }
        },

        GeneratorConfig::Range { start, stop, step } => {
            Value::from(generate_range(*start, *stop, *step))
        }

        GeneratorConfig::Ip => Value::from(random.ip()),

        GeneratorConfig::Sequential { start } => Value::from(start.wrapping_add(index as i64)),

        GeneratorConfig::OneOf { values } => {
            if values.is_empty() {
                Value::Null
            } else {
                let last = values.len() as i64 - 1;
                values[random.natural(0, last) as usize].clone()
            }
        }

        GeneratorConfig::Static { value } => value.clone(),
    };
    Ok(value)
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    template: String,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Result<Record, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record(&self.template))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
