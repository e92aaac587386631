//! YAML record templates for mock-random.
//!
//! A [`TemplateSchema`] names record templates whose fields are filled by the
//! `random-core` generators. [`RecordGenerator`] turns a template into a
//! stream of JSON records.
//!
//! # Example
//!
//! ```rust
//! use random_template::{RecordGenerator, TemplateSchema};
//!
//! let schema = TemplateSchema::from_yaml(r#"
//! seed: 42
//! templates:
//!   - name: hosts
//!     fields:
//!       - name: name
//!         generator:
//!           type: string
//!           pool: lower
//!           length: 8
//!       - name: ip
//!         generator:
//!           type: ip
//! "#).unwrap();
//!
//! let mut generator = RecordGenerator::new(schema);
//! let record = generator.next_record("hosts").unwrap();
//! println!("{}", record.to_json());
//! ```

pub mod generator;
pub mod schema;

// Re-exports for convenience
pub use generator::{generate_value, GeneratorError, Record, RecordGenerator, RecordIterator};
pub use schema::{
    FieldDefinition, GeneratorConfig, ResolvedInputs, SchemaError, TemplateDefinition,
    TemplateSchema,
};
