//! Typed substitution records consumed by the template engine.

use serde::{Deserialize, Serialize};

/// Lookup interface the template engine uses to resolve placeholders.
///
/// Implementations return `None` for names they do not define; the engine
/// turns that into a fatal error instead of emitting partially substituted
/// output.
pub trait TemplateVars {
    /// Value for the placeholder `name`, if this record defines it.
    fn get(&self, name: &str) -> Option<String>;
}

/// Substitution record for one dimensionality.
///
/// Every list-valued field is already joined with the separator its template
/// context expects, so templates splice the values verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricVars {
    /// Tool identifier stamped into generated-file headers.
    pub generator: String,
    /// The dimensionality this record was expanded for.
    pub dimensionality: u32,
    /// Cardinal word for the dimensionality, `3 -> "three"`.
    pub number: String,
    /// Generic parameter list, `F1, F2`.
    pub type_params: String,
    /// The erased field type repeated once per field, `Box<dyn FieldValue>, ..`.
    pub erased_types: String,
    /// Typed value parameters, `field1: F1`, one per line.
    pub field_params: String,
    /// Forwarded value arguments, `field1, field2`.
    pub field_args: String,
    /// Name-and-kind parameter pairs, `field1_name: &'static str, field1_kind: FieldKind`.
    pub field_kind_params: String,
    /// Forwarded name-and-kind arguments, `field1_name, field1_kind`.
    pub field_kind_args: String,
    /// Typed descriptor parameters, `field1: Field<F1>`, one per line.
    pub field_decl_params: String,
    /// Forwarded descriptor arguments, `field1`, one per line.
    pub field_list: String,
    /// Descriptor construction expressions, one per line.
    pub field_ctors: String,
    /// Name-only parameters, `field1_name: &'static str`, one per line.
    pub field_name_params: String,
    /// Forwarded name arguments, `field1_name, field2_name`.
    pub field_names: String,
    /// Doc lines describing each generic field type.
    pub type_docs: String,
    /// Doc lines describing each name-and-kind parameter pair.
    pub field_kind_docs: String,
    /// Doc lines describing each typed descriptor parameter.
    pub field_decl_docs: String,
    /// Doc lines describing each name-only parameter.
    pub field_name_docs: String,
}

impl TemplateVars for MetricVars {
    fn get(&self, name: &str) -> Option<String> {
        match name {
            "generator" => Some(self.generator.clone()),
            "dimensionality" => Some(self.dimensionality.to_string()),
            "number" => Some(self.number.clone()),
            "type_params" => Some(self.type_params.clone()),
            "erased_types" => Some(self.erased_types.clone()),
            "field_params" => Some(self.field_params.clone()),
            "field_args" => Some(self.field_args.clone()),
            "field_kind_params" => Some(self.field_kind_params.clone()),
            "field_kind_args" => Some(self.field_kind_args.clone()),
            "field_decl_params" => Some(self.field_decl_params.clone()),
            "field_list" => Some(self.field_list.clone()),
            "field_ctors" => Some(self.field_ctors.clone()),
            "field_name_params" => Some(self.field_name_params.clone()),
            "field_names" => Some(self.field_names.clone()),
            "type_docs" => Some(self.type_docs.clone()),
            "field_kind_docs" => Some(self.field_kind_docs.clone()),
            "field_decl_docs" => Some(self.field_decl_docs.clone()),
            "field_name_docs" => Some(self.field_name_docs.clone()),
            _ => None,
        }
    }
}

/// Substitution record for an aggregate destination, assembled after the
/// dimensionality loop completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryVars {
    /// Tool identifier stamped into generated-file headers.
    pub generator: String,
    /// Per-dimensionality fragments concatenated in ascending order.
    pub factory_methods: String,
}

impl TemplateVars for FactoryVars {
    fn get(&self, name: &str) -> Option<String> {
        match name {
            "generator" => Some(self.generator.clone()),
            "factory_methods" => Some(self.factory_methods.clone()),
            _ => None,
        }
    }
}
