//! Dimension expansion.
//!
//! Derives the complete substitution record for one dimensionality from the
//! fixed word tables. Pure computation; the same input always yields a
//! byte-identical record.

use crate::error::CodegenError;
use crate::vars::MetricVars;

/// Cardinal number words, indexed by value.
pub const CARDINALS: [&str; 11] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

/// Ordinal position words, indexed by one-based field position.
///
/// Index 0 is never rendered; dimensionalities start at 1.
pub const ORDINALS: [&str; 11] = [
    "zeroth", "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth",
    "ninth", "tenth",
];

/// Largest dimensionality the word tables can express.
pub const MAX_DIMENSIONALITY: u32 = (CARDINALS.len() - 1) as u32;

/// Identifier stamped into generated-file headers.
pub const GENERATOR_ID: &str = "metricgen";

/// Uniform type substituted wherever a field type is erased.
pub const ERASED_FIELD_TYPE: &str = "Box<dyn FieldValue>";

// Separators are fixed per context so rendered lists line up with the
// surrounding template indentation.
const SEP_INLINE: &str = ", ";
const SEP_PARAMS: &str = ",\n        ";
const SEP_NESTED: &str = ",\n            ";

/// Expands `dimensionality` into the full substitution record.
///
/// Fails with [`CodegenError::DimensionalityOutOfRange`] when the requested
/// dimensionality falls outside `1..=MAX_DIMENSIONALITY`; there is no silent
/// fallback beyond the word tables.
pub fn expand(dimensionality: u32) -> Result<MetricVars, CodegenError> {
    if dimensionality < 1 || dimensionality > MAX_DIMENSIONALITY {
        return Err(CodegenError::DimensionalityOutOfRange {
            dimensionality,
            max: MAX_DIMENSIONALITY,
        });
    }

    let mut type_params = Vec::new();
    let mut erased_types = Vec::new();
    let mut field_params = Vec::new();
    let mut field_args = Vec::new();
    let mut field_kind_params = Vec::new();
    let mut field_kind_args = Vec::new();
    let mut field_decl_params = Vec::new();
    let mut field_list = Vec::new();
    let mut field_ctors = Vec::new();
    let mut field_name_params = Vec::new();
    let mut field_names = Vec::new();
    let mut type_docs = String::new();
    let mut field_kind_docs = String::new();
    let mut field_decl_docs = String::new();
    let mut field_name_docs = String::new();

    for i in 1..=dimensionality as usize {
        let ordinal = ORDINALS[i];
        type_params.push(format!("F{i}"));
        erased_types.push(ERASED_FIELD_TYPE.to_string());
        field_params.push(format!("field{i}: F{i}"));
        field_args.push(format!("field{i}"));
        field_kind_params.push(format!(
            "field{i}_name: &'static str, field{i}_kind: FieldKind"
        ));
        field_kind_args.push(format!("field{i}_name, field{i}_kind"));
        field_decl_params.push(format!("field{i}: Field<F{i}>"));
        field_list.push(format!("field{i}"));
        field_ctors.push(format!("FieldDef::new(field{i}_name, field{i}_kind)"));
        field_name_params.push(format!("field{i}_name: &'static str"));
        field_names.push(format!("field{i}_name"));
        type_docs.push_str(&format!("/// * `F{i}` - type of the {ordinal} metric field.\n"));
        field_kind_docs.push_str(&format!(
            "    /// * `field{i}_name`, `field{i}_kind` - name and kind of the {ordinal} field.\n"
        ));
        field_decl_docs.push_str(&format!(
            "    /// * `field{i}` - descriptor of the {ordinal} field.\n"
        ));
        field_name_docs.push_str(&format!(
            "    /// * `field{i}_name` - name of the {ordinal} field.\n"
        ));
    }

    Ok(MetricVars {
        generator: GENERATOR_ID.to_string(),
        dimensionality,
        number: CARDINALS[dimensionality as usize].to_string(),
        type_params: type_params.join(SEP_INLINE),
        erased_types: erased_types.join(SEP_INLINE),
        field_params: field_params.join(SEP_PARAMS),
        field_args: field_args.join(SEP_INLINE),
        field_kind_params: field_kind_params.join(SEP_PARAMS),
        field_kind_args: field_kind_args.join(SEP_NESTED),
        field_decl_params: field_decl_params.join(SEP_PARAMS),
        field_list: field_list.join(SEP_NESTED),
        field_ctors: field_ctors.join(SEP_NESTED),
        field_name_params: field_name_params.join(SEP_PARAMS),
        field_names: field_names.join(SEP_INLINE),
        type_docs,
        field_kind_docs,
        field_decl_docs,
        field_name_docs,
    })
}
