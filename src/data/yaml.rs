//! YAML rendering for reports.

use anyhow::{Context, Result};
use serde::Serialize;
use yaml_rust_davvid::{Yaml, YamlEmitter};

/// Serializes a report to YAML, emitting long job descriptions as block scalars.
///
/// The emitter only writes `|` blocks with clip chomping, so block output is
/// used only when every multi-line string survives that; otherwise all
/// strings are written quoted.
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    let serde_value = serde_yaml::to_value(data).context("Failed to serialize report")?;
    let yaml_value = convert_serde_to_yaml_rust(&serde_value);

    let mut output = String::new();
    let mut emitter = YamlEmitter::new(&mut output);
    emitter.multiline_strings(block_scalars_round_trip(&yaml_value));
    emitter
        .dump(&yaml_value)
        .context("Failed to emit YAML")?;

    Ok(output)
}

fn block_scalars_round_trip(node: &Yaml) -> bool {
    match node {
        Yaml::String(s) => !s.contains('\n') || fits_literal_block(s),
        Yaml::Array(items) => items.iter().all(block_scalars_round_trip),
        Yaml::Hash(map) => map
            .iter()
            .all(|(k, v)| block_scalars_round_trip(k) && block_scalars_round_trip(v)),
        _ => true,
    }
}

/// A `|` block keeps exactly one trailing newline and needs a first line
/// that sets the indentation.
fn fits_literal_block(s: &str) -> bool {
    let Some(body) = s.strip_suffix('\n') else {
        return false;
    };
    !body.is_empty()
        && !body.ends_with('\n')
        && !body.starts_with([' ', '\t', '\n'])
        && s.chars().all(|c| c == '\n' || c == '\t' || !c.is_control())
}

fn convert_serde_to_yaml_rust(value: &serde_yaml::Value) -> Yaml {
    match value {
        serde_yaml::Value::Null => Yaml::Null,
        serde_yaml::Value::Bool(b) => Yaml::Boolean(*b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Yaml::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Yaml::Real(f.to_string())
            } else {
                Yaml::String(n.to_string())
            }
        }
        serde_yaml::Value::String(s) => Yaml::String(s.clone()),
        serde_yaml::Value::Sequence(seq) => {
            Yaml::Array(seq.iter().map(convert_serde_to_yaml_rust).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let mut yaml_map = yaml_rust_davvid::yaml::Hash::new();
            for (k, v) in map {
                yaml_map.insert(convert_serde_to_yaml_rust(k), convert_serde_to_yaml_rust(v));
            }
            Yaml::Hash(yaml_map)
        }
        serde_yaml::Value::Tagged(tagged) => convert_serde_to_yaml_rust(&tagged.value),
    }
}
