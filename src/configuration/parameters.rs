use super::value::{DynamicMapping, DynamicValue};


/// Flattens nested template parameters into `key=value` strings, the form
/// accepted by the generator's `--param` flag.
///
/// Nested mapping keys are joined with dots, list items repeat their key,
/// `true` is emitted as a bare key and `null` values are dropped.
pub fn flatten_parameters(parameters: &DynamicMapping) -> Vec<String> {
    let mut flattened = Vec::new();
    flatten_into(&mut flattened, parameters, None);
    flattened
}

fn flatten_into(flattened: &mut Vec<String>, parameters: &DynamicMapping, prefix: Option<&str>) {
    for (key, value) in parameters {
        let full_key = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };

        match value {
            DynamicValue::Mapping(nested) => flatten_into(flattened, nested, Some(&full_key)),
            DynamicValue::List(items) => {
                flattened.extend(items.iter().map(|item| format!("{full_key}={item}")));
            }
            DynamicValue::Bool(true) => flattened.push(full_key),
            DynamicValue::Null => {}
            scalar => flattened.push(format!("{full_key}={scalar}")),
        }
    }
}
