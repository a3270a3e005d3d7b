use serde_json::{Map, Value};

/// Combine mappings in order; the first mapping to supply a key keeps it.
pub fn merge<'a, I>(results: I) -> Map<String, Value>
where
    I: IntoIterator<Item = &'a Map<String, Value>>,
{
    let mut combined = Map::new();
    for result in results {
        for (key, value) in result {
            if !combined.contains_key(key) {
                combined.insert(key.clone(), value.clone());
            }
        }
    }
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn first_writer_wins() {
        let first = object(json!({"a": 1, "b": 2}));
        let second = object(json!({"b": 99, "c": 3}));

        let merged = merge([&first, &second]);
        assert_eq!(Value::Object(merged.clone()), json!({"a": 1, "b": 2, "c": 3}));
        assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_input_gives_empty_mapping() {
        let none: Vec<&Map<String, Value>> = Vec::new();
        assert!(merge(none).is_empty());
    }
}
