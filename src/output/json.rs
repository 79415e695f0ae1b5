use serde_json::{json, Value};

use crate::describe::Description;
use crate::error::DescribeError;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &DescribeError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn description_json(d: &Description, description_property: &str, commit_count_property: &str) -> Value {
    json!({
        "label": d.label,
        "commit_count": d.commit_count,
        "properties": {
            description_property: d.label,
            commit_count_property: d.commit_count
        }
    })
}

pub fn properties_json(entries: &[(String, String)]) -> Value {
    let map: serde_json::Map<String, Value> = entries
        .iter()
        .map(|(k, v)| (k.clone(), json!(v)))
        .collect();
    Value::Object(map)
}
