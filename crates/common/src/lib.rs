pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_as_status_object() {
        let json = serde_json::to_value(types::Health { status: "ok" }).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "ok" }));
    }
}
