use serde_json::Value;

use super::wire;

/// Canonical team record. Identity is immutable; name and logo are editable
/// through the backend's CRUD surface.
#[derive(Debug, Clone, Default)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub logo_url: Option<String>,
}

impl Team {
    pub fn from_value(value: &Value) -> Self {
        Team {
            id: wire::num(value, &["id", "team_id", "teamId"]).unwrap_or(0),
            name: wire::text(value, &["name", "team_name", "teamName"]).unwrap_or_default(),
            logo_url: wire::text(value, &["logoUrl", "logo_url"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_aliases() {
        let t = Team::from_value(&json!({"team_id": 4, "team_name": "Lions", "logo_url": "/l.png"}));
        assert_eq!(t.id, 4);
        assert_eq!(t.name, "Lions");
        assert_eq!(t.logo_url.as_deref(), Some("/l.png"));

        let t = Team::from_value(&json!({"id": 4, "name": "Lions"}));
        assert_eq!(t.id, 4);
        assert_eq!(t.logo_url, None);
    }
}
