use serde::{Deserialize, Serialize};

/// Справочные значения формы ввода: участок, виды находок и пользователи.
///
/// Загружаются из конфигурации, поэтому списки можно менять без
/// перекомпиляции. Значения по умолчанию соответствуют текущей установке.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    #[serde(default = "default_area")]
    pub area: String,

    #[serde(rename = "findingTypes", alias = "finding_types", default = "default_finding_types")]
    pub finding_types: Vec<String>,

    #[serde(default = "default_users")]
    pub users: Vec<String>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            area: default_area(),
            finding_types: default_finding_types(),
            users: default_users(),
        }
    }
}

impl ReferenceData {
    pub fn is_known_finding_type(&self, value: &str) -> bool {
        self.finding_types.iter().any(|t| t == value)
    }

    pub fn is_known_user(&self, value: &str) -> bool {
        self.users.iter().any(|u| u == value)
    }
}

fn default_area() -> String {
    "KITTEO".to_string()
}

fn default_finding_types() -> Vec<String> {
    [
        "SHAFT EQUIVOCADO",
        "CABEZAL EQUIVOCADO",
        "HOSEL EQUIVOCADO",
        "GRIP EQUIVOCADO",
        "SHAFT FALTANTE",
        "CABEZAL FALTANTE",
        "GRIP FALTANTE",
        "HEADCOVER FALTANTE",
        "SHAFT EXTRA",
        "GRIP EXTRA",
        "SIN BANDERA Y SIN SELLO",
        "SHAFT MEZCLADO SIN ETIQUETA",
        "SHAFT MEZCLADO CON ETIQUETA",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_users() -> Vec<String> {
    [
        "OTTON", "CARMEN", "KARLA", "ADRIAN", "DENISE", "ALAN", "CINTYA", "ESTRELLA", "JUAN",
        "FAUSTO", "DIANA",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let data = ReferenceData::default();
        assert_eq!(data.area, "KITTEO");
        assert_eq!(data.finding_types.len(), 13);
        assert_eq!(data.users.len(), 11);
        assert!(data.is_known_finding_type("GRIP FALTANTE"));
        assert!(!data.is_known_finding_type("grip faltante"));
        assert!(data.is_known_user("DIANA"));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let data: ReferenceData = serde_json::from_str(r#"{"users": ["ANA"]}"#).unwrap();
        assert_eq!(data.users, vec!["ANA".to_string()]);
        assert_eq!(data.area, "KITTEO");
        assert_eq!(data.finding_types.len(), 13);
    }
}
