//! # Material List
//!
//! Bill of materials for an overhead distribution project, in the layout
//! the concessionaires (Enel-RJ, Light) expect on submission.
//!
//! On the wire the fields carry the Portuguese keys used on utility forms
//! (`projeto`, `codigo`, `descricao`, `unidade`, `quantidade`). The English
//! names are accepted as input aliases.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};

fn default_concessionaire() -> String {
    "Enel-RJ".to_string()
}

/// One line of the material list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialItem {
    /// Utility catalogue code
    #[serde(rename = "codigo", alias = "code")]
    pub code: String,

    #[serde(rename = "descricao", alias = "description")]
    pub description: String,

    /// Unit of measure (e.g., "un", "m", "kg")
    #[serde(rename = "unidade", alias = "unit")]
    pub unit: String,

    #[serde(rename = "quantidade", alias = "quantity")]
    pub quantity: f64,
}

impl MaterialItem {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        unit: impl Into<String>,
        quantity: f64,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            unit: unit.into(),
            quantity,
        }
    }
}

/// Material list request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "projeto": "RJ-2025-014",
///   "concessionaire": "Light",
///   "items": [
///     { "codigo": "PT-11-600", "descricao": "Poste DT 11/600", "unidade": "un", "quantidade": 4 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialListRequest {
    /// Project identifier
    #[serde(rename = "projeto", alias = "project")]
    pub project: String,

    /// Concessionaire the list is submitted to
    #[serde(default = "default_concessionaire")]
    pub concessionaire: String,

    #[serde(default)]
    pub items: Vec<MaterialItem>,
}

impl MaterialListRequest {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            concessionaire: default_concessionaire(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: MaterialItem) -> Self {
        self.items.push(item);
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (i, item) in self.items.iter().enumerate() {
            if item.code.trim().is_empty() {
                return Err(CalcError::invalid_input(
                    format!("items[{}].codigo", i),
                    "",
                    "Material code must not be empty",
                ));
            }
            if !item.quantity.is_finite() || item.quantity < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("items[{}].quantidade", i),
                    item.quantity.to_string(),
                    "Quantity must be a finite, non-negative number",
                ));
            }
        }
        Ok(())
    }
}

/// Material list as submitted, with the item count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialListResult {
    #[serde(rename = "projeto", alias = "project")]
    pub project: String,
    pub concessionaire: String,
    /// Items in request order
    pub items: Vec<MaterialItem>,
    pub total_items: usize,
}

/// Build the material list for a project.
pub fn calculate(request: &MaterialListRequest) -> CalcResult<MaterialListResult> {
    request.validate()?;

    debug!(
        project = %request.project,
        concessionaire = %request.concessionaire,
        items = request.items.len(),
        "material list built"
    );

    Ok(MaterialListResult {
        project: request.project.clone(),
        concessionaire: request.concessionaire.clone(),
        items: request.items.clone(),
        total_items: request.items.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_request() -> MaterialListRequest {
        MaterialListRequest::new("RJ-001")
            .with_item(MaterialItem::new("PT-11", "Poste DT 11/600", "un", 4.0))
            .with_item(MaterialItem::new("CA-50", "Cabo CA 50 mm²", "m", 180.0))
    }

    #[test]
    fn test_material_list() {
        let result = calculate(&test_request()).unwrap();
        assert_eq!(result.project, "RJ-001");
        assert_eq!(result.concessionaire, "Enel-RJ");
        assert_eq!(result.total_items, 2);
        assert_eq!(result.items[1].code, "CA-50");
    }

    #[test]
    fn test_empty_list() {
        let result = calculate(&MaterialListRequest::new("RJ-002")).unwrap();
        assert_eq!(result.total_items, 0);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_portuguese_aliases() {
        let json = r#"{
            "projeto": "RJ-003",
            "concessionaire": "Light",
            "items": [
                { "codigo": "PT-11", "descricao": "Poste", "unidade": "un", "quantidade": 2 }
            ]
        }"#;
        let request: MaterialListRequest = serde_json::from_str(json).unwrap();
        let result = calculate(&request).unwrap();
        assert_eq!(result.project, "RJ-003");
        assert_eq!(result.concessionaire, "Light");
        assert_eq!(result.items[0].quantity, 2.0);
    }

    #[test]
    fn test_english_keys_accepted_on_input() {
        let json = r#"{
            "project": "RJ-004",
            "items": [
                { "code": "CA-50", "description": "Cabo", "unit": "m", "quantity": 90 }
            ]
        }"#;
        let request: MaterialListRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.project, "RJ-004");
        assert_eq!(request.items[0].code, "CA-50");
        assert_eq!(request.items[0].quantity, 90.0);
    }

    #[test]
    fn test_output_uses_portuguese_keys() {
        let result = calculate(&test_request()).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["projeto"], "RJ-001");
        assert_eq!(json["concessionaire"], "Enel-RJ");
        assert_eq!(json["total_items"], 2);
        assert!(json.get("project").is_none());

        let item = json["items"][0].as_object().unwrap();
        let mut keys: Vec<&str> = item.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["codigo", "descricao", "quantidade", "unidade"]);
        assert_eq!(item["codigo"], "PT-11");
        assert_eq!(item["quantidade"], 4.0);
    }

    #[test]
    fn test_invalid_items() {
        let bad_code =
            MaterialListRequest::new("X").with_item(MaterialItem::new(" ", "d", "un", 1.0));
        assert!(calculate(&bad_code).is_err());

        let bad_qty =
            MaterialListRequest::new("X").with_item(MaterialItem::new("A", "d", "un", -1.0));
        let err = calculate(&bad_qty).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "items[0].quantidade"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
