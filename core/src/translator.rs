//! Domain façades composing classification, mapping and rendering
//!
//! A [`Translator`] owns its message catalog and holds no other state; every
//! call is a pure function of the payload.

use serde_json::Value;
use sufra_shared::{Domain, DomainErrorResult, FieldMessages, RenderStyle, TranslatorConfig};

use crate::catalog::Catalog;
use crate::classifier::{classify, CodedError, ErrorShape};
use crate::errors::{CatalogResult, CoreResult};
use crate::mapper::{map_code, map_field, map_fields, map_message};
use crate::renderer::{render, RenderOptions};
use crate::rules::{self, table_for, DomainTable, ADMIN_BRANCH, ADMIN_USER, AUTH, DELIVERY_AREA};

const UNKNOWN_KEY: &str = "general.unknown";
const UNEXPECTED_KEY: &str = "general.unexpected";
const INVALID_DATA_KEY: &str = "general.invalid_data";

/// General key for the field that holds non-field errors
pub const GENERAL_FIELD: &str = "";

#[derive(Debug, Clone)]
pub struct Translator {
    catalog: Catalog,
}

impl Translator {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Translator over the embedded catalog plus the configured overrides
    pub fn from_config(config: &TranslatorConfig) -> CatalogResult<Self> {
        let catalog = Catalog::load(config.catalog_path.as_deref())?;
        catalog.ensure_keys(required_keys())?;
        Ok(Self::new(catalog))
    }

    /// Translator configured from environment variables
    pub fn from_env() -> CoreResult<Self> {
        let config = TranslatorConfig::from_env()?;
        Ok(Self::from_config(&config)?)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Translate the raw messages of one field of `domain`
    pub fn map_field<S: AsRef<str>>(&self, domain: Domain, field: &str, raw: &[S]) -> Vec<String> {
        map_field(table_for(domain), field, raw, &self.catalog)
    }

    /// Login and registration errors, rendered for display
    pub fn translate_auth_error(&self, payload: Option<&Value>) -> String {
        let shape = classify(payload);
        tracing::debug!(domain = %Domain::Auth, kind = %shape.kind(), "Translating error payload");

        match shape {
            ErrorShape::Unknown { absent: true, .. } => self.text(UNKNOWN_KEY),
            ErrorShape::CodedErrorList { entries, .. } => self.first_code(&AUTH, entries.first()),
            ErrorShape::FieldValidationMap { title, fields } => {
                let translated = map_fields(&AUTH, &fields, &self.catalog);
                let fallback = title.unwrap_or_else(|| self.text(INVALID_DATA_KEY));
                render(
                    &DomainErrorResult::Fields(translated),
                    RenderStyle::MarkedUp,
                    &RenderOptions {
                        bullet: AUTH.bullet,
                        empty_fallback: &fallback,
                    },
                )
            }
            ErrorShape::PlainMessage { message, .. } => map_message(&AUTH, &message, &self.catalog),
            ErrorShape::Unknown { title, .. } => title.unwrap_or_else(|| self.text(UNEXPECTED_KEY)),
        }
    }

    /// Admin user errors, kept per field for inline annotations
    pub fn translate_admin_user_error(&self, payload: Option<&Value>) -> DomainErrorResult {
        let shape = classify(payload);
        tracing::debug!(domain = %Domain::AdminUser, kind = %shape.kind(), "Translating error payload");

        match shape {
            ErrorShape::FieldValidationMap { fields, .. } => {
                DomainErrorResult::Fields(map_fields(&ADMIN_USER, &fields, &self.catalog))
            }
            ErrorShape::CodedErrorList { entries, .. } => {
                DomainErrorResult::Fields(self.general_codes(&ADMIN_USER, &entries))
            }
            ErrorShape::PlainMessage { message, .. } => {
                DomainErrorResult::Single(map_message(&ADMIN_USER, &message, &self.catalog))
            }
            ErrorShape::Unknown { .. } => DomainErrorResult::Single(self.text(UNKNOWN_KEY)),
        }
    }

    /// Admin branch errors; general errors live under the empty field name
    pub fn translate_admin_branch_error(&self, payload: Option<&Value>) -> DomainErrorResult {
        let shape = classify(payload);
        tracing::debug!(domain = %Domain::AdminBranch, kind = %shape.kind(), "Translating error payload");

        let fields = match shape {
            ErrorShape::CodedErrorList { entries, .. } => self.general_codes(&ADMIN_BRANCH, &entries),
            ErrorShape::FieldValidationMap { fields, .. } => {
                map_fields(&ADMIN_BRANCH, &fields, &self.catalog)
            }
            ErrorShape::PlainMessage { message, .. } => {
                let mut general = FieldMessages::new();
                general.push(GENERAL_FIELD, map_message(&ADMIN_BRANCH, &message, &self.catalog));
                general
            }
            ErrorShape::Unknown { .. } => {
                let mut general = FieldMessages::new();
                general.push(GENERAL_FIELD, self.text(UNKNOWN_KEY));
                general
            }
        };
        DomainErrorResult::Fields(fields)
    }

    /// Delivery area errors, rendered in the style of the caller's surface
    pub fn translate_delivery_area_error(&self, payload: Option<&Value>, style: RenderStyle) -> String {
        let shape = classify(payload);
        tracing::debug!(
            domain = %Domain::DeliveryArea,
            kind = %shape.kind(),
            style = %style,
            "Translating error payload"
        );

        match shape {
            ErrorShape::Unknown { absent: true, .. } => self.text(UNKNOWN_KEY),
            ErrorShape::CodedErrorList { entries, .. } => {
                self.first_code(&DELIVERY_AREA, entries.first())
            }
            ErrorShape::FieldValidationMap { fields, .. } => {
                let translated = map_fields(&DELIVERY_AREA, &fields, &self.catalog);
                render(
                    &DomainErrorResult::Fields(translated),
                    style,
                    &RenderOptions {
                        bullet: DELIVERY_AREA.bullet,
                        empty_fallback: self.catalog.text(INVALID_DATA_KEY),
                    },
                )
            }
            ErrorShape::PlainMessage { message, .. } => {
                map_message(&DELIVERY_AREA, &message, &self.catalog)
            }
            ErrorShape::Unknown { .. } => self.text(UNEXPECTED_KEY),
        }
    }

    /// Dispatch to the façade of `domain`
    ///
    /// `style` only affects delivery areas; the admin domains return fields
    /// and auth always uses marked-up rendering.
    pub fn translate(&self, domain: Domain, payload: Option<&Value>, style: RenderStyle) -> DomainErrorResult {
        match domain {
            Domain::Auth => DomainErrorResult::Single(self.translate_auth_error(payload)),
            Domain::AdminUser => self.translate_admin_user_error(payload),
            Domain::AdminBranch => self.translate_admin_branch_error(payload),
            Domain::DeliveryArea => {
                DomainErrorResult::Single(self.translate_delivery_area_error(payload, style))
            }
        }
    }

    fn text(&self, key: &str) -> String {
        self.catalog.text(key).to_string()
    }

    // The first entry of a coded list is authoritative.
    fn first_code(&self, table: &DomainTable, first: Option<&CodedError>) -> String {
        match first {
            Some(entry) => map_code(table, entry, &self.catalog),
            None => self.text(table.coded_fallback),
        }
    }

    fn general_codes(&self, table: &DomainTable, entries: &[CodedError]) -> FieldMessages {
        let mut general = FieldMessages::new();
        general.insert(
            GENERAL_FIELD,
            entries
                .iter()
                .map(|entry| map_code(table, entry, &self.catalog))
                .collect(),
        );
        general
    }
}

/// Every catalog key the façades can reach
pub fn required_keys() -> Vec<&'static str> {
    let mut keys = vec![UNKNOWN_KEY, UNEXPECTED_KEY, INVALID_DATA_KEY];
    keys.extend(rules::unit_keys());
    for domain in Domain::ALL {
        keys.extend(table_for(domain).catalog_keys());
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CatalogError;
    use serde_json::json;

    fn translator() -> Translator {
        Translator::new(Catalog::embedded().unwrap())
    }

    #[test]
    fn test_embedded_catalog_has_required_keys() {
        assert!(Catalog::embedded().unwrap().ensure_keys(required_keys()).is_ok());
    }

    #[test]
    fn test_from_config_reports_unreadable_override() {
        let config = TranslatorConfig {
            catalog_path: Some("/nonexistent/overrides.toml".into()),
            ..TranslatorConfig::default()
        };
        assert!(matches!(
            Translator::from_config(&config),
            Err(CatalogError::Io { .. })
        ));
    }

    #[test]
    fn test_partial_catalog_misses_required_keys() {
        let partial = Catalog::from_toml_str(
            r#"
            [general]
            unknown = "حدث خطأ غير معروف"
            "#,
        )
        .unwrap();
        assert!(matches!(
            partial.ensure_keys(required_keys()),
            Err(CatalogError::MissingKey { key }) if key == UNEXPECTED_KEY
        ));
    }

    #[test]
    fn test_blank_payloads_count_as_absent() {
        let translator = translator();
        for payload in [json!(false), json!(0), json!("")] {
            assert_eq!(translator.translate_auth_error(Some(&payload)), "حدث خطأ غير معروف");
            assert_eq!(
                translator.translate_delivery_area_error(Some(&payload), RenderStyle::Plain),
                "حدث خطأ غير معروف"
            );
        }
    }

    #[test]
    fn test_auth_unknown_shapes() {
        let translator = translator();
        assert_eq!(translator.translate_auth_error(None), "حدث خطأ غير معروف");
        assert_eq!(translator.translate_auth_error(Some(&json!({}))), "حدث خطأ غير متوقع");
        assert_eq!(
            translator.translate_auth_error(Some(&json!({"title": "Bad Request"}))),
            "Bad Request"
        );
    }

    #[test]
    fn test_auth_empty_field_map_uses_title() {
        let translator = translator();
        assert_eq!(
            translator.translate_auth_error(Some(&json!({"title": "Validation failed", "errors": {}}))),
            "Validation failed"
        );
        assert_eq!(
            translator.translate_auth_error(Some(&json!({"errors": {}}))),
            "بيانات غير صالحة"
        );
    }

    #[test]
    fn test_auth_empty_coded_list() {
        assert_eq!(
            translator().translate_auth_error(Some(&json!({"errors": []}))),
            "حدث خطأ في المصادقة"
        );
    }

    #[test]
    fn test_admin_user_plain_message_passes_through() {
        let result = translator().translate_admin_user_error(Some(&json!({"message": "Server busy"})));
        assert_eq!(result, DomainErrorResult::Single("Server busy".to_string()));
    }

    #[test]
    fn test_admin_branch_coded_entries_collect_under_general_field() {
        let result = translator().translate_admin_branch_error(Some(&json!({
            "errors": [
                {"code": "Branch.NameAlreadyUsed", "description": "Name used"},
                {"code": "Branch.Other", "description": "Other problem"},
                {"code": "Branch.Silent"}
            ]
        })));
        let fields = result.as_fields().unwrap();
        assert_eq!(
            fields.get(GENERAL_FIELD).unwrap(),
            ["اسم الفرع مستخدم بالفعل.", "Other problem", "حدث خطأ غير معروف"]
        );
    }

    #[test]
    fn test_delivery_area_coded_list_ignores_status() {
        let translator = translator();
        let payload = json!({
            "errors": [{"code": "DeliveryFee.AlreadyExists", "description": "dup"}]
        });
        assert_eq!(
            translator.translate_delivery_area_error(Some(&payload), RenderStyle::Plain),
            "تكلفة توصيل لهذه المنطقة موجودة بالفعل لهذا الفرع"
        );
    }

    #[test]
    fn test_translate_dispatch() {
        let translator = translator();
        for domain in Domain::ALL {
            let result = translator.translate(domain, None, RenderStyle::Plain);
            assert_eq!(result.flatten(), vec!["حدث خطأ غير معروف"], "{domain}");
        }
    }
}
