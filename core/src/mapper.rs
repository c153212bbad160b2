//! Raw backend message to localized message mapping
//!
//! Every function here is total: a message no rule recognizes is returned
//! unchanged, so unanticipated backend wording stays visible.

use sufra_shared::FieldMessages;

use crate::catalog::Catalog;
use crate::classifier::CodedError;
use crate::rules::{DomainTable, FieldOrder, Rule};

/// Translate the raw messages of one field; output has the same length and
/// order as `raw`
pub fn map_field<S: AsRef<str>>(
    table: &DomainTable,
    field: &str,
    raw: &[S],
    catalog: &Catalog,
) -> Vec<String> {
    let rules = table.rules_for(field);
    raw.iter()
        .map(|message| translate(rules, message.as_ref(), catalog))
        .collect()
}

/// Translate a whole field map, ordered as the table prescribes
pub fn map_fields(
    table: &DomainTable,
    fields: &[(String, Vec<String>)],
    catalog: &Catalog,
) -> FieldMessages {
    let mut translated = FieldMessages::new();
    for index in field_order(table, fields) {
        let (field, raw) = &fields[index];
        translated.insert(field.clone(), map_field(table, field, raw, catalog));
    }
    translated
}

/// Translate one coded entry: known code, then the entry's description,
/// then the domain fallback
pub fn map_code(table: &DomainTable, entry: &CodedError, catalog: &Catalog) -> String {
    if let Some(key) = entry.code.as_deref().and_then(|code| table.code_key(code)) {
        return catalog.text(key).to_string();
    }

    match entry.description.as_deref() {
        Some(description) if !description.is_empty() => description.to_string(),
        _ => catalog.text(table.coded_fallback).to_string(),
    }
}

/// Translate a standalone `message` payload
pub fn map_message(table: &DomainTable, message: &str, catalog: &Catalog) -> String {
    translate(table.messages, message, catalog)
}

fn translate(rules: &[Rule], raw: &str, catalog: &Catalog) -> String {
    rules
        .iter()
        .find_map(|rule| rule.apply(raw, catalog))
        .unwrap_or_else(|| raw.to_string())
}

fn field_order(table: &DomainTable, fields: &[(String, Vec<String>)]) -> Vec<usize> {
    let mut order = Vec::with_capacity(fields.len());
    let mut taken = vec![false; fields.len()];

    let mut take_matching = |selects: &dyn Fn(&str) -> bool| {
        for (index, (field, _)) in fields.iter().enumerate() {
            if !taken[index] && selects(field) {
                taken[index] = true;
                order.push(index);
            }
        }
    };

    match table.field_order {
        FieldOrder::Table => {
            for entry in table.fields {
                take_matching(&|field: &str| entry.selector.selects(field));
            }
        }
        FieldOrder::Leading(names) => {
            for name in names {
                take_matching(&|field: &str| field == *name);
            }
        }
        FieldOrder::Payload => {}
    }

    for (index, was_taken) in taken.into_iter().enumerate() {
        if !was_taken {
            order.push(index);
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{ADMIN_BRANCH, ADMIN_USER, AUTH, DELIVERY_AREA};

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    fn owned(pairs: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
        pairs
            .iter()
            .map(|(field, messages)| {
                (field.to_string(), messages.iter().map(|m| m.to_string()).collect())
            })
            .collect()
    }

    #[test]
    fn test_auth_field_rules() {
        let catalog = catalog();
        let mapped = map_field(
            &AUTH,
            "Password",
            &[
                "Passwords must be at least 6 characters.",
                "Passwords must have at least one uppercase letter ('A'-'Z').",
                "Passwords must have at least one digit ('0'-'9').",
                "Something new",
            ],
            &catalog,
        );
        assert_eq!(
            mapped,
            vec![
                "كلمة المرور يجب أن تحتوي على الأقل 6 أحرف",
                "كلمة المرور يجب أن تحتوي على حرف كبير",
                "كلمة المرور يجب أن تحتوي على رقم",
                "Something new",
            ]
        );
    }

    #[test]
    fn test_rule_priority_within_a_field() {
        // Also mentions "required"; the first matching rule wins.
        let mapped = map_field(
            &AUTH,
            "Email",
            &["Email 'a@b.c' is already registered. It is required to be unique"],
            &catalog(),
        );
        assert_eq!(mapped, vec!["البريد الإلكتروني مستخدم بالفعل"]);
    }

    #[test]
    fn test_unknown_field_passes_through() {
        let mapped = map_field(&AUTH, "Nickname", &["is required"], &catalog());
        assert_eq!(mapped, vec!["is required"]);
    }

    #[test]
    fn test_admin_user_phone_length_uses_digit_count() {
        let mapped = map_field(
            &ADMIN_USER,
            "PhoneNumber",
            &["Phone number must be 11 digits long."],
            &catalog(),
        );
        assert_eq!(mapped, vec!["رقم الهاتف يجب أن يتكون من 11 رقماً"]);
    }

    #[test]
    fn test_branch_field_rules() {
        let catalog = catalog();
        assert_eq!(
            map_field(&ADMIN_BRANCH, "", &["Opening time must be before closing time."], &catalog),
            vec!["وقت الفتح يجب أن يكون قبل وقت الإغلاق"]
        );
        assert_eq!(
            map_field(&ADMIN_BRANCH, "PhoneNumbers[0]", &["Invalid phone number format."], &catalog),
            vec!["تنسيق رقم الهاتف غير صحيح"]
        );
        assert_eq!(
            map_field(&ADMIN_BRANCH, "LocationUrlBackup", &["Invalid Google Maps URL"], &catalog),
            vec!["Invalid Google Maps URL"]
        );
    }

    #[test]
    fn test_auth_orders_known_fields_first() {
        let fields = owned(&[
            ("Custom", &["custom message"]),
            ("Password", &["The Password field is required."]),
            ("FirstName", &["The FirstName field is required."]),
        ]);
        let mapped = map_fields(&AUTH, &fields, &catalog());
        assert_eq!(
            mapped.fields().collect::<Vec<_>>(),
            vec!["FirstName", "Password", "Custom"]
        );
    }

    #[test]
    fn test_branch_orders_general_and_location_first() {
        let fields = owned(&[
            ("Name", &["x"]),
            ("PhoneNumbers[0]", &["Invalid phone number format."]),
            ("LocationUrl", &["Invalid Google Maps URL"]),
            ("", &["Opening time must be before closing time."]),
        ]);
        let mapped = map_fields(&ADMIN_BRANCH, &fields, &catalog());
        assert_eq!(
            mapped.fields().collect::<Vec<_>>(),
            vec!["", "LocationUrl", "Name", "PhoneNumbers[0]"]
        );
    }

    #[test]
    fn test_payload_order_domains_keep_payload_order() {
        let fields = owned(&[
            ("Fee", &["'Fee' must be greater than '0'."]),
            ("AreaName", &["'Area Name' is required."]),
        ]);
        let mapped = map_fields(&DELIVERY_AREA, &fields, &catalog());
        assert_eq!(mapped.fields().collect::<Vec<_>>(), vec!["Fee", "AreaName"]);
        assert_eq!(mapped.get("Fee").unwrap(), ["تكلفة التوصيل يجب أن تكون أكبر من 0"]);
        assert_eq!(mapped.get("AreaName").unwrap(), ["اسم المنطقة مطلوب"]);
    }

    #[test]
    fn test_map_code_fallbacks() {
        let catalog = catalog();
        let known = CodedError {
            code: Some("User.InvalidCredentials".into()),
            description: Some("bad".into()),
        };
        assert_eq!(map_code(&AUTH, &known, &catalog), "البريد الإلكتروني أو كلمة المرور غير صحيحة");

        let described = CodedError {
            code: Some("User.Locked".into()),
            description: Some("Account locked".into()),
        };
        assert_eq!(map_code(&AUTH, &described, &catalog), "Account locked");

        let bare = CodedError {
            code: Some("User.Locked".into()),
            description: Some(String::new()),
        };
        assert_eq!(map_code(&AUTH, &bare, &catalog), "حدث خطأ في المصادقة");
        assert_eq!(
            map_code(&DELIVERY_AREA, &CodedError::default(), &catalog),
            "حدث خطأ في البيانات المدخلة"
        );
    }

    #[test]
    fn test_map_message() {
        let catalog = catalog();
        assert_eq!(map_message(&AUTH, "Email not confirmed", &catalog), "البريد الإلكتروني غير مؤكد");
        assert_eq!(map_message(&AUTH, "Network Error", &catalog), "يرجى التحقق من اتصالك بالإنترنت");
        assert_eq!(map_message(&DELIVERY_AREA, "Invalid request", &catalog), "بيانات غير صحيحة");
        assert_eq!(map_message(&ADMIN_USER, "Network Error", &catalog), "Network Error");
    }
}
