//! Declarative translation rules
//!
//! Each domain owns a [`DomainTable`]: per-field lists of
//! `(matcher, template)` rules tried in order, a table of well-known error
//! codes, and rules for standalone `message` payloads. Matchers test the
//! backend's English wording, so a change of wording on the backend shows up
//! here as untranslated (verbatim) messages rather than as failures.

mod tables;

use once_cell::sync::Lazy;
use regex::Regex;
use sufra_shared::Domain;

use crate::catalog::{format_message, Catalog};

pub use tables::{table_for, ADMIN_BRANCH, ADMIN_USER, AUTH, DELIVERY_AREA};

static ENTERED_CHARACTERS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"entered (\d+) characters").unwrap()
});

static DIGIT_COUNT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+) digits").unwrap()
});

const ENTERED_CHARACTERS_KEY: &str = "units.entered_characters";
const CHARACTER_ONE_KEY: &str = "units.character_one";
const CHARACTER_MANY_KEY: &str = "units.character_many";

/// String predicate over a raw backend message
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    Contains(&'static str),
    /// Needle must be lowercase
    ContainsIgnoreCase(&'static str),
    AnyOf(&'static [Matcher]),
}

impl Matcher {
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            Matcher::Contains(needle) => raw.contains(needle),
            Matcher::ContainsIgnoreCase(needle) => raw.to_lowercase().contains(needle),
            Matcher::AnyOf(matchers) => matchers.iter().any(|matcher| matcher.matches(raw)),
        }
    }
}

/// Localized output of a rule; the `&str` is a catalog key
#[derive(Debug, Clone, Copy)]
pub enum Template {
    Text(&'static str),
    /// Text followed by the entered character count, when the raw message
    /// reports one
    EnteredCharacters(&'static str),
    /// Text with `{digits}` taken from "N digits" in the raw message
    DigitCount(&'static str),
}

impl Template {
    /// Localized text, or `None` when a required value cannot be extracted
    pub fn render(&self, raw: &str, catalog: &Catalog) -> Option<String> {
        match self {
            Template::Text(key) => catalog.get(key).map(str::to_owned),
            Template::EnteredCharacters(key) => {
                let mut text = catalog.get(key)?.to_owned();
                if let Some(count) = capture(&ENTERED_CHARACTERS_REGEX, raw) {
                    text.push_str(&entered_characters(count, catalog));
                }
                Some(text)
            }
            Template::DigitCount(key) => {
                let digits = capture(&DIGIT_COUNT_REGEX, raw)?;
                Some(format_message(catalog.get(key)?, &[("digits", digits)]))
            }
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Template::Text(key) | Template::EnteredCharacters(key) | Template::DigitCount(key) => {
                *key
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub matcher: Matcher,
    pub template: Template,
}

impl Rule {
    pub const fn new(matcher: Matcher, template: Template) -> Self {
        Self { matcher, template }
    }

    pub fn apply(&self, raw: &str, catalog: &Catalog) -> Option<String> {
        if self.matcher.matches(raw) {
            self.template.render(raw, catalog)
        } else {
            None
        }
    }
}

/// Which payload fields a rule list applies to
#[derive(Debug, Clone, Copy)]
pub enum FieldSelector {
    Exact(&'static str),
    Containing(&'static str),
}

impl FieldSelector {
    pub fn selects(&self, field: &str) -> bool {
        match self {
            FieldSelector::Exact(name) => field == *name,
            FieldSelector::Containing(fragment) => field.contains(fragment),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub selector: FieldSelector,
    pub rules: &'static [Rule],
}

/// Order in which translated fields are concatenated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    /// Fields known to the table first, in table order, then the rest in
    /// payload order
    Table,
    /// The named fields first, in the given order, then the rest in payload
    /// order
    Leading(&'static [&'static str]),
    /// Payload order
    Payload,
}

#[derive(Debug)]
pub struct DomainTable {
    pub domain: Domain,
    pub fields: &'static [FieldRules],
    /// Well-known error code and catalog key
    pub codes: &'static [(&'static str, &'static str)],
    /// Catalog key used when a coded entry has neither a known code nor a
    /// description
    pub coded_fallback: &'static str,
    /// Rules for standalone `message` payloads
    pub messages: &'static [Rule],
    pub field_order: FieldOrder,
    /// Bullet glyph used by marked-up rendering
    pub bullet: &'static str,
}

impl DomainTable {
    pub fn rules_for(&self, field: &str) -> &'static [Rule] {
        self.fields
            .iter()
            .find(|entry| entry.selector.selects(field))
            .map(|entry| entry.rules)
            .unwrap_or(&[])
    }

    pub fn code_key(&self, code: &str) -> Option<&'static str> {
        self.codes
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, key)| *key)
    }

    /// Every catalog key this table can produce
    pub fn catalog_keys(&self) -> Vec<&'static str> {
        let field_rules = self.fields.iter().flat_map(|entry| entry.rules.iter());
        let mut keys: Vec<&'static str> = field_rules
            .chain(self.messages.iter())
            .map(|rule| rule.template.key())
            .chain(self.codes.iter().map(|(_, key)| *key))
            .collect();
        keys.push(self.coded_fallback);
        keys
    }
}

/// Keys the templates need besides the per-table ones
pub fn unit_keys() -> [&'static str; 3] {
    [ENTERED_CHARACTERS_KEY, CHARACTER_ONE_KEY, CHARACTER_MANY_KEY]
}

fn capture<'a>(regex: &Regex, raw: &'a str) -> Option<&'a str> {
    regex
        .captures(raw)
        .and_then(|captures| captures.get(1))
        .map(|found| found.as_str())
}

fn entered_characters(count: &str, catalog: &Catalog) -> String {
    let unit = if count == "1" {
        catalog.text(CHARACTER_ONE_KEY)
    } else {
        catalog.text(CHARACTER_MANY_KEY)
    };
    format_message(
        catalog.text(ENTERED_CHARACTERS_KEY),
        &[("count", count), ("characters", unit)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    #[test]
    fn test_matchers() {
        assert!(Matcher::Contains("required").matches("The Email field is required."));
        assert!(!Matcher::Contains("Required").matches("is required"));
        assert!(Matcher::ContainsIgnoreCase("already registered").matches("Already Registered"));
        let any = Matcher::AnyOf(&[Matcher::Contains("a"), Matcher::Contains("b")]);
        assert!(any.matches("b"));
        assert!(!any.matches("c"));
    }

    #[test]
    fn test_entered_characters_pluralization() {
        let catalog = catalog();
        let template = Template::EnteredCharacters("admin_user.first_name_length");

        let many = template
            .render("must be between 3 and 100 characters. You entered 2 characters", &catalog)
            .unwrap();
        assert_eq!(many, "الاسم الأول يجب أن يكون بين 3 و 100 حرف. أدخلت 2 حرفاً.");

        let one = template
            .render("must be between 3 and 100 characters. You entered 1 characters", &catalog)
            .unwrap();
        assert_eq!(one, "الاسم الأول يجب أن يكون بين 3 و 100 حرف. أدخلت 1 حرف.");
    }

    #[test]
    fn test_entered_characters_without_count() {
        let rendered = Template::EnteredCharacters("auth.last_name_length")
            .render("must be between 3 and 100 characters", &catalog())
            .unwrap();
        assert_eq!(rendered, "الاسم الأخير يجب أن يكون بين 3 و 100 حرف.");
    }

    #[test]
    fn test_digit_count_requires_a_number() {
        let catalog = catalog();
        let template = Template::DigitCount("auth.phone_length");
        assert_eq!(
            template.render("Phone number must be 11 digits long", &catalog).unwrap(),
            "رقم الهاتف يجب أن يكون 11 رقماً"
        );
        assert_eq!(template.render("must be digits long", &catalog), None);
    }

    #[test]
    fn test_rule_with_missing_catalog_entry_does_not_apply() {
        let rule = Rule::new(Matcher::Contains("x"), Template::Text("general.missing"));
        assert_eq!(rule.apply("x", &catalog()), None);
    }

    #[test]
    fn test_field_selectors() {
        assert!(FieldSelector::Exact("").selects(""));
        assert!(!FieldSelector::Exact("Email").selects("EmailAddress"));
        assert!(FieldSelector::Containing("PhoneNumbers").selects("PhoneNumbers[0].Phone"));
    }
}
