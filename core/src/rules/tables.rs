//! Per-domain rule tables

use sufra_shared::Domain;

use super::{
    DomainTable, FieldOrder, FieldRules, FieldSelector, Matcher, Rule,
    Template::{DigitCount, EnteredCharacters, Text},
};

use super::Matcher::{AnyOf, Contains, ContainsIgnoreCase};

const NAME_LENGTH: Matcher = Contains("between 3 and 100 characters");
const PHONE_PREFIX: Matcher = Contains("must start with 010, 011, 012, or 015");
const PHONE_LENGTH: Matcher = Contains("digits long");
const REQUIRED: Matcher = Contains("required");

const NETWORK: Rule = Rule::new(
    AnyOf(&[ContainsIgnoreCase("network"), ContainsIgnoreCase("internet")]),
    Text("general.check_connection"),
);
const TIMEOUT: Rule = Rule::new(
    AnyOf(&[ContainsIgnoreCase("timeout"), ContainsIgnoreCase("time out")]),
    Text("general.timeout"),
);

/// Login and self-registration
pub static AUTH: DomainTable = DomainTable {
    domain: Domain::Auth,
    fields: &[
        FieldRules {
            selector: FieldSelector::Exact("FirstName"),
            rules: &[
                Rule::new(NAME_LENGTH, EnteredCharacters("auth.first_name_length")),
                Rule::new(REQUIRED, Text("auth.first_name_required")),
            ],
        },
        FieldRules {
            selector: FieldSelector::Exact("LastName"),
            rules: &[
                Rule::new(NAME_LENGTH, EnteredCharacters("auth.last_name_length")),
                Rule::new(REQUIRED, Text("auth.last_name_required")),
            ],
        },
        FieldRules {
            selector: FieldSelector::Exact("PhoneNumber"),
            rules: &[
                Rule::new(PHONE_PREFIX, Text("auth.phone_prefix")),
                Rule::new(PHONE_LENGTH, DigitCount("auth.phone_length")),
                Rule::new(
                    ContainsIgnoreCase("already registered"),
                    Text("auth.phone_registered"),
                ),
                Rule::new(REQUIRED, Text("auth.phone_required")),
            ],
        },
        FieldRules {
            selector: FieldSelector::Exact("Email"),
            rules: &[
                Rule::new(
                    AnyOf(&[
                        ContainsIgnoreCase("already exists"),
                        ContainsIgnoreCase("already registered"),
                    ]),
                    Text("auth.email_taken"),
                ),
                Rule::new(REQUIRED, Text("auth.email_required")),
                Rule::new(Contains("valid email address"), Text("auth.email_invalid")),
            ],
        },
        FieldRules {
            selector: FieldSelector::Exact("Password"),
            rules: &[
                Rule::new(Contains("at least 6 characters"), Text("auth.password_length")),
                Rule::new(REQUIRED, Text("auth.password_required")),
                Rule::new(Contains("uppercase letter"), Text("auth.password_uppercase")),
                Rule::new(Contains("lowercase letter"), Text("auth.password_lowercase")),
                Rule::new(Contains("digit"), Text("auth.password_digit")),
                Rule::new(
                    Contains("non-alphanumeric character"),
                    Text("auth.password_symbol"),
                ),
            ],
        },
        FieldRules {
            selector: FieldSelector::Exact("ConfirmPassword"),
            rules: &[Rule::new(Contains("match"), Text("auth.password_mismatch"))],
        },
    ],
    codes: &[
        ("User.InvalidCredentials", "auth.invalid_credentials"),
        ("User.NotFound", "auth.user_not_found"),
    ],
    coded_fallback: "auth.coded_fallback",
    messages: &[
        Rule::new(
            AnyOf(&[ContainsIgnoreCase("invalid"), ContainsIgnoreCase("credentials")]),
            Text("auth.invalid_credentials"),
        ),
        Rule::new(ContainsIgnoreCase("user not found"), Text("auth.user_not_found")),
        Rule::new(
            ContainsIgnoreCase("email not confirmed"),
            Text("auth.email_not_confirmed"),
        ),
        NETWORK,
        TIMEOUT,
    ],
    field_order: FieldOrder::Table,
    bullet: "•",
};

/// Admin user management
pub static ADMIN_USER: DomainTable = DomainTable {
    domain: Domain::AdminUser,
    fields: &[
        FieldRules {
            selector: FieldSelector::Exact("FirstName"),
            rules: &[
                Rule::new(NAME_LENGTH, EnteredCharacters("admin_user.first_name_length")),
                Rule::new(REQUIRED, Text("admin_user.first_name_required")),
            ],
        },
        FieldRules {
            selector: FieldSelector::Exact("LastName"),
            rules: &[
                Rule::new(NAME_LENGTH, EnteredCharacters("admin_user.last_name_length")),
                Rule::new(REQUIRED, Text("admin_user.last_name_required")),
            ],
        },
        FieldRules {
            selector: FieldSelector::Exact("Password"),
            rules: &[
                Rule::new(Contains("at least 8 digits"), Text("admin_user.password_complexity")),
                Rule::new(Contains("Lowercase"), Text("admin_user.password_lowercase")),
                Rule::new(Contains("Uppercase"), Text("admin_user.password_uppercase")),
                Rule::new(Contains("NonAlphanumeric"), Text("admin_user.password_symbol")),
                Rule::new(REQUIRED, Text("admin_user.password_required")),
            ],
        },
        FieldRules {
            selector: FieldSelector::Exact("PhoneNumber"),
            rules: &[
                Rule::new(PHONE_PREFIX, Text("admin_user.phone_prefix")),
                Rule::new(PHONE_LENGTH, DigitCount("admin_user.phone_length")),
                Rule::new(Contains("Invalid phone number"), Text("admin_user.phone_invalid")),
                Rule::new(
                    Contains("This phone number is already registered"),
                    Text("admin_user.phone_registered"),
                ),
                Rule::new(Contains("already exists"), Text("admin_user.phone_taken")),
            ],
        },
        FieldRules {
            selector: FieldSelector::Exact("Email"),
            rules: &[
                Rule::new(Contains("already taken"), Text("admin_user.email_taken")),
                Rule::new(Contains("already exists"), Text("admin_user.email_exists")),
                Rule::new(Contains("Invalid email"), Text("admin_user.email_invalid")),
                Rule::new(REQUIRED, Text("admin_user.email_required")),
            ],
        },
    ],
    codes: &[],
    coded_fallback: "general.unknown",
    messages: &[],
    field_order: FieldOrder::Payload,
    bullet: "•",
};

/// Admin branch management
pub static ADMIN_BRANCH: DomainTable = DomainTable {
    domain: Domain::AdminBranch,
    fields: &[
        FieldRules {
            selector: FieldSelector::Exact(""),
            rules: &[Rule::new(
                Contains("Opening time must be before closing time"),
                Text("admin_branch.opening_before_closing"),
            )],
        },
        FieldRules {
            selector: FieldSelector::Exact("LocationUrl"),
            rules: &[Rule::new(
                Contains("Invalid Google Maps URL"),
                Text("admin_branch.location_url_invalid"),
            )],
        },
        FieldRules {
            selector: FieldSelector::Containing("PhoneNumbers"),
            rules: &[Rule::new(
                Contains("Invalid phone number format"),
                Text("admin_branch.phone_format_invalid"),
            )],
        },
    ],
    codes: &[("Branch.NameAlreadyUsed", "admin_branch.name_already_used")],
    coded_fallback: "general.unknown",
    messages: &[],
    field_order: FieldOrder::Leading(&["", "LocationUrl"]),
    bullet: "•",
};

/// Delivery areas and fees
pub static DELIVERY_AREA: DomainTable = DomainTable {
    domain: Domain::DeliveryArea,
    fields: &[
        FieldRules {
            selector: FieldSelector::Exact("EstimatedTimeMin"),
            rules: &[
                Rule::new(
                    AnyOf(&[
                        Contains("greater than 0"),
                        Contains("greater than or equal to 0"),
                    ]),
                    Text("delivery_area.time_min_positive"),
                ),
                Rule::new(REQUIRED, Text("delivery_area.time_min_required")),
            ],
        },
        FieldRules {
            selector: FieldSelector::Exact("EstimatedTimeMax"),
            rules: &[
                Rule::new(
                    Contains("greater than minimum"),
                    Text("delivery_area.time_max_after_min"),
                ),
                Rule::new(REQUIRED, Text("delivery_area.time_max_required")),
            ],
        },
        FieldRules {
            selector: FieldSelector::Exact("AreaName"),
            rules: &[
                Rule::new(REQUIRED, Text("delivery_area.area_name_required")),
                Rule::new(Contains("already exists"), Text("delivery_area.area_name_exists")),
            ],
        },
        FieldRules {
            selector: FieldSelector::Exact("Fee"),
            rules: &[
                Rule::new(Contains("greater than"), Text("delivery_area.fee_positive")),
                Rule::new(REQUIRED, Text("delivery_area.fee_required")),
            ],
        },
        FieldRules {
            selector: FieldSelector::Exact("BranchId"),
            rules: &[Rule::new(REQUIRED, Text("delivery_area.branch_required"))],
        },
    ],
    codes: &[("DeliveryFee.AlreadyExists", "delivery_area.fee_already_exists")],
    coded_fallback: "delivery_area.coded_fallback",
    messages: &[
        Rule::new(
            AnyOf(&[ContainsIgnoreCase("invalid"), ContainsIgnoreCase("credentials")]),
            Text("delivery_area.invalid_data"),
        ),
        NETWORK,
        TIMEOUT,
    ],
    field_order: FieldOrder::Payload,
    bullet: "-",
};

pub fn table_for(domain: Domain) -> &'static DomainTable {
    match domain {
        Domain::Auth => &AUTH,
        Domain::AdminUser => &ADMIN_USER,
        Domain::AdminBranch => &ADMIN_BRANCH,
        Domain::DeliveryArea => &DELIVERY_AREA,
    }
}
