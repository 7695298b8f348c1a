//! Request shapes of the scoring API.
//!
//! Only the shapes are declared here; what a handler does with a valid
//! request is its own business.

use crate::fields::{
    ArgumentsField, BirthDayField, CharField, ClientIdsField, DateField, EmailField, GenderField,
    PhoneField,
};
use crate::schema::RequestSchema;

/// Method name that routes to [`online_score`].
pub const ONLINE_SCORE: &str = "online_score";

/// Method name that routes to [`clients_interests`].
pub const CLIENTS_INTERESTS: &str = "clients_interests";

/// The envelope every call arrives in.
///
/// `login`, `token` and `arguments` must be present but may be empty;
/// `method` must be present and non-empty.
pub fn method_request() -> RequestSchema {
    RequestSchema::new("method_request")
        .field("account", CharField::new())
        .field("login", CharField::new().required())
        .field("token", CharField::new().required())
        .field("arguments", ArgumentsField::new().required())
        .field("method", CharField::new().required().not_nullable())
}

/// Arguments of the `online_score` method.
///
/// Every field is optional, but at least one pair must be present:
/// phone and email, first and last name, or gender and birthday.
pub fn online_score() -> RequestSchema {
    online_score_with(BirthDayField::new())
}

/// [`online_score`] with a caller-supplied birthday field, e.g. one pinned
/// to a reference day.
pub fn online_score_with(birthday: BirthDayField) -> RequestSchema {
    RequestSchema::new(ONLINE_SCORE)
        .field("first_name", CharField::new())
        .field("last_name", CharField::new())
        .field("email", EmailField::new())
        .field("phone", PhoneField::new())
        .field("birthday", birthday)
        .field("gender", GenderField::new())
        .require_any_of(["phone", "email"])
        .require_any_of(["first_name", "last_name"])
        .require_any_of(["gender", "birthday"])
}

/// Arguments of the `clients_interests` method.
pub fn clients_interests() -> RequestSchema {
    RequestSchema::new(CLIENTS_INTERESTS)
        .field("client_ids", ClientIdsField::new().required().not_nullable())
        .field("date", DateField::new())
}

/// Looks up the arguments schema for a method name.
pub fn arguments_for(method: &str) -> Option<RequestSchema> {
    match method {
        ONLINE_SCORE => Some(online_score()),
        CLIENTS_INTERESTS => Some(clients_interests()),
        _ => None,
    }
}
