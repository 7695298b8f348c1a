//! Request schemas: presence policy, aggregation, config loading.

use std::io;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use scrol_validator::prelude::*;
use scrol_validator::schema::requests::{
    clients_interests, method_request, online_score, online_score_with,
};
use serde_json::json;
use tracing_subscriber::fmt::MakeWriter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// In-memory log sink for asserting on emitted events.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn summary(errors: &ValidationErrors) -> Vec<(&str, ErrorKind, &str)> {
    errors
        .errors()
        .iter()
        .map(|e| (e.field.as_deref().unwrap_or_default(), e.kind, e.code.as_ref()))
        .collect()
}

#[test]
fn full_online_score_request() {
    init_tracing();
    let schema = online_score_with(
        BirthDayField::new().as_of(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
    );

    let payload = json!({
        "phone": "79175002040",
        "email": "stupnikov@otus.ru",
        "first_name": "Стансилав",
        "last_name": "Ступников",
        "birthday": "01.01.1990",
        "gender": 1
    });

    assert_eq!(schema.validate(&payload), Ok(()));
    assert_eq!(
        schema.non_empty_fields(&payload),
        vec!["first_name", "last_name", "email", "phone", "birthday", "gender"]
    );
}

#[test]
fn online_score_reports_every_bad_field() {
    init_tracing();
    let schema = online_score_with(
        BirthDayField::new().as_of(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
    );

    let errors = schema
        .validate(&json!({
            "phone": "89175002040",
            "email": "stupnikovotus.ru",
            "first_name": 1,
            "birthday": "01.01.1890",
            "gender": -1
        }))
        .unwrap_err();

    assert_eq!(
        summary(&errors),
        vec![
            ("first_name", ErrorKind::TypeMismatch, "type_mismatch"),
            ("email", ErrorKind::ValueInvalid, "missing_at_symbol"),
            ("phone", ErrorKind::ValueInvalid, "invalid_prefix"),
            ("birthday", ErrorKind::ValueInvalid, "too_old"),
            ("gender", ErrorKind::ValueInvalid, "invalid_gender"),
        ]
    );
}

#[test]
fn gender_zero_counts_as_present() {
    let schema = online_score();
    assert!(schema
        .validate(&json!({"gender": 0, "birthday": "01.01.2000"}))
        .is_ok());
}

#[test]
fn clients_interests_policy() {
    let schema = clients_interests();

    assert!(schema.validate(&json!({"client_ids": [1, 2, 3]})).is_ok());
    assert!(schema
        .validate(&json!({"client_ids": [1], "date": "20.07.2017"}))
        .is_ok());

    let errors = schema.validate(&json!({})).unwrap_err();
    assert_eq!(
        summary(&errors),
        vec![("client_ids", ErrorKind::Missing, "required")]
    );

    let errors = schema.validate(&json!({"client_ids": []})).unwrap_err();
    assert_eq!(errors.to_string(), "client_ids: Field must not be empty");

    let errors = schema
        .validate(&json!({"client_ids": [1, "2"], "date": "XXX"}))
        .unwrap_err();
    assert_eq!(
        errors.to_string(),
        "client_ids: Type of elements of list must be int; date: Value format must be DD.MM.YYYY"
    );
}

#[test]
fn method_envelope() {
    let schema = method_request();
    let errors = schema
        .validate(&json!({"login": "h&f", "token": "", "arguments": "x", "method": "online_score"}))
        .unwrap_err();
    assert_eq!(errors.to_string(), "arguments: Value type must be dict");
}

#[test]
fn config_equivalent_to_builtin() {
    init_tracing();
    let config = SchemaConfig::from_json(
        r#"{
            "name": "online_score",
            "fields": {
                "first_name": {"type": "char"},
                "last_name": {"type": "char"},
                "email": {"type": "email"},
                "phone": {"type": "phone"},
                "birthday": {"type": "birthday", "as_of": "2024-01-01"},
                "gender": {"type": "gender"}
            },
            "require_any_of": [
                ["phone", "email"],
                ["first_name", "last_name"],
                ["gender", "birthday"]
            ]
        }"#,
    )
    .unwrap();

    let from_config = config.build().unwrap();
    let builtin = online_score_with(
        BirthDayField::new().as_of(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
    );

    let payloads = [
        json!({"phone": "79175002040", "email": "a@b"}),
        json!({"phone": "79175002040"}),
        json!({"gender": 3, "birthday": "01.01.1900"}),
        json!({"first_name": "a", "last_name": "b", "email": ""}),
        json!("not an object"),
    ];

    for payload in &payloads {
        assert_eq!(from_config.validate(payload), builtin.validate(payload));
    }
}

#[test]
fn errors_serialize_for_responses() {
    let errors = clients_interests()
        .validate(&json!({"client_ids": "1"}))
        .unwrap_err();

    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!([{
            "kind": "type_mismatch",
            "code": "type_mismatch",
            "message": "Value type must be list",
            "field": "client_ids",
            "params": [["expected", "list"], ["actual", "str"]]
        }])
    );
}

#[test]
fn rejected_fields_are_logged() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        clients_interests().validate(&json!({"client_ids": [1, "2"], "date": "1.1.2020"}))
    });
    assert!(result.is_err());

    let output = logs.contents();
    let rejected: Vec<&str> = output
        .lines()
        .filter(|line| line.contains("field rejected"))
        .collect();
    assert_eq!(rejected.len(), 2, "{output}");
    assert!(rejected[0].contains("field=client_ids"), "{output}");
    assert!(rejected[0].contains("code=invalid_element_type"), "{output}");
    assert!(rejected[1].contains("field=date"), "{output}");
    assert!(rejected[1].contains("code=invalid_date_format"), "{output}");
}
