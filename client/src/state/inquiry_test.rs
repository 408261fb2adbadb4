use super::*;

fn form() -> InquiryForm {
    InquiryForm::new(SERVICE_OPTIONS).unwrap()
}

fn filled_form() -> InquiryForm {
    let mut f = form();
    f.update_field(InquiryField::Name, "Jane").unwrap();
    f.update_field(InquiryField::Email, "jane@x.com").unwrap();
    f
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_form_is_idle_hidden_and_empty() {
    let f = form();
    assert_eq!(f.status, SubmitStatus::Idle);
    assert!(!f.visible);
    assert!(f.fields.is_empty());
    assert_eq!(f.error, None);
    assert_eq!(f.options().len(), 6);
}

#[test]
fn new_rejects_empty_options() {
    assert_eq!(InquiryForm::new(&[]), Err(ConfigError::EmptyServiceOptions));
}

#[test]
fn new_rejects_duplicate_option_values() {
    static DUPES: &[ServiceOption] = &[
        ServiceOption { value: "a", label: "A" },
        ServiceOption { value: "a", label: "Also A" },
    ];
    assert_eq!(InquiryForm::new(DUPES), Err(ConfigError::DuplicateServiceOption("a".to_owned())));
}

// =============================================================
// Field names
// =============================================================

#[test]
fn field_names_parse_including_service_alias() {
    assert_eq!("name".parse::<InquiryField>(), Ok(InquiryField::Name));
    assert_eq!("service".parse::<InquiryField>(), Ok(InquiryField::ServiceInterest));
    assert_eq!("serviceInterest".parse::<InquiryField>(), Ok(InquiryField::ServiceInterest));
    assert_eq!("fax".parse::<InquiryField>(), Err(FormError::UnknownField("fax".to_owned())));
}

#[test]
fn only_name_and_email_are_required() {
    let required: Vec<_> = InquiryField::ALL.into_iter().filter(|f| f.is_required()).collect();
    assert_eq!(required, vec![InquiryField::Name, InquiryField::Email]);
}

// =============================================================
// open / close
// =============================================================

#[test]
fn open_shows_dialog_once() {
    let mut f = form();
    assert!(f.open(None));
    assert!(f.visible);
    assert!(!f.open(None));
    assert!(f.visible);
}

#[test]
fn open_prefills_acceptable_values_only() {
    let mut f = form();
    let initial = InquiryFields {
        name: "Jane".into(),
        service: "teleportation".into(),
        ..InquiryFields::default()
    };
    f.open(Some(initial));
    assert_eq!(f.fields.name, "Jane");
    assert_eq!(f.fields.service, "");
}

#[test]
fn open_while_visible_ignores_initial_fields() {
    let mut f = form();
    f.open(None);
    f.open(Some(InquiryFields { name: "Other".into(), ..InquiryFields::default() }));
    assert_eq!(f.fields.name, "");
}

#[test]
fn open_does_not_prefill_frozen_form() {
    let mut f = filled_form();
    f.begin_submit().unwrap();
    assert!(!f.visible);

    let initial = InquiryFields { name: "Mallory".into(), phone: "555".into(), ..InquiryFields::default() };
    assert!(f.open(Some(initial.clone())));
    assert!(f.visible);
    assert_eq!(f.fields.name, "Jane");
    assert_eq!(f.fields.phone, "");

    f.finish_submit(Ok(()));
    f.visible = false;
    f.open(Some(initial));
    assert_eq!(f.fields.name, "Jane");
    assert_eq!(f.status, SubmitStatus::Submitted);
}

#[test]
fn open_prefills_failed_form() {
    let mut f = filled_form();
    f.begin_submit().unwrap();
    f.finish_submit(Err(SubmitError::Network("offline".into())));
    f.open(Some(InquiryFields { company: "Acme".into(), ..InquiryFields::default() }));
    assert_eq!(f.fields.company, "Acme");
    assert_eq!(f.fields.name, "Jane");
}

#[test]
fn close_hides_idle_form_and_keeps_fields() {
    let mut f = filled_form();
    f.open(None);
    assert_eq!(f.request_close(), CloseOutcome::Closed);
    assert!(!f.visible);
    assert_eq!(f.fields.name, "Jane");
}

#[test]
fn close_is_vetoed_while_submitting() {
    let mut f = filled_form();
    f.open(None);
    f.begin_submit().unwrap();
    assert_eq!(f.request_close(), CloseOutcome::Vetoed);
    assert!(f.visible);
    assert_eq!(f.status, SubmitStatus::Submitting);
}

#[test]
fn close_during_confirmation_resets_form() {
    let mut f = filled_form();
    f.open(None);
    f.begin_submit().unwrap();
    f.finish_submit(Ok(()));
    assert_eq!(f.request_close(), CloseOutcome::Closed);
    assert_eq!(f.status, SubmitStatus::Idle);
    assert!(f.fields.is_empty());
    assert!(!f.visible);
}

// =============================================================
// update_field
// =============================================================

#[test]
fn last_write_wins_per_field() {
    let mut f = form();
    f.update_field(InquiryField::Name, "A").unwrap();
    f.update_field(InquiryField::Company, "Acme").unwrap();
    f.update_field(InquiryField::Name, "B").unwrap();
    f.update_field(InquiryField::Phone, "555").unwrap();
    f.update_field(InquiryField::Company, "Initech").unwrap();
    assert_eq!(f.fields.name, "B");
    assert_eq!(f.fields.company, "Initech");
    assert_eq!(f.fields.phone, "555");
}

#[test]
fn interleaving_order_across_fields_does_not_matter() {
    let mut a = form();
    a.update_field(InquiryField::Name, "Jane").unwrap();
    a.update_field(InquiryField::Message, "hello").unwrap();

    let mut b = form();
    b.update_field(InquiryField::Message, "hello").unwrap();
    b.update_field(InquiryField::Name, "Jane").unwrap();

    assert_eq!(a.fields, b.fields);
}

#[test]
fn service_accepts_configured_values_and_clearing() {
    let mut f = form();
    f.update_field(InquiryField::ServiceInterest, "consulting").unwrap();
    assert_eq!(f.fields.service, "consulting");
    f.update_field(InquiryField::ServiceInterest, "").unwrap();
    assert_eq!(f.fields.service, "");
}

#[test]
fn unknown_service_is_rejected_without_change() {
    let mut f = form();
    f.update_field(InquiryField::ServiceInterest, "other").unwrap();
    let err = f.update_field(InquiryField::ServiceInterest, "bogus").unwrap_err();
    assert_eq!(err, FormError::UnknownService("bogus".to_owned()));
    assert_eq!(f.fields.service, "other");
}

#[test]
fn named_update_routes_to_field() {
    let mut f = form();
    f.update_named_field("company", "Acme").unwrap();
    f.update_named_field("serviceInterest", "rd-collaboration").unwrap();
    assert_eq!(f.fields.company, "Acme");
    assert_eq!(f.fields.service, "rd-collaboration");
    assert!(matches!(f.update_named_field("zip", "H0H"), Err(FormError::UnknownField(_))));
}

#[test]
fn fields_are_frozen_while_submitting_and_submitted() {
    let mut f = filled_form();
    f.begin_submit().unwrap();
    assert_eq!(f.update_field(InquiryField::Name, "X"), Err(FormError::Frozen));
    f.finish_submit(Ok(()));
    assert_eq!(f.update_field(InquiryField::Name, "X"), Err(FormError::Frozen));
    assert_eq!(f.fields.name, "Jane");
}

#[test]
fn edit_clears_previous_error() {
    let mut f = form();
    assert!(f.begin_submit().is_err());
    assert!(f.error.is_some());
    f.update_field(InquiryField::Name, "Jane").unwrap();
    assert_eq!(f.error, None);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validation_requires_name_first() {
    let f = form();
    assert_eq!(
        f.validate(),
        Err(SubmitError::Validation { field: InquiryField::Name, reason: ValidationReason::Required })
    );
}

#[test]
fn validation_treats_whitespace_as_missing() {
    let mut f = form();
    f.update_field(InquiryField::Name, "Jane").unwrap();
    f.update_field(InquiryField::Email, "   ").unwrap();
    assert_eq!(
        f.validate(),
        Err(SubmitError::Validation { field: InquiryField::Email, reason: ValidationReason::Required })
    );
}

#[test]
fn validation_rejects_malformed_email() {
    let mut f = form();
    f.update_field(InquiryField::Name, "Jane").unwrap();
    f.update_field(InquiryField::Email, "jane.example.com").unwrap();
    assert_eq!(
        f.validate(),
        Err(SubmitError::Validation { field: InquiryField::Email, reason: ValidationReason::MalformedEmail })
    );
}

#[test]
fn validation_rejects_service_outside_options() {
    let fields = InquiryFields {
        name: "Jane".into(),
        email: "jane@x.com".into(),
        service: "nope".into(),
        ..InquiryFields::default()
    };
    assert_eq!(
        validate_fields(&fields, SERVICE_OPTIONS),
        Err(SubmitError::Validation {
            field: InquiryField::ServiceInterest,
            reason: ValidationReason::NotAnOption,
        })
    );
}

#[test]
fn validation_passes_with_only_required_fields() {
    assert_eq!(filled_form().validate(), Ok(()));
}

#[test]
fn email_shape_checks() {
    assert!(is_email_shaped("jane@x.com"));
    assert!(is_email_shaped("  jane@x  "));
    assert!(!is_email_shaped("jane"));
    assert!(!is_email_shaped("@x.com"));
    assert!(!is_email_shaped("jane@"));
    assert!(!is_email_shaped("a@b@c"));
    assert!(!is_email_shaped("ja ne@x.com"));
}

#[test]
fn validation_error_message_names_the_field() {
    let err = SubmitError::Validation { field: InquiryField::Email, reason: ValidationReason::Required };
    assert_eq!(err.to_string(), "email is required");
}

// =============================================================
// Submission transitions
// =============================================================

#[test]
fn begin_submit_enters_submitting_and_snapshots() {
    let mut f = filled_form();
    let snapshot = f.begin_submit().unwrap();
    assert_eq!(f.status, SubmitStatus::Submitting);
    assert_eq!(snapshot.name, "Jane");
    assert_eq!(snapshot.email, "jane@x.com");
}

#[test]
fn begin_submit_while_not_idle_is_noop() {
    let mut f = filled_form();
    f.begin_submit().unwrap();
    let before = f.clone();
    assert_eq!(f.begin_submit(), Err(SubmitRejected::NotIdle));
    assert_eq!(f, before);

    f.finish_submit(Ok(()));
    let before = f.clone();
    assert_eq!(f.begin_submit(), Err(SubmitRejected::NotIdle));
    assert_eq!(f, before);
}

#[test]
fn invalid_submit_stays_idle_and_records_error() {
    let mut f = form();
    let rejected = f.begin_submit().unwrap_err();
    assert!(matches!(rejected, SubmitRejected::Invalid(SubmitError::Validation { .. })));
    assert_eq!(f.status, SubmitStatus::Idle);
    assert!(matches!(f.error, Some(SubmitError::Validation { .. })));
}

#[test]
fn failed_submission_allows_edit_and_retry() {
    let mut f = filled_form();
    f.begin_submit().unwrap();
    f.finish_submit(Err(SubmitError::Network("offline".into())));
    assert_eq!(f.status, SubmitStatus::Failed);
    assert_eq!(f.error, Some(SubmitError::Network("offline".into())));

    f.update_field(InquiryField::Phone, "555-0100").unwrap();
    assert!(f.begin_submit().is_ok());
    assert_eq!(f.status, SubmitStatus::Submitting);
    assert_eq!(f.error, None);
}

#[test]
fn finish_submit_outside_submitting_is_ignored() {
    let mut f = filled_form();
    f.finish_submit(Ok(()));
    assert_eq!(f.status, SubmitStatus::Idle);
}

#[test]
fn complete_clears_fields_and_hides() {
    let mut f = filled_form();
    f.open(None);
    f.begin_submit().unwrap();
    f.finish_submit(Ok(()));
    assert!(f.complete());
    assert_eq!(f.status, SubmitStatus::Idle);
    assert_eq!(f.fields, InquiryFields::default());
    assert!(!f.visible);
}

#[test]
fn complete_outside_submitted_changes_nothing() {
    let mut f = filled_form();
    f.open(None);
    let before = f.clone();
    assert!(!f.complete());
    assert_eq!(f, before);
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn fields_serialize_with_wire_names() {
    let fields = InquiryFields { service: "consulting".into(), ..InquiryFields::default() };
    let json = serde_json::to_value(&fields).unwrap();
    assert_eq!(json["serviceInterest"], "consulting");
    assert!(json.get("service").is_none());
}
