//! Contact form end-to-end flows
//!
//! Drives `UiState` through the same event sequence the browser produces
//! (keystrokes, blur, submit, timer) and checks state plus emitted commands.

use portfolio_ui::form::{Field, FieldError, FieldStatus};
use portfolio_ui::{AppCommand, AppEvent, PageModel, Theme, Timer, UiConfig, UiState};

fn new_state() -> UiState {
    UiState::new(UiConfig::default(), PageModel::default(), Theme::Light)
}

fn type_into(ui: &mut UiState, field: Field, value: &str) {
    ui.handle_event(AppEvent::FieldInput {
        field,
        value: value.to_string(),
    });
}

fn no_errors(ui: &UiState) -> bool {
    Field::ALL
        .iter()
        .all(|f| !ui.form.field(*f).status.is_invalid())
}

#[test]
fn test_valid_submission_disables_then_restores() {
    let mut ui = new_state();
    type_into(&mut ui, Field::Name, "Al");
    type_into(&mut ui, Field::Email, "a@b.co");
    type_into(&mut ui, Field::Subject, "Hello there");
    type_into(&mut ui, Field::Message, "This is a message");

    let commands = ui.handle_event(AppEvent::FormSubmitted { values: Vec::new() });
    assert!(ui.submit_disabled(), "submit should disable immediately");
    assert_eq!(
        commands,
        vec![AppCommand::Schedule {
            timer: Timer::SubmitComplete,
            delay_ms: 1500
        }]
    );
    assert!(no_errors(&ui));

    let commands = ui.handle_event(AppEvent::TimerFired(Timer::SubmitComplete));
    assert!(!ui.submit_disabled());
    assert_eq!(
        commands,
        vec![
            AppCommand::ShowNotice(
                "Thank you for your message! I'll get back to you soon.".to_string()
            ),
            AppCommand::ResetForm,
        ]
    );
    for field in Field::ALL {
        let state = ui.form.field(field);
        assert!(state.value.is_empty(), "{:?} not cleared", field);
        assert_eq!(state.status, FieldStatus::Untouched);
    }
}

#[test]
fn test_empty_message_blocks_submission() {
    let mut ui = new_state();
    type_into(&mut ui, Field::Name, "Al");
    type_into(&mut ui, Field::Email, "a@b.co");
    type_into(&mut ui, Field::Subject, "Hello there");

    let commands = ui.handle_event(AppEvent::FormSubmitted { values: Vec::new() });

    assert!(!ui.submit_disabled());
    assert_eq!(
        ui.form.field(Field::Message).status,
        FieldStatus::Invalid(FieldError::Required(Field::Message))
    );
    assert_eq!(
        ui.form.field(Field::Message).status.message(),
        "Message is required"
    );
    for field in [Field::Name, Field::Email, Field::Subject] {
        assert_eq!(ui.form.field(field).status, FieldStatus::Valid);
    }
    assert_eq!(
        commands,
        vec![
            AppCommand::FocusField(Field::Message),
            AppCommand::CenterField(Field::Message),
        ]
    );
}

#[test]
fn test_focus_goes_to_first_invalid_in_field_order() {
    let mut ui = new_state();
    type_into(&mut ui, Field::Name, "Al");
    type_into(&mut ui, Field::Email, "not-an-email");
    type_into(&mut ui, Field::Subject, "Hi");

    let commands = ui.handle_event(AppEvent::FormSubmitted { values: Vec::new() });
    assert_eq!(commands[0], AppCommand::FocusField(Field::Email));
    assert!(ui.form.field(Field::Subject).status.is_invalid());
    assert!(ui.form.field(Field::Message).status.is_invalid());
}

#[test]
fn test_blur_flags_and_typing_clears() {
    let mut ui = new_state();
    type_into(&mut ui, Field::Email, "a@b");
    assert_eq!(ui.form.field(Field::Email).status, FieldStatus::Untouched);

    ui.handle_event(AppEvent::FieldBlurred {
        field: Field::Email,
        value: "a@b".to_string(),
    });
    assert_eq!(
        ui.form.field(Field::Email).status.message(),
        "Please enter a valid email address"
    );

    type_into(&mut ui, Field::Email, "a@b.");
    assert!(ui.form.field(Field::Email).status.is_invalid());

    type_into(&mut ui, Field::Email, "a@b.c");
    assert_eq!(ui.form.field(Field::Email).status, FieldStatus::Valid);
}

#[test]
fn test_resubmit_while_pending_is_ignored() {
    let mut ui = new_state();
    type_into(&mut ui, Field::Name, "Al");
    type_into(&mut ui, Field::Email, "a@b.co");
    type_into(&mut ui, Field::Subject, "Hello there");
    type_into(&mut ui, Field::Message, "This is a message");

    ui.handle_event(AppEvent::FormSubmitted { values: Vec::new() });
    let again = ui.handle_event(AppEvent::FormSubmitted { values: Vec::new() });
    assert!(again.is_empty(), "second submit must not schedule another send");
    assert!(ui.submit_disabled());
}

#[test]
fn test_custom_delay_and_notice_from_config() {
    let config = UiConfig::from_json(
        r#"{ "submit_delay_ms": 10, "confirmation_notice": "Sent!" }"#,
    )
    .unwrap();
    let mut ui = UiState::new(config, PageModel::default(), Theme::Light);
    type_into(&mut ui, Field::Name, "Al");
    type_into(&mut ui, Field::Email, "a@b.co");
    type_into(&mut ui, Field::Subject, "Hello there");
    type_into(&mut ui, Field::Message, "This is a message");

    assert_eq!(
        ui.handle_event(AppEvent::FormSubmitted { values: Vec::new() }),
        vec![AppCommand::Schedule {
            timer: Timer::SubmitComplete,
            delay_ms: 10
        }]
    );
    let commands = ui.handle_event(AppEvent::TimerFired(Timer::SubmitComplete));
    assert_eq!(commands[0], AppCommand::ShowNotice("Sent!".to_string()));
}

#[test]
fn test_autofilled_values_validate_without_typing() {
    let mut ui = new_state();

    ui.handle_event(AppEvent::FieldBlurred {
        field: Field::Name,
        value: "Alice".to_string(),
    });
    assert_eq!(ui.form.field(Field::Name).status, FieldStatus::Valid);

    let commands = ui.handle_event(AppEvent::FormSubmitted {
        values: vec![
            (Field::Name, "Alice".to_string()),
            (Field::Email, "alice@example.com".to_string()),
            (Field::Subject, "Hello there".to_string()),
            (Field::Message, "Restored from the last visit".to_string()),
        ],
    });
    assert!(ui.submit_disabled());
    assert!(no_errors(&ui));
    assert_eq!(
        commands,
        vec![AppCommand::Schedule {
            timer: Timer::SubmitComplete,
            delay_ms: 1500
        }]
    );
}

#[test]
fn test_form_without_subject_still_submits() {
    let page = PageModel {
        form_fields: vec![Field::Name, Field::Email, Field::Message],
        ..PageModel::default()
    };
    let mut ui = UiState::new(UiConfig::default(), page, Theme::Light);

    let commands = ui.handle_event(AppEvent::FormSubmitted {
        values: vec![
            (Field::Name, "Al".to_string()),
            (Field::Email, "a@b.co".to_string()),
            (Field::Message, "This is a message".to_string()),
        ],
    });
    assert!(ui.submit_disabled());
    assert_eq!(ui.form.field(Field::Subject).status, FieldStatus::Untouched);
    assert_eq!(
        commands,
        vec![AppCommand::Schedule {
            timer: Timer::SubmitComplete,
            delay_ms: 1500
        }]
    );
}

#[test]
fn test_cleared_field_flags_on_blur() {
    let mut ui = new_state();
    type_into(&mut ui, Field::Subject, "Hello there");
    ui.handle_event(AppEvent::FieldBlurred {
        field: Field::Subject,
        value: "Hello there".to_string(),
    });
    assert_eq!(ui.form.field(Field::Subject).status, FieldStatus::Valid);

    type_into(&mut ui, Field::Subject, "");
    assert_eq!(ui.form.field(Field::Subject).status, FieldStatus::Valid);

    ui.handle_event(AppEvent::FieldBlurred {
        field: Field::Subject,
        value: String::new(),
    });
    assert_eq!(
        ui.form.field(Field::Subject).status.message(),
        "Subject is required"
    );
}
