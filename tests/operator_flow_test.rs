use chrono::NaiveDate;
use std::sync::Arc;

use shopfloor::api::Api;
use shopfloor::api::client::mock::{MockApi, MockCall};
use shopfloor::api::types::{MachineAssignmentRequest, OtpChallenge, VerifiedLogin};
use shopfloor::domain::assignment::{Assignment, EmployeeRef, Machine, MainItem};
use shopfloor::domain::employee::{Employee, Role};
use shopfloor::domain::login::{LoginFlow, LoginStep, is_valid_otp, is_valid_phone};
use shopfloor::domain::production_entry::{Shift, SubmissionDraft};
use shopfloor::session::{SessionStore, SessionUser};
use shopfloor::ui_dioxus::router::Route;
use shopfloor::ui_dioxus::state::RequestState;

fn sample_assignment() -> Assignment {
    Assignment {
        id: "a-1".to_string(),
        machine: Machine {
            id: "m-01".to_string(),
            name: "Extruder 2".to_string(),
        },
        main_item: MainItem {
            id: "i-07".to_string(),
            item_no: "3B-1042".to_string(),
            shift: "Day".to_string(),
            operator: "Asha".to_string(),
            helper: "Ravi".to_string(),
            company: "3B Profiles".to_string(),
        },
        employees: vec![
            EmployeeRef {
                id: "e-1".to_string(),
                name: "Asha".to_string(),
            },
            EmployeeRef {
                id: "e-2".to_string(),
                name: "Ravi".to_string(),
            },
        ],
    }
}

fn request_for(assignment: &Assignment, draft: &SubmissionDraft) -> MachineAssignmentRequest {
    let entry = draft
        .to_entry(assignment, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
        .unwrap();
    MachineAssignmentRequest {
        machine_id: assignment.machine.id.clone(),
        main_item_id: assignment.main_item.id.clone(),
        shift: entry.shift,
        employee_ids: assignment.employee_ids(),
        entry,
        photo: None,
    }
}

fn valid_draft() -> SubmissionDraft {
    SubmissionDraft {
        shift: Some(Shift::Day),
        frame_lengths_input: "100,200,300,400".to_string(),
        number_of_box: 2,
        box_weight: 12.5,
        frame_weight: 3.2,
        confirmed: true,
        ..SubmissionDraft::new()
    }
}

#[tokio::test]
async fn operator_logs_in_and_submits_a_production_entry() {
    let api = Arc::new(MockApi::new());
    api.set_send_otp(Ok(OtpChallenge {
        session_id: "sess-1".to_string(),
        employee_id: "emp-1".to_string(),
        message: "OTP sent.".to_string(),
    }));
    api.set_verify_otp(Ok(VerifiedLogin {
        employee: Employee {
            id: "emp-1".to_string(),
            name: "Asha".to_string(),
            role: Role::Operator,
        },
        auth_token: "sess-1".to_string(),
        message: "Login successful.".to_string(),
    }));
    api.set_assignments(vec![sample_assignment()]);
    api.set_assign_machine(Ok("Production entry saved.".to_string()));

    let session = SessionStore::in_memory();

    // Phone step
    let mut flow = LoginFlow::new();
    assert!(is_valid_phone("9876543210"));
    let challenge = api.send_otp("9876543210").await.unwrap();
    flow.otp_sent(challenge.session_id.clone(), challenge.employee_id.clone());
    assert_eq!(flow.step, LoginStep::AwaitingOtp);

    // OTP step: verified, session populated, routed to the operator dashboard
    assert!(is_valid_otp("123456"));
    let login = api
        .verify_otp(&challenge.session_id, "123456", "9876543210")
        .await
        .unwrap();
    assert_eq!(login.employee.role, Role::Operator);
    assert_eq!(
        Route::for_role(login.employee.role),
        Route::OperatorDashboard {}
    );
    session.login(SessionUser {
        employee_id: login.employee.id.clone(),
        name: login.employee.name.clone(),
        role: login.employee.role,
        auth_token: login.auth_token.clone(),
    });
    assert!(session.is_logged_in());

    // One assignment comes back for the logged-in employee
    let user = session.current().unwrap();
    let assignments = api.assignments_for_employee(&user.employee_id).await;
    assert_eq!(assignments.len(), 1);
    let assignment = &assignments[0];
    assert_eq!(assignment.machine.name, "Extruder 2");

    // Fill the form against that assignment and submit
    let message = api
        .assign_machine(request_for(assignment, &valid_draft()))
        .await
        .unwrap();
    assert_eq!(message, "Production entry saved.");

    // The list is fetched again after a successful submit
    let refreshed = api.assignments_for_employee(&user.employee_id).await;
    assert_eq!(refreshed.len(), 1);

    // Exactly one submission went over the wire, payload intact
    let calls = api.calls();
    assert_eq!(api.assign_machine_calls(), 1);
    let submission = calls
        .iter()
        .find(|c| matches!(c, MockCall::AssignMachine { .. }))
        .unwrap();
    if let MockCall::AssignMachine {
        machine_id,
        shift,
        production_json,
        has_photo,
    } = submission
    {
        assert_eq!(machine_id, "m-01");
        assert_eq!(shift, "Day");
        assert!(production_json.contains("\"frameLength\":[100,200,300,400]"));
        assert!(production_json.contains("\"boxWeight\":\"12.5kg\""));
        assert!(production_json.contains("\"description\":\"NA\""));
        assert!(!has_photo);
    }
}

#[tokio::test]
async fn invalid_drafts_never_reach_the_api() {
    let api = Arc::new(MockApi::new());
    api.set_assign_machine(Ok("saved".to_string()));
    let assignment = sample_assignment();

    // Unconfirmed, bad frame lengths, missing shift: all blocked client-side.
    let drafts = [
        SubmissionDraft {
            confirmed: false,
            ..valid_draft()
        },
        SubmissionDraft {
            frame_lengths_input: "455,45,452,454".to_string(),
            ..valid_draft()
        },
        SubmissionDraft {
            shift: None,
            ..valid_draft()
        },
    ];

    for draft in drafts {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert!(draft.to_entry(&assignment, date).is_err());
    }

    assert_eq!(api.assign_machine_calls(), 0);
}

#[tokio::test]
async fn second_submit_while_in_flight_is_refused() {
    let api = Arc::new(MockApi::new());
    api.set_assign_machine(Ok("saved".to_string()));
    api.set_assign_delay_ms(100);

    let assignment = sample_assignment();
    let mut submit_state = RequestState::Idle;

    // First click wins the guard and starts the request.
    assert!(submit_state.try_begin());
    let first = {
        let api = api.clone();
        let request = request_for(&assignment, &valid_draft());
        tokio::spawn(async move { api.assign_machine(request).await })
    };

    // A second click while the first is in flight must not start another.
    assert!(!submit_state.try_begin());

    first.await.unwrap().unwrap();
    submit_state = RequestState::Succeeded;
    assert!(!submit_state.is_pending());

    assert_eq!(api.assign_machine_calls(), 1);
}

#[tokio::test]
async fn failed_submit_keeps_the_form_retryable() {
    let api = Arc::new(MockApi::new());
    api.set_assign_machine(Err("Shift already recorded for this slot.".to_string()));

    let assignment = sample_assignment();
    let mut submit_state = RequestState::Idle;

    assert!(submit_state.try_begin());
    let err = api
        .assign_machine(request_for(&assignment, &valid_draft()))
        .await
        .unwrap_err();
    submit_state = RequestState::Failed(err.user_message());

    // The server's own message is what the user sees.
    assert_eq!(err.user_message(), "Shift already recorded for this slot.");

    // And the guard reopens for a manual retry.
    assert!(submit_state.try_begin());

    api.set_assign_machine(Ok("Production entry saved.".to_string()));
    let message = api
        .assign_machine(request_for(&assignment, &valid_draft()))
        .await
        .unwrap();
    assert_eq!(message, "Production entry saved.");
    assert_eq!(api.assign_machine_calls(), 2);
}

#[tokio::test]
async fn logout_clears_the_session() {
    let session = SessionStore::in_memory();
    session.login(SessionUser {
        employee_id: "emp-1".to_string(),
        name: "Asha".to_string(),
        role: Role::Operator,
        auth_token: "sess-1".to_string(),
    });
    assert!(session.is_logged_in());

    session.logout();
    assert!(session.current().is_none());
}
