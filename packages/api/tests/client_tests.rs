#![allow(clippy::disallowed_methods)]

mod common;

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

use admin_core::{
    InvalidationReason, JobPost, NotificationDraft, PagedList, ProcessWithdrawal, RecipientList,
    SessionEvent, TransactionFilter, WithdrawalAction, WithdrawalStatus,
};
use api::{ApiError, Method};
use serde_json::json;

use common::{MockTransport, TOKEN, anonymous_client, signed_in_client};

fn job_page(page: u32, total: u32) -> serde_json::Value {
    json!({
        "jobPosts": [
            { "_id": format!("job-{page}-a"), "jobRole": "Engineer" },
            { "_id": format!("job-{page}-b"), "jobRole": "Designer" }
        ],
        "currentPage": page,
        "totalPages": total
    })
}

#[tokio::test]
async fn test_page_requests_carry_bearer_and_page() -> Result<(), Box<dyn Error>> {
    let mock = MockTransport::new();
    mock.respond_page("/adminjob/jobs", 3, job_page(3, 4));
    let client = signed_in_client(&mock);

    let page = client.jobs(3).await?;
    assert_eq!(page.current_page, 3);

    let request = mock.last_request().ok_or("no request recorded")?;
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, format!("{}/adminjob/jobs", common::BASE_URL));
    assert_eq!(request.authorization(), Some(format!("Bearer {TOKEN}")));
    assert!(request.query.contains(&("page".to_string(), "3".to_string())));
    Ok(())
}

#[tokio::test]
async fn test_every_endpoint_sends_the_token() -> Result<(), Box<dyn Error>> {
    let mock = MockTransport::new();
    let client = signed_in_client(&mock);

    // Unscripted routes answer 404; only the headers matter here.
    let _ = client.users(1).await;
    let _ = client.job("j1").await;
    let _ = client.jobs_by_user("u1").await;
    let _ = client.applicant_statuses(1).await;
    let _ = client.withdrawals().await;
    let _ = client.contact_messages().await;
    let _ = client.wallet("u1").await;
    let _ = client.wallet_transactions("u1").await;

    let requests = mock.requests();
    assert_eq!(requests.len(), 8);
    assert!(
        requests
            .iter()
            .all(|r| r.authorization().as_deref() == Some("Bearer test-token"))
    );
    Ok(())
}

#[tokio::test]
async fn test_paged_list_follows_backend_pages() -> Result<(), Box<dyn Error>> {
    let mock = MockTransport::new();
    for page in 1..=3 {
        mock.respond_page("/adminuser/users", page, json!({
            "users": [{ "_id": format!("u{page}"), "email": format!("u{page}@acme.io") }],
            "currentPage": page,
            "totalPages": 3
        }));
    }
    let client = signed_in_client(&mock);

    let mut list = PagedList::new();
    list.apply(client.users(1).await);
    for page in [2, 3, 1] {
        let Some(page) = list.request(page) else {
            return Err("in-range page refused".into());
        };
        list.begin();
        list.apply(client.users(page).await);
        assert_eq!(list.rows().len(), 1);
        assert_eq!(list.rows()[0].id, format!("u{page}"));
        assert_eq!(list.pagination().current(), page);
    }

    let sent = mock.requests().len();
    assert_eq!(list.request(0), None);
    assert_eq!(list.request(4), None);
    assert_eq!(mock.requests().len(), sent);
    Ok(())
}

#[tokio::test]
async fn test_bare_array_is_a_single_page() -> Result<(), Box<dyn Error>> {
    let mock = MockTransport::new();
    mock.respond(
        Method::Get,
        "/adminjob/user/u9",
        200,
        json!([{ "_id": "a" }, { "_id": "b" }, { "_id": "c" }]),
    );
    let client = signed_in_client(&mock);

    let jobs = client.jobs_by_user("u9").await?;
    assert_eq!(jobs.len(), 3);

    mock.respond(Method::Get, "/adminjob/user/u10", 200, json!([]));
    assert!(client.jobs_by_user("u10").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_unauthorized_ends_the_session() -> Result<(), Box<dyn Error>> {
    let mock = MockTransport::new();
    mock.respond(Method::Get, "/adminwallet/userwithdrawals", 401, json!({ "message": "jwt expired" }));
    let client = signed_in_client(&mock);

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    client.session().subscribe(move |e| sink.borrow_mut().push(e.clone()));

    let err = client.withdrawals().await.err();
    assert_eq!(err, Some(ApiError::Unauthorized));
    assert!(!client.session().is_authenticated());
    assert_eq!(
        *events.borrow(),
        vec![SessionEvent::Invalidated {
            reason: InvalidationReason::Rejected
        }]
    );

    // No token left: the next call never reaches the network.
    let before = mock.requests().len();
    assert_eq!(client.contact_messages().await.err(), Some(ApiError::MissingToken));
    assert_eq!(mock.requests().len(), before);
    Ok(())
}

#[tokio::test]
async fn test_error_messages_fall_back_in_order() -> Result<(), Box<dyn Error>> {
    let mock = MockTransport::new();
    mock.respond(Method::Get, "/adminjob/jobdetail/gone", 404, json!({ "message": "Job not found" }));
    mock.respond(Method::Post, "/notification/send", 400, json!({ "error": "userIds must be an array" }));
    mock.respond(Method::Get, "/contact/getmsg", 500, json!({}));
    mock.fail(Method::Get, "/adminuser/users");
    let client = signed_in_client(&mock);

    let err = client.job("gone").await.err().ok_or("expected failure")?;
    assert_eq!(err.to_string(), "Job not found");

    let draft = NotificationDraft {
        message: "Hello".to_string(),
        ..Default::default()
    };
    let err = client
        .send_notification(&draft.to_request()?)
        .await
        .err()
        .ok_or("expected failure")?;
    assert_eq!(err.to_string(), "userIds must be an array");

    let err = client.contact_messages().await.err().ok_or("expected failure")?;
    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: "Failed to fetch messages".to_string()
        }
    );

    let mut list = PagedList::new();
    list.apply(
        client
            .users(1)
            .await
            .map_err(|e| e.message_or("Failed to fetch users")),
    );
    assert!(list.rows().is_empty());
    assert_eq!(list.error(), Some("Failed to fetch users"));
    Ok(())
}

#[tokio::test]
async fn test_job_update_round_trips_unknown_fields() -> Result<(), Box<dyn Error>> {
    let mock = MockTransport::new();
    mock.respond(
        Method::Get,
        "/adminjob/jobdetail/j1",
        200,
        json!({ "jobPost": {
            "_id": "j1",
            "jobRole": "SRE",
            "endDate": "2030-01-31T00:00:00.000Z",
            "applicants": ["u1", "u2"]
        }}),
    );
    mock.respond(Method::Put, "/adminjob/jobs/j1", 200, json!({ "message": "Job updated" }));
    let client = signed_in_client(&mock);

    let mut job = client.job("j1").await?;
    job.job_role = "Senior SRE".to_string();
    let ack = client.update_job(&job).await?;
    assert_eq!(ack.message_or("Saved"), "Job updated");

    let sent = mock.last_request().ok_or("no request recorded")?;
    let body = sent.body.ok_or("update sent no body")?;
    assert_eq!(body["jobRole"], "Senior SRE");
    assert_eq!(body["applicants"], json!(["u1", "u2"]));
    Ok(())
}

#[tokio::test]
async fn test_update_job_failure_carries_backend_message() -> Result<(), Box<dyn Error>> {
    let mock = MockTransport::new();
    mock.respond(Method::Put, "/adminjob/jobs/j1", 400, json!({ "message": "End date is in the past" }));
    let client = signed_in_client(&mock);

    let job = JobPost {
        id: "j1".to_string(),
        job_role: "SRE".to_string(),
        ..JobPost::default()
    };
    let err = client.update_job(&job).await.err().ok_or("update should fail")?;
    assert_eq!(err.message_or("Failed to update job"), "End date is in the past");
    Ok(())
}

#[tokio::test]
async fn test_create_job_requires_fields_before_sending() -> Result<(), Box<dyn Error>> {
    let mock = MockTransport::new();
    mock.respond(Method::Post, "/adminjob/create-job", 201, json!({ "message": "Job created" }));
    let client = signed_in_client(&mock);

    let mut job = JobPost::default();
    assert!(job.validate_for_create().is_err());

    job.user_id = Some("u1".to_string());
    job.job_role = "Analyst".to_string();
    job.job_unique_id = "AN-1".to_string();
    job.end_date = "2030-01-01".to_string();
    job.job_link = "https://acme.io/jobs/an-1".to_string();
    job.experience_required = Some(1);
    job.no_of_referrals = Some(2);
    job.validate_for_create()?;
    client.create_job(&job).await?;

    let body = mock
        .last_request()
        .and_then(|r| r.body)
        .ok_or("create sent no body")?;
    assert_eq!(body["userId"], "u1");
    assert_eq!(body["noOfReferrals"], 2);
    assert!(body.get("_id").is_none());
    Ok(())
}

#[tokio::test]
async fn test_approving_a_pending_withdrawal_refreshes_it() -> Result<(), Box<dyn Error>> {
    let mock = MockTransport::new();
    let row = |status: &str| {
        json!({ "withdrawals": [
            { "transactionId": "tx1", "upiId": "a@upi", "amount": 250, "status": status },
            { "transactionId": "tx2", "upiId": "b@upi", "amount": 90, "status": "failed" }
        ]})
    };
    mock.respond(Method::Get, "/adminwallet/userwithdrawals", 200, row("pending"));
    mock.respond(Method::Get, "/adminwallet/userwithdrawals", 200, row("success"));
    mock.respond(
        Method::Post,
        "/adminwallet/userwithdraw/process",
        200,
        json!({ "message": "Withdrawal approved successfully" }),
    );
    let client = signed_in_client(&mock);

    let before = client.withdrawals().await?;
    let actionable: Vec<_> = before.iter().filter(|w| w.is_actionable()).collect();
    assert_eq!(actionable.len(), 1);

    let process = ProcessWithdrawal {
        transaction_id: actionable[0].transaction_id.clone(),
        action: WithdrawalAction::Approve,
        description: String::new(),
    };
    client.process_withdrawal(&process).await?;
    let body = mock
        .last_request()
        .and_then(|r| r.body)
        .ok_or("process sent no body")?;
    assert_eq!(
        body,
        json!({ "transactionId": "tx1", "action": "approve", "description": "" })
    );

    let after = client.withdrawals().await?;
    assert_eq!(after[0].status, WithdrawalStatus::Success);
    assert!(after.iter().all(|w| !w.is_actionable()));
    Ok(())
}

#[tokio::test]
async fn test_wallet_overview_flattens_and_fails_together() -> Result<(), Box<dyn Error>> {
    let mock = MockTransport::new();
    mock.respond(
        Method::Get,
        "/adminwallet/userwallet/u1",
        200,
        json!({ "wallet": { "coins": 120, "blockedCoins": 30 } }),
    );
    mock.respond(
        Method::Get,
        "/adminwallet/userwallet/u1/transactions",
        200,
        json!({ "transactions": [
            { "_id": "t1", "userId": "u1", "history": [
                { "type": "reward", "amount": 100, "status": "success" },
                { "type": "withdraw", "amount": 20, "status": "pending", "balanceAfter": 80 }
            ]},
            { "_id": "t2", "userId": "u1", "history": [
                { "type": "Withdraw", "amount": 10, "status": "success" }
            ]}
        ]}),
    );
    let client = signed_in_client(&mock);

    let overview = client.wallet_overview("u1").await?;
    assert_eq!(overview.wallet.coins, 120.0);
    assert_eq!(overview.ledger.len(), 3);
    assert_eq!(TransactionFilter::Withdraw.apply(&overview.ledger).len(), 2);
    assert_eq!(TransactionFilter::All.apply(&overview.ledger), overview.ledger);

    mock.fail(Method::Get, "/adminwallet/userwallet/u2/transactions");
    mock.respond(Method::Get, "/adminwallet/userwallet/u2", 200, json!({ "wallet": {} }));
    let err = client.wallet_overview("u2").await.err().ok_or("expected failure")?;
    assert_eq!(err.message_or("Failed to load wallet data"), "Failed to load wallet data");
    Ok(())
}

#[tokio::test]
async fn test_email_and_notification_bodies() -> Result<(), Box<dyn Error>> {
    let mock = MockTransport::new();
    mock.respond(Method::Post, "/adminemail/send", 200, json!({ "message": "Email sent" }));
    mock.respond(Method::Post, "/notification/send", 200, json!({}));
    let client = signed_in_client(&mock);

    let mut recipients = RecipientList::new();
    recipients.add("a@b.com")?;
    recipients.add(" c@d.io ")?;
    client.send_email(&recipients.to_request("Open roles")?).await?;
    let body = mock
        .last_request()
        .and_then(|r| r.body)
        .ok_or("email sent no body")?;
    assert_eq!(
        body,
        json!({
            "to": ["a@b.com", "c@d.io"],
            "subject": "Open roles",
            "templateName": "share_referral.html",
            "replacements": {}
        })
    );

    let draft = NotificationDraft {
        message: "New jobs posted".to_string(),
        post_id: "  ".to_string(),
        user_ids: " u1, ,u2 ".to_string(),
    };
    let ack = client.send_notification(&draft.to_request()?).await?;
    assert_eq!(
        ack.message_or("Notifications sent successfully"),
        "Notifications sent successfully"
    );
    let body = mock
        .last_request()
        .and_then(|r| r.body)
        .ok_or("notification sent no body")?;
    assert_eq!(body, json!({ "message": "New jobs posted", "userIds": ["u1", "u2"] }));
    Ok(())
}

#[tokio::test]
async fn test_login_accepts_both_response_shapes() -> Result<(), Box<dyn Error>> {
    let mock = MockTransport::new();
    mock.respond(Method::Post, "/adminauth/login", 200, json!({ "token": "t1", "userId": "a1" }));
    mock.respond(
        Method::Post,
        "/adminauth/login",
        200,
        json!({ "token": "t2", "user": { "_id": "a2", "email": "root@acme.io" } }),
    );
    mock.respond(Method::Post, "/adminauth/login", 401, json!({ "message": "Invalid credentials" }));
    let client = anonymous_client(&mock);

    let first = client.login("root@acme.io", "pw").await?;
    assert_eq!(first.user_id.as_deref(), Some("a1"));
    assert_eq!(client.session().token().as_deref(), Some("t1"));

    let sent = mock.last_request().ok_or("no request recorded")?;
    assert_eq!(sent.bearer, None);
    assert_eq!(
        sent.body,
        Some(json!({ "email": "root@acme.io", "password": "pw" }))
    );

    let second = client.login("root@acme.io", "pw").await?;
    assert_eq!(second.user_id.as_deref(), Some("a2"));
    assert_eq!(client.session().user_id().as_deref(), Some("a2"));

    client.logout();
    let err = client.login("root@acme.io", "bad").await.err().ok_or("expected failure")?;
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(!client.session().is_authenticated());
    Ok(())
}
