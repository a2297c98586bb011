use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::test_support::{
    capture_logs, insert_leaderboard_row, json_request, read_json, setup_test_context,
    TestContext,
};

async fn send(
    ctx: &TestContext,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let response = ctx
        .app
        .clone()
        .oneshot(json_request(method, uri, body))
        .await
        .expect("response");
    let status = response.status();
    (status, read_json(response).await)
}

#[tokio::test]
async fn user_lifecycle() {
    let ctx = setup_test_context().await;

    let (status, body) = send(
        &ctx,
        Method::POST,
        "/users",
        Some(json!({
            "userid": 7,
            "username": "ada",
            "firstname": "Ada",
            "lastname": "Lovelace",
            "dateofbirth": "1815-12-10",
            "email": "ada@example.com",
            "city": "London",
            "state": "",
            "country": "UK"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "New user created successfully!");

    let (status, body) = send(&ctx, Method::GET, "/users/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["username"], "ada");
    assert_eq!(body[0]["dateofbirth"], "1815-12-10");

    let (status, _) = send(
        &ctx,
        Method::PUT,
        "/users/7",
        Some(json!({ "username": "countess", "city": "Surrey" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&ctx, Method::GET, "/users/7", None).await;
    assert_eq!(body[0]["username"], "countess");
    assert_eq!(body[0]["city"], "Surrey");

    let (status, body) = send(&ctx, Method::DELETE, "/users/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User with ID 7 deleted successfully!");

    let (status, body) = send(&ctx, Method::GET, "/users/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn missing_rows_return_not_found_on_writes() {
    let ctx = setup_test_context().await;

    let (status, body) = send(
        &ctx,
        Method::PUT,
        "/quizzes/999",
        Some(json!({ "quizid": 1000, "question": "q", "answer": "a" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "No quiz found with the given question number.");

    let (status, _) = send(&ctx, Method::DELETE, "/users/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&ctx, Method::DELETE, "/answers/1/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_key_is_a_bad_request() {
    let ctx = setup_test_context().await;

    let admin = json!({ "userid": 3, "admin": "Yes" });
    let (status, _) = send(&ctx, Method::POST, "/admins", Some(admin.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&ctx, Method::POST, "/admins", Some(admin)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["error"], "Failed to add admin");
}

#[tokio::test]
async fn admin_flag_round_trips() {
    let ctx = setup_test_context().await;

    send(&ctx, Method::POST, "/admins", Some(json!({ "userid": 5, "admin": "No" }))).await;
    let (status, _) =
        send(&ctx, Method::PUT, "/admins/5", Some(json!({ "admin": "Yes" }))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&ctx, Method::GET, "/admins/5", None).await;
    assert_eq!(body, json!([{ "userid": 5, "admin": "Yes" }]));
}

#[tokio::test]
async fn classroom_create_returns_generated_id() {
    let ctx = setup_test_context().await;

    let (status, body) = send(
        &ctx,
        Method::POST,
        "/classrooms",
        Some(json!({ "moderatorid": 1, "quizid": 1000, "quiztaker": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_i64().expect("generated id");

    let (_, body) = send(&ctx, Method::GET, &format!("/classrooms/{id}"), None).await;
    assert_eq!(body[0]["id"], id);
    assert_eq!(body[0]["quiztaker"], 2);
}

#[tokio::test]
async fn quizid_lookup_is_by_moderator() {
    let ctx = setup_test_context().await;

    for (quizid, moderator, name) in [(1000, 1, "Algebra"), (2000, 1, "Chemistry"), (3000, 2, "Other")] {
        let (status, _) = send(
            &ctx,
            Method::POST,
            "/quizid",
            Some(json!({ "quizid": quizid, "moderator": moderator, "quizname": name })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&ctx, Method::GET, "/quizid/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> =
        body.as_array().expect("array").iter().filter_map(|row| row["quizname"].as_str()).collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Algebra"));
    assert!(names.contains(&"Chemistry"));

    let (status, _) = send(&ctx, Method::DELETE, "/quizid/3000", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&ctx, Method::GET, "/quizid/2", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn subject_listings_filter_by_quiz() {
    let ctx = setup_test_context().await;

    for (quizid, question) in [(1000, "2 + 2?"), (2000, "Symbol for sodium?"), (1000, "x * 0?")] {
        let (status, body) = send(
            &ctx,
            Method::POST,
            "/quizzes",
            Some(json!({ "quizid": quizid, "question": question, "a": "1", "b": "2", "answer": "b" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["id"].is_i64());
    }

    let (_, algebra) = send(&ctx, Method::GET, "/quizzes/algebra", None).await;
    assert_eq!(algebra.as_array().map(Vec::len), Some(2));
    assert!(algebra.as_array().expect("array").iter().all(|row| row["quizid"] == 1000));

    let (_, chemistry) = send(&ctx, Method::GET, "/quizzes/chemistry", None).await;
    assert_eq!(chemistry.as_array().map(Vec::len), Some(1));
    assert_eq!(chemistry[0]["question"], "Symbol for sodium?");
}

#[tokio::test]
async fn check_answer_ignores_case() {
    let ctx = setup_test_context().await;

    let (_, body) = send(
        &ctx,
        Method::POST,
        "/quizzes",
        Some(json!({ "quizid": 1000, "question": "2 + 2?", "a": "3", "b": "4", "answer": "b" })),
    )
    .await;
    let questionnumber = body["id"].as_i64().expect("question number");

    let (status, body) = send(
        &ctx,
        Method::POST,
        "/quizzes/check-answer",
        Some(json!({ "questionId": questionnumber, "userAnswer": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "correct": true }));

    let (_, body) = send(
        &ctx,
        Method::POST,
        "/quizzes/check-answer",
        Some(json!({ "questionId": questionnumber, "userAnswer": "a" })),
    )
    .await;
    assert_eq!(body, json!({ "correct": false }));

    let (status, body) = send(
        &ctx,
        Method::POST,
        "/quizzes/check-answer",
        Some(json!({ "questionId": questionnumber + 100, "userAnswer": "b" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn answers_are_keyed_by_quiz_and_question() {
    let ctx = setup_test_context().await;

    for (quizid, questionnumber) in [(1000, 1), (1000, 2), (2000, 1)] {
        let (status, _) = send(
            &ctx,
            Method::POST,
            "/answers",
            Some(json!({
                "quizid": quizid,
                "questionnumber": questionnumber,
                "question": "q",
                "answer": "a"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send(&ctx, Method::GET, "/answers/1000", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    let (status, _) = send(
        &ctx,
        Method::PUT,
        "/answers/1000/2",
        Some(json!({ "question": "q2", "answer": "c" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&ctx, Method::DELETE, "/answers/2000/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&ctx, Method::GET, "/answers/2000", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn subject_question_banks_are_separate() {
    let ctx = setup_test_context().await;

    let question = json!({
        "question": "Solve x + 1 = 2",
        "option_a": "0",
        "option_b": "1",
        "option_c": "2",
        "option_d": "3",
        "answer": "option_b"
    });
    let (status, body) =
        send(&ctx, Method::POST, "/algebra_questions", Some(question)).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_i64().expect("generated id");

    let (_, algebra) = send(&ctx, Method::GET, &format!("/algebra_questions/{id}"), None).await;
    assert_eq!(algebra[0]["option_b"], "1");

    let (_, chemistry) = send(&ctx, Method::GET, "/chemistry_questions", None).await;
    assert_eq!(chemistry, json!([]));

    let (status, _) = send(&ctx, Method::DELETE, &format!("/chemistry_questions/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_responses_round_trip() {
    let ctx = setup_test_context().await;

    let (_, body) = send(
        &ctx,
        Method::POST,
        "/user_responses",
        Some(json!({ "user_id": 7, "question_id": 3, "selected_option": "c" })),
    )
    .await;
    let response_id = body["id"].as_i64().expect("generated id");

    let (status, _) = send(
        &ctx,
        Method::PUT,
        &format!("/user_responses/{response_id}"),
        Some(json!({ "user_id": 7, "question_id": 3, "selected_option": "d" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&ctx, Method::GET, &format!("/user_responses/{response_id}"), None).await;
    assert_eq!(body[0]["selected_option"], "d");
}

#[tokio::test]
async fn credential_check_reports_matches() {
    let ctx = setup_test_context().await;

    send(&ctx, Method::POST, "/users", Some(json!({ "userid": 11, "username": "grace" }))).await;
    let (status, _) = send(
        &ctx,
        Method::POST,
        "/authentication",
        Some(json!({ "userid": 11, "password": "cobol" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) =
        send(&ctx, Method::POST, "/cred", Some(json!({ "userID": 11, "password": "cobol" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Valid credential");
    assert_eq!(body["result"][0]["username"], "grace");

    let (status, body) =
        send(&ctx, Method::POST, "/cred", Some(json!({ "userid": 11, "password": "fortran" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid credential");
    assert_eq!(body["result"], json!([]));
}

#[tokio::test]
async fn leaderboard_is_ranked_by_score() {
    let ctx = setup_test_context().await;
    let pool = ctx.state.db();

    insert_leaderboard_row(pool, 1, 1000, 10).await;
    insert_leaderboard_row(pool, 2, 1000, 30).await;
    insert_leaderboard_row(pool, 3, 1000, 20).await;

    let (status, body) = send(&ctx, Method::GET, "/leaderboard", None).await;
    assert_eq!(status, StatusCode::OK);
    let scores: Vec<i64> =
        body.as_array().expect("array").iter().filter_map(|row| row["score"].as_i64()).collect();
    assert_eq!(scores, vec![30, 20, 10]);
}

#[tokio::test]
async fn healthz_reports_database() {
    let ctx = setup_test_context().await;

    let (status, body) = send(&ctx, Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["components"]["database"], "healthy");
}

enum ResourceKey {
    /// Key chosen by the client. Reads and writes may address it differently.
    Given { read: &'static str, write: &'static str },
    /// Key returned as `id` by the create call.
    Generated,
}

struct Resource {
    collection: &'static str,
    key: ResourceKey,
    missing: &'static str,
    create: Value,
    update: Value,
    field: &'static str,
}

fn subject_question(question: &str) -> Value {
    json!({
        "question": question,
        "option_a": "H2O",
        "option_b": "CO2",
        "option_c": "NaCl",
        "option_d": "O2",
        "answer": "option_a"
    })
}

fn crud_resources() -> Vec<Resource> {
    vec![
        Resource {
            collection: "users",
            key: ResourceKey::Given { read: "22", write: "22" },
            missing: "9999",
            create: json!({ "userid": 22, "username": "linus" }),
            update: json!({ "username": "torvalds" }),
            field: "username",
        },
        Resource {
            collection: "admins",
            key: ResourceKey::Given { read: "22", write: "22" },
            missing: "9999",
            create: json!({ "userid": 22, "admin": "No" }),
            update: json!({ "admin": "Yes" }),
            field: "admin",
        },
        Resource {
            collection: "authentication",
            key: ResourceKey::Given { read: "22", write: "22" },
            missing: "9999",
            create: json!({ "userid": 22, "password": "first" }),
            update: json!({ "password": "second" }),
            field: "password",
        },
        Resource {
            collection: "classrooms",
            key: ResourceKey::Generated,
            missing: "9999",
            create: json!({ "moderatorid": 1, "quizid": 1000, "quiztaker": 2 }),
            update: json!({ "moderatorid": 1, "quizid": 1000, "quiztaker": 5 }),
            field: "quiztaker",
        },
        Resource {
            collection: "quizid",
            key: ResourceKey::Given { read: "9", write: "4000" },
            missing: "9999",
            create: json!({ "quizid": 4000, "moderator": 9, "quizname": "Physics" }),
            update: json!({ "moderator": 9, "quizname": "Mechanics" }),
            field: "quizname",
        },
        Resource {
            collection: "quizzes",
            key: ResourceKey::Generated,
            missing: "9999",
            create: json!({ "quizid": 1000, "question": "1 + 1?", "a": "2", "answer": "a" }),
            update: json!({ "quizid": 1000, "question": "2 + 2?", "a": "4", "answer": "a" }),
            field: "question",
        },
        Resource {
            collection: "answers",
            key: ResourceKey::Given { read: "1000", write: "1000/1" },
            missing: "9999/9999",
            create: json!({ "quizid": 1000, "questionnumber": 1, "question": "q", "answer": "a" }),
            update: json!({ "question": "q", "answer": "c" }),
            field: "answer",
        },
        Resource {
            collection: "user_responses",
            key: ResourceKey::Generated,
            missing: "9999",
            create: json!({ "user_id": 7, "question_id": 3, "selected_option": "a" }),
            update: json!({ "user_id": 7, "question_id": 3, "selected_option": "b" }),
            field: "selected_option",
        },
        Resource {
            collection: "algebra_questions",
            key: ResourceKey::Generated,
            missing: "9999",
            create: subject_question("Solve x + 1 = 2"),
            update: subject_question("Solve x + 2 = 4"),
            field: "question",
        },
        Resource {
            collection: "chemistry_questions",
            key: ResourceKey::Generated,
            missing: "9999",
            create: subject_question("Formula of water?"),
            update: subject_question("Formula of table salt?"),
            field: "question",
        },
    ]
}

#[tokio::test]
async fn every_resource_supports_the_full_lifecycle() {
    let ctx = setup_test_context().await;

    for resource in crud_resources() {
        let name = resource.collection;
        let collection = format!("/{name}");

        let (status, body) =
            send(&ctx, Method::POST, &collection, Some(resource.create.clone())).await;
        assert_eq!(status, StatusCode::OK, "{name} create: {body}");
        assert!(body["message"].is_string(), "{name} create: {body}");

        let (read, write) = match resource.key {
            ResourceKey::Given { read, write } => {
                (format!("{collection}/{read}"), format!("{collection}/{write}"))
            }
            ResourceKey::Generated => {
                let id = body["id"].as_i64().unwrap_or_else(|| panic!("{name} id: {body}"));
                (format!("{collection}/{id}"), format!("{collection}/{id}"))
            }
        };

        let (status, body) = send(&ctx, Method::GET, &read, None).await;
        assert_eq!(status, StatusCode::OK, "{name} read");
        assert_eq!(body.as_array().map(Vec::len), Some(1), "{name} read: {body}");
        assert_eq!(body[0][resource.field], resource.create[resource.field], "{name} read");

        let (status, body) = send(&ctx, Method::PUT, &write, Some(resource.update.clone())).await;
        assert_eq!(status, StatusCode::OK, "{name} update: {body}");

        let (_, body) = send(&ctx, Method::GET, &read, None).await;
        assert_eq!(body[0][resource.field], resource.update[resource.field], "{name} re-read");

        let (status, body) = send(&ctx, Method::DELETE, &write, None).await;
        assert_eq!(status, StatusCode::OK, "{name} delete: {body}");

        let (status, body) = send(&ctx, Method::GET, &read, None).await;
        assert_eq!(status, StatusCode::OK, "{name} read after delete");
        assert_eq!(body, json!([]), "{name} read after delete");

        let missing = format!("{collection}/{}", resource.missing);
        let (status, body) =
            send(&ctx, Method::PUT, &missing, Some(resource.update.clone())).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{name} update missing: {body}");
        assert_eq!(body["status"], 404, "{name} update missing");

        let (status, body) = send(&ctx, Method::DELETE, &missing, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{name} delete missing: {body}");
    }
}

#[tokio::test]
async fn writes_log_the_affected_key() {
    let ctx = setup_test_context().await;
    let (logs, _guard) = capture_logs();

    let (_, body) = send(
        &ctx,
        Method::POST,
        "/classrooms",
        Some(json!({ "moderatorid": 1, "quizid": 1000, "quiztaker": 2 })),
    )
    .await;
    let classroom = body["id"].as_i64().expect("classroom id");
    send(
        &ctx,
        Method::PUT,
        &format!("/classrooms/{classroom}"),
        Some(json!({ "moderatorid": 1, "quizid": 1000, "quiztaker": 3 })),
    )
    .await;

    send(
        &ctx,
        Method::POST,
        "/answers",
        Some(json!({ "quizid": 1000, "questionnumber": 4, "answer": "a" })),
    )
    .await;
    send(&ctx, Method::PUT, "/answers/1000/4", Some(json!({ "answer": "b" }))).await;

    let (_, body) = send(
        &ctx,
        Method::POST,
        "/user_responses",
        Some(json!({ "user_id": 1, "question_id": 2, "selected_option": "a" })),
    )
    .await;
    let response_id = body["id"].as_i64().expect("response id");
    send(&ctx, Method::DELETE, &format!("/user_responses/{response_id}"), None).await;

    let output = logs.contents();
    for expected in [
        format!("classroom_id={classroom}"),
        "action=\"classroom_update\"".to_string(),
        "action=\"answer_create\"".to_string(),
        "action=\"answer_update\"".to_string(),
        "questionnumber=4".to_string(),
        format!("response_id={response_id}"),
        "action=\"response_delete\"".to_string(),
    ] {
        assert!(output.contains(&expected), "missing {expected} in {output}");
    }
}
