use super::*;

// =============================================================
// Habit
// =============================================================

#[test]
fn habit_reads_backend_id_field() {
    let habit: Habit = serde_json::from_value(serde_json::json!({
        "_id": "h-1",
        "name": "Read",
        "description": "20 pages",
        "streak": 4,
        "user": "u-1",
        "__v": 0
    }))
    .unwrap();
    assert_eq!(habit.id, "h-1");
    assert_eq!(habit.name, "Read");
    assert_eq!(habit.description, "20 pages");
    assert_eq!(habit.streak, 4);
}

#[test]
fn habit_defaults_missing_description_and_streak() {
    let habit: Habit = serde_json::from_value(serde_json::json!({ "_id": "h-2", "name": "Walk" })).unwrap();
    assert_eq!(habit.description, "");
    assert_eq!(habit.streak, 0);
}

#[test]
fn habit_serializes_id_back_to_backend_name() {
    let habit = Habit {
        id: "h-3".to_owned(),
        name: "Stretch".to_owned(),
        description: String::new(),
        streak: 1,
    };
    let value = serde_json::to_value(&habit).unwrap();
    assert_eq!(value["_id"], "h-3");
    assert!(value.get("id").is_none());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn new_habit_serializes_name_and_description() {
    let body = NewHabit { name: "Meditate".to_owned(), description: "10 min".to_owned() };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "name": "Meditate", "description": "10 min" })
    );
}

#[test]
fn register_request_serializes_all_fields() {
    let body = RegisterRequest {
        username: "alice".to_owned(),
        email: "a@example.com".to_owned(),
        password: "pw".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "username": "alice", "email": "a@example.com", "password": "pw" })
    );
}

// =============================================================
// Responses
// =============================================================

#[test]
fn current_user_defaults_missing_scores() {
    let user: CurrentUser = serde_json::from_value(serde_json::json!({ "username": "alice" })).unwrap();
    assert_eq!(user, CurrentUser::default());
}

#[test]
fn completion_carries_updated_habit_and_scores() {
    let completion: Completion = serde_json::from_value(serde_json::json!({
        "habit": { "_id": "h-1", "name": "Read", "streak": 5 },
        "points": 60,
        "badges": ["Starter", "5-Day Streak"]
    }))
    .unwrap();
    assert_eq!(completion.habit.streak, 5);
    assert_eq!(completion.points, 60);
    assert_eq!(completion.badges, vec!["Starter".to_owned(), "5-Day Streak".to_owned()]);
}

#[test]
fn error_body_tolerates_missing_msg() {
    let body: ErrorBody = serde_json::from_value(serde_json::json!({ "error": "nope" })).unwrap();
    assert_eq!(body.msg, None);
    let body: ErrorBody = serde_json::from_value(serde_json::json!({ "msg": "Invalid credentials" })).unwrap();
    assert_eq!(body.msg.as_deref(), Some("Invalid credentials"));
}
