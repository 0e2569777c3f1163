use super::*;

#[test]
fn validate_new_habit_trims_fields() {
    let draft = NewHabit { name: "  Read  ".to_owned(), description: " 20 pages ".to_owned() };
    assert_eq!(
        validate_new_habit(&draft),
        Ok(NewHabit { name: "Read".to_owned(), description: "20 pages".to_owned() })
    );
}

#[test]
fn validate_new_habit_allows_empty_description() {
    let draft = NewHabit { name: "Walk".to_owned(), description: String::new() };
    assert_eq!(validate_new_habit(&draft).map(|h| h.description), Ok(String::new()));
}

#[test]
fn validate_new_habit_requires_name() {
    let draft = NewHabit { name: "   ".to_owned(), description: "anything".to_owned() };
    assert_eq!(validate_new_habit(&draft), Err(NAME_REQUIRED_MESSAGE));
}

#[test]
fn completion_message_reports_points() {
    assert_eq!(completion_message(42), "Habit marked as completed! Points: 42");
}
