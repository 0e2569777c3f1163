use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut toasts = ToastState::default();
    let first = toasts.success("saved");
    let second = toasts.error("failed");
    assert!(second > first);
    assert_eq!(toasts.items.len(), 2);
    assert_eq!(toasts.items[0].kind, ToastKind::Success);
    assert_eq!(toasts.items[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut toasts = ToastState::default();
    let keep = toasts.success("keep");
    let drop = toasts.error("drop");
    toasts.dismiss(drop);
    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].id, keep);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut toasts = ToastState::default();
    toasts.success("hello");
    toasts.dismiss(999);
    assert_eq!(toasts.items.len(), 1);
}

#[test]
fn oldest_toasts_are_dropped_past_limit() {
    let mut toasts = ToastState::default();
    for i in 0..(MAX_TOASTS + 2) {
        toasts.success(format!("toast {i}"));
    }
    assert_eq!(toasts.items.len(), MAX_TOASTS);
    assert_eq!(toasts.items[0].message, "toast 2");
}
