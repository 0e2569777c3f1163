use super::*;

#[test]
fn confetti_style_is_deterministic() {
    assert_eq!(confetti_style(5), confetti_style(5));
}

#[test]
fn confetti_style_first_piece() {
    assert_eq!(
        confetti_style(0),
        "left: 0%; animation-delay: 0ms; background-color: hsl(0, 85%, 55%);"
    );
}

#[test]
fn confetti_pieces_spread_horizontally() {
    let lefts: std::collections::HashSet<_> = (0..PIECES).map(|i| (i * 37) % 100).collect();
    assert!(lefts.len() > PIECES / 2);
    assert!(confetti_style(3).starts_with("left: 11%;"));
}
