mod common;

use common::*;
use core_actions::handle_key;
use core_text::EditError;

#[test]
fn entering_visual_anchors_empty_selection() {
    let mut st = gap_session("abcdef");
    handle_key(&mut st, &kc('h')).unwrap();
    handle_key(&mut st, &kc('v')).unwrap();
    assert!(st.selection.is_active());
    assert_eq!(st.selection.range().unwrap(), (5, 5));
}

#[test]
fn motions_extend_active_end_in_both_directions() {
    let mut st = gap_session("abcdef");
    feed(&mut st, &[kc('h'), kc('h'), kc('h'), kc('v')]);
    assert_eq!(st.selection.anchor(), Some(3));
    feed(&mut st, &[kc('l'), kc('l')]);
    assert_eq!(st.selection.range().unwrap(), (3, 5));
    feed(&mut st, &[kc('h'), kc('h'), kc('h'), kc('h')]);
    assert_eq!(st.selection.range().unwrap(), (1, 3));
    assert_eq!(st.selection.selected_text(&st.store).unwrap(), "bc");
}

#[test]
fn selection_spans_lines() {
    let mut st = gap_session("ab\ncd");
    feed(&mut st, &[kc('v'), kc('k')]);
    assert_eq!(st.selection.range().unwrap(), (2, 5));
    assert_eq!(st.selection.selected_text(&st.store).unwrap(), "\ncd");
}

#[test]
fn leaving_visual_discards_selection() {
    let mut st = gap_session("abcdef");
    feed(&mut st, &[kc('v'), kc('h'), esc()]);
    assert!(!st.selection.is_active());
    assert!(matches!(
        st.selection.range(),
        Err(EditError::InvalidRange(_))
    ));
}

#[test]
fn reentering_visual_starts_fresh() {
    let mut st = gap_session("abcdef");
    feed(&mut st, &[kc('v'), kc('h'), kc('h'), esc(), kc('v')]);
    assert_eq!(st.selection.range().unwrap(), (4, 4));
}

#[test]
fn insert_mode_has_no_selection() {
    let mut st = gap_session("abc");
    feed(&mut st, &[kc('i'), kc('x'), esc()]);
    assert!(!st.selection.is_active());
}
