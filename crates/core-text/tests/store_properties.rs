use core_text::{GapBuffer, RopeStore, TextStore};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z ]{0,40}",
        "[a-zA-Z0-9 .,\n]{0,120}",
        "[\u{0020}-\u{007E}\u{00A0}-\u{00FF}\u{4E00}-\u{4E20}\u{1F600}-\u{1F64F}\n]{0,60}",
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Move(usize),
    Insert(char),
    InsertText(String),
    Backspace,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..200).prop_map(Op::Move),
        prop_oneof![Just('\n'), Just('\u{E9}'), Just('\u{1F600}'), prop::char::range('a', 'z')]
            .prop_map(Op::Insert),
        "[a-z\n]{0,5}".prop_map(Op::InsertText),
        Just(Op::Backspace),
    ]
}

/// Naive reference: a char vector plus an edit point.
struct Model {
    chars: Vec<char>,
    point: usize,
}

impl Model {
    fn new(s: &str) -> Self {
        let chars: Vec<char> = s.chars().collect();
        let point = chars.len();
        Self { chars, point }
    }

    fn apply(&mut self, op: &Op) {
        match op {
            Op::Move(t) => self.point = (*t).min(self.chars.len()),
            Op::Insert(c) => {
                self.chars.insert(self.point, *c);
                self.point += 1;
            }
            Op::InsertText(s) => {
                for c in s.chars() {
                    self.chars.insert(self.point, c);
                    self.point += 1;
                }
            }
            Op::Backspace => {
                if self.point > 0 {
                    self.point -= 1;
                    self.chars.remove(self.point);
                }
            }
        }
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn lines(&self) -> Vec<usize> {
        self.text().split('\n').map(|l| l.chars().count()).collect()
    }
}

fn apply<S: TextStore>(store: &mut S, op: &Op) {
    match op {
        Op::Move(t) => {
            store.move_edit_point(*t);
        }
        Op::Insert(c) => store.insert_char(*c).unwrap(),
        Op::InsertText(s) => store.insert_text(s).unwrap(),
        Op::Backspace => {
            store.delete_backward();
        }
    }
}

fn check_against_model<S: TextStore>(store: &S, model: &Model) {
    assert_eq!(store.read_all(), model.text());
    assert_eq!(store.len(), model.chars.len());
    assert_eq!(store.edit_point(), model.point);
    let lines = model.lines();
    assert_eq!(store.line_count(), lines.len());
    let mut offset = 0;
    for (row, len) in lines.iter().enumerate() {
        assert_eq!(store.line_start(row), offset, "line_start({row})");
        assert_eq!(store.line_len(row), *len, "line_len({row})");
        assert_eq!(store.line_of(offset), row, "line_of({offset})");
        assert_eq!(store.line_length_at(offset + len), *len);
        offset += len + 1;
    }
}

proptest! {
    #[test]
    fn round_trip(s in text_strategy()) {
        prop_assert_eq!(GapBuffer::new(&s).unwrap().read_all(), s.clone());
        prop_assert_eq!(RopeStore::new(&s).read_all(), s);
    }

    #[test]
    fn insert_then_delete_is_identity(s in text_strategy(), c in any::<char>()) {
        let mut gap = GapBuffer::new(&s).unwrap();
        gap.insert_char(c).unwrap();
        prop_assert_eq!(gap.delete_backward(), Some(c));
        prop_assert_eq!(gap.read_all(), s.clone());

        let mut rope = RopeStore::new(&s);
        rope.insert_char(c).unwrap();
        prop_assert_eq!(rope.delete_backward(), Some(c));
        prop_assert_eq!(rope.read_all(), s);
    }

    #[test]
    fn relocation_never_alters_content(s in text_strategy(), frac in 0.0f64..=1.0) {
        let len = s.chars().count();
        let o = ((len as f64) * frac) as usize;
        let mut gap = GapBuffer::new(&s).unwrap();
        prop_assert_eq!(gap.move_edit_point(o), o);
        prop_assert_eq!(gap.read_all(), s.clone());
        let mut rope = RopeStore::new(&s);
        prop_assert_eq!(rope.move_edit_point(o), o);
        prop_assert_eq!(rope.read_all(), s);
    }

    #[test]
    fn edit_sequences_match_reference(
        s in text_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut model = Model::new(&s);
        let mut gap = GapBuffer::new(&s).unwrap();
        let mut rope = RopeStore::new(&s);
        for op in &ops {
            model.apply(op);
            apply(&mut gap, op);
            apply(&mut rope, op);
        }
        check_against_model(&gap, &model);
        check_against_model(&rope, &model);
    }
}

#[test]
fn insert_at_offset() {
    let mut b = GapBuffer::new("ab").unwrap();
    b.move_edit_point(1);
    b.insert_char('X').unwrap();
    assert_eq!(b.read_all(), "aXb");
}

#[test]
fn line_length_cases() {
    let b = GapBuffer::new("ab\ncd").unwrap();
    assert_eq!(b.line_length_at(0), 2);
    assert_eq!(b.line_length_at(4), 2);
}
