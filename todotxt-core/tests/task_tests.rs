// Behaviour of `Task` on complete todo.txt lines.

use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;
use todotxt_core::{KindSet, Priority, Task, Token, TokenKind, date::today};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_equals() {
    let a = Task::new(1, "Test abcd");
    let b = Task::new(1, "Test abcd");
    let c = Task::new(1, "Test abcd ");
    let d = Task::new(2, "Test abcd");
    assert_eq!(a, b);
    assert_ne!(b, c);
    assert_ne!(b, d);
}

#[test]
fn test_equals_after_edits() {
    let mut a = Task::new(1, "Test");
    a.set_threshold_date("2013-12-12");
    assert_eq!(a, Task::new(1, "Test t:2013-12-12"));
}

#[test]
fn test_hidden() {
    assert!(!Task::new(0, "Test h:1").is_visible());
    assert!(Task::new(0, "Test").is_visible());
    assert!(!Task::new(0, "h:1").is_visible());
    assert!(Task::new(0, "Test h:10").is_visible());
    assert!(Task::new(0, "Test H:1").is_visible());
}

#[test]
fn test_completion() {
    let raw_text = "Test";
    let mut t = Task::new(0, raw_text);
    t.mark_complete(today());
    assert!(t.is_completed());
    t.mark_incomplete();
    assert!(!t.is_completed());
    assert_eq!(t.in_file_format(), raw_text);
}

#[test]
fn test_completion_with_prepend_date() {
    let mut t = Task::with_creation_date(0, "Test", today());
    let raw_text = t.in_file_format();
    assert_eq!(t.creation_date(), Some(today()));
    t.mark_complete(today());
    assert!(t.is_completed());
    assert_eq!(t.creation_date(), Some(today()));
    t.mark_incomplete();
    assert!(!t.is_completed());
    assert_eq!(t.in_file_format(), raw_text);
}

#[test]
fn test_prepend_date_keeps_existing_one() {
    let t = Task::with_creation_date(0, "2020-01-01 Test", day(2021, 1, 1));
    insta::assert_snapshot!(t.in_file_format(), @"2020-01-01 Test");
    let t = Task::with_creation_date(0, "Test", day(2021, 1, 1));
    insta::assert_snapshot!(t.in_file_format(), @"2021-01-01 Test");
    let t = Task::with_creation_date(0, "(A) Test", day(2021, 1, 1));
    insta::assert_snapshot!(t.in_file_format(), @"2021-01-01 (A) Test");
    let t = Task::with_creation_date(0, "", day(2021, 1, 1));
    assert_eq!(t.tokens(), &[Token::creation_date("2021-01-01")]);
}

#[test]
fn test_completion_with_priority1() {
    let mut t = Task::new(0, "(A) Test");
    assert_eq!(t.priority(), Priority::A);
    let expected_tokens = vec![Token::new(TokenKind::Priority, "(A) "), Token::text("Test")];
    assert_eq!(t.tokens(), expected_tokens.as_slice());
    t.mark_complete(today());
    assert!(t.is_completed());
    t.set_priority(Priority::B);
    t.mark_incomplete();
    assert!(!t.is_completed());
    assert_eq!(t.priority(), Priority::B);
    assert_eq!(t.in_file_format(), "(B) Test");
}

#[test]
fn test_completion_with_priority2() {
    let raw_text = "(A) Test";
    let mut t = Task::new(0, raw_text);
    t.update(raw_text);
    assert_eq!(t.priority(), Priority::A);
    t.mark_complete(today());
    assert!(t.is_completed());
    t.mark_incomplete();
    assert!(!t.is_completed());
    assert_eq!(t.priority(), Priority::A);
    assert_eq!(t.in_file_format(), "(A) Test");
}

#[test]
fn test_mark_unmark_round_trip() {
    let lines = [
        "Test",
        "(A) Test",
        "2020-01-01 Test +list @tag",
        "(C) Test t:2020-02-02",
        "2020-01-01 (C) Test t:2020-02-02",
        " leading space",
        "",
    ];
    for line in lines {
        let mut t = Task::new(0, line);
        t.mark_complete(day(2021, 3, 4));
        assert!(t.is_completed());
        assert_eq!(t.completion_date(), Some(day(2021, 3, 4)));
        t.mark_incomplete();
        assert_eq!(t.in_file_format(), line);
    }
}

#[test]
fn test_mark_complete_matches_tokenizer() {
    let mut t = Task::new(0, "2020-01-01 (A) Test");
    t.mark_complete(day(2021, 3, 4));
    insta::assert_snapshot!(t.in_file_format(), @"x 2021-03-04 2020-01-01 (A) Test");
    let reparsed = Task::new(0, &t.in_file_format());
    assert_eq!(t.tokens(), reparsed.tokens());
}

#[test]
fn test_priority() {
    let mut t = Task::new(0, "(C) Test");
    assert_eq!(t.priority(), Priority::C);
    t.set_priority(Priority::A);
    assert_eq!(t.priority(), Priority::A);
    t.set_priority(Priority::None);
    assert_eq!(t.priority(), Priority::None);
    let mut t = Task::new(0, "Test");
    assert_eq!(t.priority(), Priority::None);
    t.set_priority(Priority::A);
    assert_eq!(t.priority(), Priority::A);
    assert_eq!(t.in_file_format(), "(A) Test");
    t.set_priority(Priority::None);
    assert_eq!(t.priority(), Priority::None);
    assert_eq!(t.in_file_format(), "Test");
}

#[test]
fn test_creation_date_then_priority() {
    let t = Task::new(0, "2020-01-01 (A) Test");
    let expected_tokens = vec![
        Token::creation_date("2020-01-01"),
        Token::new(TokenKind::Priority, "(A) "),
        Token::text("Test"),
    ];
    assert_eq!(t.tokens(), expected_tokens.as_slice());
    assert_eq!(t.priority(), Priority::A);
    assert_eq!(t.creation_date(), Some(day(2020, 1, 1)));
}

#[test]
fn test_set_priority_while_completed_keeps_field_order() {
    let mut t = Task::with_creation_date(0, "Test", day(2020, 1, 1));
    t.mark_complete(day(2020, 1, 2));
    t.set_priority(Priority::B);
    t.mark_incomplete();
    assert_eq!(t.in_file_format(), "2020-01-01 (B) Test");
    assert_eq!(t.priority(), Priority::B);
    assert_eq!(t.creation_date(), Some(day(2020, 1, 1)));
    let reparsed = Task::new(0, &t.in_file_format());
    assert_eq!(t.tokens(), reparsed.tokens());
}

#[test]
fn test_set_priority_on_dated_task() {
    let mut t = Task::new(0, "2020-01-01 Test");
    t.set_priority(Priority::C);
    insta::assert_snapshot!(t.in_file_format(), @"2020-01-01 (C) Test");
    t.set_priority(Priority::None);
    insta::assert_snapshot!(t.in_file_format(), @"2020-01-01 Test");
}

#[test]
fn test_priority_round_trip() {
    let mut t = Task::new(0, "(C) Test");
    t.set_priority(Priority::A);
    t.set_priority(Priority::None);
    assert_eq!(t.in_file_format(), "Test");
}

#[test]
fn test_priority_in_body_is_text() {
    let t = Task::new(0, "Test (A)");
    assert_eq!(t.priority(), Priority::None);
}

#[test]
fn test_completed_priority() {
    let t = Task::new(0, "x 1111-11-11 (A) Test");
    let expected_tokens = vec![
        Token::completed(),
        Token::completed_date("1111-11-11"),
        Token::new(TokenKind::Priority, "(A) "),
        Token::text("Test"),
    ];
    assert_eq!(t.tokens(), expected_tokens.as_slice());
    assert!(t.is_completed());
    assert_eq!(t.priority(), Priority::A);
}

#[test]
fn test_remove_tag() {
    let mut t = Task::new(0, "Milk @@errands");
    t.remove_tag("@errands");
    assert_eq!(t.in_file_format(), "Milk @@errands");
    t.remove_tag("@@errands");
    assert_eq!(t.in_file_format(), "Milk");
    assert_eq!(t.in_screen_format(&KindSet::empty()), "Milk");
    let mut t = Task::new(0, "Milk @@errands +supermarket");
    t.remove_tag("@@errands");
    assert_eq!(t.in_file_format(), "Milk +supermarket");
}

#[test]
fn test_remove_list_and_missing_tag() {
    let mut t = Task::new(0, "+home Paint the fence @weekend");
    t.remove_tag("+home");
    insta::assert_snapshot!(t.in_file_format(), @"Paint the fence @weekend");
    t.remove_tag("fence");
    insta::assert_snapshot!(t.in_file_format(), @"Paint the fence @weekend");
    t.remove_tag("@week");
    insta::assert_snapshot!(t.in_file_format(), @"Paint the fence @weekend");
}

#[test]
fn test_add_tag() {
    let mut t = Task::new(0, "Milk");
    t.add_tag("+supermarket");
    t.add_tag("@errands");
    t.add_tag("@errands");
    t.add_tag("two words");
    assert_eq!(t.in_file_format(), "Milk +supermarket @errands");
    assert_eq!(t.lists().into_iter().collect::<Vec<_>>(), vec!["+supermarket"]);
    assert_eq!(t.tags().into_iter().collect::<Vec<_>>(), vec!["@errands"]);
}

#[test]
fn test_tags_and_lists() {
    let t = Task::new(0, "Call @phone +family @@errands rec:1d @phone");
    assert_eq!(
        t.tags().into_iter().collect::<Vec<_>>(),
        vec!["@@errands", "@phone"]
    );
    assert_eq!(t.lists().into_iter().collect::<Vec<_>>(), vec!["+family"]);
}

#[test]
fn test_recurrence() {
    let t1 = Task::new(0, "Test");
    let t2 = Task::new(0, "Test rec:1d");
    assert_eq!(t1.recurrence_pattern(), None);
    assert_eq!(t2.recurrence_pattern(), Some("1d"));
}

#[test]
fn test_threshold() {
    let t1 = Task::new(0, "t:2013-12-12 Test");
    let t2 = Task::new(0, "Test t:2013-12-12");
    let expected = vec![
        Token::new(TokenKind::ThresholdDate, "2013-12-12"),
        Token::white_space(" "),
        Token::text("Test"),
    ];
    assert_eq!(t1.tokens(), expected.as_slice());
    assert_eq!(t1.threshold_date_text(""), "2013-12-12");
    assert_eq!(t2.threshold_date_text(""), "2013-12-12");
    assert_eq!(t2.threshold_date(), Some(day(2013, 12, 12)));
    let mut t3 = Task::new(0, "Test");
    assert_eq!(t3.threshold_date(), None);
    assert_eq!(t3.threshold_date_text("none"), "none");
    t3.set_threshold_date("2013-12-12");
    assert_eq!(t3.in_file_format(), "Test t:2013-12-12");
}

#[test]
fn test_threshold_replace_and_remove() {
    let mut t = Task::new(0, "t:2013-12-12 Test");
    t.set_threshold_date("2014-01-01");
    assert_eq!(t.in_file_format(), "t:2014-01-01 Test");
    t.set_threshold_date("someday");
    assert_eq!(t.in_file_format(), "t:2014-01-01 Test");
    t.set_threshold_date("");
    assert_eq!(t.in_file_format(), "Test");
    t.set_threshold_date("");
    assert_eq!(t.in_file_format(), "Test");
}

#[test]
fn test_in_future() {
    let t = Task::new(0, "Test t:2020-01-02");
    assert!(t.in_future_at(day(2020, 1, 1)));
    assert!(!t.in_future_at(day(2020, 1, 2)));
    assert!(!Task::new(0, "Test").in_future());
    let tomorrow = today() + Duration::days(1);
    let t = Task::new(0, &format!("Test t:{}", tomorrow.format("%Y-%m-%d")));
    assert!(t.in_future());
}

#[test]
fn test_invalid_threshold_date() {
    let t1 = Task::new(0, "Test t:2013-11-31");
    assert!(!t1.in_future());
    assert_eq!(t1.threshold_date(), None);
    assert_eq!(t1.threshold_date_text(""), "2013-11-31");
}

#[test]
fn test_invalid_due_date() {
    let t1 = Task::new(0, "Test due:2013-11-31");
    assert_eq!(t1.due_date(), None);
    assert_eq!(t1.due_date_text(), Some("2013-11-31"));
    let t2 = Task::new(0, "Test due:2013-11-30");
    assert_eq!(t2.due_date(), Some(day(2013, 11, 30)));
}

#[test]
fn test_invalid_create_date() {
    let t1 = Task::new(0, "2013-11-31 Test");
    assert_eq!(t1.relative_age(), Some("2013-11-31".to_string()));
    assert_eq!(t1.creation_date(), None);
}

#[test]
fn test_relative_age() {
    let t = Task::new(0, "2020-01-01 Test");
    assert_eq!(t.relative_age_at(day(2020, 1, 4)), Some("3 days ago".to_string()));
    assert_eq!(Task::new(0, "Test").relative_age(), None);
}

#[test]
fn test_invalid_complete_date() {
    let t1 = Task::new(0, "x 2013-11-31 Test");
    assert_eq!(t1.completion_date_text(), Some("2013-11-31"));
    assert_eq!(t1.completion_date(), None);
}

#[test]
fn test_parse_text() {
    let t1 = Task::new(0, "abcd");
    assert_eq!(t1.tokens(), &[Token::text("abcd")]);
}

#[test]
fn test_round_trip() {
    let lines = [
        "x 2020-01-02 2020-01-01 (A) Call mom +family @phone due:2020-01-05 t:2020-01-03 rec:1w",
        "(B)\t2020-01-01  spaced\tout  ",
        "@@errands @ + t: h:1 rec:",
        "x",
        "",
    ];
    for line in lines {
        assert_eq!(Task::new(0, line).in_file_format(), line);
    }
}

#[test]
fn test_screen_format_polarity() {
    let t = Task::new(0, "x 2020-01-02 (A) Milk @@errands +supermarket t:2020-01-03");
    assert_eq!(t.in_screen_format(&KindSet::empty()), t.in_file_format());
    assert_eq!(t.in_screen_format(&KindSet::all()), "");
    assert_eq!(t.in_screen_format(&KindSet::from_bits(!0)), "");
    let hidden = KindSet::from_bits(
        TokenKind::Completed.flag()
            | TokenKind::CompletedDate.flag()
            | TokenKind::Tag.flag()
            | TokenKind::ThresholdDate.flag(),
    );
    insta::assert_snapshot!(t.in_screen_format(&hidden), @"(A) Milk +supermarket");
}
