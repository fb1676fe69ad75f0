use gcn_circulars_core::{body_is_valid, email_is_auto_reply, subject_is_valid, FieldValidity};

#[test]
fn empty_fields_are_unevaluated_not_invalid() {
    assert_eq!(subject_is_valid(""), FieldValidity::Empty);
    assert_eq!(body_is_valid(""), FieldValidity::Empty);
}

#[test]
fn any_non_empty_body_is_valid() {
    assert_eq!(body_is_valid("x"), FieldValidity::Valid);
    assert_eq!(body_is_valid("multi\nline\nreport"), FieldValidity::Valid);
}

#[test]
fn subject_without_a_known_keyword_is_invalid() {
    assert_eq!(
        subject_is_valid("weather balloon launch schedule"),
        FieldValidity::Invalid
    );
}

#[test]
fn subject_with_a_keyword_is_valid() {
    assert_eq!(
        subject_is_valid("GRB 230101A: afterglow detection"),
        FieldValidity::Valid
    );
    assert_eq!(
        subject_is_valid("swift follow-up of a new source"),
        FieldValidity::Valid
    );
    assert!(subject_is_valid("IceCube-230101A candidate").is_valid());
    assert!(!subject_is_valid("").is_valid());
}

#[test]
fn keyword_match_is_not_word_boundary_aware() {
    assert_eq!(subject_is_valid("GRBIT telemetry summary"), FieldValidity::Valid);
}

#[test]
fn auto_reply_invalidates_even_with_a_keyword() {
    assert!(email_is_auto_reply("Re: GRB 230101A"));
    assert_eq!(subject_is_valid("Re: GRB 230101A"), FieldValidity::Invalid);
    assert_eq!(
        subject_is_valid("Fwd: IceCube-230101A observations"),
        FieldValidity::Invalid
    );
}

#[test]
fn vacation_and_delivery_failures_are_auto_replies() {
    assert!(email_is_auto_reply("Out of office: back next week"));
    assert!(email_is_auto_reply("Returned mail: see transcript for details"));
    assert!(email_is_auto_reply("R\u{e9}ponse_automatique: absence"));
}

#[test]
fn the_opaque_marker_is_matched_literally() {
    assert!(email_is_auto_reply("[saxzlcnkgzmfpbhvyzsbub] whatever follows"));
}
