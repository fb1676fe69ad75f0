//! Subject triage probe for the circulars core crate.
//!
//! # Responsibility
//! - Verify `gcn_circulars_core` linkage from a plain executable.
//! - Run one-shot subject classification for quick local checks.

use gcn_circulars_core::{
    core_version, default_log_level, email_is_auto_reply, init_logging, parse_event_from_subject,
    subject_is_valid, subject_placeholder, FieldValidity, LogSink,
};
use log::info;

fn main() {
    let level = std::env::var("GCN_CIRCULARS_LOG")
        .unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&level, LogSink::Stderr) {
        eprintln!("logging unavailable: {err}");
    }

    let subject = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if subject.is_empty() {
        println!("gcn_circulars_core version={}", core_version());
        println!("usage: gcn_circulars_cli <subject line>");
        println!(
            "example: gcn_circulars_cli \"{}\"",
            subject_placeholder(chrono::Utc::now())
        );
        return;
    }

    let event = parse_event_from_subject(&subject);
    let auto_reply = email_is_auto_reply(&subject);
    let validity = subject_is_valid(&subject);
    info!(
        "event=subject_triage module=cli status=ok matched={} auto_reply={}",
        event.is_some(),
        auto_reply
    );

    println!("subject={subject}");
    println!("event={}", event.as_deref().unwrap_or("-"));
    println!("auto_reply={auto_reply}");
    println!(
        "valid={}",
        match validity {
            FieldValidity::Valid => "true",
            FieldValidity::Invalid => "false",
            FieldValidity::Empty => "unevaluated",
        }
    );
}
