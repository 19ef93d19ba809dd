use std::sync::{Arc, Mutex};

use eventline::scenarios::UrlPayload;
use eventline::{FailureCause, Handler, HandlerError, HandlerFn, HandlerRef, Registry};

type Calls = Arc<Mutex<Vec<(&'static str, usize, String)>>>;

/// String-keyed registry, as a caller without an event enum would use it.
type Channels = Registry<&'static str, (), UrlPayload>;

fn tracked(calls: &Calls, tag: &'static str) -> HandlerRef<(), UrlPayload> {
    let calls = Arc::clone(calls);
    HandlerFn::arc(tag, move |_: &(), payload: &UrlPayload| {
        let addr = payload as *const UrlPayload as usize;
        calls.lock().unwrap().push((tag, addr, payload.url.clone()));
        Ok(())
    })
}

#[test]
fn progress_subscribers_share_one_payload_in_order() {
    let calls = Calls::default();
    let reg = Channels::new();
    reg.subscribe("progress", tracked(&calls, "A"));
    reg.subscribe("progress", tracked(&calls, "B"));

    let payload = UrlPayload::new("http://x/main.csv");
    let report = reg.fire("progress", &(), &payload);
    assert!(report.is_clean());

    let calls = calls.lock().unwrap();
    let expected_addr = &payload as *const UrlPayload as usize;
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], ("A", expected_addr, "http://x/main.csv".to_string()));
    assert_eq!(calls[1], ("B", expected_addr, "http://x/main.csv".to_string()));
}

#[test]
fn end_without_subscribers_invokes_nothing() {
    let reg = Channels::new();
    let report = reg.fire("end", &(), &UrlPayload::new(""));
    assert_eq!(report.invoked, 0);
    assert!(report.failures.is_empty());
}

#[test]
fn unsubscribed_warn_handler_is_not_invoked() {
    let calls = Calls::default();
    let reg = Channels::new();
    let a = tracked(&calls, "A");
    reg.subscribe("warn", Arc::clone(&a));
    assert!(reg.unsubscribe(&"warn", &a));

    let report = reg.fire("warn", &(), &UrlPayload::new("http://x/a"));
    assert_eq!(report.invoked, 0);
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn fire_before_unsubscribe_still_sees_handler() {
    let calls = Calls::default();
    let reg = Channels::new();
    let a = tracked(&calls, "A");
    reg.subscribe("start", Arc::clone(&a));

    let _ = reg.fire("start", &(), &UrlPayload::new("http://x/1"));
    reg.unsubscribe(&"start", &a);
    let _ = reg.fire("start", &(), &UrlPayload::new("http://x/2"));

    let urls: Vec<String> = calls.lock().unwrap().iter().map(|c| c.2.clone()).collect();
    assert_eq!(urls, vec!["http://x/1"]);
}

struct Strict;

impl Handler<(), UrlPayload> for Strict {
    fn handle(&self, _: &(), payload: &UrlPayload) -> Result<(), HandlerError> {
        if payload.url.starts_with("https://") {
            Ok(())
        } else {
            Err(HandlerError::rejected(format!("insecure url {}", payload.url)))
        }
    }

    fn name(&self) -> &str {
        "strict"
    }
}

#[test]
fn failing_subscriber_does_not_blind_the_rest() {
    let calls = Calls::default();
    let reg = Channels::new();
    reg.subscribe("progress", Arc::new(Strict));
    reg.subscribe("progress", tracked(&calls, "after"));

    let report = reg.fire("progress", &(), &UrlPayload::new("http://x/main.csv"));
    assert_eq!(report.invoked, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].subscriber, "strict");
    assert_eq!(
        report.failures[0].cause,
        FailureCause::Returned(HandlerError::rejected("insecure url http://x/main.csv"))
    );
    assert_eq!(calls.lock().unwrap().len(), 1);
}
