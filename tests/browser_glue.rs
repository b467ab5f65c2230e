//! Source checks for the `csr`-only DOM glue, which native tests cannot run.

use std::fs;

fn browser_source() -> String {
    fs::read_to_string("src/util/browser.rs").unwrap_or_else(|e| panic!("read src/util/browser.rs: {e}"))
}

#[test]
fn download_url_is_revoked_from_a_timer() {
    let source = browser_source();
    let click = source.find("anchor.click()").unwrap_or_else(|| panic!("download anchor is never clicked"));
    let timer = source.find("Timeout::new(").unwrap_or_else(|| panic!("no deferred revoke"));
    let revoke = source.find("revoke_object_url").unwrap_or_else(|| panic!("object URL is never revoked"));

    assert!(click < timer, "timer must be armed after the click");
    assert!(timer < revoke, "revoke must run inside the timer callback");
    assert_eq!(source.matches("revoke_object_url").count(), 1, "revoke must not also run synchronously");
}
