use super::*;

#[test]
fn backend_url_defaults_to_relative_api_base() {
    assert_eq!(backend_url_with_base(None, "/risks"), "/api/risks");
    assert_eq!(backend_url_with_base(None, "risks"), "/api/risks");
    assert_eq!(backend_url_with_base(None, ""), "/api");
}

#[test]
fn agent_url_defaults_to_relative_agent_base() {
    assert_eq!(agent_url("/chat"), "/agent/chat");
    assert_eq!(agent_url("chat"), "/agent/chat");
}

#[test]
fn backend_url_honors_absolute_override() {
    assert_eq!(
        backend_url_with_base(Some("http://localhost:3001"), "/templates"),
        "http://localhost:3001/templates"
    );
    assert_eq!(
        backend_url_with_base(Some("http://localhost:3001/"), "templates"),
        "http://localhost:3001/templates"
    );
}
