//! Helpers for tests that need a local mock HTTP server.

/// Some sandboxes refuse to bind even loopback sockets; tests that need a
/// mock server call this first and bail out quietly when binding is
/// impossible.
pub fn should_skip_httpmock() -> bool {
    if can_bind_localhost() {
        return false;
    }
    eprintln!("skipping mock-server test: binding to localhost is not permitted");
    true
}

fn can_bind_localhost() -> bool {
    match std::net::TcpListener::bind(("127.0.0.1", 0)) {
        Ok(listener) => {
            drop(listener);
            true
        }
        Err(err) if err.kind() == std::io::ErrorKind::PermissionDenied => false,
        Err(err) => panic!("failed to bind localhost for mock-server tests: {err}"),
    }
}
