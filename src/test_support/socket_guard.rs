//! Mock API server startup that tolerates sandboxes without localhost sockets.

use std::net::TcpListener;
use std::panic::Location;

use wiremock::MockServer;

/// Set to `1`/`true`/`yes` to fail instead of skipping when sockets are unavailable.
pub const REQUIRE_SOCKETS_ENV_VAR: &str = "CASELAW_REQUIRE_SOCKET_TESTS";

fn sockets_required() -> bool {
    std::env::var(REQUIRE_SOCKETS_ENV_VAR)
        .is_ok_and(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

/// Starts a wiremock server, or returns `None` so the calling test can bail out.
#[track_caller]
pub fn start_mock_server_or_skip() -> impl std::future::Future<Output = Option<MockServer>> {
    let caller = Location::caller();
    let bindable = TcpListener::bind("127.0.0.1:0").is_ok();
    if !bindable {
        let message = format!(
            "[mock-api] cannot bind a localhost socket for the test at {}:{}",
            caller.file(),
            caller.line()
        );
        assert!(!sockets_required(), "{message}; {REQUIRE_SOCKETS_ENV_VAR} is set");
        eprintln!("{message}; skipping");
    }
    async move {
        if bindable {
            Some(MockServer::start().await)
        } else {
            None
        }
    }
}
