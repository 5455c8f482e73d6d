// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Tracing hooks wired into every generated operation

use tracing::{debug, warn};

pub(crate) fn log_request(request: &reqwest::Request) {
    debug!(method = %request.method(), url = %request.url(), "Sending request");
}

pub(crate) fn log_response(result: &reqwest::Result<reqwest::Response>) {
    match result {
        Ok(response) if response.status().is_success() => {
            debug!(status = %response.status(), url = %response.url(), "Response received");
        }
        Ok(response) => {
            warn!(
                status = %response.status(),
                url = %response.url(),
                "Upstream returned non-success status"
            );
        }
        Err(e) => {
            let url = e.url().map(|u| u.as_str()).unwrap_or_default();
            warn!(url, error = %e, "Request failed");
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(level: Level, f: impl FnOnce()) -> String {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        String::from_utf8(out.0.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_requests_log_at_debug_only() {
        let url: reqwest::Url = "http://stub.test/api/v2/space/9/folder".parse().unwrap();
        let request = reqwest::Request::new(reqwest::Method::GET, url);

        assert!(capture(Level::INFO, || log_request(&request)).is_empty());

        let debug = capture(Level::DEBUG, || log_request(&request));
        assert!(debug.contains("DEBUG"), "{debug}");
        assert!(debug.contains("/api/v2/space/9/folder"), "{debug}");
    }
}
