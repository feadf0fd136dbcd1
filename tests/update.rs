mod common;

use common::SharedBuf;
use logmagix::update::parse_index_response;
use logmagix::{Logger, StaticSource, Updater, Version, VersionSource};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts lookups so tests can prove the index is asked only once.
#[derive(Default)]
struct Counting {
    calls: AtomicUsize,
    version: Option<&'static str>,
}

impl VersionSource for Counting {
    fn latest_version(&self, _package: &str) -> Result<String, logmagix::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.version
            .map(ToString::to_string)
            .ok_or_else(|| logmagix::Error::VersionFetch("connection refused".into()))
    }
}

fn v(s: &str) -> Version {
    s.parse().unwrap()
}

#[test]
fn versions_order_numerically() {
    assert!(v("1.10.0") > v("1.9.9"));
    assert!(v("2.0") > v("1.99.99"));
    assert!(v("0.2.1") > v("0.2.0"));
    assert_eq!(v("1.2"), v("1.2.0"));
    assert_eq!(v("v1.3.0-rc1"), v("1.3.0"));
    assert_eq!(v("1.4.0+build5").to_string(), "1.4.0");
}

#[test]
fn invalid_versions_are_rejected() {
    assert!(matches!("abc".parse::<Version>(), Err(logmagix::Error::InvalidVersion(_))));
    assert!("1..2".parse::<Version>().is_err());
    assert!("".parse::<Version>().is_err());
}

#[test]
fn newer_remote_means_update() {
    let updater = Updater::new("tool", StaticSource(Some("1.1.0".into()))).current("1.0.5");

    assert!(updater.update_available());
    assert_eq!(updater.remote_version(), Some(&v("1.1.0")));
    assert_eq!(updater.current_version(), Some(v("1.0.5")));
    assert_eq!(
        updater.install_hint().as_deref(),
        Some("cargo install tool --version 1.1.0")
    );
}

#[test]
fn same_or_older_remote_means_no_update() {
    let same = Updater::new("tool", StaticSource(Some("1.0.0".into()))).current("1.0.0");
    let older = Updater::new("tool", StaticSource(Some("0.9.0".into()))).current("1.0.0");

    assert!(!same.update_available());
    assert!(!older.update_available());
    assert_eq!(older.install_hint(), None);
}

#[test]
fn fetch_failure_means_unknown() {
    let updater = Updater::new("tool", Counting::default()).current("1.0.0");

    assert!(!updater.update_available());
    assert_eq!(updater.remote_version(), None);
    assert_eq!(updater.install_hint(), None);
}

#[test]
fn unparseable_remote_means_unknown() {
    let updater = Updater::new("tool", StaticSource(Some("latest".into()))).current("1.0.0");
    assert!(!updater.update_available());
}

#[test]
fn remote_is_fetched_once() {
    let updater = Updater::new(
        "tool",
        Counting {
            version: Some("3.0.0"),
            ..Counting::default()
        },
    )
    .current("2.0.0");

    assert!(updater.update_available());
    assert!(updater.update_available());
    let _ = updater.install_hint();

    assert_eq!(updater.source_calls(), 1);
}

#[test]
fn failed_fetch_is_not_retried() {
    let updater = Updater::new("tool", Counting::default());

    let _ = updater.remote_version();
    let _ = updater.remote_version();

    assert_eq!(updater.source_calls(), 1);
}

#[test]
fn check_reports_once() {
    let buf = SharedBuf::default();
    let logger = Logger::builder()
        .terminal_writer(buf.clone())
        .colors(false)
        .done()
        .build();
    let updater = Updater::new("tool", StaticSource(Some("2.0.0".into())))
        .current("1.0.0")
        .install_command("upgrade {package}@{version}");

    assert!(!updater.checked());
    updater.check_for_updates(&logger);
    updater.check_for_updates(&logger);
    assert!(updater.checked());

    let lines = buf.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[WARNING] -> A new version of tool is available: 1.0.0 -> 2.0.0"));
    assert!(lines[1].ends_with("[INFO] -> Update with: upgrade tool@2.0.0"));
}

#[test]
fn check_when_current_logs_debug_only() {
    let buf = SharedBuf::default();
    let updater = Updater::new("tool", StaticSource(Some("1.0.0".into()))).current("1.0.0");
    let logger = Logger::builder()
        .terminal_writer(buf.clone())
        .colors(false)
        .done()
        .build_checked(&updater);

    let lines = buf.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("[DEBUG] -> Already running latest version (1.0.0)"));
    assert!(updater.checked());
    drop(logger);
}

#[test]
fn index_response_parsing() {
    let body = r#"{"info": {"name": "tool", "version": "4.2.0"}, "releases": {}}"#;
    assert_eq!(parse_index_response(body).unwrap(), "4.2.0");
    assert!(parse_index_response(r#"{"info": {}}"#).is_err());
    assert!(parse_index_response("<html>").is_err());
}

trait SourceCalls {
    fn source_calls(&self) -> usize;
}

impl SourceCalls for Updater<Counting> {
    fn source_calls(&self) -> usize {
        self.source().calls.load(Ordering::SeqCst)
    }
}

#[cfg(feature = "update")]
mod index {
    use logmagix::{IndexSource, Updater, VersionSource};
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use std::time::Duration;

    /// Answers one request with `status` and `body`, returning the URL template.
    fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/pypi/{{package}}/json")
    }

    fn source(url: &str) -> IndexSource {
        IndexSource::new(url, Duration::from_secs(5))
    }

    #[test]
    fn published_version_is_read() {
        let url = serve_once("200 OK", r#"{"info": {"name": "tool", "version": "9.9.9"}}"#);
        assert_eq!(source(&url).latest_version("tool").unwrap(), "9.9.9");
    }

    #[test]
    fn newer_published_version_means_update() {
        let url = serve_once("200 OK", r#"{"info": {"version": "9.9.9"}}"#);
        let updater = Updater::new("tool", source(&url)).current("1.0.0");

        assert!(updater.update_available());
        assert_eq!(updater.remote_version().map(ToString::to_string).as_deref(), Some("9.9.9"));
    }

    #[test]
    fn server_error_is_a_fetch_failure() {
        let url = serve_once("500 Internal Server Error", "oops");

        let err = source(&url).latest_version("tool").unwrap_err();
        assert!(matches!(err, logmagix::Error::VersionFetch(_)));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn server_error_means_unknown() {
        let url = serve_once("500 Internal Server Error", "oops");
        let updater = Updater::new("tool", source(&url)).current("1.0.0");

        assert!(!updater.update_available());
        assert_eq!(updater.remote_version(), None);
    }

    #[test]
    fn malformed_body_is_a_fetch_failure() {
        let url = serve_once("200 OK", "<html>not json</html>");

        let err = source(&url).latest_version("tool").unwrap_err();
        assert!(matches!(err, logmagix::Error::VersionFetch(_)));
    }

    #[test]
    fn unreachable_index_is_a_fetch_failure() {
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let url = format!("http://{addr}/pypi/{{package}}/json");

        let updater = Updater::new("tool", source(&url)).current("1.0.0");
        assert!(!updater.update_available());
    }

    #[test]
    fn silent_index_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (_stream, _) = listener.accept().unwrap();
            thread::sleep(Duration::from_secs(3));
        });

        let slow = IndexSource::new(format!("http://{addr}/{{package}}"), Duration::from_millis(200));
        let err = slow.latest_version("tool").unwrap_err();
        assert!(matches!(err, logmagix::Error::VersionFetch(_)));
    }

    #[test]
    fn url_template_takes_package_name() {
        let index = IndexSource::new("https://index.test/{package}/json", Duration::from_secs(1));
        assert_eq!(index.url_for("tool"), "https://index.test/tool/json");
    }
}
