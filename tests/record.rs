mod common;

use anyhow::bail;
use pomo::cli::{CliConfig, CliError, Command, Context};
use pomo::client::{ClientError, DateFilter, PomoClient};
use pomo::config::ClientConfig;
use pomo::notify::Notifier;
use pomo::timer::Pacer;

use common::TestServer;

struct NoPacer;

impl Pacer for NoPacer {
    fn wait(&mut self) {}
}

struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn notify(&self, _title: &str, _body: &str) -> anyhow::Result<()> {
        bail!("notify-send exited with status 1")
    }
}

#[test]
fn test_failed_notification_keeps_recorded_session() {
    let server = TestServer::start();
    let client = PomoClient::new(&ClientConfig {
        base_url: server.base_url(),
        timeout_seconds: 5,
    })
    .unwrap();
    let config = CliConfig {
        notify: true,
        ..Default::default()
    };
    let mut ctx = Context {
        config: &config,
        client: &client,
        notifier: &FailingNotifier,
        pacer: NoPacer,
        out: Vec::new(),
    };

    let err = ctx
        .run(&Command::Record {
            name: "deep-work".into(),
            minutes: 0,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        CliError::Client(ClientError::Notification(ref msg)) if msg.contains("status 1")
    ));

    let data = client
        .list_sessions(Some("deep-work"), &DateFilter::default())
        .unwrap();
    assert_eq!(data.sessions().len(), 1);
    assert_eq!(data.sessions()[0].name, "deep-work");
    assert_eq!(data.total_duration(), 0);
}
