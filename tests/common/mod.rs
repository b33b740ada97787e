use assert_cmd::Command;

pub fn newsdesk_cmd() -> Command {
    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.env_remove("NEWSDESK_ROOT");
    cmd
}
