#![allow(dead_code)]

pub use hookshell_test_utils::builders;
pub use hookshell_test_utils::fake_launcher;
pub use hookshell_test_utils::{capture_logs, wait_until, with_timeout};
