//! Page handlers: Greeting, Status, and Demo-Form.
//!
//! Each handler renders a complete HTML page. All of them run behind the
//! access log middleware installed by the router.

pub mod demo;
pub mod greeting;
pub mod layout;
pub mod status;

pub use demo::{demo_list, demo_submit, DEMO_PATH};
pub use greeting::greeting;
pub use status::system_status;
