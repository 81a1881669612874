//! Browser entry point mounting the tag trends app.

use tag_trends::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
