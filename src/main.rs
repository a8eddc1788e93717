//! Browser entry point mounting the site.

use dongpo_site::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
