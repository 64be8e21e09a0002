// Kavárna U Kódu landing page - browser entry point
// Developed with ☕ by the Kavárna U Kódu team

use kavarna_site::sections::Page;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("mounting landing page");
    leptos::mount::mount_to_body(|| view! { <Page /> });
}
