use leptos::prelude::*;

use crate::content::footer;

/// Copyright line and credit link.
#[component]
pub fn Footer(
    /// Copyright year
    year: i32,
) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <p>{format!("© {} {}", year, footer::RIGHTS)}</p>
                <p class="footer-credit">
                    <a href=footer::CREDIT_HREF target="_blank" rel="noopener noreferrer">
                        {footer::CREDIT_LABEL}
                    </a>
                </p>
            </div>
        </footer>
    }
}
