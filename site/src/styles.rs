//! CSS for the landing page.
//!
//! The page is rendered once with a single global `<style>` block, in both
//! the browser build and the pre-rendered export.
//!
//! # Palette
//!
//! - `#1A1A1A` charcoal background
//! - `#D4AF37` gold accent
//! - `#C0C0C0` silver body text
//!
//! Serif headings use Cormorant Garamond, body text uses Inter, both loaded
//! from Google Fonts via [`FONT_STYLESHEET_URL`].

/// Google Fonts stylesheet for Cormorant Garamond and Inter.
pub const FONT_STYLESHEET_URL: &str = "https://fonts.googleapis.com/css2?family=Cormorant+Garamond:wght@400;700&family=Inter:wght@400;500&display=swap";

/// Complete stylesheet. The font `@import` must stay the first rule.
pub const SITE_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Cormorant+Garamond:wght@400;700&family=Inter:wght@400;500&display=swap');

:root {
    --bg-charcoal: #1A1A1A;
    --bg-black: #000000;
    --gold: #D4AF37;
    --gold-faint: rgba(212, 175, 55, 0.2);
    --silver: #C0C0C0;
    --text-light: #d1d5db;
    --text-mid: #9ca3af;
    --text-dim: #6b7280;
    --font-serif: 'Cormorant Garamond', serif;
    --font-sans: 'Inter', sans-serif;
    --container-max: 1280px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
}

a {
    text-decoration: none;
}

.font-serif {
    font-family: var(--font-serif);
}

.font-sans {
    font-family: var(--font-sans);
}

.page {
    background: var(--bg-charcoal);
    color: var(--silver);
    font-family: var(--font-sans);
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.accent {
    color: var(--gold);
}

/* Subtle gold grid behind the hero */
.bg-grid-pattern {
    background-image:
        linear-gradient(rgba(212, 175, 55, 0.05) 1px, transparent 1px),
        linear-gradient(90deg, rgba(212, 175, 55, 0.05) 1px, transparent 1px);
    background-size: 2rem 2rem;
}

/* Icons are remote SVG images drawn in black; recolor with filters */
.icon {
    display: block;
}

.icon-lg {
    width: 32px;
    height: 32px;
    filter: invert(1);
}

.icon-md {
    width: 40px;
    height: 40px;
    margin-bottom: 16px;
    filter: invert(72%) sepia(46%) saturate(583%) hue-rotate(6deg) brightness(92%);
}

/* Header */
.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: rgba(26, 26, 26, 0.8);
    backdrop-filter: blur(4px);
    -webkit-backdrop-filter: blur(4px);
    border-bottom: 1px solid var(--gold-faint);
}

.header-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding-top: 16px;
    padding-bottom: 16px;
}

.brand {
    font-family: var(--font-serif);
    font-size: 1.5rem;
    font-weight: 700;
    color: #ffffff;
    letter-spacing: 0.1em;
}

.desktop-nav {
    display: none;
    gap: 32px;
}

.nav-link {
    color: var(--text-light);
    font-family: var(--font-serif);
    font-size: 1.125rem;
    letter-spacing: 0.05em;
    transition: color 0.3s;
}

.nav-link:hover {
    color: var(--gold);
}

.menu-toggle {
    position: relative;
    z-index: 50;
    background: none;
    border: none;
    padding: 0;
    cursor: pointer;
}

/* Mobile overlay */
.mobile-overlay {
    position: fixed;
    inset: 0;
    z-index: 40;
    background: var(--bg-charcoal);
    transition: transform 0.3s ease-in-out;
}

.translate-x-0 {
    transform: translateX(0);
}

.translate-x-full {
    transform: translateX(100%);
}

.mobile-overlay-inner {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    height: 100%;
    padding-top: 80px;
}

.mobile-nav {
    display: flex;
    flex-direction: column;
    gap: 32px;
    text-align: center;
}

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 80px 24px 0;
    background: var(--bg-black);
}

.hero-grid,
.hero-fade {
    position: absolute;
    inset: 0;
}

.hero-grid {
    opacity: 0.1;
}

.hero-fade {
    background: linear-gradient(to top, var(--bg-charcoal), transparent, transparent);
}

.hero-content {
    position: relative;
    z-index: 10;
}

.hero-title {
    font-family: var(--font-serif);
    font-size: 3rem;
    font-weight: 800;
    color: #ffffff;
    line-height: 1.25;
    margin: 0 0 16px;
}

.hero-subtitle {
    font-size: 1.25rem;
    color: var(--text-light);
    max-width: 48rem;
    margin: 0 auto;
}

.btn-gold {
    display: inline-block;
    margin-top: 40px;
    background: var(--gold);
    color: var(--bg-charcoal);
    font-weight: 700;
    font-size: 1.125rem;
    padding: 12px 32px;
    border-radius: 2px;
    transition: all 0.3s;
}

.btn-gold:hover {
    opacity: 0.9;
    transform: scale(1.05);
}

/* Sections */
.section {
    padding: 96px 0;
}

.section-charcoal {
    background: var(--bg-charcoal);
}

.section-black {
    background: var(--bg-black);
}

.section-head {
    text-align: center;
    margin-bottom: 64px;
}

.section-title {
    font-family: var(--font-serif);
    font-size: 2.25rem;
    font-weight: 700;
    color: #ffffff;
    margin: 0 0 24px;
}

.section-intro {
    max-width: 42rem;
    margin: 0 auto;
    font-size: 1.125rem;
    color: var(--text-mid);
}

.divider {
    width: 96px;
    height: 1px;
    background: var(--gold);
    margin: 0 auto 40px;
}

.about-body {
    max-width: 48rem;
    margin: 0 auto;
    font-size: 1.125rem;
    line-height: 1.625;
    color: var(--text-light);
    text-align: center;
}

.card-grid {
    display: grid;
    gap: 40px;
}

.card {
    border: 1px solid var(--gold-faint);
    padding: 32px;
    border-radius: 8px;
    text-align: center;
    background: var(--bg-charcoal);
}

.card-title {
    font-family: var(--font-serif);
    font-size: 1.5rem;
    font-weight: 600;
    color: var(--gold);
    margin: 0 0 12px;
}

.card-text {
    color: var(--text-mid);
    margin: 0;
}

.contact-grid {
    max-width: 56rem;
    margin: 0 auto;
    display: grid;
    gap: 40px;
    text-align: center;
}

.contact-item {
    display: flex;
    flex-direction: column;
    align-items: center;
}

.contact-title {
    font-family: var(--font-serif);
    font-size: 1.25rem;
    font-weight: 600;
    color: #ffffff;
    margin: 0 0 8px;
}

.contact-value {
    color: var(--text-light);
    margin: 0;
    transition: color 0.3s;
}

.contact-line {
    display: block;
}

a.contact-value:hover {
    color: var(--gold);
}

/* Footer */
.site-footer {
    background: var(--bg-black);
    border-top: 1px solid var(--gold-faint);
    padding: 24px 0;
}

.footer-inner {
    text-align: center;
    color: var(--text-dim);
}

.footer-inner p {
    margin: 0;
}

.footer-credit {
    margin-top: 8px !important;
    font-size: 0.875rem;
}

.footer-credit a {
    color: inherit;
    transition: color 0.3s;
}

.footer-credit a:hover {
    color: var(--gold);
}

/* Breakpoints */
@media (min-width: 640px) {
    .section {
        padding: 128px 0;
    }
}

@media (min-width: 768px) {
    .desktop-nav {
        display: flex;
    }

    .menu-toggle,
    .mobile-overlay {
        display: none;
    }

    .hero-title {
        font-size: 4.5rem;
    }

    .hero-subtitle {
        font-size: 1.5rem;
    }

    .section-title {
        font-size: 3rem;
    }

    .about-body {
        font-size: 1.25rem;
    }

    .card-grid {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }

    .contact-grid {
        grid-template-columns: repeat(3, minmax(0, 1fr));
    }
}

@media (min-width: 1024px) {
    .card-grid {
        grid-template-columns: repeat(3, minmax(0, 1fr));
    }
}
"#;

/// Content-Security-Policy for the pre-rendered document.
///
/// The static export runs no scripts; images come from the icon CDN or
/// `data:` URLs (favicon), fonts from Google.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https://cdn.jsdelivr.net; style-src 'self' 'unsafe-inline' https://fonts.googleapis.com; font-src https://fonts.gstatic.com; script-src 'none'; connect-src 'none';";
