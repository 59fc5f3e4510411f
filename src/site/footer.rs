//! src/site/footer.rs

pub fn render_footer() -> String {
    r#"<footer class="site-footer">
    <p class="footer-brand">MyCandid</p>
    <p class="footer-tagline">The Authentic Social Media Platform for Real Connections</p>
    <p class="footer-legal">© 2026 MyCandid. All rights reserved. Real moments,
        real connections, authentic social media.</p>
</footer>"#
        .to_string()
}
