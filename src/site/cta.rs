//! src/site/cta.rs
use super::form::FormSnapshot;
use super::signup_fragment;

/// Closing call to action with the second signup form.
pub fn render_cta(form: &FormSnapshot) -> String {
    let signup = signup_fragment(
        form,
        "cta-form",
        "🎉 You're on the list! Check your email soon.",
    );

    format!(
        r#"<section class="cta" aria-labelledby="cta-heading">
    <h2 id="cta-heading">Ready to Experience Real Social Media?</h2>
    <p>Join thousands on the waitlist for early access to MyCandid. Be part of
        the movement to reclaim authentic social connections.</p>
    {signup}
</section>"#
    )
}
